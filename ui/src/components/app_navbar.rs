use dioxus::prelude::*;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand header shared by every platform.
///
/// Platform crates own their `Route` enum, so navigation links are passed in as
/// `children` (typically `Link { class: "navbar__link", to: Route::News {}, .. }`).
#[component]
pub fn AppNavbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Newsgrid" }
                    }
                    span { class: "navbar__brand-subtitle", "Headlines, filtered your way" }
                }
                nav { class: "navbar__links", {children} }
            }
        }
    }
}
