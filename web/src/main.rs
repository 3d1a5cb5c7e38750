use api::{ApiConfig, NewsClient};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::news::NewsSettings;
use ui::theme::ThemeRoot;
use ui::views::News;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    News {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| NewsClient::new(ApiConfig::for_build()));
    use_context_provider(NewsSettings::default);

    rsx! {
        ThemeRoot {
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::News {}, "News" }
        }
        Outlet::<Route> {}
    }
}
