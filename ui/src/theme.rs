//! Static visual theme, injected once at the application root.
//!
//! Components only reference CSS custom properties (`--color-primary`, `--card-radius`, ...)
//! and the shared stylesheet; the concrete values live here.

use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub card_radius_px: u32,
    pub card_hover_lift_px: u32,
    pub card_hover_shadow: &'static str,
}

pub const NEWS_THEME: Theme = Theme {
    primary: "#19bdb7",
    secondary: "#ff9800",
    card_radius_px: 12,
    card_hover_lift_px: 4,
    card_hover_shadow: "0 6px 20px rgba(0, 0, 0, 0.1)",
};

impl Theme {
    /// `:root` block exposing the theme as CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --color-primary: {};\n  --color-secondary: {};\n  --card-radius: {}px;\n  --card-hover-lift: -{}px;\n  --card-hover-shadow: {};\n}}\n",
            self.primary,
            self.secondary,
            self.card_radius_px,
            self.card_hover_lift_px,
            self.card_hover_shadow,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        NEWS_THEME
    }
}

/// Provides the theme through context and loads the shared stylesheet.
/// Desktop builds additionally inline the stylesheet themselves.
#[component]
pub fn ThemeRoot(children: Element) -> Element {
    let provided: Option<Theme> = try_use_context::<Theme>();
    let theme = use_context_provider(move || provided.unwrap_or_default());
    let variables = theme.css_variables();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Style { "{variables}" }
        {children}
    }
}
