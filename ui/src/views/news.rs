use dioxus::prelude::*;

use crate::news::NewsView;

#[component]
pub fn News() -> Element {
    rsx! {
        section { class: "page page-news",
            h1 { class: "page-news__title", "Latest News" }
            NewsView {}
        }
    }
}
