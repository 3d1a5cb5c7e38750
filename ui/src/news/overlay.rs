use api::{ApiConfig, MediaKind, NewsItem};
use dioxus::prelude::*;

use crate::core::format;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMedia {
    pub src: String,
    pub kind: MediaKind,
}

/// Full record as shown in the detail overlay. Only the date is reformatted.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayModel {
    pub title: String,
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    pub media: Option<OverlayMedia>,
    pub published: String,
}

impl OverlayModel {
    pub fn from_item(item: &NewsItem, config: &ApiConfig) -> Self {
        let media = item
            .media_url()
            .and_then(|url| config.resolve_media_url(url))
            .map(|src| OverlayMedia {
                src,
                kind: item.media_kind(),
            });

        Self {
            title: item.title.clone(),
            body: item.content.clone(),
            category: item.category.clone(),
            tags: item.tags.clone(),
            media,
            published: format::format_published_date(&item.published_at),
        }
    }
}

fn dismisses_overlay(key: &Key) -> bool {
    *key == Key::Escape
}

/// Modal bound to (selected item, open flag). Nothing renders until a card was picked.
#[component]
pub fn NewsDetailOverlay(
    item: Option<NewsItem>,
    open: bool,
    config: ApiConfig,
    on_close: EventHandler<()>,
) -> Element {
    let Some(item) = item else {
        return rsx! {};
    };
    if !open {
        return rsx! {};
    }

    let OverlayModel {
        title,
        body,
        category,
        tags,
        media,
        published,
    } = OverlayModel::from_item(&item, &config);

    rsx! {
        div {
            class: "news-dialog__backdrop",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if dismisses_overlay(&evt.key()) {
                    on_close.call(());
                }
            },

            div {
                class: "news-dialog",
                role: "dialog",
                aria_modal: "true",
                tabindex: -1,
                // Focus starts on the clicked card, outside this subtree.
                onmounted: move |evt| async move {
                    if let Err(err) = evt.set_focus(true).await {
                        tracing::debug!(?err, "could not focus news dialog");
                    }
                },
                onclick: move |evt| evt.stop_propagation(),

                header { class: "news-dialog__header",
                    h2 { class: "news-dialog__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "news-dialog__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                hr { class: "news-dialog__divider" }

                div { class: "news-dialog__content",
                    match media {
                        Some(OverlayMedia { src, kind: MediaKind::Image }) => rsx! {
                            img { class: "news-dialog__media", src: "{src}", alt: "{title}" }
                        },
                        Some(OverlayMedia { src, kind: MediaKind::Video }) => rsx! {
                            video { class: "news-dialog__media", src: "{src}", controls: true }
                        },
                        None => rsx! {},
                    }

                    div { class: "news-dialog__chips",
                        span { class: "chip chip--primary", "{category}" }
                        for tag in tags.iter() {
                            span { class: "chip chip--outlined", "{tag}" }
                        }
                    }
                    p { class: "news-dialog__body", "{body}" }
                    span { class: "news-dialog__date", "Published on {published}" }
                }
            }
        }
    }
}
