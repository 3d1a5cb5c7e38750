use api::{ApiConfig, NewsItem};
use dioxus::prelude::*;

use crate::core::format;

/// Tags shown on a summary card; the overlay shows all of them.
const CARD_TAG_LIMIT: usize = 2;

/// Everything a summary card displays, derived from one record.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub key: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub published: String,
    pub thumbnail: Option<String>,
}

impl CardModel {
    pub fn from_item(index: usize, item: &NewsItem, config: &ApiConfig) -> Self {
        let key = if item.id.is_empty() {
            format!("item-{index}")
        } else {
            item.id.clone()
        };
        let thumbnail = item
            .has_image()
            .then(|| item.media_url().and_then(|url| config.resolve_media_url(url)))
            .flatten();

        Self {
            key,
            title: item.title.clone(),
            excerpt: item.content.clone(),
            category: item.category.clone(),
            tags: item.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            published: format::format_published_date(&item.published_at),
            thumbnail,
        }
    }
}

#[component]
pub fn NewsGrid(items: Vec<NewsItem>, config: ApiConfig, on_select: EventHandler<usize>) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "news-grid__empty", "No news found." }
        };
    }

    let cards: Vec<CardModel> = items
        .iter()
        .enumerate()
        .map(|(index, item)| CardModel::from_item(index, item, &config))
        .collect();

    rsx! {
        div { class: "news-grid",
            for (index, card) in cards.into_iter().enumerate() {
                NewsCard {
                    key: "{card.key}",
                    card: card.clone(),
                    on_open: move |_| on_select.call(index),
                }
            }
        }
    }
}

#[component]
pub fn NewsCard(card: CardModel, on_open: EventHandler<()>) -> Element {
    let CardModel {
        title,
        excerpt,
        category,
        tags,
        published,
        thumbnail,
        ..
    } = card;

    rsx! {
        article {
            class: "news-card",
            role: "button",
            tabindex: 0,
            onclick: move |_| on_open.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    on_open.call(());
                }
            },

            if let Some(src) = thumbnail {
                img { class: "news-card__media", src: "{src}", alt: "{title}" }
            }

            div { class: "news-card__content",
                h3 { class: "news-card__title", "{title}" }
                p { class: "news-card__excerpt", "{excerpt}" }
                div { class: "news-card__chips",
                    span { class: "chip chip--primary", "{category}" }
                    for tag in tags.iter() {
                        span { class: "chip chip--outlined", "{tag}" }
                    }
                }
                span { class: "news-card__date", "{published}" }
            }
        }
    }
}
