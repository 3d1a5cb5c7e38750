use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiConfig, Category, FetchError, NewsClient, NewsPage};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::core::sequence::Ticket;
use crate::core::{platform, timing};

use super::{
    FetchOutcome, NewsBoard, NewsDetailOverlay, NewsFilters, NewsGrid, NewsSettings, Paginator,
};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<NewsEvent>>>>;

#[component]
pub fn NewsView() -> Element {
    let provided_client: Option<NewsClient> = try_use_context::<NewsClient>();
    let provided_settings: Option<NewsSettings> = try_use_context::<NewsSettings>();

    let client = use_hook(move || {
        provided_client.unwrap_or_else(|| NewsClient::new(ApiConfig::for_build()))
    });
    let settings = use_hook(move || provided_settings.unwrap_or_default());
    let board = use_signal({
        let page_size = client.config().page_size;
        move || NewsBoard::new(page_size)
    });
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let client = client.clone();
        let sender_slot = sender_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<NewsEvent>| {
            let client = client.clone();
            let sender_slot = sender_slot.clone();
            let mut board = board;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        NewsEvent::Refresh => start_fetch(board, &client, &sender_slot),
                        NewsEvent::SearchInput(text) => {
                            if settings.search_debounce_ms == 0 {
                                if board.with_mut(|b| b.set_search(text)) {
                                    start_fetch(board, &client, &sender_slot);
                                }
                            } else {
                                let ticket = board.with_mut(|b| b.edit_search(text));
                                queue_search_commit(
                                    &sender_slot,
                                    ticket,
                                    settings.search_debounce_ms,
                                );
                            }
                        }
                        NewsEvent::SearchSettled(ticket) => {
                            if board.with_mut(|b| b.commit_search(ticket)) {
                                start_fetch(board, &client, &sender_slot);
                            }
                        }
                        NewsEvent::CategoryChanged(category) => {
                            if board.with_mut(|b| b.set_category(category)) {
                                start_fetch(board, &client, &sender_slot);
                            }
                        }
                        NewsEvent::PageChanged(page) => {
                            if board.with_mut(|b| b.set_page(page)) {
                                start_fetch(board, &client, &sender_slot);
                            }
                        }
                        NewsEvent::Select(index) => {
                            board.with_mut(|b| b.select(index));
                        }
                        NewsEvent::CloseOverlay => board.with_mut(NewsBoard::close_overlay),
                        NewsEvent::Loaded { ticket, result } => {
                            let failure = result.as_ref().err().map(ToString::to_string);
                            let outcome = board.with_mut(|b| b.apply(ticket, result));

                            match outcome {
                                FetchOutcome::Applied { items, refetch } => {
                                    let (page, total_pages) =
                                        board.with(|b| (b.page(), b.total_pages()));
                                    info!(items, page, total_pages, "news page applied");
                                    if refetch {
                                        start_fetch(board, &client, &sender_slot);
                                    }
                                }
                                FetchOutcome::Failed => {
                                    warn!(
                                        error = failure.as_deref().unwrap_or_default(),
                                        "news fetch failed; keeping previous list"
                                    );
                                }
                                FetchOutcome::Stale => {
                                    debug!(
                                        ticket = ticket.value(),
                                        failed = failure.is_some(),
                                        "dropping superseded news response"
                                    );
                                }
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());
    use_hook(move || coroutine.send(NewsEvent::Refresh));

    let send_event = move |event: NewsEvent| coroutine.send(event);

    let snapshot = board();
    let config = client.config().clone();
    let page = snapshot.page();
    let total_pages = snapshot.total_pages();

    rsx! {
        div { class: "news",
            if cfg!(debug_assertions) {
                NewsDiagnostics {
                    loading: snapshot.is_loading(),
                    items: snapshot.items().len(),
                    page,
                    total_pages,
                }
            }

            NewsFilters {
                search: snapshot.search_input().to_string(),
                category: snapshot.category(),
                on_search: move |text| send_event(NewsEvent::SearchInput(text)),
                on_category: move |category| send_event(NewsEvent::CategoryChanged(category)),
            }

            if snapshot.is_loading() {
                div { class: "news__loading", role: "progressbar", aria_label: "Loading news",
                    span { class: "news__spinner" }
                }
            } else {
                NewsGrid {
                    items: snapshot.items().to_vec(),
                    config: config.clone(),
                    on_select: move |index| send_event(NewsEvent::Select(index)),
                }
                div { class: "news__pagination",
                    Paginator {
                        page,
                        total_pages,
                        on_change: move |page| send_event(NewsEvent::PageChanged(page)),
                    }
                }
            }

            NewsDetailOverlay {
                item: snapshot.selected().cloned(),
                open: snapshot.overlay_open(),
                config,
                on_close: move |_| send_event(NewsEvent::CloseOverlay),
            }
        }
    }
}

/// Debug-build panel mirroring the board's counters.
#[component]
fn NewsDiagnostics(loading: bool, items: usize, page: u32, total_pages: u32) -> Element {
    rsx! {
        aside { class: "news-debug",
            span { class: "news-debug__title", "Debug info" }
            ul {
                li { "Loading: {loading}" }
                li { "News items: {items}" }
                li { "Current Page: {page}" }
                li { "Total Pages: {total_pages}" }
            }
        }
    }
}

fn start_fetch(mut board: Signal<NewsBoard>, client: &NewsClient, sender_slot: &SenderSlot) {
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        warn!("news view has no event channel; skipping fetch");
        return;
    };

    let (ticket, query) = board.with_mut(NewsBoard::begin_fetch);
    debug!(
        ticket = ticket.value(),
        query = %query.to_query_string(),
        "requesting news"
    );

    let client = client.clone();
    platform::spawn_future(async move {
        let result = client.fetch_page(&query).await;
        let _ = sender.unbounded_send(NewsEvent::Loaded { ticket, result });
    });
}

fn queue_search_commit(sender_slot: &SenderSlot, ticket: Ticket, delay_ms: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(NewsEvent::SearchSettled(ticket));
        });
    }
}

#[derive(Debug)]
enum NewsEvent {
    Refresh,
    SearchInput(String),
    SearchSettled(Ticket),
    CategoryChanged(Option<Category>),
    PageChanged(u32),
    Select(usize),
    CloseOverlay,
    Loaded {
        ticket: Ticket,
        result: Result<NewsPage, FetchError>,
    },
}
