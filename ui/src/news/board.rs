//! Client-held state of the news listing and every transition it goes through.
//!
//! The board is a plain value: the view keeps it in a `Signal` and drives it from a
//! coroutine, tests drive it directly. Two independent state machines live here:
//!
//! - fetch: `idle → loading → idle`, once per parameter change
//! - overlay: `closed → open → closed`, per card click / dismissal
//!
//! Every fetch is tagged with a [`Ticket`]; only the newest ticket's response is applied,
//! so a slow response to an old filter can never overwrite a newer result set.

use api::{Category, FetchError, NewsItem, NewsPage, NewsQuery};

use crate::core::sequence::{Sequence, Ticket};

/// What happened when a fetch response reached the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list. `refetch` is set when the server reported fewer
    /// pages than the current page, which was pulled back into range.
    Applied { items: usize, refetch: bool },
    /// Latest request failed; the previous list stays on screen.
    Failed,
    /// A newer request was issued since; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsBoard {
    items: Vec<NewsItem>,
    page: u32,
    total_pages: u32,
    page_size: u32,
    search_input: String,
    search: String,
    category: Option<Category>,
    loading: bool,
    selected: Option<NewsItem>,
    overlay_open: bool,
    fetches: Sequence,
    keystrokes: Sequence,
}

impl NewsBoard {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            page_size: page_size.max(1),
            search_input: String::new(),
            search: String::new(),
            category: None,
            loading: false,
            selected: None,
            overlay_open: false,
            fetches: Sequence::default(),
            keystrokes: Sequence::default(),
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Text currently in the search box (may not be committed yet).
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Search text the current result set was requested with.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<&NewsItem> {
        self.selected.as_ref()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn query(&self) -> NewsQuery {
        NewsQuery::new(self.page, self.page_size)
            .with_search(self.search.clone())
            .with_category(self.category)
    }

    /// Record a keystroke. The returned ticket must be passed to [`commit_search`]
    /// once the debounce delay elapses.
    ///
    /// [`commit_search`]: NewsBoard::commit_search
    pub fn edit_search(&mut self, text: impl Into<String>) -> Ticket {
        self.search_input = text.into();
        self.keystrokes.issue()
    }

    /// Commit the search box if no keystroke arrived after `ticket`.
    /// Returns `true` when the query changed and a fetch is needed.
    pub fn commit_search(&mut self, ticket: Ticket) -> bool {
        if !self.keystrokes.is_current(ticket) || self.search_input == self.search {
            return false;
        }
        self.search = self.search_input.clone();
        self.page = 1;
        true
    }

    /// Change the search text and commit it in one step.
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        let ticket = self.edit_search(text);
        self.commit_search(ticket)
    }

    /// Returns `true` when the query changed and a fetch is needed.
    pub fn set_category(&mut self, category: Option<Category>) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Jump to `page`, clamped into `[1, total_pages]`.
    /// Returns `true` when the query changed and a fetch is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Mark the board as loading and hand out the ticket + query for the new request.
    pub fn begin_fetch(&mut self) -> (Ticket, NewsQuery) {
        self.loading = true;
        (self.fetches.issue(), self.query())
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<NewsPage, FetchError>) -> FetchOutcome {
        if !self.fetches.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(NewsPage {
                mut data,
                pagination,
            }) => {
                data.truncate(self.page_size as usize);
                self.items = data;
                self.total_pages = pagination.pages.max(1);

                let refetch = self.page > self.total_pages;
                if refetch {
                    self.page = self.total_pages;
                }
                FetchOutcome::Applied {
                    items: self.items.len(),
                    refetch,
                }
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Open the overlay on the card at `index` of the current list.
    pub fn select(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.selected = Some(item.clone());
                self.overlay_open = true;
                true
            }
            None => false,
        }
    }

    /// Dismiss the overlay. The selected record stays around until the next selection.
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }
}

impl Default for NewsBoard {
    fn default() -> Self {
        Self::new(api::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MediaKind, Pagination};

    fn item(n: usize) -> NewsItem {
        NewsItem {
            id: format!("n{n}"),
            title: format!("Story {n}"),
            content: format!("Body {n}"),
            category: "Technology".into(),
            tags: vec!["a".into(), "b".into(), "c".into()],
            media_url: Some(format!("/uploads/{n}.jpg")),
            media_type: Some(MediaKind::Image),
            published_at: "2024-03-05T10:00:00.000Z".into(),
        }
    }

    fn page_of(count: usize, pages: u32) -> NewsPage {
        NewsPage {
            data: (0..count).map(item).collect(),
            pagination: Pagination {
                pages,
                ..Pagination::default()
            },
        }
    }

    fn loaded(pages: u32) -> NewsBoard {
        let mut board = NewsBoard::new(9);
        let (ticket, _) = board.begin_fetch();
        board.apply(ticket, Ok(page_of(9, pages)));
        board
    }

    #[test]
    fn technology_page_two_scenario() {
        let mut board = loaded(5);
        assert!(board.set_category(Some(Category::Technology)));
        assert!(board.set_page(2));

        let (ticket, query) = board.begin_fetch();
        assert!(board.is_loading());
        assert_eq!(query.to_query_string(), "page=2&limit=9&category=Technology");

        let outcome = board.apply(ticket, Ok(page_of(9, 5)));
        assert_eq!(
            outcome,
            FetchOutcome::Applied {
                items: 9,
                refetch: false
            }
        );
        assert!(!board.is_loading());
        assert_eq!(board.items().len(), 9);
        assert_eq!(board.page(), 2);
        assert_eq!(board.total_pages(), 5);
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        let mut board = loaded(3);
        let before = board.items().to_vec();

        assert!(board.set_page(2));
        let (ticket, _) = board.begin_fetch();
        let outcome = board.apply(ticket, Err(FetchError::Status(503)));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(board.items(), before.as_slice());
        assert!(!board.is_loading());
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut board = loaded(4);

        board.set_category(Some(Category::Sports));
        let (slow, _) = board.begin_fetch();
        board.set_category(Some(Category::Health));
        let (fast, _) = board.begin_fetch();

        assert!(matches!(
            board.apply(fast, Ok(page_of(2, 1))),
            FetchOutcome::Applied { items: 2, .. }
        ));
        assert_eq!(board.apply(slow, Ok(page_of(9, 6))), FetchOutcome::Stale);
        assert_eq!(board.items().len(), 2);
        assert_eq!(board.total_pages(), 1);
    }

    #[test]
    fn loading_holds_until_latest_request_settles() {
        let mut board = NewsBoard::new(9);
        let (old, _) = board.begin_fetch();
        let (new, _) = board.begin_fetch();

        assert_eq!(board.apply(old, Err(FetchError::Status(500))), FetchOutcome::Stale);
        assert!(board.is_loading());

        board.apply(new, Ok(page_of(1, 1)));
        assert!(!board.is_loading());
    }

    #[test]
    fn filter_changes_reset_to_first_page() {
        let mut board = loaded(5);
        board.set_page(4);

        assert!(board.set_category(Some(Category::Business)));
        assert_eq!(board.page(), 1);

        board.set_page(3);
        assert!(board.set_search("merger"));
        assert_eq!(board.page(), 1);
        assert_eq!(board.query().to_query_string(), "page=1&limit=9&search=merger&category=Business");
    }

    #[test]
    fn unchanged_filters_do_not_refetch() {
        let mut board = loaded(5);
        assert!(!board.set_category(None));
        assert!(!board.set_search(""));
        assert!(!board.set_page(1));
    }

    #[test]
    fn debounced_search_commits_only_the_last_keystroke() {
        let mut board = loaded(5);
        board.set_page(3);

        let r = board.edit_search("r");
        let ru = board.edit_search("ru");
        let rust = board.edit_search("rust");
        assert_eq!(board.search_input(), "rust");
        assert_eq!(board.search(), "");

        assert!(!board.commit_search(r));
        assert!(!board.commit_search(ru));
        assert_eq!(board.page(), 3);

        assert!(board.commit_search(rust));
        assert_eq!(board.search(), "rust");
        assert_eq!(board.page(), 1);
        assert!(!board.commit_search(rust));
    }

    #[test]
    fn page_is_clamped_to_known_range() {
        let mut board = loaded(5);
        assert!(board.set_page(99));
        assert_eq!(board.page(), 5);
        assert!(board.set_page(0));
        assert_eq!(board.page(), 1);
    }

    #[test]
    fn shrinking_result_set_pulls_page_back_into_range() {
        let mut board = loaded(5);
        board.set_page(5);

        let (ticket, _) = board.begin_fetch();
        let outcome = board.apply(ticket, Ok(page_of(3, 2)));
        assert_eq!(
            outcome,
            FetchOutcome::Applied {
                items: 3,
                refetch: true
            }
        );
        assert_eq!(board.page(), 2);
        assert_eq!(board.total_pages(), 2);
    }

    #[test]
    fn empty_result_set_still_has_one_page() {
        let mut board = NewsBoard::new(9);
        let (ticket, _) = board.begin_fetch();
        board.apply(ticket, Ok(page_of(0, 0)));
        assert!(board.items().is_empty());
        assert_eq!(board.total_pages(), 1);
        assert_eq!(board.page(), 1);
    }

    #[test]
    fn oversized_pages_are_truncated() {
        let mut board = NewsBoard::new(9);
        let (ticket, _) = board.begin_fetch();
        board.apply(ticket, Ok(page_of(12, 2)));
        assert_eq!(board.items().len(), 9);
    }

    #[test]
    fn selecting_a_card_opens_that_exact_record() {
        let mut board = loaded(1);
        assert!(board.select(4));
        assert!(board.overlay_open());
        assert_eq!(board.selected(), Some(&item(4)));

        board.close_overlay();
        assert!(!board.overlay_open());
        assert_eq!(board.selected(), Some(&item(4)));

        assert!(!board.select(42));
        assert_eq!(board.selected(), Some(&item(4)));
    }

    #[test]
    fn overlay_survives_a_refresh() {
        let mut board = loaded(2);
        board.select(0);
        board.set_page(2);
        let (ticket, _) = board.begin_fetch();
        board.apply(ticket, Ok(page_of(3, 2)));

        assert!(board.overlay_open());
        assert_eq!(board.selected().map(|i| i.id.as_str()), Some("n0"));
    }
}
