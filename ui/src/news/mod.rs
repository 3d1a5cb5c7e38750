//! Paginated, filterable news listing with a detail overlay.

mod board;
pub use board::{FetchOutcome, NewsBoard};

mod card;
pub use card::{CardModel, NewsCard, NewsGrid};

mod filters;
pub use filters::{category_from_value, NewsFilters};

mod overlay;
pub use overlay::{NewsDetailOverlay, OverlayMedia, OverlayModel};

mod paginator;
pub use paginator::{page_slots, PageSlot, Paginator};

mod view;
pub use view::NewsView;

/// Quiet period after the last keystroke before the search box is committed.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// View tuning. Platforms may provide one through context; otherwise defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSettings {
    /// `0` commits every keystroke immediately.
    pub search_debounce_ms: u64,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}
