use dioxus::prelude::*;

use crate::core::format;

/// Pages always shown at each end of the control.
const BOUNDARY_COUNT: i64 = 1;
/// Pages shown on each side of the current page.
const SIBLING_COUNT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    StartEllipsis,
    EndEllipsis,
}

/// Windowed page list: first/last page, the current page with its siblings, and
/// ellipses over the gaps. The slot count stays stable as the current page moves.
pub fn page_slots(page: u32, total_pages: u32) -> Vec<PageSlot> {
    let count = i64::from(total_pages.max(1));
    let page = i64::from(page.clamp(1, total_pages.max(1)));

    let start_pages = range(1, BOUNDARY_COUNT.min(count));
    let end_pages = range((count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), count);

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    let mut slots: Vec<PageSlot> = start_pages.into_iter().map(to_page).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        slots.push(PageSlot::StartEllipsis);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        slots.push(to_page(BOUNDARY_COUNT + 1));
    }

    slots.extend(range(siblings_start, siblings_end).into_iter().map(to_page));

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        slots.push(PageSlot::EndEllipsis);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        slots.push(to_page(count - BOUNDARY_COUNT));
    }

    slots.extend(end_pages.into_iter().map(to_page));
    slots
}

fn range(start: i64, end: i64) -> Vec<i64> {
    if end < start {
        Vec::new()
    } else {
        (start..=end).collect()
    }
}

fn to_page(n: i64) -> PageSlot {
    PageSlot::Page(u32::try_from(n).unwrap_or(1))
}

#[component]
pub fn Paginator(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    let slots = page_slots(page, total_pages);
    let at_start = page <= 1;
    let at_end = page >= total_pages;
    let position = format::format_page_position(page, total_pages);

    rsx! {
        nav { class: "news-pagination", aria_label: "{position}",
            button {
                r#type: "button",
                class: "news-pagination__step",
                disabled: at_start,
                onclick: move |_| on_change.call(page.saturating_sub(1)),
                "‹"
            }
            for (index, slot) in slots.into_iter().enumerate() {
                {render_slot(index, slot, page, on_change)}
            }
            button {
                r#type: "button",
                class: "news-pagination__step",
                disabled: at_end,
                onclick: move |_| on_change.call(page.saturating_add(1)),
                "›"
            }
        }
    }
}

fn render_slot(index: usize, slot: PageSlot, current: u32, on_change: EventHandler<u32>) -> Element {
    match slot {
        PageSlot::Page(n) => {
            let is_current = n == current;
            let aria_current = if is_current { "page" } else { "false" };
            rsx! {
                button {
                    key: "page-{n}",
                    r#type: "button",
                    class: format!(
                        "news-pagination__page {}",
                        if is_current { "news-pagination__page--current" } else { "" }
                    ),
                    aria_current: aria_current,
                    onclick: move |_| on_change.call(n),
                    "{n}"
                }
            }
        }
        PageSlot::StartEllipsis | PageSlot::EndEllipsis => rsx! {
            span { key: "gap-{index}", class: "news-pagination__gap", "…" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{EndEllipsis as End, Page as P, StartEllipsis as Start};
    use super::*;

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_slots(1, 1), vec![P(1)]);
        assert_eq!(page_slots(2, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(page_slots(1, 7), vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7)]);
        assert_eq!(page_slots(1, 8), vec![P(1), P(2), P(3), P(4), P(5), End, P(8)]);
    }

    #[test]
    fn every_page_of_a_short_range_is_reachable() {
        for total in 1..=5 {
            for page in 1..=total {
                let pages: Vec<u32> = page_slots(page, total)
                    .into_iter()
                    .filter_map(|slot| match slot {
                        P(n) => Some(n),
                        _ => None,
                    })
                    .collect();
                assert_eq!(pages, (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn long_ranges_window_around_current_page() {
        assert_eq!(
            page_slots(5, 10),
            vec![P(1), Start, P(4), P(5), P(6), End, P(10)]
        );
        assert_eq!(
            page_slots(1, 10),
            vec![P(1), P(2), P(3), P(4), P(5), End, P(10)]
        );
        assert_eq!(
            page_slots(10, 10),
            vec![P(1), Start, P(6), P(7), P(8), P(9), P(10)]
        );
    }

    #[test]
    fn slot_count_is_stable_while_paging() {
        for page in 1..=20 {
            assert_eq!(page_slots(page, 20).len(), 7, "page {page}");
        }
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(page_slots(0, 0), vec![P(1)]);
        assert_eq!(page_slots(9, 3), vec![P(1), P(2), P(3)]);
    }
}
