//! Formatting helpers for presenting news records.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

/// Short publish date like `3/5/2024`, taken in the timestamp's own offset.
///
/// Date-only values (`2024-03-05`) are accepted too. Anything else is shown as-is so a
/// malformed timestamp is still visible rather than silently dropped.
pub fn format_published_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(raw, format_description!("[year]-[month]-[day]")));

    match date {
        Ok(date) => date
            .format(format_description!(
                "[month padding:none]/[day padding:none]/[year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// `Page 2 of 5` style summary for the paginator.
pub fn format_page_position(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {total_pages}")
}
