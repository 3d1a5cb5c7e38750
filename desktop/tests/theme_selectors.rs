#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the news view renders with remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, instead of shipping an unstyled
  grid or an invisible dialog in packaged (embedded) desktop builds.

How it works:
- The theme is embedded with `include_str!` (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup in `ui/src/news/`.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-news__title",
    // Filters
    ".news-filters",
    ".news-filters__input",
    ".news-filters__select",
    // Loading
    ".news__loading",
    ".news__spinner",
    // Grid & cards
    ".news-grid",
    ".news-grid__empty",
    ".news-card",
    ".news-card__media",
    ".news-card__title",
    ".news-card__excerpt",
    ".news-card__chips",
    ".news-card__date",
    // Chips
    ".chip--primary",
    ".chip--outlined",
    // Pagination
    ".news-pagination",
    ".news-pagination__page",
    ".news-pagination__page--current",
    ".news-pagination__step",
    ".news-pagination__gap",
    // Detail dialog
    ".news-dialog__backdrop",
    ".news-dialog",
    ".news-dialog__title",
    ".news-dialog__close",
    ".news-dialog__media",
    ".news-dialog__body",
    ".news-dialog__date",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 600px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn excerpt_is_clamped_to_three_lines() {
    let start = THEME_CSS
        .find(".news-card__excerpt {")
        .expect("excerpt rule present");
    let rule = &THEME_CSS[start..start + THEME_CSS[start..].find('}').unwrap_or(0)];
    assert!(
        rule.contains("-webkit-line-clamp: 3"),
        "Card excerpt must be clamped to three lines"
    );
}
