use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::COURSE_BLOCK;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static COURSE_BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COURSE_BLOCK).unwrap());

/// Every course container on a page, in document order.
pub fn course_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&COURSE_BLOCK_SEL).collect()
}

/// Collapse whitespace runs to a single space and trim.
pub fn norm_space(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}

/// Flattened text of an element: text nodes joined by spaces, whitespace normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    norm_space(&el.text().collect::<Vec<_>>().join(" "))
}
