use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::config::INSTRUCTOR_UNITS;
use crate::parser::blocks::{element_text, norm_space};

static UNITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([^)]+)\)\s*(.*)$").unwrap());
static INSTRUCTOR_UNITS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(INSTRUCTOR_UNITS).unwrap());

/// Units string and instructor names from the "(4) Smith, J.; Lee, K." span.
pub fn extract(block: ElementRef<'_>) -> (Option<String>, Vec<String>) {
    let Some(span) = block.select(&INSTRUCTOR_UNITS_SEL).next() else {
        return (None, Vec::new());
    };
    split_units(&element_text(span))
}

fn split_units(text: &str) -> (Option<String>, Vec<String>) {
    let (units, rest) = match UNITS_RE.captures(text) {
        Some(caps) => (Some(norm_space(&caps[1])), norm_space(&caps[2])),
        None => (None, text.to_string()),
    };
    (units, parse_instructors(&rest))
}

fn parse_instructors(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if text.eq_ignore_ascii_case("STAFF") {
        return vec!["STAFF".to_string()];
    }
    text.split(';')
        .map(norm_space)
        .filter(|name| !name.is_empty())
        .collect()
}
