use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::config::COURSE_ID_AND_TITLE;
use crate::parser::blocks::{element_text, norm_space};

// "PSTAT 100. Data Science Concepts"
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z]{2,10})\s+([0-9]{1,3}[A-Z0-9]{0,6})\s*\.\s*(.+?)\s*$").unwrap()
});
static CODE_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Z]{2,10})\s+([0-9]{1,3}[A-Z0-9]{0,6})\s*$").unwrap());
// Anywhere in the text; title runs up to the units "(" or end of text.
static HEADER_ANYWHERE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{2,10})\s+([0-9]{1,3}[A-Z0-9]{0,6})\s*\.\s*([^()]+?)\s*(\(|$)").unwrap()
});

static ID_TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COURSE_ID_AND_TITLE).unwrap());
static BOLD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub subject: String,
    pub number: String,
    pub title: String,
}

/// Find (subject, number, title), trying the id/title span, then the first
/// `<b>`, then a scan of the whole block text.
pub fn extract(block: ElementRef<'_>) -> Option<Header> {
    from_id_title(block)
        .or_else(|| from_first_bold(block))
        .or_else(|| from_flat_text(block))
}

fn from_id_title(block: ElementRef<'_>) -> Option<Header> {
    let text = element_text(block.select(&ID_TITLE_SEL).next()?);
    if let Some(h) = match_header(&text) {
        return Some(h);
    }

    // Code and title glued differently, e.g. "PSTAT 100.Data" split across spans
    let (left, right) = text.split_once('.')?;
    let left = norm_space(left);
    let caps = CODE_ONLY_RE.captures(&left)?;
    let title = norm_space(right);
    if title.is_empty() {
        return None;
    }
    Some(Header {
        subject: caps[1].to_string(),
        number: caps[2].to_string(),
        title,
    })
}

fn from_first_bold(block: ElementRef<'_>) -> Option<Header> {
    let bold = block.select(&BOLD_SEL).next()?;
    match_header(&element_text(bold))
}

fn from_flat_text(block: ElementRef<'_>) -> Option<Header> {
    let text = element_text(block);
    let caps = HEADER_ANYWHERE_RE.captures(&text)?;
    let title = norm_space(&caps[3]);
    if title.is_empty() {
        return None;
    }
    Some(Header {
        subject: caps[1].to_string(),
        number: caps[2].to_string(),
        title,
    })
}

fn match_header(text: &str) -> Option<Header> {
    let caps = HEADER_RE.captures(text)?;
    Some(Header {
        subject: caps[1].to_string(),
        number: caps[2].to_string(),
        title: norm_space(&caps[3]),
    })
}
