use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::DESCRIPTION_CONTAINER;
use crate::parser::blocks::element_text;

static CONTAINER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(DESCRIPTION_CONTAINER).unwrap());
static DIV_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());

// Divs carrying these are label blocks, not the description.
const METADATA_LABELS: &[&str] = &["Prerequisite:", "Recommended Preparation:"];

/// Longest nested div text that isn't a prerequisite/preparation block.
pub fn extract(block: ElementRef<'_>) -> String {
    let container = block.select(&CONTAINER_SEL).next().unwrap_or(block);

    let mut best = String::new();
    let mut best_len = 0;
    for div in container.select(&DIV_SEL) {
        let text = element_text(div);
        if text.is_empty() || METADATA_LABELS.iter().any(|l| text.contains(l)) {
            continue;
        }
        let len = text.chars().count();
        if len > best_len {
            best = text;
            best_len = len;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn description_of(inner: &str) -> String {
        let doc = Html::parse_fragment(&format!(r#"<div class="CourseDisplay">{}</div>"#, inner));
        let sel = Selector::parse("div.CourseDisplay").unwrap();
        extract(doc.select(&sel).next().unwrap())
    }

    #[test]
    fn picks_longest_div_in_container() {
        let got = description_of(
            r#"<div id="ctl00_x_nonchildcourseContainer">
                 <div><i><strong>Prerequisite:</strong> Math 3A.</i></div>
                 <div>Short.</div>
                 <div>Introduction to   probability and statistical inference.</div>
               </div>
               <div>This much longer text sits outside the preferred container and is ignored.</div>"#,
        );
        assert_eq!(got, "Introduction to probability and statistical inference.");
    }

    #[test]
    fn falls_back_to_whole_block() {
        let got = description_of(r#"<div>First text.</div><div>Second, longer text.</div>"#);
        assert_eq!(got, "Second, longer text.");
    }

    #[test]
    fn ties_keep_first() {
        let got = description_of(r#"<div>aaaa</div><div>bbbb</div>"#);
        assert_eq!(got, "aaaa");
    }

    #[test]
    fn never_returns_label_text() {
        let got = description_of(
            r#"<div><strong>Recommended Preparation:</strong> a very long preparation note goes here</div>
               <div><strong>Prerequisite:</strong> another long note that would otherwise win</div>"#,
        );
        assert_eq!(got, "");
        assert!(!got.contains("Prerequisite:") && !got.contains("Recommended Preparation:"));
    }

    #[test]
    fn no_divs_gives_empty() {
        assert_eq!(description_of("<p>Not in a div.</p>"), "");
    }
}
