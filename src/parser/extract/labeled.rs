use std::sync::LazyLock;

use scraper::node::Node;
use scraper::{ElementRef, Selector};

use crate::parser::blocks::{element_text, norm_space};

static LABEL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());

/// Free-text annotations introduced by a `<strong>Label:</strong>` inside a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledFields {
    pub prerequisites: Option<String>,
    pub recommended_preparation: Option<String>,
    pub enrollment_comments: Option<String>,
    pub repeat_comments: Option<String>,
    pub cross_listed: Option<String>,
}

impl LabeledFields {
    fn slot(&mut self, label: &str) -> Option<&mut Option<String>> {
        match label {
            "prerequisite" | "prerequisites" => Some(&mut self.prerequisites),
            "recommended preparation" => Some(&mut self.recommended_preparation),
            "enrollment comments" => Some(&mut self.enrollment_comments),
            "repeat comments" => Some(&mut self.repeat_comments),
            "cross-listed" | "crosslisted" => Some(&mut self.cross_listed),
            _ => None,
        }
    }
}

pub fn extract(block: ElementRef<'_>) -> LabeledFields {
    let mut fields = LabeledFields::default();

    for label_el in block.select(&LABEL_SEL) {
        let label = element_text(label_el);
        let label = label.trim_end_matches(':').to_lowercase();
        let Some(slot) = fields.slot(&label) else {
            continue;
        };

        let value = text_after(label_el);
        if !value.is_empty() {
            *slot = Some(value);
        }
    }

    fields
}

/// Text of the siblings following `label_el`, up to the next label or line break.
fn text_after(label_el: ElementRef<'_>) -> String {
    let mut parts = Vec::new();

    for sibling in label_el.next_siblings() {
        match sibling.value() {
            Node::Element(el) if matches!(el.name(), "strong" | "br") => break,
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(sibling) {
                    parts.push(element_text(el));
                }
            }
            Node::Text(text) => parts.push(norm_space(text)),
            Node::Comment(comment) => parts.push(norm_space(comment)),
            _ => {}
        }
    }

    let joined = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    norm_space(&joined)
}
