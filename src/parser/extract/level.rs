use scraper::ElementRef;

use crate::output::LevelGroup;

// Substrings of the repeater ids wrapping each division's course list.
const MARKERS: &[(&str, LevelGroup)] = &[
    ("rptrlowerdivisioncourses", LevelGroup::LowerDivision),
    ("rptrupperdivisioncourses", LevelGroup::UpperDivision),
    ("rptrgraduatedivisioncourses", LevelGroup::GraduateDivision),
];

/// Nearest enclosing division container, walking outward from the block.
pub fn extract(block: ElementRef<'_>) -> Option<LevelGroup> {
    block
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find_map(|el| group_for_id(el.value().attr("id")?))
}

fn group_for_id(id: &str) -> Option<LevelGroup> {
    let id = id.to_lowercase();
    MARKERS
        .iter()
        .find(|(marker, _)| id.contains(marker))
        .map(|(_, group)| *group)
}
