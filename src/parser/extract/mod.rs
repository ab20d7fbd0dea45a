pub mod description;
pub mod header;
pub mod labeled;
pub mod level;
pub mod units;

use scraper::ElementRef;

use crate::output::CourseRecord;

/// Build a full record from one course block. `None` when no header can be found;
/// every other field is best-effort.
pub fn extract_all(block: ElementRef<'_>, source_url: &str) -> Option<CourseRecord> {
    let header::Header {
        subject,
        number,
        title,
    } = header::extract(block)?;

    let (units, instructors) = units::extract(block);
    let level_group = level::extract(block);
    let labeled = labeled::extract(block);
    let description = description::extract(block);

    Some(CourseRecord {
        code: format!("{} {}", subject, number),
        subject,
        number,
        title,
        units,
        level_group,
        instructors,
        prerequisites_raw: labeled.prerequisites,
        recommended_preparation_raw: labeled.recommended_preparation,
        enrollment_comments_raw: labeled.enrollment_comments,
        repeat_comments_raw: labeled.repeat_comments,
        cross_listed_raw: labeled.cross_listed,
        description,
        source_url: source_url.to_string(),
    })
}

// ── Tests ──
