pub mod blocks;
pub mod extract;

use scraper::Html;
use tracing::debug;

use crate::fetch::Page;
use crate::output::CourseRecord;

/// Records parsed from one page plus the number of blocks that had no header.
#[derive(Debug, Default)]
pub struct PageOutcome {
    pub courses: Vec<CourseRecord>,
    pub skipped: usize,
}

/// First pass: how many blocks on the page have an extractable header.
pub fn count_courses(html: &str) -> usize {
    let document = Html::parse_document(html);
    blocks::course_blocks(&document)
        .into_iter()
        .filter(|b| extract::header::extract(*b).is_some())
        .count()
}

/// Second pass: full extraction. `on_course` fires once per accepted record.
pub fn parse_page(page: &Page, on_course: impl Fn()) -> PageOutcome {
    let document = Html::parse_document(&page.html);
    let mut outcome = PageOutcome::default();

    for (i, block) in blocks::course_blocks(&document).into_iter().enumerate() {
        match extract::extract_all(block, &page.url) {
            Some(course) => {
                outcome.courses.push(course);
                on_course();
            }
            None => {
                debug!("No course header in block {} of {}", i, page.url);
                outcome.skipped += 1;
            }
        }
    }

    outcome
}
