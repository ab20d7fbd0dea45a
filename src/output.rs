use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Division a course is listed under on its department page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelGroup {
    #[serde(rename = "Lower Division")]
    LowerDivision,
    #[serde(rename = "Upper Division")]
    UpperDivision,
    #[serde(rename = "Graduate Division")]
    GraduateDivision,
}

/// One parsed catalog entry. Field order is the order written to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub subject: String,
    pub number: String,
    pub code: String,
    pub title: String,
    pub units: Option<String>,
    pub level_group: Option<LevelGroup>,
    pub instructors: Vec<String>,
    pub prerequisites_raw: Option<String>,
    pub recommended_preparation_raw: Option<String>,
    pub enrollment_comments_raw: Option<String>,
    pub repeat_comments_raw: Option<String>,
    pub cross_listed_raw: Option<String>,
    pub description: String,
    pub source_url: String,
}

/// Write all records as one indented JSON array.
pub fn write_json(path: &str, courses: &[CourseRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(courses).context("Failed to serialize courses")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}
