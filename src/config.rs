use std::time::Duration;

/// Course listing pages of the 2022-2023 general catalog.
pub const CATALOG_URLS: &[&str] = &[
    "https://my.sa.ucsb.edu/catalog/2022-2023/CollegesDepartments/ls-intro/stats.aspx?DeptTab=Courses",
    "https://my.sa.ucsb.edu/catalog/2022-2023/CollegesDepartments/ls-intro/econ.aspx?DeptTab=Courses",
    "https://my.sa.ucsb.edu/catalog/2022-2023/CollegesDepartments/ls-intro/math.aspx?DeptTab=Courses",
    "https://my.sa.ucsb.edu/catalog/2022-2023/CollegesDepartments/coe/compsci-engr.aspx?DeptTab=Courses",
    "https://my.sa.ucsb.edu/catalog/2022-2023/CollegesDepartments/coe/ece.aspx?DeptTab=Courses",
];

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; UCSB-Catalog-Scraper/2.1)";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const OUTPUT_PATH: &str = "ucsb_2022_2023_courses.json";

// Catalog markup markers
pub const COURSE_BLOCK: &str = "div.CourseDisplay";
pub const COURSE_ID_AND_TITLE: &str = "span.CourseIdAndTitle";
pub const INSTRUCTOR_UNITS: &str = "span.InstructorUnits";
pub const DESCRIPTION_CONTAINER: &str = "div[id$='nonchildcourseContainer']";
