mod config;
mod fetch;
mod output;
mod parser;

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use fetch::Page;
use output::CourseRecord;

#[derive(Parser)]
#[command(name = "ucsb_catalog_scraper", about = "UCSB 2022-2023 catalog course scraper")]
struct Cli {
    /// Where to write the JSON array of courses
    #[arg(short, long, global = true, default_value = config::OUTPUT_PATH)]
    output: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch catalog pages and extract courses (default)
    Scrape {
        /// Catalog page to fetch instead of the built-in list (repeatable)
        #[arg(long = "url")]
        urls: Vec<String>,
    },
    /// Extract courses from saved catalog HTML files
    Parse {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// List the built-in catalog URLs
    Urls,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let pages = match cli.command {
        None => fetch::fetch_all(config::CATALOG_URLS).await?,
        Some(Commands::Scrape { urls }) if urls.is_empty() => {
            fetch::fetch_all(config::CATALOG_URLS).await?
        }
        Some(Commands::Scrape { urls }) => fetch::fetch_all(urls.as_slice()).await?,
        Some(Commands::Parse { files }) => fetch::read_local(files.as_slice())?,
        Some(Commands::Urls) => {
            for url in config::CATALOG_URLS {
                println!("{}", url);
            }
            return Ok(());
        }
    };

    let (courses, skipped) = process_pages(&pages);
    output::write_json(&cli.output, &courses)?;

    println!("Wrote {} courses -> {}", courses.len(), cli.output);
    println!("Skipped {} non-course CourseDisplay blocks.", skipped);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

/// Count parseable blocks for the progress total, then extract every page.
/// Pages are parsed in parallel; output keeps page order.
fn process_pages(pages: &[Page]) -> (Vec<CourseRecord>, usize) {
    use indicatif::{ProgressBar, ProgressState, ProgressStyle};
    use rayon::prelude::*;

    let total: usize = pages
        .par_iter()
        .map(|p| parser::count_courses(&p.html))
        .sum();
    info!("Found {} course blocks across {} pages", total, pages.len());

    let pb = ProgressBar::new(total.max(1) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Parsed: {pos}/{len} [{bar:30}] {ratio}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("ratio", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = w.write_str(&format_percent(state.fraction()));
            })
            .progress_chars("█░"),
    );

    let outcomes: Vec<_> = pages
        .par_iter()
        .map(|p| parser::parse_page(p, || pb.inc(1)))
        .collect();
    pb.finish();

    let mut courses = Vec::with_capacity(total);
    let mut skipped = 0;
    for (page, outcome) in pages.iter().zip(outcomes) {
        info!(
            "{}: {} courses, {} skipped",
            page.url,
            outcome.courses.len(),
            outcome.skipped
        );
        skipped += outcome.skipped;
        courses.extend(outcome.courses);
    }

    (courses, skipped)
}

/// "  7.5" style, one decimal, padded to five columns.
fn format_percent(fraction: f32) -> String {
    format!("{:5.1}", fraction.min(1.0) * 100.0)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_over_fixtures() {
        let pages =
            fetch::read_local(&["tests/fixtures/pstat.html", "tests/fixtures/cmpsc.html"]).unwrap();
        let (courses, skipped) = process_pages(&pages);

        assert_eq!(courses.len(), 5);
        assert_eq!(skipped, 3);

        let codes: Vec<_> = courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["PSTAT 5A", "PSTAT 120A", "PSTAT 210", "CMPSC 8", "CMPSC 130A"]
        );
        assert_eq!(courses[3].source_url, "tests/fixtures/cmpsc.html");
        assert_eq!(courses[3].instructors, vec!["Conrad, P.", "Mirza, D."]);
        assert_eq!(courses[4].title, "Data Structures and Algorithms I");
        assert_eq!(courses[4].cross_listed_raw.as_deref(), Some("ECE 130A"));
    }

    #[test]
    fn written_json_reads_back_identical() {
        let pages = fetch::read_local(&["tests/fixtures/cmpsc.html"]).unwrap();
        let (courses, _) = process_pages(&pages);

        let path = std::env::temp_dir().join("ucsb_catalog_scraper_pipeline_test.json");
        let path = path.to_str().unwrap();
        output::write_json(path, &courses).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("Cafés not included."));
        let back: Vec<CourseRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, courses);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.0), "  0.0");
        assert_eq!(format_percent(0.4567), " 45.7");
        assert_eq!(format_percent(1.0), "100.0");
        assert_eq!(format_percent(1.5), "100.0");
    }

    #[test]
    fn cli_defaults_to_scrape_with_fixed_output() {
        let cli = Cli::try_parse_from(["ucsb_catalog_scraper"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, config::OUTPUT_PATH);

        let cli = Cli::try_parse_from(["ucsb_catalog_scraper", "parse", "a.html", "-o", "x.json"])
            .unwrap();
        assert_eq!(cli.output, "x.json");
        assert!(matches!(cli.command, Some(Commands::Parse { ref files }) if files.len() == 1 && files[0] == "a.html"));
    }
}
