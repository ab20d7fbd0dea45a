use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::config::{REQUEST_TIMEOUT, USER_AGENT};

/// Raw HTML of one catalog page, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub html: String,
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a single page. Non-2xx statuses are errors; there is no retry.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page> {
    let html = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("Bad status from {}", url))?
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))?;

    Ok(Page {
        url: url.to_string(),
        html,
    })
}

/// Fetch every URL in order, one at a time. The first failure aborts the run.
pub async fn fetch_all<S: AsRef<str>>(urls: &[S]) -> Result<Vec<Page>> {
    let client = build_client()?;
    let mut pages = Vec::with_capacity(urls.len());

    for url in urls {
        let url = url.as_ref();
        info!("Fetching catalog page: {}", url);
        let page = fetch_page(&client, url).await?;
        info!("Fetched {} bytes from {}", page.html.len(), url);
        pages.push(page);
    }

    Ok(pages)
}

/// Load saved catalog HTML from disk, using each path as the page's source.
pub fn read_local<S: AsRef<str>>(paths: &[S]) -> Result<Vec<Page>> {
    paths
        .iter()
        .map(|p| -> Result<Page> {
            let path = p.as_ref();
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path))?;
            info!("Loaded {} bytes from {}", html.len(), path);
            Ok(Page {
                url: path.to_string(),
                html,
            })
        })
        .collect()
}
