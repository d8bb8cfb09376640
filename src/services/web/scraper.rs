use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;

use crate::services::torrents::Magnet;
use crate::types::errors::{CuratorError, CuratorResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// `href` attributes whose value is a magnet link, single or double quoted.
static RE_MAGNET_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href\s*=\s*(?:"(magnet:[^"]*)"|'(magnet:[^']*)')"#).expect("Invalid regex")
});

/// Anything that can turn a page URL into magnet links.
pub trait MagnetSource {
    fn magnets(&self, url: &str) -> CuratorResult<Vec<Magnet>>;
}

/// Scrapes live pages over HTTP.
pub struct HttpMagnetSource {
    client: Client,
}

impl HttpMagnetSource {
    pub fn new(user_agent: &str) -> CuratorResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> CuratorResult<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CuratorError::Http(format!("GET {url} returned HTTP {status}")));
        }
        Ok(response.text()?)
    }
}

impl MagnetSource for HttpMagnetSource {
    fn magnets(&self, url: &str) -> CuratorResult<Vec<Magnet>> {
        log::info!("Scraping {url}");
        let html = self.fetch(url)?;
        let magnets = extract_magnets(&html);
        log::info!("Found {} magnet link(s) on {url}", magnets.len());
        Ok(magnets)
    }
}

/// Magnet links in document order, deduplicated by decoded name (first wins).
pub fn extract_magnets(html: &str) -> Vec<Magnet> {
    let mut seen = HashSet::new();
    let mut magnets = Vec::new();

    for caps in RE_MAGNET_HREF.captures_iter(html) {
        let Some(raw) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let uri = unescape_entities(raw.as_str());
        match Magnet::parse(&uri) {
            Some(magnet) if seen.insert(magnet.name.clone()) => magnets.push(magnet),
            Some(magnet) => log::debug!("Duplicate magnet skipped: {}", magnet.name),
            None => log::warn!("Unusable magnet link skipped: {uri}"),
        }
    }
    magnets
}

/// HTML attribute values carry `&amp;` between magnet parameters.
fn unescape_entities(value: &str) -> String {
    value
        .replace("&amp;", "&")
        .replace("&#38;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
#[path = "tests/scraper_tests.rs"]
mod tests;
