use std::sync::LazyLock;

use regex::Regex;

/// Anything other than word characters and parentheses.
static RE_NAME_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w()]").expect("Invalid regex"));

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("Invalid regex"));

const MAGNET_PREFIX: &str = "magnet:";
const BTIH_PREFIX: &str = "urn:btih:";

/// A scraped magnet link and the display name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magnet {
    pub name: String,
    pub uri: String,
}

impl Magnet {
    /// Parse a `magnet:?xt=...&dn=...` link.
    ///
    /// Returns `None` for non-magnet URIs and for links that carry neither a
    /// usable `dn` nor an info-hash.
    pub fn parse(uri: &str) -> Option<Self> {
        let query = uri.strip_prefix(MAGNET_PREFIX)?;
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut display_name = None;
        let mut info_hash = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "dn" if display_name.is_none() => display_name = Some(value),
                "xt" if info_hash.is_none() => {
                    info_hash = value.strip_prefix(BTIH_PREFIX).filter(|h| !h.is_empty())
                }
                _ => {}
            }
        }

        let name = display_name
            .map(decode_display_name)
            .filter(|n| !n.is_empty())
            .or_else(|| info_hash.map(str::to_string))?;

        Some(Self {
            name,
            uri: uri.to_string(),
        })
    }
}

/// Percent-decode a `dn` value and flatten it into an underscore-joined name.
///
/// `Movie.Name.(2019)[1080p]` -> `Movie_Name_(2019)_1080p`
pub fn decode_display_name(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    let decoded = match urlencoding::decode(&plus_as_space) {
        Ok(d) => d.into_owned(),
        Err(e) => {
            log::debug!("dn is not valid UTF-8 after decoding ({e}), using raw value");
            plus_as_space
        }
    };

    let spaced = RE_NAME_NOISE.replace_all(&decoded, " ");
    let joined = RE_SPACES.replace_all(&spaced, "_");
    joined.trim_matches('_').to_string()
}

#[cfg(test)]
#[path = "tests/magnet_tests.rs"]
mod tests;
