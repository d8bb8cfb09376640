use crate::types::errors::{CuratorError, CuratorResult};

const PAGE_SEGMENT: &str = "page";

/// A URL split on `/`, remembering where its `/page/<n>/` number sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    segments: Vec<String>,
    page_index: Option<usize>,
}

impl PageUrl {
    pub fn parse(url: &str) -> Self {
        let segments: Vec<String> = url.split('/').map(str::to_string).collect();
        let page_index = segments
            .iter()
            .position(|s| s == PAGE_SEGMENT)
            .map(|i| i + 1)
            .filter(|i| *i < segments.len());
        Self {
            segments,
            page_index,
        }
    }

    pub fn has_page(&self) -> bool {
        self.page_index.is_some()
    }

    /// The URL's own page number; `"0"` when it has none.
    pub fn current_page(&self) -> &str {
        self.page_index
            .map(|i| self.segments[i].as_str())
            .unwrap_or("0")
    }

    /// The URL re-targeted at `page`. URLs without a page segment are unchanged.
    pub fn with_page(&self, page: u32) -> String {
        match self.page_index {
            Some(index) => {
                let mut segments = self.segments.clone();
                segments[index] = page.to_string();
                segments.join("/")
            }
            None => self.segments.join("/"),
        }
    }

    /// Concrete URLs to visit for a `--pages` argument.
    pub fn urls(&self, pages: Option<&str>) -> CuratorResult<Vec<String>> {
        if !self.has_page() {
            if pages.is_some() {
                log::warn!("URL has no /page/<n>/ segment, ignoring page selection");
            }
            return Ok(vec![self.segments.join("/")]);
        }

        let range = pages.unwrap_or_else(|| self.current_page());
        Ok(expand_pages(range)?
            .into_iter()
            .map(|p| self.with_page(p))
            .collect())
    }
}

/// `"3"` -> `[3]`, `"2-4"` -> `[2, 3, 4]`.
pub fn expand_pages(range: &str) -> CuratorResult<Vec<u32>> {
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|_| CuratorError::Config(format!("Invalid page number '{s}' in '{range}'")))
    };

    match range.split_once('-') {
        Some((start, stop)) => {
            let (start, stop) = (parse(start)?, parse(stop)?);
            if start > stop {
                return Err(CuratorError::Config(format!(
                    "Page range '{range}' runs backwards"
                )));
            }
            Ok((start..=stop).collect())
        }
        None => Ok(vec![parse(range)?]),
    }
}

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod tests;
