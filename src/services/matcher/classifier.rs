//! Candidate classification engine.
//!
//! Checks each scraped name against an ordered list of reference categories
//! (blacklisted, owned, downloading, pack ...). The first category with a
//! satisfying entry wins and the candidate is rejected; a candidate no category
//! claims is "found" and eligible for download.
//!
//! **Per candidate:**
//! 1. Categories in caller order, entries in list order
//! 2. `Glob` categories use [`GlobPattern`], `Ratio` categories use `ratio > cutoff`
//! 3. First hit: bump that category's count, record in `rejected` and in the category's matches
//! 4. No hit: record in `found`
//!
//! A classifier is not meant for concurrent `iterate` calls; `&mut self` enforces that.

use std::collections::{HashMap, HashSet};

use super::glob::GlobPattern;
use super::ratio::{self, DEFAULT_CUTOFF};
use super::tally;
use crate::types::errors::{CuratorError, CuratorResult};
use crate::types::report::{CategoryCount, ClassificationResult, Tally};

// ─── Sink ────────────────────────────────────────────────────────────────────

/// Where per-candidate decisions and recoverable problems are reported.
pub trait MatchSink {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl MatchSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }
}

// ─── Categories ──────────────────────────────────────────────────────────────

/// How a category's entries are compared against candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Word-overlap ratio against plain names.
    Ratio,
    /// Shell-style glob patterns with optional `# comment` suffixes.
    Glob,
}

#[derive(Debug, Clone)]
enum EntryMatcher {
    Ratio,
    Glob(GlobPattern),
    Malformed(String),
}

/// One reference entry of a category.
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    /// Text used for matching (comment stripped for glob entries).
    pub text: String,
    pub comment: Option<String>,
    matcher: EntryMatcher,
}

impl CategoryEntry {
    pub fn new(raw: &str, mode: MatchMode) -> Self {
        match mode {
            MatchMode::Ratio => Self {
                text: raw.to_string(),
                comment: None,
                matcher: EntryMatcher::Ratio,
            },
            MatchMode::Glob => {
                let (text, comment) = split_comment(raw);
                let matcher = match GlobPattern::new(&text) {
                    Ok(pattern) => EntryMatcher::Glob(pattern),
                    Err(e) => EntryMatcher::Malformed(e.to_string()),
                };
                Self {
                    text,
                    comment,
                    matcher,
                }
            }
        }
    }
}

/// Split `"pattern # comment"` at the first `#`; both sides trimmed.
pub fn split_comment(raw: &str) -> (String, Option<String>) {
    match raw.split_once('#') {
        Some((text, comment)) => {
            let comment = comment.trim();
            (
                text.trim().to_string(),
                (!comment.is_empty()).then(|| comment.to_string()),
            )
        }
        None => (raw.trim().to_string(), None),
    }
}

/// A named reference set checked as a unit.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    mode: MatchMode,
    entries: Vec<CategoryEntry>,
    match_count: usize,
    matches: Vec<String>,
}

impl Category {
    pub fn new<I, T>(name: &str, mode: MatchMode, entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter(|e| !e.as_ref().trim().is_empty())
            .map(|e| CategoryEntry::new(e.as_ref(), mode))
            .collect();
        Self {
            name: name.to_string(),
            mode,
            entries,
            match_count: 0,
            matches: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Candidates this category claimed during the last pass, in input order.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    fn reset(&mut self) {
        self.match_count = 0;
        self.matches.clear();
    }

    fn record(&mut self, candidate: &str) {
        self.match_count += 1;
        self.matches.push(candidate.to_string());
    }
}

/// Build categories in `order`, taking entries from `lists` by name.
///
/// Names in `glob_categories` use [`MatchMode::Glob`]. A name without a list
/// becomes an empty category, which never matches.
pub fn categories_from_layout(
    order: &[String],
    glob_categories: &[String],
    mut lists: HashMap<String, Vec<String>>,
) -> Vec<Category> {
    order
        .iter()
        .map(|name| {
            let mode = if glob_categories.contains(name) {
                MatchMode::Glob
            } else {
                MatchMode::Ratio
            };
            let entries = lists.remove(name).unwrap_or_else(|| {
                log::debug!("No reference list supplied for category '{name}'");
                Vec::new()
            });
            Category::new(name, mode, entries)
        })
        .collect()
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Tunables for a classifier instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// A ratio must strictly exceed this to count as a match.
    pub cutoff: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

/// Result of one `iterate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterateOutcome {
    /// The candidate list was empty.
    NoResults,
    Classified(Tally),
}

pub struct Classifier<S: MatchSink = LogSink> {
    categories: Vec<Category>,
    config: ClassifierConfig,
    found: Vec<String>,
    rejected: Vec<String>,
    results: Vec<ClassificationResult>,
    sink: S,
}

impl Classifier<LogSink> {
    /// Classifier with the default cutoff, reporting through the `log` facade.
    pub fn with_defaults(categories: Vec<Category>) -> CuratorResult<Self> {
        Self::new(categories, ClassifierConfig::default(), LogSink)
    }
}

impl<S: MatchSink> Classifier<S> {
    /// Fails with `DuplicateCategory` if two categories share a name.
    pub fn new(categories: Vec<Category>, config: ClassifierConfig, sink: S) -> CuratorResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.name.as_str()) {
                return Err(CuratorError::DuplicateCategory(category.name.clone()));
            }
        }

        Ok(Self {
            categories,
            config,
            found: Vec::new(),
            rejected: Vec::new(),
            results: Vec::new(),
            sink,
        })
    }

    /// Classify every candidate in input order.
    pub fn iterate<I>(&mut self, candidates: I) -> IterateOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.iterate_with_progress(candidates, |_| {})
    }

    /// Like [`Classifier::iterate`], calling `on_progress` with the tally line
    /// after each candidate.
    pub fn iterate_with_progress<I, F>(&mut self, candidates: I, mut on_progress: F) -> IterateOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(&str),
    {
        self.reset();

        let candidates: Vec<I::Item> = candidates.into_iter().collect();
        if candidates.is_empty() {
            self.sink.info("Search returned no results");
            return IterateOutcome::NoResults;
        }

        self.sink
            .info(&format!("Classifying {} candidates", candidates.len()));
        for candidate in &candidates {
            self.classify_one(candidate.as_ref());
            on_progress(&self.display_tally());
        }

        IterateOutcome::Classified(self.tally())
    }

    /// Run the state machine for a single candidate and record the outcome.
    ///
    /// Does not reset previous results; `iterate` does that.
    pub fn classify_one(&mut self, candidate: &str) -> ClassificationResult {
        let result = match self.first_match(candidate) {
            Some((index, comment)) => {
                let category = &mut self.categories[index];
                category.record(candidate);
                self.rejected.push(candidate.to_string());
                ClassificationResult::rejected_by(candidate, &category.name, comment)
            }
            None => {
                self.found.push(candidate.to_string());
                ClassificationResult::found(candidate)
            }
        };

        self.sink
            .info(&format!("[{}] {}", result.label(), result.candidate_name));
        self.results.push(result.clone());
        result
    }

    /// Clear counts, lists and per-category matches.
    pub fn reset(&mut self) {
        self.found.clear();
        self.rejected.clear();
        self.results.clear();
        for category in &mut self.categories {
            category.reset();
        }
    }

    /// Index of the first satisfying category plus the entry's comment.
    fn first_match(&self, candidate: &str) -> Option<(usize, Option<String>)> {
        for (index, category) in self.categories.iter().enumerate() {
            for entry in &category.entries {
                if self.entry_matches(entry, candidate) {
                    return Some((index, entry.comment.clone()));
                }
            }
        }
        None
    }

    fn entry_matches(&self, entry: &CategoryEntry, candidate: &str) -> bool {
        match &entry.matcher {
            EntryMatcher::Ratio => ratio::is_match(candidate, &entry.text, self.config.cutoff),
            EntryMatcher::Glob(pattern) => pattern.matches(candidate),
            EntryMatcher::Malformed(reason) => {
                self.sink.warning(reason);
                false
            }
        }
    }

    /// Candidates claimed by `category` in the last pass. Empty for unknown names.
    pub fn get_matches(&self, category: &str) -> &[String] {
        self.category(category)
            .map(Category::matches)
            .unwrap_or(&[])
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Unmatched candidates, in input order.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Candidates claimed by any category, in input order.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Per-candidate outcomes of the last pass, in input order.
    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tally(&self) -> Tally {
        Tally {
            categories: self
                .categories
                .iter()
                .map(|c| CategoryCount {
                    name: c.name.clone(),
                    count: c.match_count,
                })
                .collect(),
            found: self.found.len(),
            rejected: self.rejected.len(),
        }
    }

    /// Single-line progress summary, meant to be redrawn in place.
    pub fn display_tally(&self) -> String {
        tally::display_tally(self.found.len(), self.rejected.len())
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
