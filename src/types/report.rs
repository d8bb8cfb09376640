//! Classification report contracts.
//!
//! - `ClassificationResult` is the outcome for one candidate.
//! - `Tally` is the per-run summary, ordered the way categories were checked.

use serde::{Deserialize, Serialize};

/// Label used for candidates that matched no category.
pub const FOUND_LABEL: &str = "FOUND";

/// Outcome of classifying a single candidate name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub candidate_name: String,
    /// `None` means unmatched, i.e. eligible for download.
    pub matched_category: Option<String>,
    pub rejected: bool,
    /// Comment attached to the matching blacklist entry, if any.
    pub comment: Option<String>,
}

impl ClassificationResult {
    pub fn found(candidate: &str) -> Self {
        Self {
            candidate_name: candidate.to_string(),
            matched_category: None,
            rejected: false,
            comment: None,
        }
    }

    pub fn rejected_by(candidate: &str, category: &str, comment: Option<String>) -> Self {
        Self {
            candidate_name: candidate.to_string(),
            matched_category: Some(category.to_string()),
            rejected: true,
            comment,
        }
    }

    /// Upper-cased category name, or `FOUND`.
    pub fn label(&self) -> String {
        match &self.matched_category {
            Some(category) => category.to_uppercase(),
            None => FOUND_LABEL.to_string(),
        }
    }
}

/// Match count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Running totals for a classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    /// In category priority order.
    pub categories: Vec<CategoryCount>,
    pub found: usize,
    pub rejected: usize,
}
