//! Shell-style glob matching for pattern-like reference entries (blacklist lines).
//!
//! Patterns are translated to anchored regexes with fnmatch semantics:
//! `*` any run, `?` any single char, `[seq]` / `[!seq]` character sets.
//! A `[` without a closing `]` is matched literally.

use regex::Regex;

use crate::types::errors::{CuratorError, CuratorResult};

/// A compiled, case-folded glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile a raw pattern. Spaces become underscores before case folding,
    /// since entries are usually written the way filenames are stored.
    pub fn new(pattern: &str) -> CuratorResult<Self> {
        let source = prepare_pattern(pattern);
        let regex = Regex::new(&translate(&source)).map_err(|e| CuratorError::MalformedPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { source, regex })
    }

    /// The prepared (underscored, lowercased) pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(&candidate.to_lowercase())
    }
}

/// Match `candidate` against a single glob `pattern`.
///
/// Returns `Err(MalformedPattern)` when the pattern cannot be compiled; callers
/// treat that as a non-match.
pub fn matches_glob(candidate: &str, pattern: &str) -> CuratorResult<bool> {
    Ok(GlobPattern::new(pattern)?.matches(candidate))
}

fn prepare_pattern(pattern: &str) -> String {
    pattern.replace(' ', "_").to_lowercase()
}

/// Translate a glob into an anchored regex string.
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::from("(?s)^(?:");
    let mut i = 0;

    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < n && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < n && chars[j] == '!' {
                    j += 1;
                }
                if j < n && chars[j] == ']' {
                    j += 1;
                }
                while j < n && chars[j] != ']' {
                    j += 1;
                }
                if j >= n {
                    out.push_str(r"\[");
                } else {
                    let set: String = chars[i..j].iter().collect();
                    i = j + 1;
                    out.push_str(&translate_set(&set));
                }
            }
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(")$");
    out
}

/// Translate the inside of a `[...]` set. Ranges (`a-z`) pass through untouched
/// so that reversed ranges surface as compile errors.
fn translate_set(set: &str) -> String {
    let (negated, body) = match set.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, set),
    };

    let mut class = String::from("[");
    if negated {
        class.push('^');
    }
    for (idx, c) in body.chars().enumerate() {
        match c {
            '\\' | '[' | '&' | '~' | '|' => {
                class.push('\\');
                class.push(c);
            }
            '^' if idx == 0 && !negated => class.push_str(r"\^"),
            _ => class.push(c),
        }
    }
    class.push(']');
    class
}

#[cfg(test)]
#[path = "tests/glob_tests.rs"]
mod tests;
