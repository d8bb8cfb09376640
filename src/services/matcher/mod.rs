//! Name-matching and classification engine.
//!
//! Pure in-memory: no network or disk I/O happens below this module.

pub mod classifier;
pub mod glob;
pub mod normalizer;
pub mod ratio;
pub mod tally;

pub use classifier::{
    categories_from_layout, Category, Classifier, ClassifierConfig, IterateOutcome, LogSink,
    MatchMode, MatchSink,
};
