//! Batch driver for the cleansing pipeline.
//!
//! Takes a batch of optional text values, runs every present entry through
//! [`cleanse_text`], drops absent entries and entries that cleansed to
//! nothing, and deduplicates the survivors into a set. One structured log
//! event is emitted per batch.

use std::collections::HashSet;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

use crate::config::CleanseConfig;
use crate::error::CleanseError;
use crate::pipeline::cleanse_text;

/// The deduplicated result of cleansing one input batch.
///
/// For a fixed config, `values` is deterministic regardless of the
/// sequential/parallel execution path; set membership and cardinality are
/// the only guarantees, not ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleansedBatch {
    /// Unique, non-empty cleansed values. Unordered.
    pub values: HashSet<String>,

    /// Number of entries in the input batch, absent ones included.
    pub input_count: usize,

    /// Entries dropped because they were absent or cleansed to nothing.
    ///
    /// Duplicates are not counted here; two entries that cleanse to the
    /// same value merge silently into one element of `values`.
    pub dropped: usize,

    /// Config version used to produce this batch.
    pub cleanse_version: u32,

    /// Snapshot of the cleansing configuration.
    pub config: CleanseConfig,
}

/// Cleanse a batch of optional text values into a deduplicated set.
///
/// Every present entry goes through the per-string pipeline; absent entries
/// and entries that cleanse to nothing are dropped by the same predicate.
/// An empty input batch yields an empty set, never an error.
///
/// The only fallible step is config validation. With `cfg.use_parallel` the
/// per-entry transform runs on rayon; deduplication always happens after
/// the complete transform, so the result set is identical either way.
///
/// # Examples
///
/// ```rust
/// use cleanse::{cleanse_batch, CleanseConfig};
///
/// let inputs = [Some("String1"), None, Some("String2"), Some("4444")];
/// let batch = cleanse_batch(&inputs, &CleanseConfig::default()).unwrap();
///
/// assert_eq!(batch.values.len(), 2);
/// assert!(batch.values.contains("String1"));
/// assert!(batch.values.contains("String2"));
/// assert_eq!(batch.dropped, 2);
/// ```
pub fn cleanse_batch<S>(
    inputs: &[Option<S>],
    cfg: &CleanseConfig,
) -> Result<CleansedBatch, CleanseError>
where
    S: AsRef<str> + Sync,
{
    cfg.validate()?;

    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "cleanse.batch", input_count = inputs.len());
    let _guard = span.enter();

    let cleansed: Vec<Option<String>> = if cfg.use_parallel {
        inputs
            .par_iter()
            .map(|entry| entry.as_ref().map(|s| cleanse_text(s.as_ref(), cfg)))
            .collect()
    } else {
        inputs
            .iter()
            .map(|entry| entry.as_ref().map(|s| cleanse_text(s.as_ref(), cfg)))
            .collect()
    };

    let mut values = HashSet::with_capacity(cleansed.len());
    let mut dropped = 0usize;
    for entry in cleansed {
        match entry {
            Some(value) if !value.is_empty() => {
                values.insert(value);
            }
            _ => dropped += 1,
        }
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        input_count = inputs.len(),
        dropped,
        unique = values.len(),
        elapsed_micros,
        "cleanse_success"
    );

    Ok(CleansedBatch {
        values,
        input_count: inputs.len(),
        dropped,
        cleanse_version: cfg.version,
        config: cfg.clone(),
    })
}
