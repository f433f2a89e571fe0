//! Batch string cleansing layer.
//!
//! This crate normalizes a batch of optional text values through a fixed
//! per-string pipeline and aggregates the results into a deduplicated set.
//!
//! ## What we do
//!
//! - Run collapsing (every maximal run of identical characters becomes one)
//! - Stripping of `'4'` and `'_'`
//! - Substitution of `'$'` with `'£'`
//! - Truncation to a configured character cap (15 by default)
//! - Aggregation: absent and empty results are dropped, survivors are
//!   deduplicated into an unordered set
//!
//! ## Pure function guarantee
//!
//! No I/O, no OS/locale dependence, no state that outlives a call. Give us
//! the same batch and config, you get the same set on any machine,
//! including with the parallel batch transform enabled.
//!
//! ## Invariants worth knowing
//!
//! - Character comparison is exact codepoint equality; no case folding, no
//!   Unicode normalization
//! - Cleansed values never contain `'4'`, `'_'`, or `'$'`, never exceed the
//!   cap, and never contain two adjacent identical characters
//! - The output set never contains an empty string
//! - Absence vs. emptiness is collapsed only at the batch boundary
//!
//! Bottom line: same batch + same config = same set forever.

mod batch;
mod config;
mod error;
mod pipeline;
mod runs;

pub use crate::batch::{cleanse_batch, CleansedBatch};
pub use crate::config::{CleanseConfig, DEFAULT_MAX_OUTPUT_CHARS};
pub use crate::error::CleanseError;
pub use crate::pipeline::cleanse_text;
pub use crate::runs::collapse_runs;
