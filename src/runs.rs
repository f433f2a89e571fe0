//! Run-collapse utilities.
//!
//! This module provides [`collapse_runs`], which reduces every maximal run of
//! consecutive identical characters to a single character. It is the first
//! stage of the cleansing pipeline, exposed on its own for callers that need
//! run-collapsed text without the rest of the pipeline.
//!
//! # Run Definition
//!
//! A run is a maximal contiguous subsequence of identical characters.
//! Comparison is exact `char` equality:
//! - `'W'` and `'w'` are distinct (no case folding)
//! - No Unicode normalization or combining-character awareness
//! - Repeats separated by a different character are separate runs and are
//!   not merged
//!
//! # Examples
//!
//! ```rust
//! use cleanse::collapse_runs;
//!
//! let collapsed = collapse_runs("AWWWwwwThis ppPPPP AA");
//! assert_eq!(collapsed, "AWwThis pP A");
//! ```

/// Collapses every maximal run of consecutive identical characters into a
/// single character.
///
/// This utility is deterministic and allocation-bounded: one linear
/// left-to-right scan carrying the last character seen, never recursion.
///
/// # Examples
///
/// ```rust
/// use cleanse::collapse_runs;
///
/// // Adjacent repeats collapse
/// assert_eq!(collapse_runs("BzZZZe bbCCCC --+**"), "BzZe bC -+*");
///
/// // Non-adjacent repeats are separate runs and survive
/// assert_eq!(collapse_runs("aba"), "aba");
///
/// // Already collapsed text is unchanged
/// assert_eq!(collapse_runs("String C"), "String C");
///
/// // Empty input
/// assert_eq!(collapse_runs(""), "");
/// ```
pub fn collapse_runs(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut last_seen: Option<char> = None;
    for ch in text.chars() {
        if last_seen != Some(ch) {
            collapsed.push(ch);
            last_seen = Some(ch);
        }
    }
    collapsed
}
