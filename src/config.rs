//! Configuration types for the cleansing pipeline.
//!
//! This module defines [`CleanseConfig`], which controls the batch driver and
//! the single knob the per-string pipeline exposes: the output length cap.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to cleansing
//! behavior (even bug fixes) must be accompanied by a version bump so that
//! results produced under the old behavior remain distinguishable from new
//! ones. Version 0 is reserved and rejected.
//!
//! # What is deliberately not configurable
//!
//! The stripped characters (`'4'`, `'_'`) and the currency substitution
//! (`'$'` → `'£'`) are the pipeline's identity, not tuning knobs. They live
//! as constants next to the pipeline code.
//!
//! # Examples
//!
//! ```rust
//! use cleanse::CleanseConfig;
//!
//! let config = CleanseConfig::default();
//! assert_eq!(config.version, 1);
//! assert_eq!(config.max_output_chars, 15);
//! assert!(!config.use_parallel);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CleanseError;

/// Default cap on cleansed output length, in characters.
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 15;

/// Configuration for the cleansing pipeline.
///
/// Cheap to clone and serializable, so it can be loaded from external
/// configuration formats and snapshotted into results.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "max_output_chars": 15,
///   "use_parallel": false
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use cleanse::CleanseConfig;
///
/// // Default configuration (recommended)
/// let config = CleanseConfig::default();
///
/// // Parallel batch transform for large batches
/// let parallel = CleanseConfig {
///     use_parallel: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanseConfig {
    /// Semantic version of the cleansing configuration.
    ///
    /// Must be >= 1; version 0 is reserved and rejected by
    /// [`validate()`](CleanseConfig::validate).
    pub version: u32,

    /// Maximum number of characters (not bytes) kept in a cleansed value.
    ///
    /// Truncation keeps the first `max_output_chars` characters of the
    /// post-substitution sequence and drops the remainder. The substituted
    /// `'£'` is multi-byte in UTF-8, so the cap counts `char`s.
    ///
    /// Must be >= 1; a zero cap would cleanse every input to nothing and is
    /// rejected by [`validate()`](CleanseConfig::validate).
    pub max_output_chars: usize,

    /// Enable parallel per-entry transformation of batches.
    ///
    /// The per-string pipeline is a pure function, so the result set is
    /// identical either way. Worth enabling only for large batches.
    pub use_parallel: bool,
}

impl CleanseConfig {
    /// Validate configuration parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cleanse::CleanseConfig;
    ///
    /// assert!(CleanseConfig::default().validate().is_ok());
    ///
    /// let bad = CleanseConfig { version: 0, ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CleanseError> {
        if self.version == 0 {
            return Err(CleanseError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_output_chars == 0 {
            return Err(CleanseError::InvalidConfig(
                "max_output_chars must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CleanseConfig {
    /// Creates the default `CleanseConfig`.
    ///
    /// - `version`: 1
    /// - `max_output_chars`: 15
    /// - `use_parallel`: false
    fn default() -> Self {
        Self {
            version: 1,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
            use_parallel: false,
        }
    }
}
