//! The per-string cleansing pipeline.
//!
//! Four stages, applied in this order to the character sequence:
//!
//! 1. **Run collapse**: every maximal run of consecutive identical
//!    characters becomes one character (exact, case-sensitive comparison).
//! 2. **Stripping**: every `'4'` and `'_'` is removed. Nothing else is.
//! 3. **Substitution**: every remaining `'$'` becomes `'£'`.
//! 4. **Truncation**: at most the first `max_output_chars` characters of
//!    the result are kept.
//!
//! The stages fuse into a single linear scan: the run cursor compares
//! against the last character of the *collapsed* stream (before stripping),
//! and the truncation counter counts only *emitted* characters (after
//! stripping). Once the cap is reached the scan stops; the remaining input
//! could only extend the dropped suffix.

use crate::config::CleanseConfig;

/// Characters removed outright from the collapsed stream.
const STRIPPED_CHARS: [char; 2] = ['4', '_'];

/// Currency substitution applied after stripping.
const DOLLAR_SIGN: char = '$';
const POUND_SIGN: char = '£';

/// Cleanse a single string: collapse runs, strip, substitute, truncate.
///
/// Total over every input, including the empty string; an input that
/// cleanses to nothing yields a concrete empty `String` here. The batch
/// driver is what drops empty and absent values.
///
/// # Examples
///
/// ```rust
/// use cleanse::{cleanse_text, CleanseConfig};
///
/// let cfg = CleanseConfig::default();
/// assert_eq!(cleanse_text("This $$$ is the $", &cfg), "This £ is the £");
/// assert_eq!(cleanse_text("A-444-is-the-44", &cfg), "A--is-the-");
/// assert_eq!(cleanse_text("4444", &cfg), "");
/// ```
pub fn cleanse_text(input: &str, cfg: &CleanseConfig) -> String {
    if cfg.max_output_chars == 0 {
        return String::new();
    }

    // Output holds at most max_output_chars chars; '£' is 2 bytes, so cap
    // the preallocation rather than mirroring a potentially huge input.
    let mut cleansed = String::with_capacity(input.len().min(cfg.max_output_chars * 4));
    let mut last_seen: Option<char> = None;
    let mut emitted = 0usize;

    for ch in input.chars() {
        // Run collapse compares against the previous character of the
        // collapsed stream, before any stripping. Stripping can therefore
        // make previously separated repeats adjacent again ("4 4" -> "  "),
        // and those are kept.
        if last_seen == Some(ch) {
            continue;
        }
        last_seen = Some(ch);

        if STRIPPED_CHARS.contains(&ch) {
            continue;
        }

        let ch = if ch == DOLLAR_SIGN { POUND_SIGN } else { ch };
        cleansed.push(ch);
        emitted += 1;
        if emitted == cfg.max_output_chars {
            break;
        }
    }

    cleansed
}
