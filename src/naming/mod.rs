//! Clean-name computation for exported screenshots
//!
//! The export tool suffixes suggested names with a disambiguation tag,
//! e.g. `Login Screen_0_4F21BC8A-AB12.png`. This module strips that tag
//! (or normalizes the extension when no tag is present) and hyphenates
//! spaces to produce the final on-disk filename.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches `<base>_<digits>_<UPPERCASE-ALNUM-with-hyphens>.png` with a
    /// non-greedy base capture, so the earliest suffix-shaped tail wins.
    static ref DISAMBIGUATION_SUFFIX: Regex =
        Regex::new(r"^(.+?)_\d+_[A-Z0-9-]+\.png$").unwrap();
}

/// Compute the clean filename for a suggested human-readable name
///
/// Suffix-tagged names keep only the captured base plus `.png`; anything
/// else has its extension (everything after the last `.`) replaced with
/// `.png`. Spaces become hyphens after extension normalization.
///
/// The result is not sanitized beyond the space substitution; path
/// separators and reserved characters pass through unchanged.
pub fn clean_name(suggested: &str) -> String {
    let named = match DISAMBIGUATION_SUFFIX.captures(suggested) {
        Some(caps) => format!("{}.png", &caps[1]),
        None => format!("{}.png", strip_extension(suggested)),
    };

    named.replace(' ', "-")
}

/// Everything before the last `.`, or the whole string when there is none
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    }
}
