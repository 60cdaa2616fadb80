//! Canonical form for free-text names.
//!
//! A name is normalized by trimming ASCII whitespace from both ends, mapping
//! `A`-`Z` to lowercase and replacing each literal space with `_`. Interior
//! tabs and newlines are kept as-is; only `0x20` becomes an underscore.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Returns true for the locale-independent ASCII whitespace set:
/// space, tab, newline, vertical tab, form feed and carriage return.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (`0x0B`).
pub const fn is_ascii_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn trim_ascii_space(bytes: &[u8]) -> &[u8] {
    let Some(start) = bytes.iter().position(|b| !is_ascii_space(*b)) else {
        return &[];
    };
    // A non-space byte exists, so rposition always finds one.
    let end = bytes
        .iter()
        .rposition(|b| !is_ascii_space(*b))
        .unwrap_or(start);
    &bytes[start..=end]
}

fn is_space_char(ch: char) -> bool {
    ch.is_ascii() && is_ascii_space(ch as u8)
}

fn trim_str(value: &str) -> &str {
    value.trim_matches(is_space_char)
}

fn map_byte(byte: u8) -> u8 {
    match byte {
        b' ' => b'_',
        other => other.to_ascii_lowercase(),
    }
}

fn map_char(ch: char) -> char {
    match ch {
        ' ' => '_',
        other => other.to_ascii_lowercase(),
    }
}

/// Normalizes `value` into its canonical identifier-like form.
///
/// ```
/// use name_normalizer::normalizer::normalize;
///
/// assert_eq!(normalize("  Alice Smith  "), "alice_smith");
/// assert_eq!(normalize("Tab\tSeparated"), "tab\tseparated");
/// ```
pub fn normalize(value: &str) -> String {
    trim_str(value).chars().map(map_char).collect()
}

/// Byte-level variant of [`normalize`] for input that may not be valid UTF-8.
///
/// Every byte the transform touches is ASCII, so multi-byte sequences pass
/// through unchanged and valid UTF-8 input yields the same bytes as
/// [`normalize`].
pub fn normalize_bytes(value: &[u8]) -> Vec<u8> {
    trim_ascii_space(value).iter().copied().map(map_byte).collect()
}

/// Normalizes an owned buffer, reusing its allocation when no spaces remain.
pub fn normalize_in_place(value: &mut String) {
    let end = value.trim_end_matches(is_space_char).len();
    value.truncate(end);
    let start = value.len() - value.trim_start_matches(is_space_char).len();
    value.replace_range(..start, "");
    value.make_ascii_lowercase();
    if value.contains(' ') {
        *value = value.replace(' ', "_");
    }
}

/// Returns true when `value` is already in normalized form.
pub fn is_normalized(value: &str) -> bool {
    let bytes = value.as_bytes();
    let edges_clean = match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => !is_ascii_space(*first) && !is_ascii_space(*last),
        _ => true,
    };

    edges_clean
        && !bytes
            .iter()
            .any(|byte| *byte == b' ' || byte.is_ascii_uppercase())
}

/// A name that has been through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for NormalizedName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<NormalizedName> for String {
    fn from(name: NormalizedName) -> Self {
        name.0
    }
}

impl Deref for NormalizedName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for NormalizedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
