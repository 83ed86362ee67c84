// src/slug.rs

//! Turn task names into filesystem-safe identifiers.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Invalid disallowed-chars regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("Invalid separator regex"));

/// Slugify a display name.
///
/// - compatibility-normalize (NFKD) and drop combining marks, so `"Café"`
///   and `"Cafe\u{301}"` both become `"cafe"` and full-width letters fold to
///   their ASCII forms;
/// - lowercase;
/// - strip everything that is not a word character, whitespace or `-`;
/// - collapse runs of whitespace and `-` into one `-`;
/// - trim leading/trailing `-` and `_`.
///
/// ```
/// use rsyncgen::slug::slugify;
///
/// assert_eq!(slugify("Café Backup! "), "cafe-backup");
/// assert_eq!(slugify("  --Music & Videos--  "), "music-videos");
/// ```
pub fn slugify(value: &str) -> String {
    let folded: String = value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();
    let lowered = folded.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let collapsed = SEPARATORS.replace_all(&stripped, "-");
    collapsed.trim_matches(|c| c == '-' || c == '_').to_string()
}
