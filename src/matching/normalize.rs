//! Text normalization for name comparison

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a name for comparison.
///
/// NFD-decomposes, drops combining diacritical marks (U+0300..=U+036F),
/// then lower-cases. `"Café"` and `"cafe"` normalize to the same string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .to_lowercase()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
