//! Filename slugs for author names.
//!
//! A slug keeps only the ASCII letters `a`–`z` of its input after Unicode
//! NFD decomposition, so accented letters fall back to their base letter
//! and everything else (uppercase, digits, punctuation, whitespace, letters
//! without a Latin base) is dropped.

use unicode_normalization::UnicodeNormalization;

/// Reduce a string to its lowercase ASCII letters.
///
/// Callers lowercase first; uppercase input is stripped, not folded.
///
/// # Examples
///
/// ```
/// use seminars::utils::slug;
///
/// assert_eq!(slug("müller"), "muller");
/// assert_eq!(slug("o'brien-smith"), "obriensmith");
/// assert_eq!(slug("Müller"), "uller");
/// assert_eq!(slug("łukasz"), "ukasz");
/// ```
pub fn slug(s: &str) -> String {
    s.nfd().filter(|c| c.is_ascii_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_plain() {
        assert_eq!(slug("lovelace"), "lovelace");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_slug_accents() {
        assert_eq!(slug("é"), "e");
        assert_eq!(slug("ñ"), "n");
        assert_eq!(slug("schrödinger"), "schrodinger");
        assert_eq!(slug("nguyễn"), "nguyen");
        assert_eq!(slug("čech"), "cech");
    }

    #[test]
    fn test_slug_strips_non_letters() {
        assert_eq!(slug("van der waals"), "vanderwaals");
        assert_eq!(slug("d'alembert"), "dalembert");
        assert_eq!(slug("smith2"), "smith");
        assert_eq!(slug("Upper"), "pper");
    }

    #[test]
    fn test_slug_no_latin_base() {
        // letters that don't decompose to a Latin base vanish
        assert_eq!(slug("ø"), "");
        assert_eq!(slug("李"), "");
        assert_eq!(slug("ωmega"), "mega");
    }
}
