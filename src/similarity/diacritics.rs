//! Arabic diacritic stripping applied before word comparison.

/// Shadda (gemination mark).
pub const SHADDA: char = '\u{0651}';

/// Harakat, tanwin, sukun and the superscript alef, shadda excluded.
fn is_non_shadda_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0650}' | '\u{0652}' | '\u{0670}')
}

/// Which diacritics to remove from a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiacriticFilter {
    /// Remove every diacritic except shadda.
    pub ignore_all_but_shadda: bool,
    /// Remove shadda.
    pub ignore_shadda: bool,
}

impl DiacriticFilter {
    pub fn new(ignore_all_but_shadda: bool, ignore_shadda: bool) -> Self {
        DiacriticFilter {
            ignore_all_but_shadda,
            ignore_shadda,
        }
    }

    /// True when the filter leaves its input unchanged.
    pub fn is_identity(&self) -> bool {
        !self.ignore_all_but_shadda && !self.ignore_shadda
    }

    pub fn filter(&self, input: &str) -> String {
        if self.is_identity() {
            return input.to_string();
        }

        input
            .chars()
            .filter(|&c| {
                !((self.ignore_all_but_shadda && is_non_shadda_diacritic(c))
                    || (self.ignore_shadda && c == SHADDA))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "مُدَرِّسٌ": damma, fatha, kasra under shadda, tanwin damm.
    const MUDARRIS: &str = "\u{0645}\u{064F}\u{062F}\u{064E}\u{0631}\u{0651}\u{0650}\u{0633}\u{064C}";

    #[test]
    fn test_identity() {
        let filter = DiacriticFilter::default();
        assert!(filter.is_identity());
        assert_eq!(filter.filter(MUDARRIS), MUDARRIS);
    }

    #[test]
    fn test_keep_shadda() {
        let filter = DiacriticFilter::new(true, false);
        assert_eq!(filter.filter(MUDARRIS), "\u{0645}\u{062F}\u{0631}\u{0651}\u{0633}");
    }

    #[test]
    fn test_strip_shadda_only() {
        let filter = DiacriticFilter::new(false, true);
        assert_eq!(
            filter.filter(MUDARRIS),
            "\u{0645}\u{064F}\u{062F}\u{064E}\u{0631}\u{0650}\u{0633}\u{064C}"
        );
    }

    #[test]
    fn test_strip_everything() {
        let filter = DiacriticFilter::new(true, true);
        assert_eq!(filter.filter(MUDARRIS), "مدرس");
    }

    #[test]
    fn test_latin_untouched() {
        let filter = DiacriticFilter::new(true, true);
        assert_eq!(filter.filter("word"), "word");
    }
}
