use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Number of comparison levels a collator takes into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CollationStrength {
    /// Base letters only: "a", "A" and "á" compare equal.
    Primary,
    /// Base letters and accents: "a" equals "A" but not "á".
    Secondary,
    /// Base letters, accents and case.
    #[default]
    Tertiary,
}

/// Locale-aware label comparison approximating the Unicode root collation.
///
/// Text is compared on its canonical decomposition, so precomposed and
/// decomposed spellings of the same character are always equal. Levels:
/// 1. case-folded base characters, with the sharp s expanded to "ss",
/// 2. combining marks attached to each base character,
/// 3. case, with lowercase ordered before uppercase and the sharp s after
///    the matching plain "ss".
///
/// Other root-collation contractions and expansions are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelCollator {
    strength: CollationStrength,
}

/// Precomputed sort key; `Ord` on keys agrees with [`LabelCollator::compare`].
///
/// `secondary` has one entry more than `primary`: marks that precede any
/// base character, then the marks of each base in turn. `tertiary` holds one
/// case weight per base.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<u8>,
}

const TERTIARY_LOWER: u8 = 0;
const TERTIARY_LOWER_VARIANT: u8 = 1;
const TERTIARY_UPPER: u8 = 2;
const TERTIARY_UPPER_VARIANT: u8 = 3;

const SHARP_S_EXPANSION: [char; 2] = ['s', 's'];

impl LabelCollator {
    #[must_use]
    pub const fn new(strength: CollationStrength) -> Self {
        Self { strength }
    }

    #[must_use]
    pub const fn strength(self) -> CollationStrength {
        self.strength
    }

    #[must_use]
    pub fn key(self, text: &str) -> CollationKey {
        let mut primary = Vec::with_capacity(text.len());
        let mut secondary: Vec<Vec<char>> = Vec::with_capacity(text.len() + 1);
        let mut tertiary = Vec::with_capacity(text.len());
        secondary.push(Vec::new());

        for ch in text.nfd() {
            let upper = ch.is_uppercase();
            // Lowercasing may yield several chars, some of them marks.
            for folded in ch.to_lowercase() {
                if is_combining_mark(folded) {
                    if let Some(marks) = secondary.last_mut() {
                        marks.push(folded);
                    }
                    continue;
                }

                let (bases, weight): (&[char], u8) = match (folded, upper) {
                    ('\u{df}', false) => (&SHARP_S_EXPANSION[..], TERTIARY_LOWER_VARIANT),
                    ('\u{df}', true) => (&SHARP_S_EXPANSION[..], TERTIARY_UPPER_VARIANT),
                    (_, false) => (std::slice::from_ref(&folded), TERTIARY_LOWER),
                    (_, true) => (std::slice::from_ref(&folded), TERTIARY_UPPER),
                };
                for &base in bases {
                    primary.push(base);
                    secondary.push(Vec::new());
                    tertiary.push(weight);
                }
            }
        }

        match self.strength {
            CollationStrength::Primary => {
                secondary.clear();
                tertiary.clear();
            }
            CollationStrength::Secondary => tertiary.clear(),
            CollationStrength::Tertiary => {}
        }

        CollationKey {
            primary,
            secondary,
            tertiary,
        }
    }

    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.key(a).cmp(&self.key(b))
    }

    #[must_use]
    pub fn equals(self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{CollationStrength, LabelCollator};

    #[test]
    fn case_is_secondary_to_letters() {
        let collator = LabelCollator::default();
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("Apple", "banana"), Ordering::Less);
        assert_eq!(collator.compare("a", "A"), Ordering::Less);
    }

    #[test]
    fn canonically_equivalent_spellings_are_equal() {
        let collator = LabelCollator::default();
        assert!(collator.equals("caf\u{e9}", "cafe\u{301}"));
        assert!(!collator.equals("cafe", "caf\u{e9}"));
    }

    #[test]
    fn accents_order_after_plain_letters() {
        let collator = LabelCollator::default();
        assert_eq!(collator.compare("cote", "c\u{f4}te"), Ordering::Less);
        assert_eq!(collator.compare("c\u{f4}te", "cotf"), Ordering::Less);
    }

    #[test]
    fn weaker_strengths_merge_more_labels() {
        let primary = LabelCollator::new(CollationStrength::Primary);
        let secondary = LabelCollator::new(CollationStrength::Secondary);
        assert!(primary.equals("Resume", "r\u{e9}sum\u{e9}"));
        assert!(secondary.equals("Resume", "resume"));
        assert!(!secondary.equals("resume", "r\u{e9}sum\u{e9}"));
    }

    #[test]
    fn sharp_s_sorts_with_ss_and_differs_only_by_case_level() {
        let collator = LabelCollator::default();
        let secondary = LabelCollator::new(CollationStrength::Secondary);
        assert!(secondary.equals("stra\u{df}e", "strasse"));
        assert!(secondary.equals("STRA\u{1e9e}E", "strasse"));

        assert_eq!(collator.compare("strasse", "stra\u{df}e"), Ordering::Less);
        assert_eq!(collator.compare("stra\u{df}e", "STRASSE"), Ordering::Less);
        assert_eq!(collator.compare("STRASSE", "STRA\u{1e9e}E"), Ordering::Less);
        assert_eq!(collator.compare("stra\u{df}e", "strasst"), Ordering::Less);
    }

    #[test]
    fn dotted_capital_i_keeps_its_mark_on_the_base_letter() {
        let primary = LabelCollator::new(CollationStrength::Primary);
        let secondary = LabelCollator::new(CollationStrength::Secondary);
        assert!(primary.equals("\u{130}stanbul", "istanbul"));
        assert!(!secondary.equals("\u{130}stanbul", "istanbul"));
        assert!(secondary.equals("\u{130}stanbul", "i\u{307}stanbul"));
    }

    #[test]
    fn leading_marks_do_not_shift_later_levels() {
        let primary = LabelCollator::new(CollationStrength::Primary);
        let secondary = LabelCollator::new(CollationStrength::Secondary);
        assert!(primary.equals("\u{301}ab", "a\u{301}b"));
        assert!(!secondary.equals("\u{301}ab", "a\u{301}b"));
        assert!(!secondary.equals("\u{301}ab", "ab"));
    }
}
