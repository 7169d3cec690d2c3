//! Character set building for password generation.

use crate::cli::prompts;
use crate::error::Result;
use crate::settings::Settings;

use super::range::{self, RangePolicy};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|";

/// Characters that are easy to mistake for one another.
pub const SIMILAR: &str = "0O1lI5S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// Every class, in the order they are appended to an alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lower => "lower",
            CharClass::Upper => "upper",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        }
    }
}

/// The characters a password is drawn from. Order is kept and duplicates are
/// not removed, so a repeated character is proportionally more likely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Alphabet(s.chars().collect())
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(chars: Vec<char>) -> Self {
        Alphabet(chars)
    }
}

/// Build the alphabet for `settings`.
///
/// Classes are appended in fixed order (all four when `all` is set), then the
/// custom range, then similar characters are stripped. The result may be
/// empty; callers must check before generating.
pub fn build(settings: &Settings) -> Result<Alphabet> {
    let mut chars: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        if settings.includes(class) {
            chars.extend(class.chars().chars());
        }
    }

    if let Some(spec) = settings.custom_range.as_deref().filter(|s| !s.is_empty()) {
        let parsed = range::parse(spec);
        if settings.range_policy == RangePolicy::Lenient {
            for rejected in &parsed.rejected {
                prompts::warn(&format!(
                    "Warning: skipping range part {:?}: {}",
                    rejected.part, rejected.reason
                ));
            }
        }
        chars.extend(parsed.into_chars(settings.range_policy)?);
    }

    if settings.no_similar {
        chars.retain(|c| !SIMILAR.contains(*c));
    }

    log::debug!("alphabet built: {} chars", chars.len());
    Ok(chars.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn settings() -> Settings {
        Settings::default()
    }

    fn contains_any(alphabet: &Alphabet, set: &str) -> bool {
        set.chars().any(|c| alphabet.as_slice().contains(&c))
    }

    #[test]
    fn all_has_every_class() {
        let alphabet = build(&Settings {
            all: true,
            ..settings()
        })
        .unwrap();
        for class in CharClass::ALL {
            assert!(contains_any(&alphabet, class.chars()), "{}", class.label());
        }
        assert_eq!(alphabet.len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn all_keeps_fixed_order() {
        let alphabet = build(&Settings {
            all: true,
            ..settings()
        })
        .unwrap();
        let got: String = alphabet.as_slice().iter().collect();
        assert_eq!(got, format!("{LOWERCASE}{UPPERCASE}{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn specific_classes_exclude_symbols() {
        let alphabet = build(&Settings {
            lowercase: true,
            uppercase: true,
            digits: true,
            ..settings()
        })
        .unwrap();
        assert!(!contains_any(&alphabet, SYMBOLS));
        for c in ['a', 'Z', '9'] {
            assert!(alphabet.as_slice().contains(&c));
        }
    }

    #[test]
    fn no_similar_strips_confusables_for_every_selection() {
        for mask in 0u8..16 {
            let alphabet = build(&Settings {
                lowercase: mask & 1 != 0,
                uppercase: mask & 2 != 0,
                digits: mask & 4 != 0,
                symbols: mask & 8 != 0,
                custom_range: Some("0-9,I,l,O,S".into()),
                no_similar: true,
                ..settings()
            })
            .unwrap();
            assert!(!contains_any(&alphabet, SIMILAR), "mask {mask:04b}");
        }
    }

    #[test]
    fn no_similar_removes_every_occurrence() {
        let alphabet = build(&Settings {
            custom_range: Some("0-2,0,0,a".into()),
            no_similar: true,
            ..settings()
        })
        .unwrap();
        assert_eq!(alphabet.as_slice(), &['2', 'a']);
    }

    #[test]
    fn custom_range_alone() {
        let alphabet = build(&Settings {
            custom_range: Some("A-C,1-2".into()),
            ..settings()
        })
        .unwrap();
        assert_eq!(alphabet, Alphabet::from("ABC12"));
    }

    #[test]
    fn custom_range_is_additive_under_all() {
        let alphabet = build(&Settings {
            all: true,
            custom_range: Some("ä".into()),
            ..settings()
        })
        .unwrap();
        assert_eq!(alphabet.as_slice().last(), Some(&'ä'));
    }

    #[test]
    fn overlapping_sources_keep_duplicates() {
        let alphabet = build(&Settings {
            digits: true,
            custom_range: Some("0-1".into()),
            ..settings()
        })
        .unwrap();
        assert_eq!(alphabet.len(), 12);
        assert_eq!(alphabet.as_slice().iter().filter(|&&c| c == '0').count(), 2);
    }

    #[test]
    fn nothing_selected_is_empty() {
        assert!(build(&settings()).unwrap().is_empty());
        let only_similar = build(&Settings {
            custom_range: Some("0,O,1".into()),
            no_similar: true,
            ..settings()
        })
        .unwrap();
        assert!(only_similar.is_empty());
    }

    #[test]
    fn empty_custom_range_is_ignored() {
        let alphabet = build(&Settings {
            custom_range: Some(String::new()),
            ..settings()
        })
        .unwrap();
        assert!(alphabet.is_empty());
    }

    #[test]
    fn strict_policy_propagates_range_error() {
        let err = build(&Settings {
            lowercase: true,
            custom_range: Some("a-b-c".into()),
            range_policy: RangePolicy::Strict,
            ..settings()
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn lenient_policy_skips_bad_parts() {
        let alphabet = build(&Settings {
            custom_range: Some("z-a,x".into()),
            ..settings()
        })
        .unwrap();
        assert_eq!(alphabet, Alphabet::from("x"));
    }
}
