//! Generation settings for one run.

use crate::pass::charset::CharClass;
use crate::pass::output::Format;
use crate::pass::range::RangePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub all: bool,
    pub custom_range: Option<String>,
    pub no_similar: bool,
    pub range_policy: RangePolicy,
    pub format: Format,
}

impl Settings {
    /// Whether `class` was selected, either directly or through `all`.
    pub fn includes(&self, class: CharClass) -> bool {
        self.all
            || match class {
                CharClass::Lower => self.lowercase,
                CharClass::Upper => self.uppercase,
                CharClass::Digit => self.digits,
                CharClass::Symbol => self.symbols,
            }
    }

    pub fn select(&mut self, class: CharClass) {
        match class {
            CharClass::Lower => self.lowercase = true,
            CharClass::Upper => self.uppercase = true,
            CharClass::Digit => self.digits = true,
            CharClass::Symbol => self.symbols = true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            all: false,
            custom_range: None,
            no_similar: false,
            range_policy: RangePolicy::Lenient,
            format: Format::Plain,
        }
    }
}
