//! Character set assembly for password generation.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%&*-";

/// Alphabet with the lookalike glyphs (i/l/o, I/L/O, 0/1) removed.
const EASY_TO_READ: &str = "abcdefghjkmnpqrstuvwxyzABCDEFGHJKMNPQRSTUVWXYZ23456789!@#$%&*-";

/// One selectable class of candidate characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
    EasyToRead,
}

impl CharacterClass {
    /// The fixed candidate alphabet for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
            CharacterClass::EasyToRead => EASY_TO_READ,
        }
    }
}

// Concatenation order for the non-easy classes.
const POOL_ORDER: [CharacterClass; 4] = [
    CharacterClass::Uppercase,
    CharacterClass::Lowercase,
    CharacterClass::Digits,
    CharacterClass::Special,
];

/// Which character classes participate in generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
    pub easy_to_read: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            easy_to_read: false,
        }
    }
}

impl Options {
    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Special => self.special,
            CharacterClass::EasyToRead => self.easy_to_read,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        match class {
            CharacterClass::Uppercase => self.uppercase = !self.uppercase,
            CharacterClass::Lowercase => self.lowercase = !self.lowercase,
            CharacterClass::Digits => self.digits = !self.digits,
            CharacterClass::Special => self.special = !self.special,
            CharacterClass::EasyToRead => self.easy_to_read = !self.easy_to_read,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CharsetError {
    NoClassSelected,
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetError::NoClassSelected => {
                write!(f, "Select at least one character option")
            }
        }
    }
}

/// Ordered pool of candidate bytes, sampled by index.
///
/// Every class alphabet is ASCII, so the pool is stored as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(Vec<u8>);

impl Charset {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn byte(&self, idx: usize) -> u8 {
        self.0[idx]
    }
}

/// Build the candidate pool from the enabled classes.
///
/// Easy-to-read wins outright over every other flag. Otherwise the enabled
/// class alphabets concatenate in a fixed order; the classes are disjoint,
/// so nothing is deduplicated. Never yields an empty pool.
pub fn build(options: &Options) -> Result<Charset, CharsetError> {
    if options.easy_to_read {
        return Ok(Charset(CharacterClass::EasyToRead.alphabet().as_bytes().to_vec()));
    }

    let mut pool: Vec<u8> = Vec::new();
    for class in POOL_ORDER {
        if options.has(class) {
            pool.extend_from_slice(class.alphabet().as_bytes());
        }
    }

    if pool.is_empty() {
        return Err(CharsetError::NoClassSelected);
    }

    Ok(Charset(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharacterClass) -> Options {
        let mut options = Options {
            uppercase: false,
            lowercase: false,
            digits: false,
            special: false,
            easy_to_read: false,
        };
        options.toggle(class);
        options
    }

    #[test]
    fn single_class_pools_match_their_alphabet() {
        for class in POOL_ORDER {
            let charset = build(&only(class)).unwrap();
            assert_eq!(charset.0, class.alphabet().as_bytes());
        }
    }

    #[test]
    fn default_options_concatenate_in_fixed_order() {
        let charset = build(&Options::default()).unwrap();
        let expected = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();
        assert_eq!(charset.0, expected.as_bytes());
        assert_eq!(charset.len(), 26 + 26 + 10 + 8);
    }

    #[test]
    fn nothing_selected_is_an_error_not_an_empty_pool() {
        let options = Options {
            uppercase: false,
            lowercase: false,
            digits: false,
            special: false,
            easy_to_read: false,
        };
        assert_eq!(build(&options), Err(CharsetError::NoClassSelected));
    }

    #[test]
    fn built_pools_are_never_empty() {
        // Walk every flag combination; each either errors or yields chars.
        for bits in 0..32u8 {
            let options = Options {
                uppercase: bits & 1 != 0,
                lowercase: bits & 2 != 0,
                digits: bits & 4 != 0,
                special: bits & 8 != 0,
                easy_to_read: bits & 16 != 0,
            };
            match build(&options) {
                Ok(charset) => assert!(!charset.is_empty()),
                Err(CharsetError::NoClassSelected) => assert_eq!(bits, 0),
            }
        }
    }

    #[test]
    fn easy_to_read_overrides_every_other_flag() {
        for bits in 0..16u8 {
            let options = Options {
                uppercase: bits & 1 != 0,
                lowercase: bits & 2 != 0,
                digits: bits & 4 != 0,
                special: bits & 8 != 0,
                easy_to_read: true,
            };
            let charset = build(&options).unwrap();
            assert_eq!(charset.0, EASY_TO_READ.as_bytes());
        }
    }

    #[test]
    fn easy_to_read_has_no_lookalike_glyphs() {
        for ambiguous in ['i', 'l', 'o', 'I', 'L', 'O', '0', '1'] {
            assert!(!EASY_TO_READ.contains(ambiguous), "found {:?}", ambiguous);
        }
    }

    #[test]
    fn validation_error_message_is_actionable() {
        assert_eq!(
            CharsetError::NoClassSelected.to_string(),
            "Select at least one character option"
        );
    }
}
