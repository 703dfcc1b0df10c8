//! Persisted generation preferences.

mod file;

use crate::engine::{LENGTH_DEFAULT, Options};

/// Last-used length and class toggles, persisted between runs.
///
/// Generated passwords and their history are deliberately not part of this:
/// history lives in memory for the process lifetime only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
    pub easy_to_read: bool,
}

impl Settings {
    pub fn load() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// The engine-facing view of the toggles.
    pub fn options(&self) -> Options {
        Options {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            special: self.special,
            easy_to_read: self.easy_to_read,
        }
    }

    pub fn set_options(&mut self, options: &Options) {
        self.uppercase = options.uppercase;
        self.lowercase = options.lowercase;
        self.digits = options.digits;
        self.special = options.special;
        self.easy_to_read = options.easy_to_read;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: LENGTH_DEFAULT,
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
            easy_to_read: false,
        }
    }
}
