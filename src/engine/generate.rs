//! Password sampling and the engine that owns generation history.

use super::charset::Charset;
use super::history::History;
use crate::rand::RandomSource;

/// Generation engine. Owns the rolling history of produced passwords; there
/// is no other state, so every generation call is parameterized in full by
/// its charset, length, and randomness source.
pub struct Engine {
    history: History,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Sample `length` characters uniformly, with replacement, from `charset`.
    ///
    /// The result is pushed onto the history front before being returned.
    /// An empty charset or a zero length is a caller bug that upstream
    /// validation makes unreachable, and panics.
    pub fn generate<R: RandomSource>(
        &mut self,
        charset: &Charset,
        length: usize,
        rng: &mut R,
    ) -> String {
        assert!(!charset.is_empty(), "charset must not be empty");
        assert!(length >= 1, "length must be at least 1");

        let bytes: Vec<u8> = (0..length)
            .map(|_| charset.byte(rng.next() % charset.len()))
            .collect();
        // Safety: every charset alphabet is ASCII
        let password = unsafe { String::from_utf8_unchecked(bytes) };

        self.history.push(password.clone());
        password
    }

    /// Most-recent-first view of retained passwords, at most [`super::HISTORY_CAP`].
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
