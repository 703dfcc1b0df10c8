//! Bounded most-recent-first history of generated passwords.

use zeroize::Zeroize;

/// Maximum number of retained passwords.
pub const HISTORY_CAP: usize = 5;

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAP),
        }
    }

    /// Insert at the front; the oldest entry past the cap is wiped and dropped.
    pub fn push(&mut self, password: String) {
        self.entries.insert(0, password);
        while self.entries.len() > HISTORY_CAP {
            if let Some(mut evicted) = self.entries.pop() {
                evicted.zeroize();
            }
        }
    }

    /// Most-recent-first snapshot.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Drop for History {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            entry.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_sits_at_the_front() {
        let mut history = History::new();
        history.push("first".into());
        history.push("second".into());
        history.push("third".into());
        assert_eq!(history.entries(), ["third", "second", "first"]);
    }

    #[test]
    fn never_holds_more_than_the_cap() {
        let mut history = History::new();
        for n in 0..20 {
            history.push(format!("pass{}", n));
            assert!(history.entries().len() <= HISTORY_CAP);
        }
    }

    #[test]
    fn oldest_is_evicted_first() {
        let mut history = History::new();
        for n in 0..HISTORY_CAP + 1 {
            history.push(format!("pass{}", n));
        }
        assert_eq!(
            history.entries(),
            ["pass5", "pass4", "pass3", "pass2", "pass1"]
        );
    }
}
