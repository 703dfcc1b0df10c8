//! Clipboard copy seam.
//!
//! The rest of the program only ever hands a string to a copy capability;
//! the system clipboard sits behind this trait so front ends and tests can
//! substitute their own sink.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

pub trait CopyText {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by `copypasta`.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    /// Fails when no clipboard is reachable (e.g. headless session).
    pub fn new() -> Result<Self, String> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| e.to_string())
    }
}

impl CopyText for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| e.to_string())?;

        // Read back to confirm the set landed, then wipe the local copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
