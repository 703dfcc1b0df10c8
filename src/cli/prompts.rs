//! Warnings, errors, and interactive prompts, with quiet-mode gating.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Quiet mode suppresses warnings and confirmations, never errors.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation after a successful clipboard copy - suppressed in quiet mode
pub fn copied() {
    if !quiet() {
        println!("copied to clipboard");
    }
}

/// Prompt when the clipboard is unavailable. Returns true to print to the
/// terminal instead, false to abort. Quiet or non-interactive runs fall
/// back to the terminal silently.
pub fn clipboard_fallback() -> bool {
    if quiet() || !is_interactive() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true; // Fallback on read error
    }

    eprintln!("Aborted.");
    false
}
