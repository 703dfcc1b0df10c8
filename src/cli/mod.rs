//! Non-interactive command-line mode.

mod flags;
mod parse;
pub mod prompts;

pub use flags::Flags;
pub use parse::parse;

use zeroize::Zeroize;

use crate::board::{CopyText, SystemClipboard};
use crate::engine::{self, Engine, Options};
use crate::rand::HwRand;
use crate::settings::Settings;
use crate::tui::print_help;

pub fn run(args: Vec<String>) {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }
    };

    if flags.help {
        print_help();
        return;
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    prompts::set_quiet(flags.quiet);

    let settings = Settings::load().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let options = apply_toggles(settings.options(), &flags);
    let length = flags.length.unwrap_or(settings.length);
    let count = flags.number.unwrap_or(1).max(1);

    let charset = match engine::charset::build(&options) {
        Ok(charset) => charset,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut board = if flags.board {
        match SystemClipboard::new() {
            Ok(board) => Some(board),
            Err(_) => {
                if !prompts::clipboard_fallback() {
                    std::process::exit(0);
                }
                None
            }
        }
    } else {
        None
    };

    let mut engine = Engine::new();
    let mut rng = HwRand::new();

    // With a clipboard target the passwords accumulate and land in a single
    // copy; otherwise each one prints as it is produced.
    let mut clip_buf = board.as_ref().map(|_| String::new());

    for _ in 0..count {
        let mut password = engine.generate(&charset, length, &mut rng);
        match clip_buf.as_mut() {
            Some(buf) => {
                buf.push_str(&password);
                buf.push('\n');
            }
            None => println!("{}", password),
        }
        password.zeroize();
    }

    if let (Some(board), Some(mut buf)) = (board.as_mut(), clip_buf) {
        match board.copy(buf.trim_end()) {
            Ok(()) => prompts::copied(),
            Err(e) => prompts::error(&format!("Clipboard error: {}", e)),
        }
        buf.zeroize();
    }

    if flags.show_history {
        for (n, entry) in engine.history().iter().enumerate() {
            println!("{}) {}", n + 1, entry);
        }
    }
}

/// CLI toggles are relative to the loaded settings.
fn apply_toggles(mut options: Options, flags: &Flags) -> Options {
    if flags.no_upper {
        options.uppercase = false;
    }
    if flags.no_lower {
        options.lowercase = false;
    }
    if flags.no_digits {
        options.digits = false;
    }
    if flags.no_special {
        options.special = false;
    }
    if flags.easy {
        options.easy_to_read = true;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_subtract_from_the_loaded_options() {
        let flags = Flags {
            no_upper: true,
            no_digits: true,
            ..Flags::default()
        };
        let options = apply_toggles(Options::default(), &flags);
        assert!(!options.uppercase);
        assert!(!options.digits);
        assert!(options.lowercase);
        assert!(options.special);
    }

    #[test]
    fn easy_flag_enables_the_easy_class() {
        let flags = Flags {
            easy: true,
            ..Flags::default()
        };
        assert!(apply_toggles(Options::default(), &flags).easy_to_read);
    }
}
