//! Interactive screen: class toggles, length control, generate, copy, history.

mod text;

pub use text::print_help;

use crossterm::event::{Event, KeyCode, KeyModifiers, read};
use zeroize::Zeroize;

use crate::board::{CopyText, SystemClipboard};
use crate::cli::prompts;
use crate::engine::{
    self, CharacterClass, Engine, HISTORY_CAP, LENGTH_MAX, LENGTH_MIN, Options,
};
use crate::rand::HwRand;
use crate::settings::Settings;
use crate::terminal::{
    DIM, GREEN, RESET, RawModeGuard, box_bottom, box_line, box_line_center, box_top,
    calculate_entropy, clear, entropy_strength, flush, print_error, print_rule,
};

const TOGGLES: [(char, &str, CharacterClass); 5] = [
    ('u', "Uppercase", CharacterClass::Uppercase),
    ('l', "Lowercase", CharacterClass::Lowercase),
    ('d', "Digits", CharacterClass::Digits),
    ('s', "Special (!@#$%&*-)", CharacterClass::Special),
    ('e', "Easy to read (overrides the rest)", CharacterClass::EasyToRead),
];

/// Feedback line under the box: Ok prints plain, Err prints red.
type Notice = Result<String, String>;

/// Run interactive mode.
pub fn run() {
    let mut settings = Settings::load().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let mut options = settings.options();
    let mut length = settings.length.clamp(LENGTH_MIN, LENGTH_MAX);
    let mut engine = Engine::new();
    let mut rng = HwRand::new();
    let mut board = SystemClipboard::new().ok();
    let mut current = String::new();
    let mut notice: Option<Notice> = None;

    loop {
        draw(&options, length, &current, engine.history(), notice.take());

        let key = match read_key() {
            Some(key) => key,
            None => break,
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Reset terminal BEFORE exit since process::exit doesn't run destructors
                crate::exits::reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Enter | KeyCode::Char('g') => match engine::charset::build(&options) {
                Ok(charset) => {
                    current.zeroize();
                    current = engine.generate(&charset, length, &mut rng);
                }
                Err(e) => notice = Some(Err(e.to_string())),
            },
            KeyCode::Char('c') => notice = Some(copy_text(&mut board, &current, "password")),
            KeyCode::Char(ch @ '1'..='5') => {
                let n = ch as usize - '1' as usize;
                notice = Some(match engine.history().get(n) {
                    Some(entry) => {
                        copy_text(&mut board, entry, &format!("history entry {}", n + 1))
                    }
                    None => Err(format!("No history entry {}", n + 1)),
                });
            }
            KeyCode::Left | KeyCode::Char('-') => {
                if length > LENGTH_MIN {
                    length -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                if length < LENGTH_MAX {
                    length += 1;
                }
            }
            KeyCode::Char(ch) => {
                for (toggle_key, _, class) in TOGGLES {
                    if ch == toggle_key {
                        options.toggle(class);
                    }
                }
            }
            _ => {}
        }
    }

    // Persist last-used toggles and length for the next run.
    settings.set_options(&options);
    settings.length = length;
    if let Err(e) = settings.save() {
        prompts::warn(&format!("Failed to save settings: {}", e));
    }

    current.zeroize();
    clear();
}

fn copy_text(board: &mut Option<SystemClipboard>, text: &str, what: &str) -> Notice {
    if text.is_empty() {
        return Err("Nothing to copy yet".into());
    }
    match board.as_mut() {
        Some(board) => match board.copy(text) {
            Ok(()) => Ok(format!("Copied {} to clipboard", what)),
            Err(e) => Err(format!("Clipboard error: {}", e)),
        },
        None => Err("Clipboard unavailable".into()),
    }
}

/// Block for one key press under raw mode.
fn read_key() -> Option<crossterm::event::KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) => return Some(key),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
}

fn draw(
    options: &Options,
    length: usize,
    current: &str,
    history: &[String],
    notice: Option<Notice>,
) {
    clear();
    box_top("passgen");

    if current.is_empty() {
        box_line_center(&format!("{DIM}press Enter to generate{RESET}"));
    } else {
        box_line_center(current);
    }

    match engine::charset::build(options) {
        Ok(charset) => {
            let bits = calculate_entropy(length, charset.len());
            box_line_center(&format!(
                "{DIM}{:.1} bits ({}) \u{2022} {} chars{RESET}",
                bits,
                entropy_strength(bits),
                charset.len()
            ));
        }
        Err(_) => box_line_center(&format!("{DIM}no character class selected{RESET}")),
    }

    print_rule();
    box_line(&format!(
        "  Length: {:>2}   [{} - {}]  adjust with \u{2190}/\u{2192}",
        length, LENGTH_MIN, LENGTH_MAX
    ));
    print_rule();

    for (key, label, class) in TOGGLES {
        if options.has(class) {
            box_line(&format!("  {}) {GREEN}[x]{RESET} {}", key, label));
        } else {
            box_line(&format!("  {}) {DIM}[ ]{RESET} {}", key, label));
        }
    }

    print_rule();
    box_line("  History (newest first):");
    for n in 0..HISTORY_CAP {
        match history.get(n) {
            Some(entry) => box_line(&format!("  {}) {}", n + 1, entry)),
            None => box_line(&format!("  {}) {DIM}-{RESET}", n + 1)),
        }
    }

    print_rule();
    box_line_center("Enter generate | c copy | 1-5 copy from history | q quit");
    box_bottom();

    match notice {
        Some(Ok(msg)) => println!("{msg}"),
        Some(Err(msg)) => print_error(&msg),
        None => println!(),
    }
    flush();
}
