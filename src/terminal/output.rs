//! Box drawing and ANSI output helpers.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m";
pub const DIM: &str = "\x1b[90m";
const RED: &str = "\x1b[31m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print error message in red
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 62;

/// Print box top with optional title: ┌─ Title ──────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                   │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        println!("│ {}{} │", content, " ".repeat(inner_width - display_len));
    } else {
        // Content too long - just print it (will overflow)
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │       content       │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total = inner_width - display_len;
        let left = total / 2;
        println!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └──────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a horizontal rule (box style)
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description
/// into the remaining column width.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 22;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Readout
// ============================================================================

/// Password entropy in bits: length * log2(charset size)
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Strength label for an entropy value
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_grows_with_length_and_charset() {
        assert_eq!(calculate_entropy(0, 26), 0.0);
        assert_eq!(calculate_entropy(8, 0), 0.0);
        assert!(calculate_entropy(12, 70) > calculate_entropy(8, 70));
        assert!(calculate_entropy(12, 70) > calculate_entropy(12, 26));
    }

    #[test]
    fn strength_labels_cover_the_canonical_range() {
        // 8 chars of a 26-char class up to 20 chars of the full pool.
        assert_eq!(entropy_strength(calculate_entropy(8, 26)), "Fair");
        assert_eq!(entropy_strength(calculate_entropy(20, 70)), "Strong");
        assert_eq!(entropy_strength(10.0), "Weak");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }

    #[test]
    fn console_width_ignores_ansi_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width("\x1b[32mok\x1b[0m"), 2);
    }
}
