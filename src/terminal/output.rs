//! Terminal output utilities.
//!
//! Box drawing, the strength bar, ANSI helpers.

use crossterm::style::{Color, Stylize};
use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::StrengthHint;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print success message in green.
pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let padding = INNER_WIDTH - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print prose inside the box, word-wrapped to the inner width.
pub fn box_paragraph(text: &str, indent: usize) {
    for line in wrap_words(text, INNER_WIDTH - indent) {
        box_line(&format!("{}{}", " ".repeat(indent), line));
    }
}

/// Print an unbroken string (a password) split into box-width rows.
pub fn box_chunks(text: &str) {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        box_line("");
        return;
    }
    for chunk in chars.chunks(INNER_WIDTH) {
        box_line(&chunk.iter().collect::<String>());
    }
}

/// Print a key hint with description: │ key      description │
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 14;
    let key_padded = format!("{:<width$}", key, width = key_col);
    let desc_col = INNER_WIDTH - key_col;

    let lines = wrap_words(desc, desc_col);
    let mut rows = lines.iter();
    match rows.next() {
        Some(first) => box_line(&format!("{key_padded}{first}")),
        None => box_line(&key_padded),
    }
    for line in rows {
        box_line(&format!("{}{}", " ".repeat(key_col), line));
    }
}

/// Coloured bar sized by the strength hint. No colour means an empty track.
pub fn strength_bar(hint: StrengthHint) -> String {
    let track = INNER_WIDTH;
    match hint.color {
        Some(color) => {
            let (r, g, b) = color.rgb();
            let filled = hint.width.cells(track);
            format!(
                "{}{DIM}{}{RESET}",
                "█".repeat(filled).with(Color::Rgb { r, g, b }),
                "░".repeat(track - filled)
            )
        }
        None => format!("{DIM}{}{RESET}", "░".repeat(track)),
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if console_width(&current) + 1 + console_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{BarWidth, length_to_strength_hint};

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
    }

    #[test]
    fn wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_words(text, 10);
        assert!(lines.iter().all(|l| l.len() <= 10));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn bar_fills_by_hint() {
        let weak = strength_bar(length_to_strength_hint(6));
        assert_eq!(weak.matches('█').count(), BarWidth::Quarter.cells(INNER_WIDTH));
        assert_eq!(console_width(&weak), INNER_WIDTH);

        let strong = strength_bar(length_to_strength_hint(80));
        assert_eq!(strong.matches('█').count(), INNER_WIDTH);

        let none = strength_bar(length_to_strength_hint(3));
        assert_eq!(none.matches('█').count(), 0);
    }
}
