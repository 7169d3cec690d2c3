//! Box drawing (74 char width) with word-wrapped option rows.

use std::io::{self, Write};

pub const BOX_WIDTH: usize = 74;

/// Column where option descriptions start inside a box.
const FLAG_COL: usize = 22;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Print box content line: │ content                                        │
pub fn box_line<W: Write + ?Sized>(out: &mut W, content: &str) -> io::Result<()> {
    let padding = (BOX_WIDTH - 4).saturating_sub(content.chars().count());
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// Print centered box content line: │          content          │
pub fn box_line_center<W: Write + ?Sized>(out: &mut W, content: &str) -> io::Result<()> {
    let total_padding = (BOX_WIDTH - 4).saturating_sub(content.chars().count());
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt<W: Write + ?Sized>(out: &mut W, flag: &str, desc: &str) -> io::Result<()> {
    for line in opt_lines(flag, desc) {
        box_line(out, &line)?;
    }
    Ok(())
}

fn opt_lines(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = BOX_WIDTH - 4 - FLAG_COL;
    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        wrapped.push(current);
    }

    let mut lines = Vec::with_capacity(wrapped.len().max(1));
    let first = wrapped.first().map(String::as_str).unwrap_or("");
    lines.push(format!("{:<width$}{}", flag, first, width = FLAG_COL));
    for rest in wrapped.iter().skip(1) {
        lines.push(format!("{}{rest}", " ".repeat(FLAG_COL)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_option_fits_one_line() {
        let lines = opt_lines("  -l <N>", "Password length");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  -l <N>"));
        assert_eq!(&lines[0][FLAG_COL..], "Password length");
    }

    #[test]
    fn long_option_wraps_under_description_column() {
        let desc = "word ".repeat(30);
        let lines = opt_lines("  --x", &desc);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= BOX_WIDTH - 4);
        }
        assert!(lines[1].starts_with(&" ".repeat(FLAG_COL)));
    }

    #[test]
    fn box_rows_have_equal_width() {
        let mut out = Vec::new();
        box_top(&mut out, "title").unwrap();
        box_line_center(&mut out, "middle").unwrap();
        box_opt(&mut out, "  --x", &"word ".repeat(30)).unwrap();
        box_bottom(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().count() > 4);
        for line in text.lines() {
            assert_eq!(line.chars().count(), BOX_WIDTH, "{line}");
        }
    }
}
