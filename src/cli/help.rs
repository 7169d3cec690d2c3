//! Help screens and the `charset` listing.

use std::io::{self, Write};

use super::{Command, ParseError};
use crate::error::Result;
use crate::pass::charset::{CharClass, SIMILAR};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

fn command_summary(name: &str) -> &'static str {
    match name {
        "gen" => "Generate passwords (default)",
        "charset" => "Show built-in character sets",
        _ => "Show help for a command",
    }
}

fn print_gen_options(out: &mut dyn Write) -> io::Result<()> {
    box_line(out, " Characters:")?;
    box_opt(out, "  --lower", "Include lowercase letters (a-z)")?;
    box_opt(out, "  --upper", "Include uppercase letters (A-Z)")?;
    box_opt(out, "  --digits", "Include digits (0-9)")?;
    box_opt(out, "  --symbols", "Include symbols (!@#$...)")?;
    box_opt(out, "  --all", "Use every built-in class")?;
    box_opt(
        out,
        "  -g <RANGE>",
        "Custom characters, e.g. \"A-F,0-5,xyz\". Added on top of any classes, including --all.",
    )?;
    box_opt(out, "  --no-similar", "Exclude similar characters (0/O, 1/l/I, 5/S)")?;
    box_opt(out, "  --strict", "Fail on malformed range parts instead of skipping them")?;
    box_line(out, "")?;
    box_line(out, " Password:")?;
    box_opt(out, "  -l <N>", "Characters per password (default: 12)")?;
    box_opt(out, "  -n <N>", "How many to generate (default: 1)")?;
    box_line(out, "")?;
    box_line(out, " Output:")?;
    box_opt(out, "  --json", "Print a JSON array instead of one per line")?;
    box_opt(out, "  -q, --quiet", "Suppress warnings")?;
    Ok(())
}

pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    box_top(out, "passgen")?;
    box_line_center(out, "Random password generator")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  passgen [gen] [OPTIONS]")?;
    box_line(out, "  passgen <COMMAND>")?;
    box_line(out, "")?;
    box_line(out, "COMMANDS:")?;
    for name in Command::NAMES {
        box_opt(out, &format!("  {name}"), command_summary(name))?;
    }
    box_line(out, "")?;
    box_line(out, "OPTIONS:")?;
    print_gen_options(out)?;
    box_line(out, "")?;
    box_line(out, " Info:")?;
    box_opt(out, "  -h, --help", "Display this help message")?;
    box_opt(out, "  -v, --version", "Display version")?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  passgen -l 16 --all            One password, 16 characters")?;
    box_line(out, "  passgen -n 5 --lower --digits  Five lowercase/digit passwords")?;
    box_line(out, "  passgen -g \"A-Z,0-9\" -l 8      Custom range")?;
    box_line(out, "  passgen --all --json -n 3      JSON array of three")?;
    box_line(out, "")?;
    box_line(out, "Use 'passgen help <command>' for more details.")?;
    box_bottom(out)
}

fn print_gen_help(out: &mut dyn Write) -> io::Result<()> {
    box_top(out, "passgen gen")?;
    box_line(out, "Generate random passwords with custom rules.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  passgen gen [OPTIONS]")?;
    box_line(out, "")?;
    print_gen_options(out)?;
    box_line(out, "")?;
    box_line(out, "EXAMPLES:")?;
    box_line(out, "  passgen gen -l 16 -all")?;
    box_line(out, "  passgen gen -n 5 -lower -digits")?;
    box_line(out, "  passgen gen -g \"A-Z,0-9\" -l 8")?;
    box_bottom(out)
}

fn print_charset_help(out: &mut dyn Write) -> io::Result<()> {
    box_top(out, "passgen charset")?;
    box_line(out, "Show the character sets used for password generation.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  passgen charset")?;
    box_bottom(out)
}

fn print_help_help(out: &mut dyn Write) -> io::Result<()> {
    box_top(out, "passgen help")?;
    box_line(out, "Show detailed help for a specific command.")?;
    box_line(out, "")?;
    box_line(out, "USAGE:")?;
    box_line(out, "  passgen help [COMMAND]")?;
    box_bottom(out)
}

/// Help for one command, or the main screen when `topic` is `None`.
pub fn print_topic(out: &mut dyn Write, topic: Option<&str>) -> Result<()> {
    let Some(name) = topic else {
        return Ok(print_help(out)?);
    };

    match Command::from_name(name) {
        Some(Command::Gen) => print_gen_help(out)?,
        Some(Command::Charset) => print_charset_help(out)?,
        Some(Command::Help(_)) => print_help_help(out)?,
        None => return Err(ParseError::UnknownCommand(name.to_string()).into()),
    }
    Ok(())
}

pub fn charset_lines() -> Vec<String> {
    CharClass::ALL
        .iter()
        .map(|class| (class.label(), class.chars()))
        .chain(std::iter::once(("similar", SIMILAR)))
        .map(|(label, chars)| format!("{:<9}{}", format!("{label}:"), chars))
        .collect()
}

pub fn print_charsets(out: &mut dyn Write) -> io::Result<()> {
    for line in charset_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn charset_listing() {
        let lines = charset_lines();
        assert_eq!(
            lines,
            vec![
                "lower:   abcdefghijklmnopqrstuvwxyz",
                "upper:   ABCDEFGHIJKLMNOPQRSTUVWXYZ",
                "digits:  0123456789",
                "symbols: !@#$%^&*()-_=+[]{};:,.<>?/|",
                "similar: 0O1lI5S",
            ]
        );
    }

    #[test]
    fn unknown_topic_is_usage_error() {
        let mut out = Vec::new();
        let err = print_topic(&mut out, Some("nope")).unwrap_err();
        assert!(out.is_empty());
        assert!(matches!(err, Error::Usage(ParseError::UnknownCommand(_))));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn every_topic_renders_a_box() {
        for topic in [None, Some("gen"), Some("charset"), Some("help")] {
            let mut out = Vec::new();
            print_topic(&mut out, topic).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.starts_with("┌─ passgen"), "{topic:?}");
            assert!(text.trim_end().ends_with('┘'), "{topic:?}");
        }
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_an_io_error() {
        let err = print_charsets(&mut Closed).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = print_topic(&mut Closed, None).unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(print_help(&mut Closed).unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
