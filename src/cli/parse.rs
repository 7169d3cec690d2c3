use thiserror::Error;

use super::{CliFlags, Command};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Invalid boolean for {flag}: {value}")]
    InvalidBool { flag: String, value: String },
    #[error("{0} must be greater than zero")]
    NotPositive(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),
}

/// Parse `args` (including the program name at index 0).
///
/// Long flags may be written with one or two dashes, and value flags accept
/// either `-l 16` or `-l=16`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut rest = args.get(1..).unwrap_or_default();

    if let Some(first) = rest.first()
        && !first.starts_with('-')
    {
        let command = Command::from_name(first)
            .ok_or_else(|| ParseError::UnknownCommand(first.clone()))?;
        rest = &rest[1..];

        if command == Command::Help(None) {
            flags.command = Some(Command::Help(rest.first().cloned()));
            return Ok(flags);
        }
        flags.command = Some(command);
    }

    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (arg, None),
        };
        let key = name
            .strip_prefix("--")
            .or_else(|| name.strip_prefix('-'))
            .ok_or_else(|| ParseError::UnknownArg(arg.to_string()))?;

        match key {
            "h" | "help" => flags.help = bool_value(name, inline)?,
            "v" | "version" => flags.version = bool_value(name, inline)?,
            "q" | "quiet" => flags.quiet = bool_value(name, inline)?,
            "lower" => flags.lower = bool_value(name, inline)?,
            "upper" => flags.upper = bool_value(name, inline)?,
            "digits" => flags.digits = bool_value(name, inline)?,
            "symbols" => flags.symbols = bool_value(name, inline)?,
            "all" => flags.all = bool_value(name, inline)?,
            "no-similar" => flags.no_similar = bool_value(name, inline)?,
            "json" => flags.json = bool_value(name, inline)?,
            "strict" => flags.strict = bool_value(name, inline)?,
            "l" | "length" => {
                let raw = value(rest, &mut i, name, inline)?;
                flags.length = Some(positive(name, &raw)?);
            }
            "n" | "number" => {
                let raw = value(rest, &mut i, name, inline)?;
                flags.number = Some(positive(name, &raw)?);
            }
            "g" | "range" => flags.custom = Some(value(rest, &mut i, name, inline)?),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn bool_value(flag: &str, inline: Option<&str>) -> Result<bool, ParseError> {
    match inline {
        None | Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(ParseError::InvalidBool {
            flag: flag.to_string(),
            value: other.to_string(),
        }),
    }
}

fn value(
    rest: &[String],
    i: &mut usize,
    flag: &str,
    inline: Option<&str>,
) -> Result<String, ParseError> {
    if let Some(v) = inline {
        return Ok(v.to_string());
    }
    *i += 1;
    rest.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn positive(flag: &str, raw: &str) -> Result<usize, ParseError> {
    let n: usize = raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        flag: flag.to_string(),
        value: raw.to_string(),
    })?;
    if n == 0 {
        return Err(ParseError::NotPositive(flag.to_string()));
    }
    Ok(n)
}
