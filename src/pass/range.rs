//! Custom range specifications such as `"A-F,0-5,xyz"`.

use std::fmt;

use crate::error::{Error, Result};

/// Why a part of a range specification contributed no characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Start comes after end, e.g. `Z-A`.
    Reversed,
    /// One side of the dash is empty, e.g. `A-`.
    MissingBound,
    /// More than one dash, e.g. `A-F-K`.
    TooManyDashes,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Reversed => write!(f, "range start is after range end"),
            Rejection::MissingBound => write!(f, "range is missing a start or end character"),
            Rejection::TooManyDashes => write!(f, "more than one '-' in range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPart {
    pub part: String,
    pub reason: Rejection,
}

/// What to do with rejected parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Skip them; the caller may warn.
    #[default]
    Lenient,
    /// Fail on the first one.
    Strict,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedRange {
    pub chars: Vec<char>,
    pub rejected: Vec<RejectedPart>,
}

impl ParsedRange {
    pub fn into_chars(self, policy: RangePolicy) -> Result<Vec<char>> {
        match (policy, self.rejected.into_iter().next()) {
            (RangePolicy::Strict, Some(first)) => Err(Error::InvalidRange {
                part: first.part,
                reason: first.reason,
            }),
            _ => Ok(self.chars),
        }
    }
}

/// Parse a comma-separated list of literal runs and inclusive ranges.
///
/// A part without `-` is taken literally. A part `L-R` expands to every
/// character from the last char of `L` to the last char of `R`, by code
/// point. Duplicates across parts are kept.
pub fn parse(spec: &str) -> ParsedRange {
    let mut parsed = ParsedRange::default();

    for part in spec.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }
        if let Err(reason) = expand_part(part, &mut parsed.chars) {
            parsed.rejected.push(RejectedPart {
                part: part.to_string(),
                reason,
            });
        }
    }

    parsed
}

fn expand_part(part: &str, out: &mut Vec<char>) -> std::result::Result<(), Rejection> {
    let Some((left, right)) = part.split_once('-') else {
        out.extend(part.chars());
        return Ok(());
    };

    if right.contains('-') {
        return Err(Rejection::TooManyDashes);
    }

    let (Some(start), Some(end)) = (left.chars().last(), right.chars().last()) else {
        return Err(Rejection::MissingBound);
    };

    if start > end {
        return Err(Rejection::Reversed);
    }

    // RangeInclusive<char> skips the surrogate block.
    out.extend(start..=end);
    Ok(())
}
