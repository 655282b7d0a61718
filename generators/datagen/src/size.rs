//! Size Literals
//!
//! `<digits>[KB|kb|MB|mb]`, where digits are decimal or `0x`-prefixed hex.

use std::num::IntErrorKind;

use crate::constants::{KB, MAX_OUTPUT_SIZE, MB};
use crate::types::SizeError;

/// Parse a size literal into a byte count no larger than [`MAX_OUTPUT_SIZE`].
///
/// ```
/// assert_eq!(datagen::parse_size("10KB"), Ok(10 * 1024));
/// assert_eq!(datagen::parse_size("0x10"), Ok(16));
/// ```
///
/// # Errors
/// [`SizeError::Invalid`] for anything that is not a non-negative integer,
/// [`SizeError::TooLarge`] when the resulting byte count exceeds the limit.
pub fn parse_size(literal: &str) -> Result<u64, SizeError> {
    let invalid = || SizeError::Invalid(literal.to_owned());

    let (number, factor) = split_suffix(literal);
    let number = number.strip_prefix('+').unwrap_or(number);

    let (digits, radix) = match number
        .strip_prefix("0x")
        .or_else(|| number.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let value = match u64::from_str_radix(digits, radix) {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(SizeError::TooLarge { size: u64::MAX })
        }
        Err(_) => return Err(invalid()),
    };

    let size = value.saturating_mul(factor);
    if size > MAX_OUTPUT_SIZE {
        return Err(SizeError::TooLarge { size });
    }
    Ok(size)
}

fn split_suffix(literal: &str) -> (&str, u64) {
    for (suffix, factor) in [("KB", KB), ("kb", KB), ("MB", MB), ("mb", MB)] {
        if let Some(number) = literal.strip_suffix(suffix) {
            return (number, factor);
        }
    }
    (literal, 1)
}
