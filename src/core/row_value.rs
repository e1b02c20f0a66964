//! Row value checksum.
//!
//! Scoring runs in two passes:
//! [`validate`] decides whether the whole string reads as an integer
//! literal, and [`score`] walks the characters and weights every decimal
//! digit by its 1-based position. Anything that is not a digit (a sign,
//! surrounding whitespace, a digit-group underscore) is skipped by the
//! scan but still occupies its position.

use crate::domain::model::DigitEntry;
use crate::utils::error::{Result, RowRosterError};
use regex::Regex;
use std::sync::OnceLock;

/// Weight applied to digits sitting at even positions.
pub const EVEN_POSITION_WEIGHT: i64 = 5;

fn integer_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\p{Nd}+(?:_\p{Nd}+)*$").expect("static pattern"))
}

fn decimal_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{Nd}$").expect("static pattern"))
}

fn is_decimal(c: char) -> bool {
    let mut buf = [0u8; 4];
    decimal_digit().is_match(c.encode_utf8(&mut buf))
}

/// Decimal value of a Unicode `Nd` character.
///
/// `Nd` digits are encoded in contiguous runs made of whole blocks of ten,
/// each block starting at its zero, so the offset from the start of the
/// run modulo ten is the value.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal(c) {
        return None;
    }
    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

/// Returns `true` when `input` is an integer literal.
///
/// Accepted shape: optional surrounding whitespace, at most one leading
/// `+` or `-`, then Unicode decimal digits (`Nd`, so `"١٢"` and full-width
/// `"１２"` count) where a single `_` may separate two digits. Empty
/// strings, lone signs, decimal points, exponents and any letter are
/// rejected.
pub fn validate(input: &str) -> bool {
    integer_literal().is_match(input.trim())
}

/// Collects every decimal digit of `input` with its 1-based position.
pub fn digit_entries(input: &str) -> Vec<DigitEntry> {
    input
        .chars()
        .enumerate()
        .filter_map(|(index, c)| {
            decimal_value(c).map(|value| DigitEntry {
                position: index + 1,
                value,
            })
        })
        .collect()
}

/// Odd positions add `value * position`, even positions subtract
/// `value * 5`. Never fails; non-digit characters contribute nothing.
pub fn score(input: &str) -> i64 {
    digit_entries(input).iter().fold(0i64, |total, entry| {
        let value = i64::from(entry.value);
        if entry.position % 2 == 0 {
            total - value * EVEN_POSITION_WEIGHT
        } else {
            total + value * entry.position as i64
        }
    })
}

pub fn calc_row_value(input: &str) -> Result<i64> {
    if !validate(input) {
        tracing::error!(input = %input, "Unrecognized characters in input string");
        return Err(RowRosterError::InvalidInput {
            input: input.to_string(),
        });
    }

    let value = score(input);
    tracing::debug!(input = %input, value, "scored row");
    Ok(value)
}
