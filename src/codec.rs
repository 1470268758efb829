//! Hex-string numeric codec used by every JSON-RPC payload.
//!
//! Quantities travel as `0x`-prefixed lowercase hex without zero padding,
//! with zero encoded as `0x0`. Native quantities decode to `i64`, large ones
//! (balances, difficulty, gas prices) to [`BigUint`].

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Error returned when a wire quantity is not a valid hex (or decimal) number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedHex {
    input: String,
}

impl MalformedHex {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for MalformedHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed hex quantity {:?}", self.input)
    }
}

impl std::error::Error for MalformedHex {}

fn hex_digits(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Parses a hex quantity (with or without `0x`) into an `i64`.
///
/// Empty digits (`"0x"`), signs, non-hex characters and values above
/// `i64::MAX` are rejected.
pub fn parse_int(value: &str) -> Result<i64, MalformedHex> {
    let digits = hex_digits(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MalformedHex::new(value));
    }
    i64::from_str_radix(digits, 16).map_err(|_| MalformedHex::new(value))
}

/// Parses a numeric literal into a [`BigUint`].
///
/// `0x`-prefixed input is read as hex, anything else as decimal.
pub fn parse_big_int(value: &str) -> Result<BigUint, MalformedHex> {
    let trimmed = value.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(rest) => (rest, 16),
        None => (trimmed, 10),
    };

    let valid = !digits.is_empty()
        && digits.bytes().all(|b| match radix {
            16 => b.is_ascii_hexdigit(),
            _ => b.is_ascii_digit(),
        });
    if !valid {
        return Err(MalformedHex::new(value));
    }

    BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| MalformedHex::new(value))
}

/// Formats a quantity as `0x` + lowercase hex.
pub fn int_to_hex(value: u64) -> String {
    format!("0x{value:x}")
}

/// Formats a big quantity as `0x` + lowercase hex; zero is `0x0`.
pub fn big_to_hex(value: &BigUint) -> String {
    format!("0x{value:x}")
}

/// Serde adapter for native hex quantities. `null` decodes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HexInt(pub i64);

impl From<HexInt> for i64 {
    fn from(value: HexInt) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for HexInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_int(&raw)
                .map(HexInt)
                .map_err(serde::de::Error::custom),
            None => Ok(HexInt(0)),
        }
    }
}

/// Serde adapter for arbitrary precision hex quantities. `null` decodes to zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HexBigInt(pub BigUint);

impl From<HexBigInt> for BigUint {
    fn from(value: HexBigInt) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for HexBigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_big_int(&raw)
                .map(HexBigInt)
                .map_err(serde::de::Error::custom),
            None => Ok(HexBigInt::default()),
        }
    }
}
