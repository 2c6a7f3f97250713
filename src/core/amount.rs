//! Deposit amount normalisation.
//!
//! `min_deposit` values are written for humans (`1NEAR`, `0.25NEAR`,
//! `500`) and emitted as yoctoNEAR integer strings. The `NEAR` suffix
//! scales by 10^24; a bare number is taken as yoctoNEAR already.

use std::sync::LazyLock;

use primitive_types::U256;
use regex::Regex;
use thiserror::Error;

/// Unit suffix selecting whole-NEAR amounts.
pub const NEAR_SUFFIX: &str = "NEAR";

/// Decimal places between NEAR and yoctoNEAR.
pub const YOCTO_DECIMALS: i64 = 24;

/// Largest power of ten that still fits into 256 bits.
const MAX_DECIMAL_DIGITS: i64 = 78;

static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE](?P<exp>[+-]?[0-9]+))?$")
        .unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("'{0}' is not a decimal number")]
    Malformed(String),
    #[error("'{0}' is negative")]
    Negative(String),
    #[error("'{0}' does not fit into 256 bits")]
    Overflow(String),
}

/// Convert a deposit literal into a yoctoNEAR integer string.
///
/// Digits below one yoctoNEAR are truncated.
///
/// # Examples
///
/// ```
/// use neargo::core::amount::normalize_amount;
///
/// assert_eq!(normalize_amount("1NEAR").unwrap(), "1000000000000000000000000");
/// assert_eq!(normalize_amount("").unwrap(), "0");
/// ```
pub fn normalize_amount(raw: &str) -> Result<String, AmountError> {
    let amount = raw.trim();
    if amount.is_empty() {
        return Ok("0".to_string());
    }

    let (number, scale) = match amount.strip_suffix(NEAR_SUFFIX) {
        Some(number) => (number, YOCTO_DECIMALS),
        None => (amount, 0),
    };

    if number.starts_with('-') {
        return Err(AmountError::Negative(number.to_string()));
    }

    let captures = DECIMAL_REGEX
        .captures(number)
        .ok_or_else(|| AmountError::Malformed(number.to_string()))?;
    let int_part = captures.name("int").map_or("", |m| m.as_str());
    let frac_part = captures.name("frac").map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::Malformed(number.to_string()));
    }

    let exponent: i64 = match captures.name("exp") {
        Some(exp) => exp
            .as_str()
            .parse()
            .map_err(|_| AmountError::Overflow(number.to_string()))?,
        None => 0,
    };

    let digits = format!("{}{}", int_part, frac_part);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok("0".to_string());
    }

    // Value is `digits * 10^shift`.
    let shift = exponent
        .checked_sub(frac_part.len() as i64)
        .and_then(|shift| shift.checked_add(scale))
        .ok_or_else(|| AmountError::Overflow(number.to_string()))?;

    let integer = if shift >= 0 {
        if shift > MAX_DECIMAL_DIGITS - digits.len() as i64 {
            return Err(AmountError::Overflow(number.to_string()));
        }
        format!("{}{}", digits, "0".repeat(shift as usize))
    } else {
        let keep = (digits.len() as i64).saturating_add(shift);
        if keep <= 0 {
            return Ok("0".to_string());
        }
        digits[..keep as usize].to_string()
    };

    U256::from_dec_str(&integer)
        .map(|value| value.to_string())
        .map_err(|_| AmountError::Overflow(number.to_string()))
}
