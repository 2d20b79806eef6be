//! Whole-input decimal matching

use log::trace;

use crate::integer::DecimalInteger;
use crate::scan::scan;
use crate::status::{ParseError, Status};
use crate::unit::CodeUnit;

/// Parse `input` as a decimal integer that must span the entire input.
///
/// Same grammar as [`scan`], but any unconsumed trailing unit (whitespace,
/// a decimal point, letters) turns an `Ok` scan into [`Status::Invalid`].
/// `out` is written only when the result is [`Status::Ok`].
pub fn parse_exact<C: CodeUnit, T: DecimalInteger>(input: &[C], out: &mut T) -> Status {
    let mut value = *out;
    let result = scan(input, &mut value);
    match result.status {
        Status::Ok if result.stop == input.len() => {
            *out = value;
            Status::Ok
        }
        Status::Ok => {
            trace!(
                "rejecting decimal match: {} trailing unit(s) after index {}",
                input.len() - result.stop,
                result.stop
            );
            Status::Invalid
        }
        status => status,
    }
}

#[inline]
pub fn parse_exact_str<T: DecimalInteger>(input: &str, out: &mut T) -> Status {
    parse_exact(input.as_bytes(), out)
}

/// Exact-match `input` and return the value.
///
/// ```
/// use decimal_parse::{parse_decimal, ParseError};
///
/// assert_eq!(parse_decimal::<i32>("-2147483648"), Ok(i32::MIN));
/// assert_eq!(parse_decimal::<u8>("256"), Err(ParseError::OutOfRange));
/// assert_eq!(parse_decimal::<u8>("12 "), Err(ParseError::Invalid));
/// ```
pub fn parse_decimal<T: DecimalInteger>(input: &str) -> Result<T, ParseError> {
    parse_decimal_units(input.as_bytes())
}

/// [`parse_decimal`] over narrow or wide code units.
pub fn parse_decimal_units<C: CodeUnit, T: DecimalInteger>(input: &[C]) -> Result<T, ParseError> {
    let mut value = T::ZERO;
    parse_exact(input, &mut value).into_result()?;
    Ok(value)
}
