//! Longest-prefix decimal scanner

use crate::integer::DecimalInteger;
use crate::status::{ScanResult, Status};
use crate::unit::CodeUnit;

/// Scan the longest decimal integer at the start of `input` into `out`.
///
/// A single leading `-` is accepted only when `T` is signed; `+` never is.
/// Digits are consumed greedily and nothing after the digit run is looked
/// at, so `"0x12"` yields `0` with `stop == 1`. On overflow the rest of the
/// digit run is still consumed and the status is [`Status::OutOfRange`].
///
/// `out` is written only when the status is [`Status::Ok`].
pub fn scan<C: CodeUnit, T: DecimalInteger>(input: &[C], out: &mut T) -> ScanResult {
    let negative = T::SIGNED && input.first().is_some_and(|unit| unit.is_minus());
    let digits_start = usize::from(negative);

    let mut value = Some(T::ZERO);
    let mut stop = digits_start;
    for unit in &input[digits_start..] {
        let Some(digit) = unit.digit_value() else {
            break;
        };
        // once overflowed, keep walking the run without touching the value
        value = value.and_then(|v| {
            if negative {
                v.append_negative_digit(digit)
            } else {
                v.append_digit(digit)
            }
        });
        stop += 1;
    }

    if stop == digits_start {
        return ScanResult::invalid();
    }

    match value {
        Some(value) => {
            *out = value;
            ScanResult {
                stop,
                status: Status::Ok,
            }
        }
        None => ScanResult {
            stop,
            status: Status::OutOfRange,
        },
    }
}

/// [`scan`] over the UTF-8 bytes of `input`; `stop` is a byte index.
#[inline]
pub fn scan_str<T: DecimalInteger>(input: &str, out: &mut T) -> ScanResult {
    scan(input.as_bytes(), out)
}
