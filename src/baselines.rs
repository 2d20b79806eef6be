//! Comparison parsers for the benchmark

use crate::exact::parse_decimal_units;

/// Parse a whole byte slice as a `u64`.
///
/// Returns `None` for any input the implementation rejects.
pub trait DecimalParse {
    fn parse_u64(&self, input: &[u8]) -> Option<u64>;
}

/// Standard library parser. Unlike the strict parser it accepts a leading `+`.
pub struct StdParser;

impl DecimalParse for StdParser {
    #[inline]
    fn parse_u64(&self, input: &[u8]) -> Option<u64> {
        std::str::from_utf8(input).ok()?.parse().ok()
    }
}

/// The crate's exact matcher
pub struct StrictParser;

impl DecimalParse for StrictParser {
    #[inline]
    fn parse_u64(&self, input: &[u8]) -> Option<u64> {
        parse_decimal_units(input).ok()
    }
}
