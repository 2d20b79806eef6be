//! Strict Decimal Integer Parsing
//!
//! Converts runs of ASCII decimal digits into fixed-width integers with no
//! radix detection, no locale sensitivity and no clamping on overflow.
//!
//! - [`scan`] consumes the longest decimal prefix and reports where it stopped.
//! - [`parse_exact`] additionally requires the whole input to be consumed.
//!
//! Both are generic over the destination integer ([`DecimalInteger`]) and the
//! character unit ([`CodeUnit`]: `u8`, `u16`, `u32`, `char`). The destination
//! is written only on [`Status::Ok`], so a pre-seeded sentinel survives any
//! failed parse.

pub mod baselines;
pub mod exact;
pub mod integer;
pub mod scan;
pub mod status;
pub mod unit;


pub use exact::{parse_decimal, parse_decimal_units, parse_exact, parse_exact_str};
pub use integer::DecimalInteger;
pub use scan::{scan, scan_str};
pub use status::{ParseError, ScanResult, Status};
pub use unit::CodeUnit;

#[cfg(test)]
mod tests {
    use crate::baselines::*;

    fn test_parser<P: DecimalParse>(parser: &P) {
        // Basic cases
        assert_eq!(parser.parse_u64(b"0"), Some(0));
        assert_eq!(parser.parse_u64(b"1"), Some(1));
        assert_eq!(parser.parse_u64(b"123"), Some(123));
        assert_eq!(parser.parse_u64(b"999999999"), Some(999999999));

        // Edge cases
        assert_eq!(parser.parse_u64(b""), None); // empty
        assert_eq!(parser.parse_u64(b"abc"), None); // non-digits
        assert_eq!(parser.parse_u64(b"12a34"), None); // mixed
        assert_eq!(parser.parse_u64(b"-1"), None); // negative
        assert_eq!(parser.parse_u64(b" 123"), None); // leading space
        assert_eq!(parser.parse_u64(b"123 "), None); // trailing space
        assert_eq!(parser.parse_u64(b"0x12"), None); // radix prefix

        // Max u64
        assert_eq!(parser.parse_u64(b"18446744073709551615"), Some(u64::MAX));

        // Overflow
        assert_eq!(parser.parse_u64(b"18446744073709551616"), None); // MAX + 1
        assert_eq!(parser.parse_u64(b"99999999999999999999"), None); // way over

        // Leading zeros (valid, still decimal)
        assert_eq!(parser.parse_u64(b"007"), Some(7));
        assert_eq!(parser.parse_u64(b"0777"), Some(777));
        assert_eq!(parser.parse_u64(b"00000"), Some(0));
    }

    #[test]
    fn test_std_parser() {
        test_parser(&StdParser);
    }

    #[test]
    fn test_strict_parser() {
        test_parser(&StrictParser);
    }

    #[test]
    fn test_strict_parser_rejects_plus() {
        assert_eq!(StdParser.parse_u64(b"+123"), Some(123));
        assert_eq!(StrictParser.parse_u64(b"+123"), None);
    }
}
