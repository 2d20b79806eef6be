//! Fixed-width destination integers

use std::fmt::Debug;

/// An integer type the scanner can accumulate decimal digits into.
///
/// Negative numbers are built downward from zero with
/// [`append_negative_digit`](DecimalInteger::append_negative_digit), so the
/// minimum of a signed type parses even though its magnitude exceeds `MAX`.
pub trait DecimalInteger: Copy + Eq + Debug {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const SIGNED: bool;

    /// `self * 10 + digit`, or `None` if the result does not fit.
    fn append_digit(self, digit: u8) -> Option<Self>;

    /// `self * 10 - digit`, or `None` if the result does not fit.
    fn append_negative_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_decimal_integer {
    ($signed:expr => $($t:ty),*) => {
        $(
            impl DecimalInteger for $t {
                const MIN: $t = <$t>::MIN;
                const MAX: $t = <$t>::MAX;
                const ZERO: $t = 0;
                const SIGNED: bool = $signed;

                #[inline]
                fn append_digit(self, digit: u8) -> Option<$t> {
                    self.checked_mul(10)?.checked_add(digit as $t)
                }

                #[inline]
                fn append_negative_digit(self, digit: u8) -> Option<$t> {
                    self.checked_mul(10)?.checked_sub(digit as $t)
                }
            }
        )*
    };
}

impl_decimal_integer!(true => i8, i16, i32, i64, i128, isize);
impl_decimal_integer!(false => u8, u16, u32, u64, u128, usize);
