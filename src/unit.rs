//! Character code units accepted by the parsers

/// A narrow or wide character unit.
///
/// Only ASCII `0`-`9` are digits and only ASCII `-` is a minus sign. Other
/// scripts' digits, full-width forms and locale rules are never consulted.
pub trait CodeUnit: Copy {
    /// Value of an ASCII decimal digit, `None` for anything else.
    fn digit_value(self) -> Option<u8>;

    fn is_minus(self) -> bool;
}

impl CodeUnit for u8 {
    #[inline]
    fn digit_value(self) -> Option<u8> {
        let digit = self.wrapping_sub(b'0');
        if digit <= 9 {
            Some(digit)
        } else {
            None
        }
    }

    #[inline]
    fn is_minus(self) -> bool {
        self == b'-'
    }
}

macro_rules! impl_wide_code_unit {
    ($($t:ty),*) => {
        $(
            impl CodeUnit for $t {
                #[inline]
                fn digit_value(self) -> Option<u8> {
                    let digit = self.wrapping_sub(b'0' as $t);
                    if digit <= 9 {
                        Some(digit as u8)
                    } else {
                        None
                    }
                }

                #[inline]
                fn is_minus(self) -> bool {
                    self == b'-' as $t
                }
            }
        )*
    };
}

impl_wide_code_unit!(u16, u32);

impl CodeUnit for char {
    #[inline]
    fn digit_value(self) -> Option<u8> {
        if self.is_ascii_digit() {
            Some(self as u8 - b'0')
        } else {
            None
        }
    }

    #[inline]
    fn is_minus(self) -> bool {
        self == '-'
    }
}
