//! Digit accumulation shared by [`FromStr`](core::str::FromStr), `from_str_radix` and the
//! poisoning literal parser.
//!
//! Two grammars are accepted. The radix grammar follows `str::parse`: an optional `+` or `-`
//! followed by digits of the given radix. The literal grammar is stricter: decimal digits with an
//! optional leading `-`, or, for unsigned types only, `0x` followed by hexadecimal digits. Both
//! accumulate in `const fn`s, digit by digit, with overflow checks.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::error::Error;

/// The text left after the prefix or sign, and how to read it.
#[derive(Clone, Copy)]
struct Digits<'a> {
    negative: bool,
    radix: u32,
    digits: &'a [u8],
}

impl<'a> Digits<'a> {
    const fn radix(src: &'a [u8], radix: u32) -> Self {
        assert!(
            2 <= radix && radix <= 36,
            "from_str_radix: radix must lie in the range `[2, 36]`",
        );
        let (negative, digits) = match src {
            [b'+', rest @ ..] => (false, rest),
            [b'-', rest @ ..] => (true, rest),
            digits => (false, digits),
        };
        Self {
            negative,
            radix,
            digits,
        }
    }

    const fn literal(src: &'a [u8], signed: bool) -> Self {
        match src {
            [b'0', b'x', rest @ ..] if !signed => Self {
                negative: false,
                radix: 16,
                digits: rest,
            },
            [b'-', rest @ ..] => Self {
                negative: true,
                radix: 10,
                digits: rest,
            },
            digits => Self {
                negative: false,
                radix: 10,
                digits,
            },
        }
    }
}

const fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    if (value as u32) < radix {
        Some(value as u32)
    } else {
        None
    }
}

macro_rules! accumulate_impl {
    ($($ty:ident)*) => { $(
        impl $crate::__private::Dispatch<$ty> {
            /// Parses `[+-]?digits` in the given radix.
            pub const fn from_ascii_radix(src: &[u8], radix: u32) -> Result<$ty, ParseError> {
                Self::accumulate(Digits::radix(src, radix))
            }

            /// Parses `-?decimal`, or `0x` and hexadecimal digits for unsigned types.
            pub const fn from_ascii_literal(src: &[u8]) -> Result<$ty, ParseError> {
                Self::accumulate(Digits::literal(src, <$ty as $crate::Integral>::SIGNED))
            }

            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            const fn accumulate(text: Digits<'_>) -> Result<$ty, ParseError> {
                let Digits { negative, radix, mut digits } = text;
                if digits.is_empty() {
                    return Err(ParseError::new(ParseErrorKind::NoDigits));
                }

                let mut value: $ty = 0;
                while let [byte, rest @ ..] = digits {
                    let Some(digit) = digit_value(*byte, radix) else {
                        return Err(ParseError::new(ParseErrorKind::InvalidDigit));
                    };
                    // Negative values build downwards so that `MIN` is reachable.
                    let next = match value.checked_mul(radix as $ty) {
                        Some(scaled) if negative => scaled.checked_sub(digit as $ty),
                        Some(scaled) => scaled.checked_add(digit as $ty),
                        None => None,
                    };
                    value = match next {
                        Some(next) => next,
                        None if negative => return Err(ParseError::new(ParseErrorKind::BelowMin)),
                        None => return Err(ParseError::new(ParseErrorKind::AboveMax)),
                    };
                    digits = rest;
                }
                Ok(value)
            }
        }
    )* }
}
accumulate_impl! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

/// Why text could not be read as a safe integral.
///
/// Returned by every `from_str_radix()` (such as
/// [`SafeI8::from_str_radix`](crate::SafeI8::from_str_radix)) and by the
/// [`FromStr`](core::str::FromStr) implementations. The poisoning parser
/// [`from_literal`](crate::SafeU8::from_literal) drops it and poisons its result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// What was wrong with the text.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ParseErrorKind::NoDigits => "no digits after the sign or prefix",
            ParseErrorKind::InvalidDigit => "unexpected character in integer text",
            ParseErrorKind::AboveMax => "integer text is above the maximum of its type",
            ParseErrorKind::BelowMin => "integer text is below the minimum of its type",
        };
        f.write_str(reason)
    }
}

#[cfg(feature = "std")]
impl Error for ParseError {}

/// The reasons integer text can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The text is empty, or holds only a sign or a `0x` prefix.
    NoDigits,
    /// A character is not a digit of the radix. A sign in the wrong place, or a `+` in a literal,
    /// is reported this way.
    InvalidDigit,
    /// The value is too large for the type.
    AboveMax,
    /// The value is too small for the type; for unsigned types, any negative value.
    BelowMin,
}
