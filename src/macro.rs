/// Build a [`SafeIntegral`](crate::SafeIntegral) from a suffixed integer literal, checked at
/// compile time.
///
/// The suffix picks the type: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `umax`, or their `i`
/// counterparts. Decimal literals work for every type and hexadecimal ones for unsigned types;
/// a literal outside the range of its type does not compile.
///
/// ```
/// use safe_integral::{lit, SafeI8, SafeUMax};
///
/// const LOW: SafeI8 = lit!(-128_i8);
/// const MASK: SafeUMax = lit!(0xFFFF_FFFF_FFFF_FFFF_umax);
/// assert_eq!(LOW, i8::MIN);
/// assert_eq!(MASK, SafeUMax::MAX);
/// assert!(LOW.valid() && MASK.valid());
/// ```
///
/// ```compile_fail
/// let _ = safe_integral::lit!(256_u8);
/// ```
///
/// ```compile_fail
/// let _ = safe_integral::lit!(-1_u32);
/// ```
///
/// ```compile_fail
/// let _ = safe_integral::lit!(0x7F_i8);
/// ```
#[cfg(feature = "macro")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "macro")))]
#[macro_export]
macro_rules! lit {
    ($($tt:tt)*) => {
        $crate::__private::proc_macro! { [$crate] $($tt)* }
    };
}

/// Parse a string literal into a [`SafeIntegral`](crate::SafeIntegral) at compile time.
///
/// Takes the primitive type (or `umax`/`imax`) and the text. The text is parsed like
/// [`from_literal`](crate::SafeU8::from_literal) in a `const` block, and a literal that does not
/// fit turns into a compile error rather than a poisoned value.
///
/// ```
/// use safe_integral::{literal, SafeIMax, SafeU16};
///
/// const PORT: SafeU16 = literal!(u16, "8080");
/// const FLAGS: SafeU16 = literal!(u16, "0xFFFF");
/// const OFFSET: SafeIMax = literal!(imax, "-9223372036854775808");
/// assert_eq!(PORT, 8080);
/// assert_eq!(FLAGS, u16::MAX);
/// assert_eq!(OFFSET, SafeIMax::MIN);
/// ```
///
/// ```compile_fail
/// const TOO_BIG: safe_integral::SafeU8 = safe_integral::literal!(u8, "256");
/// ```
#[macro_export]
macro_rules! literal {
    (umax, $text:expr $(,)?) => {
        $crate::__literal!($crate::UintMax, $text)
    };
    (imax, $text:expr $(,)?) => {
        $crate::__literal!($crate::IntMax, $text)
    };
    ($ty:ident, $text:expr $(,)?) => {
        $crate::__literal!(::core::primitive::$ty, $text)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __literal {
    ($ty:ty, $text:expr) => {
        const {
            let value = $crate::SafeIntegral::<$ty>::from_literal($text);
            ::core::assert!(value.valid(), "integer literal is out of range for its type");
            value
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{SafeI16, SafeIMax, SafeU8, SafeUMax, SafeUsize};

    #[test]
    fn string_literals() {
        const ZERO: SafeU8 = literal!(u8, "0");
        const MAX: SafeU8 = literal!(u8, "255");
        const HEX: SafeUsize = literal!(usize, "0x10");
        const NEGATIVE: SafeI16 = literal!(i16, "-32768");
        const WIDE: SafeUMax = literal!(umax, "18446744073709551615");
        const SIGNED_WIDE: SafeIMax = literal!(imax, "-1",);

        assert_eq!(ZERO, 0);
        assert_eq!(MAX, SafeU8::MAX);
        assert_eq!(HEX, 16);
        assert_eq!(NEGATIVE, SafeI16::MIN);
        assert_eq!(WIDE, SafeUMax::MAX);
        assert_eq!(SIGNED_WIDE, -1);
        assert!([ZERO, MAX].iter().all(|value| value.valid()));
    }

    #[test]
    #[cfg(feature = "macro")]
    fn suffixed_literals() {
        const MAX: SafeU8 = lit!(255_u8);
        const HEX: SafeU8 = lit!(0xF_u8);
        const MIN: SafeI16 = lit!(-32768_i16);
        const WIDE: SafeIMax = lit!(-9_223_372_036_854_775_808_imax);

        assert_eq!(MAX, SafeU8::MAX);
        assert_eq!(HEX, 15);
        assert_eq!(MIN, SafeI16::MIN);
        assert_eq!(WIDE, SafeIMax::MIN);
        assert_eq!(lit!(7_usize), 7);
        assert!(MAX.valid() && MIN.valid());
    }
}
