#![allow(clippy::must_use_candidate)]

use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::SafeIntegral;

/// The widest signed integer the `*max` conversions work with, the counterpart of C's `intmax_t`.
pub type IntMax = i64;

/// The widest unsigned integer the `*max` conversions work with, the counterpart of C's
/// `uintmax_t`.
pub type UintMax = u64;

/// Names one of the primitive integer types.
///
/// Two [`Integral`] types are the same type exactly when their kinds are equal; `usize` and the
/// fixed-width type of the same size are distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum IntegralKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that can back a [`SafeIntegral`].
///
/// The trait is sealed and implemented for every primitive integer type. Its associated constants
/// are what the conversion layer classifies type pairs with; its methods move values through
/// 128-bit intermediates so that no comparison between two integer types can overflow.
pub trait Integral:
    sealed::Sealed + Copy + Ord + Hash + Default + Debug + Display + Send + Sync + 'static
{
    /// Which primitive type this is.
    const KIND: IntegralKind;
    /// Whether the type holds negative values.
    const SIGNED: bool;
    /// The width of the type in bits.
    const BITS: u32;
    /// The smallest value of the type.
    const MIN: Self;
    /// The largest value of the type.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;
    /// [`MAX`](Self::MAX) as a `u128`. Every maximum is positive, so this is exact.
    const MAX_WIDE: u128;

    /// Whether the value is below zero.
    fn is_negative(self) -> bool;

    /// The value sign- or zero-extended to 128 bits, as an unsigned bit pattern.
    ///
    /// Truncating the result back to `Self` gives the original value.
    fn to_wide_bits(self) -> u128;

    /// The value as an `i128`. Exact for every value except `u128`s above `i128::MAX`.
    fn to_wide_signed(self) -> i128;

    /// Keeps the low [`BITS`](Self::BITS) bits of `bits`.
    fn truncate(bits: u128) -> Self;

    /// Range-checked construction from a signed 128-bit value.
    fn safe_from_signed(value: i128) -> SafeIntegral<Self>;

    /// Range-checked construction from an unsigned 128-bit value.
    fn safe_from_unsigned(value: u128) -> SafeIntegral<Self>;
}

/// The unsigned primitive integers.
pub trait Unsigned: Integral {}

/// Whether `T` holds negative values.
pub const fn is_signed<T: Integral>() -> bool {
    T::SIGNED
}

/// Whether `T` holds only non-negative values.
pub const fn is_unsigned<T: Integral>() -> bool {
    !T::SIGNED
}

/// Whether `A` and `B` are the same primitive type.
pub const fn is_same<A: Integral, B: Integral>() -> bool {
    A::KIND as u8 == B::KIND as u8
}

macro_rules! impl_integral {
    ($ty:ident, $kind:ident, $signed:literal $(, $marker:ident)?) => {
        impl sealed::Sealed for $ty {}
        $(impl $marker for $ty {})?

        impl Integral for $ty {
            const KIND: IntegralKind = IntegralKind::$kind;
            const SIGNED: bool = $signed;
            const BITS: u32 = <$ty>::BITS;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const ZERO: Self = 0;
            #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
            const MAX_WIDE: u128 = <$ty>::MAX as u128;

            #[inline]
            #[allow(unused_comparisons)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
            fn to_wide_bits(self) -> u128 {
                self as u128
            }

            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
            fn to_wide_signed(self) -> i128 {
                self as i128
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            fn truncate(bits: u128) -> Self {
                bits as $ty
            }

            #[inline]
            fn safe_from_signed(value: i128) -> SafeIntegral<Self> {
                SafeIntegral::<$ty>::from_signed(value)
            }

            #[inline]
            fn safe_from_unsigned(value: u128) -> SafeIntegral<Self> {
                SafeIntegral::<$ty>::from_unsigned(value)
            }
        }
    };
}

macro_rules! generate {
    ($($unsigned:ident $unsigned_kind:ident $signed:ident $signed_kind:ident,)*) => { $(
        impl_integral!($unsigned, $unsigned_kind, false, Unsigned);
        impl_integral!($signed, $signed_kind, true);
    )* };
}

generate! {
    u8 U8 i8 I8,
    u16 U16 i16 I16,
    u32 U32 i32 I32,
    u64 U64 i64 I64,
    u128 U128 i128 I128,
    usize Usize isize Isize,
}
