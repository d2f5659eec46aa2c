use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::hash::{Hash, Hasher};

use crate::Integral;

/// A fixed-width integer paired with a sticky error flag.
///
/// Every operation on a `SafeIntegral` checks for overflow, underflow, division by zero, bad
/// shift counts and lossy conversions. Instead of panicking or wrapping, a failed operation
/// returns a *poisoned* value, and every value computed from a poisoned one is poisoned too, so a
/// whole chain of arithmetic can be checked once at the end with [`valid`](Self::valid) or
/// [`invalid`](Self::invalid).
///
/// A failed operation yields [`failure()`](Self::failure): the value zero, poisoned. An operation
/// that succeeds on a poisoned operand keeps its computed value and stays poisoned.
///
/// Comparisons look at the value only and ignore the flag.
///
/// ```
/// use safe_integral::SafeU8;
///
/// let total = SafeU8::new(200) + 55;
/// assert_eq!(total, 255);
/// assert!(total.valid());
///
/// let overflowed = total + 1 - 1;
/// assert!(overflowed.invalid());
/// ```
///
/// Every operator has a `const fn` counterpart, named `poisoning_*`, so the same checks run in
/// constant contexts:
///
/// ```
/// use safe_integral::SafeI16;
///
/// const LIMIT: SafeI16 = SafeI16::new(1000).poisoning_mul(SafeI16::new(32));
/// assert_eq!(LIMIT, 32000);
/// const TOO_MUCH: SafeI16 = SafeI16::new(1000).poisoning_mul(SafeI16::new(33));
/// assert!(TOO_MUCH.invalid());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeIntegral<T> {
    value: T,
    poisoned: bool,
}

impl<T: Integral> SafeIntegral<T> {
    /// The smallest value of `T`, valid.
    pub const MIN: Self = Self::new(T::MIN);
    /// The largest value of `T`, valid.
    pub const MAX: Self = Self::new(T::MAX);
    /// Zero, valid.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Creates a valid safe integral.
    #[must_use]
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            poisoned: false,
        }
    }

    /// Creates a safe integral with an explicit poison flag.
    #[must_use]
    #[inline]
    pub const fn with_poison(value: T, poisoned: bool) -> Self {
        Self { value, poisoned }
    }

    /// Creates a valid safe integral from a constant.
    ///
    /// This is [`new`](Self::new) under the name used for named constants; the
    /// [`lit!`](crate::lit) macro expands to it after checking the literal's range.
    #[must_use]
    #[inline]
    pub const fn magic(value: T) -> Self {
        Self::new(value)
    }

    /// Zero, valid.
    #[must_use]
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// The smallest value of `T`, valid.
    #[must_use]
    #[inline]
    pub const fn min_value() -> Self {
        Self::MIN
    }

    /// The largest value of `T`, valid.
    #[must_use]
    #[inline]
    pub const fn max_value() -> Self {
        Self::MAX
    }

    /// The result of a failed operation: zero, poisoned.
    #[must_use]
    #[inline]
    pub const fn failure() -> Self {
        Self {
            value: T::ZERO,
            poisoned: true,
        }
    }

    /// Returns the value. Never fails; for a poisoned safe integral this is a sentinel.
    #[must_use]
    #[inline]
    pub const fn get(self) -> T {
        self.value
    }

    /// Whether no error has occurred in computing this value.
    #[must_use]
    #[inline]
    pub const fn valid(self) -> bool {
        !self.poisoned
    }

    /// Whether an error has occurred in computing this value.
    #[must_use]
    #[inline]
    pub const fn invalid(self) -> bool {
        self.poisoned
    }

    /// Returns a poisoned copy of `self` with the same value.
    #[must_use]
    #[inline]
    pub const fn poison(self) -> Self {
        Self {
            value: self.value,
            poisoned: true,
        }
    }

    /// Returns the value if it is valid.
    #[must_use]
    #[inline]
    pub const fn checked(self) -> Option<T> {
        if self.poisoned {
            None
        } else {
            Some(self.value)
        }
    }

    /// Returns the value if it is valid, and an error otherwise.
    ///
    /// # Errors
    ///
    /// Fails with [`PoisonedError`] if `self` is poisoned.
    #[inline]
    pub const fn into_result(self) -> Result<T, PoisonedError> {
        if self.poisoned {
            Err(PoisonedError)
        } else {
            Ok(self.value)
        }
    }

    #[cfg_attr(not(feature = "num-traits02"), allow(dead_code))]
    const fn into_valid(self) -> Option<Self> {
        if self.poisoned {
            None
        } else {
            Some(self)
        }
    }
}

/// The error returned when a poisoned [`SafeIntegral`] is unwrapped into its primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PoisonedError;

impl Display for PoisonedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("attempted to unwrap a poisoned safe integral")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PoisonedError {}

// === Comparisons ===

impl<T: Integral> PartialEq for SafeIntegral<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Integral> Eq for SafeIntegral<T> {}

impl<T: Integral> PartialOrd for SafeIntegral<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integral> Ord for SafeIntegral<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Integral> Hash for SafeIntegral<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Integral> From<T> for SafeIntegral<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// === Formatting ===

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => { $(
        impl<T: Integral + fmt::$trait> fmt::$trait for SafeIntegral<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.value, f)
            }
        }
    )* }
}

impl_fmt_traits!(Binary, Display, LowerExp, LowerHex, Octal, UpperExp, UpperHex);

// === Serde ===

#[cfg(feature = "serde1")]
use serde1::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde1")))]
impl<T: Integral + Serialize> Serialize for SafeIntegral<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.checked() {
            Some(value) => value.serialize(serializer),
            None => Err(S::Error::custom("attempted to serialize a poisoned integer")),
        }
    }
}

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde1")))]
impl<'de, T: Integral + Deserialize<'de>> Deserialize<'de> for SafeIntegral<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

// === Arbitrary ===

#[cfg(feature = "arbitrary1")]
use arbitrary1::{Arbitrary, Unstructured};

#[cfg(feature = "arbitrary1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "arbitrary1")))]
impl<'a, T: Integral + Arbitrary<'a>> Arbitrary<'a> for SafeIntegral<T> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary1::Result<Self> {
        Ok(Self::with_poison(u.arbitrary()?, u.arbitrary()?))
    }

    #[inline]
    fn size_hint(
        depth: core::primitive::usize,
    ) -> (core::primitive::usize, Option<core::primitive::usize>) {
        arbitrary1::size_hint::and(
            <T as Arbitrary<'a>>::size_hint(depth),
            <bool as Arbitrary<'a>>::size_hint(depth),
        )
    }
}

// === Bytemuck ===

// SAFETY: all zeroes is the value zero with the poison flag cleared.
#[cfg(feature = "bytemuck1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "bytemuck1")))]
unsafe impl<T: Integral + bytemuck1::Zeroable> bytemuck1::Zeroable for SafeIntegral<T> {}

macro_rules! bin_op_variations {
    ($lhs:ty, $rhs:ty, $op:ident::$method:ident) => {
        impl $op<$rhs> for &$lhs {
            type Output = Safe;
            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                <$lhs as $op<$rhs>>::$method(*self, rhs)
            }
        }
        impl $op<&$rhs> for $lhs {
            type Output = Safe;
            #[inline]
            fn $method(self, rhs: &$rhs) -> Self::Output {
                <$lhs as $op<$rhs>>::$method(self, *rhs)
            }
        }
        impl $op<&$rhs> for &$lhs {
            type Output = Safe;
            #[inline]
            fn $method(self, rhs: &$rhs) -> Self::Output {
                <$lhs as $op<$rhs>>::$method(*self, *rhs)
            }
        }
    };
}

macro_rules! assign_variations {
    ($rhs:ty, $op:ident::$method:ident/$op_assign:ident::$method_assign:ident) => {
        impl $op_assign<$rhs> for Safe {
            #[inline]
            fn $method_assign(&mut self, rhs: $rhs) {
                *self = <Self as $op<$rhs>>::$method(*self, rhs);
            }
        }
        impl $op_assign<&$rhs> for Safe {
            #[inline]
            fn $method_assign(&mut self, rhs: &$rhs) {
                *self = <Self as $op<$rhs>>::$method(*self, *rhs);
            }
        }
    };
}

macro_rules! impl_bin_op {
    ($op:ident::$method:ident/$op_assign:ident::$method_assign:ident, $poisoning:ident) => {
        use core::ops::{$op, $op_assign};

        impl $op for Safe {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$poisoning(rhs)
            }
        }
        bin_op_variations!(Safe, Safe, $op::$method);
        assign_variations!(Safe, $op::$method/$op_assign::$method_assign);

        impl $op<Inner> for Safe {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Inner) -> Self::Output {
                self.$poisoning(Self::new(rhs))
            }
        }
        bin_op_variations!(Safe, Inner, $op::$method);
        assign_variations!(Inner, $op::$method/$op_assign::$method_assign);

        impl $op<Safe> for Inner {
            type Output = Safe;
            #[inline]
            fn $method(self, rhs: Safe) -> Self::Output {
                Safe::new(self).$poisoning(rhs)
            }
        }
        bin_op_variations!(Inner, Safe, $op::$method);
    };
}

macro_rules! define_safe_integrals {
    ($($inner:ident $(signed $([$signed:ident])?)?,)*) => { $( mod $inner {
        use core::cmp;
        use core::iter;
        use core::str::FromStr;

        use super::SafeIntegral;
        use crate::parse::ParseError;
        use crate::{Integral, IntoSafe, PoisonedError};

        type Inner = core::primitive::$inner;
        type Safe = SafeIntegral<Inner>;

        impl Safe {
            /// Converts a signed 128-bit value, poisoning the result if it does not fit.
            ///
            /// This is the `const` form of [`convert`](fn@crate::convert) for any signed source,
            /// which can be widened losslessly with `as i128` first.
            #[must_use]
            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
            pub const fn from_signed(value: i128) -> Self {
                if value >= 0 {
                    Self::from_unsigned(value as u128)
                } else if <Inner as Integral>::SIGNED && value >= Inner::MIN as i128 {
                    Self::new(value as Inner)
                } else {
                    Self::failure()
                }
            }

            /// Converts an unsigned 128-bit value, poisoning the result if it does not fit.
            ///
            /// This is the `const` form of [`convert`](fn@crate::convert) for any unsigned source,
            /// which can be widened losslessly with `as u128` first.
            #[must_use]
            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
            #[allow(clippy::absurd_extreme_comparisons)]
            pub const fn from_unsigned(value: u128) -> Self {
                if value <= Inner::MAX as u128 {
                    Self::new(value as Inner)
                } else {
                    Self::failure()
                }
            }

            /// Parses an integer literal, poisoning the result if it is malformed or out of range.
            ///
            /// The text is decimal digits with an optional leading `-`; unsigned types also accept
            /// `0x` followed by hexadecimal digits. Nothing else is a literal: a `+`, a sign after
            /// `0x`, or surrounding whitespace all poison the result. Digits are accumulated with
            /// overflow checks, so a literal one past the maximum is poisoned rather than wrapped.
            ///
            /// To turn an out-of-range literal into a compile error instead, use
            /// [`literal!`](crate::literal) or [`lit!`](crate::lit).
            #[must_use]
            pub const fn from_literal(src: &str) -> Self {
                match crate::__private::Dispatch::<Inner>::from_ascii_literal(src.as_bytes()) {
                    Ok(value) => Self::new(value),
                    Err(_) => Self::failure(),
                }
            }

            /// Converts a string slice in a given base to a valid safe integral.
            ///
            /// # Errors
            ///
            /// Fails if the text is not a number in the given base or does not fit.
            ///
            /// # Panics
            ///
            /// Panics if `radix` is below 2 or above 36.
            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseError> {
                crate::__private::Dispatch::<Inner>::from_ascii_radix(src.as_bytes(), radix)
                    .map(Self::new)
            }

            const fn settle(result: Option<Inner>, poisoned: bool) -> Self {
                match result {
                    Some(value) => Self::with_poison(value, poisoned),
                    None => Self::failure(),
                }
            }

            // Negative counts become huge as `u128` and are rejected with the rest.
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            #[allow(clippy::unnecessary_cast)]
            const fn shift_count(count: Inner) -> Option<u32> {
                if (count as u128) < (Inner::BITS as u128) {
                    Some(count as u32)
                } else {
                    None
                }
            }

            /// Addition, poisoned on overflow.
            #[must_use]
            #[inline]
            pub const fn poisoning_add(self, rhs: Self) -> Self {
                Self::settle(self.value.checked_add(rhs.value), self.poisoned | rhs.poisoned)
            }

            /// Subtraction, poisoned on overflow.
            #[must_use]
            #[inline]
            pub const fn poisoning_sub(self, rhs: Self) -> Self {
                Self::settle(self.value.checked_sub(rhs.value), self.poisoned | rhs.poisoned)
            }

            /// Multiplication, poisoned on overflow.
            #[must_use]
            #[inline]
            pub const fn poisoning_mul(self, rhs: Self) -> Self {
                Self::settle(self.value.checked_mul(rhs.value), self.poisoned | rhs.poisoned)
            }

            /// Division, poisoned if `rhs` is zero or the quotient overflows (`MIN / -1`).
            #[must_use]
            #[inline]
            pub const fn poisoning_div(self, rhs: Self) -> Self {
                Self::settle(self.value.checked_div(rhs.value), self.poisoned | rhs.poisoned)
            }

            /// Remainder, poisoned if `rhs` is zero or the division overflows (`MIN % -1`).
            #[must_use]
            #[inline]
            pub const fn poisoning_rem(self, rhs: Self) -> Self {
                Self::settle(self.value.checked_rem(rhs.value), self.poisoned | rhs.poisoned)
            }

            /// Exponentiation by squaring, poisoned on overflow.
            #[must_use]
            #[inline]
            pub const fn poisoning_pow(self, exp: u32) -> Self {
                Self::settle(self.value.checked_pow(exp), self.poisoned)
            }

            /// Negation, poisoned if the result does not fit. Only zero negates in unsigned types.
            #[must_use]
            #[inline]
            pub const fn poisoning_neg(self) -> Self {
                Self::settle(self.value.checked_neg(), self.poisoned)
            }

            $($(if $signed)?
                /// Absolute value, poisoned for `MIN`.
                #[must_use]
                #[inline]
                pub const fn poisoning_abs(self) -> Self {
                    Self::settle(self.value.checked_abs(), self.poisoned)
                }
            )?

            /// Shift left.
            ///
            /// Poisoned if the count is negative or not below the bit width, or if the result
            /// does not fit: any set bit shifted out, or for signed types a change of sign.
            /// A negative signed `self` is poisoned too.
            #[must_use]
            #[inline]
            pub const fn poisoning_shl(self, rhs: Self) -> Self {
                let Some(count) = Self::shift_count(rhs.value) else {
                    return Self::failure();
                };
                $($(if $signed)?
                    if self.value < 0 {
                        return Self::failure();
                    }
                )?
                let shifted = self.value << count;
                if shifted >> count != self.value {
                    return Self::failure();
                }
                Self::with_poison(shifted, self.poisoned | rhs.poisoned)
            }

            /// Shift right.
            ///
            /// Poisoned if the count is negative or not below the bit width, or if a signed
            /// `self` is negative.
            #[must_use]
            #[inline]
            pub const fn poisoning_shr(self, rhs: Self) -> Self {
                let Some(count) = Self::shift_count(rhs.value) else {
                    return Self::failure();
                };
                $($(if $signed)?
                    if self.value < 0 {
                        return Self::failure();
                    }
                )?
                Self::with_poison(self.value >> count, self.poisoned | rhs.poisoned)
            }

            /// Bitwise and.
            #[must_use]
            #[inline]
            pub const fn poisoning_and(self, rhs: Self) -> Self {
                Self::with_poison(self.value & rhs.value, self.poisoned | rhs.poisoned)
            }

            /// Bitwise or.
            #[must_use]
            #[inline]
            pub const fn poisoning_or(self, rhs: Self) -> Self {
                Self::with_poison(self.value | rhs.value, self.poisoned | rhs.poisoned)
            }

            /// Bitwise exclusive or.
            #[must_use]
            #[inline]
            pub const fn poisoning_xor(self, rhs: Self) -> Self {
                Self::with_poison(self.value ^ rhs.value, self.poisoned | rhs.poisoned)
            }

            /// Bitwise complement.
            #[must_use]
            #[inline]
            pub const fn poisoning_not(self) -> Self {
                Self::with_poison(!self.value, self.poisoned)
            }
        }

        // === Operators ===

        impl_bin_op!(Add::add/AddAssign::add_assign, poisoning_add);
        impl_bin_op!(Sub::sub/SubAssign::sub_assign, poisoning_sub);
        impl_bin_op!(Mul::mul/MulAssign::mul_assign, poisoning_mul);
        impl_bin_op!(Div::div/DivAssign::div_assign, poisoning_div);
        impl_bin_op!(Rem::rem/RemAssign::rem_assign, poisoning_rem);
        impl_bin_op!(BitAnd::bitand/BitAndAssign::bitand_assign, poisoning_and);
        impl_bin_op!(BitOr::bitor/BitOrAssign::bitor_assign, poisoning_or);
        impl_bin_op!(BitXor::bitxor/BitXorAssign::bitxor_assign, poisoning_xor);
        impl_bin_op!(Shl::shl/ShlAssign::shl_assign, poisoning_shl);
        impl_bin_op!(Shr::shr/ShrAssign::shr_assign, poisoning_shr);

        use core::ops::{Neg, Not};

        impl Neg for Safe {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self::Output {
                self.poisoning_neg()
            }
        }
        impl Neg for &Safe {
            type Output = Safe;
            #[inline]
            fn neg(self) -> Self::Output {
                -*self
            }
        }

        impl Not for Safe {
            type Output = Self;
            #[inline]
            fn not(self) -> Self::Output {
                self.poisoning_not()
            }
        }
        impl Not for &Safe {
            type Output = Safe;
            #[inline]
            fn not(self) -> Self::Output {
                !*self
            }
        }

        // === Comparisons ===

        impl PartialEq<Inner> for Safe {
            #[inline]
            fn eq(&self, other: &Inner) -> bool {
                self.value == *other
            }
        }
        impl PartialEq<Safe> for Inner {
            #[inline]
            fn eq(&self, other: &Safe) -> bool {
                *self == other.value
            }
        }

        impl PartialOrd<Inner> for Safe {
            #[inline]
            fn partial_cmp(&self, other: &Inner) -> Option<cmp::Ordering> {
                self.value.partial_cmp(other)
            }
        }
        impl PartialOrd<Safe> for Inner {
            #[inline]
            fn partial_cmp(&self, other: &Safe) -> Option<cmp::Ordering> {
                self.partial_cmp(&other.value)
            }
        }

        // === Iterator traits ===

        impl iter::Sum for Safe {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Self::poisoning_add)
            }
        }
        impl<'a> iter::Sum<&'a Self> for Safe {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl iter::Product for Safe {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::new(1), Self::poisoning_mul)
            }
        }
        impl<'a> iter::Product<&'a Self> for Safe {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().product()
            }
        }

        // === Parsing ===

        impl FromStr for Safe {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str_radix(s, 10)
            }
        }

        // === Conversions ===

        impl IntoSafe for Inner {
            type Integral = Inner;

            #[inline]
            fn into_safe(self) -> Safe {
                Safe::new(self)
            }
        }

        impl TryFrom<Safe> for Inner {
            type Error = PoisonedError;

            #[inline]
            fn try_from(safe: Safe) -> Result<Self, Self::Error> {
                safe.into_result()
            }
        }

        // === Num ===

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::Bounded for Safe {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::Zero for Safe {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                self.value == 0
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::One for Safe {
            fn one() -> Self {
                Self::new(1)
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedAdd for Safe {
            fn checked_add(&self, v: &Self) -> Option<Self> {
                self.poisoning_add(*v).into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedSub for Safe {
            fn checked_sub(&self, v: &Self) -> Option<Self> {
                self.poisoning_sub(*v).into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedMul for Safe {
            fn checked_mul(&self, v: &Self) -> Option<Self> {
                self.poisoning_mul(*v).into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedDiv for Safe {
            fn checked_div(&self, v: &Self) -> Option<Self> {
                self.poisoning_div(*v).into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedRem for Safe {
            fn checked_rem(&self, v: &Self) -> Option<Self> {
                self.poisoning_rem(*v).into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::CheckedNeg for Safe {
            fn checked_neg(&self) -> Option<Self> {
                self.poisoning_neg().into_valid()
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::ToPrimitive for Safe {
            fn to_i64(&self) -> Option<i64> {
                num_traits02::ToPrimitive::to_i64(&self.checked()?)
            }

            fn to_u64(&self) -> Option<u64> {
                num_traits02::ToPrimitive::to_u64(&self.checked()?)
            }

            fn to_i128(&self) -> Option<i128> {
                num_traits02::ToPrimitive::to_i128(&self.checked()?)
            }

            fn to_u128(&self) -> Option<u128> {
                num_traits02::ToPrimitive::to_u128(&self.checked()?)
            }
        }

        #[cfg(feature = "num-traits02")]
        #[cfg_attr(doc_cfg, doc(cfg(feature = "num-traits02")))]
        impl num_traits02::FromPrimitive for Safe {
            fn from_i64(n: i64) -> Option<Self> {
                Self::from_signed(i128::from(n)).into_valid()
            }

            fn from_u64(n: u64) -> Option<Self> {
                Self::from_unsigned(u128::from(n)).into_valid()
            }

            fn from_i128(n: i128) -> Option<Self> {
                Self::from_signed(n).into_valid()
            }

            fn from_u128(n: u128) -> Option<Self> {
                Self::from_unsigned(n).into_valid()
            }
        }

        // === Tests ===

    } )* }
}

define_safe_integrals! {
    u8, u16, u32, u64, u128, usize,
    i8 signed, i16 signed, i32 signed, i64 signed, i128 signed, isize signed,
}

/// A [`SafeIntegral`] over `u8`.
pub type SafeU8 = SafeIntegral<core::primitive::u8>;
/// A [`SafeIntegral`] over `u16`.
pub type SafeU16 = SafeIntegral<core::primitive::u16>;
/// A [`SafeIntegral`] over `u32`.
pub type SafeU32 = SafeIntegral<core::primitive::u32>;
/// A [`SafeIntegral`] over `u64`.
pub type SafeU64 = SafeIntegral<core::primitive::u64>;
/// A [`SafeIntegral`] over `u128`.
pub type SafeU128 = SafeIntegral<core::primitive::u128>;
/// A [`SafeIntegral`] over `usize`.
pub type SafeUsize = SafeIntegral<core::primitive::usize>;
/// A [`SafeIntegral`] over [`UintMax`](crate::UintMax).
pub type SafeUMax = SafeIntegral<crate::UintMax>;
/// A [`SafeIntegral`] over `i8`.
pub type SafeI8 = SafeIntegral<core::primitive::i8>;
/// A [`SafeIntegral`] over `i16`.
pub type SafeI16 = SafeIntegral<core::primitive::i16>;
/// A [`SafeIntegral`] over `i32`.
pub type SafeI32 = SafeIntegral<core::primitive::i32>;
/// A [`SafeIntegral`] over `i64`.
pub type SafeI64 = SafeIntegral<core::primitive::i64>;
/// A [`SafeIntegral`] over `i128`.
pub type SafeI128 = SafeIntegral<core::primitive::i128>;
/// A [`SafeIntegral`] over `isize`.
pub type SafeIsize = SafeIntegral<core::primitive::isize>;
/// A [`SafeIntegral`] over [`IntMax`](crate::IntMax).
pub type SafeIMax = SafeIntegral<crate::IntMax>;
