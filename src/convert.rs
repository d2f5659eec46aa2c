//! Checked conversions between the primitive integer types.
//!
//! Every conversion accepts either a raw primitive or a [`SafeIntegral`] (see [`IntoSafe`]) and
//! returns a [`SafeIntegral`]. Whether a pair of types needs a run-time check at all is decided
//! from the types alone by [`ConversionCase`], so widening conversions compile down to a plain
//! cast.
//!
//! ```
//! use safe_integral::{convert, to_i16, to_u8};
//!
//! assert!(convert::<i8, _>(200_u32).invalid());
//! assert_eq!(to_i16(200_u32), 200);
//! assert!(to_u8(-1_i32).invalid());
//! ```

use core::marker::PhantomData;

use crate::{report, Integral, SafeIntegral, UintMax, Unsigned};

/// Anything a conversion can take as its source: a raw primitive or a [`SafeIntegral`].
///
/// Raw primitives are wrapped into valid safe integrals at the boundary, so every conversion
/// only has to handle the safe form.
pub trait IntoSafe {
    /// The primitive type of the source.
    type Integral: Integral;

    /// Wraps `self` in a [`SafeIntegral`], keeping the poison flag of an already safe value.
    fn into_safe(self) -> SafeIntegral<Self::Integral>;
}

impl<T: Integral> IntoSafe for SafeIntegral<T> {
    type Integral = T;

    #[inline]
    fn into_safe(self) -> Self {
        self
    }
}

impl<T: Integral> IntoSafe for &SafeIntegral<T> {
    type Integral = T;

    #[inline]
    fn into_safe(self) -> SafeIntegral<T> {
        *self
    }
}

/// How a conversion from `F` to `T` has to be checked, decided from the two types alone.
///
/// `lossless` means that every non-negative value of `F` fits in `T`, that is `F::MAX <= T::MAX`.
/// For two signed types this also covers the negative range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionCase {
    /// `F` and `T` are the same type.
    Identity,
    /// Both types are signed.
    SignedToSigned {
        /// Whether `T` holds every value of `F`.
        lossless: bool,
    },
    /// A signed source and an unsigned destination. Negative values never fit.
    SignedToUnsigned {
        /// Whether `T` holds every non-negative value of `F`.
        lossless: bool,
    },
    /// Both types are unsigned.
    UnsignedToUnsigned {
        /// Whether `T` holds every value of `F`.
        lossless: bool,
    },
    /// An unsigned source and a signed destination. Values are never reinterpreted as negative.
    UnsignedToSigned {
        /// Whether `T` holds every value of `F`.
        lossless: bool,
    },
}

impl ConversionCase {
    /// Classifies a conversion from `F` to `T`.
    #[must_use]
    pub const fn of<F: Integral, T: Integral>() -> Self {
        if crate::is_same::<F, T>() {
            return Self::Identity;
        }
        let lossless = F::MAX_WIDE <= T::MAX_WIDE;
        match (F::SIGNED, T::SIGNED) {
            (true, true) => Self::SignedToSigned { lossless },
            (true, false) => Self::SignedToUnsigned { lossless },
            (false, false) => Self::UnsignedToUnsigned { lossless },
            (false, true) => Self::UnsignedToSigned { lossless },
        }
    }

    /// Whether negative source values have to be rejected.
    #[must_use]
    pub const fn needs_sign_check(self) -> bool {
        matches!(self, Self::SignedToUnsigned { .. })
    }

    /// Whether source values have to be compared against the bounds of the destination.
    #[must_use]
    pub const fn needs_range_check(self) -> bool {
        match self {
            Self::Identity => false,
            Self::SignedToSigned { lossless }
            | Self::SignedToUnsigned { lossless }
            | Self::UnsignedToUnsigned { lossless }
            | Self::UnsignedToSigned { lossless } => !lossless,
        }
    }
}

struct Conversion<F, T>(PhantomData<(F, T)>);

impl<F: Integral, T: Integral> Conversion<F, T> {
    const CASE: ConversionCase = ConversionCase::of::<F, T>();
}

/// Converts `val` to a `T`, poisoning the result if `val` is poisoned or does not fit.
///
/// A poisoned source gives [`SafeIntegral::failure`] even when `T` is its own type. A failed conversion returns [`SafeIntegral::failure`]. Comparisons happen on 128-bit
/// intermediates, so the check itself can never overflow, and conversions that cannot lose data
/// perform no check at all.
///
/// For a conversion usable in constant contexts, see
/// [`from_signed`](crate::SafeI64::from_signed) and
/// [`from_unsigned`](crate::SafeU64::from_unsigned).
///
/// ```
/// use safe_integral::{convert, SafeU16};
///
/// assert_eq!(convert::<u8, _>(255_u16), 255);
/// assert!(convert::<u8, _>(256_u16).invalid());
/// assert!(convert::<i64, _>(SafeU16::failure()).invalid());
/// ```
pub fn convert<T: Integral, F: IntoSafe>(val: F) -> SafeIntegral<T> {
    let val = val.into_safe();
    if val.invalid() {
        report::poisoned_source::<F::Integral, T>();
        return SafeIntegral::failure();
    }
    convert_value(val.get())
}

fn convert_value<T: Integral, F: Integral>(val: F) -> SafeIntegral<T> {
    let result = match Conversion::<F, T>::CASE {
        ConversionCase::Identity
        | ConversionCase::SignedToSigned { lossless: true }
        | ConversionCase::UnsignedToUnsigned { lossless: true }
        | ConversionCase::UnsignedToSigned { lossless: true } => {
            return SafeIntegral::new(T::truncate(val.to_wide_bits()));
        }
        ConversionCase::SignedToUnsigned { .. } if val.is_negative() => SafeIntegral::failure(),
        ConversionCase::SignedToUnsigned { lossless: true } => {
            return SafeIntegral::new(T::truncate(val.to_wide_bits()));
        }
        ConversionCase::SignedToSigned { lossless: false } => {
            T::safe_from_signed(val.to_wide_signed())
        }
        ConversionCase::SignedToUnsigned { lossless: false }
        | ConversionCase::UnsignedToUnsigned { lossless: false }
        | ConversionCase::UnsignedToSigned { lossless: false } => {
            T::safe_from_unsigned(val.to_wide_bits())
        }
    };
    if result.invalid() {
        report::narrowing_results_in_loss_of_data::<F, T>(val);
    }
    result
}

/// Converts `val` to a `T` by keeping its low bits, without any range check.
///
/// The poison flag of a safe source is carried over; truncation never clears it.
///
/// ```
/// use safe_integral::truncate;
///
/// assert_eq!(truncate::<u8, _>(0x1234_u16), 0x34);
/// assert_eq!(truncate::<i8, _>(200_u8), -56);
/// ```
pub fn truncate<T: Integral, F: IntoSafe>(val: F) -> SafeIntegral<T> {
    let val = val.into_safe();
    SafeIntegral::with_poison(T::truncate(val.get().to_wide_bits()), val.invalid())
}

macro_rules! conversions {
    ($($alias:ident, $checked:ident, $unchecked:ident;)*) => { $(
        #[doc = concat!("Converts `val` to [`", stringify!($alias), "`](crate::", stringify!($alias), "), poisoning it if the value does not fit.")]
        ///
        /// See [`convert`] for the rules.
        #[inline]
        pub fn $checked<F: IntoSafe>(val: F) -> crate::$alias {
            convert(val)
        }

        #[doc = concat!("Converts `val` to [`", stringify!($alias), "`](crate::", stringify!($alias), ") by truncation, without a range check.")]
        ///
        /// The `_unsafe` suffix refers to the missing range check; the function is memory safe.
        /// See [`truncate`].
        #[inline]
        pub fn $unchecked<F: IntoSafe>(val: F) -> crate::$alias {
            truncate(val)
        }
    )* };
}

conversions! {
    SafeI8, to_i8, to_i8_unsafe;
    SafeI16, to_i16, to_i16_unsafe;
    SafeI32, to_i32, to_i32_unsafe;
    SafeI64, to_i64, to_i64_unsafe;
    SafeI128, to_i128, to_i128_unsafe;
    SafeIsize, to_isize, to_isize_unsafe;
    SafeIMax, to_imax, to_imax_unsafe;
    SafeU8, to_u8, to_u8_unsafe;
    SafeU16, to_u16, to_u16_unsafe;
    SafeU32, to_u32, to_u32_unsafe;
    SafeU64, to_u64, to_u64_unsafe;
    SafeU128, to_u128, to_u128_unsafe;
    SafeUsize, to_usize, to_usize_unsafe;
    SafeUMax, to_umax, to_umax_unsafe;
}

/// Replaces the low bits of `upper` with `lower`.
///
/// The result has the type of `upper`. Its bits above the width of `lower` come from `upper`,
/// the rest from `lower`; if both have the same width the result is `lower`.
///
/// The result is poisoned if either operand is poisoned, if either type is signed (masking the
/// bits of a signed integral is not meaningful) or if `lower` is wider than `upper`.
///
/// ```
/// use safe_integral::merge_upper_lower;
///
/// assert_eq!(merge_upper_lower(0xAAAA_AAAA_u32, 0x12_u8), 0xAAAA_AA12);
/// assert_eq!(merge_upper_lower(0xAAAA_AAAA_u32, 0x1234_5678_u32), 0x1234_5678);
/// assert!(merge_upper_lower(0xAAAA_AAAA_u32, -1_i8).invalid());
/// ```
pub fn merge_upper_lower<U: IntoSafe, L: IntoSafe>(
    upper: U,
    lower: L,
) -> SafeIntegral<U::Integral> {
    merge(upper.into_safe(), lower.into_safe())
}

fn merge<U: Integral, L: Integral>(upper: SafeIntegral<U>, lower: SafeIntegral<L>) -> SafeIntegral<U> {
    if upper.invalid() || lower.invalid() {
        return SafeIntegral::failure();
    }
    if U::SIGNED || L::SIGNED {
        report::bit_masks_on_signed_integral::<U, L>();
        return SafeIntegral::failure();
    }
    if L::BITS > U::BITS {
        report::lower_half_wider_than_upper::<U, L>();
        return SafeIntegral::failure();
    }

    let lower = lower.get().to_wide_bits();
    if L::BITS == U::BITS {
        return SafeIntegral::new(U::truncate(lower));
    }

    // `L::BITS < U::BITS <= 128`, so the shift is in range.
    let mask = (1_u128 << L::BITS) - 1;
    SafeIntegral::new(U::truncate((upper.get().to_wide_bits() & !mask) | lower))
}

/// Replaces the low bits of a [`UintMax`] with an unsigned value of any narrower width.
///
/// Unlike [`merge_upper_lower`], a signed `lower` is rejected at compile time.
///
/// ```
/// use safe_integral::{to_umax_upper_lower, SafeU16};
///
/// assert_eq!(
///     to_umax_upper_lower(0xFFFF_FFFF_FFFF_FFFF_u64, SafeU16::new(0x0123)),
///     0xFFFF_FFFF_FFFF_0123_u64,
/// );
/// ```
///
/// ```compile_fail
/// use safe_integral::to_umax_upper_lower;
///
/// let _ = to_umax_upper_lower(0_u64, 1_i8);
/// ```
pub fn to_umax_upper_lower<U, L>(upper: U, lower: L) -> SafeIntegral<UintMax>
where
    U: IntoSafe<Integral = UintMax>,
    L: IntoSafe,
    L::Integral: Unsigned,
{
    merge_upper_lower(upper, lower)
}
