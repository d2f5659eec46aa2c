//! Diagnostics for conversions that fail at run time.
//!
//! Failures are already reported in-band through the poison flag; these hooks only make them
//! observable. With the `tracing` feature they emit events, otherwise they compile to nothing.
//! They are cold and never inlined so the success path of a conversion stays small.

#[cfg(feature = "tracing")]
use core::any::type_name;

use crate::Integral;

/// A value did not fit in the destination type of a conversion.
#[cold]
#[inline(never)]
pub(crate) fn narrowing_results_in_loss_of_data<F: Integral, T: Integral>(value: F) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        %value,
        from = type_name::<F>(),
        to = type_name::<T>(),
        "conversion failure: narrowing results in loss of data"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = value;
}

/// A bit-merge was asked to mask a signed integral.
#[cold]
#[inline(never)]
pub(crate) fn bit_masks_on_signed_integral<U: Integral, L: Integral>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        upper = type_name::<U>(),
        lower = type_name::<L>(),
        "conversion failure: bit masks on signed integral"
    );
}

/// A bit-merge was asked to place a lower half wider than the upper half.
#[cold]
#[inline(never)]
pub(crate) fn lower_half_wider_than_upper<U: Integral, L: Integral>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        upper = type_name::<U>(),
        lower = type_name::<L>(),
        "conversion failure: lower half is wider than the result"
    );
}

/// A poisoned value was handed to a conversion; the poison carries over.
#[cold]
#[inline(never)]
pub(crate) fn poisoned_source<F: Integral, T: Integral>() {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        from = type_name::<F>(),
        to = type_name::<T>(),
        "conversion of a poisoned value"
    );
}
