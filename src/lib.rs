//! Fixed-width integers that remember whether anything went wrong.
//!
//! [`SafeIntegral<T>`] wraps one of the primitive integer types together with a *poison* flag.
//! Arithmetic, shifts, negation and conversions between integer types check every step; a step
//! that would overflow, divide by zero, shift out of range or lose data does not panic or wrap,
//! it returns a poisoned value instead. The flag is sticky, so a long computation is checked once
//! at the end:
//!
//! ```
//! use safe_integral::{to_u8, SafeU32};
//!
//! let width = SafeU32::new(640);
//! let height = SafeU32::new(480);
//! let pixels = width * height * 4;
//! assert!(pixels.valid());
//!
//! // Narrowing conversions are checked too.
//! assert!(to_u8(pixels).invalid());
//! assert!((to_u8(pixels) + 1).invalid());
//! ```
//!
//! Every operation is also available as a `const fn`, so the same checks run at compile time.
//! Literals can be checked against their type before the program ever runs:
//!
//! ```
//! # #[cfg(feature = "macro")]
//! # {
//! use safe_integral::{lit, literal, SafeU8};
//!
//! const LIMIT: SafeU8 = lit!(250_u8);
//! const MASK: SafeU8 = literal!(u8, "0xF0");
//! assert_eq!(LIMIT & MASK, 0xF0);
//! # }
//! ```
//!
//! The crate depends only on libcore and so works in `#![no_std]` environments.
//!
//! # Features
//!
//! - `std`: Implement `Error` for [`ParseError`] and [`PoisonedError`]. Enabled by default.
//! - `macro`: Provide the [`lit!`] macro. Enabled by default.
//! - `serde`: Implement `Serialize` and `Deserialize` for the safe integrals. Poisoned values
//! refuse to serialize, and deserialized values are always valid.
//! - `num-traits02`: Implement traits from `num-traits` v0.2.
//! - `arbitrary1`: Implement `Arbitrary` from `arbitrary` v1.
//! - `bytemuck1`: Implement `Zeroable` from `bytemuck` v1.
//! - `tracing`: Emit `tracing` events when a conversion fails.
#![no_std]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(
    clippy::pedantic,
    rust_2018_idioms,
    unused_qualifications,
    missing_docs
)]
#![allow(clippy::items_after_statements, clippy::wildcard_imports)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod prim_int;
pub use prim_int::{is_same, is_signed, is_unsigned, IntMax, Integral, IntegralKind};
pub use prim_int::{UintMax, Unsigned};

mod parse;
pub use parse::{ParseError, ParseErrorKind};

mod types;
pub use types::{PoisonedError, SafeIntegral};
pub use types::{SafeI128, SafeI16, SafeI32, SafeI64, SafeI8, SafeIMax, SafeIsize};
pub use types::{SafeU128, SafeU16, SafeU32, SafeU64, SafeU8, SafeUMax, SafeUsize};

mod convert;
pub use convert::{convert, merge_upper_lower, to_umax_upper_lower, truncate};
pub use convert::{to_i128, to_i16, to_i32, to_i64, to_i8, to_imax, to_isize};
pub use convert::{to_i128_unsafe, to_i16_unsafe, to_i32_unsafe, to_i64_unsafe, to_i8_unsafe};
pub use convert::{to_imax_unsafe, to_isize_unsafe};
pub use convert::{to_u128, to_u16, to_u32, to_u64, to_u8, to_umax, to_usize};
pub use convert::{to_u128_unsafe, to_u16_unsafe, to_u32_unsafe, to_u64_unsafe, to_u8_unsafe};
pub use convert::{to_umax_unsafe, to_usize_unsafe};
pub use convert::{ConversionCase, IntoSafe};

mod report;

mod r#macro;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "macro")]
    pub use safe_integral_macro::safe_integral_literal as proc_macro;

    /// Holds the per-type `const fn`s that cannot go through a trait.
    pub struct Dispatch<T>(core::marker::PhantomData<T>, core::convert::Infallible);
}
