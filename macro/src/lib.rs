//! The proc macro behind `safe_integral::lit!`: integer literals checked against their type at
//! compile time.
#![warn(
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    unused_qualifications
)]

use std::fmt::{self, Display, Formatter};

use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{quote, ToTokens};
use syn::parse::{self, Parse, ParseStream};
use syn::{bracketed, parse_macro_input, Error, LitInt, Token};

use num_bigint::{BigInt, Sign};

/// Expand a suffixed integer literal into a valid `SafeIntegral`.
///
/// The input is the path to the `safe_integral` crate in brackets, followed by an optionally
/// negated integer literal whose suffix names the target type: `u8`, `u16`, `u32`, `u64`, `u128`,
/// `usize`, `umax` or their `i` counterparts. A literal the type cannot represent is a compile
/// error instead of a poisoned value.
///
/// This is an implementation detail of `safe_integral::lit!`, which fills in the crate path.
#[doc(hidden)]
#[proc_macro]
pub fn safe_integral_literal(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    parse_macro_input!(input as SafeLiteral)
        .into_token_stream()
        .into()
}

struct SafeLiteral {
    crate_path: TokenStream,
    repr: Repr,
    negative: bool,
    magnitude: Literal,
}

impl Parse for SafeLiteral {
    fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
        let crate_path;
        bracketed!(crate_path in input);
        let crate_path: TokenStream = crate_path.parse()?;

        let minus = input.parse::<Option<Token![-]>>()?;
        let literal = input.parse::<LitInt>()?;
        if !input.is_empty() {
            return Err(input.error("expected a single integer literal"));
        }

        let repr = Repr::from_suffix(&literal)?;

        let text = literal.to_token_stream().to_string();
        match text.get(..2) {
            Some("0x" | "0X") if repr.signed => {
                return Err(Error::new_spanned(
                    &literal,
                    format_args!("hexadecimal literals only build unsigned values, not `{}`", repr),
                ));
            }
            Some("0b" | "0o") => {
                return Err(Error::new_spanned(
                    &literal,
                    "only decimal and `0x` hexadecimal literals are supported",
                ));
            }
            _ => {}
        }

        let mut value: BigInt = literal.base10_parse()?;
        if let Some(minus) = &minus {
            if !repr.signed {
                return Err(Error::new_spanned(
                    minus,
                    format_args!("`{}` cannot hold a negative value", repr),
                ));
            }
            value = -value;
        }

        if let (Some(min), Some(max)) = (repr.minimum(), repr.maximum()) {
            if value < min || value > max {
                return Err(Error::new_spanned(
                    &literal,
                    format_args!(
                        "{} is not representable in `{}`, whose range is {}..={}",
                        value, repr, min, max
                    ),
                ));
            }
        }

        let negative = value.sign() == Sign::Minus;
        let magnitude = if negative { -value } else { value };
        let magnitude = u128::try_from(&magnitude)
            .map_err(|_| Error::new_spanned(&literal, "literal does not fit in 128 bits"))?;

        Ok(Self {
            crate_path,
            repr,
            negative,
            magnitude: Literal::u128_unsuffixed(magnitude),
        })
    }
}

impl ToTokens for SafeLiteral {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let crate_path = &self.crate_path;
        let ty = self.repr.type_path(crate_path);
        let sign = if self.negative { Some(quote!(-)) } else { None };
        let magnitude = &self.magnitude;
        tokens.extend(quote!(#crate_path::SafeIntegral::<#ty>::magic(#sign #magnitude)));
    }
}

#[derive(Clone, Copy)]
struct Repr {
    signed: bool,
    size: ReprSize,
}

impl Repr {
    fn from_suffix(literal: &LitInt) -> parse::Result<Self> {
        let suffix = literal.suffix();

        let (signed, size) = if let Some(size) = suffix.strip_prefix('i') {
            (true, size)
        } else if let Some(size) = suffix.strip_prefix('u') {
            (false, size)
        } else if suffix.is_empty() {
            return Err(Error::new_spanned(
                literal,
                "literal needs a type suffix, such as `_u8` or `_imax`",
            ));
        } else {
            return Err(Error::new_spanned(
                literal,
                format_args!("unknown integer suffix `{}`", suffix),
            ));
        };

        let size = match size {
            "8" => ReprSize::Fixed(ReprSizeFixed::Fixed8),
            "16" => ReprSize::Fixed(ReprSizeFixed::Fixed16),
            "32" => ReprSize::Fixed(ReprSizeFixed::Fixed32),
            "64" => ReprSize::Fixed(ReprSizeFixed::Fixed64),
            "128" => ReprSize::Fixed(ReprSizeFixed::Fixed128),
            "size" => ReprSize::Pointer,
            "max" => ReprSize::Max,
            unknown => {
                return Err(Error::new_spanned(
                    literal,
                    format_args!(
                        "unknown integer size {}, must be one of 8, 16, 32, 64, 128, size or max",
                        unknown
                    ),
                ));
            }
        };

        Ok(Self { signed, size })
    }

    /// The smallest value of the type, or `None` if it depends on the target.
    fn minimum(self) -> Option<BigInt> {
        Some(match (self.signed, self.size) {
            (false, _) => BigInt::from(0_u8),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed8)) => BigInt::from(i8::MIN),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed16)) => BigInt::from(i16::MIN),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed32)) => BigInt::from(i32::MIN),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed64) | ReprSize::Max) => {
                BigInt::from(i64::MIN)
            }
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed128)) => BigInt::from(i128::MIN),
            (true, ReprSize::Pointer) => return None,
        })
    }

    /// The largest value of the type, or `None` if it depends on the target.
    fn maximum(self) -> Option<BigInt> {
        Some(match (self.signed, self.size) {
            (false, ReprSize::Fixed(ReprSizeFixed::Fixed8)) => BigInt::from(u8::MAX),
            (false, ReprSize::Fixed(ReprSizeFixed::Fixed16)) => BigInt::from(u16::MAX),
            (false, ReprSize::Fixed(ReprSizeFixed::Fixed32)) => BigInt::from(u32::MAX),
            (false, ReprSize::Fixed(ReprSizeFixed::Fixed64) | ReprSize::Max) => {
                BigInt::from(u64::MAX)
            }
            (false, ReprSize::Fixed(ReprSizeFixed::Fixed128)) => BigInt::from(u128::MAX),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed8)) => BigInt::from(i8::MAX),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed16)) => BigInt::from(i16::MAX),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed32)) => BigInt::from(i32::MAX),
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed64) | ReprSize::Max) => {
                BigInt::from(i64::MAX)
            }
            (true, ReprSize::Fixed(ReprSizeFixed::Fixed128)) => BigInt::from(i128::MAX),
            // Range checking is left to rustc's `overflowing_literals` on the target.
            (_, ReprSize::Pointer) => return None,
        })
    }

    fn type_path(self, crate_path: &TokenStream) -> TokenStream {
        match self.size {
            ReprSize::Max if self.signed => quote!(#crate_path::IntMax),
            ReprSize::Max => quote!(#crate_path::UintMax),
            _ => {
                let name = Ident::new(&self.to_string(), Span::call_site());
                quote!(::core::primitive::#name)
            }
        }
    }
}

impl Display for Repr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.signed { 'i' } else { 'u' }, self.size)
    }
}

#[derive(Clone, Copy)]
enum ReprSize {
    Fixed(ReprSizeFixed),
    /// `usize`/`isize`
    Pointer,
    /// `umax`/`imax`, the widest integers the library converts through.
    Max,
}

impl Display for ReprSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(fixed) => fixed.fmt(f),
            Self::Pointer => f.write_str("size"),
            Self::Max => f.write_str("max"),
        }
    }
}

#[derive(Clone, Copy)]
enum ReprSizeFixed {
    Fixed8,
    Fixed16,
    Fixed32,
    Fixed64,
    Fixed128,
}

impl Display for ReprSizeFixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fixed8 => "8",
            Self::Fixed16 => "16",
            Self::Fixed32 => "32",
            Self::Fixed64 => "64",
            Self::Fixed128 => "128",
        })
    }
}
