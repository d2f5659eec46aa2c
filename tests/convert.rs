use safe_integral::{
    convert, merge_upper_lower, to_i16, to_i32, to_i64, to_i8, to_imax, to_u16, to_u16_unsafe,
    to_u32, to_u32_unsafe, to_u64, to_u64_unsafe, to_u8, to_u8_unsafe, to_umax,
    to_umax_upper_lower, to_umax_unsafe, truncate, SafeI16, SafeI32, SafeI64, SafeI8, SafeIMax,
    SafeU16, SafeU32, SafeU64, SafeU8, SafeUMax,
};

macro_rules! assert_all_valid {
    ($($e:expr),* $(,)?) => {
        $(assert!($e.valid(), "{} is poisoned", stringify!($e));)*
    };
}

macro_rules! assert_all_invalid {
    ($($e:expr),* $(,)?) => {
        $(assert!($e.invalid(), "{} is valid", stringify!($e));)*
    };
}

#[test]
fn widening() {
    let val = SafeI8::MAX;
    assert_eq!(to_i8(val), SafeI8::MAX);
    assert_eq!(to_i16(val), 127);
    assert_eq!(to_i32(val), 127);
    assert_eq!(to_i64(val), 127);
    assert_eq!(to_imax(val), 127);
    assert_all_valid!(to_i8(val), to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = SafeI8::MIN;
    assert_eq!(to_i16(val), -128);
    assert_eq!(to_imax(val), -128);
    assert_all_valid!(to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = SafeU8::MAX;
    assert_eq!(to_u16(val), 255);
    assert_eq!(to_umax(val), 255);
    assert_all_valid!(to_u8(val), to_u16(val), to_u32(val), to_u64(val), to_umax(val));

    // Non-negative signed values widen into unsigned types.
    let val = SafeI8::MAX;
    assert_eq!(to_u8(val), 127);
    assert_eq!(to_umax(val), 127);
    assert_all_valid!(to_u8(val), to_u16(val), to_u32(val), to_u64(val), to_umax(val));

    let val = SafeI8::MIN;
    assert_all_invalid!(to_u8(val), to_u16(val), to_u32(val), to_u64(val), to_umax(val));

    // Unsigned values widen into signed types only with room for the sign.
    let val = SafeU8::MAX;
    assert_all_invalid!(to_i8(val));
    assert_eq!(to_i16(val), 255);
    assert_all_valid!(to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = SafeU16::MAX;
    assert_all_invalid!(to_i8(val), to_i16(val));
    assert_all_valid!(to_i32(val), to_i64(val), to_imax(val));

    let val = SafeU32::MAX;
    assert_all_invalid!(to_i8(val), to_i16(val), to_i32(val));
    assert_eq!(to_i64(val), i64::from(u32::MAX));
    assert_all_valid!(to_i64(val), to_imax(val));

    let val = SafeU64::MAX;
    assert_all_invalid!(to_i8(val), to_i16(val), to_i32(val), to_i64(val), to_imax(val));
}

#[test]
fn narrowing_signed() {
    let val = to_imax(SafeI8::MAX);
    assert_eq!(to_i8(val), SafeI8::MAX);
    assert_all_valid!(to_i8(val), to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = to_imax(SafeI16::MAX);
    assert_all_invalid!(to_i8(val));
    assert_all_valid!(to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = to_imax(SafeI16::MIN);
    assert_all_invalid!(to_i8(val));
    assert_eq!(to_i16(val), SafeI16::MIN);

    let val = to_imax(SafeI32::MAX);
    assert_all_invalid!(to_i8(val), to_i16(val));
    assert_all_valid!(to_i32(val), to_i64(val), to_imax(val));

    let val = to_imax(SafeI64::MAX);
    assert_all_invalid!(to_i8(val), to_i16(val), to_i32(val));
    assert_all_valid!(to_i64(val), to_imax(val));

    let val = SafeIMax::MIN;
    assert_all_invalid!(to_i8(val), to_i16(val), to_i32(val));
    assert_all_invalid!(to_u8(val), to_u16(val), to_u32(val), to_u64(val), to_umax(val));
}

#[test]
fn narrowing_unsigned() {
    let val = to_umax(SafeU8::MAX);
    assert_eq!(to_u8(val), SafeU8::MAX);
    assert_all_valid!(to_u8(val), to_u16(val), to_u32(val), to_u64(val));
    assert_all_invalid!(to_i8(val));
    assert_all_valid!(to_i16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = to_umax(SafeU16::MAX);
    assert_all_invalid!(to_u8(val), to_i8(val), to_i16(val));
    assert_all_valid!(to_u16(val), to_i32(val), to_i64(val), to_imax(val));

    let val = to_umax(SafeU32::MAX);
    assert_all_invalid!(to_u8(val), to_u16(val), to_i8(val), to_i16(val), to_i32(val));
    assert_all_valid!(to_u32(val), to_i64(val), to_imax(val));

    let val = SafeUMax::MAX;
    assert_all_invalid!(to_u8(val), to_u16(val), to_u32(val));
    assert_all_invalid!(to_i8(val), to_i16(val), to_i32(val), to_i64(val), to_imax(val));
    assert_all_valid!(to_u64(val), to_umax(val));
}

#[test]
fn raw_and_safe_sources_agree() {
    let val = SafeI32::new(42);
    assert_eq!(to_i8(val), to_i8(42_i32));
    assert_eq!(to_i16(val), to_i16(42_i32));
    assert_eq!(to_i64(&val), to_i64(42_i32));
    assert_eq!(to_imax(val), to_imax(42_i32));

    let val = SafeU32::new(42);
    assert_eq!(to_u8(val), to_u8(42_u32));
    assert_eq!(to_u16(&val), to_u16(42_u32));
    assert_eq!(to_umax(val), to_umax(42_u32));

    assert!(convert::<i8, _>(200_u32).invalid());
    assert_eq!(convert::<i16, _>(200_u32), 200);
    assert!(convert::<i16, _>(200_u32).valid());
}

#[test]
fn poison_carries_through() {
    let poisoned = SafeU8::new(5).poison();
    assert_all_invalid!(to_u8(poisoned), to_u64(poisoned), to_i16(poisoned), to_i8(poisoned));
    assert_all_invalid!(to_u8_unsafe(poisoned), to_u32_unsafe(poisoned));

    let failed = to_u16(SafeI32::new(-1));
    assert!(failed.invalid());
    assert_eq!(failed.get(), 0);
    assert!((failed + 1).invalid());
}

#[test]
fn truncation() {
    let val = to_umax(0xFFFF_FFFF_FFFF_FFFF_u64);
    assert_eq!(to_u8_unsafe(val), to_u8(0xFF_u8));
    assert_eq!(to_u16_unsafe(val), to_u16(0xFFFF_u16));
    assert_eq!(to_u32_unsafe(val), to_u32(0xFFFF_FFFF_u32));
    assert_eq!(to_u64_unsafe(val), to_u64(0xFFFF_FFFF_FFFF_FFFF_u64));
    assert_eq!(to_umax_unsafe(val), SafeUMax::MAX);
    assert_all_valid!(to_u8_unsafe(val), to_u16_unsafe(val), to_umax_unsafe(val));

    let raw = val.get();
    assert_eq!(to_u8_unsafe(raw), 0xFF);
    assert_eq!(to_u32_unsafe(raw), 0xFFFF_FFFF);

    assert_eq!(truncate::<i8, _>(-1_i64), -1);
    assert_eq!(truncate::<u16, _>(-1_i8), u16::MAX);
}

#[test]
fn upper_lower() {
    let upper = SafeUMax::new(0xFFFF_FFFF_FFFF_FFFF);

    let lower = SafeU8::new(0x01);
    let expected = 0xFFFF_FFFF_FFFF_FF01_u64;
    assert_eq!(to_umax_upper_lower(upper, lower), expected);
    assert_eq!(to_umax_upper_lower(upper.get(), lower), expected);
    assert_eq!(to_umax_upper_lower(upper, lower.get()), expected);
    assert_eq!(to_umax_upper_lower(upper.get(), lower.get()), expected);

    let lower = SafeU16::new(0x0123);
    let expected = 0xFFFF_FFFF_FFFF_0123_u64;
    assert_eq!(to_umax_upper_lower(upper, lower), expected);
    assert_eq!(to_umax_upper_lower(upper.get(), lower.get()), expected);

    let lower = SafeU32::new(0x0123_4567);
    let expected = 0xFFFF_FFFF_0123_4567_u64;
    assert_eq!(to_umax_upper_lower(upper, lower), expected);
    assert_eq!(to_umax_upper_lower(upper.get(), lower.get()), expected);

    let lower = SafeUMax::new(0x0123_4567_89AB_CDEF);
    assert_eq!(to_umax_upper_lower(upper, lower), lower);
    assert!(to_umax_upper_lower(upper, lower).valid());

    assert!(to_umax_upper_lower(upper.poison(), 0_u8).invalid());
    assert!(to_umax_upper_lower(upper, SafeU8::failure()).invalid());
}

#[test]
fn merge_rejects_bad_operands() {
    assert!(merge_upper_lower(0xFFFF_u16, 0x01_i8).invalid());
    assert!(merge_upper_lower(-1_i32, 0x01_u8).invalid());
    assert!(merge_upper_lower(0xFF_u8, 0x0100_u16).invalid());
    assert_eq!(merge_upper_lower(0xFF00_u16, 0x0A_u8), 0xFF0A);
}

#[test]
fn arithmetic_on_converted() {
    let min = SafeI8::new(-127) - 1;
    assert_eq!(min, SafeI8::MIN);
    assert!(min.valid());
    assert!((-min).invalid());

    let sum = to_u8(200_u32) + to_u8(55_u32);
    assert_eq!(sum, u8::MAX);
    assert!(sum.valid());
    assert!((sum + to_u8(1_u32)).invalid());
}
