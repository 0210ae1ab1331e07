// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Plain (never exponential) layout of shortest digits, and the entry
//! points that route each value to the right engine.

use log::trace;

use crate::cursor::Cursor;
use crate::d2fixed::d2fixed_buffered_n;
use crate::d2s::{d2d, d2d_small_int, Decimal64};
use crate::digits::{decimal_length17, write_mantissa64};
use crate::error::Result;
use crate::f2s::{f2d, Decimal32};
use crate::ieee::{Ieee32, Ieee64};
use crate::large_int::large_integer_to_chars;

/// Longest text any shortest conversion produces, plus a sign. The smallest
/// decimal exponent is -324, so `0.` and 324 fraction digits is the worst case.
pub(crate) const MAX_OUTPUT_STRING_LENGTH: usize = 1 + 2 + 324;

// For output == 1 and a non-negative exponent, 1 if the value nearest to
// 10^e is below it and so prints with one digit fewer.
#[rustfmt::skip]
static FLOAT_LENGTH_ADJUSTMENT: [u8; 39] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1,
    0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1,
];

#[rustfmt::skip]
static DOUBLE_LENGTH_ADJUSTMENT: [u8; 309] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1,
    0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1,
    1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1,
    0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1,
    1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1, 1,
    0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1,
    0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0,
    1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1,
    1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1,
    0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1,
    0, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0,
    0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0,
    0, 0, 0, 0, 1, 1, 0, 1, 0,
];

// (2^bits - 1) / 5^e: the largest odd part a shortest mantissa may have for
// mantissa * 10^e to be exactly representable.
const fn max_shifted_mantissa<const N: usize>(significand_bits: u32) -> [u64; N] {
    let mut table = [0; N];
    let mut pow5: u64 = 1;
    let mut i = 0;
    while i < N {
        table[i] = ((1 << significand_bits) - 1) / pow5;
        pow5 *= 5;
        i += 1;
    }
    table
}

static FLOAT_MAX_SHIFTED_MANTISSA: [u64; 11] = max_shifted_mantissa(24);
static DOUBLE_MAX_SHIFTED_MANTISSA: [u64; 23] = max_shifted_mantissa(53);

/// Writes `output * 10^ryu_exponent` without an exponent. When padding the
/// shortest digits with zeros would not reproduce the value, `exact` prints
/// the full integer instead.
fn write_plain<E>(
    cursor: &mut Cursor<'_>,
    output: u64,
    ryu_exponent: i32,
    length_adjustment: &[u8],
    max_shifted_mantissa: &[u64],
    exact: E,
) -> Result<()>
where
    E: FnOnce(&mut Cursor<'_>) -> Result<()>,
{
    let olength = decimal_length17(output) as usize;
    let whole_digits = olength as i32 + ryu_exponent;

    let total_fixed_length = if ryu_exponent >= 0 {
        // 1e23 is exactly 99999999999999991611392, one digit short of
        // what the exponent suggests.
        let adjustment = if output == 1 {
            length_adjustment[ryu_exponent as usize] as usize
        } else {
            0
        };
        whole_digits as usize - adjustment
    } else if whole_digits > 0 {
        olength + 1
    } else {
        (2 - ryu_exponent) as usize
    };
    cursor.ensure(total_fixed_length)?;

    if ryu_exponent > 0 {
        let e = ryu_exponent as usize;
        let can_use_ryu = e < max_shifted_mantissa.len()
            && output >> output.trailing_zeros() <= max_shifted_mantissa[e];
        if !can_use_ryu {
            trace!("{output}e{ryu_exponent} is not the exact value, printing the full integer");
            return exact(cursor);
        }
    }

    let out = cursor.take(total_fixed_length)?;
    if ryu_exponent >= 0 {
        // "172900" and "1729"
        write_mantissa64(output, &mut out[..olength]);
        out[olength..].fill(b'0');
    } else if whole_digits > 0 {
        // "17.29": write the digits one place to the right, then slide the
        // whole part left to open a gap for the point.
        let whole_digits = whole_digits as usize;
        write_mantissa64(output, &mut out[1..]);
        out.copy_within(1..=whole_digits, 0);
        out[whole_digits] = b'.';
    } else {
        // "0.001729"
        write_mantissa64(output, out);
        out[0] = b'0';
        out[1] = b'.';
        out[2..2 + (-whole_digits) as usize].fill(b'0');
    }
    Ok(())
}

fn write_shortest32(cursor: &mut Cursor<'_>, ieee: Ieee32) -> Result<()> {
    if ieee.is_zero() {
        return cursor.push(b'0');
    }

    let mantissa2 = ieee.significand();
    let exponent2 = ieee.exponent2();
    if exponent2 > 0 {
        trace!("binary32 integer {mantissa2} * 2^{exponent2}, printing exactly");
        return large_integer_to_chars(cursor, mantissa2, exponent2);
    }

    let v = f2d(ieee.mantissa, ieee.exponent);
    write_plain(
        cursor,
        v.mantissa as u64,
        v.exponent,
        &FLOAT_LENGTH_ADJUSTMENT,
        &FLOAT_MAX_SHIFTED_MANTISSA,
        |cursor| large_integer_to_chars(cursor, mantissa2, exponent2),
    )
}

fn write_shortest64(cursor: &mut Cursor<'_>, ieee: Ieee64) -> Result<()> {
    if ieee.is_zero() {
        return cursor.push(b'0');
    }

    if ieee.exponent2() > 0 {
        trace!("binary64 integer above 2^53, printing exactly");
        return d2fixed_buffered_n(cursor, ieee, 0);
    }

    let v = decimal64(ieee);
    write_plain(
        cursor,
        v.mantissa,
        v.exponent,
        &DOUBLE_LENGTH_ADJUSTMENT,
        &DOUBLE_MAX_SHIFTED_MANTISSA,
        |cursor| d2fixed_buffered_n(cursor, ieee, 0),
    )
}

fn decimal64(ieee: Ieee64) -> Decimal64 {
    match d2d_small_int(ieee.mantissa, ieee.exponent) {
        Some(v) => v,
        None => d2d(ieee.mantissa, ieee.exponent),
    }
}

pub(crate) fn f32_to_chars(buf: &mut [u8], value: f32) -> Result<usize> {
    let mut cursor = Cursor::new(buf);
    let ieee = Ieee32::from_bits(value.to_bits()).saturating_finite();
    write_shortest32(&mut cursor, ieee)?;
    Ok(cursor.position())
}

pub(crate) fn f64_to_chars(buf: &mut [u8], value: f64) -> Result<usize> {
    let mut cursor = Cursor::new(buf);
    let ieee = Ieee64::from_bits(value.to_bits()).saturating_finite();
    write_shortest64(&mut cursor, ieee)?;
    Ok(cursor.position())
}

pub(crate) fn fixed_to_chars(buf: &mut [u8], value: f64, precision: u32) -> Result<usize> {
    let mut cursor = Cursor::new(buf);
    let ieee = Ieee64::from_bits(value.to_bits()).saturating_finite();
    d2fixed_buffered_n(&mut cursor, ieee, precision)?;
    Ok(cursor.position())
}

pub(crate) fn to_decimal32(value: f32) -> Decimal32 {
    let ieee = Ieee32::from_bits(value.to_bits()).saturating_finite();
    if ieee.is_zero() {
        return Decimal32 {
            mantissa: 0,
            exponent: 0,
        };
    }
    f2d(ieee.mantissa, ieee.exponent)
}

pub(crate) fn to_decimal64(value: f64) -> Decimal64 {
    let ieee = Ieee64::from_bits(value.to_bits()).saturating_finite();
    if ieee.is_zero() {
        return Decimal64 {
            mantissa: 0,
            exponent: 0,
        };
    }
    decimal64(ieee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_shifted_mantissa() {
        assert_eq!(
            FLOAT_MAX_SHIFTED_MANTISSA,
            [16777215, 3355443, 671088, 134217, 26843, 5368, 1073, 214, 42, 8, 1]
        );
        assert_eq!(DOUBLE_MAX_SHIFTED_MANTISSA[0], 9007199254740991);
        assert_eq!(DOUBLE_MAX_SHIFTED_MANTISSA[10], 922337203);
        assert_eq!(DOUBLE_MAX_SHIFTED_MANTISSA[22], 3);
    }

    #[test]
    fn test_length_adjustment_matches_nearest_power_of_ten() {
        let mut buf = [0u8; MAX_OUTPUT_STRING_LENGTH];
        for e in 0..DOUBLE_LENGTH_ADJUSTMENT.len() {
            let value: f64 = std::format!("1e{e}").parse().unwrap();
            let len = f64_to_chars(&mut buf, value).unwrap();
            assert_eq!(len, e + 1 - DOUBLE_LENGTH_ADJUSTMENT[e] as usize, "1e{e}");
        }
        for e in 0..FLOAT_LENGTH_ADJUSTMENT.len() {
            let value: f32 = std::format!("1e{e}").parse().unwrap();
            let len = f32_to_chars(&mut buf, value).unwrap();
            assert_eq!(len, e + 1 - FLOAT_LENGTH_ADJUSTMENT[e] as usize, "1e{e}f32");
        }
    }

    #[test]
    fn test_layouts() {
        let mut buf = [0u8; MAX_OUTPUT_STRING_LENGTH];
        let mut check = |value: f64, expected: &str| {
            let len = f64_to_chars(&mut buf, value).unwrap();
            assert_eq!(core::str::from_utf8(&buf[..len]).unwrap(), expected);
        };
        check(172900.0, "172900");
        check(1729.0, "1729");
        check(17.29, "17.29");
        check(0.001729, "0.001729");
        check(1e23, "99999999999999991611392");
        check(1e22, "10000000000000000000000");
    }

    #[test]
    fn test_longest_output_fits_without_sign_byte() {
        let mut buf = [0u8; MAX_OUTPUT_STRING_LENGTH - 1];
        for value in [f64::MIN_POSITIVE, f64::from_bits(1)] {
            assert_eq!(f64_to_chars(&mut buf, value), Ok(MAX_OUTPUT_STRING_LENGTH - 1));
        }
        assert!(f64_to_chars(&mut buf[..325], f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        let mut buf = [0u8; 1024];
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(f64_to_chars(&mut buf, value).is_ok());
            assert!(fixed_to_chars(&mut buf, value, 3).is_ok());
        }
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(f32_to_chars(&mut buf, value).is_ok());
        }
    }
}
