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

// The algorithms in this file follow Ryu and Ryu printf. The reference C code
// can be found at https://github.com/ulfjack/ryu and carries the following
// license:
//
// Copyright 2018 Ulf Adams
//
// The contents of this file may be used under the terms of the Apache License,
// Version 2.0.
//
//    (See accompanying file LICENSE-Apache or copy at
//     http://www.apache.org/licenses/LICENSE-2.0)
//
// Alternatively, the contents of this file may be used under the terms of
// the Boost Software License, Version 1.0.
//    (See accompanying file LICENSE-Boost or copy at
//     https://www.boost.org/LICENSE_1_0.txt)
//
// Unless required by applicable law or agreed to in writing, this software
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.

//! `%.<n>f` formatting for binary64.
//!
//! The integer part is produced in base-10^9 blocks from [`POW10_SPLIT`],
//! the fraction in base-10^9 blocks from [`POW10_SPLIT_2`]. The last
//! fractional block is cut to the requested precision and rounded half to
//! even against the exact binary value.

use crate::cursor::Cursor;
use crate::d2fixed_table::{
    ADDITIONAL_BITS_2, MIN_BLOCK_2, POW10_ADDITIONAL_BITS, POW10_OFFSET, POW10_OFFSET_2,
    POW10_SPLIT, POW10_SPLIT_2,
};
use crate::digits::{append_c_digits, append_n_digits, append_nine_digits, decimal_length9};
use crate::div::multiple_of_power_of_2;
use crate::error::Result;
use crate::floor_log::log10_pow2;
use crate::ieee::Ieee64;
use crate::wuint::mul_shift_mod1e9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundUp {
    Never,
    Always,
    /// Exact tie: round only when the kept digit is odd.
    IfOdd,
}

#[inline]
fn index_for_exponent(e: u32) -> u32 {
    (e + 15) / 16
}

#[inline]
fn pow10_bits_for_index(idx: u32) -> u32 {
    16 * idx + POW10_ADDITIONAL_BITS
}

#[inline]
fn length_for_index(idx: u32) -> u32 {
    // +1 for ceil, +16 for mantissa, +8 to round up when dividing by 9
    (log10_pow2(16 * idx as i32) + 1 + 16 + 8) / 9
}

/// Writes `value` with exactly `precision` fractional digits. A point is
/// written only when `precision > 0`.
pub(crate) fn d2fixed_buffered_n(cursor: &mut Cursor<'_>, ieee: Ieee64, precision: u32) -> Result<()> {
    let start = cursor.position();

    if ieee.is_zero() {
        cursor.ensure(1 + (precision != 0) as usize + precision as usize)?;
        cursor.push(b'0')?;
        if precision > 0 {
            cursor.push(b'.')?;
            cursor.fill(precision as usize, b'0')?;
        }
        return Ok(());
    }

    let (m2, e2) = ieee.decode();

    let mut nonzero = false;
    if e2 >= -52 {
        let idx = if e2 < 0 { 0 } else { index_for_exponent(e2 as u32) };
        let p10bits = pow10_bits_for_index(idx);
        let len = length_for_index(idx);
        let offset = POW10_OFFSET[idx as usize] as usize;
        for i in (0..len).rev() {
            let j = p10bits as i32 - e2;
            // Shift m2 left by 8 so the product keeps enough bits for the
            // full 9-digit block.
            let digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT[offset + i as usize], j + 8);
            if nonzero {
                append_nine_digits(digits, cursor.take(9)?);
            } else if digits != 0 {
                let olength = decimal_length9(digits);
                append_n_digits(olength, digits, cursor.take(olength as usize)?);
                nonzero = true;
            }
        }
    }
    if !nonzero {
        cursor.push(b'0')?;
    }
    if precision > 0 {
        cursor.push(b'.')?;
    }

    if e2 >= 0 {
        return cursor.fill(precision as usize, b'0');
    }

    let idx = (-e2 / 16) as usize;
    let min_block = MIN_BLOCK_2[idx] as u32;
    let blocks = precision / 9 + 1;
    let mut round_up = RoundUp::Never;
    let mut i = 0;
    if blocks <= min_block {
        i = blocks;
        cursor.fill(precision as usize, b'0')?;
    } else if i < min_block {
        i = min_block;
        cursor.fill(9 * i as usize, b'0')?;
    }
    while i < blocks {
        let j = ADDITIONAL_BITS_2 + (-e2 - 16 * idx as i32);
        let p = POW10_OFFSET_2[idx] as u32 + i - min_block;
        if p >= POW10_OFFSET_2[idx + 1] as u32 {
            // Every remaining digit is zero and no rounding is needed.
            cursor.fill((precision - 9 * i) as usize, b'0')?;
            break;
        }
        let mut digits = mul_shift_mod1e9(m2 << 8, &POW10_SPLIT_2[p as usize], j + 8);
        if i < blocks - 1 {
            append_nine_digits(digits, cursor.take(9)?);
        } else {
            let maximum = precision - 9 * i;
            let mut last_digit = 0;
            for _ in 0..9 - maximum {
                last_digit = digits % 10;
                digits /= 10;
            }
            round_up = if last_digit != 5 {
                if last_digit > 5 {
                    RoundUp::Always
                } else {
                    RoundUp::Never
                }
            } else {
                // The dropped digits are exactly 5000... only if the value
                // has no binary digits beyond the requested precision.
                let required_twos = -e2 - precision as i32 - 1;
                let trailing_zeros = required_twos <= 0
                    || (required_twos < 60 && multiple_of_power_of_2(m2, required_twos as u32));
                if trailing_zeros {
                    RoundUp::IfOdd
                } else {
                    RoundUp::Always
                }
            };
            if maximum > 0 {
                append_c_digits(maximum, digits, cursor.take(maximum as usize)?);
            }
            break;
        }
        i += 1;
    }
    if round_up != RoundUp::Never {
        propagate_round_up(cursor, start, round_up)?;
    }
    Ok(())
}

/// Adds one unit in the last place to the text written since `start`,
/// carrying through nines. An all-nines number grows by one digit.
fn propagate_round_up(cursor: &mut Cursor<'_>, start: usize, mut round_up: RoundUp) -> Result<()> {
    let grows = {
        let written = cursor.written_mut();
        let mut round = written.len();
        let mut dot = None;
        loop {
            if round == start {
                written[round] = b'1';
                if let Some(dot) = dot {
                    written[dot] = b'0';
                    written[dot + 1] = b'.';
                }
                break true;
            }
            round -= 1;
            let c = written[round];
            if c == b'.' {
                dot = Some(round);
            } else if c == b'9' {
                written[round] = b'0';
                round_up = RoundUp::Always;
            } else {
                if round_up == RoundUp::Always || c % 2 != 0 {
                    written[round] = c + 1;
                }
                break false;
            }
        }
    };
    if grows {
        cursor.push(b'0')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::string::String;

    fn fixed(value: f64, precision: u32) -> String {
        let mut buf = [0u8; 2048];
        let mut cursor = Cursor::new(&mut buf);
        d2fixed_buffered_n(&mut cursor, Ieee64::from_bits(value.to_bits()), precision).unwrap();
        let len = cursor.position();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_basic() {
        assert_eq!(fixed(1.0, 0), "1");
        assert_eq!(fixed(1.0, 3), "1.000");
        assert_eq!(fixed(3.14159, 2), "3.14");
        assert_eq!(fixed(0.0, 3), "0.000");
        assert_eq!(fixed(0.0, 0), "0");
        assert_eq!(fixed(123456789012.0, 1), "123456789012.0");
    }

    #[test]
    fn test_half_even() {
        assert_eq!(fixed(0.5, 0), "0");
        assert_eq!(fixed(1.5, 0), "2");
        assert_eq!(fixed(2.5, 0), "2");
        assert_eq!(fixed(0.125, 2), "0.12");
        assert_eq!(fixed(0.375, 2), "0.38");
        // 2.675 is stored slightly below the tie.
        assert_eq!(fixed(2.675, 2), "2.67");
    }

    #[test]
    fn test_carry() {
        assert_eq!(fixed(0.9999999999999999, 0), "1");
        assert_eq!(fixed(9.5, 0), "10");
        assert_eq!(fixed(99.99, 1), "100.0");
        assert_eq!(fixed(0.96, 1), "1.0");
        assert_eq!(fixed(9.999, 2), "10.00");
    }

    #[test]
    fn test_extremes() {
        let mut min = String::from("0.");
        min.push_str(&"0".repeat(323));
        min.push_str("4940656");
        assert_eq!(fixed(5e-324, 330), min);
        let max = fixed(f64::MAX, 0);
        assert_eq!(max.len(), 309);
        assert!(max.starts_with("17976931348623157081"));
        assert!(max.ends_with("858368"));
    }

    #[test]
    fn test_carry_grows_output() {
        // "9" fits but the carry needs a second byte.
        let mut buf = [0u8; 1];
        let mut cursor = Cursor::new(&mut buf);
        let ieee = Ieee64::from_bits(9.5f64.to_bits());
        assert_eq!(d2fixed_buffered_n(&mut cursor, ieee, 0), Err(Error::BufferTooSmall));

        let mut buf = [0u8; 1];
        let mut cursor = Cursor::new(&mut buf);
        let ieee = Ieee64::from_bits(3.0f64.to_bits());
        assert_eq!(d2fixed_buffered_n(&mut cursor, ieee, 1), Err(Error::BufferTooSmall));
    }
}
