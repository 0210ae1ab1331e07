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

//! Shortest round-trip digits for binary32.

use crate::div::{multiple_of_power_of_2, multiple_of_power_of_5};
use crate::f2s_table::{
    FLOAT_POW5_BITCOUNT, FLOAT_POW5_INV_BITCOUNT, FLOAT_POW5_INV_SPLIT, FLOAT_POW5_SPLIT,
};
use crate::floor_log::{log10_pow2, log10_pow5, pow5bits};
use crate::ieee::{FLOAT_BIAS, FLOAT_MANTISSA_BITS};
use crate::wuint::mul_shift32;

/// A binary32 value as `mantissa * 10^exponent`, where `mantissa` has the
/// fewest digits that still parse back to the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal32 {
    pub mantissa: u32,
    pub exponent: i32,
}

#[inline]
fn mul_pow5_inv_div_pow2(m: u32, q: u32, j: i32) -> u32 {
    mul_shift32(m, FLOAT_POW5_INV_SPLIT[q as usize], j)
}

#[inline]
fn mul_pow5_div_pow2(m: u32, i: u32, j: i32) -> u32 {
    mul_shift32(m, FLOAT_POW5_SPLIT[i as usize], j)
}

/// Computes the shortest decimal for a nonzero finite binary32 value given
/// its stored mantissa and biased exponent.
pub(crate) fn f2d(ieee_mantissa: u32, ieee_exponent: u32) -> Decimal32 {
    // Two extra bits of exponent leave room for the interval bounds.
    let (e2, m2) = if ieee_exponent == 0 {
        (1 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2, ieee_mantissa)
    } else {
        (
            ieee_exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32 - 2,
            (1u32 << FLOAT_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    debug_assert!(m2 != 0);
    let even = (m2 & 1) == 0;
    let accept_bounds = even;

    // The halfway points to the neighbors are (mv - 2) / 4 and (mv + 2) / 4.
    // The lower gap halves when the significand is a power of two.
    let mv = 4 * m2;
    let mp = 4 * m2 + 2;
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;
    let mm = 4 * m2 - 1 - mm_shift;

    let mut vr: u32;
    let mut vp: u32;
    let mut vm: u32;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    let mut last_removed_digit = 0u8;
    if e2 >= 0 {
        let q = log10_pow2(e2);
        e10 = q as i32;
        let k = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_pow5_inv_div_pow2(mv, q, i);
        vp = mul_pow5_inv_div_pow2(mp, q, i);
        vm = mul_pow5_inv_div_pow2(mm, q, i);
        if q != 0 && vp.wrapping_sub(1) / 10 <= vm / 10 {
            // The loop below removes at most one digit; recover the digit it
            // would have seen from one power of ten lower.
            let l = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32 - 1) - 1;
            last_removed_digit =
                (mul_pow5_inv_div_pow2(mv, q - 1, -e2 + q as i32 - 1 + l) % 10) as u8;
        }
        if q <= 9 {
            // Only one of mp, mv and mm can be a multiple of 5, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv as u64, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mm as u64, q);
            } else {
                vp -= multiple_of_power_of_5(mp as u64, q) as u32;
            }
        }
    } else {
        let q = log10_pow5(-e2);
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - FLOAT_POW5_BITCOUNT;
        let mut j = q as i32 - k;
        vr = mul_pow5_div_pow2(mv, i as u32, j);
        vp = mul_pow5_div_pow2(mp, i as u32, j);
        vm = mul_pow5_div_pow2(mm, i as u32, j);
        if q != 0 && vp.wrapping_sub(1) / 10 <= vm / 10 {
            j = q as i32 - 1 - (pow5bits(i + 1) - FLOAT_POW5_BITCOUNT);
            last_removed_digit = (mul_pow5_div_pow2(mv, (i + 1) as u32, j) % 10) as u8;
        }
        if q <= 1 {
            // mv has at least q trailing zero bits, so vr does too.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                // mm = mv - 1 - mm_shift has a trailing zero only when
                // mm_shift == 1.
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                // mp = mv + 2 always has at least one trailing zero bit.
                vp -= 1;
            }
        } else if q < 31 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv as u64, q - 1);
        }
    }

    // Find the shortest representation in the interval.
    let mut removed = 0i32;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~4.0%).
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vm /= 10;
                removed += 1;
            }
        }
        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Round even if the exact value is .....50..0.
            last_removed_digit = 4;
        }
        vr + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros))
            || last_removed_digit >= 5) as u32
    } else {
        // Common case (~96.0%).
        while vp / 10 > vm / 10 {
            last_removed_digit = (vr % 10) as u8;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        vr + (vr == vm || last_removed_digit >= 5) as u32
    };

    Decimal32 {
        mantissa: output,
        exponent: e10 + removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ieee::Ieee32;

    fn decimal(f: f32) -> Decimal32 {
        let ieee = Ieee32::from_bits(f.to_bits());
        f2d(ieee.mantissa, ieee.exponent)
    }

    #[test]
    fn test_basic() {
        assert_eq!(decimal(1.0), Decimal32 { mantissa: 1, exponent: 0 });
        assert_eq!(decimal(1.5), Decimal32 { mantissa: 15, exponent: -1 });
        assert_eq!(decimal(0.3), Decimal32 { mantissa: 3, exponent: -1 });
        assert_eq!(decimal(1729.0), Decimal32 { mantissa: 1729, exponent: 0 });
        assert_eq!(decimal(100.0), Decimal32 { mantissa: 1, exponent: 2 });
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(decimal(f32::MAX), Decimal32 { mantissa: 34028235, exponent: 31 });
        assert_eq!(decimal(f32::MIN_POSITIVE), Decimal32 { mantissa: 11754944, exponent: -45 });
        assert_eq!(decimal(f32::from_bits(1)), Decimal32 { mantissa: 1, exponent: -45 });
        assert_eq!(decimal(1e11), Decimal32 { mantissa: 1, exponent: 11 });
    }
}
