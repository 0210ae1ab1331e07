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

//! Shortest round-trip digits for binary64.

use crate::d2s_table::{
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT, DOUBLE_POW5_INV_SPLIT, DOUBLE_POW5_SPLIT,
};
use crate::div::{multiple_of_power_of_2, multiple_of_power_of_5};
use crate::floor_log::{log10_pow2, log10_pow5, pow5bits};
use crate::ieee::{DOUBLE_BIAS, DOUBLE_MANTISSA_BITS};
use crate::wuint::mul_shift_all64;

/// A binary64 value as `mantissa * 10^exponent`, where `mantissa` has the
/// fewest digits that still parse back to the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal64 {
    pub mantissa: u64,
    pub exponent: i32,
}

/// Computes the shortest decimal for a nonzero finite binary64 value given
/// its stored mantissa and biased exponent.
pub(crate) fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> Decimal64 {
    // Two extra bits of exponent leave room for the interval bounds.
    let (e2, m2) = if ieee_exponent == 0 {
        (1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2, ieee_mantissa)
    } else {
        (
            ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32 - 2,
            (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa,
        )
    };
    debug_assert!(m2 != 0);
    let even = (m2 & 1) == 0;
    let accept_bounds = even;

    let mv = 4 * m2;
    // The lower gap halves when the significand is a power of two.
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;

    let mut vr: u64;
    let mut vp: u64;
    let mut vm: u64;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    if e2 >= 0 {
        // Computing one power of ten less than needed saves a division in
        // the digit loop for most inputs.
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        (vr, vp, vm) = mul_shift_all64(m2, DOUBLE_POW5_INV_SPLIT[q as usize], i, mm_shift);
        if q <= 21 {
            // Only one of mp, mv and mm can be a multiple of 5, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mv - 1 - mm_shift as u64, q);
            } else {
                vp -= multiple_of_power_of_5(mv + 2, q) as u64;
            }
        }
    } else {
        let q = log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        (vr, vp, vm) = mul_shift_all64(m2, DOUBLE_POW5_SPLIT[i as usize], j, mm_shift);
        if q <= 1 {
            // mv has at least q trailing zero bits, so vr does too.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp -= 1;
            }
        } else if q < 63 {
            // We need to know whether the full product has at least q
            // trailing zeros, which holds when mv has at least q - 1.
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q - 1);
        }
    }

    let mut removed = 0i32;
    let mut last_removed_digit = 0u8;
    let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // General case, which happens rarely (~0.7%).
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
            || last_removed_digit >= 5) as u64
    } else {
        // Common case (~99.3%).
        let mut round_up = false;
        if vp / 100 > vm / 100 {
            // Optimization: remove two digits at a time (~86.2%).
            round_up = vr % 100 >= 50;
            vr /= 100;
            vp /= 100;
            vm /= 100;
            removed += 2;
        }
        // Loop iterations below (approximately), without the optimization
        // above: 0: 0.03%, 1: 13.8%, 2: 70.6%, 3: 14.0%, 4: 1.40%, 5: 0.14%.
        while vp / 10 > vm / 10 {
            round_up = vr % 10 >= 5;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }
        vr + (vr == vm || round_up) as u64
    };

    Decimal64 {
        mantissa: output,
        exponent: e10 + removed,
    }
}

/// Exact path for integers in `[1, 2^53)`. Returns `None` when the value
/// has a fractional part or is too large, in which case [`d2d`] applies.
/// Trailing decimal zeros are moved into the exponent.
pub(crate) fn d2d_small_int(ieee_mantissa: u64, ieee_exponent: u32) -> Option<Decimal64> {
    let m2 = (1u64 << DOUBLE_MANTISSA_BITS) | ieee_mantissa;
    let e2 = ieee_exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32;

    if e2 > 0 {
        // f = m2 * 2^e2 >= 2^53 is an integer, but this path only handles
        // values below 2^53.
        return None;
    }
    if e2 < -52 {
        // f < 1.
        return None;
    }

    // Since 2^52 <= m2 < 2^53 and 0 <= -e2 <= 52, f is an integer exactly
    // when the low -e2 bits of m2 are zero.
    let mask = (1u64 << -e2) - 1;
    if m2 & mask != 0 {
        return None;
    }

    let mut mantissa = m2 >> -e2;
    let mut exponent = 0;
    while mantissa % 10 == 0 {
        mantissa /= 10;
        exponent += 1;
    }
    Some(Decimal64 { mantissa, exponent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ieee::Ieee64;

    fn decimal(f: f64) -> Decimal64 {
        let ieee = Ieee64::from_bits(f.to_bits());
        d2d(ieee.mantissa, ieee.exponent)
    }

    fn small_int(f: f64) -> Option<Decimal64> {
        let ieee = Ieee64::from_bits(f.to_bits());
        d2d_small_int(ieee.mantissa, ieee.exponent)
    }

    #[test]
    fn test_basic() {
        assert_eq!(decimal(1.0), Decimal64 { mantissa: 1, exponent: 0 });
        assert_eq!(decimal(0.3), Decimal64 { mantissa: 3, exponent: -1 });
        assert_eq!(decimal(17.29), Decimal64 { mantissa: 1729, exponent: -2 });
        assert_eq!(decimal(1e23), Decimal64 { mantissa: 1, exponent: 23 });
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(
            decimal(f64::MAX),
            Decimal64 { mantissa: 17976931348623157, exponent: 292 }
        );
        assert_eq!(
            decimal(f64::MIN_POSITIVE),
            Decimal64 { mantissa: 22250738585072014, exponent: -324 }
        );
        assert_eq!(decimal(f64::from_bits(1)), Decimal64 { mantissa: 5, exponent: -324 });
    }

    #[test]
    fn test_small_int() {
        assert_eq!(small_int(1.0), Some(Decimal64 { mantissa: 1, exponent: 0 }));
        assert_eq!(small_int(1200.0), Some(Decimal64 { mantissa: 12, exponent: 2 }));
        assert_eq!(
            small_int(9007199254740991.0),
            Some(Decimal64 { mantissa: 9007199254740991, exponent: 0 })
        );
        assert_eq!(small_int(0.5), None);
        assert_eq!(small_int(1.5), None);
        assert_eq!(small_int(9007199254740992.0), None);
    }

    #[test]
    fn test_small_int_agrees_with_general_path() {
        for _ in 0..10_000 {
            let n = rand::random::<u64>() >> (11 + rand::random::<u32>() % 53);
            if n == 0 {
                continue;
            }
            let f = n as f64;
            assert_eq!(small_int(f), Some(decimal(f)), "f = {f}");
        }
    }
}
