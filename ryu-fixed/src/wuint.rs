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

//! Wide multiplication helpers. All products are exact; shifts truncate.

pub(crate) trait U128Ext: Copy {
    fn high(self) -> u64;
    fn low(self) -> u64;
}

impl U128Ext for u128 {
    #[inline]
    fn high(self) -> u64 {
        (self >> 64) as u64
    }

    #[inline]
    fn low(self) -> u64 {
        self as u64
    }
}

/// Full product of two 64-bit values.
#[inline]
pub(crate) fn umul128(a: u64, b: u64) -> u128 {
    a as u128 * b as u128
}

/// Upper 128 bits of the 256-bit product `a * b`.
#[inline]
pub(crate) fn umul256_hi(a: u128, b: u128) -> u128 {
    let b00 = umul128(a.low(), b.low());
    let b01 = umul128(a.low(), b.high());
    let b10 = umul128(a.high(), b.low());
    let b11 = umul128(a.high(), b.high());

    let mid1 = b10 + b00.high() as u128;
    let mid2 = b01 + mid1.low() as u128;
    b11 + mid1.high() as u128 + mid2.high() as u128
}

/// Returns `v % 1_000_000_000` using a reciprocal multiply. Valid for
/// every `v` below `2^128`.
#[inline]
pub(crate) fn uint128_mod1e9(v: u128) -> u32 {
    const RECIPROCAL: u128 = 0x89705F4136B4A597_31680A88F8953031;
    let multiplied = umul256_hi(v, RECIPROCAL).low();
    let shifted = (multiplied >> 29) as u32;
    (v as u32).wrapping_sub(1_000_000_000u32.wrapping_mul(shifted))
}

/// Returns `(m * factor) >> shift` for a 64-bit table factor.
#[inline]
pub(crate) fn mul_shift32(m: u32, factor: u64, shift: i32) -> u32 {
    debug_assert!(shift > 32);
    let shifted = (m as u128 * factor as u128) >> shift;
    debug_assert!(shifted <= u32::MAX as u128);
    shifted as u32
}

/// Returns `(m * mul) >> j` for a 128-bit table factor, where `j >= 64`.
#[inline]
pub(crate) fn mul_shift64(m: u64, mul: u128, j: i32) -> u64 {
    debug_assert!(j >= 64);
    let b0 = umul128(m, mul.low());
    let b2 = umul128(m, mul.high());
    ((b0.high() as u128 + b2) >> (j - 64)) as u64
}

/// Applies [`mul_shift64`] to the three interval points `4m`, `4m + 2` and
/// `4m - 1 - mm_shift`. Returns `(vr, vp, vm)`.
#[inline]
pub(crate) fn mul_shift_all64(m: u64, mul: u128, j: i32, mm_shift: u32) -> (u64, u64, u64) {
    let vr = mul_shift64(4 * m, mul, j);
    let vp = mul_shift64(4 * m + 2, mul, j);
    let vm = mul_shift64(4 * m - 1 - mm_shift as u64, mul, j);
    (vr, vp, vm)
}

/// Multiplies `m` by the 192-bit row `mul` (little-endian words), shifts the
/// product right by `j` and returns the result modulo `10^9`.
#[inline]
pub(crate) fn mul_shift_mod1e9(m: u64, mul: &[u64; 3], j: i32) -> u32 {
    debug_assert!((128..=180).contains(&j));
    let b0 = umul128(m, mul[0]);
    let b1 = umul128(m, mul[1]);
    let b2 = umul128(m, mul[2]);
    let mid = b1 + b0.high() as u128;
    let s1 = b2 + mid.high() as u128;
    uint128_mod1e9(s1 >> (j - 128))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umul256_hi() {
        assert_eq!(umul256_hi(u128::MAX, u128::MAX), u128::MAX - 1);
        assert_eq!(umul256_hi(1 << 64, 1 << 64), 1);
        assert_eq!(umul256_hi(1 << 127, 2), 1);
        assert_eq!(umul256_hi(12345, 67890), 0);
    }

    #[test]
    fn test_uint128_mod1e9() {
        let samples: [u128; 8] = [
            0,
            999_999_999,
            1_000_000_000,
            1_000_000_001,
            u64::MAX as u128,
            u128::MAX,
            u128::MAX >> 3,
            0x0123_4567_89ab_cdef_fedc_ba98_7654_3210,
        ];
        for v in samples {
            assert_eq!(uint128_mod1e9(v) as u128, v % 1_000_000_000, "v = {v}");
        }
        for _ in 0..10_000 {
            let v: u128 = rand::random();
            assert_eq!(uint128_mod1e9(v) as u128, v % 1_000_000_000, "v = {v}");
        }
    }

    #[test]
    fn test_mul_shift32() {
        assert_eq!(mul_shift32(3, 1 << 40, 40), 3);
        assert_eq!(mul_shift32(u32::MAX, u64::MAX, 64), u32::MAX - 1);
    }

    #[test]
    fn test_mul_shift64() {
        assert_eq!(mul_shift64(5, 1 << 100, 100), 5);
        assert_eq!(mul_shift64(7, 3 << 64, 65), 10);
        let (vr, vp, vm) = mul_shift_all64(10, 1 << 64, 64, 1);
        assert_eq!((vr, vp, vm), (40, 42, 38));
    }

    #[test]
    fn test_mul_shift_mod1e9() {
        for _ in 0..10_000 {
            let m = rand::random::<u64>() >> 3;
            let mul = [rand::random::<u64>(), rand::random::<u64>(), rand::random::<u64>() >> 4];
            let j = 128 + (rand::random::<u32>() % 53) as i32;

            // Reference: exact 256-bit product split into two u128 halves.
            let b0 = umul128(m, mul[0]);
            let b1 = umul128(m, mul[1]);
            let b2 = umul128(m, mul[2]);
            let mid = b1 + b0.high() as u128;
            let upper = b2 + mid.high() as u128;
            let expected = (upper >> (j - 128)) % 1_000_000_000;
            assert_eq!(mul_shift_mod1e9(m, &mul, j) as u128, expected);
        }
    }
}
