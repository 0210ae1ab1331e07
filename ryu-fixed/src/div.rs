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

//! Exact divisibility tests used to detect trailing zeros.

const fn modular_inverse<const A: u64>() -> u64 {
    // By Euler's theorem, a^phi(2^64) == 1 (mod 2^64), so the inverse of an
    // odd a is a^(2^63 - 1) = a^(1 + 2 + ... + 2^62).
    let mut mod_inverse: u64 = 1;
    let mut i = 1;
    while i < u64::BITS {
        mod_inverse = mod_inverse.wrapping_mul(mod_inverse).wrapping_mul(A);
        i += 1;
    }
    mod_inverse
}

struct Table<const A: u64, const N: usize> {
    mod_inv: [u64; N],
    max_quotients: [u64; N],
}

impl<const A: u64, const N: usize> Table<A, N> {
    const TABLE: Self = {
        let mod_inverse = modular_inverse::<A>();
        let mut mod_inv = [0; N];
        let mut max_quotients = [0; N];
        let mut pow_of_mod_inverse: u64 = 1;
        let mut pow_of_a: u64 = 1;
        let mut i = 0;
        while i < N {
            mod_inv[i] = pow_of_mod_inverse;
            max_quotients[i] = u64::MAX / pow_of_a;

            pow_of_mod_inverse = pow_of_mod_inverse.wrapping_mul(mod_inverse);
            pow_of_a *= A;
            i += 1;
        }
        Table {
            mod_inv,
            max_quotients,
        }
    };
}

// The shortest engines test divisibility by at most 5^21.
const POW5_TABLE_SIZE: usize = 24;

/// Returns true if `value` is divisible by `5^p`.
#[inline]
pub(crate) fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    let table = &Table::<5, POW5_TABLE_SIZE>::TABLE;
    debug_assert!((p as usize) < POW5_TABLE_SIZE);
    value.wrapping_mul(table.mod_inv[p as usize]) <= table.max_quotients[p as usize]
}

/// Returns true if `value` is divisible by `2^p`.
#[inline]
pub(crate) fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    debug_assert!(value != 0);
    debug_assert!(p < 64);
    value.trailing_zeros() >= p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pow5_factor(mut value: u64) -> u32 {
        let mut count = 0;
        while value % 5 == 0 {
            value /= 5;
            count += 1;
        }
        count
    }

    #[test]
    fn test_multiple_of_power_of_5() {
        assert!(multiple_of_power_of_5(0, 21));
        assert!(multiple_of_power_of_5(7, 0));
        assert!(multiple_of_power_of_5(125, 3));
        assert!(!multiple_of_power_of_5(125, 4));
        assert!(multiple_of_power_of_5(476837158203125, 21));
        assert!(!multiple_of_power_of_5(476837158203124, 1));

        for _ in 0..10_000 {
            let value = rand::random::<u64>() >> 8;
            let p = rand::random::<u32>() % POW5_TABLE_SIZE as u32;
            if value != 0 {
                assert_eq!(
                    multiple_of_power_of_5(value, p),
                    pow5_factor(value) >= p,
                    "value = {value}, p = {p}"
                );
            }
        }
    }

    #[test]
    fn test_multiple_of_power_of_2() {
        assert!(multiple_of_power_of_2(1, 0));
        assert!(!multiple_of_power_of_2(1, 1));
        assert!(multiple_of_power_of_2(96, 5));
        assert!(!multiple_of_power_of_2(96, 6));
        assert!(multiple_of_power_of_2(1 << 63, 63));
    }
}
