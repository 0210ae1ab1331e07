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

//! Integer approximations of logarithms used to pick table rows.

/// Returns `e == 0 ? 1 : ceil(log_2(5^e))`; requires `0 <= e <= 3528`.
#[inline]
pub(crate) const fn pow5bits(e: i32) -> i32 {
    debug_assert!(e >= 0 && e <= 3528);
    (((e as u32) * 1217359) >> 19) as i32 + 1
}

/// Returns `floor(log_10(2^e))`; requires `0 <= e <= 1650`.
#[inline]
pub(crate) const fn log10_pow2(e: i32) -> u32 {
    debug_assert!(e >= 0 && e <= 1650);
    ((e as u32) * 78913) >> 18
}

/// Returns `floor(log_10(5^e))`; requires `0 <= e <= 2620`.
#[inline]
pub(crate) const fn log10_pow5(e: i32) -> u32 {
    debug_assert!(e >= 0 && e <= 2620);
    ((e as u32) * 732923) >> 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log10_pow2() {
        // Little-endian decimal digits of 2^e, doubled once per step.
        let mut digits = [0u8; 512];
        digits[0] = 1;
        let mut len = 1;
        for e in 0..=1650 {
            assert_eq!(log10_pow2(e), len as u32 - 1, "e = {e}");
            let mut carry = 0;
            for d in digits.iter_mut().take(len) {
                let v = *d * 2 + carry;
                *d = v % 10;
                carry = v / 10;
            }
            if carry != 0 {
                digits[len] = carry;
                len += 1;
            }
        }
    }

    #[test]
    fn test_pow5bits() {
        assert_eq!(pow5bits(0), 1);
        assert_eq!(pow5bits(1), 3);
        assert_eq!(pow5bits(2), 5);
        assert_eq!(pow5bits(3), 7);
        assert_eq!(pow5bits(4), 10);
        // 5^27 needs 63 bits.
        assert_eq!(pow5bits(27), 63);
        // 5^55 needs 128 bits.
        assert_eq!(pow5bits(55), 128);
    }

    #[test]
    fn test_log10_pow5() {
        assert_eq!(log10_pow5(0), 0);
        assert_eq!(log10_pow5(1), 0);
        assert_eq!(log10_pow5(2), 1);
        assert_eq!(log10_pow5(3), 2);
        assert_eq!(log10_pow5(4), 2);
        assert_eq!(log10_pow5(5), 3);
        assert_eq!(log10_pow5(1074), 750);
    }
}
