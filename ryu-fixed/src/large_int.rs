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

//! Exact decimal expansion of binary32 values that are integers too large
//! for the shortest digits to be printed verbatim.

use crate::cursor::Cursor;
use crate::digits::{append_n_digits, append_nine_digits, decimal_length9};
use crate::error::Result;

const DATA_SIZE: usize = 4;
const BLOCK: u32 = 1_000_000_000;

/// Writes `mantissa2 * 2^exponent2` in full. Requires
/// `0 < exponent2 <= 104` and `mantissa2 < 2^24`.
pub(crate) fn large_integer_to_chars(
    cursor: &mut Cursor<'_>,
    mantissa2: u32,
    exponent2: i32,
) -> Result<()> {
    debug_assert!(exponent2 > 0 && exponent2 <= 104);
    debug_assert!(mantissa2 < 1 << 24);

    // Little-endian 32-bit limbs of the value.
    let mut data = [0u32; DATA_SIZE];
    let mut max_idx = ((24 + exponent2 as u32 + 31) / 32 - 1) as usize;
    let bit_shift = exponent2 as u32 % 32;
    if bit_shift <= 8 {
        data[max_idx] = mantissa2 << bit_shift;
    } else {
        data[max_idx - 1] = mantissa2 << bit_shift;
        data[max_idx] = mantissa2 >> (32 - bit_shift);
    }

    // Peel off base-10^9 blocks, least significant first, until the value
    // fits in one limb.
    let mut blocks = [0u32; DATA_SIZE];
    let mut filled_blocks = 0;
    while max_idx != 0 {
        let most_significant = data[max_idx];
        let initial_quotient = most_significant / BLOCK;
        data[max_idx] = initial_quotient;
        let mut remainder = (most_significant % BLOCK) as u64;
        for idx in (0..max_idx).rev() {
            remainder = (remainder << 32) | data[idx] as u64;
            let quotient = (remainder / BLOCK as u64) as u32;
            remainder -= quotient as u64 * BLOCK as u64;
            data[idx] = quotient;
        }
        blocks[filled_blocks] = remainder as u32;
        filled_blocks += 1;

        if initial_quotient == 0 {
            max_idx -= 1;
        }
    }

    // The leading limb may still hold ten digits.
    let data_olength = if data[0] >= BLOCK {
        10
    } else {
        decimal_length9(data[0])
    };
    let out = cursor.take(data_olength as usize + 9 * filled_blocks)?;
    let (head, tail) = out.split_at_mut(data_olength as usize);
    append_n_digits(data_olength, data[0], head);
    for (chunk, block) in tail.chunks_exact_mut(9).zip(blocks[..filled_blocks].iter().rev()) {
        append_nine_digits(*block, chunk);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String, ToString};

    fn expand(mantissa2: u32, exponent2: i32) -> String {
        let mut buf = [0u8; 64];
        let mut cursor = Cursor::new(&mut buf);
        large_integer_to_chars(&mut cursor, mantissa2, exponent2).unwrap();
        let len = cursor.position();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_matches_big_integer_arithmetic() {
        for exponent2 in 1..=104 {
            for mantissa2 in [1 << 23, (1 << 24) - 1, 0xabcdef, 0x800001] {
                let expected = (mantissa2 as u128) << exponent2;
                assert_eq!(expand(mantissa2, exponent2), expected.to_string());
            }
        }
    }

    #[test]
    fn test_float_max() {
        assert_eq!(
            expand((1 << 24) - 1, 104),
            "340282346638528859811704183484516925440"
        );
    }

    #[test]
    fn test_buffer_too_small() {
        // 2^24 = 16777216
        let mut buf = [0u8; 7];
        let mut cursor = Cursor::new(&mut buf);
        assert!(large_integer_to_chars(&mut cursor, 1 << 23, 1).is_err());

        let mut buf = [0u8; 8];
        let mut cursor = Cursor::new(&mut buf);
        assert!(large_integer_to_chars(&mut cursor, 1 << 23, 1).is_ok());
        assert_eq!(cursor.position(), 8);
        assert_eq!(&buf, b"16777216");

        // 2^27 = 134217728, then 2^127 at 39 digits
        let mut buf = [0u8; 8];
        let mut cursor = Cursor::new(&mut buf);
        assert!(large_integer_to_chars(&mut cursor, 1 << 23, 4).is_err());
        let mut buf = [0u8; 38];
        let mut cursor = Cursor::new(&mut buf);
        assert!(large_integer_to_chars(&mut cursor, 1 << 23, 104).is_err());
        let mut buf = [0u8; 39];
        let mut cursor = Cursor::new(&mut buf);
        assert!(large_integer_to_chars(&mut cursor, 1 << 23, 104).is_ok());
    }
}
