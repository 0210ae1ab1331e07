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

//! Decimal digit emission. Every writer here fills an exactly sized slice;
//! callers reserve the space first.

#[rustfmt::skip]
static DIGIT_TABLE: [u8; 200] = [
    b'0', b'0', b'0', b'1', b'0', b'2', b'0', b'3', b'0', b'4',
    b'0', b'5', b'0', b'6', b'0', b'7', b'0', b'8', b'0', b'9',
    b'1', b'0', b'1', b'1', b'1', b'2', b'1', b'3', b'1', b'4',
    b'1', b'5', b'1', b'6', b'1', b'7', b'1', b'8', b'1', b'9',
    b'2', b'0', b'2', b'1', b'2', b'2', b'2', b'3', b'2', b'4',
    b'2', b'5', b'2', b'6', b'2', b'7', b'2', b'8', b'2', b'9',
    b'3', b'0', b'3', b'1', b'3', b'2', b'3', b'3', b'3', b'4',
    b'3', b'5', b'3', b'6', b'3', b'7', b'3', b'8', b'3', b'9',
    b'4', b'0', b'4', b'1', b'4', b'2', b'4', b'3', b'4', b'4',
    b'4', b'5', b'4', b'6', b'4', b'7', b'4', b'8', b'4', b'9',
    b'5', b'0', b'5', b'1', b'5', b'2', b'5', b'3', b'5', b'4',
    b'5', b'5', b'5', b'6', b'5', b'7', b'5', b'8', b'5', b'9',
    b'6', b'0', b'6', b'1', b'6', b'2', b'6', b'3', b'6', b'4',
    b'6', b'5', b'6', b'6', b'6', b'7', b'6', b'8', b'6', b'9',
    b'7', b'0', b'7', b'1', b'7', b'2', b'7', b'3', b'7', b'4',
    b'7', b'5', b'7', b'6', b'7', b'7', b'7', b'8', b'7', b'9',
    b'8', b'0', b'8', b'1', b'8', b'2', b'8', b'3', b'8', b'4',
    b'8', b'5', b'8', b'6', b'8', b'7', b'8', b'8', b'8', b'9',
    b'9', b'0', b'9', b'1', b'9', b'2', b'9', b'3', b'9', b'4',
    b'9', b'5', b'9', b'6', b'9', b'7', b'9', b'8', b'9', b'9',
];

#[inline]
fn copy_pair(result: &mut [u8], at: usize, pair: u32) {
    let c = pair as usize * 2;
    result[at..at + 2].copy_from_slice(&DIGIT_TABLE[c..c + 2]);
}

pub(crate) fn decimal_length9(v: u32) -> u32 {
    debug_assert!(v < 1000000000);
    if v >= 100000000 {
        9
    } else if v >= 10000000 {
        8
    } else if v >= 1000000 {
        7
    } else if v >= 100000 {
        6
    } else if v >= 10000 {
        5
    } else if v >= 1000 {
        4
    } else if v >= 100 {
        3
    } else if v >= 10 {
        2
    } else {
        1
    }
}

pub(crate) fn decimal_length17(v: u64) -> u32 {
    // The average output length is 16.38 digits, so check high-to-low.
    debug_assert!(v < 100000000000000000);
    if v >= 10000000000000000 {
        17
    } else if v >= 1000000000000000 {
        16
    } else if v >= 100000000000000 {
        15
    } else if v >= 10000000000000 {
        14
    } else if v >= 1000000000000 {
        13
    } else if v >= 100000000000 {
        12
    } else if v >= 10000000000 {
        11
    } else if v >= 1000000000 {
        10
    } else {
        decimal_length9(v as u32)
    }
}

/// Writes the `olength` digits of `digits` into `result[..olength]`.
/// `olength` must be the exact digit count.
pub(crate) fn append_n_digits(olength: u32, mut digits: u32, result: &mut [u8]) {
    let olength = olength as usize;
    let mut i = 0;
    while digits >= 10000 {
        let c = digits % 10000;
        digits /= 10000;
        copy_pair(result, olength - i - 2, c % 100);
        copy_pair(result, olength - i - 4, c / 100);
        i += 4;
    }
    if digits >= 100 {
        let c = digits % 100;
        digits /= 100;
        copy_pair(result, olength - i - 2, c);
        i += 2;
    }
    if digits >= 10 {
        copy_pair(result, olength - i - 2, digits);
    } else {
        result[0] = b'0' + digits as u8;
    }
}

/// Writes `digits` zero-padded to exactly nine characters.
pub(crate) fn append_nine_digits(mut digits: u32, result: &mut [u8]) {
    if digits == 0 {
        result[..9].fill(b'0');
        return;
    }
    for i in [0, 4] {
        let c = digits % 10000;
        digits /= 10000;
        copy_pair(result, 7 - i, c % 100);
        copy_pair(result, 5 - i, c / 100);
    }
    result[0] = b'0' + digits as u8;
}

/// Writes the low `count` digits of `digits`, zero-padded, into
/// `result[..count]`.
pub(crate) fn append_c_digits(count: u32, mut digits: u32, result: &mut [u8]) {
    let count = count as usize;
    let mut i = 0;
    while i + 1 < count {
        let c = digits % 100;
        digits /= 100;
        copy_pair(result, count - i - 2, c);
        i += 2;
    }
    if i < count {
        result[count - i - 1] = b'0' + (digits % 10) as u8;
    }
}

/// Writes every digit of `output` so that the last one lands at the end of
/// `result`. Returns the index of the first digit written.
pub(crate) fn write_mantissa32(mut output: u32, result: &mut [u8]) -> usize {
    let mut mid = result.len();
    while output >= 10000 {
        let c = output % 10000;
        output /= 10000;
        mid -= 2;
        copy_pair(result, mid, c % 100);
        mid -= 2;
        copy_pair(result, mid, c / 100);
    }
    if output >= 100 {
        let c = output % 100;
        output /= 100;
        mid -= 2;
        copy_pair(result, mid, c);
    }
    if output >= 10 {
        mid -= 2;
        copy_pair(result, mid, output);
    } else {
        mid -= 1;
        result[mid] = b'0' + output as u8;
    }
    mid
}

/// 64-bit counterpart of [`write_mantissa32`].
pub(crate) fn write_mantissa64(mut output: u64, result: &mut [u8]) -> usize {
    let mut mid = result.len();
    if (output >> 32) != 0 {
        // Peel off eight digits so the rest fits in 32 bits.
        let q = output / 100000000;
        let mut output2 = (output - 100000000 * q) as u32;
        output = q;

        let c = output2 % 10000;
        output2 /= 10000;
        let d = output2 % 10000;
        mid -= 2;
        copy_pair(result, mid, c % 100);
        mid -= 2;
        copy_pair(result, mid, c / 100);
        mid -= 2;
        copy_pair(result, mid, d % 100);
        mid -= 2;
        copy_pair(result, mid, d / 100);
    }
    write_mantissa32(output as u32, &mut result[..mid])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_length() {
        assert_eq!(decimal_length9(0), 1);
        assert_eq!(decimal_length9(9), 1);
        assert_eq!(decimal_length9(10), 2);
        assert_eq!(decimal_length9(999999999), 9);
        assert_eq!(decimal_length17(1), 1);
        assert_eq!(decimal_length17(1000000000), 10);
        assert_eq!(decimal_length17(99999999999999999), 17);
    }

    #[test]
    fn test_append_n_digits() {
        let mut buf = [0u8; 10];
        append_n_digits(1, 7, &mut buf);
        assert_eq!(&buf[..1], b"7");
        append_n_digits(5, 12345, &mut buf);
        assert_eq!(&buf[..5], b"12345");
        append_n_digits(10, 4294967295, &mut buf);
        assert_eq!(&buf, b"4294967295");
    }

    #[test]
    fn test_append_nine_digits() {
        let mut buf = [b'x'; 9];
        append_nine_digits(0, &mut buf);
        assert_eq!(&buf, b"000000000");
        append_nine_digits(42, &mut buf);
        assert_eq!(&buf, b"000000042");
        append_nine_digits(123456789, &mut buf);
        assert_eq!(&buf, b"123456789");
    }

    #[test]
    fn test_append_c_digits() {
        let mut buf = [b'x'; 9];
        append_c_digits(3, 7, &mut buf);
        assert_eq!(&buf[..4], b"007x");
        append_c_digits(4, 1234, &mut buf);
        assert_eq!(&buf[..4], b"1234");
        append_c_digits(1, 5, &mut buf);
        assert_eq!(&buf[..1], b"5");
    }

    #[test]
    fn test_write_mantissa() {
        let mut buf = [b'x'; 20];
        let start = write_mantissa32(1729, &mut buf[..6]);
        assert_eq!(start, 2);
        assert_eq!(&buf[..6], b"xx1729");

        let start = write_mantissa64(17976931348623157, &mut buf);
        assert_eq!(start, 3);
        assert_eq!(&buf[3..], b"17976931348623157");

        let start = write_mantissa64(0, &mut buf[..1]);
        assert_eq!(start, 0);
        assert_eq!(&buf[..1], b"0");
    }
}
