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

// Many of the cases below come from the test suites of Ryu and Ryu printf. The reference C code
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

#![allow(
    clippy::cast_lossless,
    clippy::excessive_precision,
    clippy::float_cmp,
    clippy::unreadable_literal,
    clippy::unseparated_literal_suffix
)]

#[macro_use]
mod macros;

fn shortest(f: f64) -> String {
    let mut buf = [0u8; 400];
    let n = ryu_fixed::shortest(&mut buf, f).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

/// "0." followed by `zeros` zeros and then `digits`.
fn small(zeros: usize, digits: &str) -> String {
    format!("0.{}{}", "0".repeat(zeros), digits)
}

fn ieee_parts_to_double(ieee_exponent: u32, ieee_mantissa: u64) -> f64 {
    assert!(ieee_exponent <= 2047);
    assert!(ieee_mantissa <= (1u64 << 53) - 1);
    f64::from_bits(((ieee_exponent as u64) << 52) | ieee_mantissa)
}

fn random_finite() -> f64 {
    loop {
        let f = f64::from_bits(rand::random::<u64>());
        if f.is_finite() {
            return f;
        }
    }
}

#[test]
fn test_basic() {
    check!(0.0, "0");
    check!(-0.0, "0");
    check!(1.0, "1");
    check!(-1.0, "1");
    check!(0.3);
    check!(17.29);
    check!(1.0e-7, "0.0000001");
    check!(1729.0, "1729");
    check!(172900.0, "172900");
    check!(0.001729);
    check!(2.71828);
    check!(2.718281828459045);
}

#[test]
fn test_random() {
    let n = if cfg!(miri) { 100 } else { 1000000 };
    let mut buf = [0u8; 400];
    for _ in 0..n {
        let f = random_finite();
        let len = ryu_fixed::shortest(&mut buf, f).unwrap();
        let text = std::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(f.abs(), text.parse::<f64>().unwrap(), "{text}");
    }
}

#[test]
fn test_matches_std_below_2_pow_53() {
    let n = if cfg!(miri) { 100 } else { 100000 };
    for _ in 0..n {
        // Biased exponents up to 1075 keep the value below 2^53.
        let exponent = rand::random::<u32>() % 1076;
        let f = ieee_parts_to_double(exponent, rand::random::<u64>() >> 12);
        let ours = shortest(f);
        let std = f.to_string();
        assert_eq!(ours.len(), std.len(), "{ours} vs {std}");
        assert_eq!(f, ours.parse::<f64>().unwrap());
    }
}

#[test]
fn test_large_integers_are_exact() {
    let n = if cfg!(miri) { 10 } else { 10000 };
    for _ in 0..n {
        let exponent = 1076 + rand::random::<u32>() % 971;
        let f = ieee_parts_to_double(exponent, rand::random::<u64>() >> 12);
        assert_eq!(shortest(f), format!("{f:.0}"));
    }
}

#[test]
fn test_switch_to_subnormal() {
    check!(2.2250738585072014E-308, small(307, "22250738585072014"));
}

#[test]
fn test_min_and_max() {
    assert_eq!(f64::from_bits(1), 5E-324);
    check!(5E-324, small(323, "5"));

    assert_eq!(f64::from_bits(0x7fefffffffffffff), 1.7976931348623157E308);
    let max = shortest(f64::MAX);
    assert_eq!(max.len(), 309);
    assert!(max.starts_with("179769313486231570814527423731704356798070"));
    assert_eq!(max, format!("{:.0}", f64::MAX));
}

#[test]
fn test_not_exact_when_padded() {
    check!(1e23, "99999999999999991611392");
    check!(1e22, "10000000000000000000000");
    check!(1.234E15, "1234000000000000");
    check!(1.1E128, format!("{:.0}", 1.1E128));
    assert!(shortest(1.1E128).starts_with("1100000000000000082691935608170029490218"));
}

#[test]
fn test_lots_of_trailing_zeros() {
    // Exactly 2^-25, so the tie goes to the even digit.
    check!(2.9802322387695313E-8, "0.000000029802322387695312");
}

#[test]
fn test_regression() {
    check!(2.109808898695963E16, "21098088986959632");
    check!(4.940656E-318, small(317, "4940656"));
    check!(1.18575755E-316, small(315, "118575755"));
    check!(2.989102097996E-312, small(311, "2989102097996"));
    check!(9.0608011534336E15, "9060801153433600");
    check!(4.708356024711512E18, "4708356024711512064");
    check!(9.409340012568248E18, "9409340012568248320");
    check!(1.2345678);
}

#[test]
fn test_looks_like_pow5() {
    // These numbers have a mantissa that is a multiple of the largest power of
    // 5 that fits, and an exponent that causes the computation for q to result
    // in 22, which is a corner case for Ryū.
    assert_eq!(f64::from_bits(0x4830F0CF064DD592), 5.764607523034235E39);
    check!(5.764607523034235E39, "5764607523034234880000000000000000000000");
    assert_eq!(f64::from_bits(0x4840F0CF064DD592), 1.152921504606847E40);
    check!(1.152921504606847E40, "11529215046068469760000000000000000000000");
    assert_eq!(f64::from_bits(0x4850F0CF064DD592), 2.305843009213694E40);
    check!(2.305843009213694E40, "23058430092136939520000000000000000000000");
}

#[test]
fn test_output_length() {
    check!(1.2);
    check!(1.23);
    check!(1.234);
    check!(1.2345);
    check!(1.23456);
    check!(1.234567);
    check!(1.2345678);
    check!(1.23456789);
    check!(1.234567895); // 1.234567890 would be trimmed
    check!(1.2345678901);
    check!(1.23456789012);
    check!(1.234567890123);
    check!(1.2345678901234);
    check!(1.23456789012345);
    check!(1.234567890123456);
    check!(1.2345678901234567);

    // Test 32-bit chunking
    check!(4.294967294); // 2^32 - 2
    check!(4.294967295); // 2^32 - 1
    check!(4.294967296); // 2^32
    check!(4.294967297); // 2^32 + 1
    check!(4.294967298); // 2^32 + 2
}

// Test min, max shift values in shiftright128
#[test]
fn test_min_max_shift() {
    let max_mantissa = (1u64 << 53) - 1;

    assert_eq!(1.7800590868057611E-307, ieee_parts_to_double(4, 0));
    check!(1.7800590868057611E-307, small(306, "17800590868057611"));
    assert_eq!(2.8480945388892175E-306, ieee_parts_to_double(6, max_mantissa));
    check!(2.8480945388892175E-306, small(305, "28480945388892175"));
    assert_eq!(2.446494580089078E-296, ieee_parts_to_double(41, 0));
    check!(2.446494580089078E-296, small(295, "2446494580089078"));
    assert_eq!(4.8929891601781557E-296, ieee_parts_to_double(40, max_mantissa));
    check!(4.8929891601781557E-296, small(295, "48929891601781557"));

    assert_eq!(1.8014398509481984E16, ieee_parts_to_double(1077, 0));
    check!(1.8014398509481984E16, "18014398509481984");
    assert_eq!(3.6028797018963964E16, ieee_parts_to_double(1076, max_mantissa));
    check!(3.6028797018963964E16, "36028797018963964");
    assert_eq!(2.9008355198595578E-216, ieee_parts_to_double(307, 0));
    check!(2.9008355198595578E-216, small(215, "2900835519859558"));
    assert_eq!(5.801671039719115E-216, ieee_parts_to_double(306, max_mantissa));
    check!(5.801671039719115E-216, small(215, "5801671039719115"));

    assert_eq!(3.196104012172126E-27, ieee_parts_to_double(934, 0x000FA7161A4D6E0C));
    check!(3.196104012172126E-27, small(26, "3196104012172126"));
}

#[test]
fn test_small_integers() {
    check!(9007199254740991.0, "9007199254740991"); // 2^53-1
    check!(9007199254740992.0, "9007199254740992"); // 2^53

    check!(12.0, "12");
    check!(123.0, "123");
    check!(1234.0, "1234");
    check!(12345678.0, "12345678");
    check!(1234567895.0, "1234567895");
    check!(1234567890123456.0, "1234567890123456");
    check!(12345678901234560.0, "12345678901234560");

    // 10^i
    for (i, expected) in ["1", "10", "100", "1000", "10000", "100000"].iter().enumerate() {
        assert_eq!(shortest(10f64.powi(i as i32)), *expected);
    }
    check!(1E15, "1000000000000000");

    // 10^15 + 10^i
    check!(1.000000000000001E15, "1000000000000001");
    check!(1.00000000001E15, "1000000000010000");
    check!(1.1E15, "1100000000000000");

    // Largest power of 2 <= 10^(i+1)
    check!(8.0, "8");
    check!(6.4E1, "64");
    check!(5.12E2, "512");
    check!(8.589934592E9, "8589934592");
    check!(5.62949953421312E14, "562949953421312");
}

#[test]
fn test_buffer_too_small() {
    let n = if cfg!(miri) { 10 } else { 10000 };
    let mut buf = [0u8; 400];
    for _ in 0..n {
        let f = random_finite();
        let needed = ryu_fixed::shortest(&mut buf, f).unwrap();
        for len in [0, needed / 2, needed - 1] {
            assert_eq!(
                ryu_fixed::shortest(&mut buf[..len], f),
                Err(ryu_fixed::Error::BufferTooSmall)
            );
        }
        assert_eq!(ryu_fixed::shortest(&mut buf[..needed], f), Ok(needed));
    }
}
