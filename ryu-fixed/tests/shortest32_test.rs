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
    clippy::excessive_precision,
    clippy::float_cmp,
    clippy::unreadable_literal,
    clippy::unseparated_literal_suffix
)]

#[macro_use]
mod macros;

fn shortest(f: f32) -> String {
    let mut buf = [0u8; 64];
    let n = ryu_fixed::shortest(&mut buf, f).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

fn random_finite() -> f32 {
    loop {
        let f = f32::from_bits(rand::random::<u32>());
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
    check!(0.3);
    check!(1729.0, "1729");
    check!(200.0, "200");
    check!(0.0001729);
    check!(1.2345678);
    check!(2.0019531);
    check!(0.0017917147);
}

#[test]
fn test_random() {
    let n = if cfg!(miri) { 100 } else { 1000000 };
    let mut buf = [0u8; 64];
    for _ in 0..n {
        let f = random_finite();
        let len = ryu_fixed::shortest(&mut buf, f).unwrap();
        let text = std::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(f.abs(), text.parse::<f32>().unwrap(), "{text}");
    }
}

#[test]
fn test_matches_std_below_2_pow_24() {
    let n = if cfg!(miri) { 100 } else { 100000 };
    for _ in 0..n {
        // Biased exponents up to 150 keep the value below 2^24.
        let exponent = rand::random::<u32>() % 151;
        let f = f32::from_bits((exponent << 23) | (rand::random::<u32>() >> 9));
        let ours = shortest(f);
        let std = f.to_string();
        assert_eq!(ours.len(), std.len(), "{ours} vs {std}");
        assert_eq!(f, ours.parse::<f32>().unwrap());
    }
}

#[test]
fn test_large_integers_are_exact() {
    // Every binary32 integer of 25 bits or more, sampled across the range,
    // prints as its exact value.
    for exponent in 151..255u32 {
        for mantissa in [0, 1, 0x2aaaaa, 0x7fffff] {
            let f = f32::from_bits((exponent << 23) | mantissa);
            assert_eq!(shortest(f), (f as u128).to_string(), "{f:e}");
        }
    }
}

#[test]
fn test_switch_to_subnormal() {
    check!(1.1754944e-38, "0.000000000000000000000000000000000000011754944");
}

#[test]
fn test_min_and_max() {
    assert_eq!(f32::from_bits(0x7f7fffff), 3.4028235e38);
    check!(3.4028235e38, "340282346638528859811704183484516925440");
    assert_eq!(f32::from_bits(1), 1e-45);
    check!(1e-45, "0.000000000000000000000000000000000000000000001");
}

#[test]
fn test_not_exact_when_padded() {
    check!(1e11, "99999997952");
    check!(1e10, "10000000000");
    check!(1.00000006e9, "1000000064");
    check!(9.223372e18, "9223372036854775808");
    check!(1.18697724e20, "118697724999999946752");
    check!(4.7223665e21, "4722366482869645213696");
}

#[test]
fn test_powers_of_two() {
    check!(16777216.0, "16777216");
    check!(33554432.0, "33554432");
    check!(67108864.0, "67108864");
    check!(8.589973e9, "8589973504");
    check!(2.816025e14, "281602483552256");
}

#[test]
fn test_regression() {
    check!(1.00014165e-36, "0.00000000000000000000000000000000000100014165");
    check!(5.3675552e-25, "0.0000000000000000000000005367555");
}

#[test]
fn test_buffer_too_small() {
    let n = if cfg!(miri) { 10 } else { 10000 };
    let mut buf = [0u8; 64];
    for _ in 0..n {
        let f = random_finite();
        let needed = ryu_fixed::shortest(&mut buf, f).unwrap();
        assert_eq!(
            ryu_fixed::shortest(&mut buf[..needed - 1], f),
            Err(ryu_fixed::Error::BufferTooSmall)
        );
        assert_eq!(ryu_fixed::shortest(&mut buf[..needed], f), Ok(needed));
    }
}
