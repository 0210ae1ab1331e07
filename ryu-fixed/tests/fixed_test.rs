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

#![allow(clippy::excessive_precision, clippy::float_cmp, clippy::unreadable_literal)]

#[macro_use]
mod macros;

use ryu_fixed::{Error, Precision, MAX_PRECISION};

fn fixed(f: f64, precision: i32) -> String {
    let mut buf = vec![0u8; 2048];
    let n = ryu_fixed::fixed(&mut buf, f, precision).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

fn fixed32(f: f32, precision: i32) -> String {
    let mut buf = [0u8; 128];
    let n = ryu_fixed::fixed(&mut buf, f, precision).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
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
    check_fixed!(0.0, 3, "0.000");
    check_fixed!(0.0, 0, "0");
    check_fixed!(-0.0, 2, "0.00");
    check_fixed!(1.0, 0, "1");
    check_fixed!(-1.0, 1, "1.0");
    check_fixed!(3.14159, 2, "3.14");
    check_fixed!(123.456, 0, "123");
    check_fixed!(1e21, 2, "1000000000000000000000.00");
    check_fixed!(1e-10, 12, "0.000000000100");
    check_fixed!(1e-7, 6, "0.000000");
    check_fixed!(0.1, 20, "0.10000000000000000555");
}

#[test]
fn test_default_precision() {
    check_fixed!(1.0, -1, "1.000000");
    check_fixed!(0.1, i32::MIN, "0.100000");
    assert_eq!(fixed(2.0, -7), fixed(2.0, 6));
}

#[test]
fn test_rounding() {
    // Exact ties round to even.
    check_fixed!(0.5, 0, "0");
    check_fixed!(1.5, 0, "2");
    check_fixed!(2.5, 0, "2");
    check_fixed!(0.25, 1, "0.2");
    check_fixed!(0.125, 2, "0.12");
    check_fixed!(0.375, 2, "0.38");
    check_fixed!(0.5, 1, "0.5");

    // Inexact neighbours of a tie round by their true value.
    check_fixed!(0.05, 1, "0.1");
    check_fixed!(0.15, 1, "0.1");
    check_fixed!(0.35, 1, "0.3");
    check_fixed!(2.675, 2, "2.67");
}

#[test]
fn test_carry() {
    check_fixed!(0.9999999999999999, 0, "1");
    check_fixed!(9.5, 0, "10");
    check_fixed!(99.99, 1, "100.0");
    check_fixed!(999.9996, 3, "1000.000");
    check_fixed!(0.96, 1, "1.0");
    check_fixed!(0.999, 2, "1.00");
}

#[test]
fn test_extremes() {
    check_fixed!(5e-324, 0, "0");
    assert_eq!(fixed(1.5e-323, 323), format!("0.{}1", "0".repeat(322)));
    assert_eq!(fixed(5e-324, 1074), format!("{:.1074}", 5e-324));
    let max = fixed(f64::MAX, 3);
    assert_eq!(max.len(), 313);
    assert!(max.ends_with("858368.000"));
}

#[test]
fn test_f32_is_widened() {
    assert_eq!(fixed32(0.1, 10), "0.1000000015");
    assert_eq!(fixed32(1e11, 0), "99999997952");
    assert_eq!(fixed32(f32::MAX, 1), "340282346638528859811704183484516925440.0");
    assert_eq!(fixed32(2.5, 0), "2");
}

#[test]
fn test_matches_std() {
    let n = if cfg!(miri) { 100 } else { 100000 };
    let mut buf = vec![0u8; 2048];
    for i in 0..n {
        let f = random_finite().abs();
        let precision = (i % 21) as i32;
        let len = ryu_fixed::fixed(&mut buf, f, precision).unwrap();
        let expected = format!("{f:.prec$}", prec = precision as usize);
        assert_eq!(std::str::from_utf8(&buf[..len]).unwrap(), expected);
    }
}

#[test]
fn test_matches_std_moderate_values() {
    let n = if cfg!(miri) { 100 } else { 100000 };
    for i in 0..n {
        let f = rand::random::<f64>() * 10f64.powi((i % 13) as i32 - 6);
        let precision = (i % 21) as i32;
        assert_eq!(fixed(f, precision), format!("{f:.prec$}", prec = precision as usize));
    }
}

#[test]
fn test_deep_precision() {
    let n = if cfg!(miri) { 5 } else { 500 };
    for i in 0..n {
        // Values below 2, printed far past their first significant digit.
        let f = f64::from_bits(rand::random::<u64>() >> (2 + i % 10));
        let precision = [300, 330, 767, 1074, 1100][i % 5];
        assert_eq!(fixed(f, precision), format!("{f:.prec$}", prec = precision as usize));
    }
}

#[test]
fn test_precision_limit() {
    let mut buf = [0u8; 16];
    let limit = MAX_PRECISION as i32;
    assert_eq!(ryu_fixed::fixed(&mut buf, 1.0, limit), Err(Error::BufferTooSmall));
    assert_eq!(ryu_fixed::fixed(&mut buf, 1.0, i32::MAX), Err(Error::BufferTooSmall));
    assert_eq!(Precision::new(MAX_PRECISION), Err(Error::BufferTooSmall));

    // Just below the limit the request is valid but cannot fit.
    assert_eq!(ryu_fixed::fixed(&mut buf, 1.0, limit - 1), Err(Error::BufferTooSmall));
}

#[test]
fn test_fixed_with() {
    let mut buf = [0u8; 16];
    let precision = Precision::new(4).unwrap();
    let n = ryu_fixed::fixed_with(&mut buf, 2.0f64 / 3.0, precision).unwrap();
    assert_eq!(&buf[..n], b"0.6667");
    let n = ryu_fixed::fixed_with(&mut buf, 0.5f32, Precision::default()).unwrap();
    assert_eq!(&buf[..n], b"0.500000");
}

#[test]
fn test_buffer_too_small() {
    let mut buf = [0u8; 400];
    for (f, precision) in [(1234.5678, 2), (0.9999999999999999, 0), (99.99, 1), (0.0, 5)] {
        let needed = ryu_fixed::fixed(&mut buf, f, precision).unwrap();
        for len in 0..needed {
            assert_eq!(
                ryu_fixed::fixed(&mut buf[..len], f, precision),
                Err(Error::BufferTooSmall),
                "{f} at {precision} into {len} bytes"
            );
        }
        assert_eq!(ryu_fixed::fixed(&mut buf[..needed], f, precision), Ok(needed));
    }
}
