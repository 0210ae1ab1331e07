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

#![allow(clippy::float_cmp)]

fn to_chars<F: ryu_fixed::Float>(f: F) -> String {
    ryu_fixed::Buffer::new().format(f).to_owned()
}

#[test]
fn test_sign() {
    assert_eq!(to_chars(0.0f64), "0");
    assert_eq!(to_chars(-0.0f64), "-0");
    assert_eq!(to_chars(-1.5f64), "-1.5");
    assert_eq!(to_chars(-0.3f32), "-0.3");
    assert_eq!(to_chars(-1e23f64), "-99999999999999991611392");
}

#[test]
fn test_non_finite() {
    assert_eq!(to_chars(f64::NAN.copysign(1.0)), "NaN");
    assert_eq!(to_chars(f64::NAN.copysign(-1.0)), "NaN");
    assert_eq!(to_chars(f64::INFINITY), "inf");
    assert_eq!(to_chars(f64::NEG_INFINITY), "-inf");
    assert_eq!(to_chars(f32::NAN), "NaN");
    assert_eq!(to_chars(f32::INFINITY), "inf");
    assert_eq!(to_chars(f32::NEG_INFINITY), "-inf");
}

#[test]
#[cfg_attr(miri, ignore = "too slow for miri")]
fn test_format_finite_tolerates_non_finite() {
    let mut buffer = ryu_fixed::Buffer::new();
    for i in 0u64..1 << 12 {
        let f = f64::from_bits((((1 << 11) - 1) << 52) + (i << 40));
        assert!(!f.is_finite(), "f={}", f);
        let printed = buffer.format_finite(f);
        assert!(printed.bytes().all(|b| b.is_ascii_digit()));
    }
    for i in 0u32..1 << 12 {
        let f = f32::from_bits((((1 << 8) - 1) << 23) + (i << 11));
        assert!(!f.is_finite(), "f={}", f);
        let printed = buffer.format_finite(-f);
        assert!(printed.starts_with('-'));
    }
}

#[test]
fn test_longest_output_fits() {
    let mut buffer = ryu_fixed::Buffer::new();
    assert_eq!(buffer.format(-f64::MAX).len(), 310);
    assert_eq!(buffer.format(-2.2250738585072014E-308).len(), 327);
    assert_eq!(buffer.format(-f64::from_bits(1)).len(), 327);
    assert_eq!(buffer.format(-f32::MAX).len(), 40);
}

#[test]
fn test_random_round_trip() {
    let n = if cfg!(miri) { 100 } else { 100000 };
    let mut buffer = ryu_fixed::Buffer::new();
    for _ in 0..n {
        let f = f64::from_bits(rand::random::<u64>());
        let printed = buffer.format(f);
        if f.is_nan() {
            assert_eq!(printed, "NaN");
        } else {
            assert_eq!(f, printed.parse::<f64>().unwrap(), "{printed}");
        }
    }
}
