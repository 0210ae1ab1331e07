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

//! Allocation-free conversion of `f32` and `f64` values to decimal text.
//!
//! Two layouts are provided, both without exponents:
//!
//! - [`shortest`] writes the fewest significant digits that parse back to
//!   the same value, using the Ryū algorithm. Digits that a padded layout
//!   would misrepresent, such as `1e23`, are printed as the exact integer.
//! - [`fixed`] behaves like printf's `%.<n>f`: exactly `n` digits after
//!   the point, rounded half to even against the exact binary value, using
//!   the Ryū printf algorithm.
//!
//! Both write into a caller-supplied byte slice and report the number of
//! bytes written. The only failure is a destination that is too small.
//! Only the magnitude is printed; [`Buffer`] shows how to add a sign and
//! handle NaN and infinities.
//!
//! # Example
//!
//! ```
//! let mut buf = [0u8; 32];
//!
//! let n = ryu_fixed::shortest(&mut buf, 17.29f64).unwrap();
//! assert_eq!(&buf[..n], b"17.29");
//!
//! let n = ryu_fixed::fixed(&mut buf, 2.5f64, 0).unwrap();
//! assert_eq!(&buf[..n], b"2");
//!
//! assert!(ryu_fixed::shortest(&mut buf[..2], 1234.0f64).is_err());
//! ```

#![no_std]
#![allow(
    clippy::bool_to_int_with_if,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::expl_impl_clone_on_copy,
    clippy::if_not_else,
    clippy::manual_range_contains,
    clippy::must_use_candidate,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::unreadable_literal
)]

#[cfg(test)]
extern crate std;

mod buffer;
mod config;
mod cursor;
mod d2fixed;
mod d2fixed_table;
mod d2s;
mod d2s_table;
mod digits;
mod div;
mod error;
mod f2s;
mod f2s_table;
mod floor_log;
mod ieee;
mod large_int;
mod to_chars;
mod wuint;

use crate::buffer::Sealed;

pub use crate::config::{Precision, DEFAULT_PRECISION, MAX_PRECISION};
pub use crate::d2s::Decimal64;
pub use crate::error::{Error, Result};
pub use crate::f2s::Decimal32;

/// Buffer correctly sized to hold the shortest text representation of any
/// floating point value, sign included.
///
/// ## Example
///
/// ```
/// let mut buffer = ryu_fixed::Buffer::new();
/// assert_eq!(buffer.format(-0.3f64), "-0.3");
/// assert_eq!(buffer.format(1e23f64), "99999999999999991611392");
/// assert_eq!(buffer.format(f32::NAN), "NaN");
/// ```
pub struct Buffer {
    bytes: [u8; to_chars::MAX_OUTPUT_STRING_LENGTH],
}

/// A floating point number that can be converted by this crate.
///
/// This trait is sealed and cannot be implemented for types outside of the
/// `ryu_fixed` crate.
pub trait Float: Sealed {}

/// Writes the shortest decimal text that parses back to `value`, without an
/// exponent, and returns the number of bytes written.
///
/// The sign is ignored, so `-0.0` prints as `0`. `value` must be finite;
/// for NaN or infinity the digits are unspecified.
///
/// ```
/// let mut buf = [0u8; 64];
/// let n = ryu_fixed::shortest(&mut buf, 0.0001729f32).unwrap();
/// assert_eq!(&buf[..n], b"0.0001729");
/// let n = ryu_fixed::shortest(&mut buf, 1e11f32).unwrap();
/// assert_eq!(&buf[..n], b"99999997952");
/// ```
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` cannot hold the text. The contents of
/// `buf` are then unspecified.
#[inline]
pub fn shortest<F: Float>(buf: &mut [u8], value: F) -> Result<usize> {
    value.write_shortest(buf)
}

/// Writes `value` with exactly `precision` digits after the decimal point,
/// like printf's `%.<precision>f`, and returns the number of bytes written.
///
/// A negative `precision` selects [`DEFAULT_PRECISION`]. The point is
/// omitted when `precision` is zero. `f32` values are widened to `f64`
/// first, which is exact. The sign is ignored and `value` must be finite.
///
/// ```
/// let mut buf = [0u8; 32];
/// let n = ryu_fixed::fixed(&mut buf, 3.14159f64, 2).unwrap();
/// assert_eq!(&buf[..n], b"3.14");
/// let n = ryu_fixed::fixed(&mut buf, 99.99f64, 1).unwrap();
/// assert_eq!(&buf[..n], b"100.0");
/// let n = ryu_fixed::fixed(&mut buf, 1.0f64, -1).unwrap();
/// assert_eq!(&buf[..n], b"1.000000");
/// ```
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` cannot hold the text, or if
/// `precision` is at least [`MAX_PRECISION`].
#[inline]
pub fn fixed<F: Float>(buf: &mut [u8], value: F, precision: i32) -> Result<usize> {
    fixed_with(buf, value, Precision::from_printf(precision)?)
}

/// [`fixed`] with an already validated [`Precision`].
#[inline]
pub fn fixed_with<F: Float>(buf: &mut [u8], value: F, precision: Precision) -> Result<usize> {
    to_chars::fixed_to_chars(buf, value.widen(), precision.get())
}

/// Shortest round-trip digits of `value` as `mantissa * 10^exponent`, before
/// any layout. Zero yields a zero mantissa and exponent. The sign is ignored.
///
/// ```
/// let d = ryu_fixed::to_decimal32(1.5f32);
/// assert_eq!((d.mantissa, d.exponent), (15, -1));
/// ```
#[inline]
pub fn to_decimal32(value: f32) -> Decimal32 {
    to_chars::to_decimal32(value)
}

/// Shortest round-trip digits of `value` as `mantissa * 10^exponent`, before
/// any layout. Integers below 2^53 take an exact path that moves trailing
/// zeros into the exponent.
///
/// ```
/// let d = ryu_fixed::to_decimal64(1200.0);
/// assert_eq!((d.mantissa, d.exponent), (12, 2));
/// ```
#[inline]
pub fn to_decimal64(value: f64) -> Decimal64 {
    to_chars::to_decimal64(value)
}
