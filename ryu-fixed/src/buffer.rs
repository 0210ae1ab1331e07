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

use crate::error::Result;
use crate::to_chars::{self, MAX_OUTPUT_STRING_LENGTH};
use crate::{Buffer, Float};
use core::str;

impl Buffer {
    /// This is a cheap operation; you don't need to worry about reusing buffers
    /// for efficiency.
    #[inline]
    pub fn new() -> Self {
        Buffer {
            bytes: [0; MAX_OUTPUT_STRING_LENGTH],
        }
    }

    /// Print a floating point number into this buffer in shortest round-trip
    /// form and return a reference to its string representation within the
    /// buffer.
    ///
    /// # Special cases
    ///
    /// This function formats NaN as the string "NaN", positive infinity as
    /// "inf", and negative infinity as "-inf" to match std::fmt.
    ///
    /// If your input is known to be finite, you may get better performance by
    /// calling the `format_finite` method instead of `format` to avoid the
    /// checks for special cases.
    pub fn format<F: Float>(&mut self, f: F) -> &str {
        if f.is_nonfinite() {
            f.format_nonfinite()
        } else {
            self.format_finite(f)
        }
    }

    /// Print a floating point number into this buffer in shortest round-trip
    /// form and return a reference to its string representation within the
    /// buffer. Negative values, including `-0.0`, get a leading `-`.
    ///
    /// # Special cases
    ///
    /// This function **does not** check for NaN or infinity. If the input
    /// number is not a finite float, the printed representation will be some
    /// correctly formatted but unspecified numerical value.
    ///
    /// Please check [`is_finite`] yourself before calling this function, or
    /// check [`is_nan`] and [`is_infinite`] and handle those cases yourself.
    ///
    /// [`is_finite`]: f64::is_finite
    /// [`is_nan`]: f64::is_nan
    /// [`is_infinite`]: f64::is_infinite
    #[inline]
    pub fn format_finite<F: Float>(&mut self, f: F) -> &str {
        let sign = f.sign_bit() as usize;
        self.bytes[0] = b'-';
        let written = f.write_shortest(&mut self.bytes[sign..]);
        debug_assert!(written.is_ok());
        let len = sign + written.unwrap_or_default();
        // SAFETY: the engines only write ASCII digits, '.' and '-'.
        unsafe { str::from_utf8_unchecked(&self.bytes[..len]) }
    }
}

impl Copy for Buffer {}

impl Clone for Buffer {
    #[inline]
    #[allow(clippy::non_canonical_clone_impl)] // false positive https://github.com/rust-lang/rust-clippy/issues/11072
    fn clone(&self) -> Self {
        Buffer::new()
    }
}

impl Default for Buffer {
    #[inline]
    fn default() -> Self {
        Buffer::new()
    }
}

impl Float for f32 {}
impl Float for f64 {}

const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

pub trait Sealed: Copy {
    fn is_nonfinite(self) -> bool;
    fn format_nonfinite(self) -> &'static str;
    fn sign_bit(self) -> bool;
    fn write_shortest(self, buf: &mut [u8]) -> Result<usize>;
    fn widen(self) -> f64;
}

impl Sealed for f32 {
    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u32 = 0x7f800000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static str {
        const MANTISSA_MASK: u32 = 0x007fffff;
        const SIGN_MASK: u32 = 0x80000000;
        let bits = self.to_bits();
        if bits & MANTISSA_MASK != 0 {
            NAN
        } else if bits & SIGN_MASK != 0 {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }

    #[inline]
    fn sign_bit(self) -> bool {
        self.to_bits() >> 31 != 0
    }

    #[inline]
    fn write_shortest(self, buf: &mut [u8]) -> Result<usize> {
        to_chars::f32_to_chars(buf, self)
    }

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl Sealed for f64 {
    #[inline]
    fn is_nonfinite(self) -> bool {
        const EXP_MASK: u64 = 0x7ff0000000000000;
        let bits = self.to_bits();
        bits & EXP_MASK == EXP_MASK
    }

    #[cold]
    fn format_nonfinite(self) -> &'static str {
        const MANTISSA_MASK: u64 = 0x000fffffffffffff;
        const SIGN_MASK: u64 = 0x8000000000000000;
        let bits = self.to_bits();
        if bits & MANTISSA_MASK != 0 {
            NAN
        } else if bits & SIGN_MASK != 0 {
            NEG_INFINITY
        } else {
            INFINITY
        }
    }

    #[inline]
    fn sign_bit(self) -> bool {
        self.to_bits() >> 63 != 0
    }

    #[inline]
    fn write_shortest(self, buf: &mut [u8]) -> Result<usize> {
        to_chars::f64_to_chars(buf, self)
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}
