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

//! Splits IEEE-754 bit patterns into their stored fields.
//!
//! The sign bit is discarded here. Every engine downstream formats the
//! magnitude only, which makes `-0.0` indistinguishable from `0.0`.

pub(crate) const FLOAT_MANTISSA_BITS: u32 = 23;
pub(crate) const FLOAT_EXPONENT_BITS: u32 = 8;
pub(crate) const FLOAT_BIAS: i32 = 127;

pub(crate) const DOUBLE_MANTISSA_BITS: u32 = 52;
pub(crate) const DOUBLE_EXPONENT_BITS: u32 = 11;
pub(crate) const DOUBLE_BIAS: i32 = 1023;

/// Stored fields of a binary32 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ieee32 {
    pub(crate) mantissa: u32,
    pub(crate) exponent: u32,
}

impl Ieee32 {
    #[inline]
    pub(crate) const fn from_bits(bits: u32) -> Self {
        Ieee32 {
            mantissa: bits & ((1 << FLOAT_MANTISSA_BITS) - 1),
            exponent: (bits >> FLOAT_MANTISSA_BITS) & ((1 << FLOAT_EXPONENT_BITS) - 1),
        }
    }

    #[inline]
    pub(crate) const fn is_zero(self) -> bool {
        self.mantissa == 0 && self.exponent == 0
    }

    /// Pulls NaN and infinity patterns into the finite range so the engines
    /// never index past their tables. The digits they produce are
    /// unspecified.
    #[inline]
    pub(crate) const fn saturating_finite(mut self) -> Self {
        const MAX_EXPONENT: u32 = (1 << FLOAT_EXPONENT_BITS) - 1;
        if self.exponent == MAX_EXPONENT {
            self.exponent = MAX_EXPONENT - 1;
        }
        self
    }

    /// Significand with the implicit bit set, as seen by the exact integer
    /// printer. Only meaningful for normal values.
    #[inline]
    pub(crate) const fn significand(self) -> u32 {
        self.mantissa | (1 << FLOAT_MANTISSA_BITS)
    }

    /// Binary exponent of the unit in the last place of a normal value.
    /// A positive result means the value is an integer of more than 24 bits.
    #[inline]
    pub(crate) const fn exponent2(self) -> i32 {
        self.exponent as i32 - FLOAT_BIAS - FLOAT_MANTISSA_BITS as i32
    }
}

/// Stored fields of a binary64 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ieee64 {
    pub(crate) mantissa: u64,
    pub(crate) exponent: u32,
}

impl Ieee64 {
    #[inline]
    pub(crate) const fn from_bits(bits: u64) -> Self {
        Ieee64 {
            mantissa: bits & ((1 << DOUBLE_MANTISSA_BITS) - 1),
            exponent: ((bits >> DOUBLE_MANTISSA_BITS) & ((1 << DOUBLE_EXPONENT_BITS) - 1)) as u32,
        }
    }

    #[inline]
    pub(crate) const fn is_zero(self) -> bool {
        self.mantissa == 0 && self.exponent == 0
    }

    #[inline]
    pub(crate) const fn saturating_finite(mut self) -> Self {
        const MAX_EXPONENT: u32 = (1 << DOUBLE_EXPONENT_BITS) - 1;
        if self.exponent == MAX_EXPONENT {
            self.exponent = MAX_EXPONENT - 1;
        }
        self
    }

    #[inline]
    pub(crate) const fn exponent2(self) -> i32 {
        self.exponent as i32 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32
    }

    /// Returns `(m2, e2)` such that the value equals `m2 * 2^e2`, handling
    /// subnormals.
    #[inline]
    pub(crate) const fn decode(self) -> (u64, i32) {
        if self.exponent == 0 {
            (self.mantissa, 1 - DOUBLE_BIAS - DOUBLE_MANTISSA_BITS as i32)
        } else {
            (
                self.mantissa | (1 << DOUBLE_MANTISSA_BITS),
                self.exponent2(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_discarded() {
        assert_eq!(Ieee32::from_bits((-1.5f32).to_bits()), Ieee32::from_bits(1.5f32.to_bits()));
        assert_eq!(Ieee64::from_bits((-1.5f64).to_bits()), Ieee64::from_bits(1.5f64.to_bits()));
        assert!(Ieee64::from_bits((-0.0f64).to_bits()).is_zero());
        assert!(Ieee32::from_bits((-0.0f32).to_bits()).is_zero());
    }

    #[test]
    fn test_fields() {
        let one = Ieee64::from_bits(1.0f64.to_bits());
        assert_eq!(one.mantissa, 0);
        assert_eq!(one.exponent, 1023);
        assert_eq!(one.decode(), (1 << 52, -52));

        let tiny = Ieee64::from_bits(1);
        assert_eq!(tiny.decode(), (1, -1074));

        let inf = Ieee64::from_bits(f64::INFINITY.to_bits()).saturating_finite();
        assert_eq!(inf, Ieee64::from_bits(f64::MAX.to_bits() & !((1 << 52) - 1)));
        let nan = Ieee32::from_bits(f32::NAN.to_bits()).saturating_finite();
        assert_eq!(nan.exponent, 254);

        let big = Ieee32::from_bits(16777216.0f32.to_bits());
        assert_eq!(big.exponent2(), 1);
        assert_eq!(big.significand(), 1 << 23);
    }
}
