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

//! Validated fixed-precision settings.

use log::debug;

use crate::error::{Error, Result};

/// Digits after the decimal point when a negative precision is requested.
pub const DEFAULT_PRECISION: u32 = 6;

/// Exclusive upper bound on the number of fractional digits.
pub const MAX_PRECISION: u32 = 1_000_000_000;

/// Number of digits after the decimal point for fixed notation.
///
/// ```
/// use ryu_fixed::Precision;
///
/// assert_eq!(Precision::from_printf(-1).unwrap().get(), 6);
/// assert_eq!(Precision::new(2).unwrap().get(), 2);
/// assert!(Precision::new(1_000_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    pub fn new(digits: u32) -> Result<Self> {
        if digits >= MAX_PRECISION {
            debug!("rejecting precision {digits}, limit is {}", MAX_PRECISION - 1);
            return Err(Error::BufferTooSmall);
        }
        Ok(Precision(digits))
    }

    /// Interprets a signed printf-style precision, where any negative value
    /// selects [`DEFAULT_PRECISION`].
    pub fn from_printf(precision: i32) -> Result<Self> {
        if precision < 0 {
            Ok(Precision::default())
        } else {
            Precision::new(precision as u32)
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}

impl TryFrom<i32> for Precision {
    type Error = Error;

    fn try_from(precision: i32) -> Result<Self> {
        Precision::from_printf(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_selects_default() {
        assert_eq!(Precision::from_printf(-1), Ok(Precision(6)));
        assert_eq!(Precision::from_printf(i32::MIN), Ok(Precision(6)));
    }

    #[test]
    fn test_limit() {
        assert_eq!(Precision::from_printf(999_999_999), Ok(Precision(999_999_999)));
        assert_eq!(Precision::from_printf(1_000_000_000), Err(Error::BufferTooSmall));
        assert_eq!(Precision::try_from(i32::MAX), Err(Error::BufferTooSmall));
        assert_eq!(Precision::new(u32::MAX), Err(Error::BufferTooSmall));
    }
}
