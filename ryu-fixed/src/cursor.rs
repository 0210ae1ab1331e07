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

use crate::error::{Error, Result};

/// Write position over a caller-supplied byte slice.
///
/// Space is checked before any byte is committed, so a failed write leaves
/// the bytes past the current position untouched.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub(crate) fn ensure(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            Err(Error::BufferTooSmall)
        } else {
            Ok(())
        }
    }

    /// Claims the next `n` bytes and hands them out for writing.
    #[inline]
    pub(crate) fn take(&mut self, n: usize) -> Result<&mut [u8]> {
        self.ensure(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..self.pos])
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<()> {
        self.take(1)?[0] = byte;
        Ok(())
    }

    #[inline]
    pub(crate) fn fill(&mut self, n: usize, byte: u8) -> Result<()> {
        self.take(n)?.fill(byte);
        Ok(())
    }

    /// Everything written so far, for in-place fix-ups such as carries.
    #[inline]
    pub(crate) fn written_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_checked() {
        let mut buf = [b'x'; 4];
        let mut cursor = Cursor::new(&mut buf);
        cursor.push(b'1').unwrap();
        cursor.fill(2, b'0').unwrap();
        assert_eq!(cursor.take(2), Err(Error::BufferTooSmall));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.written_mut(), b"100");
        assert_eq!(&buf, b"100x");
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = [0u8; 0];
        let mut cursor = Cursor::new(&mut buf);
        assert!(cursor.ensure(0).is_ok());
        assert_eq!(cursor.push(b'0'), Err(Error::BufferTooSmall));
    }
}
