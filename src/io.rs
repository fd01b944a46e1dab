// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte-buffer integrations for `TrivialVec<u8, N, P>`.

#[cfg(feature = "bytes")]
use bytes::{buf::UninitSlice, BufMut};
#[cfg(feature = "std")]
use std::io;

use crate::provider::Provider;
use crate::vec::TrivialVec;

#[cfg(feature = "std")]
impl<const N: usize, P: Provider> io::Write for TrivialVec<u8, N, P> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "bytes")]
// SAFETY: `chunk_mut` hands out the spare tail of the buffer, and
// `advance_mut` only extends the length over bytes the caller initialized.
unsafe impl<const N: usize, P: Provider> BufMut for TrivialVec<u8, N, P> {
    #[inline]
    fn remaining_mut(&self) -> usize {
        // a vector can never hold more than isize::MAX bytes
        isize::MAX as usize - self.len()
    }

    #[inline]
    unsafe fn advance_mut(&mut self, cnt: usize) {
        let len = self.len();
        let remaining = self.capacity() - len;

        if remaining < cnt {
            panic!("advance out of bounds: the len is {remaining} but advancing by {cnt}");
        }

        // the sum is at most the capacity, so no overflow
        unsafe { self.set_len(len + cnt) };
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut UninitSlice {
        if self.capacity() == self.len() {
            self.reserve(64);
        }

        let cap = self.capacity();
        let len = self.len();

        let ptr = self.as_mut_ptr();
        // SAFETY: `ptr` is valid for `cap` bytes, so `ptr.add(len)` is valid
        // for `cap - len` bytes, and `len <= cap`.
        unsafe { UninitSlice::from_raw_parts_mut(ptr.add(len), cap - len) }
    }

    // specialized to skip `remaining_mut`/`advance_mut` checking
    #[inline]
    fn put<T: bytes::Buf>(&mut self, mut src: T)
    where
        Self: Sized,
    {
        // in case the src isn't contiguous, reserve upfront
        self.reserve(src.remaining());

        while src.has_remaining() {
            let s = src.chunk();
            let l = s.len();
            self.extend_from_slice(s);
            src.advance(l);
        }
    }

    #[inline]
    fn put_slice(&mut self, src: &[u8]) {
        self.extend_from_slice(src);
    }

    #[inline]
    fn put_bytes(&mut self, val: u8, cnt: usize) {
        // if the addition overflows, the `resize` will fail
        let new_len = self.len().saturating_add(cnt);
        self.resize(new_len, val);
    }
}
