// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A growable vector for trivially-copyable elements that stores a certain
//! number of them inline, and falls back to a pluggable memory provider for
//! larger lengths. While the contents fit in the inline buffer no allocation
//! happens at all, which can be a useful optimization for improving cache
//! locality and reducing allocator traffic for workloads that stay small.
//!
//! The element type must be [`Copy`]: [`TrivialVec`] moves, clones and
//! discards elements purely by copying their bytes and never runs
//! per-element code. In exchange every bulk operation is a `memcpy`, and the
//! container can transfer whole buffers between instances — including
//! instances with *different* inline capacities — by handing over the block
//! instead of copying it, whenever the two providers allow it (see
//! [`Provider`] and [`Propagation`]).
//!
//! ```
//! use trivec::{trivec, TrivialVec};
//!
//! let mut v: TrivialVec<u32, 4> = trivec![1, 2, 3];
//! assert!(v.is_inline());
//!
//! v.extend_from_slice(&[4, 5]);
//! assert!(v.spilled());
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```
//!
//! ## `no_std` support
//!
//! By default, `trivec` does not depend on `std`. The optional `std` feature
//! implements the `std::io::Write` trait for vectors of `u8`.
//!
//! ## Optional features
//!
//! ### `std`
//!
//! When this feature is enabled, `TrivialVec<u8, _, _>` implements the
//! [`std::io::Write`] trait. This feature is not compatible with
//! `#![no_std]` programs.
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `TrivialVec` implements the
//! `serde::Serialize` and `serde::Deserialize` traits as a plain sequence.
//!
//! ### `bytes`
//!
//! When this optional dependency is enabled, `TrivialVec<u8, _, _>`
//! implements the `bytes::BufMut` trait.

#![no_std]

#[doc(hidden)]
pub extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(test)]
mod tests;

#[cfg(any(feature = "std", feature = "bytes"))]
mod io;
mod iter;
mod provider;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

pub use iter::{Drain, IntoIter};
pub use provider::{AllocError, Global, GrowthError, Propagation, Provider};
pub use vec::TrivialVec;

/// The always-heap variant: no inline buffer, every element lives in a
/// provider-allocated block.
pub type HeapVec<T, P = Global> = TrivialVec<T, 0, P>;

/// Creates a [`TrivialVec`] containing the arguments, in the spirit of
/// `vec!`. Spills to the heap when the arguments outnumber the inline
/// capacity.
#[macro_export]
macro_rules! trivec {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($elem:expr; $n:expr) => ({
        $crate::TrivialVec::from_elem($elem, $n)
    });
    ($($x:expr),*$(,)?) => ({
        let count = 0usize $(+ $crate::trivec!(@one $x))*;
        #[allow(unused_mut)]
        let mut vec = $crate::TrivialVec::new();
        if count <= vec.capacity() {
            $(vec.push($x);)*
            vec
        } else {
            $crate::TrivialVec::from_vec($crate::alloc::vec![$($x,)*])
        }
    });
}

/// Creates a [`TrivialVec`] whose inline capacity exactly matches the number
/// of arguments, entirely inline and usable in `const` contexts.
#[macro_export]
macro_rules! trivec_inline {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($elem:expr; $n:expr) => ({
        $crate::TrivialVec::<_, $n>::from_buf([$elem; $n])
    });
    ($($x:expr),+ $(,)?) => ({
        const N: usize = 0usize $(+ $crate::trivec_inline!(@one $x))*;
        $crate::TrivialVec::<_, N>::from_buf([$($x,)*])
    });
}
