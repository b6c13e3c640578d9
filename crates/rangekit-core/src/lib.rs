// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Rangekit Core
//!
//! Boundary and range primitives for interval algebra over any totally
//! ordered domain. The crate is a pure value-semantics library: every
//! operation is deterministic and side-effect free, every "mutation"
//! returns a new value, and instances can be shared across threads
//! without synchronization.
//!
//! ## Modules
//!
//! - `element`: The [`RangeElement`] trait injecting the total order and
//!   the infinity classification for boundary values, with implementations
//!   for the primitive numeric types, `char`, strings, and
//!   `Option<T>` (where `None` means "unbounded").
//! - `boundary`: Side-specific interval edges, [`RangeBoundaryFrom`] and
//!   [`RangeBoundaryTo`], each a tagged union over
//!   inclusive/exclusive/empty/infinite states with a total position order.
//! - `range`: The [`Range`] type, a pair of boundaries plus an optional
//!   opaque key, with containment, intersection, union, trimming,
//!   extension, clamping, and boundary-conversion operations.
//! - `error`: The [`RangeError`] taxonomy shared by the fallible `try_*`
//!   entry points.
//!
//! ## Sentinel handling
//!
//! Domain-level "unbounded" markers are never stored as ordinary values:
//! `f64::INFINITY` used as an upper boundary, `f64::NEG_INFINITY` used as
//! a lower boundary, and `None` on either side all normalize into the
//! `Infinite` sentinel at construction time, so they compare consistently
//! with every other boundary instead of as very large finite numbers.

pub mod boundary;
pub mod element;
pub mod error;
pub mod range;

pub use boundary::{RangeBoundaryFrom, RangeBoundaryTo};
pub use element::{RangeElement, ValueKind};
pub use error::RangeError;
pub use range::Range;
