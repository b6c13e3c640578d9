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

//! # Error Taxonomy
//!
//! Argument-validation failures of the range algebra. Every error is
//! raised synchronously at the offending call; operations are pure, so
//! there is nothing to roll back. The panicking entry points use the same
//! message text via each variant's `Display` output.

use thiserror::Error;

/// The error type for fallible range and boundary operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A range was constructed with a From boundary greater than its To
    /// boundary.
    #[error("range 'from' boundary must not be greater than its 'to' boundary")]
    ReversedBoundaries,

    /// Exactly one of the two boundaries was the Empty sentinel. Empty
    /// ranges carry Empty on both sides, always together.
    #[error("a range is either empty on both boundaries or on neither")]
    HalfEmptyRange,

    /// The domain's positive infinity was used as a lower boundary value.
    #[error("positive infinity cannot be used as a 'from' boundary value")]
    InvalidFromValue,

    /// The domain's negative infinity was used as an upper boundary value.
    #[error("negative infinity cannot be used as a 'to' boundary value")]
    InvalidToValue,

    /// `adjust` was called on an empty range; no value belongs to ∅.
    #[error("cannot adjust a value into an empty range")]
    EmptyRangeAdjust,

    /// `adjust` was called on a range with an exclusive boundary; there is
    /// no nearest representable value to clamp to.
    #[error("adjust requires inclusive or infinite boundaries")]
    ExclusiveBoundaryAdjust,

    /// `extend_from` was asked to move past the current To boundary (or
    /// `extend_to` before the current From).
    #[error("a boundary cannot be extended past the opposite boundary")]
    ExtendIntoOpposite,
}
