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

//! # Interval Boundaries
//!
//! Side-specific interval edges. A boundary is one of four states:
//! inclusive or exclusive around a concrete value, the `Infinite`
//! unbounded sentinel, or the `Empty` sentinel marking the edge of the
//! empty range ∅.
//!
//! ## Submodules
//!
//! - `from`: [`RangeBoundaryFrom`], the lower edge.
//! - `to`: [`RangeBoundaryTo`], the upper edge.
//!
//! ## Position order
//!
//! All comparisons in the crate reduce to a single total *position* order
//! over both sides:
//!
//! ```text
//! Empty  <  Infinite(From)  <  finite values  <  Infinite(To)
//! ```
//!
//! At equal finite values, side polarity decides: an exclusive To sits
//! just before the value, inclusive boundaries of either side sit exactly
//! on it, and an exclusive From sits just after it. Cross-side
//! `PartialEq`/`PartialOrd` implementations expose this order directly,
//! so `from <= to` reads the way the math does.

pub mod from;
pub mod to;

pub use from::RangeBoundaryFrom;
pub use to::RangeBoundaryTo;

use crate::element::RangeElement;
use std::cmp::Ordering;

/// Shared storage for both boundary sides.
///
/// Kept private to the module tree: the public types guarantee that a
/// stored `Inclusive`/`Exclusive` value classifies as finite, which only
/// holds if construction always goes through the normalizing constructors.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BoundaryRepr<T> {
    Empty,
    Infinite,
    Exclusive(T),
    Inclusive(T),
}

/// A boundary (or raw probe value) projected onto the position order.
///
/// `shift` breaks ties between boundaries at the same finite value:
/// `-1` for an exclusive To, `0` for inclusive boundaries and raw values,
/// `+1` for an exclusive From.
pub(crate) enum BoundaryPos<'a, T> {
    Empty,
    NegativeInfinite,
    Finite { value: &'a T, shift: i8 },
    PositiveInfinite,
}

impl<'a, T> BoundaryPos<'a, T>
where
    T: RangeElement,
{
    /// Projects a raw probe value onto the position order, honoring the
    /// domain's infinity markers. `Unbounded` values sort first, matching
    /// the convention that "no value" precedes every concrete value.
    pub(crate) fn of_value(value: &'a T) -> Self {
        use crate::element::ValueKind;
        match value.kind() {
            ValueKind::Finite => BoundaryPos::Finite { value, shift: 0 },
            ValueKind::Unbounded | ValueKind::NegativeInfinity => BoundaryPos::NegativeInfinite,
            ValueKind::PositiveInfinity => BoundaryPos::PositiveInfinite,
        }
    }

    #[inline]
    fn class(&self) -> u8 {
        match self {
            BoundaryPos::Empty => 0,
            BoundaryPos::NegativeInfinite => 1,
            BoundaryPos::Finite { .. } => 2,
            BoundaryPos::PositiveInfinite => 3,
        }
    }

    /// The total position order shared by both boundary sides.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                BoundaryPos::Finite { value: a, shift: sa },
                BoundaryPos::Finite { value: b, shift: sb },
            ) => a.compare(b).then(sa.cmp(sb)),
            _ => self.class().cmp(&other.class()),
        }
    }
}
