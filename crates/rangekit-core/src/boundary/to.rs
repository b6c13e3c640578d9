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

use super::{BoundaryPos, BoundaryRepr, RangeBoundaryFrom};
use crate::element::{RangeElement, ValueKind};
use crate::error::RangeError;
use std::cmp::Ordering;

/// The upper edge of a range: inclusive or exclusive around a concrete
/// value, `Infinite` (unbounded above), or `Empty` (the edge of ∅).
///
/// Construction normalizes the domain's own unbounded markers: `None` and
/// positive infinity become the `Infinite` sentinel, negative infinity is
/// rejected (it cannot bound a range from above).
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::RangeBoundaryTo;
///
/// let upper = RangeBoundaryTo::exclusive(2.0);
/// assert!(upper.is_exclusive());
/// assert_eq!(upper.value(), Some(&2.0));
///
/// let unbounded = RangeBoundaryTo::inclusive(f64::INFINITY);
/// assert!(unbounded.is_infinite());
/// ```
#[derive(Clone, PartialEq)]
pub struct RangeBoundaryTo<T> {
    pub(crate) repr: BoundaryRepr<T>,
}

impl<T> RangeBoundaryTo<T>
where
    T: RangeElement,
{
    /// Creates an inclusive upper boundary.
    ///
    /// # Panics
    ///
    /// Panics if `value` classifies as the domain's negative infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryTo;
    ///
    /// assert!(RangeBoundaryTo::inclusive(2).is_inclusive());
    /// assert!(RangeBoundaryTo::inclusive(None::<i32>).is_infinite());
    /// ```
    #[inline]
    pub fn inclusive(value: T) -> Self {
        match Self::try_inclusive(value) {
            Ok(boundary) => boundary,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an inclusive upper boundary, or fails when `value` is the
    /// domain's negative infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryTo;
    ///
    /// assert!(RangeBoundaryTo::try_inclusive(2.0).is_ok());
    /// assert!(RangeBoundaryTo::try_inclusive(f64::NEG_INFINITY).is_err());
    /// ```
    pub fn try_inclusive(value: T) -> Result<Self, RangeError> {
        match value.kind() {
            ValueKind::Finite => Ok(Self { repr: BoundaryRepr::Inclusive(value) }),
            ValueKind::Unbounded | ValueKind::PositiveInfinity => Ok(Self::infinite()),
            ValueKind::NegativeInfinity => Err(RangeError::InvalidToValue),
        }
    }

    /// Creates an exclusive upper boundary.
    ///
    /// Unbounded markers normalize exactly as for [`inclusive`]; the
    /// exclusivity is discarded along the way.
    ///
    /// [`inclusive`]: Self::inclusive
    ///
    /// # Panics
    ///
    /// Panics if `value` classifies as the domain's negative infinity.
    #[inline]
    pub fn exclusive(value: T) -> Self {
        match Self::try_exclusive(value) {
            Ok(boundary) => boundary,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an exclusive upper boundary, or fails when `value` is the
    /// domain's negative infinity.
    pub fn try_exclusive(value: T) -> Result<Self, RangeError> {
        match value.kind() {
            ValueKind::Finite => Ok(Self { repr: BoundaryRepr::Exclusive(value) }),
            ValueKind::Unbounded | ValueKind::PositiveInfinity => Ok(Self::infinite()),
            ValueKind::NegativeInfinity => Err(RangeError::InvalidToValue),
        }
    }

    /// The unbounded-above sentinel. Sorts after every other boundary.
    #[inline]
    pub const fn infinite() -> Self {
        Self { repr: BoundaryRepr::Infinite }
    }

    /// The upper edge of the empty range ∅. Only equal to itself.
    #[inline]
    pub const fn empty() -> Self {
        Self { repr: BoundaryRepr::Empty }
    }

    /// Returns `true` if this is the Empty sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.repr, BoundaryRepr::Empty)
    }

    /// Returns `true` if this is not the Empty sentinel.
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if this is the Infinite sentinel.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self.repr, BoundaryRepr::Infinite)
    }

    /// Returns `true` if the boundary is inclusive around a concrete value.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self.repr, BoundaryRepr::Inclusive(_))
    }

    /// Returns `true` if the boundary is exclusive around a concrete value.
    #[inline]
    pub const fn is_exclusive(&self) -> bool {
        matches!(self.repr, BoundaryRepr::Exclusive(_))
    }

    /// Returns `true` if the boundary carries a concrete value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self.repr, BoundaryRepr::Inclusive(_) | BoundaryRepr::Exclusive(_))
    }

    /// The concrete boundary value, if any. Sentinels carry none.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match &self.repr {
            BoundaryRepr::Inclusive(value) | BoundaryRepr::Exclusive(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the boundary, returning its concrete value, if any.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self.repr {
            BoundaryRepr::Inclusive(value) | BoundaryRepr::Exclusive(value) => Some(value),
            _ => None,
        }
    }

    /// Compares two upper boundaries under the total position order.
    ///
    /// For a To boundary, exclusivity sorts *before* the value: the edge
    /// `..1)` ends just short of `1`, so it is less than `..1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryTo;
    /// use std::cmp::Ordering;
    ///
    /// let inclusive = RangeBoundaryTo::inclusive(1);
    /// let exclusive = RangeBoundaryTo::exclusive(1);
    /// assert_eq!(exclusive.compare(&inclusive), Ordering::Less);
    /// assert!(inclusive < RangeBoundaryTo::infinite());
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.pos().compare(&other.pos())
    }

    /// Compares this upper boundary against a lower boundary under the
    /// same position order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{RangeBoundaryFrom, RangeBoundaryTo};
    /// use std::cmp::Ordering;
    ///
    /// let to = RangeBoundaryTo::inclusive(2);
    /// assert_eq!(to.cmp_from(&RangeBoundaryFrom::inclusive(2)), Ordering::Equal);
    /// assert_eq!(to.cmp_from(&RangeBoundaryFrom::exclusive(2)), Ordering::Less);
    /// assert_eq!(to.cmp_from(&RangeBoundaryFrom::infinite()), Ordering::Greater);
    /// ```
    pub fn cmp_from(&self, other: &RangeBoundaryFrom<T>) -> Ordering {
        self.pos().compare(&other.pos())
    }

    /// Maps the concrete boundary value, preserving inclusivity and
    /// renormalizing the result. Sentinels pass through untouched; the
    /// mapping is never invoked on them.
    ///
    /// # Panics
    ///
    /// Panics if the mapped value classifies as negative infinity.
    pub fn with_value<F>(&self, map: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        match &self.repr {
            BoundaryRepr::Inclusive(value) => Self::inclusive(map(value)),
            BoundaryRepr::Exclusive(value) => Self::exclusive(map(value)),
            _ => self.clone(),
        }
    }

    /// Converts an exclusive boundary to an inclusive one by mapping its
    /// value; anything else passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryTo;
    ///
    /// let upper = RangeBoundaryTo::exclusive(2);
    /// assert_eq!(upper.to_inclusive(|v| v - 1), RangeBoundaryTo::inclusive(1));
    /// ```
    pub fn to_inclusive<F>(&self, map: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        match &self.repr {
            BoundaryRepr::Exclusive(value) => Self::inclusive(map(value)),
            _ => self.clone(),
        }
    }

    /// Converts an inclusive boundary to an exclusive one by mapping its
    /// value; anything else passes through untouched.
    pub fn to_exclusive<F>(&self, map: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        match &self.repr {
            BoundaryRepr::Inclusive(value) => Self::exclusive(map(value)),
            _ => self.clone(),
        }
    }

    pub(crate) fn pos(&self) -> BoundaryPos<'_, T> {
        match &self.repr {
            BoundaryRepr::Empty => BoundaryPos::Empty,
            BoundaryRepr::Infinite => BoundaryPos::PositiveInfinite,
            BoundaryRepr::Inclusive(value) => BoundaryPos::Finite { value, shift: 0 },
            BoundaryRepr::Exclusive(value) => BoundaryPos::Finite { value, shift: -1 },
        }
    }
}

impl<T> PartialOrd for RangeBoundaryTo<T>
where
    T: RangeElement,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T> PartialEq<RangeBoundaryFrom<T>> for RangeBoundaryTo<T>
where
    T: RangeElement,
{
    #[inline]
    fn eq(&self, other: &RangeBoundaryFrom<T>) -> bool {
        self.cmp_from(other) == Ordering::Equal
    }
}

impl<T> PartialOrd<RangeBoundaryFrom<T>> for RangeBoundaryTo<T>
where
    T: RangeElement,
{
    #[inline]
    fn partial_cmp(&self, other: &RangeBoundaryFrom<T>) -> Option<Ordering> {
        Some(self.cmp_from(other))
    }
}

impl<T> std::fmt::Debug for RangeBoundaryTo<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            BoundaryRepr::Empty => write!(f, "RangeBoundaryTo::Empty"),
            BoundaryRepr::Infinite => write!(f, "RangeBoundaryTo::Infinite"),
            BoundaryRepr::Inclusive(value) => {
                f.debug_tuple("RangeBoundaryTo::Inclusive").field(value).finish()
            }
            BoundaryRepr::Exclusive(value) => {
                f.debug_tuple("RangeBoundaryTo::Exclusive").field(value).finish()
            }
        }
    }
}

impl<T> std::fmt::Display for RangeBoundaryTo<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            BoundaryRepr::Empty => write!(f, "∅"),
            BoundaryRepr::Infinite => write!(f, "+∞)"),
            BoundaryRepr::Inclusive(value) => write!(f, "{value}]"),
            BoundaryRepr::Exclusive(value) => write!(f, "{value})"),
        }
    }
}
