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

use super::{BoundaryPos, BoundaryRepr, RangeBoundaryTo};
use crate::element::{RangeElement, ValueKind};
use crate::error::RangeError;
use std::cmp::Ordering;

/// The lower edge of a range: inclusive or exclusive around a concrete
/// value, `Infinite` (unbounded below), or `Empty` (the edge of ∅).
///
/// Construction normalizes the domain's own unbounded markers: `None` and
/// negative infinity become the `Infinite` sentinel, positive infinity is
/// rejected (it cannot bound a range from below).
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::RangeBoundaryFrom;
///
/// let lower = RangeBoundaryFrom::inclusive(1.0);
/// assert!(lower.is_inclusive());
/// assert_eq!(lower.value(), Some(&1.0));
///
/// // -∞ normalizes into the sentinel; it is never stored as a value.
/// let unbounded = RangeBoundaryFrom::inclusive(f64::NEG_INFINITY);
/// assert!(unbounded.is_infinite());
/// assert_eq!(unbounded.value(), None);
/// ```
#[derive(Clone, PartialEq)]
pub struct RangeBoundaryFrom<T> {
    pub(crate) repr: BoundaryRepr<T>,
}

impl<T> RangeBoundaryFrom<T>
where
    T: RangeElement,
{
    /// Creates an inclusive lower boundary.
    ///
    /// # Panics
    ///
    /// Panics if `value` classifies as the domain's positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryFrom;
    ///
    /// assert!(RangeBoundaryFrom::inclusive(1).is_inclusive());
    /// assert!(RangeBoundaryFrom::inclusive(None::<i32>).is_infinite());
    /// ```
    #[inline]
    pub fn inclusive(value: T) -> Self {
        match Self::try_inclusive(value) {
            Ok(boundary) => boundary,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an inclusive lower boundary, or fails when `value` is the
    /// domain's positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryFrom;
    ///
    /// assert!(RangeBoundaryFrom::try_inclusive(1.0).is_ok());
    /// assert!(RangeBoundaryFrom::try_inclusive(f64::INFINITY).is_err());
    /// ```
    pub fn try_inclusive(value: T) -> Result<Self, RangeError> {
        match value.kind() {
            ValueKind::Finite => Ok(Self { repr: BoundaryRepr::Inclusive(value) }),
            ValueKind::Unbounded | ValueKind::NegativeInfinity => Ok(Self::infinite()),
            ValueKind::PositiveInfinity => Err(RangeError::InvalidFromValue),
        }
    }

    /// Creates an exclusive lower boundary.
    ///
    /// Unbounded markers normalize exactly as for [`inclusive`]; the
    /// exclusivity is discarded along the way, since an unbounded edge has
    /// no value to exclude.
    ///
    /// [`inclusive`]: Self::inclusive
    ///
    /// # Panics
    ///
    /// Panics if `value` classifies as the domain's positive infinity.
    #[inline]
    pub fn exclusive(value: T) -> Self {
        match Self::try_exclusive(value) {
            Ok(boundary) => boundary,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an exclusive lower boundary, or fails when `value` is the
    /// domain's positive infinity.
    pub fn try_exclusive(value: T) -> Result<Self, RangeError> {
        match value.kind() {
            ValueKind::Finite => Ok(Self { repr: BoundaryRepr::Exclusive(value) }),
            ValueKind::Unbounded | ValueKind::NegativeInfinity => Ok(Self::infinite()),
            ValueKind::PositiveInfinity => Err(RangeError::InvalidFromValue),
        }
    }

    /// The unbounded-below sentinel. Sorts before every other non-empty
    /// boundary.
    #[inline]
    pub const fn infinite() -> Self {
        Self { repr: BoundaryRepr::Infinite }
    }

    /// The lower edge of the empty range ∅. Only equal to itself.
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

    /// Compares two lower boundaries under the total position order.
    ///
    /// For a From boundary, exclusivity sorts *after* the value: the edge
    /// `(1..` starts just past `1`, so it is greater than `[1..`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryFrom;
    /// use std::cmp::Ordering;
    ///
    /// let inclusive = RangeBoundaryFrom::inclusive(1);
    /// let exclusive = RangeBoundaryFrom::exclusive(1);
    /// assert_eq!(inclusive.compare(&exclusive), Ordering::Less);
    /// assert!(RangeBoundaryFrom::infinite() < inclusive);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.pos().compare(&other.pos())
    }

    /// Compares this lower boundary against an upper boundary under the
    /// same position order. Inclusive boundaries at the same value compare
    /// equal across sides: `[1..` and `..1]` both sit exactly on `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{RangeBoundaryFrom, RangeBoundaryTo};
    /// use std::cmp::Ordering;
    ///
    /// let from = RangeBoundaryFrom::inclusive(1);
    /// assert_eq!(from.cmp_to(&RangeBoundaryTo::inclusive(1)), Ordering::Equal);
    /// assert_eq!(from.cmp_to(&RangeBoundaryTo::exclusive(1)), Ordering::Greater);
    /// assert_eq!(from.cmp_to(&RangeBoundaryTo::infinite()), Ordering::Less);
    /// ```
    pub fn cmp_to(&self, other: &RangeBoundaryTo<T>) -> Ordering {
        self.pos().compare(&other.pos())
    }

    /// Maps the concrete boundary value, preserving inclusivity and
    /// renormalizing the result. Sentinels pass through untouched; the
    /// mapping is never invoked on them.
    ///
    /// # Panics
    ///
    /// Panics if the mapped value classifies as positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::RangeBoundaryFrom;
    ///
    /// let lower = RangeBoundaryFrom::exclusive(1);
    /// assert_eq!(lower.with_value(|v| v + 1), RangeBoundaryFrom::exclusive(2));
    /// assert_eq!(
    ///     RangeBoundaryFrom::<i32>::infinite().with_value(|v| v + 1),
    ///     RangeBoundaryFrom::infinite(),
    /// );
    /// ```
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
    /// # use rangekit_core::RangeBoundaryFrom;
    ///
    /// let lower = RangeBoundaryFrom::exclusive(1);
    /// assert_eq!(lower.to_inclusive(|v| v + 1), RangeBoundaryFrom::inclusive(2));
    ///
    /// let lower = RangeBoundaryFrom::inclusive(1);
    /// assert_eq!(lower.to_inclusive(|v| v + 1), lower);
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
            BoundaryRepr::Infinite => BoundaryPos::NegativeInfinite,
            BoundaryRepr::Inclusive(value) => BoundaryPos::Finite { value, shift: 0 },
            BoundaryRepr::Exclusive(value) => BoundaryPos::Finite { value, shift: 1 },
        }
    }
}

impl<T> PartialOrd for RangeBoundaryFrom<T>
where
    T: RangeElement,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T> PartialEq<RangeBoundaryTo<T>> for RangeBoundaryFrom<T>
where
    T: RangeElement,
{
    #[inline]
    fn eq(&self, other: &RangeBoundaryTo<T>) -> bool {
        self.cmp_to(other) == Ordering::Equal
    }
}

impl<T> PartialOrd<RangeBoundaryTo<T>> for RangeBoundaryFrom<T>
where
    T: RangeElement,
{
    #[inline]
    fn partial_cmp(&self, other: &RangeBoundaryTo<T>) -> Option<Ordering> {
        Some(self.cmp_to(other))
    }
}

impl<T> std::fmt::Debug for RangeBoundaryFrom<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            BoundaryRepr::Empty => write!(f, "RangeBoundaryFrom::Empty"),
            BoundaryRepr::Infinite => write!(f, "RangeBoundaryFrom::Infinite"),
            BoundaryRepr::Inclusive(value) => {
                f.debug_tuple("RangeBoundaryFrom::Inclusive").field(value).finish()
            }
            BoundaryRepr::Exclusive(value) => {
                f.debug_tuple("RangeBoundaryFrom::Exclusive").field(value).finish()
            }
        }
    }
}

impl<T> std::fmt::Display for RangeBoundaryFrom<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            BoundaryRepr::Empty => write!(f, "∅"),
            BoundaryRepr::Infinite => write!(f, "(-∞"),
            BoundaryRepr::Inclusive(value) => write!(f, "[{value}"),
            BoundaryRepr::Exclusive(value) => write!(f, "({value}"),
        }
    }
}
