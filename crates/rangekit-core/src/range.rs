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

use crate::boundary::{BoundaryPos, RangeBoundaryFrom, RangeBoundaryTo};
use crate::element::{RangeElement, ValueKind};
use crate::error::RangeError;
use std::cmp::Ordering;

/// An interval over a totally ordered domain: a lower and an upper
/// boundary plus an optional opaque key payload.
///
/// The key travels with the range through every operation but takes no
/// part in the algebra: derived ranges keep the *receiver's* key, and two
/// ranges with equal boundaries but different keys are distinct entities
/// that still cover the same span (see [`has_same_boundaries`]).
///
/// A range is immutable; operations that look mutating return a new
/// range.
///
/// # Invariants
///
/// `from <= to` under the boundary position order, unless the range is
/// empty — empty ranges carry the `Empty` sentinel on both boundaries,
/// always together.
///
/// [`has_same_boundaries`]: Self::has_same_boundaries
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::Range;
///
/// let range = Range::new(1, 5).with_key("maintenance");
/// assert!(range.contains(&3));
/// assert_eq!(range.key(), Some(&"maintenance"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Range<T, K = ()> {
    from: RangeBoundaryFrom<T>,
    to: RangeBoundaryTo<T>,
    key: Option<K>,
}

impl<T> Range<T, ()>
where
    T: RangeElement,
{
    /// Creates a range inclusive on both boundaries.
    ///
    /// Values classifying as the domain's unbounded markers normalize
    /// into infinite boundaries, so `Range::new(f64::NEG_INFINITY,
    /// f64::INFINITY)` is the infinite range, not a pair of finite
    /// extremes.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`, or if a value is invalid for its side
    /// (positive infinity below, negative infinity above).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2);
    /// assert!(range.contains(&1));
    /// assert!(range.contains(&2));
    /// assert!(!range.contains(&3));
    /// ```
    #[inline]
    pub fn new(from: T, to: T) -> Self {
        Self::with_boundaries(RangeBoundaryFrom::inclusive(from), RangeBoundaryTo::inclusive(to))
    }

    /// Creates a range exclusive on both boundaries.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert!(!range.contains(&1.0));
    /// assert!(range.contains(&1.5));
    /// assert!(!range.contains(&2.0));
    /// ```
    #[inline]
    pub fn new_exclusive(from: T, to: T) -> Self {
        Self::with_boundaries(RangeBoundaryFrom::exclusive(from), RangeBoundaryTo::exclusive(to))
    }

    /// Creates a range exclusive below and inclusive above.
    #[inline]
    pub fn new_exclusive_from(from: T, to: T) -> Self {
        Self::with_boundaries(RangeBoundaryFrom::exclusive(from), RangeBoundaryTo::inclusive(to))
    }

    /// Creates a range inclusive below and exclusive above.
    #[inline]
    pub fn new_exclusive_to(from: T, to: T) -> Self {
        Self::with_boundaries(RangeBoundaryFrom::inclusive(from), RangeBoundaryTo::exclusive(to))
    }

    /// Creates a range from two prebuilt boundaries.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`, or if exactly one boundary is the `Empty`
    /// sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{Range, RangeBoundaryFrom, RangeBoundaryTo};
    ///
    /// let range: Range<i32> = Range::with_boundaries(
    ///     RangeBoundaryFrom::inclusive(1),
    ///     RangeBoundaryTo::exclusive(2),
    /// );
    /// assert_eq!(range.to_string(), "[1..2)");
    /// ```
    #[inline]
    pub fn with_boundaries(from: RangeBoundaryFrom<T>, to: RangeBoundaryTo<T>) -> Self {
        match Self::try_with_boundaries(from, to) {
            Ok(range) => range,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a range inclusive on both boundaries, or fails on invalid
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{Range, RangeError};
    ///
    /// assert!(Range::try_new(1, 2).is_ok());
    /// assert_eq!(Range::try_new(2, 1), Err(RangeError::ReversedBoundaries));
    /// ```
    pub fn try_new(from: T, to: T) -> Result<Self, RangeError> {
        Self::try_with_boundaries(
            RangeBoundaryFrom::try_inclusive(from)?,
            RangeBoundaryTo::try_inclusive(to)?,
        )
    }

    /// Creates a range from two prebuilt boundaries, or fails when they
    /// are reversed or half-empty.
    pub fn try_with_boundaries(
        from: RangeBoundaryFrom<T>,
        to: RangeBoundaryTo<T>,
    ) -> Result<Self, RangeError> {
        Self::check_boundaries(&from, &to)?;
        Ok(Self { from, to, key: None })
    }

    /// The empty range ∅. Contains nothing, acts as the identity of
    /// [`union`](Self::union) and the absorbing element of
    /// [`intersect`](Self::intersect).
    #[inline]
    pub fn empty() -> Self {
        Self {
            from: RangeBoundaryFrom::empty(),
            to: RangeBoundaryTo::empty(),
            key: None,
        }
    }

    /// The infinite range, unbounded on both sides.
    #[inline]
    pub fn infinite() -> Self {
        Self {
            from: RangeBoundaryFrom::infinite(),
            to: RangeBoundaryTo::infinite(),
            key: None,
        }
    }
}

impl<T, K> Range<T, K>
where
    T: RangeElement,
{
    fn check_boundaries(
        from: &RangeBoundaryFrom<T>,
        to: &RangeBoundaryTo<T>,
    ) -> Result<(), RangeError> {
        if from.is_empty() != to.is_empty() {
            return Err(RangeError::HalfEmptyRange);
        }
        if from.is_not_empty() && from.cmp_to(to) == Ordering::Greater {
            return Err(RangeError::ReversedBoundaries);
        }
        Ok(())
    }

    /// The lower boundary.
    #[inline]
    pub fn from(&self) -> &RangeBoundaryFrom<T> {
        &self.from
    }

    /// The upper boundary.
    #[inline]
    pub fn to(&self) -> &RangeBoundaryTo<T> {
        &self.to
    }

    /// The key payload, if any.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Returns `true` if the range is ∅.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Returns `true` if the range is not ∅.
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if the range is unbounded on both sides.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.from.is_infinite() && self.to.is_infinite()
    }

    /// Replaces the key, keeping the boundaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2).with_key("a").with_key("b");
    /// assert_eq!(range.key(), Some(&"b"));
    /// ```
    #[inline]
    pub fn with_key<K2>(self, key: K2) -> Range<T, K2> {
        Range { from: self.from, to: self.to, key: Some(key) }
    }

    /// Drops the key, keeping the boundaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2).with_key("a");
    /// assert_eq!(range.without_key(), Range::new(1, 2));
    /// ```
    #[inline]
    pub fn without_key(self) -> Range<T, ()> {
        Range { from: self.from, to: self.to, key: None }
    }

    /// Boundary-only equality: `true` iff both ranges cover exactly the
    /// same span, regardless of keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let a = Range::new(1, 2).with_key("a");
    /// let b = Range::new(1, 2).with_key("b");
    /// assert_ne!(a, b);
    /// assert!(a.has_same_boundaries(&b));
    /// ```
    pub fn has_same_boundaries<K2>(&self, other: &Range<T, K2>) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Returns `true` if `value` lies within the range, respecting
    /// boundary inclusivity. Unbounded marker values (`None`, `±∞`) are
    /// contained only by ranges whose matching side is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(Some(1.0), Some(2.0));
    /// assert!(range.contains(&Some(1.5)));
    /// assert!(!range.contains(&None));
    ///
    /// assert!(Range::<Option<f64>>::infinite().contains(&None));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        match value.kind() {
            ValueKind::PositiveInfinity => self.contains_to(&RangeBoundaryTo::infinite()),
            _ => self.contains_from(&RangeBoundaryFrom::inclusive(value.clone())),
        }
    }

    /// Returns `true` if a lower boundary lies within the range. The
    /// `Empty` sentinel is contained only by the empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{Range, RangeBoundaryFrom};
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert!(!range.contains_from(&RangeBoundaryFrom::inclusive(1.0)));
    /// assert!(range.contains_from(&RangeBoundaryFrom::exclusive(1.0)));
    /// assert!(!range.contains_from(&RangeBoundaryFrom::empty()));
    /// ```
    pub fn contains_from(&self, boundary: &RangeBoundaryFrom<T>) -> bool {
        self.from.compare(boundary) != Ordering::Greater
            && boundary.cmp_to(&self.to) != Ordering::Greater
    }

    /// Returns `true` if an upper boundary lies within the range.
    pub fn contains_to(&self, boundary: &RangeBoundaryTo<T>) -> bool {
        self.from.cmp_to(boundary) != Ordering::Greater
            && boundary.compare(&self.to) != Ordering::Greater
    }

    /// Returns `true` if `other` lies wholly within this range.
    ///
    /// The empty range is contained only by the empty range (both denote
    /// the same ∅ object); no non-empty range, not even the infinite one,
    /// reports containing ∅.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert!(range.contains_range(&Range::new_exclusive(1.0, 2.0)));
    /// assert!(!range.contains_range(&Range::new(0.0, 1.5)));
    /// assert!(!range.contains_range(&Range::empty()));
    /// assert!(Range::<f64>::empty().contains_range(&Range::empty()));
    /// ```
    pub fn contains_range<K2>(&self, other: &Range<T, K2>) -> bool {
        self.from.compare(&other.from) != Ordering::Greater
            && self.to.compare(&other.to) != Ordering::Less
    }

    /// Returns `true` if the two spans share at least one point. Two
    /// empty ranges intersect reflexively (they are the same ∅ object);
    /// an empty range never intersects a non-empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert!(range.has_intersection(&Range::new(1.5, 3.0)));
    /// assert!(!range.has_intersection(&Range::new(3.0, 4.0)));
    /// assert!(!range.has_intersection(&Range::empty()));
    /// assert!(Range::<f64>::empty().has_intersection(&Range::empty()));
    /// ```
    pub fn has_intersection<K2>(&self, other: &Range<T, K2>) -> bool {
        self.from.cmp_to(&other.to) != Ordering::Greater
            && other.from.cmp_to(&self.to) != Ordering::Greater
    }

    /// Convenience form of [`has_intersection`] taking a raw inclusive
    /// value pair.
    ///
    /// [`has_intersection`]: Self::has_intersection
    ///
    /// # Panics
    ///
    /// Panics if `(from, to)` does not form a valid range.
    pub fn has_intersection_values(&self, from: T, to: T) -> bool {
        self.has_intersection(&Range::<T>::new(from, to))
    }

    /// Strict ordering predicate: `true` iff the whole range lies after
    /// `value`. Returns `false` for probe values that cannot bound the
    /// range from below (positive infinity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert!(range.starts_after(&1.0));
    /// assert!(!range.starts_after(&1.5));
    /// assert!(!Range::<f64>::empty().starts_after(&1.0));
    /// ```
    pub fn starts_after(&self, value: &T) -> bool {
        match value.kind() {
            ValueKind::PositiveInfinity => false,
            _ => self.from.compare(&RangeBoundaryFrom::inclusive(value.clone()))
                == Ordering::Greater,
        }
    }

    /// Returns `true` iff the whole range lies after the given lower
    /// boundary. Always `false` for the `Empty` sentinel.
    pub fn starts_after_from_boundary(&self, boundary: &RangeBoundaryFrom<T>) -> bool {
        boundary.is_not_empty() && self.from.compare(boundary) == Ordering::Greater
    }

    /// Returns `true` iff the whole range lies after the given upper
    /// boundary. Always `false` for the `Empty` sentinel.
    pub fn starts_after_to_boundary(&self, boundary: &RangeBoundaryTo<T>) -> bool {
        boundary.is_not_empty() && self.from.cmp_to(boundary) == Ordering::Greater
    }

    /// Returns `true` iff the whole range lies after `other`.
    pub fn starts_after_range<K2>(&self, other: &Range<T, K2>) -> bool {
        other.is_not_empty() && self.from.cmp_to(&other.to) == Ordering::Greater
    }

    /// Strict ordering predicate: `true` iff the whole range lies before
    /// `value`. Returns `false` for probe values that cannot bound the
    /// range from above (negative infinity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert!(range.ends_before(&2.0));
    /// assert!(!range.ends_before(&1.5));
    /// assert!(!Range::<f64>::infinite().ends_before(&1.0));
    /// ```
    pub fn ends_before(&self, value: &T) -> bool {
        match value.kind() {
            ValueKind::NegativeInfinity => false,
            _ => {
                self.is_not_empty()
                    && self.to.compare(&RangeBoundaryTo::inclusive(value.clone()))
                        == Ordering::Less
            }
        }
    }

    /// Returns `true` iff the whole range lies before the given upper
    /// boundary. Always `false` for the `Empty` sentinel and for empty
    /// receivers.
    pub fn ends_before_to_boundary(&self, boundary: &RangeBoundaryTo<T>) -> bool {
        self.is_not_empty()
            && boundary.is_not_empty()
            && self.to.compare(boundary) == Ordering::Less
    }

    /// Returns `true` iff the whole range lies before the given lower
    /// boundary. Always `false` for the `Empty` sentinel and for empty
    /// receivers.
    pub fn ends_before_from_boundary(&self, boundary: &RangeBoundaryFrom<T>) -> bool {
        self.is_not_empty()
            && boundary.is_not_empty()
            && self.to.cmp_from(boundary) == Ordering::Less
    }

    /// Returns `true` iff the whole range lies before `other`.
    pub fn ends_before_range<K2>(&self, other: &Range<T, K2>) -> bool {
        self.is_not_empty()
            && other.is_not_empty()
            && self.to.cmp_from(&other.from) == Ordering::Less
    }

    /// Clamps `value` into the range.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty (no value belongs to ∅) or carries an
    /// exclusive boundary (there is no nearest representable value to
    /// clamp to).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert_eq!(range.adjust(&0.0), 1.0);
    /// assert_eq!(range.adjust(&1.5), 1.5);
    /// assert_eq!(range.adjust(&f64::INFINITY), 2.0);
    /// ```
    pub fn adjust(&self, value: &T) -> T {
        match self.try_adjust(value) {
            Ok(adjusted) => adjusted,
            Err(error) => panic!("{error}"),
        }
    }

    /// Clamps `value` into the range, or fails when the range cannot
    /// clamp (empty, or exclusive boundaries).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::{Range, RangeError};
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert_eq!(range.try_adjust(&1.5), Err(RangeError::ExclusiveBoundaryAdjust));
    /// assert_eq!(Range::<f64>::empty().try_adjust(&1.0), Err(RangeError::EmptyRangeAdjust));
    /// ```
    pub fn try_adjust(&self, value: &T) -> Result<T, RangeError> {
        if self.is_empty() {
            return Err(RangeError::EmptyRangeAdjust);
        }
        if self.from.is_exclusive() || self.to.is_exclusive() {
            return Err(RangeError::ExclusiveBoundaryAdjust);
        }
        let probe = BoundaryPos::of_value(value);
        if self.from.pos().compare(&probe) == Ordering::Greater {
            if let Some(lower) = self.from.value() {
                return Ok(lower.clone());
            }
        }
        if self.to.pos().compare(&probe) == Ordering::Less {
            if let Some(upper) = self.to.value() {
                return Ok(upper.clone());
            }
        }
        Ok(value.clone())
    }
}

impl<T, K> Range<T, K>
where
    T: RangeElement,
    K: Clone,
{
    fn to_empty(&self) -> Self {
        Self {
            from: RangeBoundaryFrom::empty(),
            to: RangeBoundaryTo::empty(),
            key: self.key.clone(),
        }
    }

    /// The smallest range covering both spans, keyed by the receiver.
    ///
    /// The empty range is the identity element; the infinite range is
    /// absorbing. Inclusivity of each resulting boundary follows
    /// whichever input boundary reaches farther.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert_eq!(range.union(&Range::new(3.0, 4.0)), Range::new(1.0, 4.0));
    /// assert_eq!(range.union(&Range::empty()), range);
    /// assert_eq!(range.union(&Range::infinite()), Range::infinite());
    /// ```
    pub fn union<K2>(&self, other: &Range<T, K2>) -> Self {
        if self.is_empty() {
            return Self {
                from: other.from.clone(),
                to: other.to.clone(),
                key: self.key.clone(),
            };
        }
        if other.is_empty() {
            return self.clone();
        }
        let from = if self.from.compare(&other.from) == Ordering::Greater {
            other.from.clone()
        } else {
            self.from.clone()
        };
        let to = if self.to.compare(&other.to) == Ordering::Less {
            other.to.clone()
        } else {
            self.to.clone()
        };
        Self { from, to, key: self.key.clone() }
    }

    /// Convenience form of [`union`](Self::union) taking a raw inclusive
    /// value pair.
    ///
    /// # Panics
    ///
    /// Panics if `(from, to)` does not form a valid range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new_exclusive(1.0, 2.0);
    /// assert_eq!(range.union_values(3.0, 4.0), Range::new_exclusive_from(1.0, 4.0));
    /// ```
    pub fn union_values(&self, from: T, to: T) -> Self {
        self.union(&Range::<T>::new(from, to))
    }

    /// The largest range contained in both spans, keyed by the receiver.
    ///
    /// The empty range is absorbing; the infinite range is the identity
    /// element. Disjoint spans intersect to the empty range (keyed), not
    /// to an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert_eq!(range.intersect(&Range::new(1.5, 3.0)), Range::new(1.5, 2.0));
    /// assert_eq!(range.intersect(&Range::new(3.0, 4.0)), Range::empty());
    /// assert_eq!(range.intersect(&Range::infinite()), range);
    /// ```
    pub fn intersect<K2>(&self, other: &Range<T, K2>) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.to_empty();
        }
        let from = if self.from.compare(&other.from) == Ordering::Less {
            other.from.clone()
        } else {
            self.from.clone()
        };
        let to = if self.to.compare(&other.to) == Ordering::Greater {
            other.to.clone()
        } else {
            self.to.clone()
        };
        if from.cmp_to(&to) == Ordering::Greater {
            self.to_empty()
        } else {
            Self { from, to, key: self.key.clone() }
        }
    }

    /// Convenience form of [`intersect`](Self::intersect) taking a raw
    /// inclusive value pair.
    ///
    /// # Panics
    ///
    /// Panics if `(from, to)` does not form a valid range.
    pub fn intersect_values(&self, from: T, to: T) -> Self {
        self.intersect(&Range::<T>::new(from, to))
    }

    /// Widens the lower side to `value` if it lies below the current
    /// From; otherwise a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies beyond the current To boundary — a lower
    /// boundary cannot be extended past the upper one — or if `value` is
    /// invalid for a lower boundary (positive infinity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert_eq!(range.extend_from(0.0), Range::new(0.0, 2.0));
    /// assert_eq!(range.extend_from(1.5), range); // inside: no-op
    /// assert!(range.extend_from(f64::NEG_INFINITY).from().is_infinite());
    /// ```
    pub fn extend_from(&self, value: T) -> Self {
        self.extend_from_boundary(RangeBoundaryFrom::inclusive(value))
    }

    /// Boundary form of [`extend_from`](Self::extend_from). The `Empty`
    /// sentinel and empty receivers are no-ops.
    pub fn extend_from_boundary(&self, boundary: RangeBoundaryFrom<T>) -> Self {
        if self.is_empty() || boundary.is_empty() {
            return self.clone();
        }
        assert!(
            boundary.cmp_to(&self.to) != Ordering::Greater,
            "{}",
            RangeError::ExtendIntoOpposite
        );
        if boundary.compare(&self.from) == Ordering::Less {
            Self { from: boundary, to: self.to.clone(), key: self.key.clone() }
        } else {
            self.clone()
        }
    }

    /// Widens the upper side to `value` if it lies above the current To;
    /// otherwise a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies before the current From boundary, or if
    /// `value` is invalid for an upper boundary (negative infinity).
    pub fn extend_to(&self, value: T) -> Self {
        self.extend_to_boundary(RangeBoundaryTo::inclusive(value))
    }

    /// Boundary form of [`extend_to`](Self::extend_to). The `Empty`
    /// sentinel and empty receivers are no-ops.
    pub fn extend_to_boundary(&self, boundary: RangeBoundaryTo<T>) -> Self {
        if self.is_empty() || boundary.is_empty() {
            return self.clone();
        }
        assert!(
            self.from.cmp_to(&boundary) != Ordering::Greater,
            "{}",
            RangeError::ExtendIntoOpposite
        );
        if boundary.compare(&self.to) == Ordering::Greater {
            Self { from: self.from.clone(), to: boundary, key: self.key.clone() }
        } else {
            self.clone()
        }
    }

    /// Narrows the lower side to `value` if it lies inside the current
    /// span. A value beyond the To boundary empties the range; a value at
    /// or below the current From is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` is invalid for a lower boundary (positive
    /// infinity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1.0, 2.0);
    /// assert_eq!(range.trim_from(1.5), Range::new(1.5, 2.0));
    /// assert_eq!(range.trim_from(0.0), range);
    /// assert!(range.trim_from(3.0).is_empty());
    /// ```
    pub fn trim_from(&self, value: T) -> Self {
        self.trim_from_boundary(RangeBoundaryFrom::inclusive(value))
    }

    /// Boundary form of [`trim_from`](Self::trim_from). Trimming to the
    /// `Empty` sentinel empties the range.
    pub fn trim_from_boundary(&self, boundary: RangeBoundaryFrom<T>) -> Self {
        if boundary.is_empty() {
            return self.to_empty();
        }
        if self.is_empty() {
            return self.clone();
        }
        if boundary.cmp_to(&self.to) == Ordering::Greater {
            return self.to_empty();
        }
        if boundary.compare(&self.from) == Ordering::Greater {
            Self { from: boundary, to: self.to.clone(), key: self.key.clone() }
        } else {
            self.clone()
        }
    }

    /// Narrows the upper side to `value` if it lies inside the current
    /// span. A value before the From boundary empties the range; a value
    /// at or above the current To is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` is invalid for an upper boundary (negative
    /// infinity).
    pub fn trim_to(&self, value: T) -> Self {
        self.trim_to_boundary(RangeBoundaryTo::inclusive(value))
    }

    /// Boundary form of [`trim_to`](Self::trim_to). Trimming to the
    /// `Empty` sentinel empties the range.
    pub fn trim_to_boundary(&self, boundary: RangeBoundaryTo<T>) -> Self {
        if boundary.is_empty() {
            return self.to_empty();
        }
        if self.is_empty() {
            return self.clone();
        }
        if self.from.cmp_to(&boundary) == Ordering::Greater {
            return self.to_empty();
        }
        if boundary.compare(&self.to) == Ordering::Less {
            Self { from: self.from.clone(), to: boundary, key: self.key.clone() }
        } else {
            self.clone()
        }
    }

    /// Maps the concrete boundary values, preserving inclusivity and
    /// sentinel states. The maps are never invoked on sentinel
    /// boundaries; mapping a value onto one of the domain's unbounded
    /// markers turns that boundary infinite.
    ///
    /// # Panics
    ///
    /// Panics if the mapped boundaries end up reversed, or if a mapped
    /// value is invalid for its side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2);
    /// assert_eq!(range.with_values(|v| v - 1, |v| v + 1), Range::new(0, 3));
    /// ```
    pub fn with_values<F, G>(&self, map_from: F, map_to: G) -> Self
    where
        F: FnOnce(&T) -> T,
        G: FnOnce(&T) -> T,
    {
        if self.is_empty() {
            return self.clone();
        }
        let from = self.from.with_value(map_from);
        let to = self.to.with_value(map_to);
        match Self::check_boundaries(&from, &to) {
            Ok(()) => Self { from, to, key: self.key.clone() },
            Err(error) => panic!("{error}"),
        }
    }

    /// Single-map form of [`with_values`](Self::with_values): applies the
    /// same transform to both boundary values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2);
    /// assert_eq!(range.map_values(|v| v * 10), Range::new(10, 20));
    /// ```
    pub fn map_values<F>(&self, map: F) -> Self
    where
        F: Fn(&T) -> T,
    {
        self.with_values(&map, &map)
    }

    /// Converts exclusive boundaries to inclusive ones, applying the
    /// respective map only to boundaries that actually need conversion.
    /// If the converted boundaries shrink past each other, the result is
    /// the empty range — the natural algebra outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new_exclusive(1, 2);
    /// assert_eq!(range.make_inclusive(|v| v - 1, |v| v + 1), Range::new(0, 3));
    ///
    /// let range = Range::new_exclusive(2, 3);
    /// assert!(range.make_inclusive(|v| v + 1, |v| v - 1).is_empty());
    /// ```
    pub fn make_inclusive<F, G>(&self, map_from: F, map_to: G) -> Self
    where
        F: FnOnce(&T) -> T,
        G: FnOnce(&T) -> T,
    {
        if self.is_empty() || (!self.from.is_exclusive() && !self.to.is_exclusive()) {
            return self.clone();
        }
        let from = self.from.to_inclusive(map_from);
        let to = self.to.to_inclusive(map_to);
        if from.cmp_to(&to) == Ordering::Greater {
            self.to_empty()
        } else {
            Self { from, to, key: self.key.clone() }
        }
    }

    /// Converts inclusive boundaries to exclusive ones, applying the
    /// respective map only to boundaries that actually need conversion.
    /// Shrinking past each other yields the empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    ///
    /// let range = Range::new(1, 2);
    /// assert_eq!(range.make_exclusive(|v| v - 1, |v| v + 1), Range::new_exclusive(0, 3));
    /// ```
    pub fn make_exclusive<F, G>(&self, map_from: F, map_to: G) -> Self
    where
        F: FnOnce(&T) -> T,
        G: FnOnce(&T) -> T,
    {
        if self.is_empty() || (!self.from.is_inclusive() && !self.to.is_inclusive()) {
            return self.clone();
        }
        let from = self.from.to_exclusive(map_from);
        let to = self.to.to_exclusive(map_to);
        if from.cmp_to(&to) == Ordering::Greater {
            self.to_empty()
        } else {
            Self { from, to, key: self.key.clone() }
        }
    }
}

impl<T, K> std::fmt::Display for Range<T, K>
where
    T: RangeElement + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "{}..{}", self.from, self.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "key1";
    const KEY2: &str = "key2";

    #[test]
    fn test_construction_valid() {
        let range = Range::new(1, 2);
        assert_eq!(range.from(), &RangeBoundaryFrom::inclusive(1));
        assert_eq!(range.to(), &RangeBoundaryTo::inclusive(2));
        assert!(range.is_not_empty());
        assert!(!range.is_infinite());
        assert_eq!(range.key(), None);
    }

    #[test]
    fn test_construction_degenerate_point() {
        // A single-point range is valid; exclusive edges at the same
        // value are not.
        assert!(Range::try_new(1, 1).is_ok());
        assert_eq!(
            Range::try_with_boundaries(
                RangeBoundaryFrom::exclusive(1),
                RangeBoundaryTo::exclusive(1),
            ),
            Err(RangeError::ReversedBoundaries)
        );
    }

    #[test]
    fn test_construction_normalizes_infinities() {
        let range = Range::new(f64::NEG_INFINITY, f64::INFINITY);
        assert!(range.is_infinite());

        // Exclusive unbounded markers collapse to the same infinite range.
        let range = Range::new_exclusive(None::<f64>, None);
        assert!(range.is_infinite());
    }

    #[test]
    #[should_panic(expected = "'from' boundary must not be greater")]
    fn test_construction_reversed_panics() {
        Range::new(2, 1);
    }

    #[test]
    fn test_try_new_rejects_invalid_side_values() {
        assert_eq!(
            Range::try_new(f64::INFINITY, f64::NEG_INFINITY),
            Err(RangeError::InvalidFromValue)
        );
        assert_eq!(Range::try_new(2.0, f64::NEG_INFINITY), Err(RangeError::InvalidToValue));
    }

    #[test]
    fn test_half_empty_construction_rejected() {
        assert_eq!(
            Range::try_with_boundaries(RangeBoundaryFrom::empty(), RangeBoundaryTo::inclusive(1)),
            Err(RangeError::HalfEmptyRange)
        );
        assert_eq!(
            Range::try_with_boundaries(RangeBoundaryFrom::<i32>::inclusive(1), RangeBoundaryTo::empty()),
            Err(RangeError::HalfEmptyRange)
        );
    }

    #[test]
    fn test_with_key_without_key() {
        let range = Range::new(1, 2).with_key(KEY);
        assert_eq!(range.key(), Some(&KEY));
        assert_eq!(range.clone().with_key(KEY2), Range::new(1, 2).with_key(KEY2));
        assert_eq!(range.clone().without_key(), Range::new(1, 2));
        assert!(range.has_same_boundaries(&Range::new(1, 2).with_key(KEY2)));
        assert_ne!(range, Range::new(1, 2).with_key(KEY2));
    }

    #[test]
    fn test_contains_value() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(!range.contains(&None));
        assert!(!range.contains(&Some(f64::NEG_INFINITY)));
        assert!(!range.contains(&Some(f64::INFINITY)));
        assert!(!range.contains(&Some(0.0)));
        assert!(range.contains(&Some(1.0)));
        assert!(range.contains(&Some(1.5)));
        assert!(range.contains(&Some(2.0)));
        assert!(!range.contains(&Some(3.0)));

        let empty = Range::<Option<f64>>::empty().with_key(KEY);
        assert!(!empty.contains(&None));
        assert!(!empty.contains(&Some(0.0)));

        let infinite = Range::new_exclusive(None::<f64>, None).with_key(KEY);
        assert!(infinite.contains(&None));
        assert!(infinite.contains(&Some(f64::NEG_INFINITY)));
        assert!(infinite.contains(&Some(f64::INFINITY)));
        assert!(infinite.contains(&Some(0.0)));
    }

    #[test]
    fn test_contains_boundary() {
        let range = Range::new_exclusive(1.0, 2.0);
        assert!(!range.contains_from(&RangeBoundaryFrom::inclusive(1.0)));
        assert!(range.contains_from(&RangeBoundaryFrom::exclusive(1.0)));
        assert!(range.contains_from(&RangeBoundaryFrom::exclusive(1.5)));
        assert!(!range.contains_from(&RangeBoundaryFrom::exclusive(2.0)));
        assert!(!range.contains_to(&RangeBoundaryTo::inclusive(2.0)));
        assert!(range.contains_to(&RangeBoundaryTo::exclusive(1.5)));
        assert!(range.contains_to(&RangeBoundaryTo::exclusive(2.0)));
        assert!(!range.contains_to(&RangeBoundaryTo::exclusive(1.0)));
    }

    #[test]
    fn test_contains_empty_boundary() {
        let range = Range::new(1.0, 2.0);
        assert!(!range.contains_from(&RangeBoundaryFrom::empty()));
        assert!(!range.contains_to(&RangeBoundaryTo::empty()));

        let empty = Range::<f64>::empty();
        assert!(empty.contains_from(&RangeBoundaryFrom::empty()));
        assert!(empty.contains_to(&RangeBoundaryTo::empty()));
        assert!(!empty.contains_from(&RangeBoundaryFrom::inclusive(0.0)));

        let infinite = Range::<f64>::infinite();
        assert!(!infinite.contains_from(&RangeBoundaryFrom::empty()));
        assert!(infinite.contains_from(&RangeBoundaryFrom::infinite()));
    }

    #[test]
    fn test_contains_range() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(range.contains_range(&range));
        assert!(range.contains_range(&Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY2)));
        assert!(range.contains_range(&Range::new(Some(1.5), Some(1.5))));
        assert!(!range.contains_range(&Range::new(Some(1.0), None)));
        assert!(!range.contains_range(&Range::new(Some(0.0), Some(3.0))));
        assert!(!range.contains_range(&Range::new(Some(0.0), Some(1.5))));
        assert!(!range.contains_range(&Range::new(Some(3.0), Some(4.0))));
        assert!(!range.contains_range(&Range::<Option<f64>>::empty()));
        assert!(!range.contains_range(&Range::<Option<f64>>::infinite()));

        let empty = Range::<Option<f64>>::empty().with_key(KEY);
        assert!(empty.contains_range(&empty));
        assert!(empty.contains_range(&Range::<Option<f64>>::empty().with_key(KEY2)));
        assert!(!empty.contains_range(&Range::new(Some(1.0), Some(2.0))));
        assert!(!empty.contains_range(&Range::<Option<f64>>::infinite()));

        let infinite = Range::<Option<f64>>::infinite().with_key(KEY);
        assert!(infinite.contains_range(&infinite));
        assert!(infinite.contains_range(&Range::new(Some(1.0), Some(2.0))));
        assert!(infinite.contains_range(&Range::new(Some(1.0), None)));
        // The infinite range contains every point, yet does not report
        // containing the empty range: ∅ is its own object.
        assert!(!infinite.contains_range(&Range::<Option<f64>>::empty()));
    }

    #[test]
    fn test_has_intersection() {
        let range = Range::new(1.0, 2.0).with_key(KEY);
        assert!(range.has_intersection(&range));
        assert!(range.has_intersection_values(1.0, 2.0));
        assert!(range.has_intersection(&Range::new_exclusive(1.0, 2.0).with_key(KEY2)));
        assert!(range.has_intersection_values(1.5, 1.5));
        assert!(range.has_intersection_values(0.0, 3.0));
        assert!(range.has_intersection_values(0.0, 1.5));
        assert!(range.has_intersection_values(1.5, 3.0));
        assert!(!range.has_intersection_values(3.0, 4.0));
        assert!(range.has_intersection(&Range::infinite()));

        // Adjacent exclusive edges share no point.
        let open = Range::new_exclusive(1.0, 2.0);
        assert!(open.has_intersection_values(1.0, 2.0));
        assert!(!open.has_intersection(&Range::new_exclusive(2.0, 3.0)));
    }

    #[test]
    fn test_has_intersection_empty_cases() {
        let range = Range::new(1.0, 2.0).with_key(KEY);
        let empty = Range::<f64>::empty().with_key(KEY);

        assert!(!range.has_intersection(&Range::<f64>::empty()));
        assert!(empty.has_intersection(&empty));
        assert!(empty.has_intersection(&Range::<f64>::empty().with_key(KEY2)));
        assert!(!empty.has_intersection(&range));
        assert!(!empty.has_intersection(&Range::<f64>::infinite()));
        assert!(!Range::<f64>::infinite().has_intersection(&Range::<f64>::empty()));
    }

    #[test]
    #[should_panic(expected = "'from' boundary must not be greater")]
    fn test_has_intersection_values_reversed_panics() {
        Range::new(1.0, 2.0).has_intersection_values(2.0, 1.0);
    }

    #[test]
    fn test_union() {
        let range = Range::new(1.0, 2.0).with_key(KEY);
        let empty = Range::<f64>::empty().with_key(KEY);
        let infinite = Range::<f64>::infinite().with_key(KEY);

        assert_eq!(range.union(&range), range);
        assert_eq!(range.union_values(1.0, 2.0), range);
        assert_eq!(range.union_values(1.5, 1.5), range);
        assert_eq!(range.union_values(0.0, 3.0), Range::new(0.0, 3.0).with_key(KEY));
        assert_eq!(range.union_values(1.5, 3.0), Range::new(1.0, 3.0).with_key(KEY));
        assert_eq!(range.union_values(0.0, 1.5), Range::new(0.0, 2.0).with_key(KEY));
        // Disjoint spans still union into the covering range.
        assert_eq!(range.union_values(3.0, 4.0), Range::new(1.0, 4.0).with_key(KEY));
        assert_eq!(range.union_values(-2.0, -1.0), Range::new(-2.0, 2.0).with_key(KEY));
        assert_eq!(range.union(&empty), range);
        assert_eq!(empty.union(&range), range);
        assert_eq!(range.union(&infinite), infinite);
        assert_eq!(infinite.union(&range), infinite);
        assert_eq!(empty.union(&infinite), infinite);
        assert_eq!(infinite.union(&empty), infinite);
    }

    #[test]
    fn test_union_exclusive_boundaries() {
        let range = Range::new_exclusive(1.0, 2.0).with_key(KEY);
        // An inclusive boundary at the same value reaches farther and wins.
        assert_eq!(range.union_values(1.0, 2.0), Range::new(1.0, 2.0).with_key(KEY));
        assert_eq!(range.union_values(1.5, 1.5), range);
        assert_eq!(range.union_values(1.5, 3.0), Range::new_exclusive_from(1.0, 3.0).with_key(KEY));
        assert_eq!(range.union_values(0.0, 1.5), Range::new_exclusive_to(0.0, 2.0).with_key(KEY));
        assert_eq!(range.union_values(3.0, 4.0), Range::new_exclusive_from(1.0, 4.0).with_key(KEY));
    }

    #[test]
    #[should_panic(expected = "positive infinity")]
    fn test_union_values_invalid_from_panics() {
        Range::new(1.0, 2.0).union_values(f64::INFINITY, 1.0);
    }

    #[test]
    fn test_intersect() {
        let range = Range::new(1.0, 2.0).with_key(KEY);
        let empty = Range::<f64>::empty().with_key(KEY);
        let infinite = Range::<f64>::infinite().with_key(KEY);

        assert_eq!(range.intersect(&range), range);
        assert_eq!(range.intersect_values(1.0, 2.0), range);
        assert_eq!(range.intersect_values(1.5, 1.5), Range::new(1.5, 1.5).with_key(KEY));
        assert_eq!(range.intersect_values(0.0, 3.0), range);
        assert_eq!(range.intersect_values(1.5, 3.0), Range::new(1.5, 2.0).with_key(KEY));
        assert_eq!(range.intersect_values(0.0, 1.5), Range::new(1.0, 1.5).with_key(KEY));
        assert_eq!(range.intersect_values(3.0, 4.0), empty);
        assert_eq!(range.intersect_values(-2.0, -1.0), empty);
        assert_eq!(range.intersect(&empty), empty);
        assert_eq!(empty.intersect(&range), empty);
        assert_eq!(range.intersect(&infinite), range);
        assert_eq!(infinite.intersect(&range), range);
        assert_eq!(empty.intersect(&infinite), empty);
        assert_eq!(infinite.intersect(&empty), empty);
    }

    #[test]
    fn test_intersect_exclusive_boundaries() {
        let range = Range::new_exclusive(1.0, 2.0).with_key(KEY);
        assert_eq!(range.intersect_values(1.0, 2.0), range);
        assert_eq!(range.intersect_values(1.5, 3.0), Range::new_exclusive_to(1.5, 2.0).with_key(KEY));
        assert_eq!(range.intersect_values(0.0, 1.5), Range::new_exclusive_from(1.0, 1.5).with_key(KEY));
        assert_eq!(range.intersect_values(3.0, 4.0), Range::<f64>::empty().with_key(KEY));
    }

    #[test]
    fn test_union_intersect_commute_on_boundaries() {
        let cases = [
            (Range::new(1.0, 2.0), Range::new(1.5, 3.0)),
            (Range::new_exclusive(1.0, 2.0), Range::new(2.0, 4.0)),
            (Range::new(1.0, 2.0), Range::<f64>::empty()),
            (Range::new(1.0, 2.0), Range::<f64>::infinite()),
            (Range::<f64>::empty(), Range::<f64>::infinite()),
        ];
        for (x, y) in &cases {
            assert_eq!(x.union(y), y.union(x));
            assert_eq!(x.intersect(y), y.intersect(x));
        }
    }

    #[test]
    fn test_extend_from() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(range.extend_from(None), Range::new(None, Some(2.0)).with_key(KEY));
        assert_eq!(
            range.extend_from(Some(f64::NEG_INFINITY)),
            Range::new(None, Some(2.0)).with_key(KEY)
        );
        assert_eq!(range.extend_from_boundary(RangeBoundaryFrom::empty()), range);
        assert_eq!(range.extend_from(Some(0.0)), Range::new(Some(0.0), Some(2.0)).with_key(KEY));
        assert_eq!(range.extend_from(Some(1.0)), range);
        assert_eq!(range.extend_from(Some(1.5)), range);
        assert_eq!(range.extend_from(Some(2.0)), range);

        let empty = Range::<Option<f64>>::empty().with_key(KEY);
        assert_eq!(empty.extend_from(None), empty);
        assert_eq!(empty.extend_from(Some(0.0)), empty);

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(
            open.extend_from(Some(1.0)),
            Range::new_exclusive_to(Some(1.0), Some(2.0)).with_key(KEY)
        );
        assert_eq!(open.extend_from(Some(1.5)), open);
        assert_eq!(open.extend_from_boundary(RangeBoundaryFrom::exclusive(Some(1.0))), open);
        assert_eq!(
            open.extend_from_boundary(RangeBoundaryFrom::exclusive(Some(0.0))),
            Range::new_exclusive(Some(0.0), Some(2.0)).with_key(KEY)
        );
    }

    #[test]
    #[should_panic(expected = "cannot be extended past")]
    fn test_extend_from_past_to_panics() {
        Range::new(1.0, 2.0).extend_from(3.0);
    }

    #[test]
    #[should_panic(expected = "positive infinity")]
    fn test_extend_from_positive_infinity_panics() {
        Range::new(1.0, 2.0).extend_from(f64::INFINITY);
    }

    #[test]
    fn test_extend_to() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(range.extend_to(None), Range::new(Some(1.0), None).with_key(KEY));
        assert_eq!(
            range.extend_to(Some(f64::INFINITY)),
            Range::new(Some(1.0), None).with_key(KEY)
        );
        assert_eq!(range.extend_to_boundary(RangeBoundaryTo::empty()), range);
        assert_eq!(range.extend_to(Some(1.0)), range);
        assert_eq!(range.extend_to(Some(2.0)), range);
        assert_eq!(range.extend_to(Some(3.0)), Range::new(Some(1.0), Some(3.0)).with_key(KEY));

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(
            open.extend_to(Some(2.0)),
            Range::new_exclusive_from(Some(1.0), Some(2.0)).with_key(KEY)
        );
        assert_eq!(open.extend_to_boundary(RangeBoundaryTo::exclusive(Some(2.0))), open);
        assert_eq!(
            open.extend_to_boundary(RangeBoundaryTo::exclusive(Some(3.0))),
            Range::new_exclusive(Some(1.0), Some(3.0)).with_key(KEY)
        );
    }

    #[test]
    #[should_panic(expected = "cannot be extended past")]
    fn test_extend_to_before_from_panics() {
        Range::new(1.0, 2.0).extend_to(0.0);
    }

    #[test]
    fn test_trim_from() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        let empty = Range::<Option<f64>>::empty().with_key(KEY);
        assert_eq!(range.trim_from(None), range);
        assert_eq!(range.trim_from(Some(f64::NEG_INFINITY)), range);
        assert_eq!(range.trim_from_boundary(RangeBoundaryFrom::empty()), empty);
        assert_eq!(range.trim_from(Some(0.0)), range);
        assert_eq!(range.trim_from(Some(1.0)), range);
        assert_eq!(range.trim_from(Some(1.5)), Range::new(Some(1.5), Some(2.0)).with_key(KEY));
        assert_eq!(range.trim_from(Some(2.0)), Range::new(Some(2.0), Some(2.0)).with_key(KEY));
        assert_eq!(range.trim_from(Some(3.0)), empty);

        assert_eq!(empty.trim_from(Some(0.0)), empty);
        assert_eq!(empty.trim_from(None), empty);

        let infinite = Range::new_exclusive(None::<f64>, None).with_key(KEY);
        assert_eq!(infinite.trim_from(Some(0.0)), Range::new(Some(0.0), None).with_key(KEY));
        assert_eq!(infinite.trim_from_boundary(RangeBoundaryFrom::empty()), empty);

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(open.trim_from(Some(1.0)), open);
        assert_eq!(
            open.trim_from(Some(1.5)),
            Range::new_exclusive_to(Some(1.5), Some(2.0)).with_key(KEY)
        );
        assert_eq!(open.trim_from(Some(2.0)), empty);
    }

    #[test]
    #[should_panic(expected = "positive infinity")]
    fn test_trim_from_positive_infinity_panics() {
        Range::new(1.0, 2.0).trim_from(f64::INFINITY);
    }

    #[test]
    fn test_trim_to() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        let empty = Range::<Option<f64>>::empty().with_key(KEY);
        assert_eq!(range.trim_to(None), range);
        assert_eq!(range.trim_to(Some(f64::INFINITY)), range);
        assert_eq!(range.trim_to_boundary(RangeBoundaryTo::empty()), empty);
        assert_eq!(range.trim_to(Some(0.0)), empty);
        assert_eq!(range.trim_to(Some(1.0)), Range::new(Some(1.0), Some(1.0)).with_key(KEY));
        assert_eq!(range.trim_to(Some(1.5)), Range::new(Some(1.0), Some(1.5)).with_key(KEY));
        assert_eq!(range.trim_to(Some(2.0)), range);
        assert_eq!(range.trim_to(Some(3.0)), range);

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert_eq!(open.trim_to(Some(2.0)), open);
        assert_eq!(
            open.trim_to(Some(1.5)),
            Range::new_exclusive_from(Some(1.0), Some(1.5)).with_key(KEY)
        );
        assert_eq!(open.trim_to(Some(1.0)), empty);
    }

    #[test]
    fn test_adjust() {
        let range = Range::new(1.0, 2.0).with_key(KEY);
        assert_eq!(range.adjust(&f64::NEG_INFINITY), 1.0);
        assert_eq!(range.adjust(&0.0), 1.0);
        assert_eq!(range.adjust(&1.0), 1.0);
        assert_eq!(range.adjust(&1.5), 1.5);
        assert_eq!(range.adjust(&2.0), 2.0);
        assert_eq!(range.adjust(&3.0), 2.0);
        assert_eq!(range.adjust(&f64::INFINITY), 2.0);

        let infinite = Range::new(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(infinite.adjust(&f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(infinite.adjust(&0.0), 0.0);
        assert_eq!(infinite.adjust(&f64::INFINITY), f64::INFINITY);

        // None sorts first, so it clamps to the lower boundary.
        let range = Range::new(Some(1.0), Some(2.0));
        assert_eq!(range.adjust(&None), Some(1.0));
    }

    #[test]
    fn test_adjust_errors() {
        let empty = Range::<f64>::empty().with_key(KEY);
        assert_eq!(empty.try_adjust(&f64::NEG_INFINITY), Err(RangeError::EmptyRangeAdjust));
        assert_eq!(empty.try_adjust(&1.0), Err(RangeError::EmptyRangeAdjust));

        let open = Range::new_exclusive(1.0, 2.0).with_key(KEY);
        assert_eq!(open.try_adjust(&f64::NEG_INFINITY), Err(RangeError::ExclusiveBoundaryAdjust));
        assert_eq!(open.try_adjust(&1.5), Err(RangeError::ExclusiveBoundaryAdjust));
        assert_eq!(open.try_adjust(&f64::INFINITY), Err(RangeError::ExclusiveBoundaryAdjust));
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_adjust_on_empty_panics() {
        Range::<f64>::empty().adjust(&1.0);
    }

    #[test]
    fn test_starts_after_value() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(range.starts_after(&None));
        assert!(range.starts_after(&Some(f64::NEG_INFINITY)));
        assert!(!range.starts_after(&Some(f64::INFINITY)));
        assert!(range.starts_after(&Some(0.0)));
        assert!(!range.starts_after(&Some(1.0)));
        assert!(!range.starts_after(&Some(1.5)));
        assert!(!range.starts_after(&Some(3.0)));

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(open.starts_after(&Some(1.0)));
        assert!(!open.starts_after(&Some(1.5)));

        let empty = Range::<Option<f64>>::empty();
        assert!(!empty.starts_after(&None));
        assert!(!empty.starts_after(&Some(0.0)));

        let infinite = Range::<Option<f64>>::infinite();
        assert!(!infinite.starts_after(&None));
        assert!(!infinite.starts_after(&Some(0.0)));
    }

    #[test]
    fn test_starts_after_boundary_and_range() {
        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(open.starts_after_from_boundary(&RangeBoundaryFrom::inclusive(Some(1.0))));
        assert!(!open.starts_after_from_boundary(&RangeBoundaryFrom::exclusive(Some(1.0))));
        assert!(!open.starts_after_from_boundary(&RangeBoundaryFrom::empty()));
        assert!(open.starts_after_to_boundary(&RangeBoundaryTo::exclusive(Some(1.0))));
        assert!(!open.starts_after_to_boundary(&RangeBoundaryTo::inclusive(Some(2.0))));
        assert!(!open.starts_after_to_boundary(&RangeBoundaryTo::empty()));

        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(range.starts_after_range(&Range::new(None, Some(0.0)).with_key(KEY2)));
        assert!(range.starts_after_range(&Range::new_exclusive_to(None, Some(1.0)).with_key(KEY2)));
        assert!(!range.starts_after_range(&Range::new(None, Some(1.0)).with_key(KEY2)));
        assert!(!range.starts_after_range(&Range::<Option<f64>>::empty()));
    }

    #[test]
    fn test_ends_before_value() {
        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(range.ends_before(&None));
        assert!(!range.ends_before(&Some(f64::NEG_INFINITY)));
        assert!(range.ends_before(&Some(f64::INFINITY)));
        assert!(!range.ends_before(&Some(0.0)));
        assert!(!range.ends_before(&Some(2.0)));
        assert!(range.ends_before(&Some(3.0)));

        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(!open.ends_before(&Some(1.5)));
        assert!(open.ends_before(&Some(2.0)));

        let empty = Range::<Option<f64>>::empty();
        assert!(!empty.ends_before(&None));
        assert!(!empty.ends_before(&Some(0.0)));

        let infinite = Range::<Option<f64>>::infinite();
        assert!(!infinite.ends_before(&None));
        assert!(!infinite.ends_before(&Some(0.0)));
    }

    #[test]
    fn test_ends_before_boundary_and_range() {
        let open = Range::new_exclusive(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(open.ends_before_to_boundary(&RangeBoundaryTo::inclusive(Some(2.0))));
        assert!(!open.ends_before_to_boundary(&RangeBoundaryTo::exclusive(Some(2.0))));
        assert!(!open.ends_before_to_boundary(&RangeBoundaryTo::empty()));
        assert!(open.ends_before_from_boundary(&RangeBoundaryFrom::exclusive(Some(2.0))));
        assert!(!open.ends_before_from_boundary(&RangeBoundaryFrom::inclusive(Some(1.0))));

        let range = Range::new(Some(1.0), Some(2.0)).with_key(KEY);
        assert!(!range.ends_before_range(&Range::new(Some(2.0), None).with_key(KEY2)));
        assert!(range.ends_before_range(&Range::new_exclusive_from(Some(2.0), None).with_key(KEY2)));
        assert!(range.ends_before_range(&Range::new(Some(3.0), None).with_key(KEY2)));
        assert!(!range.ends_before_range(&Range::<Option<f64>>::empty()));
        assert!(!Range::<Option<f64>>::empty().ends_before_range(&range));
    }

    #[test]
    fn test_with_values() {
        let range = Range::new(1, 2).with_key(KEY);
        assert_eq!(range.with_values(|v| v - 1, |v| v + 1), Range::new(0, 3).with_key(KEY));

        let range = Range::new_exclusive_from(1, 2).with_key(KEY);
        assert_eq!(
            range.with_values(|v| v - 1, |v| v + 1),
            Range::new_exclusive_from(0, 3).with_key(KEY)
        );

        let range = Range::new_exclusive(1, 2).with_key(KEY);
        assert_eq!(
            range.with_values(|v| v + 1, |v| v + 1),
            Range::new_exclusive(2, 3).with_key(KEY)
        );
    }

    #[test]
    fn test_map_values() {
        let range = Range::new_exclusive(1, 2).with_key(KEY);
        assert_eq!(range.map_values(|v| v * 10), Range::new_exclusive(10, 20).with_key(KEY));
        assert_eq!(Range::<i32>::empty().map_values(|v| v + 1), Range::empty());
    }

    #[test]
    fn test_with_values_maps_onto_unbounded() {
        let range = Range::new_exclusive(Some(1.0), Some(f64::INFINITY)).with_key(KEY);
        assert!(range.with_values(|_| None, |_| None).is_infinite());

        let infinite = Range::new(None::<f64>, None).with_key(KEY);
        assert_eq!(infinite.with_values(|v| v.map(|x| x - 1.0), |v| v.map(|x| x + 1.0)), infinite);
    }

    #[test]
    fn test_with_values_skips_empty() {
        let empty = Range::<i32>::empty().with_key(KEY);
        assert_eq!(empty.with_values(|v| v + 1, |v| v + 1), empty);
    }

    #[test]
    fn test_make_inclusive() {
        let range = Range::new(1, 2).with_key(KEY);
        assert_eq!(range.make_inclusive(|v| v - 1, |v| v + 1), range);

        let range = Range::new_exclusive(1, 2).with_key(KEY);
        assert_eq!(range.make_inclusive(|v| v - 1, |v| v + 1), Range::new(0, 3).with_key(KEY));

        let range = Range::new_exclusive_to(1, 2).with_key(KEY);
        assert_eq!(range.make_inclusive(|v| v - 1, |v| v + 1), Range::new(1, 3).with_key(KEY));
    }

    #[test]
    fn test_make_exclusive() {
        let range = Range::new_exclusive(1, 2).with_key(KEY);
        assert_eq!(range.make_exclusive(|v| v - 1, |v| v + 1), range);

        let range = Range::new(1, 2).with_key(KEY);
        assert_eq!(
            range.make_exclusive(|v| v - 1, |v| v + 1),
            Range::new_exclusive(0, 3).with_key(KEY)
        );

        let range = Range::new_exclusive_from(1, 2).with_key(KEY);
        assert_eq!(
            range.make_exclusive(|v| v - 1, |v| v + 1),
            Range::new_exclusive(1, 3).with_key(KEY)
        );
    }

    #[test]
    fn test_make_inclusive_shrinks_to_empty() {
        let range = Range::new_exclusive(2, 3).with_key(KEY);
        assert!(range.make_inclusive(|v| v + 1, |v| v - 1).is_empty());
        // The key survives the collapse.
        assert_eq!(range.make_inclusive(|v| v + 1, |v| v - 1).key(), Some(&KEY));

        let range = Range::new(2, 3).with_key(KEY);
        assert!(range.make_exclusive(|v| v + 1, |v| v - 1).is_empty());
    }

    #[test]
    fn test_make_inclusive_unbounded_results() {
        let range = Range::new_exclusive(Some(1.0), Some(f64::INFINITY)).with_key(KEY);
        assert!(range.make_inclusive(|_| Some(f64::NEG_INFINITY), |v| v.map(|x| x + 1.0)).is_infinite());

        let range = Range::new(Some(f64::NEG_INFINITY), Some(2.0)).with_key(KEY);
        assert!(range.make_exclusive(|v| v.map(|x| x + 1.0), |_| Some(f64::INFINITY)).is_infinite());

        let infinite = Range::new(Some(f64::NEG_INFINITY), Some(f64::INFINITY)).with_key(KEY);
        assert_eq!(infinite.make_inclusive(|v| v.map(|x| x - 1.0), |v| v.map(|x| x + 1.0)), infinite);
    }

    #[test]
    fn test_make_round_trip() {
        let range = Range::new(1, 2).with_key(KEY);
        let there = range.make_exclusive(|v| v - 1, |v| v + 1);
        assert_eq!(there.make_inclusive(|v| v + 1, |v| v - 1), range);
    }

    #[test]
    fn test_containment_monotonicity() {
        let outer = Range::new(0.0, 10.0);
        let inner = Range::new_exclusive(2.0, 8.0);
        assert!(outer.contains_range(&inner));
        for probe in [2.5, 5.0, 7.9] {
            assert!(inner.contains(&probe));
            assert!(outer.contains(&probe));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::new(1, 2).to_string(), "[1..2]");
        assert_eq!(Range::new_exclusive(1, 2).to_string(), "(1..2)");
        assert_eq!(Range::new_exclusive_to(1, 2).to_string(), "[1..2)");
        assert_eq!(Range::<i32>::infinite().to_string(), "(-∞..+∞)");
        assert_eq!(Range::<i32>::empty().to_string(), "∅");
    }
}
