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

use rangekit_core::{Range, RangeBoundaryFrom, RangeBoundaryTo, RangeElement, ValueKind};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;

/// A maximal run of merged member ranges inside a [`CompositeRange`].
///
/// The `span` is the unkeyed covering range of the run; `members` are the
/// original keyed ranges that merged into it, ordered by their lower
/// boundary (ties keep insertion order). A segment always holds at least
/// one member.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSegment<T, K = ()> {
    span: Range<T>,
    members: SmallVec<[Range<T, K>; 2]>,
}

impl<T, K> RangeSegment<T, K>
where
    T: RangeElement,
{
    /// The covering range of this segment.
    #[inline]
    pub fn span(&self) -> &Range<T> {
        &self.span
    }

    /// The member ranges that merged into this segment.
    #[inline]
    pub fn members(&self) -> &[Range<T, K>] {
        &self.members
    }

    /// The number of member ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Iterates over the member ranges.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range<T, K>> {
        self.members.iter()
    }
}

impl<T, K> fmt::Display for RangeSegment<T, K>
where
    T: RangeElement + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.span)
    }
}

/// Returns `true` if a run ending at `to` continues through a member
/// starting at `from`: the member overlaps the run, or sits flush against
/// it with at least one of the two facing boundaries inclusive. Two
/// exclusive boundaries at the same value leave the point itself
/// uncovered, which is a genuine gap.
fn touches<T>(to: &RangeBoundaryTo<T>, from: &RangeBoundaryFrom<T>) -> bool
where
    T: RangeElement,
{
    if from.cmp_to(to) != Ordering::Greater {
        return true;
    }
    match (to.value(), from.value()) {
        (Some(upper), Some(lower)) => {
            upper.compare(lower) == Ordering::Equal && (to.is_inclusive() || from.is_inclusive())
        }
        _ => false,
    }
}

/// An immutable, normalized collection of ranges.
///
/// Construction takes any number of possibly overlapping keyed ranges,
/// drops empty ones, sorts the rest by lower boundary, and merges
/// overlapping or touching neighbors into disjoint [`RangeSegment`]s.
/// After that single pass every query runs against the sorted segment
/// list, so point lookups are binary searches.
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::Range;
/// # use rangekit_composite::CompositeRange;
///
/// let composite = CompositeRange::new(vec![
///     Range::new(1.0, 2.0).with_key("first shift"),
///     Range::new(1.5, 3.0).with_key("second shift"),
///     Range::new(5.0, 6.0).with_key("night shift"),
/// ]);
///
/// assert_eq!(composite.len(), 2);
/// assert!(composite.contains(&2.5));
/// assert!(!composite.contains(&4.0));
/// assert_eq!(composite.to_string(), "[1..3] ∪ [5..6]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeRange<T, K = ()> {
    segments: Vec<RangeSegment<T, K>>,
}

impl<T, K> CompositeRange<T, K>
where
    T: RangeElement,
{
    /// Builds a composite range from arbitrary member ranges. Empty
    /// members are dropped; the rest are sorted and merged into disjoint
    /// segments.
    pub fn new(ranges: Vec<Range<T, K>>) -> Self {
        Self { segments: Self::build(ranges) }
    }

    /// The composite range with no members.
    #[inline]
    pub fn empty() -> Self {
        Self { segments: Vec::new() }
    }

    fn build(mut ranges: Vec<Range<T, K>>) -> Vec<RangeSegment<T, K>> {
        ranges.retain(|range| range.is_not_empty());
        ranges.sort_by(|a, b| a.from().compare(b.from()));

        let mut iter = ranges.into_iter();
        let Some(first) = iter.next() else {
            return Vec::new();
        };

        let mut segments = Vec::new();
        let mut span_from = first.from().clone();
        let mut span_to = first.to().clone();
        let mut members: SmallVec<[Range<T, K>; 2]> = smallvec![first];

        for range in iter {
            if touches(&span_to, range.from()) {
                if span_to.compare(range.to()) == Ordering::Less {
                    span_to = range.to().clone();
                }
                members.push(range);
            } else {
                let from = std::mem::replace(&mut span_from, range.from().clone());
                let to = std::mem::replace(&mut span_to, range.to().clone());
                let done = std::mem::replace(&mut members, smallvec![]);
                segments.push(RangeSegment {
                    span: Range::with_boundaries(from, to),
                    members: done,
                });
                members.push(range);
            }
        }
        segments.push(RangeSegment {
            span: Range::with_boundaries(span_from, span_to),
            members,
        });
        segments
    }

    /// The sorted, disjoint segments.
    #[inline]
    pub fn segments(&self) -> &[RangeSegment<T, K>] {
        &self.segments
    }

    /// Iterates over the segments.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RangeSegment<T, K>> {
        self.segments.iter()
    }

    /// The number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the composite has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The unkeyed covering range of the whole composite, gaps included.
    /// The empty composite spans the empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    /// # use rangekit_composite::CompositeRange;
    ///
    /// let composite = CompositeRange::new(vec![Range::new(1, 2), Range::new(4, 5)]);
    /// assert_eq!(composite.span(), Range::new(1, 5));
    /// assert!(!composite.contains(&3));
    /// ```
    pub fn span(&self) -> Range<T> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                Range::with_boundaries(first.span.from().clone(), last.span.to().clone())
            }
            _ => Range::empty(),
        }
    }

    /// Returns `true` if some segment covers `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find_segment(value).is_some()
    }

    /// Binary-searches the segment covering `value`, if any. Unbounded
    /// probe values can only be covered by the outermost segments, so they
    /// short-circuit there.
    pub fn find_segment(&self, value: &T) -> Option<&RangeSegment<T, K>> {
        match value.kind() {
            ValueKind::Finite => {
                let idx = self.segments.partition_point(|s| s.span.ends_before(value));
                self.segments.get(idx).filter(|s| s.span.contains(value))
            }
            ValueKind::Unbounded | ValueKind::NegativeInfinity => {
                self.segments.first().filter(|s| s.span.contains(value))
            }
            ValueKind::PositiveInfinity => {
                self.segments.last().filter(|s| s.span.contains(value))
            }
        }
    }

    /// Iterates over the member ranges that individually contain `value`.
    /// A segment may cover a point that only some of its members contain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangekit_core::Range;
    /// # use rangekit_composite::CompositeRange;
    ///
    /// let composite = CompositeRange::new(vec![
    ///     Range::new(1.0, 2.0).with_key("a"),
    ///     Range::new(1.5, 3.0).with_key("b"),
    /// ]);
    /// let keys: Vec<_> = composite.ranges_containing(&2.5).map(|r| *r.key().unwrap()).collect();
    /// assert_eq!(keys, ["b"]);
    /// ```
    pub fn ranges_containing<'a>(&'a self, value: &'a T) -> impl Iterator<Item = &'a Range<T, K>> {
        self.find_segment(value)
            .into_iter()
            .flat_map(|segment| segment.members.iter())
            .filter(move |member| member.contains(value))
    }

    /// The contiguous run of segments sharing at least one point with
    /// `range`. An empty probe intersects nothing.
    pub fn intersecting_segments<K2>(&self, range: &Range<T, K2>) -> &[RangeSegment<T, K>] {
        if range.is_empty() {
            return &[];
        }
        let start = self.segments.partition_point(|s| s.span.ends_before_range(range));
        let end = self.segments.partition_point(|s| !s.span.starts_after_range(range));
        &self.segments[start..end]
    }

    /// Iterates over all member ranges, in segment order.
    pub fn ranges(&self) -> impl Iterator<Item = &Range<T, K>> {
        self.segments.iter().flat_map(|segment| segment.members.iter())
    }
}

impl<T, K> From<Range<T, K>> for CompositeRange<T, K>
where
    T: RangeElement,
{
    fn from(range: Range<T, K>) -> Self {
        Self::new(vec![range])
    }
}

impl<T, K> FromIterator<Range<T, K>> for CompositeRange<T, K>
where
    T: RangeElement,
{
    fn from_iter<I: IntoIterator<Item = Range<T, K>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T, K> fmt::Display for CompositeRange<T, K>
where
    T: RangeElement + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "∅");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ∪ ")?;
            }
            write!(f, "{}", segment.span)?;
        }
        Ok(())
    }
}
