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

//! # Element Classification
//!
//! The [`RangeElement`] trait is the seam between the range algebra and
//! the value domain it operates on. It supplies two things:
//!
//! - the total order used for every boundary comparison, and
//! - a classification telling boundary construction which raw values are
//!   really "unbounded" markers (`None`, `±∞`) rather than finite points.
//!
//! Primitives get their natural order. User types implement the trait
//! directly and may choose any total order, which plays the role of an
//! externally supplied comparer.

use num_traits::Float;
use std::cmp::Ordering;

/// Classification of a raw value prior to boundary construction.
///
/// Boundary constructors inspect this to decide whether a value is stored
/// as a finite point or normalized into the `Infinite` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An ordinary finite value, stored and compared as-is.
    Finite,
    /// "No value" in the domain's own encoding (e.g. `None`). Valid as an
    /// unbounded marker on either side of a range.
    Unbounded,
    /// The domain's negative infinity. Valid as an unbounded lower
    /// boundary; rejected as an upper boundary value.
    NegativeInfinity,
    /// The domain's positive infinity. Valid as an unbounded upper
    /// boundary; rejected as a lower boundary value.
    PositiveInfinity,
}

/// A value type usable as a range element.
///
/// `compare` must be a total order consistent with the type's
/// [`PartialEq`]: `compare` returning [`Ordering::Equal`] implies `==`.
/// `compare` is never invoked on values that classify as non-[`Finite`]
/// (those are normalized into sentinels before they are ever stored).
///
/// [`Finite`]: ValueKind::Finite
///
/// # Examples
///
/// ```rust
/// # use rangekit_core::element::{RangeElement, ValueKind};
/// use std::cmp::Ordering;
///
/// assert_eq!(1.kind(), ValueKind::Finite);
/// assert_eq!(f64::INFINITY.kind(), ValueKind::PositiveInfinity);
/// assert_eq!(None::<i32>.kind(), ValueKind::Unbounded);
/// assert_eq!(1.compare(&2), Ordering::Less);
/// ```
pub trait RangeElement: Clone + PartialEq {
    /// Classifies the value. Defaults to [`ValueKind::Finite`].
    #[inline]
    fn kind(&self) -> ValueKind {
        ValueKind::Finite
    }

    /// Compares two values under the domain's total order.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_range_element_for_ord {
    ($t:ty) => {
        impl RangeElement for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    };
}

macro_rules! impl_range_element_for_float {
    ($t:ty) => {
        impl RangeElement for $t {
            #[inline]
            fn kind(&self) -> ValueKind {
                if Float::is_infinite(*self) {
                    if Float::is_sign_positive(*self) {
                        ValueKind::PositiveInfinity
                    } else {
                        ValueKind::NegativeInfinity
                    }
                } else {
                    ValueKind::Finite
                }
            }

            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    };
}

impl_range_element_for_ord!(i8);
impl_range_element_for_ord!(u8);
impl_range_element_for_ord!(i16);
impl_range_element_for_ord!(u16);
impl_range_element_for_ord!(i32);
impl_range_element_for_ord!(u32);
impl_range_element_for_ord!(i64);
impl_range_element_for_ord!(u64);
impl_range_element_for_ord!(i128);
impl_range_element_for_ord!(u128);
impl_range_element_for_ord!(isize);
impl_range_element_for_ord!(usize);
impl_range_element_for_ord!(char);
impl_range_element_for_ord!(String);

impl_range_element_for_float!(f32);
impl_range_element_for_float!(f64);

impl RangeElement for &str {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

/// `None` is the unbounded marker; `Some` values classify and compare as
/// the wrapped value does. `None` sorts before every `Some` value, which
/// matters only for raw-value probes such as [`Range::adjust`]; as a
/// boundary value, `None` normalizes into the `Infinite` sentinel and
/// never participates in a value comparison.
///
/// [`Range::adjust`]: crate::range::Range::adjust
impl<T> RangeElement for Option<T>
where
    T: RangeElement,
{
    #[inline]
    fn kind(&self) -> ValueKind {
        match self {
            None => ValueKind::Unbounded,
            Some(value) => value.kind(),
        }
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}
