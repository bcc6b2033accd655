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

//! Discrete counting units backed by `u32`.
//!
//! `Containers` and `Vessels` both count things as `u32`, which is exactly
//! the situation tagged values exist for: a container count handed to a
//! berth-capacity check expecting vessels is a bug the compiler should
//! catch.
//!
//! ```compile_fail
//! use hawser_units::count::{Containers, Vessels};
//!
//! fn admit(v: Vessels) -> bool { *v.get() < 12 }
//!
//! let cargo = Containers::new(480);
//! admit(cargo); // counts of different things do not mix
//! ```

use hawser_core::tag::{
    Additive, Displayable, Equatable, Hashable, Multiplicative, Orderable, ValueTag,
};
use hawser_core::value::TaggedValue;
use num_traits::PrimInt;

/// A tag type for counted cargo containers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ContainersTag;

impl ValueTag for ContainersTag {
    const NAME: &'static str = "Containers";
}
impl Equatable for ContainersTag {}
impl Orderable for ContainersTag {}
impl Hashable for ContainersTag {}
impl Displayable for ContainersTag {}
impl Additive for ContainersTag {}
impl Multiplicative for ContainersTag {}

/// A number of cargo containers.
pub type Containers = TaggedValue<u32, ContainersTag>;

/// A tag type for counted vessels.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VesselsTag;

impl ValueTag for VesselsTag {
    const NAME: &'static str = "Vessels";
}
impl Equatable for VesselsTag {}
impl Orderable for VesselsTag {}
impl Hashable for VesselsTag {}
impl Displayable for VesselsTag {}
impl Additive for VesselsTag {}
impl Multiplicative for VesselsTag {}

/// A number of vessels.
pub type Vessels = TaggedValue<u32, VesselsTag>;

/// Sums a slice of like-tagged counts.
///
/// # Examples
///
/// ```rust
/// use hawser_units::count::{total, Containers};
///
/// let per_bay = [Containers::new(40), Containers::new(25), Containers::new(35)];
/// assert_eq!(total(&per_bay), Containers::new(100));
/// ```
pub fn total<T, G>(counts: &[TaggedValue<T, G>]) -> TaggedValue<T, G>
where
    T: PrimInt,
    G: Additive + Copy,
{
    counts
        .iter()
        .fold(TaggedValue::new(T::zero()), |acc, c| acc + *c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts_widen_from_narrower_integers() {
        let c = Containers::from_widened(500u16);
        assert_eq!(c, Containers::new(500));
    }

    #[test]
    fn test_counts_are_hashable() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Vessels::new(3)));
        assert!(!seen.insert(Vessels::new(3)));
        assert!(seen.insert(Vessels::new(4)));
    }

    #[test]
    fn test_total_of_empty_slice_is_zero() {
        assert_eq!(total::<u32, ContainersTag>(&[]), Containers::new(0));
    }

    #[test]
    fn test_total_accumulates() {
        let bays = [Containers::new(1), Containers::new(2), Containers::new(3)];
        assert_eq!(total(&bays), Containers::new(6));
    }

    #[test]
    fn test_checked_capacity_arithmetic() {
        let nearly_full = Containers::new(u32::MAX - 1);
        assert_eq!(nearly_full.checked_add(&Containers::new(2)), None);
        assert_eq!(
            nearly_full.checked_add(&Containers::new(1)),
            Some(Containers::new(u32::MAX))
        );
    }
}
