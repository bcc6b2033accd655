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

//! # Non-Owning Tagged Views
//!
//! [`TaggedRef`] is the borrowing counterpart of `TaggedValue`: the same tag,
//! the same capability gating, but referencing storage it does not own. It
//! exists for pass-through scenarios where a callee should observe or mutate
//! a tagged value in place without taking ownership of it.
//!
//! The view holds an exclusive borrow, so its validity is tied to the
//! borrowed value by the compiler instead of by caller discipline: the owner
//! is inaccessible while the view lives, and every mutation made through the
//! view is observable through the owner afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::tag::ValueTag;
//! use hawser_core::value::TaggedValue;
//! use hawser_core::view::TaggedRef;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct BallastTag;
//! impl ValueTag for BallastTag { const NAME: &'static str = "Ballast"; }
//!
//! fn drain(mut tank: TaggedRef<'_, u32, BallastTag>) {
//!     *tank.get_mut() = 0;
//! }
//!
//! let mut tank = TaggedValue::<u32, BallastTag>::new(800);
//! drain(tank.as_ref_view());
//! assert_eq!(*tank.get(), 0);
//! ```

use crate::tag::{Displayable, Equatable, Hashable, Orderable, ValueTag};
use crate::value::{TaggedValue, Wrapped};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A non-owning, mutable view of a tagged value's storage.
///
/// Carries the same tag `G` as the value it was borrowed from, so views are
/// just as resistant to mixing as owned values. Deliberately neither `Clone`
/// nor `Copy`: the borrow it wraps is exclusive.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::tag::ValueTag;
/// # use hawser_core::value::TaggedValue;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct TrimTag;
/// impl ValueTag for TrimTag { const NAME: &'static str = "Trim"; }
///
/// let mut v = TaggedValue::<i32, TrimTag>::new(2);
/// {
///     let mut view = v.as_ref_view();
///     *view.get_mut() += 1;
/// }
/// assert_eq!(*v.get(), 3);
/// ```
pub struct TaggedRef<'a, T, G> {
    value: &'a mut T,
    _tag: PhantomData<G>,
}

impl<'a, T, G> TaggedRef<'a, T, G> {
    /// Creates a view over borrowed storage.
    #[inline(always)]
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns a shared reference to the referenced representation.
    #[inline(always)]
    pub fn get(&self) -> &T {
        &*self.value
    }

    /// Returns a mutable reference to the referenced representation.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut *self.value
    }

    /// Releases the view, returning the underlying borrow.
    #[inline]
    pub fn into_mut(self) -> &'a mut T {
        self.value
    }
}

impl<'a, T, G> From<&'a mut TaggedValue<T, G>> for TaggedRef<'a, T, G> {
    #[inline]
    fn from(value: &'a mut TaggedValue<T, G>) -> Self {
        Self::new(value.get_mut())
    }
}

impl<T, G> Wrapped for TaggedRef<'_, T, G>
where
    G: ValueTag,
{
    type Inner = T;
    type Tag = G;

    #[inline(always)]
    fn value(&self) -> &T {
        &*self.value
    }

    #[inline(always)]
    fn value_mut(&mut self) -> &mut T {
        &mut *self.value
    }
}

impl<T, G> std::fmt::Debug for TaggedRef<'_, T, G>
where
    T: std::fmt::Debug,
    G: ValueTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", G::NAME, self.get())
    }
}

impl<T, G> std::fmt::Display for TaggedRef<'_, T, G>
where
    T: std::fmt::Display,
    G: Displayable,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", G::NAME, self.get())
    }
}

impl<T, G> PartialEq for TaggedRef<'_, T, G>
where
    T: PartialEq,
    G: Equatable,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T, G> Eq for TaggedRef<'_, T, G>
where
    T: Eq,
    G: Equatable,
{
}

impl<T, G> PartialOrd for TaggedRef<'_, T, G>
where
    T: PartialOrd,
    G: Orderable,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T, G> Ord for TaggedRef<'_, T, G>
where
    T: Ord,
    G: Orderable,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T, G> Hash for TaggedRef<'_, T, G>
where
    T: Hash,
    G: Hashable,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Additive, Multiplicative, Negatable};

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct GaugeTag;

    impl ValueTag for GaugeTag {
        const NAME: &'static str = "Gauge";
    }
    impl Equatable for GaugeTag {}
    impl Orderable for GaugeTag {}
    impl Hashable for GaugeTag {}
    impl Displayable for GaugeTag {}
    impl Additive for GaugeTag {}
    impl Multiplicative for GaugeTag {}
    impl Negatable for GaugeTag {}

    type Gauge = TaggedValue<i32, GaugeTag>;

    #[test]
    fn test_mutation_through_view_is_observable() {
        let mut owner = Gauge::new(10);
        {
            let mut view = owner.as_ref_view();
            *view.get_mut() = 25;
        }
        assert_eq!(*owner.get(), 25);
    }

    #[test]
    fn test_view_from_conversion() {
        let mut owner = Gauge::new(4);
        let view = TaggedRef::from(&mut owner);
        assert_eq!(*view.get(), 4);
    }

    #[test]
    fn test_view_comparisons_match_value_comparisons() {
        let mut a = Gauge::new(1);
        let mut b = Gauge::new(2);
        let equal_on_values = a == Gauge::new(1);

        let va = a.as_ref_view();
        let vb = b.as_ref_view();
        assert!(va < vb);
        assert_ne!(va, vb);
        assert!(equal_on_values);
    }

    #[test]
    fn test_view_formatting_matches_value_formatting() {
        let mut owner = Gauge::new(7);
        let rendered_owner = format!("{}", owner);
        let view = owner.as_ref_view();
        assert_eq!(format!("{}", view), rendered_owner);
        assert_eq!(format!("{:?}", view), "Gauge(7)");
    }

    #[test]
    fn test_into_mut_releases_the_borrow() {
        let mut owner = Gauge::new(3);
        let raw = owner.as_ref_view().into_mut();
        *raw += 1;
        assert_eq!(*owner.get(), 4);
    }

    #[test]
    fn test_generic_code_over_wrapped_treats_both_alike() {
        fn bump<S>(s: &mut S)
        where
            S: Wrapped<Inner = i32>,
        {
            *s.value_mut() += 1;
        }

        let mut owner = Gauge::new(0);
        bump(&mut owner);
        {
            let mut view = owner.as_ref_view();
            bump(&mut view);
        }
        assert_eq!(*owner.get(), 2);
    }
}
