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

//! # Named-Parameter Builders
//!
//! [`Param`] lets call sites name the quantity they are passing. A function
//! taking several like-represented tagged values can export one `Param`
//! constant per parameter; callers then write `WIDTH.set(3.0)` instead of a
//! bare positional `3.0`, and the compiler rejects any attempt to hand the
//! resulting value to the wrong parameter.
//!
//! A `Param` is a stateless transient: each build operation consumes it and
//! yields a fresh owned value. It is deliberately neither `Clone` nor `Copy`
//! so a single instance cannot be stashed and shared; `const` promotion
//! already gives every mention of a `Param` constant its own instance.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::param::Param;
//! use hawser_core::tag::ValueTag;
//! use hawser_core::value::TaggedValue;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct LengthTag;
//! impl ValueTag for LengthTag { const NAME: &'static str = "Length"; }
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct BreadthTag;
//! impl ValueTag for BreadthTag { const NAME: &'static str = "Breadth"; }
//!
//! type Length = TaggedValue<f64, LengthTag>;
//! type Breadth = TaggedValue<f64, BreadthTag>;
//!
//! const LENGTH: Param<f64, LengthTag> = Param::new();
//! const BREADTH: Param<f64, BreadthTag> = Param::new();
//!
//! fn deck_area(l: Length, b: Breadth) -> f64 {
//!     l.get() * b.get()
//! }
//!
//! let area = deck_area(LENGTH.set(120.0), BREADTH.set(20.0));
//! assert_eq!(area, 2400.0);
//! ```

use crate::convert::WidenInto;
use crate::tag::ValueTag;
use crate::value::TaggedValue;
use std::marker::PhantomData;

/// A transient builder producing a [`TaggedValue`] per build operation.
///
/// Owns nothing and carries no state; the phantom parameters pin down which
/// tagged value it builds. The build operations follow the same construction
/// policy as the wrapper itself: [`Param::set`] takes exactly the
/// representation type, [`Param::set_widened`] takes anything that widens
/// into it without loss, and narrowing has no path.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::param::Param;
/// # use hawser_core::tag::ValueTag;
/// # use hawser_core::value::TaggedValue;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MooringsTag;
/// impl ValueTag for MooringsTag { const NAME: &'static str = "Moorings"; }
///
/// let m = Param::<u32, MooringsTag>::new().set(6);
/// assert_eq!(*m.get(), 6);
/// ```
///
/// Narrowing assignment is rejected at compile time:
///
/// ```compile_fail
/// # use hawser_core::param::Param;
/// # use hawser_core::tag::ValueTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MooringsTag;
/// impl ValueTag for MooringsTag { const NAME: &'static str = "Moorings"; }
///
/// let m = Param::<u32, MooringsTag>::new().set_widened(6u64);
/// ```
pub struct Param<T, G> {
    _build: PhantomData<fn() -> TaggedValue<T, G>>,
}

impl<T, G> Param<T, G> {
    /// Creates a new transient builder.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _build: PhantomData,
        }
    }

    /// Builds a tagged value from exactly the representation type.
    ///
    /// Equivalent to [`TaggedValue::new`]; the builder only adds the
    /// parameter name at the call site.
    #[inline]
    pub fn set(self, value: T) -> TaggedValue<T, G> {
        TaggedValue::new(value)
    }

    /// Builds a tagged value from a representation that widens into `T`
    /// without loss, under the same policy as
    /// [`TaggedValue::from_widened`].
    #[inline]
    pub fn set_widened<U>(self, value: U) -> TaggedValue<T, G>
    where
        U: WidenInto<T>,
    {
        TaggedValue::from_widened(value)
    }
}

impl<T, G> Default for Param<T, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> std::fmt::Debug for Param<T, G>
where
    G: ValueTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Param({})", G::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Equatable;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct WinchesTag;

    impl ValueTag for WinchesTag {
        const NAME: &'static str = "Winches";
    }
    impl Equatable for WinchesTag {}

    type Winches = TaggedValue<i32, WinchesTag>;

    const WINCHES: Param<i32, WinchesTag> = Param::new();

    #[test]
    fn test_set_matches_direct_construction() {
        assert_eq!(WINCHES.set(5), Winches::new(5));
    }

    #[test]
    fn test_set_widened_follows_conversion_policy() {
        assert_eq!(WINCHES.set_widened(5i16), Winches::new(5));
    }

    #[test]
    fn test_const_param_yields_fresh_instances() {
        // Each mention of the constant is its own transient; building twice
        // must not require Clone or Copy.
        let a = WINCHES.set(1);
        let b = WINCHES.set(2);
        assert_eq!(a, Winches::new(1));
        assert_eq!(b, Winches::new(2));
    }

    #[test]
    fn test_debug_names_the_parameter() {
        assert_eq!(format!("{:?}", Param::<i32, WinchesTag>::new()), "Param(Winches)");
    }
}
