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

//! # Value Tags and Capability Markers
//!
//! A [`ValueTag`] is a zero-size unit struct that discriminates otherwise
//! identical wrapper types at compile time. Two `TaggedValue`s over the same
//! representation but different tags are unrelated types: the compiler
//! rejects any attempt to mix them, and the tag itself never exists at
//! runtime.
//!
//! Capabilities are marker traits a tag opts into. Each marker unlocks a
//! family of operator implementations on the wrapper (equality, ordering,
//! arithmetic, printing, ...) without adding a single byte of storage:
//! the wrapper stays `#[repr(transparent)]` over its representation no
//! matter how many markers the tag carries.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::tag::{Additive, Equatable, ValueTag};
//! use hawser_core::value::TaggedValue;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct FathomsTag;
//!
//! impl ValueTag for FathomsTag {
//!     const NAME: &'static str = "Fathoms";
//! }
//! impl Equatable for FathomsTag {}
//! impl Additive for FathomsTag {}
//!
//! type Fathoms = TaggedValue<u32, FathomsTag>;
//!
//! let depth = Fathoms::new(12) + Fathoms::new(3);
//! assert_eq!(depth, Fathoms::new(15));
//! ```

/// A trait to tag wrapped values with a name for debugging and display purposes.
///
/// Implementors are expected to be zero-size unit structs. The tag exists
/// purely at the type level; `NAME` is the only thing ever read from it.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::tag::ValueTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct KnotsTag;
///
/// impl ValueTag for KnotsTag {
///     const NAME: &'static str = "Knots";
/// }
/// ```
pub trait ValueTag: Clone {
    const NAME: &'static str;
}

/// Capability marker: values with this tag support `==` and `!=`.
///
/// Unlocks `PartialEq` (and `Eq` when the representation is `Eq`) on the
/// wrapper. Two wrapped values compare equal exactly when their wrapped
/// representations compare equal.
pub trait Equatable: ValueTag {}

/// Capability marker: values with this tag form a total or partial order.
///
/// Unlocks `PartialOrd` (and `Ord` when the representation is `Ord`) on the
/// wrapper. Ordering capability implies equality capability.
pub trait Orderable: Equatable {}

/// Capability marker: values with this tag can be hashed.
///
/// Unlocks `Hash` on the wrapper, delegating to the representation's hash.
pub trait Hashable: ValueTag {}

/// Capability marker: values with this tag have a human-readable rendering.
///
/// Unlocks `Display` on the wrapper, formatted as `Name(value)` using
/// [`ValueTag::NAME`].
pub trait Displayable: ValueTag {}

/// Capability marker: values with this tag can be added and subtracted.
///
/// Unlocks `+`, `-`, `+=`, and `-=` between two wrappers carrying the same
/// tag, plus the checked variants when the representation supports them.
pub trait Additive: ValueTag {}

/// Capability marker: values with this tag scale by a raw factor.
///
/// Unlocks `*`, `/`, `%` and their assignment forms with the *representation*
/// type on the right-hand side. Scaling deliberately takes a raw factor, not
/// another tagged value: the product of two like-tagged quantities is not a
/// quantity of the same kind.
pub trait Multiplicative: ValueTag {}

/// Capability marker: values with this tag can be negated.
///
/// Unlocks unary `-` on the wrapper.
pub trait Negatable: ValueTag {}
