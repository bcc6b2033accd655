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

//! # Hawser Core
//!
//! Zero-cost tagged value types: wrappers that keep semantically different
//! quantities apart even when they share a primitive representation, with
//! opt-in operator capabilities and a loss-free construction policy. The
//! crate has no runtime failure surface of its own; every misuse it guards
//! against is rejected at compile time.
//!
//! ## Modules
//!
//! - `tag`: The `ValueTag` discriminator trait and the capability marker
//!   traits a tag opts into (equality, ordering, hashing, printing,
//!   arithmetic).
//! - `convert`: The `WidenInto` conversion policy admitting exactly the
//!   loss-free representation changes, including the single documented
//!   small-integer-into-`f64` exception.
//! - `value`: `TaggedValue<T, G>`, the transparent owning wrapper, plus the
//!   `Wrapped` accessor seam generic extensions are written against.
//! - `view`: `TaggedRef`, the non-owning borrowing counterpart.
//! - `param`: `Param`, a transient builder naming parameters at call sites.
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in measurement-heavy
//! pipelines, reducing accidental bugs (mixed-up quantities, silently
//! truncating conversions) while keeping runtime overhead at zero.
//!
//! Refer to each module for detailed APIs and examples.

pub mod convert;
pub mod param;
pub mod tag;
pub mod value;
pub mod view;
