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

//! # Loss-Free Conversion Policy
//!
//! [`WidenInto`] is the single gate through which a tagged value may be
//! constructed from a representation other than its own. An implementation
//! exists only for conversions that preserve every representable source
//! value exactly; narrowing pairs have no implementation, so a narrowing
//! construction is a compile error rather than a silently truncating
//! runtime conversion.
//!
//! ## Admitted conversions
//!
//! Two disjoint families are implemented:
//!
//! - **Strict widenings**: an integer into a strictly wider integer that can
//!   represent its full range (unsigned into wider unsigned or wider signed,
//!   signed into wider signed), and `f32` into `f64`.
//! - **Mantissa-exact integers into `f64`**: integers of at most 4 bytes fit
//!   exactly within `f64`'s 53-bit mantissa, so the conversion loses nothing
//!   even though it crosses the integer/floating-point kind boundary. This
//!   is the *only* kind-crossing family: 8-byte integers exceed the mantissa
//!   and are rejected, and `f32`'s 24-bit mantissa earns no integer sources
//!   at all.
//!
//! Trait coherence guarantees at most one implementation per source/target
//! pair, so for any conversion exactly one path is viable or the program
//! does not compile. There is no fallback runtime behavior.
//!
//! `usize` and `isize` appear in neither family: their width is platform
//! dependent, so no cross-type conversion involving them is universally
//! loss-free.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::convert::WidenInto;
//!
//! let wide: u64 = 7u16.widen();
//! assert_eq!(wide, 7);
//!
//! let exact: f64 = (-3i32).widen();
//! assert_eq!(exact, -3.0);
//! ```

/// A value-preserving conversion from `Self` into `T`.
///
/// Every implementation converts without loss of range or precision: for
/// all source values `v`, `v.widen()` represents exactly `v`. The trait is
/// public so user-defined representations can admit their own exactly
/// preserving conversions into wrapper construction.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::convert::WidenInto;
///
/// let x: i64 = 250u8.widen();
/// assert_eq!(x, 250);
/// ```
///
/// Narrowing pairs have no implementation and fail to compile:
///
/// ```compile_fail
/// use hawser_core::convert::WidenInto;
///
/// let x: u32 = 5u64.widen(); // u64 does not fit in u32
/// ```
///
/// An 8-byte integer does not fit `f64`'s mantissa and is rejected as well:
///
/// ```compile_fail
/// use hawser_core::convert::WidenInto;
///
/// let x: f64 = 5i64.widen(); // not exact beyond 2^53
/// ```
pub trait WidenInto<T>: Sized {
    /// Converts `self` into `T` without loss of range or precision.
    fn widen(self) -> T;
}

macro_rules! widen_impl {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl WidenInto<$to> for $from {
                #[inline(always)]
                fn widen(self) -> $to {
                    <$to>::from(self)
                }
            }
        )+
    };
}

// Strict widenings: the target represents the source's full range.
widen_impl!(u8 => u16, u32, u64, u128, i16, i32, i64, i128);
widen_impl!(u16 => u32, u64, u128, i32, i64, i128);
widen_impl!(u32 => u64, u128, i64, i128);
widen_impl!(u64 => u128, i128);
widen_impl!(i8 => i16, i32, i64, i128);
widen_impl!(i16 => i32, i64, i128);
widen_impl!(i32 => i64, i128);
widen_impl!(i64 => i128);
widen_impl!(f32 => f64);

macro_rules! mantissa_exact_impl {
    ($($from:ty),+ $(,)?) => {
        $(
            impl WidenInto<f64> for $from {
                #[inline(always)]
                fn widen(self) -> f64 {
                    f64::from(self)
                }
            }
        )+
    };
}

// Mantissa-exact integers into f64: every value of an integer type of at
// most 4 bytes fits within the 53-bit mantissa. Do not extend this list
// without re-deriving exact-representability for the new pair.
mantissa_exact_impl!(u8, u16, u32, i8, i16, i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening_preserves_value() {
        let x: u64 = u32::MAX.widen();
        assert_eq!(x, u32::MAX as u64);

        let y: i32 = i16::MIN.widen();
        assert_eq!(y, i16::MIN as i32);

        let z: i64 = u32::MAX.widen();
        assert_eq!(z, u32::MAX as i64);
    }

    #[test]
    fn test_unsigned_into_wider_signed() {
        let x: i16 = 255u8.widen();
        assert_eq!(x, 255);

        let y: i128 = u64::MAX.widen();
        assert_eq!(y, u64::MAX as i128);
    }

    #[test]
    fn test_float_widening() {
        let x: f64 = 1.5f32.widen();
        assert_eq!(x, 1.5);

        let max: f64 = f32::MAX.widen();
        assert_eq!(max, f32::MAX as f64);
    }

    #[test]
    fn test_mantissa_exact_bounds() {
        // The extremes of every admitted integer source survive the trip
        // into f64 exactly.
        let lo: f64 = i32::MIN.widen();
        assert_eq!(lo, -2147483648.0);

        let hi: f64 = u32::MAX.widen();
        assert_eq!(hi, 4294967295.0);

        let tiny: f64 = i8::MIN.widen();
        assert_eq!(tiny, -128.0);
    }

    #[test]
    fn test_widen_is_exact_for_every_u16() {
        for v in 0..=u16::MAX {
            let f: f64 = v.widen();
            assert_eq!(f as u16, v);
        }
    }
}
