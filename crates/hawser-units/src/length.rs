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

//! Length units backed by `f64`.
//!
//! `Meters` and `Centimeters` share a representation but are unrelated
//! types; converting between them is a deliberate, explicit act, never an
//! accident:
//!
//! ```compile_fail
//! use hawser_units::length::{Centimeters, Meters};
//!
//! let m = Meters::new(3.0);
//! let c: Centimeters = m; // different length units do not mix
//! ```

use hawser_core::tag::{
    Additive, Displayable, Equatable, Multiplicative, Negatable, Orderable, ValueTag,
};
use hawser_core::value::TaggedValue;

/// A tag type for lengths measured in meters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MetersTag;

impl ValueTag for MetersTag {
    const NAME: &'static str = "Meters";
}
impl Equatable for MetersTag {}
impl Orderable for MetersTag {}
impl Displayable for MetersTag {}
impl Additive for MetersTag {}
impl Multiplicative for MetersTag {}
impl Negatable for MetersTag {}

/// A length in meters.
pub type Meters = TaggedValue<f64, MetersTag>;

/// A tag type for lengths measured in centimeters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CentimetersTag;

impl ValueTag for CentimetersTag {
    const NAME: &'static str = "Centimeters";
}
impl Equatable for CentimetersTag {}
impl Orderable for CentimetersTag {}
impl Displayable for CentimetersTag {}
impl Additive for CentimetersTag {}
impl Multiplicative for CentimetersTag {}
impl Negatable for CentimetersTag {}

/// A length in centimeters.
pub type Centimeters = TaggedValue<f64, CentimetersTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_arithmetic() {
        let total = Meters::new(12.5) + Meters::new(7.5);
        assert_eq!(total, Meters::new(20.0));
        assert_eq!(total * 2.0, Meters::new(40.0));
        assert_eq!(-Meters::new(1.5), Meters::new(-1.5));
    }

    #[test]
    fn test_display_carries_unit_name() {
        assert_eq!(format!("{}", Meters::new(85.5)), "Meters(85.5)");
        assert_eq!(format!("{}", Centimeters::new(4.0)), "Centimeters(4)");
    }

    #[test]
    fn test_ordering() {
        assert!(Meters::new(10.0) < Meters::new(10.5));
    }

    #[test]
    fn test_small_integers_widen_into_length() {
        // u16 -> f64 is mantissa-exact.
        let m = Meters::from_widened(120u16);
        assert_eq!(m, Meters::new(120.0));
    }
}
