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

//! Time units backed by `f64`.
//!
//! Durations routinely originate from integer tick counters; `Seconds`
//! accepts any integer source that fits `f64`'s mantissa exactly, and
//! rejects 8-byte counters that would not:
//!
//! ```compile_fail
//! use hawser_units::time::Seconds;
//!
//! let uptime: u64 = 1_234_567;
//! let s = Seconds::from_widened(uptime); // u64 -> f64 is not exact
//! ```

use hawser_core::tag::{
    Additive, Displayable, Equatable, Multiplicative, Orderable, ValueTag,
};
use hawser_core::value::TaggedValue;

/// A tag type for durations measured in seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SecondsTag;

impl ValueTag for SecondsTag {
    const NAME: &'static str = "Seconds";
}
impl Equatable for SecondsTag {}
impl Orderable for SecondsTag {}
impl Displayable for SecondsTag {}
impl Additive for SecondsTag {}
impl Multiplicative for SecondsTag {}

/// A duration in seconds.
pub type Seconds = TaggedValue<f64, SecondsTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_from_integer_ticks() {
        let s = Seconds::from_widened(90u32);
        assert_eq!(s, Seconds::new(90.0));

        let negative = Seconds::from_widened(-30i32);
        assert_eq!(negative, Seconds::new(-30.0));
    }

    #[test]
    fn test_seconds_accumulate() {
        let mut elapsed = Seconds::default();
        elapsed += Seconds::new(1.5);
        elapsed += Seconds::new(0.5);
        assert_eq!(elapsed, Seconds::new(2.0));
    }

    #[test]
    fn test_scaling_a_duration() {
        assert_eq!(Seconds::new(10.0) / 4.0, Seconds::new(2.5));
    }
}
