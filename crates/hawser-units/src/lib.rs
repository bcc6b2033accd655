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

//! # Hawser Units
//!
//! **Concrete measurement and counting units built on `hawser-core`.**
//!
//! This crate declares the tags and aliases a typical port-logistics
//! pipeline needs, one domain per module. Each unit opts into exactly the
//! capabilities that make sense for it; everything else stays a compile
//! error.
//!
//! ## Modules
//!
//! - `length`: `Meters`, `Centimeters` (`f64`-backed).
//! - `time`: `Seconds` (`f64`-backed, accepts mantissa-exact integer ticks).
//! - `count`: `Containers`, `Vessels` (`u32`-backed, hashable), plus a
//!   generic `total` over any integer-backed additive count.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::param::Param;
//! use hawser_units::length::{Meters, MetersTag};
//! use hawser_units::time::{Seconds, SecondsTag};
//!
//! const LINE: Param<f64, MetersTag> = Param::new();
//! const SLACK_EVERY: Param<f64, SecondsTag> = Param::new();
//!
//! fn payout_rate(line: Meters, slack_every: Seconds) -> f64 {
//!     line.get() / slack_every.get()
//! }
//!
//! let rate = payout_rate(LINE.set(30.0), SLACK_EVERY.set(60.0));
//! assert_eq!(rate, 0.5);
//! ```

pub mod count;
pub mod length;
pub mod time;
