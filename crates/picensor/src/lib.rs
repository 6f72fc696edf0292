//! Censors the digits of π and streams the result as UTF-8 bytes.
//!
//! The transform is tiny: given a numeral beginning `"3."`, every fractional
//! digit that is strictly smaller than the digit before it is replaced with
//! `'*'`, and the whole thing is written to an async byte sink. The call
//! returns how many positions were censored.
//!
//! ```text
//! 3.1415926535  ->  3.14*59*6**5  (4 censored)
//! ```
//!
//! The interesting part is not the rule but the allocation profile:
//! [`write_censored`] encodes the numeral into a pooled scratch buffer,
//! censors it in place inside that buffer, and writes it out in a single
//! call, so a warm process performs no per-invocation heap allocation.
//! The naive string-splitting renditions of the same rule live in
//! `benches/censor_strategies.rs` for comparison only.

mod censor;
mod error;
mod pool;
mod scan;

#[cfg(test)]
mod tests;

pub use censor::{PREFIX, write_censored};
pub use error::CensorError;
pub use scan::{PLACEHOLDER, censor_fraction};
