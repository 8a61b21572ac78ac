//! Console module: The engine tying storage and wrapping together.
//!
//! This module contains:
//! - [`Console`]: Owns one [`LineBuffer`](crate::LineBuffer), applies the
//!   streaming-append and wrapping policy on `write`, and re-probes the
//!   scroll-back capacity on `reconfigure`.

mod engine;

pub use engine::Console;
