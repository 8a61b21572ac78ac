//! Buffer module: Bounded storage for scroll-back lines.
//!
//! This module contains:
//! - [`LineBuffer`]: A fixed-capacity circular store with a rotating
//!   newest-line cursor, read back newest-first.

mod line_buffer;

pub use line_buffer::LineBuffer;
