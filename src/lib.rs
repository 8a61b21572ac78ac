//! # Backscroll
//!
//! A bounded scroll-back console core with oracle-measured line wrapping.
//!
//! Backscroll accepts streamed text, wraps it against a pixel-width budget
//! using an external text-measurement oracle, and keeps the most recent
//! lines in a fixed-capacity circular buffer for newest-first presentation.
//! Rendering, font loading, and input handling are the host's business;
//! this crate only owns the data structures and the wrapping policy.
//!
//! ## Core Concepts
//!
//! - **Circular line store**: A rotating cursor over fixed slots; appending
//!   past capacity silently evicts the oldest line
//! - **Measured wrapping**: An adaptive probe finds maximal fragments while
//!   minimizing calls to the (possibly expensive) measurement oracle
//! - **Streaming append**: A write that does not end in a newline leaves a
//!   partial line that the next write continues
//!
//! ## Example
//!
//! ```rust
//! use backscroll::{Console, MonospaceMetrics};
//!
//! let mut console = Console::new();
//! // An 80x24-cell display over an 8x16 pixel font.
//! console.reconfigure(640.0, 384.0, MonospaceMetrics::new(8.0, 16.0))?;
//!
//! console.write("hello, ")?;
//! console.write("world\n")?;
//!
//! let newest_first: Vec<&str> = console.lines().collect();
//! assert_eq!(newest_first, ["", "hello, world"]);
//! # Ok::<(), backscroll::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod console;
pub mod error;
pub mod measure;
pub mod wrap;

// Re-exports for convenience
pub use buffer::LineBuffer;
pub use console::Console;
pub use error::ConsoleError;
pub use measure::{Extent, Measure, MonospaceMetrics};
pub use wrap::{wrap, Fragments};
