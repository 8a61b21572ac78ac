//! Measure: The text-measurement oracle interface.
//!
//! The console never rasterizes text itself. Wrapping and capacity probing
//! both depend on an external oracle that reports the rendered size of a
//! string for the currently loaded font. The oracle is injected per call
//! site as a [`Measure`] capability rather than stored as hidden global font
//! state, which keeps the wrapping and capacity logic testable with
//! synthetic measurers.
//!
//! [`MonospaceMetrics`] is the built-in oracle for fixed-cell fonts, backed
//! by `unicode-width` display columns.

use unicode_width::UnicodeWidthStr;

/// Rendered size of a piece of text, in the oracle's units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Horizontal extent of the widest line.
    pub width: f32,
    /// Vertical extent of all lines together.
    pub height: f32,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A text-measurement oracle.
///
/// Implementations must be deterministic for a fixed font/metrics state:
/// the same input always measures to the same extent. Measurement may be
/// expensive; the wrapping probe is designed around minimizing calls.
pub trait Measure {
    /// Measure the rendered size of `text`.
    fn measure(&self, text: &str) -> Extent;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Extent,
{
    fn measure(&self, text: &str) -> Extent {
        self(text)
    }
}

/// Metrics for a fixed-cell (monospace) font.
///
/// Width is the widest line in display columns times the cell width; height
/// is the line count times the cell height. Display columns come from
/// `unicode-width`, so wide CJK glyphs count as two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance of one display column.
    pub cell_width: f32,
    /// Vertical advance of one line.
    pub cell_height: f32,
}

impl MonospaceMetrics {
    /// Create metrics with the given cell size.
    #[inline]
    pub const fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }
}

impl Default for MonospaceMetrics {
    /// A typical 8x16 pixel cell.
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

#[allow(clippy::cast_precision_loss)]
impl Measure for MonospaceMetrics {
    fn measure(&self, text: &str) -> Extent {
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(UnicodeWidthStr::width(line));
        }
        Extent::new(
            widest as f32 * self.cell_width,
            lines as f32 * self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_single_line() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let extent = metrics.measure("hello");
        assert_eq!(extent, Extent::new(40.0, 16.0));
    }

    #[test]
    fn test_monospace_widest_line_wins() {
        let metrics = MonospaceMetrics::new(1.0, 1.0);
        let extent = metrics.measure("ab\nlonger\nc");
        assert_eq!(extent, Extent::new(6.0, 3.0));
    }

    #[test]
    fn test_monospace_empty_text_is_one_line() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let extent = metrics.measure("");
        assert_eq!(extent, Extent::new(0.0, 16.0));
    }

    #[test]
    fn test_monospace_wide_glyphs_count_double() {
        let metrics = MonospaceMetrics::new(1.0, 1.0);
        let extent = metrics.measure("日本");
        assert_eq!(extent.width, 4.0);
    }

    #[test]
    fn test_closure_measurer() {
        let by_len = |s: &str| Extent::new(s.len() as f32, 1.0);
        assert_eq!(by_len.measure("abc").width, 3.0);
    }
}
