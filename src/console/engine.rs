//! `Console`: The scroll-back console engine.
//!
//! Composes a [`LineBuffer`] with the wrapping probe and the policy for
//! streamed text: explicit newlines start fresh lines, everything else
//! continues the current partial line, and over-budget segments are wrapped
//! against the configured width before entering the buffer.

use log::{debug, trace};

use crate::buffer::LineBuffer;
use crate::error::ConsoleError;
use crate::measure::Measure;
use crate::wrap::wrap;

/// Active display metrics, present once the console is configured.
#[derive(Debug)]
struct Metrics<M> {
    /// Maximum permissible measured line width.
    width_budget: f32,
    /// The measurement oracle for the current font.
    measurer: M,
}

/// A bounded scroll-back text console.
///
/// The console accepts streamed text through [`write`](Self::write), wraps
/// it against the configured width budget, and keeps the most recent lines
/// in a circular [`LineBuffer`] sized to the configured height budget.
/// Presentation reads the result newest-first through
/// [`lines`](Self::lines).
///
/// A fresh console is unconfigured and rejects writes; call
/// [`reconfigure`](Self::reconfigure) once metrics are known, and again on
/// any display or font change.
#[derive(Debug)]
pub struct Console<M> {
    /// Scroll-back storage, capacity maintained by `reconfigure`.
    buffer: LineBuffer,
    /// `Some` once metrics have been configured.
    metrics: Option<Metrics<M>>,
}

impl<M: Measure> Console<M> {
    /// Create an unconfigured console holding a single empty line.
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            metrics: None,
        }
    }

    /// Whether metrics have been established.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.metrics.is_some()
    }

    /// Number of scroll-back lines the console currently addresses.
    #[inline]
    pub fn line_capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Establish display metrics and resize the scroll-back to fit.
    ///
    /// The capacity is found by probing the measurer: starting from a
    /// single-line `"."` string, one more probe line is appended while the
    /// cumulative measured height stays within `height_budget`; the final
    /// line count becomes the buffer capacity. Existing lines survive the
    /// resize, oldest evicted first when the new capacity is smaller.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::BudgetNotPositive`] when either budget is zero or
    /// negative; [`ConsoleError::StuckMetrics`] when the measurer's reported
    /// height does not grow as probe lines are added.
    pub fn reconfigure(
        &mut self,
        width_budget: f32,
        height_budget: f32,
        measurer: M,
    ) -> Result<(), ConsoleError> {
        if width_budget <= 0.0 {
            return Err(ConsoleError::BudgetNotPositive {
                budget: width_budget,
            });
        }
        if height_budget <= 0.0 {
            return Err(ConsoleError::BudgetNotPositive {
                budget: height_budget,
            });
        }

        let capacity = probe_capacity(&measurer, height_budget)?;
        self.buffer.resize(capacity)?;
        self.metrics = Some(Metrics {
            width_budget,
            measurer,
        });
        debug!("console configured: {capacity} lines, width budget {width_budget}");
        Ok(())
    }

    /// Stream text into the console.
    ///
    /// The text is split on `'\n'`. The buffer's newest line, if non-empty,
    /// is prefixed onto the first segment, so a `write` that did not end in
    /// a newline is continued by the next one. Each segment that measures
    /// over the width budget is wrapped into fragments; the first line
    /// placed by the call replaces the newest buffer line, every later line
    /// starts a new one.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::NotConfigured`] before the first successful
    /// [`reconfigure`](Self::reconfigure).
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        let Some(metrics) = self.metrics.as_ref() else {
            return Err(ConsoleError::NotConfigured);
        };
        let width_budget = metrics.width_budget;
        let measurer = &metrics.measurer;
        let buffer = &mut self.buffer;
        trace!("write: {} bytes", text.len());

        // Continue the partial line from the previous write.
        let merged = match buffer.newest() {
            Some(current) if !current.is_empty() => {
                let mut merged = String::with_capacity(current.len() + text.len());
                merged.push_str(current);
                merged.push_str(text);
                merged
            }
            _ => text.to_owned(),
        };

        let mut first_line = true;
        let mut place = |line: &str| {
            if first_line {
                buffer.replace_newest(line);
                first_line = false;
            } else {
                buffer.add(line);
            }
        };

        for segment in merged.split('\n') {
            if measurer.measure(segment).width > width_budget {
                for fragment in wrap(segment, width_budget, measurer) {
                    place(fragment);
                }
            } else {
                place(segment);
            }
        }
        Ok(())
    }

    /// Stream text followed by a newline.
    ///
    /// # Errors
    ///
    /// Same contract as [`write`](Self::write).
    pub fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut terminated = String::with_capacity(text.len() + 1);
        terminated.push_str(text);
        terminated.push('\n');
        self.write(&terminated)
    }

    /// Discard all scroll-back content. Capacity is unchanged.
    pub fn clear(&mut self) {
        trace!("clear");
        self.buffer.clear();
    }

    /// Present lines, newest first. Absent slots are skipped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..self.buffer.capacity()).filter_map(|offset| self.buffer.get(offset).ok().flatten())
    }
}

impl<M: Measure> Default for Console<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count how many probe lines fit the height budget.
///
/// Mirrors a real font's line-height behavior: the probe string grows one
/// `"."` line at a time and is re-measured until it exceeds the budget.
fn probe_capacity<M: Measure>(measurer: &M, height_budget: f32) -> Result<usize, ConsoleError> {
    let mut probe = String::from(".");
    let mut lines = 1usize;
    let mut height = measurer.measure(&probe).height;
    while height <= height_budget {
        probe.push_str("\n.");
        lines += 1;
        let grown = measurer.measure(&probe).height;
        // A deterministic font grows strictly with each added line; anything
        // else would keep this loop alive forever.
        if grown <= height {
            return Err(ConsoleError::StuckMetrics);
        }
        height = grown;
    }
    Ok(lines)
}
