//! Adaptive-probe line wrapping.
//!
//! Wrapping against a pixel budget needs the measurement oracle, and the
//! oracle may be expensive (a real font rasterizer). Instead of measuring
//! every prefix one grapheme at a time, the probe grows the trial length in
//! coarse steps, backs off one step, then finishes with single-grapheme
//! growth. For a fragment of `n` graphemes this costs roughly `n / STEP +
//! STEP` measurements instead of `n`.
//!
//! Splitting is grapheme-granular, not word-aware: a fragment may end in the
//! middle of a word. That behavior is part of the contract, as is the tail
//! policy: the final remainder of the text is emitted as-is without a
//! closing measurement, even if the budget would reject it.

use unicode_segmentation::UnicodeSegmentation;

use crate::measure::Measure;

/// Coarse growth step of the probe, in graphemes.
const PROBE_STEP: usize = 5;

/// Split `text` into fragments that each measure within `width_budget`.
///
/// Fragments are yielded lazily in order; concatenating them reproduces
/// `text` exactly. Every fragment except possibly the last measures at or
/// under the budget. Boundaries fall on grapheme clusters, so a fragment is
/// always valid UTF-8 and never splits a user-perceived character.
///
/// An empty `text` yields no fragments. A budget narrower than a single
/// grapheme still makes progress: one grapheme per fragment, over budget.
pub fn wrap<'a, M>(text: &'a str, width_budget: f32, measure: &'a M) -> Fragments<'a, M>
where
    M: Measure + ?Sized,
{
    // Byte offsets of every grapheme boundary, including both ends.
    let mut boundaries: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
    boundaries.push(text.len());

    Fragments {
        text,
        boundaries,
        start: 0,
        width_budget,
        measure,
    }
}

/// Lazy iterator over wrapped fragments of one piece of text.
///
/// Created by [`wrap`].
pub struct Fragments<'a, M: ?Sized> {
    /// The text being wrapped.
    text: &'a str,
    /// Grapheme boundary byte offsets; `boundaries[k]` starts grapheme `k`,
    /// the final entry is `text.len()`.
    boundaries: Vec<usize>,
    /// Grapheme index of the next unconsumed position.
    start: usize,
    /// Maximum permissible measured width of a fragment.
    width_budget: f32,
    /// The measurement oracle.
    measure: &'a M,
}

impl<M: Measure + ?Sized> Fragments<'_, M> {
    /// Total grapheme count of the text.
    #[inline]
    fn graphemes(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Whether `len` graphemes starting at `self.start` measure within
    /// budget.
    #[inline]
    fn fits(&self, len: usize) -> bool {
        let slice = &self.text[self.boundaries[self.start]..self.boundaries[self.start + len]];
        self.measure.measure(slice).width <= self.width_budget
    }
}

impl<'a, M: Measure + ?Sized> Iterator for Fragments<'a, M> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let total = self.graphemes();
        if self.start >= total {
            return None;
        }
        let remaining = total - self.start;

        // Coarse growth, then back off the overshoot.
        let mut len = PROBE_STEP;
        while len < remaining && self.fits(len) {
            len += PROBE_STEP;
        }
        len -= PROBE_STEP;

        // Fine growth by single graphemes.
        while len < remaining && self.fits(len) {
            len += 1;
        }

        if len >= remaining {
            // Probe ran off the end: the remaining tail is the final
            // fragment, emitted without a closing measurement.
            len = remaining;
        } else {
            // The last probe failed; step back to the passing length.
            len -= 1;
        }

        // Under a sub-grapheme budget the probe collapses to zero; emit one
        // grapheme anyway so the iterator terminates.
        len = len.max(1);

        let fragment = &self.text[self.boundaries[self.start]..self.boundaries[self.start + len]];
        self.start += len;
        Some(fragment)
    }
}

impl<M: Measure + ?Sized> std::iter::FusedIterator for Fragments<'_, M> {}
