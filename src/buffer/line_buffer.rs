//! `LineBuffer`: A fixed-capacity circular store of text lines.
//!
//! The buffer keeps the last `capacity` lines written to the console. A
//! rotating cursor marks the newest line; reads are addressed newest-first
//! relative to the cursor, so presentation never needs to know the physical
//! layout.

use crate::error::ConsoleError;

/// Circular scroll-back store with a rotating newest-line cursor.
///
/// Slots start absent and become `Some` once written. `add` rotates the
/// cursor forward and overwrites whatever the oldest slot held, so the
/// buffer never grows past its capacity; history beyond it is permanently
/// lost.
///
/// # Invariant
///
/// `cursor < capacity` at all times. Reading offset `k` (newest-first) maps
/// to physical slot `(cursor + capacity - k) % capacity`.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    /// Physical slots; `None` means never written (or cleared).
    slots: Vec<Option<String>>,
    /// Physical index of the newest line.
    cursor: usize,
}

impl LineBuffer {
    /// Create a buffer with the minimum capacity of one line.
    ///
    /// Capacity only changes through [`resize`](Self::resize).
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            cursor: 0,
        }
    }

    /// Number of addressable slots.
    ///
    /// This is the capacity, not the count of non-empty lines; readers must
    /// skip absent slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Start a new line: advance the cursor (wrapping) and store `line`
    /// there, overwriting the oldest entry.
    pub fn add(&mut self, line: impl Into<String>) {
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.slots[self.cursor] = Some(line.into());
    }

    /// Overwrite the newest line in place without advancing the cursor.
    ///
    /// Used to continue a partial line rather than start a new one.
    pub fn replace_newest(&mut self, line: impl Into<String>) {
        self.slots[self.cursor] = Some(line.into());
    }

    /// The newest line, if one has been written.
    #[inline]
    pub fn newest(&self) -> Option<&str> {
        self.slots[self.cursor].as_deref()
    }

    /// Read the line `offset` positions older than the newest (0 = newest).
    ///
    /// Returns `Ok(None)` for a slot that has never been written.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::OutOfRange`] when `offset >= capacity`.
    pub fn get(&self, offset: usize) -> Result<Option<&str>, ConsoleError> {
        let capacity = self.slots.len();
        if offset >= capacity {
            return Err(ConsoleError::OutOfRange { offset, capacity });
        }
        let physical = (self.cursor + capacity - offset) % capacity;
        Ok(self.slots[physical].as_deref())
    }

    /// Set every slot to absent. Cursor and capacity are unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Change the capacity, preserving the chronological sequence of stored
    /// lines.
    ///
    /// Stored lines are read out oldest-first (the reverse of `get` order)
    /// and laid into a fresh slot array left-to-right. When shrinking, the
    /// oldest lines are evicted first; when growing, the new slots are left
    /// absent. The cursor lands on the most recent retained line, or 0 when
    /// the buffer held nothing.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::ZeroCapacity`] when `new_capacity` is 0.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ConsoleError> {
        if new_capacity == 0 {
            return Err(ConsoleError::ZeroCapacity);
        }

        let capacity = self.slots.len();
        let mut chronological: Vec<String> = Vec::with_capacity(capacity);
        // Oldest-first: offset capacity-1 down to 0.
        for offset in (0..capacity).rev() {
            let physical = (self.cursor + capacity - offset) % capacity;
            if let Some(line) = self.slots[physical].take() {
                chronological.push(line);
            }
        }

        let evict = chronological.len().saturating_sub(new_capacity);
        let mut slots = vec![None; new_capacity];
        let mut cursor = 0;
        for (i, line) in chronological.into_iter().skip(evict).enumerate() {
            slots[i] = Some(line);
            cursor = i;
        }

        self.slots = slots;
        self.cursor = cursor;
        Ok(())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Collect present lines newest-first.
    fn snapshot(buf: &LineBuffer) -> Vec<String> {
        (0..buf.capacity())
            .filter_map(|k| buf.get(k).unwrap().map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_new_has_capacity_one() {
        let buf = LineBuffer::new();
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.newest(), None);
    }

    #[test]
    fn test_add_and_read_back_newest_first() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        buf.add("a");
        buf.add("b");
        buf.add("c");
        assert_eq!(snapshot(&buf), ["c", "b", "a"]);
    }

    #[test]
    fn test_add_past_capacity_overwrites_oldest() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        for line in ["a", "b", "c", "d"] {
            buf.add(line);
        }
        assert_eq!(snapshot(&buf), ["d", "c", "b"]);
    }

    #[test]
    fn test_cursor_wraparound_endpoints() {
        let mut buf = LineBuffer::new();
        buf.resize(4).unwrap();
        for i in 0..4 {
            buf.add(format!("line {i}"));
        }
        assert_eq!(buf.get(0).unwrap(), Some("line 3"));
        assert_eq!(buf.get(3).unwrap(), Some("line 0"));
    }

    #[test]
    fn test_replace_newest_does_not_advance() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        buf.add("partial");
        buf.replace_newest("partial line, continued");
        assert_eq!(buf.newest(), Some("partial line, continued"));
        assert_eq!(snapshot(&buf).len(), 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut buf = LineBuffer::new();
        buf.resize(2).unwrap();
        assert_eq!(
            buf.get(2),
            Err(ConsoleError::OutOfRange {
                offset: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_get_unwritten_slot_is_none() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        buf.add("only");
        assert_eq!(buf.get(1).unwrap(), None);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        buf.add("a");
        buf.add("b");
        buf.clear();
        assert_eq!(buf.capacity(), 3);
        assert!(snapshot(&buf).is_empty());
    }

    #[test]
    fn test_resize_zero_rejected() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.resize(0), Err(ConsoleError::ZeroCapacity));
    }

    #[test]
    fn test_resize_shrink_evicts_oldest() {
        let mut buf = LineBuffer::new();
        buf.resize(5).unwrap();
        buf.add("x");
        buf.add("y");
        buf.add("z");
        buf.resize(2).unwrap();
        assert_eq!(snapshot(&buf), ["z", "y"]);
    }

    #[test]
    fn test_resize_grow_pads_with_absent_slots() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        for line in ["a", "b", "c"] {
            buf.add(line);
        }
        buf.resize(5).unwrap();
        assert_eq!(buf.capacity(), 5);
        assert_eq!(snapshot(&buf), ["c", "b", "a"]);
        // New slots read back absent, not empty.
        assert_eq!(buf.get(3).unwrap(), None);
        assert_eq!(buf.get(4).unwrap(), None);
    }

    #[test]
    fn test_resize_shrink_to_one() {
        let mut buf = LineBuffer::new();
        buf.resize(4).unwrap();
        for line in ["a", "b", "c", "d"] {
            buf.add(line);
        }
        buf.resize(1).unwrap();
        assert_eq!(snapshot(&buf), ["d"]);
    }

    #[test]
    fn test_resize_empty_buffer_resets_cursor() {
        let mut buf = LineBuffer::new();
        buf.resize(4).unwrap();
        buf.resize(2).unwrap();
        assert!(snapshot(&buf).is_empty());
        buf.add("first");
        assert_eq!(buf.newest(), Some("first"));
    }

    proptest! {
        /// Any resize keeps the most recent `min(stored, new_capacity)`
        /// lines in unchanged newest-first order.
        #[test]
        fn prop_resize_preserves_recency(
            capacity in 1usize..16,
            writes in 0usize..40,
            new_capacity in 1usize..16,
        ) {
            let mut buf = LineBuffer::new();
            buf.resize(capacity).unwrap();
            for i in 0..writes {
                buf.add(format!("line {i}"));
            }
            let before = snapshot(&buf);

            buf.resize(new_capacity).unwrap();
            let after = snapshot(&buf);

            let keep = before.len().min(new_capacity);
            prop_assert_eq!(&after[..], &before[..keep]);
        }
    }

    #[test]
    fn test_resize_survives_wrapped_cursor() {
        let mut buf = LineBuffer::new();
        buf.resize(3).unwrap();
        // Cursor has wrapped: physical layout is [d, e, c].
        for line in ["a", "b", "c", "d", "e"] {
            buf.add(line);
        }
        buf.resize(4).unwrap();
        assert_eq!(snapshot(&buf), ["e", "d", "c"]);
    }
}
