//! Fixed-capacity double-ended buffer with a traversal cursor
//!
//! Storage is allocated once, sized to twice the guaranteed capacity, and the
//! live range starts in the middle so that either end can take `capacity`
//! pushes before it runs out of slots. Nothing is reallocated afterwards.
//!
//! ```text
//!  slot:  0   1   2   3   4   5   6   7
//!                [a] [b] [c]
//!                 ^           ^
//!               front        rear (one past the last live element)
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::error::BufferError;

/// One of the two growable ends of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    /// The front end (lowest live slot)
    Front,
    /// The rear end (one past the highest live slot)
    Rear,
}

impl End {
    /// Lowercase name, used in messages and reports
    pub fn as_str(self) -> &'static str {
        match self {
            End::Front => "front",
            End::Rear => "rear",
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the front; stepping past the front wraps to the rear sentinel
    Frontward,
    /// Toward the rear; stepping past the rear sentinel wraps to the front
    Rearward,
}

/// A fixed-capacity double-ended buffer with a non-destructive read cursor
///
/// Live elements occupy `slots[front..rear]`. The cursor ranges over
/// `front..=rear`, where `rear` acts as the end-of-scan sentinel.
#[derive(Clone)]
pub struct PeekBuffer<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    cursor: usize,
}

impl<T> PeekBuffer<T> {
    /// Create a buffer that accepts at least `capacity` pushes at each end
    pub fn with_guaranteed_capacity(capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(capacity * 2)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            front: capacity,
            rear: capacity,
            cursor: capacity,
        }
    }

    /// Pushes each end is guaranteed to accept from an empty buffer
    pub fn guaranteed_capacity(&self) -> usize {
        self.slots.len() / 2
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.rear - self.front
    }

    /// Check if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Check if neither end has a spare slot
    pub fn is_full(&self) -> bool {
        !self.has_room(End::Front) && !self.has_room(End::Rear)
    }

    /// Check if a push at `end` would succeed
    pub fn has_room(&self, end: End) -> bool {
        match end {
            End::Front => self.front > 0,
            End::Rear => self.rear < self.slots.len(),
        }
    }

    /// Push onto the given end
    ///
    /// On [`BufferError::CapacityExceeded`] the item is dropped and the buffer
    /// is left untouched.
    pub fn push(&mut self, end: End, item: T) -> Result<(), BufferError> {
        if !self.has_room(end) {
            log::warn!(
                "rejected push at the {} end: {} of {} slots in use",
                end,
                self.len(),
                self.slots.len()
            );
            return Err(BufferError::CapacityExceeded {
                end,
                capacity: self.guaranteed_capacity(),
            });
        }

        match end {
            End::Front => {
                self.front -= 1;
                self.slots[self.front] = Some(item);
            }
            End::Rear => {
                self.slots[self.rear] = Some(item);
                self.rear += 1;
            }
        }
        Ok(())
    }

    /// Push onto the front
    pub fn push_front(&mut self, item: T) -> Result<(), BufferError> {
        self.push(End::Front, item)
    }

    /// Push onto the rear
    pub fn push_rear(&mut self, item: T) -> Result<(), BufferError> {
        self.push(End::Rear, item)
    }

    /// Remove and return the element at the given end
    pub fn pop(&mut self, end: End) -> Result<T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }

        let index = match end {
            End::Front => self.front,
            End::Rear => self.rear - 1,
        };
        let item = self.slots[index].take().ok_or(BufferError::EmptyBuffer)?;

        match end {
            End::Front => self.front += 1,
            End::Rear => self.rear -= 1,
        }
        self.cursor = self.cursor.clamp(self.front, self.rear);
        Ok(item)
    }

    /// Remove and return the front element
    pub fn pop_front(&mut self) -> Result<T, BufferError> {
        self.pop(End::Front)
    }

    /// Remove and return the rear element
    pub fn pop_rear(&mut self) -> Result<T, BufferError> {
        self.pop(End::Rear)
    }

    /// The element at the given end
    pub fn peek(&self, end: End) -> Result<&T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        match end {
            End::Front => self.get(0),
            End::Rear => self.get(self.len() - 1),
        }
    }

    /// The element one step inward from the given end
    pub fn peek_neighbor(&self, end: End) -> Result<&T, BufferError> {
        match (end, self.len()) {
            (_, 0) => Err(BufferError::EmptyBuffer),
            (_, 1) => Err(BufferError::OutOfRange {
                position: 1,
                len: 1,
            }),
            (End::Front, _) => self.get(1),
            (End::Rear, len) => self.get(len - 2),
        }
    }

    /// First element
    pub fn peek_front(&self) -> Result<&T, BufferError> {
        self.peek(End::Front)
    }

    /// Second element from the front
    pub fn peek_front_neighbor(&self) -> Result<&T, BufferError> {
        self.peek_neighbor(End::Front)
    }

    /// Last element
    pub fn peek_rear(&self) -> Result<&T, BufferError> {
        self.peek(End::Rear)
    }

    /// Second element from the rear
    pub fn peek_rear_neighbor(&self) -> Result<&T, BufferError> {
        self.peek_neighbor(End::Rear)
    }

    /// Element at `offset` from the front
    pub fn get(&self, offset: usize) -> Result<&T, BufferError> {
        if offset >= self.len() {
            return Err(BufferError::OutOfRange {
                position: offset,
                len: self.len(),
            });
        }
        self.slots[self.front + offset]
            .as_ref()
            .ok_or(BufferError::OutOfRange {
                position: offset,
                len: self.len(),
            })
    }

    /// Move the cursor to the front element
    pub fn reset_cursor(&mut self) {
        self.cursor = self.front;
    }

    /// Step the cursor one slot, wrapping around the live range
    ///
    /// The rear sentinel is part of the ring, so a rearward scan from the front
    /// visits every element once and then lands on the sentinel.
    pub fn advance_cursor(&mut self, direction: Direction) {
        self.cursor = match direction {
            Direction::Frontward if self.cursor == self.front => self.rear,
            Direction::Frontward => self.cursor - 1,
            Direction::Rearward if self.cursor == self.rear => self.front,
            Direction::Rearward => self.cursor + 1,
        };
    }

    /// Check if the cursor sits on the rear sentinel
    pub fn cursor_at_rear(&self) -> bool {
        self.cursor == self.rear
    }

    /// Cursor position as an offset from the front (`len()` is the sentinel)
    pub fn cursor_offset(&self) -> usize {
        self.cursor - self.front
    }

    /// Place the cursor at `offset` from the front
    pub fn seek(&mut self, offset: usize) -> Result<(), BufferError> {
        if offset > self.len() {
            return Err(BufferError::OutOfRange {
                position: offset,
                len: self.len(),
            });
        }
        self.cursor = self.front + offset;
        Ok(())
    }

    /// Element under the cursor
    pub fn read_at_cursor(&self) -> Result<&T, BufferError> {
        self.get(self.cursor_offset())
    }

    /// Iterate over the live range, front to rear
    ///
    /// Every call starts a fresh pass; the cursor is not touched.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[self.front..self.rear].iter(),
        }
    }
}

impl<T: fmt::Display> PeekBuffer<T> {
    /// Space-joined live range, front to rear
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for PeekBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for PeekBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeekBuffer")
            .field("capacity", &self.guaranteed_capacity())
            .field("cursor", &self.cursor_offset())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a PeekBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a buffer's live range
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every slot in the live range is occupied.
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.inner.next_back() {
            if let Some(item) = slot {
                return Some(item);
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, items: &[&'static str]) -> PeekBuffer<&'static str> {
        let mut buffer = PeekBuffer::with_guaranteed_capacity(capacity);
        for &item in items {
            buffer.push_rear(item).unwrap();
        }
        buffer
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer: PeekBuffer<u32> = PeekBuffer::with_guaranteed_capacity(4);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.guaranteed_capacity(), 4);
        assert!(buffer.cursor_at_rear());
    }

    #[test]
    fn test_push_both_ends() {
        let mut buffer = PeekBuffer::with_guaranteed_capacity(4);
        buffer.push_rear(2).unwrap();
        buffer.push_front(1).unwrap();
        buffer.push_rear(3).unwrap();

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(buffer.peek_front(), Ok(&1));
        assert_eq!(buffer.peek_rear(), Ok(&3));
    }

    #[test]
    fn test_pop_both_ends() {
        let mut buffer = filled(4, &["a", "b", "c"]);

        assert_eq!(buffer.pop_front(), Ok("a"));
        assert_eq!(buffer.pop_rear(), Ok("c"));
        assert_eq!(buffer.pop_rear(), Ok("b"));
        assert_eq!(buffer.pop_front(), Err(BufferError::EmptyBuffer));
        assert_eq!(buffer.pop_rear(), Err(BufferError::EmptyBuffer));
    }

    #[test]
    fn test_capacity_per_end() {
        let mut buffer = PeekBuffer::with_guaranteed_capacity(2);
        buffer.push_front(1).unwrap();
        buffer.push_front(2).unwrap();
        assert!(!buffer.has_room(End::Front));
        assert_eq!(
            buffer.push_front(3),
            Err(BufferError::CapacityExceeded {
                end: End::Front,
                capacity: 2
            })
        );

        buffer.push_rear(4).unwrap();
        buffer.push_rear(5).unwrap();
        assert!(buffer.is_full());
        assert!(buffer.push_rear(6).is_err());

        // Rejected pushes leave the contents alone
        assert_eq!(buffer.render(), "2 1 4 5");
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut buffer = PeekBuffer::with_guaranteed_capacity(0);
        assert!(buffer.push_front("a").is_err());
        assert!(buffer.push_rear("a").is_err());
        assert!(buffer.is_empty());
        assert!(buffer.is_full());
    }

    #[test]
    fn test_peek_empty_and_neighbors() {
        let empty: PeekBuffer<u8> = PeekBuffer::with_guaranteed_capacity(2);
        assert_eq!(empty.peek_front(), Err(BufferError::EmptyBuffer));
        assert_eq!(empty.peek_rear_neighbor(), Err(BufferError::EmptyBuffer));

        let single = filled(2, &["only"]);
        assert_eq!(single.peek_front(), single.peek_rear());
        assert_eq!(
            single.peek_front_neighbor(),
            Err(BufferError::OutOfRange {
                position: 1,
                len: 1
            })
        );

        let three = filled(4, &["a", "b", "c"]);
        assert_eq!(three.peek_front_neighbor(), Ok(&"b"));
        assert_eq!(three.peek_rear_neighbor(), Ok(&"b"));
    }

    #[test]
    fn test_cursor_rearward_scan() {
        let mut buffer = filled(4, &["a", "b", "c"]);
        buffer.reset_cursor();

        let mut seen = Vec::new();
        while !buffer.cursor_at_rear() {
            seen.push(*buffer.read_at_cursor().unwrap());
            buffer.advance_cursor(Direction::Rearward);
        }
        assert_eq!(seen, vec!["a", "b", "c"]);

        // Sentinel wraps back to the front
        buffer.advance_cursor(Direction::Rearward);
        assert_eq!(buffer.read_at_cursor(), Ok(&"a"));
    }

    #[test]
    fn test_cursor_frontward_wraps_to_rear() {
        let mut buffer = filled(4, &["a", "b"]);
        buffer.reset_cursor();

        buffer.advance_cursor(Direction::Frontward);
        assert!(buffer.cursor_at_rear());
        assert!(buffer.read_at_cursor().is_err());

        buffer.advance_cursor(Direction::Frontward);
        assert_eq!(buffer.read_at_cursor(), Ok(&"b"));
    }

    #[test]
    fn test_seek() {
        let mut buffer = filled(4, &["a", "b", "c"]);
        buffer.seek(2).unwrap();
        assert_eq!(buffer.read_at_cursor(), Ok(&"c"));
        assert_eq!(buffer.cursor_offset(), 2);

        buffer.seek(3).unwrap();
        assert!(buffer.cursor_at_rear());

        assert_eq!(
            buffer.seek(4),
            Err(BufferError::OutOfRange {
                position: 4,
                len: 3
            })
        );
    }

    #[test]
    fn test_pop_clamps_cursor() {
        let mut buffer = filled(4, &["a", "b", "c"]);
        buffer.seek(2).unwrap();
        buffer.pop_rear().unwrap();
        assert!(buffer.cursor_at_rear());

        buffer.reset_cursor();
        buffer.pop_front().unwrap();
        assert_eq!(buffer.read_at_cursor(), Ok(&"b"));
    }

    #[test]
    fn test_iter_is_restartable_and_double_ended() {
        let buffer = filled(4, &["a", "b", "c"]);
        let iter = buffer.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.clone().rev().collect::<Vec<_>>(), vec![&"c", &"b", &"a"]);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&"a", &"b", &"c"]);
        assert_eq!((&buffer).into_iter().count(), 3);
    }

    #[test]
    fn test_render() {
        let buffer = filled(4, &["cat", "cot"]);
        assert_eq!(buffer.render(), "cat cot");

        let empty: PeekBuffer<String> = PeekBuffer::with_guaranteed_capacity(1);
        assert_eq!(empty.render(), "");
    }

    #[test]
    fn test_end_names() {
        assert_eq!(End::Front.as_str(), "front");
        assert_eq!(End::Rear.to_string(), "rear");
    }
}
