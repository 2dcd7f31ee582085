//! Growable stack and queue primitives shared by the tokenizer, the parser
//! and the emitter.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use liteyaml_common::BufferError;

/// Growth factor in percent applied when a buffer is full.
const GROW_FACTOR: usize = 200;
/// Minimum number of slots added on every growth.
const MINIMUM_GROW: usize = 4;

#[cfg_attr(not(feature = "no-inline"), inline)]
fn next_capacity(current: usize) -> usize {
    let grown = current * GROW_FACTOR / 100;
    grown.max(current + MINIMUM_GROW)
}

/// Array backed stack, also used as a flat buffer through [`ExpandBuffer::as_slice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandBuffer<T> {
    buffer: Vec<T>,
}

impl<T> Default for ExpandBuffer<T> {
    fn default() -> Self {
        ExpandBuffer::new(MINIMUM_GROW)
    }
}

impl<T> ExpandBuffer<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        ExpandBuffer {
            buffer: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn push(&mut self, item: T) {
        if self.buffer.len() == self.buffer.capacity() {
            let new_capacity = next_capacity(self.buffer.capacity());
            self.buffer.reserve_exact(new_capacity - self.buffer.len());
        }
        self.buffer.push(item);
    }

    /// # Errors
    /// Returns [`BufferError::EmptyBuffer`] when nothing is left to pop.
    pub fn pop(&mut self) -> Result<T, BufferError> {
        self.buffer.pop().ok_or(BufferError::EmptyBuffer)
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.buffer.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.buffer.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.buffer.last_mut()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T: Copy> ExpandBuffer<T> {
    pub fn extend_from_slice(&mut self, items: &[T]) {
        for item in items {
            self.push(*item);
        }
    }
}

impl<T> Index<usize> for ExpandBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for ExpandBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buffer[index]
    }
}

/// Circular queue that can also splice an element in at any logical
/// offset from its head. The tokenizer uses the insertion to place a
/// `KeyStart` (and possibly a `BlockMappingStart`) in front of tokens that
/// were queued before the `:` revealed them to be a mapping key.
#[derive(Debug, Clone)]
pub struct InsertionQueue<T> {
    array: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> Default for InsertionQueue<T> {
    fn default() -> Self {
        InsertionQueue::new(16)
    }
}

impl<T> InsertionQueue<T> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut array = Vec::with_capacity(capacity);
        array.resize_with(capacity, || None);
        InsertionQueue {
            array,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        for slot in &mut self.array {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// # Errors
    /// Returns [`BufferError::EmptyQueue`] when the queue holds no element.
    pub fn peek(&self) -> Result<&T, BufferError> {
        if self.count == 0 {
            return Err(BufferError::EmptyQueue);
        }
        self.array[self.head].as_ref().ok_or(BufferError::EmptyQueue)
    }

    /// Most recently enqueued element.
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        let len = self.array.len();
        self.array[(self.tail + len - 1) % len].as_ref()
    }

    pub fn enqueue(&mut self, item: T) {
        if self.count == self.array.len() {
            self.grow();
        }
        self.array[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.array.len();
        self.count += 1;
    }

    /// # Errors
    /// Returns [`BufferError::EmptyQueue`] when the queue holds no element.
    pub fn dequeue(&mut self) -> Result<T, BufferError> {
        if self.count == 0 {
            return Err(BufferError::EmptyQueue);
        }
        let item = self.array[self.head].take();
        self.head = (self.head + 1) % self.array.len();
        self.count -= 1;
        item.ok_or(BufferError::EmptyQueue)
    }

    /// Inserts `item` so that it is dequeued after exactly `position` elements.
    ///
    /// # Errors
    /// Returns [`BufferError::OutOfRange`] when `position` is past the end of the queue.
    pub fn insert(&mut self, position: usize, item: T) -> Result<(), BufferError> {
        if position > self.count {
            return Err(BufferError::OutOfRange {
                position,
                len: self.count,
            });
        }
        if self.count == self.array.len() {
            self.grow();
        }
        let len = self.array.len();
        let mut i = self.count;
        while i > position {
            let from = (self.head + i - 1) % len;
            let to = (self.head + i) % len;
            self.array[to] = self.array[from].take();
            i -= 1;
        }
        self.array[(self.head + position) % len] = Some(item);
        self.tail = (self.tail + 1) % len;
        self.count += 1;
        Ok(())
    }

    fn grow(&mut self) {
        let len = self.array.len();
        let new_capacity = next_capacity(len);
        let mut array = Vec::with_capacity(new_capacity);
        for i in 0..self.count {
            array.push(self.array[(self.head + i) % len].take());
        }
        array.resize_with(new_capacity, || None);
        self.array = array;
        self.head = 0;
        self.tail = self.count;
    }
}
