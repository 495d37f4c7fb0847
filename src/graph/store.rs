//! `VertexStore` — an append-only, chunked store with stable element addresses.
//!
//! Elements are written into fixed-capacity chunks. A chunk is allocated with
//! exactly `CHUNK` slots of capacity and is never pushed past it, so the
//! chunk's buffer is never reallocated. Pushing a new element therefore never
//! moves an existing one, and moving the store only moves the chunk table.
//!
//! Nothing is ever removed; elements are dropped together with the store.

use core::ops::{Index, IndexMut};

/// An append-only vector backed by fixed-size chunks.
pub struct VertexStore<T, const CHUNK: usize> {
    chunks: Vec<Vec<T>>,
    len: usize,
}

impl<T, const CHUNK: usize> VertexStore<T, CHUNK> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        assert!(CHUNK != 0, "VertexStore CHUNK must be > 0");
        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of stored elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Pushes an element and returns its index.
    pub fn push(&mut self, value: T) -> usize {
        let idx = self.len;
        let (c, _) = index_split::<CHUNK>(idx);
        if c == self.chunks.len() {
            self.chunks.push(Vec::with_capacity(CHUNK));
        }
        let chunk = &mut self.chunks[c];
        debug_assert!(chunk.len() < chunk.capacity(), "chunk would reallocate");
        chunk.push(value);
        self.len += 1;
        idx
    }

    /// Returns a shared reference to element `idx` if in-bounds.
    pub fn get(&self, idx: usize) -> Option<&T> {
        let (c, o) = index_split::<CHUNK>(idx);
        self.chunks.get(c)?.get(o)
    }

    /// Returns an iterator over `&T` in insertion order.
    pub fn iter(&self) -> StoreIter<'_, T> {
        StoreIter {
            inner: self.chunks.iter().flatten(),
            remaining: self.len,
        }
    }
}

impl<T, const CHUNK: usize> Index<usize> for VertexStore<T, CHUNK> {
    type Output = T;

    /// # Panics
    /// Panics if `idx` is out of bounds.
    fn index(&self, idx: usize) -> &T {
        let (c, o) = index_split::<CHUNK>(idx);
        &self.chunks[c][o]
    }
}

impl<T, const CHUNK: usize> IndexMut<usize> for VertexStore<T, CHUNK> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        let (c, o) = index_split::<CHUNK>(idx);
        &mut self.chunks[c][o]
    }
}

impl<T, const CHUNK: usize> Default for VertexStore<T, CHUNK> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `&T` for a `VertexStore`.
pub struct StoreIter<'a, T> {
    inner: core::iter::Flatten<core::slice::Iter<'a, Vec<T>>>,
    remaining: usize,
}

impl<'a, T> Clone for StoreIter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for StoreIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for StoreIter<'a, T> {}

#[inline(always)]
fn index_split<const CHUNK: usize>(idx: usize) -> (usize, usize) {
    if CHUNK.is_power_of_two() {
        let shift = CHUNK.trailing_zeros() as usize;
        let mask = CHUNK - 1;
        (idx >> shift, idx & mask)
    } else {
        (idx / CHUNK, idx % CHUNK)
    }
}
