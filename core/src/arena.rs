//! Bump arena backing the tokenizer and the parser.
//!
//! Every symbol string, token and expression node produced while handling one
//! expression lives in a single [`Arena`]. Nothing is freed individually: the
//! whole region goes away at once when the arena is released (or dropped), or
//! is rewound with [`Arena::reset`] for reuse.
//!
//! The arena is a thin accounting layer over [`bumpalo::Bump`]. When a request
//! does not fit in the current chunk, bumpalo links a fresh chunk in front of
//! the old ones instead of moving them, so a reference handed out earlier stays
//! valid for the arena's whole life. A [`Growth::Fixed`] arena reserves one
//! block up front and never asks the system for more: bumpalo's allocation
//! limit is pinned to that block, and any request that would overflow it, or
//! the logical capacity, reports [`ArenaError::CapacityExceeded`] instead.
//!
//! [`Store`] layers a typed, index-addressed sequence on top, which is how the
//! token list and the expression tree are kept.
//!
//! # Example
//!
//! ```
//! use sche_core::arena::{Arena, Store};
//!
//! let arena = Arena::new();
//! let name = arena.alloc_str("+").unwrap();
//!
//! let mut store = Store::new_in(&arena);
//! let first = store.push(40_i64).unwrap();
//! let second = store.push(2_i64).unwrap();
//! assert_eq!(store[first] + store[second], 42);
//! assert_eq!(name, "+");
//! ```

use core::{
    cell::Cell,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::size_of,
    ops::{Deref, Index},
};

use bumpalo::Bump;
use thiserror::Error;

/// Initial capacity used by [`Arena::new`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// What happens when an allocation does not fit in the remaining space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Growth {
    /// Chain a new backing block; existing blocks never move.
    #[default]
    Chained,
    /// Fail with [`ArenaError::CapacityExceeded`].
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaOptions {
    /// Bytes reserved up front. For [`Growth::Fixed`] this is also the limit.
    pub initial_capacity: usize,
    pub growth: Growth,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: Growth::Chained,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("arena capacity exceeded: requested {requested} bytes with {used} of {capacity} in use")]
    CapacityExceeded {
        requested: usize,
        used: usize,
        capacity: usize,
    },
}

/// A bump-allocated memory region with bulk release.
///
/// Allocation methods take `&self`, so any number of regions can be alive at
/// once. [`reset`](Arena::reset) takes `&mut self` and [`release`](Arena::release)
/// takes `self`, which means the borrow checker rejects any use of a region
/// that would outlive either.
///
/// Values placed with [`alloc`](Arena::alloc) are never dropped; only plain
/// data should go in.
#[derive(Debug)]
pub struct Arena {
    bump: Bump,
    options: ArenaOptions,
    used: Cell<usize>,
}

impl Arena {
    /// Chained arena with [`DEFAULT_CAPACITY`] bytes reserved.
    pub fn new() -> Self {
        Self::with_options(ArenaOptions::default())
    }

    /// Chained arena reserving `initial_capacity` bytes.
    pub fn chained(initial_capacity: usize) -> Self {
        Self::with_options(ArenaOptions {
            initial_capacity,
            growth: Growth::Chained,
        })
    }

    /// Arena that never holds more than `capacity` bytes.
    pub fn fixed(capacity: usize) -> Self {
        Self::with_options(ArenaOptions {
            initial_capacity: capacity,
            growth: Growth::Fixed,
        })
    }

    pub fn with_options(options: ArenaOptions) -> Self {
        let bump = Bump::with_capacity(options.initial_capacity);
        if options.growth == Growth::Fixed {
            // Bumpalo rounds the block up; the limit keeps it the only one.
            bump.set_allocation_limit(Some(bump.allocated_bytes()));
        }
        Self {
            bump,
            options,
            used: Cell::new(0),
        }
    }

    pub fn growth(&self) -> Growth {
        self.options.growth
    }

    /// Hard limit in bytes, or `None` when the arena grows on demand.
    pub fn capacity(&self) -> Option<usize> {
        match self.options.growth {
            Growth::Fixed => Some(self.options.initial_capacity),
            Growth::Chained => None,
        }
    }

    /// Bytes handed out since creation or the last reset.
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Bytes currently obtained from the global allocator, across all blocks.
    ///
    /// For a fixed arena this is the block reserved at creation, which is at
    /// least the capacity and never changes afterwards.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Zero-filled region of exactly `size` bytes.
    pub fn allocate(&self, size: usize) -> Result<&mut [u8], ArenaError> {
        let used = self.check(size)?;
        let region = self
            .bump
            .try_alloc_slice_fill_copy(size, 0u8)
            .map_err(|_| self.exhausted(size))?;
        self.used.set(used);
        Ok(region)
    }

    pub fn alloc<T>(&self, value: T) -> Result<&mut T, ArenaError> {
        let size = size_of::<T>();
        let used = self.check(size)?;
        let slot = self
            .bump
            .try_alloc(value)
            .map_err(|_| self.exhausted(size))?;
        self.used.set(used);
        Ok(slot)
    }

    /// Copies `text` into the arena.
    pub fn alloc_str(&self, text: &str) -> Result<&str, ArenaError> {
        let used = self.check(text.len())?;
        let copy: &str = self
            .bump
            .try_alloc_str(text)
            .map_err(|_| self.exhausted(text.len()))?;
        self.used.set(used);
        Ok(copy)
    }

    /// Rewinds to empty, keeping the backing memory for reuse.
    pub fn reset(&mut self) {
        tracing::trace!(used = self.used(), "resetting arena");
        self.bump.reset();
        self.used.set(0);
    }

    /// Frees every block at once.
    pub fn release(self) {
        tracing::trace!(
            used = self.used(),
            allocated = self.allocated_bytes(),
            "releasing arena"
        );
        drop(self);
    }

    /// The `used` total after `bytes` more, or an error if a fixed arena
    /// would overflow. Nothing is recorded until the caller commits it.
    fn check(&self, bytes: usize) -> Result<usize, ArenaError> {
        let next = self.used.get().checked_add(bytes);
        match (next, self.capacity()) {
            (Some(next), Some(capacity)) if next <= capacity => Ok(next),
            (Some(next), None) => Ok(next),
            _ => Err(self.exhausted(bytes)),
        }
    }

    /// Error for a request of `bytes` that the arena cannot satisfy.
    ///
    /// A chained arena only gets here when the system allocator refuses a new
    /// block; its "capacity" is then what it already holds.
    fn exhausted(&self, bytes: usize) -> ArenaError {
        ArenaError::CapacityExceeded {
            requested: bytes,
            used: self.used(),
            capacity: self.capacity().unwrap_or_else(|| self.allocated_bytes()),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed index into a [`Store`].
pub struct Handle<T> {
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.index
    }
}

// Manual implementations: derives would require `T` itself to be Copy/Eq/etc.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Growable sequence of `T` living in an [`Arena`].
///
/// Each push is charged `size_of::<T>()` bytes against the arena, so a fixed
/// arena also bounds how many elements fit. Growing the backing buffer can
/// fail on its own in a fixed arena, since earlier buffers stay behind in the
/// block. Indexing with a handle that came from a different store panics.
pub struct Store<'a, T> {
    arena: &'a Arena,
    items: bumpalo::collections::Vec<'a, T>,
}

impl<'a, T> Store<'a, T> {
    pub fn new_in(arena: &'a Arena) -> Self {
        Self {
            arena,
            items: bumpalo::collections::Vec::new_in(&arena.bump),
        }
    }

    pub fn push(&mut self, value: T) -> Result<Handle<T>, ArenaError> {
        let size = size_of::<T>();
        let used = self.arena.check(size)?;
        // Fall back to room for exactly one more when doubling does not fit.
        self.items
            .try_reserve(1)
            .or_else(|_| self.items.try_reserve_exact(1))
            .map_err(|_| self.arena.exhausted(size))?;
        self.arena.used.set(used);
        let handle = Handle::new(self.items.len());
        self.items.push(value);
        Ok(handle)
    }

    pub fn get(&self, handle: Handle<T>) -> &T {
        &self.items[handle.index]
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> &mut T {
        &mut self.items[handle.index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> Index<Handle<T>> for Store<'a, T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &T {
        self.get(handle)
    }
}

impl<'a, T> Deref for Store<'a, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T: Clone> Clone for Store<'a, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            items: self.items.clone(),
        }
    }
}

impl<'a, T: PartialEq> PartialEq for Store<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: Eq> Eq for Store<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Store<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_returns_zeroed_region_of_requested_size() {
        let arena = Arena::new();
        let region = arena.allocate(16).unwrap();
        assert_eq!(region.len(), 16);
        assert!(region.iter().all(|&b| b == 0));
        assert_eq!(arena.used(), 16);
    }

    #[test]
    fn test_allocations_do_not_overlap() {
        let arena = Arena::new();
        let a = arena.allocate(8).unwrap();
        a.fill(0xAA);
        let b = arena.allocate(8).unwrap();
        b.fill(0xBB);

        let a_range = a.as_ptr() as usize..a.as_ptr() as usize + a.len();
        let b_start = b.as_ptr() as usize;
        assert!(!a_range.contains(&b_start));
        assert!(a.iter().all(|&x| x == 0xAA));
        assert!(b.iter().all(|&x| x == 0xBB));
    }

    #[test]
    fn test_fixed_arena_rejects_overflow() {
        let arena = Arena::fixed(10);
        assert_eq!(arena.capacity(), Some(10));
        arena.allocate(6).unwrap();

        let err = arena.allocate(5).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 5,
                used: 6,
                capacity: 10,
            }
        );
        // A failed request doesn't consume anything.
        assert_eq!(arena.used(), 6);
        arena.allocate(4).unwrap();
        assert_eq!(arena.used(), 10);
    }

    #[test]
    fn test_chained_arena_keeps_earlier_allocations_across_growth() {
        let arena = Arena::chained(64);
        assert_eq!(arena.capacity(), None);
        let first = arena.alloc_str("persistent").unwrap();
        let before = arena.allocated_bytes();

        for _ in 0..256 {
            arena.allocate(32).unwrap();
        }

        assert!(arena.allocated_bytes() > before);
        assert_eq!(first, "persistent");
        assert_eq!(arena.used(), "persistent".len() + 256 * 32);
    }

    #[test]
    fn test_fixed_arena_never_takes_another_block() {
        let arena = Arena::fixed(4096);
        let reserved = arena.allocated_bytes();
        assert!(reserved >= 4096);

        // Strings between pushes stop the store from growing in place, so
        // every regrowth leaves its old buffer behind in the block.
        let mut words = Store::new_in(&arena);
        let mut pushed = 0;
        while arena.alloc_str("w").is_ok() && words.push(pushed).is_ok() {
            pushed += 1_u64;
        }

        assert!(pushed > 0);
        assert_eq!(words.len() as u64, pushed);
        assert_eq!(arena.allocated_bytes(), reserved);
        assert!(arena.used() <= 4096);
        assert!(matches!(
            words.push(0),
            Err(ArenaError::CapacityExceeded { capacity: 4096, .. })
        ));
    }

    #[test]
    fn test_reset_rewinds_used_bytes() {
        let mut arena = Arena::fixed(32);
        arena.allocate(32).unwrap();
        assert!(arena.allocate(1).is_err());

        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.alloc(7_u64).map(|v| *v), Ok(7));
    }

    #[test]
    fn test_release_consumes_arena() {
        let arena = Arena::new();
        arena.alloc_str("gone").unwrap();
        arena.release();
    }

    #[test]
    fn test_store_handles_address_pushed_values() {
        let arena = Arena::new();
        let mut store = Store::new_in(&arena);
        let a = store.push("a").unwrap();
        let b = store.push("b").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store[a], "a");
        assert_eq!(*store.get(b), "b");
        assert_ne!(a, b);
        assert_eq!(b.index(), 1);

        *store.get_mut(a) = "z";
        assert_eq!(store.as_slice(), &["z", "b"]);
    }

    #[test]
    fn test_store_is_bounded_by_fixed_arena() {
        let arena = Arena::fixed(3 * size_of::<u64>());
        let mut store = Store::new_in(&arena);
        for i in 0..3_u64 {
            store.push(i).unwrap();
        }
        assert!(matches!(
            store.push(3),
            Err(ArenaError::CapacityExceeded { .. })
        ));
        assert_eq!(store.len(), 3);
    }
}
