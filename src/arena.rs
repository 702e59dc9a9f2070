use std::fmt;
use std::marker::PhantomData;

use crate::error::AllocError;

/// A stable reference to an entry in an [`Arena`].
///
/// Handles are plain indices paired with the arena generation that was
/// current when the entry was allocated. They are `Copy`, independent of the
/// entry type's own traits, and cannot be dereferenced without the arena
/// that issued them. After [`Arena::clear`] every previously issued handle
/// goes stale: [`Arena::get`] returns `None` instead of aliasing a slot that
/// has since been reused.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}@{})", self.index, self.generation)
    }
}

/// A bump-style store with a capacity fixed at creation.
///
/// Entries are appended one at a time and freed all at once with
/// [`Arena::clear`]; there is no per-entry deallocation and no resizing.
/// This gives O(1) allocation and bulk reclamation at the cost of a hard
/// ceiling on the number of live entries, which the caller sizes for its
/// workload up front.
///
/// # Examples
/// ```
/// use numera::arena::Arena;
///
/// let mut arena = Arena::with_capacity(8).unwrap();
/// let handle = arena.alloc(42).unwrap();
/// assert_eq!(arena.get(handle), Some(&42));
///
/// arena.clear();
/// assert_eq!(arena.get(handle), None);
/// ```
pub struct Arena<T> {
    slots: Vec<T>,
    capacity: usize,
    generation: u32,
}

impl<T> Arena<T> {
    /// Creates an arena able to hold up to `capacity` entries.
    ///
    /// The backing storage is reserved eagerly so a later [`Arena::alloc`]
    /// never reallocates.
    ///
    /// # Errors
    /// `AllocError::Backing` if the reservation cannot be satisfied.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::Backing { capacity })?;

        Ok(Self {
            slots,
            capacity,
            generation: 0,
        })
    }

    /// Stores `value` and returns a handle to it.
    ///
    /// # Errors
    /// `AllocError::Exhausted` once `capacity` entries are live.
    pub fn alloc(&mut self, value: T) -> Result<Handle<T>, AllocError> {
        if self.slots.len() >= self.capacity {
            return Err(AllocError::Exhausted {
                capacity: self.capacity,
            });
        }

        let index = u32::try_from(self.slots.len()).map_err(|_| AllocError::Exhausted {
            capacity: self.capacity,
        })?;

        self.slots.push(value);
        Ok(Handle {
            index,
            generation: self.generation,
            _marker: PhantomData,
        })
    }

    /// Resolves a handle, or `None` if it is out of range or was issued
    /// before the most recent [`Arena::clear`].
    #[must_use]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        if handle.generation != self.generation {
            return None;
        }

        self.slots.get(handle.index as usize)
    }

    /// Drops every entry and advances the generation, invalidating all
    /// previously issued handles. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advances the generation without dropping entries, invalidating all
    /// previously issued handles.
    ///
    /// The detached entries keep occupying their slots until the next
    /// [`Arena::clear`]; later allocations append after them.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of live entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;
    use crate::error::AllocError;

    #[test]
    fn alloc_and_get_round_trip() {
        let mut arena = Arena::with_capacity(4).unwrap();
        let a = arena.alloc("first").unwrap();
        let b = arena.alloc("second").unwrap();

        assert_eq!(arena.get(a), Some(&"first"));
        assert_eq!(arena.get(b), Some(&"second"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn alloc_past_capacity_is_rejected() {
        let mut arena = Arena::with_capacity(2).unwrap();
        arena.alloc(1).unwrap();
        arena.alloc(2).unwrap();

        assert_eq!(
            arena.alloc(3),
            Err(AllocError::Exhausted { capacity: 2 })
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn clear_invalidates_old_handles() {
        let mut arena = Arena::with_capacity(2).unwrap();
        let old = arena.alloc(7).unwrap();

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(old), None);

        // A fresh entry at the same slot index must not be reachable
        // through the stale handle.
        let fresh = arena.alloc(9).unwrap();
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(fresh), Some(&9));
    }

    #[test]
    fn invalidate_detaches_handles_but_keeps_entries() {
        let mut arena = Arena::with_capacity(4).unwrap();
        let old = arena.alloc(7).unwrap();

        arena.invalidate();
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.len(), 1);

        let fresh = arena.alloc(9).unwrap();
        assert_eq!(arena.get(fresh), Some(&9));
        assert_eq!(arena.get(old), None);
    }

    #[test]
    fn capacity_survives_clear() {
        let mut arena = Arena::<u8>::with_capacity(3).unwrap();
        arena.clear();
        assert_eq!(arena.capacity(), 3);
    }
}
