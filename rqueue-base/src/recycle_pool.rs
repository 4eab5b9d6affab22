use std::fmt;
use std::marker::PhantomData;

/// Scalar type for slots within a `RecyclePool`
pub type RecyclePoolIndexT = u32;

const DEFAULT_RECYCLE_POOL_CAPACITY: usize = 64;

/// A key to a value in a `RecyclePool`. Keys are plain indices so they remain resolvable after the
/// pool grows, but they are only meaningful until the next `reset()`.
pub struct RecyclePoolKey<T> {
    index: RecyclePoolIndexT,
    phantom_data: PhantomData<fn() -> T>,
}

impl<T> Clone for RecyclePoolKey<T> {
    fn clone(&self) -> RecyclePoolKey<T> {
        *self
    }
}

impl<T> Copy for RecyclePoolKey<T> {}

impl<T> PartialEq for RecyclePoolKey<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for RecyclePoolKey<T> {}

impl<T> fmt::Debug for RecyclePoolKey<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_tuple("RecyclePoolKey").field(&self.index).finish()
    }
}

impl<T> RecyclePoolKey<T> {
    fn new(index: RecyclePoolIndexT) -> Self {
        RecyclePoolKey {
            index,
            phantom_data: PhantomData,
        }
    }

    pub fn index(&self) -> RecyclePoolIndexT {
        self.index
    }
}

/// A pool of records that are handed out in order and reclaimed all at once.
///
/// Storage grows geometrically and is never released until the pool is dropped, so a pool that is
/// `reset()` every frame stops allocating once it has seen its peak frame. Slots are not cleared on
/// `reset()` or `add()`. Whoever takes a slot is expected to overwrite every field.
pub struct RecyclePool<T> {
    /// Backing storage. Every element is initialized, but only `[0, live_count)` is in use
    storage: Vec<T>,

    /// Number of slots handed out since the last reset
    live_count: usize,

    init_fn: fn() -> T,
}

impl<T: Default> RecyclePool<T> {
    /// Create a pool with a default starting capacity that fills new slots with `T::default()`
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECYCLE_POOL_CAPACITY, T::default)
    }
}

impl<T: Default> Default for RecyclePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecyclePool<T> {
    /// Create a pool with `capacity` slots already initialized by `init_fn`
    pub fn with_capacity(
        capacity: usize,
        init_fn: fn() -> T,
    ) -> Self {
        let mut storage = Vec::with_capacity(capacity);
        storage.resize_with(capacity, init_fn);

        RecyclePool {
            storage,
            live_count: 0,
            init_fn,
        }
    }

    /// Take the next free slot, growing the storage if every slot is in use. The returned slot
    /// holds whatever the previous user of the slot left in it.
    pub fn add(&mut self) -> (RecyclePoolKey<T>, &mut T) {
        if self.live_count == self.storage.len() {
            self.grow();
        }

        let index = self.live_count;
        self.live_count += 1;

        (
            RecyclePoolKey::new(index as RecyclePoolIndexT),
            &mut self.storage[index],
        )
    }

    /// Return every slot to the pool. Keys issued before this call must not be used again.
    pub fn reset(&mut self) {
        self.live_count = 0;
    }

    /// Get the value for a key issued since the last reset. It is fatal to pass a stale key.
    #[inline(always)]
    pub fn get(
        &self,
        key: RecyclePoolKey<T>,
    ) -> &T {
        let index = key.index as usize;
        assert!(
            index < self.live_count,
            "recycle pool key {} is not live (live count {})",
            index,
            self.live_count
        );
        &self.storage[index]
    }

    /// Get the value for a key issued since the last reset. It is fatal to pass a stale key.
    #[inline(always)]
    pub fn get_mut(
        &mut self,
        key: RecyclePoolKey<T>,
    ) -> &mut T {
        let index = key.index as usize;
        assert!(
            index < self.live_count,
            "recycle pool key {} is not live (live count {})",
            index,
            self.live_count
        );
        &mut self.storage[index]
    }

    /// Number of slots handed out since the last reset
    pub fn len(&self) -> usize {
        self.live_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Number of initialized slots, live or not
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    fn grow(&mut self) {
        let new_capacity = (self.storage.len() * 2).max(1);
        assert!(
            new_capacity <= RecyclePoolIndexT::MAX as usize,
            "recycle pool cannot grow past {} slots",
            RecyclePoolIndexT::MAX
        );

        log::debug!(
            "Growing recycle pool from {} to {} slots",
            self.storage.len(),
            new_capacity
        );

        self.storage.resize_with(new_capacity, self.init_fn);
    }
}
