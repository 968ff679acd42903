use std::collections::{vec_deque, VecDeque};

use super::{
    capacity::Capacity,
    collection_options::CollectionOptions,
    pull_cursor::{PullCursor, PullEnd},
    BoundedCollection,
};

/// Keeps the latest `capacity` items: a full collection evicts its oldest item
/// to admit a new one. Pulls drain from the oldest end.
///
/// The bound is enforced at construction and on every insert, unlike
/// [`super::bounded_first::BoundedFirstCollection`] which only enforces it at
/// construction. The two differ on purpose and must not be unified.
#[derive(Clone, Debug)]
pub struct BoundedLastCollection<T> {
    data: VecDeque<T>,
    max_size: Capacity,
    cursor: PullCursor,
}

impl<T> Default for BoundedLastCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Capacity::Unbounded)
    }
}

impl<T> BoundedLastCollection<T> {
    pub fn new(mut initial: Vec<T>, max_size: Capacity) -> Self {
        max_size.truncate(&mut initial);
        Self {
            data: VecDeque::from(initial),
            max_size,
            cursor: PullCursor::new(PullEnd::Oldest),
        }
    }

    pub fn with_capacity(max_size: Capacity) -> Self {
        Self::new(Vec::new(), max_size)
    }

    pub fn from_options(options: CollectionOptions<T>) -> Self {
        Self::new(options.initial, options.capacity)
    }

    /// Same as [`BoundedCollection::insert`], but hands back the evicted item.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        let evicted = if self.max_size.is_reached(self.data.len()) {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> BoundedCollection<T> for BoundedLastCollection<T> {
    fn insert(&mut self, item: T) {
        self.push_evicting(item);
    }

    fn count(&self) -> usize {
        self.data.len()
    }

    fn pull_next(&mut self) -> Option<T> {
        self.cursor.pull(&mut self.data)
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.iter().cloned().collect()
    }

    fn capacity(&self) -> Capacity {
        self.max_size
    }

    fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }
}
