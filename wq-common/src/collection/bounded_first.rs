use std::collections::{vec_deque, VecDeque};

use super::{
    capacity::Capacity,
    collection_options::CollectionOptions,
    pull_cursor::{PullCursor, PullEnd},
    BoundedCollection,
};

/// Truncates its initial items to `capacity` at construction, then grows
/// without limit. Pulls drain from the newest end.
///
/// Inserts never check the bound, so `count()` may exceed `capacity()`. This is
/// the inverse of [`super::bounded_last::BoundedLastCollection`] on both
/// enforcement and pull order.
#[derive(Clone, Debug)]
pub struct BoundedFirstCollection<T> {
    data: VecDeque<T>,
    max_size: Capacity,
    cursor: PullCursor,
}

impl<T> Default for BoundedFirstCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Capacity::Unbounded)
    }
}

impl<T> BoundedFirstCollection<T> {
    pub fn new(mut initial: Vec<T>, max_size: Capacity) -> Self {
        max_size.truncate(&mut initial);
        Self {
            data: VecDeque::from(initial),
            max_size,
            cursor: PullCursor::new(PullEnd::Newest),
        }
    }

    pub fn from_options(options: CollectionOptions<T>) -> Self {
        Self::new(options.initial, options.capacity)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> BoundedCollection<T> for BoundedFirstCollection<T> {
    fn insert(&mut self, item: T) {
        self.data.push_back(item);
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
