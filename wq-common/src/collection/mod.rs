pub mod bounded_first;
pub mod bounded_last;
pub mod capacity;
pub mod collection_options;
pub mod pull_cursor;

#[cfg(test)]
pub(crate) mod test_util;

use capacity::Capacity;

/// Shared surface of the bounded collections.
///
/// None of the operations block or lock; a collection has a single owner and
/// callers sharing one across tasks must serialize access themselves.
pub trait BoundedCollection<T> {
    fn insert(&mut self, item: T);

    fn count(&self) -> usize;

    /// Pulls through the one-shot cursor. `None` covers both an empty
    /// collection and a terminated cursor, see [`BoundedCollection::is_exhausted`].
    fn pull_next(&mut self) -> Option<T>;

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone;

    fn capacity(&self) -> Capacity;

    /// True once a pull has observed the collection empty. Never resets.
    fn is_exhausted(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
