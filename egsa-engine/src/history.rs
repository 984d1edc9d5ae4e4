use std::{collections::VecDeque, num::NonZeroUsize};

use crate::prelude::*;

/// Insertion-ordered log that evicts its oldest entries once full.
///
/// The host may [`drain`](History::drain) it to flush entries into its own storage.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: NonZeroUsize,
}

impl<T> History<T> {
    pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity.get().min(64)), capacity }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() >= self.capacity.get() {
            trace!(capacity = self.capacity.get(), "evicting the oldest entry");
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Take all the entries out, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        self.entries.drain(..).collect()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest() {
        let mut history = History::with_capacity(NonZeroUsize::new(2).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(history.latest(), Some(&3));
    }

    #[test]
    fn drain_empties() {
        let mut history = History::default();
        history.push("a");
        history.push("b");
        assert_eq!(history.drain(), ["a", "b"]);
        assert!(history.is_empty());
    }
}
