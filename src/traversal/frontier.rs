use std::collections::VecDeque;

/// The work-list driving a traversal.
///
/// The engine only ever seeds a frontier with the root, adds one batch of children per step and
/// removes one item per step; the insertion discipline is the whole difference between
/// breadth-first and depth-first visiting order.
pub trait Frontier<T> {
    /// Creates an empty frontier.
    fn new() -> Self;
    /// Returns `true` if there is nothing left to process.
    fn is_empty(&self) -> bool;
    /// Inserts a batch of items, preserving the order of the batch itself.
    fn add(&mut self, batch: Vec<T>);
    /// Removes and returns the next item, or `None` if the frontier is empty.
    fn take_one(&mut self) -> Option<T>;
}

/// First-in-first-out discipline: batches append at the tail, items leave from the head.
///
/// Drives breadth-first traversal.
#[derive(Debug)]
pub struct FifoFrontier<T>(VecDeque<T>);

impl<T> Frontier<T> for FifoFrontier<T> {
    #[inline]
    fn new() -> Self {
        Self(VecDeque::new())
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    fn add(&mut self, batch: Vec<T>) {
        self.0.extend(batch);
    }
    #[inline]
    fn take_one(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Stack-like discipline: batches are inserted at the head in their own order, items leave from
/// the head.
///
/// Drives preorder traversal; postorder uses the exact same discipline and differs only in how
/// the visit step shapes its batches.
#[derive(Debug)]
pub struct LifoFrontier<T>(VecDeque<T>);

impl<T> Frontier<T> for LifoFrontier<T> {
    #[inline]
    fn new() -> Self {
        Self(VecDeque::new())
    }
    #[inline]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    fn add(&mut self, batch: Vec<T>) {
        // Prepending in reverse keeps the intra-batch order at the head.
        for item in batch.into_iter().rev() {
            self.0.push_front(item);
        }
    }
    #[inline]
    fn take_one(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_keeps_arrival_order() {
        let mut frontier = FifoFrontier::new();
        frontier.add(vec![1, 2]);
        frontier.add(vec![3]);
        assert_eq!(frontier.take_one(), Some(1));
        assert_eq!(frontier.take_one(), Some(2));
        assert_eq!(frontier.take_one(), Some(3));
        assert_eq!(frontier.take_one(), None);
    }

    #[test]
    fn lifo_prepends_batches_in_batch_order() {
        let mut frontier = LifoFrontier::new();
        frontier.add(vec![1, 2]);
        frontier.add(vec![3, 4]);
        // The later batch jumps ahead, but 3 still comes before 4.
        assert_eq!(frontier.take_one(), Some(3));
        assert_eq!(frontier.take_one(), Some(4));
        assert_eq!(frontier.take_one(), Some(1));
        assert_eq!(frontier.take_one(), Some(2));
        assert!(frontier.is_empty());
    }
}
