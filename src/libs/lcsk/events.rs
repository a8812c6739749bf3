use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

use super::node::ChainNode;

/// A node waiting for the sweep to reach its end row.
struct EndEvent(Rc<ChainNode>);

impl EndEvent {
    fn key(&self) -> (usize, usize) {
        (self.0.end_row, self.0.end_col)
    }
}

impl PartialEq for EndEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EndEvent {}

impl PartialOrd for EndEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EndEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Row-keyed scheduler for the sweep.
///
/// Begin events are `(row, col)` start positions of k-blocks. End events are
/// nodes whose score becomes final once the sweep reaches their `end_row`.
/// Both kinds are drained one row at a time, in increasing column order.
#[derive(Default)]
pub struct EventQueue {
    begins: BinaryHeap<Reverse<(usize, usize)>>,
    ends: BinaryHeap<Reverse<EndEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_begin(&mut self, row: usize, col: usize) {
        self.begins.push(Reverse((row, col)));
    }

    pub fn add_end(&mut self, node: Rc<ChainNode>) {
        self.ends.push(Reverse(EndEvent(node)));
    }

    /// Columns of every begin event at `row`, ascending.
    ///
    /// # Panics
    ///
    /// If a begin event for an earlier row is still queued.
    pub fn pop_begin(&mut self, row: usize) -> Vec<usize> {
        let mut cols = Vec::new();
        while let Some(Reverse((r, c))) = self.begins.peek().copied() {
            assert!(r >= row, "begin event at row {r} left behind while draining row {row}");
            if r > row {
                break;
            }
            self.begins.pop();
            cols.push(c);
        }
        cols
    }

    /// Nodes maturing at `row`, ordered by end column.
    ///
    /// # Panics
    ///
    /// If an end event for an earlier row is still queued.
    pub fn pop_end(&mut self, row: usize) -> Vec<Rc<ChainNode>> {
        let mut nodes = Vec::new();
        while let Some(Reverse(event)) = self.ends.peek() {
            let r = event.0.end_row;
            assert!(r >= row, "end event at row {r} left behind while draining row {row}");
            if r > row {
                break;
            }
            if let Some(Reverse(event)) = self.ends.pop() {
                nodes.push(event.0);
            }
        }
        nodes
    }

    pub fn pending_ends(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.begins.is_empty() && self.ends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: usize, col: usize) -> Rc<ChainNode> {
        Rc::new(ChainNode::new(row, col, 3, None, None))
    }

    #[test]
    fn begins_drain_per_row_in_column_order() {
        let mut events = EventQueue::new();
        events.add_begin(1, 9);
        events.add_begin(0, 7);
        events.add_begin(1, 2);
        events.add_begin(0, 3);

        assert_eq!(events.pop_begin(0), vec![3, 7]);
        assert_eq!(events.pop_begin(1), vec![2, 9]);
        assert!(events.pop_begin(2).is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn ends_wait_for_their_row() {
        let mut events = EventQueue::new();
        events.add_end(node(4, 8));
        events.add_end(node(2, 5));
        events.add_end(node(4, 1));

        assert!(events.pop_end(1).is_empty());
        assert_eq!(events.pending_ends(), 3);

        let row2: Vec<_> = events.pop_end(2).iter().map(|n| n.end_col).collect();
        assert_eq!(row2, vec![5]);
        assert!(events.pop_end(3).is_empty());

        let row4: Vec<_> = events.pop_end(4).iter().map(|n| n.end_col).collect();
        assert_eq!(row4, vec![1, 8]);
        assert!(events.is_empty());
    }

    #[test]
    fn popped_nodes_are_uniquely_owned() {
        let mut events = EventQueue::new();
        events.add_end(node(0, 0));
        let mut nodes = events.pop_end(0);
        assert!(Rc::get_mut(&mut nodes[0]).is_some());
    }

    #[test]
    #[should_panic(expected = "left behind")]
    fn skipping_a_row_is_fatal() {
        let mut events = EventQueue::new();
        events.add_end(node(2, 0));
        events.pop_end(3);
    }
}
