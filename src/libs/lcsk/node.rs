use std::cell::Cell;
use std::rc::Rc;

/// Allocation counters for chain nodes.
///
/// A handle is cheap to clone and all clones share the same counts. The engine
/// only ever writes to it, so attaching one never changes an alignment.
#[derive(Clone, Debug, Default)]
pub struct NodeStats {
    inner: Rc<Counts>,
}

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    live: Cell<usize>,
    peak_live: Cell<usize>,
}

impl NodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes created since the last reset.
    pub fn created(&self) -> usize {
        self.inner.created.get()
    }

    /// Nodes currently alive.
    pub fn live(&self) -> usize {
        self.inner.live.get()
    }

    /// Largest number of nodes alive at once since the last reset.
    pub fn peak_live(&self) -> usize {
        self.inner.peak_live.get()
    }

    /// Starts a new measurement. Nodes still alive remain counted as live.
    pub fn reset(&self) {
        self.inner.created.set(0);
        self.inner.peak_live.set(self.inner.live.get());
    }

    fn on_create(&self) {
        let counts = &self.inner;
        counts.created.set(counts.created.get() + 1);
        counts.live.set(counts.live.get() + 1);
        if counts.live.get() > counts.peak_live.get() {
            counts.peak_live.set(counts.live.get());
        }
    }

    fn on_drop(&self) {
        let counts = &self.inner;
        counts.live.set(counts.live.get().saturating_sub(1));
    }
}

/// Registers a node with its stats handle for exactly its lifetime.
#[derive(Debug)]
struct Tally(Option<NodeStats>);

impl Tally {
    fn new(stats: Option<&NodeStats>) -> Self {
        if let Some(stats) = stats {
            stats.on_create();
        }
        Tally(stats.cloned())
    }
}

impl Drop for Tally {
    fn drop(&mut self) {
        if let Some(stats) = &self.0 {
            stats.on_drop();
        }
    }
}

/// The terminal position of a matched block within a chain.
///
/// Nodes form a forest of parent pointers: many children may extend the same
/// parent, and a chain is only ever walked from a node towards its root.
#[derive(Debug)]
pub struct ChainNode {
    /// Row in the first sequence of the block's last symbol.
    pub end_row: usize,
    /// Column in the second sequence of the block's last symbol.
    pub end_col: usize,
    /// Aligned length of the best chain ending here.
    pub dp: usize,
    pub parent: Option<Rc<ChainNode>>,
    _tally: Tally,
}

impl ChainNode {
    pub fn new(
        end_row: usize,
        end_col: usize,
        dp: usize,
        parent: Option<Rc<ChainNode>>,
        stats: Option<&NodeStats>,
    ) -> Self {
        ChainNode {
            end_row,
            end_col,
            dp,
            parent,
            _tally: Tally::new(stats),
        }
    }

    /// True when `self` ends exactly one row and one column after `other`.
    pub fn is_continuation_of(&self, other: &ChainNode) -> bool {
        other.end_row + 1 == self.end_row && other.end_col + 1 == self.end_col
    }

    /// True when a whole k-block fits between `other` and the end of `self`.
    pub fn is_block_after(&self, other: &ChainNode, k: usize) -> bool {
        other.end_row + k <= self.end_row && other.end_col + k <= self.end_col
    }

    /// This node followed by all of its ancestors, child to root.
    pub fn ancestors(&self) -> impl Iterator<Item = &ChainNode> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// Re-parents `node` onto `prev` as a one-position continuation.
    ///
    /// # Panics
    ///
    /// If `node` is already shared. Other holders could have seen the old score.
    pub fn continue_from(node: &mut Rc<ChainNode>, prev: &Rc<ChainNode>) {
        let (row, col) = (node.end_row, node.end_col);
        match Rc::get_mut(node) {
            Some(inner) => {
                inner.dp = prev.dp + 1;
                inner.parent = Some(Rc::clone(prev));
            }
            None => panic!("chain node ({row}, {col}) is shared and can no longer be re-parented"),
        }
    }
}

impl Drop for ChainNode {
    // Unlinks the chain one node at a time. The default recursive drop would
    // overflow the stack on chains as long as the input.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}
