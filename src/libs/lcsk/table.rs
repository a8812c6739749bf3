use std::rc::Rc;

use super::node::ChainNode;

/// Best chain ends indexed by score.
///
/// Slot 0 is an implicit sentinel with score 0 that lies left of every column.
/// Stored slots start at 1:
///
/// * LCSk: slot `i` holds a node with `dp == k * i`.
/// * LCSk++: a node is written into the slots `dp - k + 1 ..= dp`, so slot `i`
///   holds a node with `i <= dp < i + k`, and the last slot's `dp` is the best
///   score seen.
///
/// In both variants the end columns never decrease with the slot index, which
/// is what lets [`TableQuery`] answer "best score left of column j" without a
/// scan.
#[derive(Default)]
pub struct CompressedTable {
    slots: Vec<Rc<ChainNode>>,
}

impl CompressedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots, the sentinel included.
    pub fn size(&self) -> usize {
        self.slots.len() + 1
    }

    /// Stored slots, starting with slot 1.
    pub fn slots(&self) -> &[Rc<ChainNode>] {
        &self.slots
    }

    /// The node of the highest slot, `None` if only the sentinel is present.
    pub fn best(&self) -> Option<&Rc<ChainNode>> {
        self.slots.last()
    }

    pub fn max_score(&self) -> usize {
        self.best().map_or(0, |node| node.dp)
    }

    /// The node of the highest slot among the first `count` stored slots.
    pub fn last_of(&self, count: usize) -> Option<&Rc<ChainNode>> {
        count.checked_sub(1).map(|idx| &self.slots[idx])
    }

    /// Folds a finished LCSk++ node into the table.
    pub fn fold_plus(&mut self, node: &Rc<ChainNode>, k: usize) {
        let top = node.dp;
        let floor = top.saturating_sub(k) + 1;
        let stored = self.slots.len();
        debug_assert!(
            stored + 1 >= floor,
            "score {top} jumps past the table top {stored}"
        );

        // Slots above the current top are fresh and always taken.
        if top > stored {
            self.slots.resize(top, Rc::clone(node));
        }

        let mut idx = top.min(stored);
        while idx >= floor && node.end_col < self.slots[idx - 1].end_col {
            self.slots[idx - 1] = Rc::clone(node);
            idx -= 1;
        }
    }

    /// Folds a finished LCSk node into slot `dp / k`.
    pub fn fold_blocks(&mut self, node: &Rc<ChainNode>, k: usize) {
        let idx = node.dp / k;
        debug_assert!(idx >= 1 && node.dp % k == 0);

        if idx > self.slots.len() {
            assert_eq!(
                idx,
                self.slots.len() + 1,
                "LCSk score {} skips a table slot",
                node.dp
            );
            self.slots.push(Rc::clone(node));
        } else if node.end_col < self.slots[idx - 1].end_col {
            self.slots[idx - 1] = Rc::clone(node);
        }
    }
}

/// A way of finding the best chain end strictly left of a column.
pub trait TableQuery {
    /// Number of stored slots whose end column is less than `col`.
    fn count_below(&mut self, table: &CompressedTable, col: usize) -> usize;

    /// The highest-scoring node ending left of `col`, `None` for the sentinel.
    fn best_before<'t>(
        &mut self,
        table: &'t CompressedTable,
        col: usize,
    ) -> Option<&'t Rc<ChainNode>> {
        let count = self.count_below(table, col);
        table.last_of(count)
    }
}

/// Pointer that only moves forward.
///
/// Columns must be queried in increasing order against an unchanged table.
/// One row costs O(queries + table size).
#[derive(Debug, Default)]
pub struct SweepQuery {
    pointer: usize,
    last_col: usize,
}

impl TableQuery for SweepQuery {
    fn count_below(&mut self, table: &CompressedTable, col: usize) -> usize {
        debug_assert!(col >= self.last_col, "sweep queries must be sorted");
        self.last_col = col;

        let slots = table.slots();
        while self.pointer < slots.len() && slots[self.pointer].end_col < col {
            self.pointer += 1;
        }
        self.pointer
    }
}

/// Independent binary search per query, O(log table size) each.
#[derive(Debug, Default)]
pub struct BinarySearchQuery;

impl TableQuery for BinarySearchQuery {
    fn count_below(&mut self, table: &CompressedTable, col: usize) -> usize {
        table.slots().partition_point(|node| node.end_col < col)
    }
}

/// Which [`TableQuery`] a row is answered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStrategy {
    Sweep,
    BinarySearch,
}

impl QueryStrategy {
    /// Picks the cheaper strategy for a row.
    ///
    /// A sweep costs `table_size + begin_count`, a row of binary searches costs
    /// about `begin_count * log2(table_size)`. The sweep wins below six times
    /// the search estimate. `table_size` counts the sentinel slot.
    pub fn for_row(table_size: usize, begin_count: usize) -> Self {
        if table_size == 0 || begin_count == 0 {
            return QueryStrategy::BinarySearch;
        }
        let sweep_cost = (table_size + begin_count) as f64;
        let search_cost = 6.0 * begin_count as f64 * (table_size as f64).log2();
        if sweep_cost < search_cost {
            QueryStrategy::Sweep
        } else {
            QueryStrategy::BinarySearch
        }
    }
}
