use std::rc::Rc;

use log::{debug, trace};

use super::events::EventQueue;
use super::node::{ChainNode, NodeStats};
use super::table::{BinarySearchQuery, CompressedTable, QueryStrategy, SweepQuery, TableQuery};

/// One row-by-row pass of the sparse LCSk/LCSk++ dynamic program.
///
/// Rows are fed in increasing order through [`Sweep::process_row`], each with
/// the start columns of the k-blocks beginning on that row. A block starting
/// at `(row, col)` is scored immediately against the table, but only enters
/// the table `k - 1` rows later, when its last symbol is reached.
pub struct Sweep {
    k: usize,
    lcsk_plus: bool,
    row: usize,
    events: EventQueue,
    table: CompressedTable,
    prev_row: Vec<Rc<ChainNode>>,
    stats: Option<NodeStats>,
    sweep_rows: usize,
    search_rows: usize,
}

impl Sweep {
    pub fn new(k: usize, lcsk_plus: bool) -> Self {
        assert!(k > 0, "block length must be positive");
        Sweep {
            k,
            lcsk_plus,
            row: 0,
            events: EventQueue::new(),
            table: CompressedTable::new(),
            prev_row: Vec::new(),
            stats: None,
            sweep_rows: 0,
            search_rows: 0,
        }
    }

    /// Counts every node this pass creates in `stats`.
    pub fn with_stats(mut self, stats: &NodeStats) -> Self {
        self.stats = Some(stats.clone());
        self
    }

    /// The next row to be processed.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn table(&self) -> &CompressedTable {
        &self.table
    }

    /// Processes the next row, given the start columns of its k-blocks.
    pub fn process_row(&mut self, cols: &[usize]) {
        let row = self.row;
        for &col in cols {
            self.events.add_begin(row, col);
        }

        let begins = self.events.pop_begin(row);
        let strategy = QueryStrategy::for_row(self.table.size(), begins.len());
        match strategy {
            QueryStrategy::Sweep => {
                self.sweep_rows += 1;
                self.begin_queries(SweepQuery::default(), row, &begins);
            }
            QueryStrategy::BinarySearch => {
                self.search_rows += 1;
                self.begin_queries(BinarySearchQuery, row, &begins);
            }
        }

        let matured = self.end_updates(row);
        if !begins.is_empty() || matured > 0 {
            trace!(
                "row {}: {} begins by {:?}, {} ends, table size {}",
                row,
                begins.len(),
                strategy,
                matured,
                self.table.size()
            );
        }
        self.row += 1;
    }

    // Scores each new block against the table as it stands before this row's
    // end events, then schedules it for its last row.
    fn begin_queries<Q: TableQuery>(&mut self, mut query: Q, row: usize, cols: &[usize]) {
        let k = self.k;
        for &col in cols {
            let parent = query.best_before(&self.table, col).cloned();
            let dp = parent.as_ref().map_or(0, |node| node.dp) + k;
            let node = ChainNode::new(row + k - 1, col + k - 1, dp, parent, self.stats.as_ref());
            self.events.add_end(Rc::new(node));
        }
    }

    fn end_updates(&mut self, row: usize) -> usize {
        let matured = self.events.pop_end(row);
        let count = matured.len();

        if !self.lcsk_plus {
            for node in &matured {
                self.table.fold_blocks(node, self.k);
            }
            self.prev_row.clear();
            return count;
        }

        let mut curr_row = Vec::with_capacity(count);
        let mut cont = 0;
        for mut node in matured {
            while cont < self.prev_row.len() && self.prev_row[cont].end_col + 1 < node.end_col {
                cont += 1;
            }
            if let Some(prev) = self.prev_row.get(cont) {
                if prev.end_col + 1 == node.end_col && prev.dp + 1 > node.dp {
                    debug_assert_eq!(prev.end_row + 1, node.end_row);
                    ChainNode::continue_from(&mut node, prev);
                }
            }
            self.table.fold_plus(&node, self.k);
            curr_row.push(node);
        }
        self.prev_row = curr_row;
        count
    }

    /// Drains blocks still pending past the last input row and hands back the
    /// final table.
    pub fn finish(mut self) -> CompressedTable {
        while !self.events.is_empty() {
            self.process_row(&[]);
        }
        debug!(
            "LCSk{} sweep: k = {}, {} rows, {} swept, {} searched, score {}",
            if self.lcsk_plus { "++" } else { "" },
            self.k,
            self.row,
            self.sweep_rows,
            self.search_rows,
            self.table.max_score()
        );
        self.table
    }

    /// Runs a whole pass over per-row start columns.
    pub fn run<I, R>(k: usize, lcsk_plus: bool, rows: I, stats: Option<&NodeStats>) -> CompressedTable
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[usize]>,
    {
        let mut sweep = Sweep::new(k, lcsk_plus);
        if let Some(stats) = stats {
            sweep = sweep.with_stats(stats);
        }
        for cols in rows {
            sweep.process_row(cols.as_ref());
        }
        sweep.finish()
    }
}
