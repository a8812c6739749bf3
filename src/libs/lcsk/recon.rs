use super::node::ChainNode;
use super::table::CompressedTable;

/// Expands the chain ending at `best` into aligned `(row, col)` pairs.
///
/// A node that starts a chain, or follows its parent by a whole block, adds
/// its k pairs. A one-step continuation adds only its own end pair. Pairs come
/// out strictly increasing in both coordinates.
///
/// # Panics
///
/// If a parent is neither a whole block nor exactly one step behind its child.
pub fn reconstruct(k: usize, best: Option<&ChainNode>) -> Vec<(usize, usize)> {
    let mut recon = Vec::new();
    let Some(best) = best else {
        return recon;
    };

    for node in best.ancestors() {
        match node.parent.as_deref() {
            Some(parent) if !node.is_block_after(parent, k) => {
                assert!(
                    node.is_continuation_of(parent),
                    "node ({}, {}) neither continues nor follows its parent ({}, {})",
                    node.end_row,
                    node.end_col,
                    parent.end_row,
                    parent.end_col
                );
                recon.push((node.end_row, node.end_col));
            }
            _ => {
                recon.extend((0..k).map(|d| (node.end_row - d, node.end_col - d)));
            }
        }
    }

    recon.reverse();
    recon
}

impl CompressedTable {
    /// The optimal alignment recorded by the table.
    pub fn reconstruct(&self, k: usize) -> Vec<(usize, usize)> {
        reconstruct(k, self.best().map(|node| node.as_ref()))
    }
}
