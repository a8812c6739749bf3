use itertools::Itertools;
use log::debug;

use super::node::NodeStats;
use super::sweep::Sweep;

/// One engine pass over per-row start columns, reconstructed.
pub fn single_start<I, R>(
    k: usize,
    lcsk_plus: bool,
    rows: I,
    stats: Option<&NodeStats>,
) -> Vec<(usize, usize)>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[usize]>,
{
    Sweep::run(k, lcsk_plus, rows, stats).reconstruct(k)
}

/// Collects several high-scoring chains instead of a single optimum.
///
/// `matches` are the `(row, col)` start positions of every k-block, ordered by
/// row then column, and `n_rows` is the length of the first sequence. The
/// outer loop halves the row-ordered match set, the inner loop halves its
/// column-ordered copy, and every inner step runs a full pass. The union of
/// all reconstructions is returned sorted and without duplicates.
pub fn multistart(
    k: usize,
    lcsk_plus: bool,
    n_rows: usize,
    matches: &[(usize, usize)],
    stats: Option<&NodeStats>,
) -> Vec<(usize, usize)> {
    let mut recon = Vec::new();
    let mut passes = 0usize;

    let mut outer = matches;
    while !outer.is_empty() {
        let mut by_col = outer.to_vec();
        by_col.sort_unstable_by_key(|&(row, col)| (col, row));

        let mut inner = by_col.as_slice();
        while !inner.is_empty() {
            let rows = group_rows(n_rows, inner);
            recon.extend(single_start(k, lcsk_plus, &rows, stats));
            passes += 1;
            inner = &inner[inner.len().div_ceil(2)..];
        }
        outer = &outer[outer.len().div_ceil(2)..];
    }

    recon.sort_unstable();
    recon.dedup();
    debug!(
        "multistart: {} matches, {} passes, {} aligned pairs",
        matches.len(),
        passes,
        recon.len()
    );
    recon
}

/// Merges the alignment against the reversed second sequence into `forward`.
///
/// Columns of `reverse` are mapped back onto the original orientation with
/// `col' = b_len - 1 - col` and re-sorted. On equal pairs the forward pair
/// comes first.
pub fn merge_reverse(
    forward: Vec<(usize, usize)>,
    mut reverse: Vec<(usize, usize)>,
    b_len: usize,
) -> Vec<(usize, usize)> {
    for pair in reverse.iter_mut() {
        pair.1 = b_len - 1 - pair.1;
    }
    reverse.sort_unstable();
    forward.into_iter().merge(reverse).collect()
}

// Regroups a flat match list into per-row column lists.
fn group_rows(n_rows: usize, matches: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let len = matches
        .iter()
        .map(|&(row, _)| row + 1)
        .max()
        .unwrap_or(0)
        .max(n_rows);
    let mut rows = vec![Vec::new(); len];
    for &(row, col) in matches {
        rows[row].push(col);
    }
    rows
}
