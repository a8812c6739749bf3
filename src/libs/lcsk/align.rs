use log::debug;

use super::multistart::{merge_reverse, multistart, single_start};
use super::node::NodeStats;
use super::params::{LcskError, LcskParams, Mode};
use crate::libs::matches::{all_matches, RowMatches};

/// LCSk or LCSk++ of `a` and `b`.
///
/// Returns the aligned `(row, col)` pairs sorted by row, then column. Inputs
/// shorter than `k` or without any common k-block give an empty alignment.
///
/// ```
/// use lcskpp::{lcsk_sparse_fast, LcskParams};
///
/// let recon = lcsk_sparse_fast(b"ACGTACGT", b"TTACGTAC", &LcskParams::new(3)).unwrap();
/// assert_eq!(recon, vec![(0, 2), (1, 3), (2, 4), (3, 5), (4, 6), (5, 7)]);
/// ```
pub fn lcsk_sparse_fast(
    a: &[u8],
    b: &[u8],
    params: &LcskParams,
) -> Result<Vec<(usize, usize)>, LcskError> {
    align(a, b, params, None)
}

/// Same as [`lcsk_sparse_fast`], counting chain nodes in `stats`.
pub fn lcsk_sparse_fast_with_stats(
    a: &[u8],
    b: &[u8],
    params: &LcskParams,
    stats: &NodeStats,
) -> Result<Vec<(usize, usize)>, LcskError> {
    align(a, b, params, Some(stats))
}

fn align(
    a: &[u8],
    b: &[u8],
    params: &LcskParams,
    stats: Option<&NodeStats>,
) -> Result<Vec<(usize, usize)>, LcskError> {
    params.validate()?;
    debug!(
        "lengths {} x {}, k = {}, mode {}, reverse {}",
        a.len(),
        b.len(),
        params.k,
        params.mode,
        params.reverse
    );

    let forward = one_strand(a, b, params, stats)?;
    if !params.reverse {
        return Ok(forward);
    }

    let b_rev: Vec<u8> = b.iter().rev().copied().collect();
    let reverse = one_strand(a, &b_rev, params, stats)?;
    debug!(
        "forward {} pairs, reverse {} pairs",
        forward.len(),
        reverse.len()
    );
    Ok(merge_reverse(forward, reverse, b.len()))
}

fn one_strand(
    a: &[u8],
    b: &[u8],
    params: &LcskParams,
    stats: Option<&NodeStats>,
) -> Result<Vec<(usize, usize)>, LcskError> {
    let k = params.k;
    match params.mode {
        Mode::SingleStart => Ok(single_start(
            k,
            params.lcsk_plus,
            RowMatches::new(a, b, k),
            stats,
        )),
        Mode::MultistartLogarithmic => {
            let matches = all_matches(a, b, k);
            Ok(multistart(k, params.lcsk_plus, a.len(), &matches, stats))
        }
        Mode::MultistartAggressive => Err(LcskError::Unsupported(params.mode)),
    }
}
