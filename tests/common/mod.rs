#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;

pub const NUC: &[u8] = b"ACTG";

/// Random string of `len` symbols drawn from `bases`.
pub fn random_string(rng: &mut StdRng, len: usize, bases: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| bases[rng.gen_range(0..bases.len())])
        .collect()
}

/// A copy of `a` where each position is redrawn from `bases` with
/// probability `p_err`.
pub fn similar_string(rng: &mut StdRng, a: &[u8], p_err: f64, bases: &[u8]) -> Vec<u8> {
    a.iter()
        .map(|&c| {
            if rng.gen_bool(p_err) {
                bases[rng.gen_range(0..bases.len())]
            } else {
                c
            }
        })
        .collect()
}

/// Every k-block match by direct comparison, sorted.
pub fn naive_matches(a: &[u8], b: &[u8], k: usize) -> Vec<(usize, usize)> {
    let mut matches = vec![];
    if k == 0 || k > a.len() || k > b.len() {
        return matches;
    }
    for i in 0..=a.len() - k {
        for j in 0..=b.len() - k {
            if a[i..i + k] == b[j..j + k] {
                matches.push((i, j));
            }
        }
    }
    matches
}

/// Quadratic dynamic program over the match set, with reconstruction.
pub fn lcsk_sparse_slow(a: &[u8], b: &[u8], k: usize, lcsk_plus: bool) -> Vec<(usize, usize)> {
    let matches = naive_matches(a, b, k);
    let n = matches.len();
    if n == 0 {
        return vec![];
    }

    let mut dp = vec![0usize; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut best = 0;

    for i in 0..n {
        dp[i] = k;
        let (ri, ci) = matches[i];
        for j in (0..i).rev() {
            let (rj, cj) = matches[j];
            if rj + k <= ri && cj + k <= ci && dp[j] + k > dp[i] {
                dp[i] = dp[j] + k;
                prev[i] = Some(j);
            }
            if lcsk_plus && rj + 1 == ri && cj + 1 == ci && dp[j] + 1 > dp[i] {
                dp[i] = dp[j] + 1;
                prev[i] = Some(j);
            }
        }
        if dp[i] > dp[best] {
            best = i;
        }
    }

    let mut recon = vec![];
    let mut cur = Some(best);
    while let Some(i) = cur {
        let (r, c) = (matches[i].0 + k - 1, matches[i].1 + k - 1);
        let whole = match prev[i] {
            None => true,
            Some(j) => matches[j].0 + k <= matches[i].0 && matches[j].1 + k <= matches[i].1,
        };
        if whole {
            for d in 0..k {
                recon.push((r - d, c - d));
            }
        } else {
            recon.push((r, c));
        }
        cur = prev[i];
    }
    recon.reverse();
    recon
}

/// Optimal score by the full quadratic table over both sequences.
pub fn lcsk_slow_length(a: &[u8], b: &[u8], k: usize, lcsk_plus: bool) -> usize {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            for len in 1..=i.min(j).min(2 * k) {
                if a[i - len] != b[j - len] {
                    break;
                }
                if (!lcsk_plus && len == k) || (lcsk_plus && len >= k) {
                    dp[i][j] = dp[i][j].max(dp[i - len][j - len] + len);
                }
            }
        }
    }
    dp[a.len()][b.len()]
}

/// Whether `recon` is a valid LCSk (or LCSk++) alignment of `a` and `b`.
///
/// Pairs must match symbols and increase strictly in both coordinates. Runs
/// of consecutive rows and of consecutive columns must be a multiple of k
/// long (LCSk) or at least k long (LCSk++).
pub fn valid_lcsk(a: &[u8], b: &[u8], k: usize, recon: &[(usize, usize)], lcsk_plus: bool) -> bool {
    for &(i, j) in recon {
        if i >= a.len() || j >= b.len() || a[i] != b[j] {
            return false;
        }
    }

    let bad_run = |run: usize| (!lcsk_plus && run % k != 0) || (lcsk_plus && run < k);

    let mut run_a = 1;
    let mut run_b = 1;
    for i in 1..recon.len() {
        let (pa, pb) = recon[i - 1];
        let (ca, cb) = recon[i];
        if pa >= ca || pb >= cb {
            return false;
        }
        if pa + 1 == ca {
            run_a += 1;
        }
        if pb + 1 == cb {
            run_b += 1;
        }

        let last = i + 1 == recon.len();
        if last || pa + 1 != ca {
            if bad_run(run_a) {
                return false;
            }
            run_a = 1;
        }
        if last || pb + 1 != cb {
            if bad_run(run_b) {
                return false;
            }
            run_b = 1;
        }
    }

    true
}
