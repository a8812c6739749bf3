//! Exact k-block matches between two sequences.
//!
//! The k-mers of the second sequence are indexed once. The first sequence is
//! then scanned lazily, one row per start position. When `alphabet_size^k`
//! fits into a `u64`, k-mers are keyed by a perfect rolling hash; otherwise the
//! k-byte slices themselves are the keys.

use fxhash::FxHashMap;

/// Dense ids for the bytes occurring in either sequence.
struct Alphabet {
    ids: [u16; 256],
    size: u64,
}

impl Alphabet {
    fn of(a: &[u8], b: &[u8]) -> Self {
        let mut ids = [u16::MAX; 256];
        let mut size = 0u16;
        for &c in a.iter().chain(b) {
            if ids[c as usize] == u16::MAX {
                ids[c as usize] = size;
                size += 1;
            }
        }
        Alphabet {
            ids,
            size: size as u64,
        }
    }

    fn id(&self, c: u8) -> u64 {
        self.ids[c as usize] as u64
    }
}

/// Hash of the last k symbols pushed, unique among all k-mers.
struct Roller {
    sigma: u128,
    modulus: u128,
    hash: u128,
}

impl Roller {
    fn new(sigma: u64, modulus: u64) -> Self {
        Roller {
            sigma: sigma as u128,
            modulus: modulus as u128,
            hash: 0,
        }
    }

    fn push(&mut self, id: u64) -> u64 {
        self.hash = (self.hash * self.sigma + id as u128) % self.modulus;
        self.hash as u64
    }
}

enum KmerIndex<'a> {
    Perfect {
        alphabet: Alphabet,
        modulus: u64,
        hits: FxHashMap<u64, Vec<usize>>,
    },
    Slices {
        hits: FxHashMap<&'a [u8], Vec<usize>>,
    },
}

impl<'a> KmerIndex<'a> {
    fn build(a: &[u8], b: &'a [u8], k: usize) -> Self {
        let alphabet = Alphabet::of(a, b);
        let modulus = u32::try_from(k)
            .ok()
            .and_then(|k| alphabet.size.max(1).checked_pow(k));

        match modulus {
            Some(modulus) => {
                let mut hits: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
                let mut roller = Roller::new(alphabet.size, modulus);
                for (pos, &c) in b.iter().enumerate() {
                    let hash = roller.push(alphabet.id(c));
                    if pos + 1 >= k {
                        hits.entry(hash).or_default().push(pos + 1 - k);
                    }
                }
                KmerIndex::Perfect {
                    alphabet,
                    modulus,
                    hits,
                }
            }
            None => {
                let mut hits: FxHashMap<&[u8], Vec<usize>> = FxHashMap::default();
                for (col, kmer) in b.windows(k).enumerate() {
                    hits.entry(kmer).or_default().push(col);
                }
                KmerIndex::Slices { hits }
            }
        }
    }
}

/// Lazy per-row match lists.
///
/// Yields one list per position of the first sequence. The list for row `r`
/// holds, in increasing order, every column `c` with `a[r..r + k] == b[c..c + k]`.
/// Rows too close to the end of `a` yield empty lists, as do all rows when `k`
/// is zero or longer than either sequence.
pub struct RowMatches<'a> {
    a: &'a [u8],
    k: usize,
    row: usize,
    index: Option<KmerIndex<'a>>,
    roller: Option<Roller>,
    hashed: usize,
}

impl<'a> RowMatches<'a> {
    pub fn new(a: &'a [u8], b: &'a [u8], k: usize) -> Self {
        let usable = k > 0 && k <= a.len() && k <= b.len();
        let index = usable.then(|| KmerIndex::build(a, b, k));
        let roller = match &index {
            Some(KmerIndex::Perfect {
                alphabet, modulus, ..
            }) => Some(Roller::new(alphabet.size, *modulus)),
            _ => None,
        };

        RowMatches {
            a,
            k,
            row: 0,
            index,
            roller,
            hashed: 0,
        }
    }

    /// Whether k-mers are keyed by the perfect rolling hash.
    pub fn uses_perfect_hash(&self) -> bool {
        matches!(self.index, Some(KmerIndex::Perfect { .. }))
    }

    fn columns(&mut self, row: usize) -> Vec<usize> {
        let k = self.k;
        if row + k > self.a.len() {
            return Vec::new();
        }

        let hits = match &self.index {
            None => None,
            Some(KmerIndex::Slices { hits }) => hits.get(&self.a[row..row + k]),
            Some(KmerIndex::Perfect { alphabet, hits, .. }) => {
                let Some(roller) = self.roller.as_mut() else {
                    return Vec::new();
                };
                let mut hash = 0;
                while self.hashed < row + k {
                    hash = roller.push(alphabet.id(self.a[self.hashed]));
                    self.hashed += 1;
                }
                hits.get(&hash)
            }
        };
        hits.cloned().unwrap_or_default()
    }
}

impl Iterator for RowMatches<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.a.len() {
            return None;
        }
        let cols = self.columns(self.row);
        self.row += 1;
        Some(cols)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.a.len() - self.row;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RowMatches<'_> {}

/// Every `(row, col)` k-block match, ordered by row then column.
pub fn all_matches(a: &[u8], b: &[u8], k: usize) -> Vec<(usize, usize)> {
    RowMatches::new(a, b, k)
        .enumerate()
        .flat_map(|(row, cols)| cols.into_iter().map(move |col| (row, col)))
        .collect()
}
