//! Longest common subsequence in k-length blocks.
//!
//! LCSk aligns two sequences using only exact length-k blocks, scored in
//! multiples of k. LCSk++ also lets overlapping blocks extend one another one
//! position at a time, so runs longer than k score at single-symbol
//! resolution.
//!
//! # Core Components
//!
//! * [`node`] - Chain nodes linked to their parents, plus allocation counters.
//! * [`events`] - Row-keyed queue of blocks being scored and blocks maturing.
//! * [`table`] - The compressed table and its two query strategies.
//! * [`sweep`] - The row processor driving one pass of the dynamic program.
//! * [`recon`] - Expanding the best chain into aligned pairs.
//! * [`multistart`] - Repeated passes over halved match sets, reverse merging.
//! * [`align`] - Entry points taking two sequences and [`LcskParams`].
//!
//! # Algorithm Overview
//!
//! 1. **Input**: for every row of the first sequence, the start columns of the
//!    k-blocks it shares with the second one (see [`crate::libs::matches`]).
//! 2. **Begin events**: a block starting at `(i, j)` takes the best chain
//!    ending strictly left of column `j`, found by a forward sweep or by binary
//!    search, whichever is cheaper for the row. Its score is that chain's plus k.
//! 3. **End events**: `k - 1` rows later the block is final. Under LCSk++ it may
//!    instead extend a block that ended one row and one column earlier, for
//!    +1. It is then folded into the table.
//! 4. **Reconstruction**: the top table slot is walked back to its root.
//!
//! The whole pass costs O((n + r) log r) for n rows and r matches.

pub mod align;
pub mod events;
pub mod multistart;
pub mod node;
pub mod params;
pub mod recon;
pub mod sweep;
pub mod table;

pub use align::{lcsk_sparse_fast, lcsk_sparse_fast_with_stats};
pub use events::EventQueue;
pub use multistart::{merge_reverse, multistart, single_start};
pub use node::{ChainNode, NodeStats};
pub use params::{LcskError, LcskParams, Mode};
pub use recon::reconstruct;
pub use sweep::Sweep;
pub use table::{BinarySearchQuery, CompressedTable, QueryStrategy, SweepQuery, TableQuery};
