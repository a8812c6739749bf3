pub mod libs;

pub use crate::libs::io::*;
pub use crate::libs::lcsk::{
    lcsk_sparse_fast, lcsk_sparse_fast_with_stats, LcskError, LcskParams, Mode, NodeStats,
};
pub use crate::libs::matches::{all_matches, RowMatches};
