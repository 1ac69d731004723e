//! Dense per-row block ordering under concurrent writers.
//!
//! The ordering manager owns every index mutation: placement of new
//! blocks, full-replacement updates (including moves across rows), and
//! removal. Mutations of one row are serialized through a per-row
//! lock, so two concurrent placements can never compute a shift plan
//! against stale data.

use atrium_types::ids::{BlockId, SpaceId};
use atrium_traits::store::StoreError;
use thiserror::Error;

mod limits;
mod manager;

pub use self::limits::SpaceLimits;
pub use self::manager::OrderingManager;

#[derive(Error, Debug)]
pub enum OrderingError {
    #[error(
        "invalid block index {requested} for row {row}: the next free index is {next_free}"
    )]
    InvalidIndex {
        row: u32,
        requested: u32,
        next_free: u32,
    },

    #[error("space '{space}' is at its capacity of {limit} blocks")]
    CapacityExceeded { space: SpaceId, limit: usize },

    #[error("block holds {count} entities, exceeding the limit of {limit}")]
    EntityLimitExceeded { count: usize, limit: usize },

    #[error("unknown block: {0}")]
    UnknownBlock(BlockId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
