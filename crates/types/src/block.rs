//! The space / row / block data model.
//!
//! A space holds rows, a row holds blocks ordered by a dense per-row
//! index, and a block holds an ordered list of content entities.

use crate::content::ContentEntity;
use crate::flex::RowAlign;
use crate::ids::{BlockId, SpaceId};
use serde::{Deserialize, Serialize};

/// The visual size level of a block.
///
/// `Small` through `ExtraLarge` are the fixed levels 1 through 4.
/// `Half` has no fixed level: it always occupies exactly half of the
/// current level budget, so its effective level changes with the
/// viewport and must be computed at pack time, never substituted with
/// a constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum BlockSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    Half,
}

impl BlockSize {
    /// The fixed level of this size, or `None` for the budget-relative
    /// `Half` size.
    pub fn fixed_level(self) -> Option<u32> {
        match self {
            BlockSize::Small => Some(1),
            BlockSize::Medium => Some(2),
            BlockSize::Large => Some(3),
            BlockSize::ExtraLarge => Some(4),
            BlockSize::Half => None,
        }
    }
}

/// A stored content block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub space: SpaceId,
    pub row_index: u32,
    /// Position within the row. Unique per row at any point in time.
    pub block_index: u32,
    pub size: BlockSize,
    pub entities: Vec<ContentEntity>,
}

/// The insert payload for a block that does not yet have a store id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlock {
    pub space: SpaceId,
    pub row_index: u32,
    /// Requested position within the row. `None` requests an append.
    pub block_index: Option<u32>,
    pub size: BlockSize,
    pub entities: Vec<ContentEntity>,
}

impl NewBlock {
    /// Converts this payload into a stored block at the given position.
    pub fn into_block(self, id: BlockId, block_index: u32) -> Block {
        Block {
            id,
            space: self.space,
            row_index: self.row_index,
            block_index,
            size: self.size,
            entities: self.entities,
        }
    }
}

/// A full-replacement update of a block's mutable fields.
///
/// `block_index: None` means the caller did not explicitly set the
/// index. When the row also changes, the block is then appended to the
/// target row instead of colliding with an unrelated index there.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPatch {
    pub row_index: u32,
    pub block_index: Option<u32>,
    pub size: BlockSize,
    pub entities: Vec<ContentEntity>,
}

/// Per-row metadata, created lazily by the first block write that
/// targets the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowMeta {
    pub space: SpaceId,
    pub row_index: u32,
    pub align: RowAlign,
    pub stretch: bool,
}

impl RowMeta {
    /// The metadata a freshly referenced row starts out with.
    pub fn new_default(space: SpaceId, row_index: u32) -> Self {
        Self {
            space,
            row_index,
            align: RowAlign::default(),
            stretch: false,
        }
    }
}

/// Per-space render hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpaceMeta {
    pub id: SpaceId,
    /// When set, the blocks of a row's final batch grow to fill the
    /// remaining track width.
    pub stretch_last_blocks: bool,
}

impl SpaceMeta {
    /// The metadata a never-written space is treated as having.
    pub fn new_default(id: SpaceId) -> Self {
        Self {
            id,
            stretch_last_blocks: false,
        }
    }
}
