//! BlockStore trait for abstracting block persistence.
//!
//! This trait allows the ordering manager to read and mutate blocks
//! without being tied to any particular storage engine.

use atrium_types::block::{Block, NewBlock, RowMeta, SpaceMeta};
use atrium_types::ids::{BlockId, SpaceId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for block persistence operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("duplicate block index {index} in row {row} of space '{space}'")]
    DuplicateIndex {
        space: SpaceId,
        row: u32,
        index: u32,
    },

    #[error("store backend error: {0}")]
    Backend(String),
}

/// A trait for reading and mutating stored blocks.
///
/// Implementations must keep `shift_indices` atomic: either every
/// affected block's index moves, or none does. The ordering manager
/// relies on this to rule out partial renumbering.
///
/// # Implementations
///
/// - [`InMemoryBlockStore`]: stores everything in process memory
///   (always available, used by the test suites)
pub trait BlockStore: Send + Sync + Debug {
    /// List the blocks of one row, ordered by ascending block index.
    fn list_blocks(&self, space: &SpaceId, row: u32) -> Result<Vec<Block>, StoreError>;

    /// The distinct row indices of a space that hold at least one
    /// block, in ascending order.
    fn list_rows(&self, space: &SpaceId) -> Result<Vec<u32>, StoreError>;

    /// Fetch a single block by id.
    fn get_block(&self, id: BlockId) -> Result<Block, StoreError>;

    /// Insert a new block at the position already carried by the
    /// payload, assigning it a fresh id.
    ///
    /// Fails with [`StoreError::DuplicateIndex`] if the position is
    /// taken; position validation beyond that is the ordering
    /// manager's job.
    fn insert_block(&self, block: NewBlock, index: u32) -> Result<Block, StoreError>;

    /// Replace a stored block wholesale.
    fn update_block(&self, block: Block) -> Result<Block, StoreError>;

    /// Shift the index of every block in the row with
    /// `block_index >= from` by `delta`, as one atomic unit.
    fn shift_indices(
        &self,
        space: &SpaceId,
        row: u32,
        from: u32,
        delta: i32,
    ) -> Result<(), StoreError>;

    /// Remove a block. Indices of the remaining blocks are left
    /// untouched; gaps are tolerated.
    fn remove_block(&self, id: BlockId) -> Result<(), StoreError>;

    /// The total number of blocks in a space, across all rows.
    fn count_blocks(&self, space: &SpaceId) -> Result<usize, StoreError>;

    /// The metadata of a row, if it has ever been written.
    fn row(&self, space: &SpaceId, row: u32) -> Result<Option<RowMeta>, StoreError>;

    /// Fetch row metadata, creating the default (center-aligned,
    /// unstretched) record on first reference.
    fn ensure_row(&self, space: &SpaceId, row: u32) -> Result<RowMeta, StoreError>;

    /// Replace a row's metadata.
    fn update_row(&self, row: RowMeta) -> Result<RowMeta, StoreError>;

    /// Per-space render hints, defaulted for spaces never written.
    fn space(&self, space: &SpaceId) -> Result<SpaceMeta, StoreError>;

    /// Replace a space's metadata.
    fn update_space(&self, space: SpaceMeta) -> Result<SpaceMeta, StoreError>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct StoreInner {
    blocks: HashMap<BlockId, Block>,
    rows: HashMap<(SpaceId, u32), RowMeta>,
    spaces: HashMap<SpaceId, SpaceMeta>,
    next_id: u64,
}

/// An in-memory block store.
///
/// All state lives in process memory behind a single `RwLock`, which
/// makes `shift_indices` trivially atomic: the whole renumbering
/// happens inside one write-lock critical section.
#[derive(Debug, Default)]
pub struct InMemoryBlockStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreInner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("block store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("block store lock poisoned".to_string()))
    }
}

impl BlockStore for InMemoryBlockStore {
    fn list_blocks(&self, space: &SpaceId, row: u32) -> Result<Vec<Block>, StoreError> {
        let inner = self.read()?;
        let mut blocks: Vec<Block> = inner
            .blocks
            .values()
            .filter(|b| &b.space == space && b.row_index == row)
            .cloned()
            .collect();
        blocks.sort_by_key(|b| b.block_index);
        Ok(blocks)
    }

    fn list_rows(&self, space: &SpaceId) -> Result<Vec<u32>, StoreError> {
        let inner = self.read()?;
        let mut rows: Vec<u32> = inner
            .blocks
            .values()
            .filter(|b| &b.space == space)
            .map(|b| b.row_index)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        Ok(rows)
    }

    fn get_block(&self, id: BlockId) -> Result<Block, StoreError> {
        let inner = self.read()?;
        inner
            .blocks
            .get(&id)
            .cloned()
            .ok_or(StoreError::BlockNotFound(id))
    }

    fn insert_block(&self, block: NewBlock, index: u32) -> Result<Block, StoreError> {
        let mut inner = self.write()?;
        let taken = inner
            .blocks
            .values()
            .any(|b| b.space == block.space && b.row_index == block.row_index && b.block_index == index);
        if taken {
            return Err(StoreError::DuplicateIndex {
                space: block.space.clone(),
                row: block.row_index,
                index,
            });
        }
        let id = BlockId::new(inner.next_id);
        inner.next_id += 1;
        let stored = block.into_block(id, index);
        inner.blocks.insert(id, stored.clone());
        Ok(stored)
    }

    fn update_block(&self, block: Block) -> Result<Block, StoreError> {
        let mut inner = self.write()?;
        if !inner.blocks.contains_key(&block.id) {
            return Err(StoreError::BlockNotFound(block.id));
        }
        let collision = inner.blocks.values().any(|b| {
            b.id != block.id
                && b.space == block.space
                && b.row_index == block.row_index
                && b.block_index == block.block_index
        });
        if collision {
            return Err(StoreError::DuplicateIndex {
                space: block.space.clone(),
                row: block.row_index,
                index: block.block_index,
            });
        }
        inner.blocks.insert(block.id, block.clone());
        Ok(block)
    }

    fn shift_indices(
        &self,
        space: &SpaceId,
        row: u32,
        from: u32,
        delta: i32,
    ) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        for block in inner.blocks.values_mut() {
            if &block.space == space && block.row_index == row && block.block_index >= from {
                block.block_index = block.block_index.saturating_add_signed(delta);
            }
        }
        Ok(())
    }

    fn remove_block(&self, id: BlockId) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        inner
            .blocks
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::BlockNotFound(id))
    }

    fn count_blocks(&self, space: &SpaceId) -> Result<usize, StoreError> {
        let inner = self.read()?;
        Ok(inner.blocks.values().filter(|b| &b.space == space).count())
    }

    fn row(&self, space: &SpaceId, row: u32) -> Result<Option<RowMeta>, StoreError> {
        let inner = self.read()?;
        Ok(inner.rows.get(&(space.clone(), row)).cloned())
    }

    fn ensure_row(&self, space: &SpaceId, row: u32) -> Result<RowMeta, StoreError> {
        let mut inner = self.write()?;
        let meta = inner
            .rows
            .entry((space.clone(), row))
            .or_insert_with(|| RowMeta::new_default(space.clone(), row));
        Ok(meta.clone())
    }

    fn update_row(&self, row: RowMeta) -> Result<RowMeta, StoreError> {
        let mut inner = self.write()?;
        inner
            .rows
            .insert((row.space.clone(), row.row_index), row.clone());
        Ok(row)
    }

    fn space(&self, space: &SpaceId) -> Result<SpaceMeta, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .spaces
            .get(space)
            .cloned()
            .unwrap_or_else(|| SpaceMeta::new_default(space.clone())))
    }

    fn update_space(&self, space: SpaceMeta) -> Result<SpaceMeta, StoreError> {
        let mut inner = self.write()?;
        inner.spaces.insert(space.id.clone(), space.clone());
        Ok(space)
    }

    fn name(&self) -> &'static str {
        "InMemoryBlockStore"
    }
}
