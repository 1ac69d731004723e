//! Block placement, movement, and removal.

use crate::{OrderingError, SpaceLimits};
use atrium_types::block::{Block, BlockPatch, NewBlock};
use atrium_types::content::ContentEntity;
use atrium_types::ids::{BlockId, SpaceId};
use atrium_traits::store::{BlockStore, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

type RowKey = (SpaceId, u32);

/// Serializes index mutations per row and keeps every row's block
/// indices dense and unique.
///
/// Placement follows one rule set: a request for the next free index
/// is an append; a request at or below the latest occupied index
/// shifts the tail of the row up by one and takes the freed slot;
/// anything beyond the next free index is rejected. Capacity checks
/// run strictly before any mutation.
#[derive(Debug)]
pub struct OrderingManager {
    store: Arc<dyn BlockStore>,
    limits: SpaceLimits,
    row_locks: Mutex<HashMap<RowKey, Arc<Mutex<()>>>>,
}

impl OrderingManager {
    pub fn new(store: Arc<dyn BlockStore>, limits: SpaceLimits) -> Self {
        Self {
            store,
            limits,
            row_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn limits(&self) -> SpaceLimits {
        self.limits
    }

    /// The single-writer lock of one row. Rows that were never touched
    /// get their lock lazily; unrelated rows never contend.
    fn row_lock(&self, space: &SpaceId, row: u32) -> Arc<Mutex<()>> {
        let mut locks = self
            .row_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks
            .entry((space.clone(), row))
            .or_default()
            .clone()
    }

    fn check_entity_count(&self, entities: &[ContentEntity]) -> Result<(), OrderingError> {
        if entities.len() > self.limits.max_entities_per_block {
            return Err(OrderingError::EntityLimitExceeded {
                count: entities.len(),
                limit: self.limits.max_entities_per_block,
            });
        }
        Ok(())
    }

    fn fetch_block(&self, id: BlockId) -> Result<Block, OrderingError> {
        self.store.get_block(id).map_err(|err| match err {
            StoreError::BlockNotFound(id) => OrderingError::UnknownBlock(id),
            other => OrderingError::Store(other),
        })
    }

    /// Places a new block in its row.
    ///
    /// A `block_index` of `None` requests an append. The target row is
    /// created lazily with default metadata if this is its first
    /// block.
    pub fn place_block(&self, new: NewBlock) -> Result<Block, OrderingError> {
        self.check_entity_count(&new.entities)?;

        let lock = self.row_lock(&new.space, new.row_index);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let count = self.store.count_blocks(&new.space)?;
        if count >= self.limits.max_blocks_per_space {
            return Err(OrderingError::CapacityExceeded {
                space: new.space.clone(),
                limit: self.limits.max_blocks_per_space,
            });
        }

        let existing = self.store.list_blocks(&new.space, new.row_index)?;
        let space = new.space.clone();
        let row = new.row_index;
        let plan = plan_placement(row, &existing, new.block_index)?;

        // The row's metadata comes into existence with its first block
        // write; a rejected placement must not create it.
        self.store.ensure_row(&space, row)?;
        self.apply_shift(&space, row, plan)?;
        Ok(self.store.insert_block(new, plan.index)?)
    }

    /// Replaces a block's mutable fields, re-placing it when its index
    /// or row changed.
    ///
    /// Moving to another row without an explicitly set index appends
    /// to the target row; the old row keeps its gap.
    pub fn update_block(&self, id: BlockId, patch: BlockPatch) -> Result<Block, OrderingError> {
        self.check_entity_count(&patch.entities)?;
        let current = self.fetch_block(id)?;

        if patch.row_index == current.row_index {
            self.update_within_row(current, patch)
        } else {
            self.move_across_rows(current, patch)
        }
    }

    /// Removes a block. Remaining indices are left untouched, so gaps
    /// may persist; later appends still go to `max + 1`.
    pub fn remove_block(&self, id: BlockId) -> Result<(), OrderingError> {
        let current = self.fetch_block(id)?;
        let lock = self.row_lock(&current.space, current.row_index);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.store.remove_block(id).map_err(|err| match err {
            StoreError::BlockNotFound(id) => OrderingError::UnknownBlock(id),
            other => OrderingError::Store(other),
        })
    }

    fn update_within_row(
        &self,
        current: Block,
        patch: BlockPatch,
    ) -> Result<Block, OrderingError> {
        let lock = self.row_lock(&current.space, current.row_index);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let target = patch.block_index.unwrap_or(current.block_index);
        let index = if target == current.block_index {
            current.block_index
        } else {
            // Placement is validated against the row as it would look
            // without the moving block; the overwrite below lands it
            // at the freed slot.
            let others: Vec<Block> = self
                .store
                .list_blocks(&current.space, current.row_index)?
                .into_iter()
                .filter(|b| b.id != current.id)
                .collect();
            let plan = plan_placement(current.row_index, &others, Some(target))?;
            self.apply_shift(&current.space, current.row_index, plan)?;
            plan.index
        };

        Ok(self.store.update_block(Block {
            id: current.id,
            space: current.space,
            row_index: current.row_index,
            block_index: index,
            size: patch.size,
            entities: patch.entities,
        })?)
    }

    fn move_across_rows(&self, current: Block, patch: BlockPatch) -> Result<Block, OrderingError> {
        // Both rows' locks are taken in index order so two opposing
        // moves cannot deadlock.
        let (low, high) = if current.row_index < patch.row_index {
            (current.row_index, patch.row_index)
        } else {
            (patch.row_index, current.row_index)
        };
        let low_lock = self.row_lock(&current.space, low);
        let high_lock = self.row_lock(&current.space, high);
        let _low_guard = low_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _high_guard = high_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let existing = self.store.list_blocks(&current.space, patch.row_index)?;
        let plan = plan_placement(patch.row_index, &existing, patch.block_index)?;
        self.store.ensure_row(&current.space, patch.row_index)?;
        self.apply_shift(&current.space, patch.row_index, plan)?;
        let index = plan.index;

        log::debug!(
            "moving block {} from row {} to row {} at index {}",
            current.id,
            current.row_index,
            patch.row_index,
            index
        );

        Ok(self.store.update_block(Block {
            id: current.id,
            space: current.space,
            row_index: patch.row_index,
            block_index: index,
            size: patch.size,
            entities: patch.entities,
        })?)
    }

    /// Performs the range shift a mid-row placement needs.
    ///
    /// Must be called with the row's lock held; the shift and the
    /// caller's subsequent write form one placement under that lock.
    fn apply_shift(&self, space: &SpaceId, row: u32, plan: Placement) -> Result<(), OrderingError> {
        if plan.needs_shift {
            self.store.shift_indices(space, row, plan.index, 1)?;
            log::debug!(
                "shifted row {} of space '{}' up from index {}",
                row,
                space,
                plan.index
            );
        }
        Ok(())
    }
}

/// The outcome of validating a requested index: where the block lands
/// and whether the row's tail must move up first.
#[derive(Debug, Clone, Copy)]
struct Placement {
    index: u32,
    needs_shift: bool,
}

/// Validates a requested index against a row snapshot. Pure: rejection
/// happens before any store mutation.
fn plan_placement(
    row: u32,
    existing: &[Block],
    requested: Option<u32>,
) -> Result<Placement, OrderingError> {
    let latest = existing.iter().map(|b| b.block_index).max();
    let next_free = latest.map_or(0, |l| l + 1);
    let requested = requested.unwrap_or(next_free);

    if requested == next_free {
        return Ok(Placement {
            index: requested,
            needs_shift: false,
        });
    }
    if latest.is_some_and(|l| requested <= l) {
        return Ok(Placement {
            index: requested,
            needs_shift: true,
        });
    }
    Err(OrderingError::InvalidIndex {
        row,
        requested,
        next_free,
    })
}
