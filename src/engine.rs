//! The engine facade composing storage, ordering, layout, and render
//! dispatch.

use crate::error::EngineError;
use atrium_layout::{RowLayout, layout_row, run_margins, segment};
use atrium_ordering::{OrderingManager, SpaceLimits};
use atrium_traits::render::{RenderContext, RendererRegistry};
use atrium_traits::store::BlockStore;
use atrium_traits::viewport::LevelBudget;
use atrium_types::block::{Block, BlockPatch, NewBlock, RowMeta, SpaceMeta};
use atrium_types::ids::{BlockId, SpaceId};
use atrium_types::spacing::RunPosition;
use std::sync::Arc;

#[cfg(feature = "rayon-executor")]
use rayon::prelude::*;

/// An immutable snapshot of one row, ready for the pure layout passes.
#[derive(Debug, Clone)]
pub struct RowSnapshot {
    pub blocks: Vec<Block>,
    pub row: RowMeta,
    pub space: SpaceMeta,
}

impl RowSnapshot {
    /// Lays the snapshot out under a level budget.
    pub fn layout(&self, budget: u32) -> RowLayout<'_> {
        layout_row(&self.blocks, &self.row, &self.space, budget)
    }
}

/// Summary of one laid-out row, for queries that do not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSummary {
    pub row_index: u32,
    pub block_count: usize,
    pub batch_count: usize,
}

/// The top-level handle over one block store.
///
/// Mutations go through the ordering manager; reads produce immutable
/// snapshots that the pure layout passes consume. Rendering walks the
/// laid-out batches and dispatches each block's runs through the
/// registry.
#[derive(Debug)]
pub struct SpaceEngine {
    store: Arc<dyn BlockStore>,
    ordering: OrderingManager,
    renderers: RendererRegistry,
}

impl SpaceEngine {
    pub fn new(
        store: Arc<dyn BlockStore>,
        limits: SpaceLimits,
        renderers: RendererRegistry,
    ) -> Self {
        let ordering = OrderingManager::new(store.clone(), limits);
        Self {
            store,
            ordering,
            renderers,
        }
    }

    pub fn store(&self) -> &Arc<dyn BlockStore> {
        &self.store
    }

    pub fn place_block(&self, new: NewBlock) -> Result<Block, EngineError> {
        Ok(self.ordering.place_block(new)?)
    }

    pub fn update_block(&self, id: BlockId, patch: BlockPatch) -> Result<Block, EngineError> {
        Ok(self.ordering.update_block(id, patch)?)
    }

    pub fn remove_block(&self, id: BlockId) -> Result<(), EngineError> {
        Ok(self.ordering.remove_block(id)?)
    }

    /// Reads one row's blocks and metadata as an immutable snapshot.
    pub fn snapshot_row(&self, space: &SpaceId, row: u32) -> Result<RowSnapshot, EngineError> {
        let blocks = self.store.list_blocks(space, row)?;
        let row_meta = self
            .store
            .row(space, row)?
            .unwrap_or_else(|| RowMeta::new_default(space.clone(), row));
        let space_meta = self.store.space(space)?;
        Ok(RowSnapshot {
            blocks,
            row: row_meta,
            space: space_meta,
        })
    }

    /// Lays out every populated row of a space.
    ///
    /// With the `rayon-executor` feature, rows are processed on the
    /// rayon pool; the passes themselves are pure, so no coordination
    /// is needed.
    pub fn layout_space(
        &self,
        space: &SpaceId,
        budget: &dyn LevelBudget,
    ) -> Result<Vec<RowSummary>, EngineError> {
        let rows = self.store.list_rows(space)?;
        let budget = budget.max_level_budget();

        #[cfg(feature = "rayon-executor")]
        let iter = rows.into_par_iter();
        #[cfg(not(feature = "rayon-executor"))]
        let iter = rows.into_iter();

        iter.map(|row_index| {
            let snapshot = self.snapshot_row(space, row_index)?;
            let layout = snapshot.layout(budget);
            Ok(RowSummary {
                row_index,
                block_count: snapshot.blocks.len(),
                batch_count: layout.batches.len(),
            })
        })
        .collect()
    }

    /// Renders one row: pack, compensate, segment, and dispatch every
    /// run to its kind's renderer with margins and position flags.
    pub fn render_row(
        &self,
        space: &SpaceId,
        row: u32,
        budget: &dyn LevelBudget,
        top_default: f32,
    ) -> Result<(), EngineError> {
        let snapshot = self.snapshot_row(space, row)?;
        let layout = snapshot.layout(budget.max_level_budget());

        for batch in &layout.batches {
            let block_count = batch.batch.len();
            for (block_idx, block) in batch.batch.blocks.iter().enumerate() {
                let runs = segment(&block.entities);
                let run_count = runs.len();
                for (run_idx, run) in runs.iter().enumerate() {
                    let position = RunPosition {
                        first: block_idx == 0 && run_idx == 0,
                        last: block_idx + 1 == block_count && run_idx + 1 == run_count,
                        last_in_block: run_idx + 1 == run_count,
                    };
                    let ctx = RenderContext {
                        align: run.align,
                        margins: run_margins(position, top_default),
                        compensator: batch.compensator,
                        position,
                    };
                    self.renderers.dispatch(run.kind, run.entities, &ctx)?;
                }
            }
        }
        Ok(())
    }

    /// Renders every populated row of a space in row order.
    pub fn render_space(
        &self,
        space: &SpaceId,
        budget: &dyn LevelBudget,
        top_default: f32,
    ) -> Result<(), EngineError> {
        let rows = self.store.list_rows(space)?;
        log::debug!("rendering space '{}' ({} rows)", space, rows.len());
        for row in rows {
            self.render_row(space, row, budget, top_default)?;
        }
        Ok(())
    }
}
