//! The per-row layout facade tying packing, compensation, and batch
//! directives together for downstream render dispatch.

use crate::algorithms::compensation::compensate;
use crate::algorithms::packing::{Batch, pack};
use crate::align::{BatchDirectives, batch_directives};
use atrium_types::block::{Block, RowMeta, SpaceMeta};

/// One packed batch together with everything render dispatch needs.
#[derive(Debug, Clone, Copy)]
pub struct BatchLayout<'a> {
    pub batch: Batch<'a>,
    /// Extra per-block width offsetting this batch's smaller separator
    /// count, zero for the row's fullest batch(es).
    pub compensator: f32,
    pub directives: BatchDirectives,
}

/// The full layout of one row under a level budget.
#[derive(Debug, Clone)]
pub struct RowLayout<'a> {
    pub batches: Vec<BatchLayout<'a>>,
}

impl<'a> RowLayout<'a> {
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Lays out one row: greedy packing, then separator compensation, then
/// the metadata-driven flex directives per batch.
///
/// Pure over the snapshot; identical input yields identical output.
pub fn layout_row<'a>(
    blocks: &'a [Block],
    row: &RowMeta,
    space: &SpaceMeta,
    budget: u32,
) -> RowLayout<'a> {
    let batches = pack(blocks, budget);
    let compensators = compensate(&batches);
    let last = batches.len().saturating_sub(1);

    let batches = batches
        .into_iter()
        .zip(compensators)
        .enumerate()
        .map(|(i, (batch, compensator))| BatchLayout {
            batch,
            compensator,
            directives: batch_directives(row, space, i == last),
        })
        .collect();

    RowLayout { batches }
}
