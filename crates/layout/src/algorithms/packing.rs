//! Greedy row packing.
//!
//! Splits an ordered block list into width-bounded batches. The pass
//! is sequential and order-preserving: a block is never reordered or
//! split to fit better, only appended to the running batch or made the
//! start of the next one.

use atrium_types::block::{Block, BlockSize};

/// Tolerance for floating point sums of relative sizes.
const EPSILON: f32 = 0.01;

/// A maximal group of consecutive blocks whose summed relative size
/// fits the level budget. Always a contiguous subslice of the row.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    pub blocks: &'a [Block],
    /// Sum of the member blocks' relative sizes under the budget the
    /// batch was packed with.
    pub level_total: f32,
}

impl<'a> Batch<'a> {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The number of internal separators the batch renders, i.e. one
    /// less than its block count.
    pub fn padding_count(&self) -> usize {
        self.blocks.len().saturating_sub(1)
    }
}

/// The size-level a block effectively occupies under a given budget.
///
/// Fixed levels are clamped to the budget so a single block always
/// fits on its own. `Half` is always exactly half of the current
/// budget, whatever that budget is.
pub fn relative_size(size: BlockSize, budget: u32) -> f32 {
    let budget = budget as f32;
    match size.fixed_level() {
        Some(level) => (level as f32).min(budget),
        None => budget / 2.0,
    }
}

/// Packs an ordered block list into budget-bounded batches.
///
/// Deterministic for a fixed input and budget; empty input yields an
/// empty batch list.
pub fn pack(blocks: &[Block], budget: u32) -> Vec<Batch<'_>> {
    let budget_f = budget as f32;
    let mut batches = Vec::new();
    let mut start = 0;
    let mut total = 0.0_f32;

    for (i, block) in blocks.iter().enumerate() {
        let size = relative_size(block.size, budget);
        if i > start && total + size > budget_f + EPSILON {
            batches.push(Batch {
                blocks: &blocks[start..i],
                level_total: total,
            });
            start = i;
            total = 0.0;
        }
        total += size;
    }

    if start < blocks.len() {
        batches.push(Batch {
            blocks: &blocks[start..],
            level_total: total,
        });
    }

    log::debug!(
        "packed {} blocks into {} batches (budget {})",
        blocks.len(),
        batches.len(),
        budget
    );
    batches
}
