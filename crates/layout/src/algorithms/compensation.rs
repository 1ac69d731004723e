//! Separator-width compensation.
//!
//! A batch of k blocks renders k-1 internal separators, so a row whose
//! batches hold different block counts shows different amounts of
//! separator width even when the content sums match. Each batch below
//! the row's maximum separator count gets the missing separator width
//! back, spread equally across its blocks.

use crate::algorithms::packing::Batch;

/// The width of one internal separator, in abstract spacing units.
pub const MARGIN_UNIT: f32 = 8.0;

/// Computes the extra per-block width of every batch.
///
/// The returned vector is index-aligned with `batches`. Batches at the
/// row's maximum padding count get exactly `0.0`; all others get a
/// strictly positive compensator.
pub fn compensate(batches: &[Batch<'_>]) -> Vec<f32> {
    let max_padding = batches
        .iter()
        .map(Batch::padding_count)
        .max()
        .unwrap_or(0);

    batches
        .iter()
        .map(|batch| {
            let padding = batch.padding_count();
            if padding < max_padding {
                (max_padding - padding) as f32 * MARGIN_UNIT / batch.len() as f32
            } else {
                0.0
            }
        })
        .collect()
}
