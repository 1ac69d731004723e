//! Thin mapping from row/space metadata to per-batch flex directives.

use atrium_types::block::{RowMeta, SpaceMeta};
use atrium_types::flex::JustifyContent;

/// Downstream flex directives for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchDirectives {
    pub justify: JustifyContent,
    /// Blocks stretch to the batch's cross-axis height.
    pub stretch_items: bool,
    /// Blocks of this batch grow to fill the remaining track width.
    pub grow_blocks: bool,
}

/// Maps row and space metadata to the directives of one batch.
///
/// `stretch_last_blocks` only affects the final batch of a row.
pub fn batch_directives(row: &RowMeta, space: &SpaceMeta, is_last_batch: bool) -> BatchDirectives {
    BatchDirectives {
        justify: row.align.into(),
        stretch_items: row.stretch,
        grow_blocks: space.stretch_last_blocks && is_last_batch,
    }
}
