//! Capacity limits enforced by the ordering manager.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceLimits {
    /// The maximum number of blocks a single space may hold, across
    /// all of its rows. Placement is rejected with `CapacityExceeded`
    /// before any mutation once the limit is reached.
    ///
    /// Defaults to `64`.
    pub max_blocks_per_space: usize,

    /// The maximum number of content entities a single block may
    /// carry. Checked on insert and on every full-replacement update.
    ///
    /// Defaults to `32`.
    pub max_entities_per_block: usize,
}

impl Default for SpaceLimits {
    fn default() -> Self {
        Self {
            max_blocks_per_space: 64,
            max_entities_per_block: 32,
        }
    }
}
