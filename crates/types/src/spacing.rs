//! Position flags and margin values shared by the margin policy and
//! the render dispatch seam.

use serde::{Deserialize, Serialize};

/// Where a run or batch element sits relative to its neighbours.
///
/// `last_in_block` is distinct from `last`: a renderer subdividing a
/// run may emit elements that end the run without ending the block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RunPosition {
    pub first: bool,
    pub last: bool,
    pub last_in_block: bool,
}

/// Vertical margins in abstract spacing units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
}
