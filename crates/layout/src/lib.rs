//! Pure layout passes over immutable block snapshots.
//!
//! Everything in this crate is synchronous, side-effect free, and
//! total over empty input: packing, compensation, and segmentation
//! degrade to empty outputs instead of erroring. Callers may run these
//! passes concurrently across unrelated rows without coordination.

pub mod group;
pub mod margin;
pub mod segment;

pub mod algorithms;

mod align;
mod interface;

pub use self::align::{BatchDirectives, batch_directives};
pub use self::algorithms::compensation::{MARGIN_UNIT, compensate};
pub use self::algorithms::packing::{Batch, pack, relative_size};
pub use self::group::group_runs;
pub use self::interface::{BatchLayout, RowLayout, layout_row};
pub use self::margin::{BOTTOM_MARGIN_UNIT, run_margins};
pub use self::segment::{Run, segment};

// Re-export position/margin types used by the margin policy from the
// foundation crate to prevent type mismatches downstream.
pub use atrium_types::spacing::{Margins, RunPosition};
