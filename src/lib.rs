//! Atrium: a space/row/block content engine.
//!
//! A space holds rows of content blocks; a block holds an ordered list
//! of typed content entities. The server side keeps every row's block
//! indices dense and unique under concurrent writes; the client side
//! deterministically packs each row into width-bounded batches,
//! compensates uneven separator counts, and segments entity lists into
//! renderable runs.
//!
//! The root crate is the integration layer wiring those pieces over
//! the collaborator seams. The member crates carry the actual work:
//!
//! - `atrium-types`: the shared data model
//! - `atrium-traits`: storage, viewport, and renderer seams
//! - `atrium-layout`: the pure packing/segmentation passes
//! - `atrium-ordering`: the per-row serialized ordering manager

mod engine;
mod error;

pub use self::engine::{RowSnapshot, RowSummary, SpaceEngine};
pub use self::error::EngineError;

// Re-exports for convenience when using the engine as a single crate.
pub use atrium_layout as layout;
pub use atrium_ordering::{OrderingError, OrderingManager, SpaceLimits};
pub use atrium_traits::render::{RenderContext, RenderError, RendererRegistry, RunRenderer};
pub use atrium_traits::store::{BlockStore, InMemoryBlockStore, StoreError};
pub use atrium_traits::viewport::{Breakpoint, BreakpointTable, FixedBudget, LevelBudget};
pub use atrium_types::block::{
    Block, BlockPatch, BlockSize, NewBlock, RowMeta, SpaceMeta,
};
pub use atrium_types::content::{ContentEntity, EntityAlign, EntityKind};
pub use atrium_types::flex::{JustifyContent, RowAlign};
pub use atrium_types::ids::{BlockId, SpaceId};
pub use atrium_types::spacing::{Margins, RunPosition};
