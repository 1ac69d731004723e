//! Collaborator seams for the atrium content engine.
//!
//! The ordering manager and the integration layer depend only on the
//! traits defined here, never on a concrete storage engine, viewport
//! source, or renderer.

pub mod render;
pub mod store;
pub mod viewport;

pub use render::{RenderContext, RenderError, RendererRegistry, RunRenderer};
pub use store::{BlockStore, InMemoryBlockStore, StoreError};
pub use viewport::{BreakpointTable, FixedBudget, LevelBudget};
