//! Renderer dispatch seam.
//!
//! Runs are dispatched by entity kind through a registry resolved once
//! at startup. The engine never produces pixels; a renderer receives a
//! homogeneous run plus its layout context and does whatever its
//! backend needs.

use atrium_types::content::{ContentEntity, EntityAlign, EntityKind};
use atrium_types::spacing::{Margins, RunPosition};
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for run rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no renderer registered for {0:?} entities")]
    NoRenderer(EntityKind),

    #[error("renderer '{renderer}' failed: {message}")]
    Failed {
        renderer: &'static str,
        message: String,
    },
}

/// Layout context handed to a renderer alongside a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Alignment shared by every entity in the run.
    pub align: EntityAlign,
    /// Margins computed by the margin policy for this run.
    pub margins: Margins,
    /// Extra per-block width from the batch's compensator.
    pub compensator: f32,
    /// Boundary flags for the run within its block and batch.
    pub position: RunPosition,
}

/// A renderer for runs of one entity kind.
pub trait RunRenderer: Send + Sync + Debug {
    /// Render one alignment-homogeneous run.
    fn render(&self, entities: &[ContentEntity], ctx: &RenderContext) -> Result<(), RenderError>;

    /// Returns a human-readable name for this renderer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A dispatch table from entity kind to renderer.
///
/// Built once at startup; lookup afterwards is a plain map access
/// rather than a string comparison.
#[derive(Debug, Default)]
pub struct RendererRegistry {
    renderers: HashMap<EntityKind, Box<dyn RunRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the renderer for one entity kind, replacing any
    /// previous registration.
    pub fn register(&mut self, kind: EntityKind, renderer: Box<dyn RunRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    /// Whether a renderer is registered for the kind.
    pub fn supports(&self, kind: EntityKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Dispatch a run to the renderer registered for its kind.
    pub fn dispatch(
        &self,
        kind: EntityKind,
        entities: &[ContentEntity],
        ctx: &RenderContext,
    ) -> Result<(), RenderError> {
        self.renderers
            .get(&kind)
            .ok_or(RenderError::NoRenderer(kind))?
            .render(entities, ctx)
    }
}
