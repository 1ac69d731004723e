use atrium::{
    Block, BlockSize, ContentEntity, EntityAlign, EntityKind, InMemoryBlockStore, Margins,
    NewBlock, RenderContext, RenderError, RendererRegistry, RunPosition, RunRenderer,
    SpaceEngine, SpaceId, SpaceLimits,
};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// One recorded dispatch, as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub kind: EntityKind,
    pub entity_count: usize,
    pub align: EntityAlign,
    pub position: RunPosition,
    pub margins: Margins,
    pub compensator: f32,
}

pub type CallLog = Arc<Mutex<Vec<RenderCall>>>;

/// A renderer that records every dispatch into a shared log.
#[derive(Debug)]
pub struct RecordingRenderer {
    kind: EntityKind,
    log: CallLog,
}

impl RunRenderer for RecordingRenderer {
    fn render(&self, entities: &[ContentEntity], ctx: &RenderContext) -> Result<(), RenderError> {
        self.log
            .lock()
            .map_err(|_| RenderError::Failed {
                renderer: "RecordingRenderer",
                message: "call log lock poisoned".to_string(),
            })?
            .push(RenderCall {
                kind: self.kind,
                entity_count: entities.len(),
                align: ctx.align,
                position: ctx.position,
                margins: ctx.margins,
                compensator: ctx.compensator,
            });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RecordingRenderer"
    }
}

/// A registry with recording renderers for the given kinds, plus the
/// shared log they all write to.
pub fn recording_registry(kinds: &[EntityKind]) -> (RendererRegistry, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = RendererRegistry::new();
    for &kind in kinds {
        registry.register(
            kind,
            Box::new(RecordingRenderer {
                kind,
                log: log.clone(),
            }),
        );
    }
    (registry, log)
}

/// An engine over a fresh in-memory store with no renderers.
pub fn test_engine() -> SpaceEngine {
    SpaceEngine::new(
        Arc::new(InMemoryBlockStore::new()),
        SpaceLimits::default(),
        RendererRegistry::new(),
    )
}

/// An engine whose renderers record every dispatch for all kinds.
pub fn recording_engine() -> (SpaceEngine, CallLog) {
    let (registry, log) = recording_registry(&[
        EntityKind::Text,
        EntityKind::Image,
        EntityKind::Button,
        EntityKind::Embed,
        EntityKind::Divider,
    ]);
    let engine = SpaceEngine::new(
        Arc::new(InMemoryBlockStore::new()),
        SpaceLimits::default(),
        registry,
    );
    (engine, log)
}

pub fn sized_block(row: u32, index: Option<u32>, size: BlockSize) -> NewBlock {
    NewBlock {
        space: SpaceId::root(),
        row_index: row,
        block_index: index,
        size,
        entities: vec![],
    }
}

pub fn text(content: &str) -> ContentEntity {
    ContentEntity::Text {
        text: content.into(),
        align: EntityAlign::Center,
    }
}

pub fn image(src: &str) -> ContentEntity {
    ContentEntity::Image {
        src: src.into(),
        alt: None,
        align: EntityAlign::Center,
    }
}

pub fn indices_of(blocks: &[Block]) -> Vec<u32> {
    blocks.iter().map(|b| b.block_index).collect()
}
