//! Typed content entities
//!
//! A [`ContentEntity`] is the leaf content unit of a block. Its position
//! within the block's entity list is its only identity: first/last
//! positional rules and run segmentation work purely off list order.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of an entity within its block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum EntityAlign {
    Start,
    #[default]
    Center,
    End,
}

/// The parameter-free tag of a [`ContentEntity`].
///
/// Used as the grouping key for run segmentation and as the dispatch
/// key of the renderer registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Text,
    Image,
    Button,
    Embed,
    Divider,
}

/// A typed, parameterized leaf content unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentEntity {
    /// A span of text.
    Text { text: String, align: EntityAlign },
    /// An image referenced by source URI.
    Image {
        src: String,
        alt: Option<String>,
        align: EntityAlign,
    },
    /// An actionable button.
    Button {
        label: String,
        action: String,
        align: EntityAlign,
    },
    /// Embedded external content referenced by URL.
    Embed { url: String, align: EntityAlign },
    /// A horizontal divider.
    Divider { align: EntityAlign },
}

impl ContentEntity {
    /// Returns the parameter-free tag of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            ContentEntity::Text { .. } => EntityKind::Text,
            ContentEntity::Image { .. } => EntityKind::Image,
            ContentEntity::Button { .. } => EntityKind::Button,
            ContentEntity::Embed { .. } => EntityKind::Embed,
            ContentEntity::Divider { .. } => EntityKind::Divider,
        }
    }

    /// Returns this entity's alignment parameter.
    pub fn align(&self) -> EntityAlign {
        match self {
            ContentEntity::Text { align, .. }
            | ContentEntity::Image { align, .. }
            | ContentEntity::Button { align, .. }
            | ContentEntity::Embed { align, .. }
            | ContentEntity::Divider { align } => *align,
        }
    }
}
