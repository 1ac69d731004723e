//! Shared data types for the atrium content engine.

pub mod block;
pub mod content;
pub mod flex;
pub mod ids;
pub mod spacing;
