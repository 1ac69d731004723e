//! Alignment enums for rows and their downstream flex mapping.
use serde::{Deserialize, Serialize};

/// How a row distributes its blocks horizontally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum RowAlign {
    Start,
    End,
    #[default]
    Center,
    Between,
}

/// The flex `justify-content` value a row alignment maps to downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    #[default]
    Center,
    SpaceBetween,
}

impl From<RowAlign> for JustifyContent {
    fn from(align: RowAlign) -> Self {
        match align {
            RowAlign::Start => JustifyContent::FlexStart,
            RowAlign::End => JustifyContent::FlexEnd,
            RowAlign::Center => JustifyContent::Center,
            RowAlign::Between => JustifyContent::SpaceBetween,
        }
    }
}
