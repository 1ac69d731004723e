//! Newtype wrappers for semantic identifiers
//!
//! These types provide compile-time type safety to prevent mixing up
//! space names and block identifiers with plain strings and numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The name of the space every deployment has exactly one of.
const ROOT_SPACE: &str = "root";

/// An identifier for a content space.
///
/// A deployment always has one [`SpaceId::root`] space and may hold any
/// number of additional named spaces.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SpaceId(Arc<str>);

impl SpaceId {
    /// Creates a new SpaceId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The well-known root space.
    pub fn root() -> Self {
        Self(ROOT_SPACE.into())
    }

    /// Returns `true` if this is the root space.
    pub fn is_root(&self) -> bool {
        &*self.0 == ROOT_SPACE
    }

    /// Returns the string representation of this space ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SpaceId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SpaceId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identifier for a stored block, assigned by the store on insert.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(u64);

impl BlockId {
    /// Creates a BlockId from its raw numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value of this block ID.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_id_creation() {
        let id1 = SpaceId::new("landing");
        let id2 = SpaceId::from("landing");
        let id3 = SpaceId::from(String::from("landing"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "landing");
    }

    #[test]
    fn test_root_space() {
        let root = SpaceId::root();
        assert!(root.is_root());
        assert!(!SpaceId::new("landing").is_root());
        assert_eq!(root, SpaceId::new("root"));
    }

    #[test]
    fn test_block_id_ordering() {
        let a = BlockId::new(1);
        let b = BlockId::new(2);
        assert!(a < b);
        assert_eq!(a.value(), 1);
    }

    #[test]
    fn test_ids_serde_round_trip() {
        let space = SpaceId::new("landing");
        let json = serde_json::to_string(&space).unwrap();
        assert_eq!(json, "\"landing\"");
        let back: SpaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, space);

        let id = BlockId::new(42);
        let back: BlockId = serde_json::from_str(&serde_json::to_string(&id).unwrap()).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut spaces = HashMap::new();
        spaces.insert(SpaceId::new("a"), 1);
        spaces.insert(SpaceId::root(), 2);

        assert_eq!(spaces.get(&SpaceId::new("a")), Some(&1));
        assert_eq!(spaces.get(&SpaceId::root()), Some(&2));
    }
}
