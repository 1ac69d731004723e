//! LevelBudget trait for abstracting the packing ceiling.
//!
//! The packing engine consumes a single integer budget per pass and is
//! agnostic to how that number is derived.

use std::fmt::Debug;

/// Supplies the maximum total size-level a single visual row may hold.
pub trait LevelBudget: Send + Sync + Debug {
    fn max_level_budget(&self) -> u32;
}

/// A constant budget, independent of any viewport state.
#[derive(Debug, Clone, Copy)]
pub struct FixedBudget(pub u32);

impl LevelBudget for FixedBudget {
    fn max_level_budget(&self) -> u32 {
        self.0
    }
}

/// A breakpoint entry: viewports at least `min_width` wide get `budget`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_width: f32,
    pub budget: u32,
}

/// A width-to-budget breakpoint table.
///
/// Entries are kept sorted by descending `min_width` so lookup takes
/// the first breakpoint the viewport clears.
#[derive(Debug, Clone)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
    /// Budget used below the smallest breakpoint.
    fallback: u32,
}

impl BreakpointTable {
    pub fn new(mut entries: Vec<Breakpoint>, fallback: u32) -> Self {
        entries.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self { entries, fallback }
    }

    /// The budget for a viewport of the given width.
    pub fn budget_for(&self, width: f32) -> u32 {
        self.entries
            .iter()
            .find(|bp| width >= bp.min_width)
            .map(|bp| bp.budget)
            .unwrap_or(self.fallback)
    }

    /// Pins the table at a concrete width, yielding a [`LevelBudget`].
    pub fn at_width(&self, width: f32) -> FixedBudget {
        FixedBudget(self.budget_for(width))
    }
}
