//! Content entity run segmentation.
//!
//! Splits a block's entity list into runs that are homogeneous in both
//! kind and alignment, so each run can be dispatched as one unit to
//! the kind's renderer.

use crate::group::group_runs;
use atrium_types::content::{ContentEntity, EntityAlign, EntityKind};

/// A maximal group of consecutive entities sharing kind and alignment.
/// Always a contiguous subslice of the block's entity list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a> {
    pub kind: EntityKind,
    pub align: EntityAlign,
    pub entities: &'a [ContentEntity],
}

/// Segments an entity list into kind- and alignment-homogeneous runs.
///
/// Kind runs are formed first, then split again by alignment, both
/// through the stable grouping pass, so overall entity order is
/// preserved: concatenating the runs reproduces the input exactly.
pub fn segment(entities: &[ContentEntity]) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    for (kind, kind_run) in group_runs(entities, ContentEntity::kind) {
        for (align, aligned) in group_runs(kind_run, ContentEntity::align) {
            runs.push(Run {
                kind,
                align,
                entities: aligned,
            });
        }
    }
    runs
}
