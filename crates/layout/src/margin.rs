//! Separator/margin policy.
//!
//! A pure function of position flags; no hidden state, safe to call
//! independently per run or batch element.

use atrium_types::spacing::{Margins, RunPosition};

/// The default bottom spacing, in abstract spacing units.
pub const BOTTOM_MARGIN_UNIT: f32 = 3.0;

/// Decides the vertical margins of one run or batch element.
///
/// The top margin is suppressed for the first element (the caller's
/// `top_default` may itself be zero). The bottom margin is suppressed
/// only when the element is last in its run or batch *and* last in its
/// owning block; otherwise the default unit applies.
pub fn run_margins(position: RunPosition, top_default: f32) -> Margins {
    Margins {
        top: if position.first { 0.0 } else { top_default },
        bottom: if position.last && position.last_in_block {
            0.0
        } else {
            BOTTOM_MARGIN_UNIT
        },
    }
}
