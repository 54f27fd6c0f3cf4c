//! Dropdown placement relative to the trigger.
//!
//! The dropdown opens below the trigger, left-aligned, unless that would run
//! past the viewport; then it flips above and/or right-aligns.

use egui::{Align2, Pos2, Rect};

pub const DROPDOWN_WIDTH: f32 = 253.0;
/// Approximate height used for overflow checks
pub const DROPDOWN_HEIGHT: f32 = 320.0;
/// Space between trigger and dropdown, occupied by the pointer
pub const DROPDOWN_GAP: f32 = 10.0;
/// Horizontal inset of the pointer from the aligned edge
pub const POINTER_INSET: f32 = 26.0;
/// Viewport width from which the trigger shows its date text
pub const WIDE_SCREEN_MIN_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownPlacement {
    pub below: bool,
    pub align_left: bool,
}

impl Default for DropdownPlacement {
    fn default() -> Self {
        Self {
            below: true,
            align_left: true,
        }
    }
}

impl DropdownPlacement {
    pub fn compute(trigger: Rect, viewport: Rect) -> Self {
        Self {
            below: trigger.bottom() + DROPDOWN_HEIGHT <= viewport.bottom(),
            align_left: trigger.left() + DROPDOWN_WIDTH <= viewport.right(),
        }
    }

    /// Point the dropdown is attached to; pair with [`Self::pivot`].
    pub fn anchor(self, trigger: Rect) -> Pos2 {
        let x = if self.align_left {
            trigger.left()
        } else {
            trigger.right()
        };
        let y = if self.below {
            trigger.bottom() + DROPDOWN_GAP
        } else {
            trigger.top() - DROPDOWN_GAP
        };
        Pos2::new(x, y)
    }

    /// Corner of the dropdown that sits on the anchor.
    pub fn pivot(self) -> Align2 {
        match (self.below, self.align_left) {
            (true, true) => Align2::LEFT_TOP,
            (true, false) => Align2::RIGHT_TOP,
            (false, true) => Align2::LEFT_BOTTOM,
            (false, false) => Align2::RIGHT_BOTTOM,
        }
    }

    /// Horizontal centre of the pointer drawn on the dropdown edge.
    pub fn pointer_x(self, trigger: Rect) -> f32 {
        if self.align_left {
            trigger.left() + POINTER_INSET
        } else {
            trigger.right() - POINTER_INSET
        }
    }
}

pub fn is_wide_screen(viewport_width: f32) -> bool {
    viewport_width >= WIDE_SCREEN_MIN_WIDTH
}
