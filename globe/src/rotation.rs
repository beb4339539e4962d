//! Rotation model: the auto-spin/drag state machine over one scalar angle.
//!
//! Exactly one driver owns the angle at any instant: the periodic tick while
//! idle, or the pointer while a drag is in progress. Ticks are no-ops during
//! a drag, so the two drivers can never fight over the scalar.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

use crate::consts::{AUTO_STEP_DEG, DRAG_DEG_PER_PX};

/// Which driver currently owns the rotation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drive {
    /// Timer-driven spin; the initial state.
    Auto,
    /// A drag gesture is in progress.
    Dragging {
        /// Screen x (CSS pixels) where the pointer went down.
        anchor_x: f64,
        /// Rotation angle at the instant the drag began.
        anchor_angle: f64,
    },
}

/// The rotation scalar plus its active driver.
///
/// The angle is wrapped to [0, 360) by the tick driver for display hygiene.
/// Mid-drag values are left unwrapped; the projection is periodic, so only
/// the tick needs to keep the scalar bounded.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    angle_deg: f64,
    drive: Drive,
}

impl Default for Rotation {
    fn default() -> Self {
        Self { angle_deg: 0.0, drive: Drive::Auto }
    }
}

impl Rotation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in degrees.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Whether a drag gesture currently owns the angle.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drive, Drive::Dragging { .. })
    }

    /// Advance by one auto-rotation step, wrapping modulo 360.
    ///
    /// No-op while a drag is in progress. Returns `true` when the angle
    /// changed.
    pub fn tick(&mut self) -> bool {
        match self.drive {
            Drive::Auto => {
                self.angle_deg = (self.angle_deg + AUTO_STEP_DEG).rem_euclid(360.0);
                true
            }
            Drive::Dragging { .. } => false,
        }
    }

    /// Begin a drag at screen `x`, recording the gesture anchor.
    pub fn begin_drag(&mut self, x: f64) {
        self.drive = Drive::Dragging { anchor_x: x, anchor_angle: self.angle_deg };
    }

    /// Track the pointer mid-drag: the angle is recomputed from the anchor,
    /// not accumulated, so jittery move events cannot drift.
    ///
    /// No-op unless dragging. Returns `true` when the angle changed.
    pub fn drag_to(&mut self, x: f64) -> bool {
        match self.drive {
            Drive::Dragging { anchor_x, anchor_angle } => {
                let next = (x - anchor_x).mul_add(DRAG_DEG_PER_PX, anchor_angle);
                let changed = next != self.angle_deg;
                self.angle_deg = next;
                changed
            }
            Drive::Auto => false,
        }
    }

    /// Release the drag; auto-rotation resumes from the current angle on the
    /// next tick.
    pub fn end_drag(&mut self) {
        self.drive = Drive::Auto;
    }
}
