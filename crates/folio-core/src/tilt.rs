//! Pointer-driven card tilt.
//!
//! The tilt is a pure function of the pointer's normalized offset within the
//! card's bounds; nothing persists across interactions.

use crate::constants::TILT_MAX_DEG;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub hovered: bool,
}

/// Map pointer uv within a card (`0,0` top-left, `1,1` bottom-right) to tilt
/// degrees. Centre maps to zero; the top edge tilts the card toward the
/// viewer (positive rotate_x).
pub fn tilt_from_uv(u: f32, v: f32) -> (f32, f32) {
    let nx = (u.clamp(0.0, 1.0) - 0.5) * 2.0;
    let ny = (v.clamp(0.0, 1.0) - 0.5) * 2.0;
    (-TILT_MAX_DEG * ny, TILT_MAX_DEG * nx)
}

impl CardTilt {
    pub fn pointer_move(&mut self, u: f32, v: f32) {
        let (rx, ry) = tilt_from_uv(u, v);
        self.rotate_x = rx;
        self.rotate_y = ry;
        self.hovered = true;
    }

    /// Reset to the rest pose, whatever the prior state.
    pub fn pointer_leave(&mut self) {
        *self = Self::default();
    }
}
