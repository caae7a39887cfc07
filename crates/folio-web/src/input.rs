use glam::Vec2;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

/// Map CSS-pixel pointer coordinates to normalized device coordinates
/// (`-1..1`, y up), clamped so events just outside the viewport cannot push
/// the tube target off-plane.
#[inline]
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (2.0 * x / width - 1.0).clamp(-1.0, 1.0);
    let ny = (1.0 - 2.0 * y / height).clamp(-1.0, 1.0);
    Vec2::new(nx, ny)
}

/// Pointer offset within a card's bounds as uv in `0..1` (top-left origin).
#[inline]
pub fn card_uv(x_css: f32, y_css: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.5, 0.5);
    }
    ((x_css / width).clamp(0.0, 1.0), (y_css / height).clamp(0.0, 1.0))
}
