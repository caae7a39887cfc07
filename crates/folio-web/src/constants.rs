// Frontend-only sizing and styling constants.

// Base billboard scales per shape kind (world units)
pub const ICOSA_SCALE: f32 = 1.0;
pub const TORUS_SCALE: f32 = 0.8;
pub const OCTA_SCALE: f32 = 0.7;
pub const PARTICLE_SCALE: f32 = 0.05;
pub const PARTICLE_ALPHA: f32 = 0.6;

// Glow discs at the tube heads
pub const HEAD_GLOW_SCALE: f32 = 0.25;

// Instance buffer capacity: 7 shapes + 100 particles + 4 head glows, rounded up
pub const INSTANCE_CAPACITY: usize = 128;

// Card tilt styling
pub const CARD_PERSPECTIVE_PX: f32 = 800.0;
pub const CARD_LIFT_PX: f32 = 8.0;
pub const CARD_HOVER_SCALE: f32 = 1.02;

// Page backdrop before ambient tinting
pub const CLEAR_BASE: [f64; 3] = [0.03, 0.04, 0.08];
