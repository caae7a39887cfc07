// Shared visual tuning constants used by the web frontend and tests.
//
// The tube damping weights and dead zone were tuned for feel on the original
// page; they are kept as named constants rather than derived quantities.

// Cursor tubes
pub const TUBE_COUNT: usize = 4;
pub const POINTS_PER_TUBE: usize = 20;
pub const MOUSE_SMOOTHING: f32 = 0.15; // pointer -> smoothed mouse per frame
pub const HEAD_LERP: f32 = 0.3; // smoothed mouse -> head per frame
pub const FOLLOW_GAIN: f32 = 0.2; // fraction of the gap a trailing point closes
pub const DEAD_ZONE: f32 = 0.1; // trailing points freeze below this separation
pub const ORBIT_RADIUS: f32 = 0.3; // head oscillation around the mouse
pub const ORBIT_RATE: f32 = 2.0; // rad/s of the head oscillation
pub const CHAIN_PHASE_STEP: f32 = 1.5; // phase offset between chains

// Shape rotation rate coefficients, per kind
pub const ICOSA_ROT: [f32; 2] = [0.3, 0.2]; // x, y
pub const TORUS_ROT: [f32; 2] = [0.5, 0.3]; // x, z
pub const OCTA_ROT: [f32; 2] = [0.4, 0.2]; // y, z

// Float bobbing
pub const FLOAT_AMPLITUDE: f32 = 0.1;

// Particle cloud
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPREAD: f32 = 20.0; // edge length of the scatter cube
pub const PARTICLE_ROT: [f32; 2] = [0.01, 0.02]; // x, y group rotation rates

// Card tilt
pub const TILT_MAX_DEG: f32 = 15.0;

// Cameras (background scene and tube overlay)
pub const BG_CAMERA_Z: f32 = 8.0;
pub const BG_CAMERA_FOVY_DEG: f32 = 60.0;
pub const TUBE_CAMERA_Z: f32 = 5.0;
pub const TUBE_CAMERA_FOVY_DEG: f32 = 75.0;

// Palettes from the page
pub const TUBE_COLORS: [&str; 4] = ["#00ffff", "#ff00ff", "#8b5cf6", "#00ff88"];
pub const HEAD_LIGHT_COLORS: [&str; 4] = ["#83f36e", "#fe8a2e", "#ff008a", "#60aed5"];
pub const ACCENT_CYAN: &str = "#00ffff";
pub const ACCENT_MAGENTA: &str = "#ff00ff";
pub const ACCENT_PURPLE: &str = "#8b5cf6";

// Card entrance stagger
pub const CARD_REVEAL_STEP_MS: u32 = 100;
