pub mod color;
pub mod constants;
pub mod links;
pub mod shapes;
pub mod state;
pub mod tilt;
pub mod tube;

pub use color::*;
pub use constants::*;
pub use links::{display_domain, href, reveal_delay_ms, Accent, ProjectLink};
pub use shapes::*;
pub use state::*;
pub use tilt::*;
pub use tube::*;
