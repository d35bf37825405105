//! Particle Web - drifting particles joined by fading lines
//!
//! Core modules:
//! - `sim`: Particle model and the per-frame step rule
//! - `renderer`: Disk and joint drawing against an abstract 2D surface
//! - `platform`: Frame clock and pause/resume handling for the host loop
//! - `settings`: Initial parameters (JSON configurable)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use platform::{FrameClock, ParticleField};
pub use renderer::{DrawingSurface, Renderer};
pub use settings::Settings;
pub use sim::{Particle, SimulationState, step};

/// Simulation constants
pub mod consts {
    /// Default particle count
    pub const DEFAULT_COUNT: u32 = 100;
    /// Default particle color (RGB)
    pub const DEFAULT_COLOR: [u8; 3] = [255, 255, 255];
    /// Default radius range (min, max), in pixels
    pub const DEFAULT_RADIUS_RANGE: (f32, f32) = (3.0, 5.0);
    /// Default proximity (cutoff distance, falloff distance), in pixels
    pub const DEFAULT_PROXIMITY: (f32, f32) = (250.0, 100.0);

    /// Initial velocity is drawn from [-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED) per axis (px/ms)
    pub const MAX_INITIAL_SPEED: f32 = 0.035;

    /// Hard cap on joint opacity
    pub const MAX_JOINT_OPACITY: f32 = 0.6;

    /// Distance kept from a wall after a reflection snap
    pub const WALL_INSET: f32 = 1.0;
}

/// Round a coordinate to the nearest pixel (half-up, same direction for all signs)
#[inline]
pub fn round_px(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_px() {
        assert_eq!(round_px(1.49), 1.0);
        assert_eq!(round_px(1.5), 2.0);
        assert_eq!(round_px(0.0), 0.0);
        assert_eq!(round_px(-0.5), 0.0);
        assert_eq!(round_px(-0.51), -1.0);
    }
}
