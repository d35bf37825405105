//! Per-frame simulation step
//!
//! Linear motion, constant gravity, elastic reflection off the surface edges.

use super::state::SimulationState;
use crate::consts::WALL_INSET;

/// Advance the simulation by `dt` milliseconds
///
/// Order matters for determinism:
/// 1. move every particle by `vel * dt`
/// 2. apply gravity to vertical velocity
/// 3. reflect off the walls, per axis
///
/// A negative or non-finite `dt` is treated as 0.
pub fn step(state: &mut SimulationState, dt: f32) {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::debug!("Clamped invalid dt {} to 0", dt);
        0.0
    };

    let gravity = state.settings().gravity;
    let bounds = state.bounds().to_array();
    let particles = state.particles_mut();

    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
    }

    if gravity != 0.0 {
        for p in particles.iter_mut() {
            p.vel.y += gravity * dt;
        }
    }

    for p in particles.iter_mut() {
        for (axis, &bound) in bounds.iter().enumerate() {
            if p.pos[axis] <= 0.0 {
                p.vel[axis] = p.vel[axis].abs();
                p.pos[axis] = WALL_INSET;
            } else if p.pos[axis] >= bound {
                p.vel[axis] = -p.vel[axis].abs();
                p.pos[axis] = bound - WALL_INSET;
            }
        }
    }
}
