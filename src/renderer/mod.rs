//! Rendering module
//!
//! Draws the simulation onto any [`DrawingSurface`]: a disk per particle,
//! then a fading line between every pair of nearby particles.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{Disk, Joint};
pub use surface::{DrawingSurface, Rgba};

use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::SimulationState;

/// What a frame put on the surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particle disks filled
    pub disks: usize,
    /// Joint lines stroked
    pub joints: usize,
}

/// Stateless particle/joint renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the surface and draw the current state
    pub fn draw(&self, state: &SimulationState, surface: &mut impl DrawingSurface) -> FrameStats {
        let settings = state.settings();
        surface.clear_rect(Vec2::ZERO, state.bounds());

        // Particle pass
        let fill = Rgba::opaque(settings.color);
        for particle in state.particles() {
            let disk = shapes::disk(particle);
            surface.begin_path();
            surface.set_fill_color(fill);
            surface.arc(disk.center, disk.radius, 0.0, TAU, true);
            surface.close_path();
            surface.fill();
        }

        // Joint pass
        let joints = shapes::joints(
            state.particles(),
            settings.proximity_cutoff(),
            settings.proximity_falloff(),
        );
        for joint in &joints {
            surface.set_stroke_color(Rgba::with_alpha(settings.color, joint.opacity));
            surface.begin_path();
            surface.move_to(joint.from);
            surface.line_to(joint.to);
            surface.stroke();
            surface.close_path();
        }

        FrameStats {
            disks: state.len(),
            joints: joints.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Particle;

    fn state_with(positions: &[(f32, f32)], color: [u8; 3]) -> SimulationState {
        let settings = Settings {
            color,
            proximity: (250.0, 100.0),
            ..Default::default()
        };
        let particles = positions
            .iter()
            .map(|&(x, y)| Particle::new(Vec2::new(x, y), Vec2::ZERO, 4.0))
            .collect();
        SimulationState::from_particles(Vec2::new(800.0, 600.0), settings, particles).unwrap()
    }

    #[test]
    fn test_draw_clears_whole_surface_first() {
        let state = state_with(&[(10.0, 10.0)], [255, 255, 255]);
        let mut surface = RecordingSurface::new();
        Renderer::new().draw(&state, &mut surface);

        assert_eq!(
            surface.commands[0],
            DrawCommand::ClearRect {
                origin: Vec2::ZERO,
                size: Vec2::new(800.0, 600.0)
            }
        );
    }

    #[test]
    fn test_draw_particle_disk() {
        let state = state_with(&[(10.4, 19.6)], [200, 100, 50]);
        let mut surface = RecordingSurface::new();
        let stats = Renderer::new().draw(&state, &mut surface);

        assert_eq!(stats, FrameStats { disks: 1, joints: 0 });
        assert_eq!(
            &surface.commands[1..],
            &[
                DrawCommand::BeginPath,
                DrawCommand::FillColor(Rgba::opaque([200, 100, 50])),
                DrawCommand::Arc {
                    center: Vec2::new(10.0, 20.0),
                    radius: 2.0,
                    start_angle: 0.0,
                    end_angle: TAU,
                    anticlockwise: true,
                },
                DrawCommand::ClosePath,
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_draw_joint_after_all_disks() {
        let state = state_with(&[(0.0, 0.0), (3.0, 4.0)], [255, 255, 255]);
        let mut surface = RecordingSurface::new();
        let stats = Renderer::new().draw(&state, &mut surface);

        assert_eq!(stats, FrameStats { disks: 2, joints: 1 });
        assert_eq!(surface.fill_count(), 2);
        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(
            surface.stroke_colors(),
            vec![Rgba::with_alpha([255, 255, 255], 0.6)]
        );

        let last_fill = surface
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Fill)
            .unwrap();
        let first_stroke = surface
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeColor(_)))
            .unwrap();
        assert!(last_fill < first_stroke);

        assert!(surface.commands.contains(&DrawCommand::MoveTo(Vec2::new(0.0, 0.0))));
        assert!(surface.commands.contains(&DrawCommand::LineTo(Vec2::new(3.0, 4.0))));
    }

    #[test]
    fn test_draw_far_pair_no_joint() {
        let state = state_with(&[(0.0, 0.0), (300.0, 0.0)], [255, 255, 255]);
        let mut surface = RecordingSurface::new();
        let stats = Renderer::new().draw(&state, &mut surface);
        assert_eq!(stats.joints, 0);
        assert_eq!(surface.stroke_count(), 0);
    }

    #[test]
    fn test_draw_empty_state_only_clears() {
        let state = state_with(&[], [255, 255, 255]);
        let mut surface = RecordingSurface::new();
        Renderer::new().draw(&state, &mut surface);
        assert_eq!(surface.commands.len(), 1);
    }

    #[test]
    fn test_joint_opacities_bounded() {
        let state = state_with(
            &[(0.0, 0.0), (20.0, 0.0), (60.0, 0.0), (90.0, 0.0), (200.0, 0.0)],
            [255, 255, 255],
        );
        let mut surface = RecordingSurface::new();
        Renderer::new().draw(&state, &mut surface);

        let colors = surface.stroke_colors();
        assert!(!colors.is_empty());
        for c in colors {
            assert!(c.a > 0.0 && c.a <= 0.6);
        }
    }
}
