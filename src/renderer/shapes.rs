//! Shape generation for particles and joints
//!
//! Pure geometry, no drawing: the renderer turns these into surface commands.

use glam::Vec2;

use crate::consts::MAX_JOINT_OPACITY;
use crate::round_px;
use crate::sim::Particle;

/// A filled particle disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    /// Pixel-rounded center
    pub center: Vec2,
    pub radius: f32,
}

/// A line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Indices into the particle list, `a < b`
    pub a: usize,
    pub b: usize,
    /// Pixel-rounded endpoints
    pub from: Vec2,
    pub to: Vec2,
    /// Unrounded center distance
    pub distance: f32,
    /// Stroke alpha in (0, 0.6]
    pub opacity: f32,
}

/// Round both coordinates to whole pixels
#[inline]
pub fn snap(p: Vec2) -> Vec2 {
    Vec2::new(round_px(p.x), round_px(p.y))
}

/// Disk for a particle: drawn at half its radius
pub fn disk(particle: &Particle) -> Disk {
    Disk {
        center: snap(particle.pos),
        radius: particle.radius / 2.0,
    }
}

/// Joint opacity for two particles `distance` apart
///
/// `None` when no joint should be drawn: at or past the cutoff, or when the
/// falloff leaves nothing visible.
pub fn joint_opacity(distance: f32, cutoff: f32, falloff: f32) -> Option<f32> {
    if distance.is_nan() || distance >= cutoff {
        return None;
    }
    let opacity = (1.0 - distance / falloff).min(MAX_JOINT_OPACITY);
    (opacity > 0.0).then_some(opacity)
}

/// All joints among `particles`, each unordered pair visited once
///
/// O(n²) in the particle count.
pub fn joints(particles: &[Particle], cutoff: f32, falloff: f32) -> Vec<Joint> {
    let mut out = Vec::new();

    for (i, p1) in particles.iter().enumerate() {
        for (j, p2) in particles.iter().enumerate().skip(i + 1) {
            let distance = p1.pos.distance(p2.pos);
            if let Some(opacity) = joint_opacity(distance, cutoff, falloff) {
                out.push(Joint {
                    a: i,
                    b: j,
                    from: snap(p1.pos),
                    to: snap(p2.pos),
                    distance,
                    opacity,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 4.0)
    }

    #[test]
    fn test_disk_rounds_center_and_halves_radius() {
        let d = disk(&Particle::new(Vec2::new(10.4, 20.5), Vec2::ZERO, 5.0));
        assert_eq!(d.center, Vec2::new(10.0, 21.0));
        assert_eq!(d.radius, 2.5);
    }

    #[test]
    fn test_close_pair_capped_opacity() {
        // distance 5: 1 - 5/100 = 0.95, capped at 0.6
        let js = joints(&[at(0.0, 0.0), at(3.0, 4.0)], 250.0, 100.0);
        assert_eq!(js.len(), 1);
        assert_eq!(js[0].distance, 5.0);
        assert_eq!(js[0].opacity, 0.6);
        assert_eq!((js[0].a, js[0].b), (0, 1));
    }

    #[test]
    fn test_far_pair_no_joint() {
        let js = joints(&[at(0.0, 0.0), at(300.0, 0.0)], 250.0, 100.0);
        assert!(js.is_empty());
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        assert_eq!(joint_opacity(250.0, 250.0, 1000.0), None);
        assert!(joint_opacity(249.9, 250.0, 1000.0).is_some());
    }

    #[test]
    fn test_falloff_fade() {
        let o = joint_opacity(50.0, 250.0, 100.0).unwrap();
        assert!((o - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_beyond_falloff_is_skipped() {
        // Inside the cutoff but opacity would be negative
        assert_eq!(joint_opacity(150.0, 250.0, 100.0), None);
        assert_eq!(joint_opacity(100.0, 250.0, 100.0), None);
    }

    #[test]
    fn test_each_pair_once() {
        let particles = [at(10.0, 10.0), at(12.0, 10.0), at(10.0, 13.0), at(11.0, 11.0)];
        let js = joints(&particles, 250.0, 100.0);
        assert_eq!(js.len(), 6);
        for j in &js {
            assert!(j.a < j.b);
        }
    }

    #[test]
    fn test_joint_endpoints_rounded() {
        let js = joints(&[at(0.4, 0.6), at(3.5, 4.49)], 250.0, 100.0);
        assert_eq!(js[0].from, Vec2::new(0.0, 1.0));
        assert_eq!(js[0].to, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_no_particles_no_joints() {
        assert!(joints(&[], 250.0, 100.0).is_empty());
        assert!(joints(&[at(1.0, 1.0)], 250.0, 100.0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_opacity_in_range(
            distance in 0.0f32..1000.0,
            cutoff in 1.0f32..500.0,
            falloff in 1.0f32..500.0,
        ) {
            if let Some(o) = joint_opacity(distance, cutoff, falloff) {
                prop_assert!(o > 0.0 && o <= MAX_JOINT_OPACITY);
                prop_assert!(distance < cutoff);
            }
        }

        #[test]
        fn prop_pair_symmetry(
            ax in 0.0f32..400.0, ay in 0.0f32..400.0,
            bx in 0.0f32..400.0, by in 0.0f32..400.0,
        ) {
            let ab = joints(&[at(ax, ay), at(bx, by)], 250.0, 100.0);
            let ba = joints(&[at(bx, by), at(ax, ay)], 250.0, 100.0);
            prop_assert_eq!(ab.len(), ba.len());
            if let (Some(x), Some(y)) = (ab.first(), ba.first()) {
                prop_assert_eq!(x.distance, y.distance);
                prop_assert_eq!(x.opacity, y.opacity);
            }
        }
    }
}
