//! Particle model and simulation state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_INITIAL_SPEED;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// A point mass with a visual radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position in surface pixels (origin top-left, y down)
    pub pos: Vec2,
    /// Velocity in px/ms
    pub vel: Vec2,
    /// Visual radius, > 0
    pub radius: f32,
}

impl Particle {
    /// Particle at `pos` moving with `vel`
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Random particle inside `bounds`
    fn random(rng: &mut impl Rng, bounds: Vec2, radius_range: (f32, f32)) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..bounds.x),
            rng.random_range(0.0..bounds.y),
        );
        let vel = Vec2::new(
            rng.random_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
            rng.random_range(-MAX_INITIAL_SPEED..MAX_INITIAL_SPEED),
        );
        let radius = rng.random_range(radius_range.0..=radius_range.1);
        Self { pos, vel, radius }
    }
}

/// Everything the step and draw rules operate on
///
/// The particle list is fixed at construction: stepping never adds or
/// removes particles. Deserializing goes through [`SimulationState::from_particles`],
/// so a snapshot is validated like any other construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct SimulationState {
    /// Surface size (width, height) in pixels
    bounds: Vec2,
    particles: Vec<Particle>,
    settings: Settings,
}

/// Unvalidated shape of a serialized [`SimulationState`]
#[derive(Deserialize)]
struct StateRecord {
    bounds: Vec2,
    particles: Vec<Particle>,
    settings: Settings,
}

impl TryFrom<StateRecord> for SimulationState {
    type Error = Error;

    fn try_from(record: StateRecord) -> Result<Self> {
        Self::from_particles(record.bounds, record.settings, record.particles)
    }
}

impl SimulationState {
    /// Create `settings.count` random particles inside `bounds`
    pub fn new(bounds: Vec2, settings: Settings, seed: u64) -> Result<Self> {
        validate_bounds(bounds)?;
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..settings.count)
            .map(|_| Particle::random(&mut rng, bounds, settings.radius_range))
            .collect::<Vec<_>>();

        log::info!(
            "Created {} particles in {}x{} (seed {})",
            particles.len(),
            bounds.x,
            bounds.y,
            seed
        );

        Ok(Self {
            bounds,
            particles,
            settings,
        })
    }

    /// Build a state from an explicit particle list
    ///
    /// `settings.count` is replaced by the length of `particles`.
    pub fn from_particles(
        bounds: Vec2,
        mut settings: Settings,
        particles: Vec<Particle>,
    ) -> Result<Self> {
        validate_bounds(bounds)?;

        for (i, p) in particles.iter().enumerate() {
            if !p.radius.is_finite() || p.radius <= 0.0 {
                return Err(Error::config(format!(
                    "particle {i} radius must be finite and > 0, got {}",
                    p.radius
                )));
            }
            if !p.pos.is_finite() || !p.vel.is_finite() {
                return Err(Error::config(format!(
                    "particle {i} position and velocity must be finite"
                )));
            }
        }

        settings.count = u32::try_from(particles.len())
            .map_err(|_| Error::config("too many particles"))?;
        settings.validate()?;

        Ok(Self {
            bounds,
            particles,
            settings,
        })
    }

    /// Change the surface size (e.g. viewport resize)
    ///
    /// Particles left outside the new bounds are reflected back in by the next step.
    pub fn resize(&mut self, bounds: Vec2) -> Result<()> {
        validate_bounds(bounds)?;
        log::info!(
            "Resized surface {}x{} -> {}x{}",
            self.bounds.x,
            self.bounds.y,
            bounds.x,
            bounds.y
        );
        self.bounds = bounds;
        Ok(())
    }

    /// Advance by `dt` milliseconds (see [`super::step`])
    pub fn step(&mut self, dt: f32) {
        super::step(self, dt);
    }

    /// Surface size (width, height) in pixels
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Particles in creation order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Settings the state was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when there are no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn validate_bounds(bounds: Vec2) -> Result<()> {
    if !bounds.is_finite() || bounds.x <= 0.0 || bounds.y <= 0.0 {
        return Err(Error::config(format!(
            "surface bounds must be finite and > 0, got {}x{}",
            bounds.x, bounds.y
        )));
    }
    Ok(())
}
