//! Platform abstraction layer
//!
//! Host-agnostic pieces of the frame loop:
//! - Elapsed time between frames
//! - Pause on blur, resume on focus
//!
//! The host (browser or native) owns the actual scheduling and just calls
//! [`ParticleField::frame`] with a timestamp once per display refresh.

use glam::Vec2;

use crate::error::Result;
use crate::renderer::{DrawingSurface, FrameStats, Renderer};
use crate::settings::Settings;
use crate::sim::SimulationState;

/// Turns frame timestamps (ms) into step deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    paused: bool,
}

impl FrameClock {
    /// Clock with no previous frame, running
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous frame, or `None` while paused
    ///
    /// The first frame (and the first after a resume without a timestamp)
    /// yields 0.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        if self.paused {
            return None;
        }
        let dt = self.last_time.map_or(0.0, |last| now - last);
        self.last_time = Some(now);
        Some(dt as f32)
    }

    /// Stop yielding deltas until [`FrameClock::resume`]
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume from `now`, so the time spent paused is never simulated
    pub fn resume(&mut self, now: f64) {
        self.last_time = Some(now);
        self.paused = false;
    }

    /// True between `pause` and `resume`
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Simulation, renderer and clock driven together, one step+draw per frame
#[derive(Debug, Clone)]
pub struct ParticleField {
    state: SimulationState,
    renderer: Renderer,
    clock: FrameClock,
}

impl ParticleField {
    /// Random field of `settings.count` particles inside `bounds`
    pub fn new(bounds: Vec2, settings: Settings, seed: u64) -> Result<Self> {
        Ok(Self::from_state(SimulationState::new(bounds, settings, seed)?))
    }

    /// Drive an existing state
    pub fn from_state(state: SimulationState) -> Self {
        Self {
            state,
            renderer: Renderer::new(),
            clock: FrameClock::new(),
        }
    }

    /// Run one frame at timestamp `now` (ms); skipped entirely while paused
    pub fn frame(&mut self, now: f64, surface: &mut impl DrawingSurface) -> Option<FrameStats> {
        let dt = self.clock.tick(now)?;
        self.state.step(dt);
        Some(self.renderer.draw(&self.state, surface))
    }

    /// Skip frames until resumed (window blur)
    pub fn pause(&mut self) {
        if !self.clock.is_paused() {
            log::info!("Paused");
        }
        self.clock.pause();
    }

    /// Continue from `now` (window focus)
    pub fn resume(&mut self, now: f64) {
        if self.clock.is_paused() {
            log::info!("Resumed");
        }
        self.clock.resume(now);
    }

    /// True while frames are being skipped
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// New surface size, see [`SimulationState::resize`]
    pub fn resize(&mut self, bounds: Vec2) -> Result<()> {
        self.state.resize(bounds)
    }

    /// Current simulation state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
