//! Drag momentum.
//!
//! Tracks pointer velocity while a drag is in progress and, once released,
//! produces a decaying glide that the plane applies as further drag deltas.

use crate::constants::{
    MOMENTUM_DECAY_PER_SECOND, MOMENTUM_MAX_DT, MOMENTUM_MIN_SPEED, MOMENTUM_RELEASE_WINDOW,
};
use eframe::egui;

/// Weight of the newest sample in the smoothed release velocity.
const VELOCITY_SMOOTHING: f32 = 0.7;

/// Result of advancing a glide by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlideStep {
    /// No glide in progress
    Idle,
    /// The glide moved by this delta and continues
    Moved(egui::Vec2),
    /// The glide moved by this final delta and came to rest
    Finished(egui::Vec2),
}

/// Velocity tracker and glide integrator.
#[derive(Debug, Clone, Default)]
pub struct Momentum {
    velocity: egui::Vec2,
    gliding: bool,
    /// Input time of the most recent drag sample
    last_sample: Option<f64>,
}

impl Momentum {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame of drag motion taken at input time `now`. Cancels any glide.
    pub fn track(&mut self, delta: egui::Vec2, dt: f32, now: f64) {
        self.gliding = false;
        self.last_sample = Some(now);
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        let sample = delta / dt;
        self.velocity = sample * VELOCITY_SMOOTHING + self.velocity * (1.0 - VELOCITY_SMOOTHING);
    }

    /// Ends velocity tracking at input time `now`. Returns true if a glide started.
    ///
    /// A pointer held still produces no frames, so a release long after the
    /// last sample means the drag had stopped and nothing glides.
    pub fn release(&mut self, now: f64) -> bool {
        let stale = self
            .last_sample
            .take()
            .map_or(true, |t| now - t > MOMENTUM_RELEASE_WINDOW);
        if stale {
            self.velocity = egui::Vec2::ZERO;
        }
        self.gliding = self.velocity.length() >= MOMENTUM_MIN_SPEED;
        if !self.gliding {
            self.velocity = egui::Vec2::ZERO;
        }
        self.gliding
    }

    /// Stops any glide and forgets the tracked velocity.
    pub fn stop(&mut self) {
        self.gliding = false;
        self.velocity = egui::Vec2::ZERO;
        self.last_sample = None;
    }

    /// Returns true while a glide is in progress.
    pub fn is_gliding(&self) -> bool {
        self.gliding
    }

    /// Advances the glide by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> GlideStep {
        if !self.gliding {
            return GlideStep::Idle;
        }
        let dt = dt.clamp(0.0, MOMENTUM_MAX_DT);
        let delta = self.velocity * dt;
        self.velocity *= MOMENTUM_DECAY_PER_SECOND.powf(dt);
        if self.velocity.length() < MOMENTUM_MIN_SPEED {
            self.stop();
            return GlideStep::Finished(delta);
        }
        GlideStep::Moved(delta)
    }
}
