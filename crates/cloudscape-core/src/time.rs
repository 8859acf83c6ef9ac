//! Frame timing for the editor tick loop
//!
//! Turns raw wall-clock frame deltas into the delta time handed to tick handlers.

use serde::{Deserialize, Serialize};

/// Configuration for frame timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many editor seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time handed out for a single frame
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Time since the clock started in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
}

impl FrameClock {
    /// Create a new frame clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock with the raw delta from the previous frame.
    ///
    /// Returns the delta time for this frame. Negative or NaN deltas, limits,
    /// and scales all count as zero.
    pub fn update(&mut self, raw_delta: f32) -> f32 {
        let max_delta = self.config.max_delta_time.max(0.0);
        self.unscaled_delta_time = raw_delta.max(0.0).min(max_delta);
        self.frame_count += 1;

        self.delta_time = self.unscaled_delta_time * self.config.time_scale.max(0.0);
        self.total_time += self.delta_time as f64;
        self.delta_time
    }
}
