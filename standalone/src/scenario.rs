use glam::dvec2;
use pendulum_sim::{Error, PendulumConfig, Result};
use serde::Deserialize;

// a bit over two years of frames at 60 fps
pub const MAX_FRAMES: u64 = u32::MAX as u64;

/// What the headless host runs: a set of independent pendulums sampled at a fixed frame rate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub frame_rate: u32,
    // seconds
    pub duration: f64,
    pub pendulums: Vec<PendulumConfig>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            duration: 20.,
            pendulums: vec![PendulumConfig {
                pivot: dvec2(4., 0.),
                ..PendulumConfig::default()
            }],
        }
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(Error::InvalidConfiguration(
                "frame_rate must be positive".to_string(),
            ));
        }
        if !(self.duration.is_finite() && self.duration >= 0.) {
            return Err(Error::InvalidConfiguration(format!(
                "duration must be a finite non-negative number of seconds, got {}",
                self.duration
            )));
        }
        let frames = (self.duration * self.frame_rate as f64).round();
        if frames > MAX_FRAMES as f64 {
            return Err(Error::InvalidConfiguration(format!(
                "{} seconds at {} fps is more than {} frames",
                self.duration, self.frame_rate, MAX_FRAMES
            )));
        }
        for pendulum in &self.pendulums {
            pendulum.validate()?;
        }
        Ok(())
    }

    pub fn frame_time(&self) -> f64 {
        1. / self.frame_rate as f64
    }

    pub fn frame_count(&self) -> u64 {
        (self.duration * self.frame_rate as f64).round() as u64
    }
}
