use std::f64::consts::FRAC_PI_4;

use glam::{dvec2, DVec2};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::integrator::{Integrator, Method, DEFAULT_SUB_STEPS};
use crate::state::PendulumState;

/// Construction options for a single pendulum.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PendulumConfig {
    pub length: f64,
    pub gravity: f64,
    pub damping: f64,
    pub pivot: DVec2,
    pub initial_theta: f64,
    pub initial_omega: f64,
    // range checked in build, the integrator takes a u32
    pub sub_steps_per_frame: i64,
    pub method: Method,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            length: 3.,
            gravity: 9.8,
            damping: 0.,
            pivot: dvec2(0., 2.),
            initial_theta: FRAC_PI_4,
            initial_omega: -2.,
            sub_steps_per_frame: DEFAULT_SUB_STEPS.into(),
            method: Method::ExplicitEuler,
        }
    }
}

impl PendulumConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    pub fn build(&self) -> Result<(PendulumState, Integrator)> {
        let state = PendulumState::new(
            self.length,
            self.gravity,
            self.damping,
            self.pivot,
            self.initial_theta,
            self.initial_omega,
        )?;
        let sub_steps = u32::try_from(self.sub_steps_per_frame).map_err(|_| {
            Error::InvalidConfiguration(format!(
                "sub_steps_per_frame must be between 0 and {}, got {}",
                u32::MAX,
                self.sub_steps_per_frame
            ))
        })?;
        let integrator = Integrator::new(sub_steps).with_method(self.method);
        log::trace!("built pendulum {:?} with {:?}", state, integrator);
        Ok((state, integrator))
    }
}
