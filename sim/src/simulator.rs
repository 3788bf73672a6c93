use crate::config::PendulumConfig;
use crate::error::Result;
use crate::integrator::Integrator;
use crate::state::PendulumState;

/// Drives one pendulum from a host's frame loop.
#[derive(Clone, Debug)]
pub struct Simulator {
    state: PendulumState,
    integrator: Integrator,
    swinging: bool,
    elapsed: f64,
}

impl Simulator {
    pub fn new(state: PendulumState, integrator: Integrator) -> Self {
        Self {
            state,
            integrator,
            swinging: true,
            elapsed: 0.,
        }
    }

    pub fn from_config(config: &PendulumConfig) -> Result<Self> {
        let (state, integrator) = config.build()?;
        Ok(Self::new(state, integrator))
    }

    pub fn start_swinging(&mut self) {
        log::debug!("start swinging at theta {}", self.state.theta());
        self.swinging = true;
    }

    /// Freezes the pendulum where it is. Omega is kept so swinging can resume.
    pub fn end_swinging(&mut self) {
        log::debug!("end swinging at theta {}", self.state.theta());
        self.swinging = false;
    }

    pub fn is_swinging(&self) -> bool {
        self.swinging
    }

    /// Call once per frame with the wall clock time since the previous call.
    pub fn update(&mut self, elapsed: f64) {
        let Self {
            ref mut state,
            ref integrator,
            swinging,
            elapsed: ref mut total,
        } = *self;
        if swinging {
            integrator.step(state, elapsed);
            *total += elapsed;
        }
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PendulumState {
        &mut self.state
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Simulated time so far, frames spent not swinging excluded.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
