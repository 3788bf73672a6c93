use glam::{dvec2, DVec2};
use serde::Deserialize;

use crate::state::PendulumState;

pub const DEFAULT_SUB_STEPS: u32 = 10000;

/// Scheme used for each sub-step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Both theta and omega advanced from the values at the start of the sub-step.
    #[default]
    ExplicitEuler,
    /// Omega first, then theta using the new omega.
    SemiImplicitEuler,
    RungeKutta4,
}

/// Advances a pendulum by splitting each frame into a fixed number of small sub-steps.
///
/// Explicit euler is only conditionally stable, the large sub-step count is what keeps it in check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    sub_steps: u32,
    method: Method,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_SUB_STEPS)
    }
}

impl Integrator {
    pub fn new(sub_steps: u32) -> Self {
        Self {
            sub_steps,
            method: Method::default(),
        }
    }

    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    pub fn sub_steps(&self) -> u32 {
        self.sub_steps
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Advances theta and omega by `dt` seconds.
    ///
    /// A negative `dt` runs the equations backwards in time.
    /// Zero `dt` or zero sub-steps leave the state untouched.
    pub fn step(&self, state: &mut PendulumState, dt: f64) {
        if self.sub_steps == 0 || dt == 0. {
            return;
        }
        let h = dt / self.sub_steps as f64;
        let damping = state.damping();
        let k = state.gravity() / state.length();
        // (theta, omega) -> (dtheta/dt, domega/dt)
        let f = |t_o: DVec2| dvec2(t_o.y, -damping * t_o.y - k * t_o.x.sin());
        let mut t_o = dvec2(state.theta(), state.omega());
        match self.method {
            Method::ExplicitEuler => {
                for _ in 0..self.sub_steps {
                    t_o += h * f(t_o);
                }
            }
            Method::SemiImplicitEuler => {
                for _ in 0..self.sub_steps {
                    t_o.y += h * f(t_o).y;
                    t_o.x += h * t_o.y;
                }
            }
            Method::RungeKutta4 => {
                for _ in 0..self.sub_steps {
                    let k1 = f(t_o);
                    let k2 = f(t_o + h * k1 / 2.);
                    let k3 = f(t_o + h * k2 / 2.);
                    let k4 = f(t_o + h * k3);
                    t_o += h / 6. * (k1 + 2. * k2 + 2. * k3 + k4);
                }
            }
        }
        state.set_theta(t_o.x);
        state.set_omega(t_o.y);
    }
}
