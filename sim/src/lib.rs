//! Simulation core of a damped gravity pendulum.
//!
//! Nothing in here draws anything. A host owns a [`Simulator`] (or a [`PendulumState`] and an
//! [`Integrator`]), steps it once per frame and places its visuals from [`PendulumState::pivot`]
//! and [`PendulumState::mass_position`].

mod config;
mod error;
mod integrator;
mod simulator;
mod state;

pub use config::PendulumConfig;
pub use error::{Error, Result};
pub use integrator::{Integrator, Method, DEFAULT_SUB_STEPS};
pub use simulator::Simulator;
pub use state::{normalize_angle, PendulumState};

// independent pendulums may be stepped from different threads
static_assertions::assert_impl_all!(PendulumState: Send, Sync);
static_assertions::assert_impl_all!(Integrator: Send, Sync, Copy);
static_assertions::assert_impl_all!(Simulator: Send, Sync);
