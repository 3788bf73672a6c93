use std::io::Write;

use anyhow::{anyhow, Result};
use crossbeam::{channel, thread};
use glam::DVec2;
use pendulum_sim::Simulator;

use crate::scenario::Scenario;

pub const HEADER: &str = "frame,time,pendulum,pivot_x,pivot_y,mass_x,mass_y,theta,omega,energy";

// frames a pendulum thread may run ahead of the writer
const FRAME_BUFFER: usize = 256;

/// What a renderer would need to draw one pendulum in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub pivot: DVec2,
    pub mass: DVec2,
    pub theta: f64,
    pub omega: f64,
    pub energy: f64,
}

impl Sample {
    fn take(sim: &Simulator) -> Self {
        let state = sim.state();
        Self {
            time: sim.elapsed(),
            pivot: state.pivot(),
            mass: state.mass_position(),
            theta: state.theta(),
            omega: state.omega(),
            energy: state.energy(),
        }
    }
}

/// Steps one pendulum through every frame, sampling before the first step.
/// Stops early once nobody is listening anymore.
fn trajectory(mut sim: Simulator, frames: u64, dt: f64, samples: channel::Sender<Sample>) {
    if samples.send(Sample::take(&sim)).is_err() {
        return;
    }
    for _ in 0..frames {
        sim.update(dt);
        if samples.send(Sample::take(&sim)).is_err() {
            return;
        }
    }
}

fn write_row(out: &mut impl Write, frame: u64, index: usize, sample: &Sample) -> Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{},{},{},{},{}",
        frame,
        sample.time,
        index,
        sample.pivot.x,
        sample.pivot.y,
        sample.mass.x,
        sample.mass.y,
        sample.theta,
        sample.omega,
        sample.energy
    )?;
    Ok(())
}

/// Runs all pendulums, each on its own thread since they share nothing, and writes the csv
/// frame by frame as the samples come in.
pub fn run(scenario: &Scenario, out: &mut impl Write) -> Result<()> {
    scenario.validate()?;
    let frames = scenario.frame_count();
    let dt = scenario.frame_time();
    let simulators = scenario
        .pendulums
        .iter()
        .map(Simulator::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "simulating {} pendulum(s) for {} frames at {} fps",
        simulators.len(),
        frames,
        scenario.frame_rate
    );
    writeln!(out, "{}", HEADER)?;
    if simulators.is_empty() {
        return Ok(());
    }
    thread::scope(|s| -> Result<()> {
        let receivers: Vec<_> = simulators
            .into_iter()
            .map(|sim| {
                let (tx, rx) = channel::bounded(FRAME_BUFFER);
                s.spawn(move |_| trajectory(sim, frames, dt, tx));
                rx
            })
            .collect();
        let mut first_energy = vec![0f64; receivers.len()];
        let mut last_energy = vec![0f64; receivers.len()];
        for frame in 0..=frames {
            for (index, samples) in receivers.iter().enumerate() {
                let sample = samples
                    .recv()
                    .map_err(|_| anyhow!("pendulum {} stopped at frame {}", index, frame))?;
                if frame == 0 {
                    first_energy[index] = sample.energy;
                }
                last_energy[index] = sample.energy;
                write_row(out, frame, index, &sample)?;
            }
        }
        for (index, config) in scenario.pendulums.iter().enumerate() {
            let drift = last_energy[index] - first_energy[index];
            if config.damping == 0. && drift.abs() > 1e-2 {
                log::warn!(
                    "pendulum {} drifted {} in energy, consider more sub steps",
                    index,
                    drift
                );
            }
        }
        Ok(())
    })
    .map_err(|_| anyhow!("pendulum thread panicked"))?
}
