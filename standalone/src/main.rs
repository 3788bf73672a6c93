#![warn(clippy::all, rust_2018_idioms)]

mod runner;
mod scenario;

use anyhow::{Context, Result};
use scenario::Scenario;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("unable to read scenario {}", path.display()))?;
            Scenario::from_yaml(&text)
                .with_context(|| format!("bad scenario {}", path.display()))
        }
        None => {
            log::info!("no scenario given, using the default pendulum");
            Ok(Scenario::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let path = std::env::args_os().nth(1);
    let scenario = load_scenario(path.as_deref().map(Path::new))?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    runner::run(&scenario, &mut out)?;
    out.flush()?;
    Ok(())
}
