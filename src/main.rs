use std::io;
use std::thread;

use anyhow::Result;
use console_life::{Config, Simulation, TerminalRenderer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never land inside a frame
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let mut simulation = Simulation::new(&config);
    simulation.initialize(&mut rand::rng());

    let mut renderer = TerminalRenderer::new(io::stdout().lock(), &config);
    simulation.run(&mut renderer, thread::sleep)?;

    Ok(())
}
