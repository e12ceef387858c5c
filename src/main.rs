/*
 * Flock
 *
 * A simple, interactive screen-saver: a small flock of colored triangles
 * steering by three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the heading of neighbors
 * 3. Cohesion: Steer towards neighbors
 *
 * Press R to respawn, Z/X to zoom, D for the overlay, Escape to quit.
 */

use clap::Parser;
use flock::{app, Cli, FlockError, Simulation};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<(), FlockError> {
    init_tracing();
    let settings = Cli::parse().into_settings();
    let simulation = Simulation::with_flock(settings.params.clone(), settings.seed, settings.count)?;
    app::launch(settings, simulation);
    Ok(())
}
