/*
 * Command Line Module
 *
 * Parses the launch options: flock size, fullscreen mode, RNG seed and the
 * parallel force pass. Produces the LaunchSettings the app starts from.
 */

use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::Rng;

use crate::camera::Viewport;
use crate::params::FlockParams;

/// Flock sizes picked when none is given on the command line.
pub const DEFAULT_COUNT_RANGE: Range<usize> = 5..25;

#[derive(Debug, Parser)]
#[command(
    name = "flock",
    version,
    about = "flock is a simple, interactive screen-saver",
    long_about = "flock is a simple, interactive screen-saver.\n\
                  Use -f or --fullscreen for maximum fun.\n\
                  Keys: R respawns the flock, Z/X zoom in/out, Escape quits."
)]
pub struct Cli {
    /// Number of boids in the flock (defaults to a random size)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Run fullscreen
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Seed for the random number generator (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute flocking forces on all cores
    #[arg(long)]
    pub parallel: bool,
}

/// Everything the app needs to open its window and spawn the first flock.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchSettings {
    pub count: usize,
    pub fullscreen: bool,
    pub seed: u64,
    pub viewport: Viewport,
    pub params: FlockParams,
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

impl Cli {
    pub fn into_settings(self) -> LaunchSettings {
        let seed = self.seed.unwrap_or_else(time_seed);
        let count = match self.count {
            Some(count) => count as usize,
            None => rand::thread_rng().gen_range(DEFAULT_COUNT_RANGE),
        };
        let params = FlockParams {
            enable_parallel: self.parallel,
            ..FlockParams::default()
        };

        LaunchSettings {
            count,
            fullscreen: self.fullscreen,
            seed,
            viewport: Viewport::for_mode(self.fullscreen),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_count_and_fullscreen() {
        let cli = Cli::try_parse_from(["flock", "-f", "42", "--seed", "7"]).unwrap();
        let settings = cli.into_settings();
        assert_eq!(settings.count, 42);
        assert!(settings.fullscreen);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.viewport.resolution, nannou::prelude::vec2(1440.0, 960.0));
    }

    #[test]
    fn default_count_is_random_in_range() {
        let settings = Cli::try_parse_from(["flock"]).unwrap().into_settings();
        assert!(DEFAULT_COUNT_RANGE.contains(&settings.count));
        assert!(!settings.fullscreen);
        assert_eq!(settings.viewport.resolution, nannou::prelude::vec2(800.0, 600.0));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Cli::try_parse_from(["flock", "0"]).is_err());
        assert!(Cli::try_parse_from(["flock", "many"]).is_err());
    }

    #[test]
    fn parallel_flag_reaches_params() {
        let settings = Cli::try_parse_from(["flock", "--parallel", "10"])
            .unwrap()
            .into_settings();
        assert!(settings.params.enable_parallel);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
