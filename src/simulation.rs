/*
 * Simulation Module
 *
 * The Simulation owns everything the flocking core needs between frames:
 * the flock itself, the tunable parameters and a seeded random number
 * generator. The frame driver holds one Simulation and calls `update`
 * once per frame; a reset calls `respawn`.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::boid::Flock;
use crate::error::FlockError;
use crate::params::FlockParams;
use crate::physics;
use crate::spawner;

pub struct Simulation {
    flock: Flock,
    params: FlockParams,
    rng: StdRng,
    count: usize,
}

impl Simulation {
    /// Create a simulation with an empty flock. Call `spawn` to populate it.
    pub fn new(params: FlockParams, seed: u64) -> Result<Self, FlockError> {
        params.validate()?;
        Ok(Self {
            flock: Flock::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
            count: 0,
        })
    }

    /// Create and spawn `count` boids in one go.
    pub fn with_flock(params: FlockParams, seed: u64, count: usize) -> Result<Self, FlockError> {
        let mut simulation = Self::new(params, seed)?;
        simulation.spawn(count)?;
        Ok(simulation)
    }

    pub fn spawn(&mut self, count: usize) -> Result<(), FlockError> {
        spawner::spawn_flock(&mut self.flock, count, &self.params, &mut self.rng)?;
        self.count = count;
        info!(count, "flock spawned");
        Ok(())
    }

    /// Re-randomize every boid, keeping the current flock size.
    pub fn respawn(&mut self) -> Result<(), FlockError> {
        self.spawn(self.count)
    }

    // Advance the flock by one frame of `frame_seconds` at viewport `scale`
    pub fn update(&mut self, frame_seconds: f32, scale: f32) {
        let frame_seconds = if frame_seconds.is_finite() && frame_seconds >= 0.0 {
            frame_seconds
        } else {
            warn!(frame_seconds, "ignoring invalid frame time");
            0.0
        };
        let delta_time = frame_seconds * self.params.time_scale;
        physics::update(&mut self.flock, delta_time, scale, &self.params);
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.params.enable_parallel = enabled;
    }

    /// Change the integration speed; invalid values leave the old one in place.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), FlockError> {
        self.apply_params(FlockParams {
            speed,
            ..self.params.clone()
        })
    }

    pub fn set_time_scale(&mut self, time_scale: f32) -> Result<(), FlockError> {
        self.apply_params(FlockParams {
            time_scale,
            ..self.params.clone()
        })
    }

    fn apply_params(&mut self, params: FlockParams) -> Result<(), FlockError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
