/*
 * Physics Module
 *
 * This module handles the per-frame update of the flock. It runs in two
 * phases:
 * 1. Forces: for every boid, separation, alignment and cohesion are
 *    accumulated over every other boid (brute-force O(n²)). This phase only
 *    reads the flock, so it can run in parallel.
 * 2. Integration: each boid's velocity is nudged by its force, pushed back
 *    from the soft boundary, speed-clamped, and its position and triangle
 *    are advanced.
 *
 * Phase 2 never starts before phase 1 has produced every force, so all
 * reads see the previous frame's state.
 */

use nannou::prelude::*;
use rayon::prelude::*;
use tracing::warn;

use crate::boid::{Boid, Flock};
use crate::math;
use crate::params::FlockParams;

/// The three steering components acting on one boid, already averaged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlockingForces {
    pub separation: Vec2,
    pub alignment: Vec2,
    pub cohesion: Vec2,
    pub short_neighbours: usize,
    pub neighbours: usize,
}

impl FlockingForces {
    pub fn net(&self) -> Vec2 {
        self.separation + self.alignment + self.cohesion
    }
}

// Accumulate separation, alignment and cohesion for boid `i`
pub fn flocking_forces(boids: &[Boid], i: usize, params: &FlockParams) -> FlockingForces {
    let mut forces = FlockingForces::default();
    let position = boids[i].position;

    for (j, other) in boids.iter().enumerate() {
        if i == j {
            continue;
        }

        let d_squared = math::squared_distance(position, other.position);
        let diff = math::sub(position, other.position);

        // Separation: short range inverse-square repulsion.
        // Coincident pairs have no direction to push along and would divide by zero.
        if d_squared < params.separation_radius_sq && d_squared >= params.min_distance_sq {
            let push = math::scale(math::normalize(diff), params.speed / d_squared);
            forces.separation = math::add(forces.separation, push);
            forces.short_neighbours += 1;
        }

        // Alignment and cohesion, weighted by d² so farther neighbours count more
        if d_squared < params.neighbour_radius_sq {
            let heading = math::scale(math::normalize(other.velocity), d_squared);
            forces.alignment = math::add(forces.alignment, heading);
            let pull = math::scale(math::normalize(diff), -d_squared);
            forces.cohesion = math::add(forces.cohesion, pull);
            forces.neighbours += 1;
        }
    }

    if forces.short_neighbours > 0 {
        forces.separation = math::divide(forces.separation, forces.short_neighbours as f32);
    }
    if forces.neighbours > 0 {
        forces.alignment = math::divide(forces.alignment, forces.neighbours as f32);
        forces.cohesion = math::divide(forces.cohesion, forces.neighbours as f32);
    }

    forces
}

/// Net steering force on boid `i`.
pub fn flocking_force(flock: &Flock, i: usize, params: &FlockParams) -> Vec2 {
    flocking_forces(flock.boids(), i, params).net()
}

/// Net force for every boid, in index order. Reads the flock only.
pub fn compute_forces(flock: &Flock, params: &FlockParams) -> Vec<Vec2> {
    let boids = flock.boids();
    if params.enable_parallel {
        (0..boids.len())
            .into_par_iter()
            .map(|i| flocking_forces(boids, i, params).net())
            .collect()
    } else {
        (0..boids.len())
            .map(|i| flocking_forces(boids, i, params).net())
            .collect()
    }
}

// Velocity change that pulls a boid back inside the soft boundary
pub fn boundary_correction(position: Vec2, delta_time: f32, scale: f32, edge: f32) -> Vec2 {
    let mut correction = Vec2::ZERO;

    let scaled = position * scale;
    let px = scaled.x - edge;
    let py = scaled.y - edge;

    if (scaled.x > edge || scaled.x < -edge) && px != 0.0 {
        correction.x -= delta_time / px;
    }
    if (scaled.y > edge || scaled.y < -edge) && py != 0.0 {
        correction.y -= delta_time / py;
    }

    correction
}

/// Cap the speed at 1 while keeping the direction.
pub fn clamp_speed(velocity: Vec2) -> Vec2 {
    let magnitude = math::clamp(math::length(velocity), 0.0, 1.0);
    math::scale(math::normalize(velocity), magnitude)
}

// Advance one boid by one frame using its precomputed force
pub fn integrate(boid: &mut Boid, force: Vec2, delta_time: f32, scale: f32, params: &FlockParams) {
    let mut velocity = boid.velocity + force * delta_time;
    velocity += boundary_correction(boid.position, delta_time, scale, params.edge);
    boid.velocity = clamp_speed(velocity);
    boid.position += boid.velocity * delta_time * params.speed;
    boid.refresh_triangle(&params.triangle);
}

/// Integrate every boid with the matching entry of `forces`.
///
/// A force slice that does not match the flock leaves every boid untouched.
pub(crate) fn step(
    flock: &mut Flock,
    forces: &[Vec2],
    delta_time: f32,
    scale: f32,
    params: &FlockParams,
) {
    if forces.len() != flock.len() {
        warn!(forces = forces.len(), boids = flock.len(), "force count does not match flock");
        return;
    }
    for (boid, &force) in flock.boids_mut().iter_mut().zip(forces) {
        integrate(boid, force, delta_time, scale, params);
    }
}

/// One full frame: every force first, then every integration.
///
/// `delta_time` is expected to be already multiplied by the time scale.
pub fn update(flock: &mut Flock, delta_time: f32, scale: f32, params: &FlockParams) {
    if flock.is_empty() {
        return;
    }
    let forces = compute_forces(flock, params);
    step(flock, &forces, delta_time, scale, params);
}
