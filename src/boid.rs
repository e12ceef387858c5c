/*
 * Boid Module
 *
 * This module defines the Boid record and the Flock that owns them.
 * A boid is addressed by its index only; position, velocity, color and
 * triangle for index `i` always describe the same agent.
 *
 * - color is fixed when the boid is spawned
 * - the triangle is derived from position and velocity after every update
 */

use nannou::color::Srgba;
use nannou::prelude::*;

use crate::geometry::{self, Triangle, TriangleShape};

pub type Color = Srgba<f32>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub triangle: Triangle,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2, color: Color, shape: &TriangleShape) -> Self {
        Self {
            position,
            velocity,
            color,
            triangle: geometry::triangle_for_velocity(position, velocity, shape),
        }
    }

    // Rebuild the triangle from the current position and heading
    pub fn refresh_triangle(&mut self, shape: &TriangleShape) {
        self.triangle = geometry::triangle_for_velocity(self.position, self.velocity, shape);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Owned storage for every agent in the simulation.
///
/// The backing `Vec` lives as long as the flock; re-spawning replaces its
/// contents but keeps the container.
#[derive(Clone, Debug, Default)]
pub struct Flock {
    pub(crate) boids: Vec<Boid>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a flock from explicit boids, bypassing the random spawner.
    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn get(&self, index: usize) -> Option<&Boid> {
        self.boids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.boids.iter().map(|boid| boid.position)
    }

    /// Triangle and color per agent, in index order, for the renderer.
    pub fn render_items(&self) -> impl Iterator<Item = (Triangle, Color)> + '_ {
        self.boids.iter().map(|boid| (boid.triangle, boid.color))
    }

    pub fn all_finite(&self) -> bool {
        self.boids.iter().all(Boid::is_finite)
    }

    // Replace every boid while keeping the allocation
    pub(crate) fn replace_with(&mut self, boids: impl IntoIterator<Item = Boid>) {
        self.boids.clear();
        self.boids.extend(boids);
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}
