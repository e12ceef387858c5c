/*
 * Simulation Parameters Module
 *
 * This module defines the FlockParams struct holding every tunable of the
 * flocking core. Defaults reproduce the classic screen-saver feel; the UI
 * uses the range helpers for its sliders.
 */

use crate::error::FlockError;
use crate::geometry::TriangleShape;

// Parameters for the simulation core
#[derive(Clone, Debug, PartialEq)]
pub struct FlockParams {
    /// Separation numerator and position integration factor.
    pub speed: f32,
    /// Squared short-range threshold, compared directly against d².
    pub separation_radius_sq: f32,
    /// Squared neighbour threshold, compared directly against d².
    pub neighbour_radius_sq: f32,
    /// Soft boundary offset in the normalized [-0.5, 0.5] display space.
    pub edge: f32,
    /// Factor applied to frame seconds before integration.
    pub time_scale: f32,
    pub spawn_position_spread: f32,
    pub spawn_velocity_spread: f32,
    /// Pairs closer than this are treated as coincident.
    pub min_distance_sq: f32,
    pub triangle: TriangleShape,
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            speed: 0.01,
            separation_radius_sq: 0.005,
            neighbour_radius_sq: 1.0,
            edge: 0.45,
            time_scale: 50.0,
            spawn_position_spread: 0.5,
            spawn_velocity_spread: 5.0,
            min_distance_sq: 1e-10,
            triangle: TriangleShape::default(),
            enable_parallel: false,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), FlockError> {
    if !value.is_finite() {
        return Err(FlockError::InvalidParams { name, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(FlockError::InvalidParams { name, reason: "must be positive" });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> Result<(), FlockError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlockError::InvalidParams {
            name,
            reason: "must be finite and not negative",
        });
    }
    Ok(())
}

impl FlockParams {
    // Check every tunable before it reaches the core
    pub fn validate(&self) -> Result<(), FlockError> {
        positive("speed", self.speed)?;
        positive("separation_radius_sq", self.separation_radius_sq)?;
        positive("neighbour_radius_sq", self.neighbour_radius_sq)?;
        positive("edge", self.edge)?;
        positive("time_scale", self.time_scale)?;
        positive("min_distance_sq", self.min_distance_sq)?;
        positive("triangle.half_width", self.triangle.half_width)?;
        positive("triangle.half_height", self.triangle.half_height)?;
        non_negative("spawn_position_spread", self.spawn_position_spread)?;
        non_negative("spawn_velocity_spread", self.spawn_velocity_spread)?;
        if !self.triangle.rotation_offset_degrees.is_finite() {
            return Err(FlockError::InvalidParams {
                name: "triangle.rotation_offset_degrees",
                reason: "must be finite",
            });
        }
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_scale_range() -> std::ops::RangeInclusive<f32> {
        0.1..=5.0
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.001..=0.05
    }

    pub fn get_time_scale_range() -> std::ops::RangeInclusive<f32> {
        1.0..=200.0
    }
}
