/*
 * Geometry Module
 *
 * Turns an agent's position and heading into the isosceles triangle the
 * renderer draws. The triangle is always derived, never cached: callers
 * rebuild it every frame from the current position and velocity.
 */

use nannou::prelude::*;

use crate::math;

/// Three 2D vertices; `b` is the apex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

/// Size and base orientation of the agent triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleShape {
    pub half_width: f32,
    pub half_height: f32,
    pub rotation_offset_degrees: f32,
}

impl Default for TriangleShape {
    fn default() -> Self {
        Self {
            half_width: 0.01,
            half_height: 0.02,
            rotation_offset_degrees: -90.0,
        }
    }
}

// Build the triangle for an agent at `position` travelling along `heading`
pub fn triangle_for(position: Vec2, heading: f32, shape: &TriangleShape) -> Triangle {
    let dx = shape.half_width;
    let dy = shape.half_height;
    let angle = heading + math::degrees_to_radians(shape.rotation_offset_degrees);

    // Apex points along +y before rotation
    let a = position + vec2(dx, -dy);
    let b = position + vec2(0.0, dy);
    let c = position + vec2(-dx, -dy);

    Triangle {
        a: math::rotate_around(a, position, angle),
        b: math::rotate_around(b, position, angle),
        c: math::rotate_around(c, position, angle),
    }
}

/// Triangle implied by a position and the heading of a velocity.
pub fn triangle_for_velocity(position: Vec2, velocity: Vec2, shape: &TriangleShape) -> Triangle {
    triangle_for(position, math::heading_of(velocity), shape)
}
