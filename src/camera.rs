/*
 * Camera Module
 *
 * This module defines the Viewport that maps the flock's normalized
 * [-0.5, 0.5] world onto the window. The user zooms by changing `scale`,
 * which the physics also uses for the soft boundary.
 */

use nannou::prelude::*;

pub const WINDOWED_RESOLUTION: (u32, u32) = (800, 600);
pub const FULLSCREEN_RESOLUTION: (u32, u32) = (1440, 960);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub resolution: Vec2,
    pub scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: vec2(width as f32, height as f32),
            scale: 1.0,
            min_scale: 0.1,
            max_scale: 5.0,
        }
    }

    pub fn for_mode(fullscreen: bool) -> Self {
        let (width, height) = if fullscreen {
            FULLSCREEN_RESOLUTION
        } else {
            WINDOWED_RESOLUTION
        };
        Self::new(width, height)
    }

    // Convert a point from world space to nannou's centred screen space
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        point * self.resolution * self.scale
    }

    // Grow or shrink the scale, clamping to min/max values
    pub fn zoom(&mut self, delta: f32) {
        self.set_scale(self.scale + delta);
    }

    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
    }
}
