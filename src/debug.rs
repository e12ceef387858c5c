/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame statistics
 * shown in the overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Flock size, current scale and frame count
 * - Time spent in the last flock update
 */

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub flock_size: usize,
    pub scale: f32,
    pub update_time: Duration,
    pub frames: u64,
}

impl DebugInfo {
    // Record the statistics for one finished frame
    pub fn record_frame(
        &mut self,
        fps: f32,
        frame_time: Duration,
        update_time: Duration,
        flock_size: usize,
        scale: f32,
    ) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.update_time = update_time;
        self.flock_size = flock_size;
        self.scale = scale;
        self.frames += 1;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }

    pub fn update_time_ms(&self) -> f64 {
        self.update_time.as_secs_f64() * 1000.0
    }
}
