/*
 * Input Module
 *
 * This module handles keyboard input for the flock screen-saver.
 *
 * Keys:
 * - Escape quits
 * - R respawns the flock with the same size
 * - Z (held) zooms in, X (held) zooms out
 * - D toggles the overlay
 */

use nannou::prelude::*;
use tracing::{debug, error};

use crate::app::Model;

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Leave keys to egui while one of its widgets has focus
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Escape => app.quit(),
        Key::R => respawn(model),
        Key::D => model.show_overlay = !model.show_overlay,
        _ => {}
    }
}

pub fn respawn(model: &mut Model) {
    match model.simulation.respawn() {
        Ok(()) => debug!(size = model.simulation.count(), "flock respawned"),
        Err(err) => error!(%err, "failed to respawn flock"),
    }
}

// Zoom while Z or X is held, proportional to the frame time
pub fn apply_held_keys(app: &App, model: &mut Model, frame_seconds: f32) {
    if app.keys.down.contains(&Key::Z) {
        model.viewport.zoom(frame_seconds);
    }
    if app.keys.down.contains(&Key::X) {
        model.viewport.zoom(-frame_seconds);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
