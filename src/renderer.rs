/*
 * Renderer Module
 *
 * This module draws the flock. Every boid is handed over as its triangle
 * and fixed color; the viewport maps world coordinates to the window.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::boid::Flock;
use crate::camera::Viewport;

// Draw one filled triangle per boid
pub fn draw_flock(draw: &Draw, flock: &Flock, viewport: &Viewport) {
    for (triangle, color) in flock.render_items() {
        let [a, b, c] = triangle.vertices().map(|vertex| viewport.world_to_screen(vertex));
        draw.tri().points(a, b, c).color(color);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    draw_flock(&draw, model.simulation.flock(), &model.viewport);

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to render flock");
    }

    if model.show_overlay {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            warn!(?err, "failed to render overlay");
        }
    }
}
