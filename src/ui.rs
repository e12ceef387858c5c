/*
 * UI Module
 *
 * This module builds the egui overlay (toggled with D). It shows frame
 * statistics and offers controls for the viewport scale, the flock speed
 * and time scale, the parallel force pass and respawning the flock.
 */

use nannou_egui::{egui, Egui};
use tracing::warn;

use crate::app::Model;
use crate::camera::Viewport;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::FlockParams;

/// What the user asked for this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiActions {
    pub respawn: bool,
    pub parallel: Option<bool>,
    pub speed: Option<f32>,
    pub time_scale: Option<f32>,
}

// Update the UI and return the requested actions
pub fn update_ui(
    egui: &mut Egui,
    viewport: &mut Viewport,
    params: &FlockParams,
    debug_info: &DebugInfo,
    visible: bool,
) -> UiActions {
    let mut actions = UiActions::default();
    let ctx = egui.begin_frame();
    if !visible {
        return actions;
    }

    egui::Window::new("Flock")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
            ui.label(format!("Update time: {:.3} ms", debug_info.update_time_ms()));
            ui.label(format!("Flock size: {}", debug_info.flock_size));
            ui.label(format!("Scale: {:.2}", debug_info.scale));
            ui.label(format!("Frames: {}", debug_info.frames));

            ui.separator();

            let mut scale = viewport.scale;
            ui.add(egui::Slider::new(&mut scale, FlockParams::get_scale_range()).text("Scale"));
            if scale != viewport.scale {
                viewport.set_scale(scale);
            }

            let mut speed = params.speed;
            if ui
                .add(egui::Slider::new(&mut speed, FlockParams::get_speed_range()).text("Speed"))
                .changed()
            {
                actions.speed = Some(speed);
            }

            let mut time_scale = params.time_scale;
            if ui
                .add(
                    egui::Slider::new(&mut time_scale, FlockParams::get_time_scale_range())
                        .text("Time scale"),
                )
                .changed()
            {
                actions.time_scale = Some(time_scale);
            }

            let mut enabled = params.enable_parallel;
            if ui.checkbox(&mut enabled, "Parallel force pass").changed() {
                actions.parallel = Some(enabled);
            }

            if ui.button("Respawn Flock").clicked() {
                actions.respawn = true;
            }
        });

    actions
}

pub fn apply_actions(model: &mut Model, actions: UiActions) {
    if let Some(enabled) = actions.parallel {
        model.simulation.set_parallel(enabled);
    }
    if let Some(speed) = actions.speed {
        if let Err(err) = model.simulation.set_speed(speed) {
            warn!(%err, speed, "rejected speed");
        }
    }
    if let Some(time_scale) = actions.time_scale {
        if let Err(err) = model.simulation.set_time_scale(time_scale) {
            warn!(%err, time_scale, "rejected time scale");
        }
    }
    if actions.respawn {
        input::respawn(model);
    }
}
