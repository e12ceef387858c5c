/*
 * Application Module
 *
 * This module defines the nannou application model for the flock
 * screen-saver. It is the frame driver: every frame it measures the elapsed
 * time, applies held keys to the viewport scale, advances the simulation
 * and records frame statistics. Drawing lives in the renderer module.
 */

use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{info, warn};

use crate::camera::Viewport;
use crate::cli::LaunchSettings;
use crate::debug::DebugInfo;
use crate::input;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub viewport: Viewport,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_overlay: bool,
}

// nannou's model function is a plain fn pointer, so the launch state is
// handed over through this slot and taken exactly once.
static PENDING_LAUNCH: Mutex<Option<(LaunchSettings, Simulation)>> = Mutex::new(None);

// The slot only ever holds plain data, so a poisoned lock is still usable
fn launch_slot() -> MutexGuard<'static, Option<(LaunchSettings, Simulation)>> {
    PENDING_LAUNCH.lock().unwrap_or_else(|poisoned| {
        warn!("launch slot lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

fn stash_launch(settings: LaunchSettings, simulation: Simulation) {
    *launch_slot() = Some((settings, simulation));
}

fn take_launch() -> Option<(LaunchSettings, Simulation)> {
    launch_slot().take()
}

/// Open the window and run the frame loop until the user quits.
pub fn launch(settings: LaunchSettings, simulation: Simulation) {
    stash_launch(settings, simulation);
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let (settings, simulation) =
        take_launch().expect("app::launch must stash the launch settings before the app starts");

    let viewport = settings.viewport;
    let mut builder = app
        .new_window()
        .title("flock")
        .size(viewport.resolution.x as u32, viewport.resolution.y as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event);
    if settings.fullscreen {
        builder = builder.fullscreen();
    }
    let window_id = builder.build().expect("failed to create the flock window");

    let window = app
        .window(window_id)
        .expect("window must exist right after it was built");
    let egui = Egui::from_window(&window);

    info!(
        width = viewport.resolution.x as u32,
        height = viewport.resolution.y as u32,
        fullscreen = settings.fullscreen,
        "Resolution"
    );
    info!(size = simulation.count(), seed = settings.seed, "Flock size");

    Model {
        simulation,
        viewport,
        egui,
        debug_info: DebugInfo::default(),
        show_overlay: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let frame_seconds = update.since_last.as_secs_f32();

    input::apply_held_keys(app, model, frame_seconds);

    let started = Instant::now();
    model.simulation.update(frame_seconds, model.viewport.scale);
    let update_time = started.elapsed();

    model.debug_info.record_frame(
        app.fps(),
        update.since_last,
        update_time,
        model.simulation.flock().len(),
        model.viewport.scale,
    );

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.viewport,
        model.simulation.params(),
        &model.debug_info,
        model.show_overlay,
    );
    ui::apply_actions(model, actions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn launch_slot_survives_a_poisoned_lock() {
        let _ = std::thread::spawn(|| {
            let _guard = PENDING_LAUNCH.lock();
            panic!("poison the launch slot");
        })
        .join();
        assert!(PENDING_LAUNCH.is_poisoned());

        let settings = Cli::try_parse_from(["flock", "3", "--seed", "9"])
            .unwrap()
            .into_settings();
        let simulation = Simulation::with_flock(settings.params.clone(), settings.seed, 3).unwrap();
        stash_launch(settings.clone(), simulation);

        let (taken, simulation) = take_launch().expect("stashed launch must be returned");
        assert_eq!(taken, settings);
        assert_eq!(simulation.count(), 3);
        assert!(take_launch().is_none());
    }
}
