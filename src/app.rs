/*
 * Application Module
 *
 * This module defines the nannou model for the boid swarm and its update
 * loop: one simulation step, then one render, every frame until the flock's
 * running flag is cleared or the window is closed.
 */

use std::fmt::Display;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::Rng;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;

pub const WINDOW_TITLE: &str = "Boid Swarm Simulation";

// Flock statistics are logged at debug level this often
pub const LOG_EVERY_FRAMES: u64 = 600;

// Environment variable that pins the spawn seed
pub const SEED_ENV: &str = "BOIDS_SEED";

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

/// Seed from `BOIDS_SEED` when it parses, otherwise a fresh random one.
pub fn seed_from_env() -> u64 {
    std::env::var(SEED_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
}

// Startup failures inside nannou callbacks cannot be returned; stop the process
fn fail_startup(what: &str, err: impl Display) -> ! {
    log::error!("{}: {}", what, err);
    std::process::exit(1);
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();
    let seed = seed_from_env();

    let flock = match Flock::with_seed(params, seed) {
        Ok(flock) => flock,
        Err(err) => fail_startup("Failed to create flock", err),
    };

    log::info!(
        "Spawned {} boids in a {}x{} world (seed {}, {} neighbor query)",
        flock.len(),
        params.world_width,
        params.world_height,
        seed,
        flock.query_name()
    );

    // Escape goes through the flock's running flag instead
    app.set_exit_on_escape(false);

    let window_id = match app
        .new_window()
        .title(WINDOW_TITLE)
        .size(params.world_width as u32, params.world_height as u32)
        .resizable(false)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => fail_startup("Failed to create window", err),
    };

    let egui = match app.window(window_id) {
        Some(window) => Egui::from_window(&window),
        None => fail_startup("Failed to create window", "window closed during startup"),
    };

    let debug_info = DebugInfo::new(seed, &flock);

    Model { flock, egui, debug_info }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    if !model.flock.is_running() {
        app.quit();
        return;
    }

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.flock.step();
    model.debug_info.record(&model.flock);

    if model.flock.frame() % LOG_EVERY_FRAMES == 0 {
        log::debug!(
            "frame {}: {} boids, mean speed {:.3}, {:.1} fps",
            model.debug_info.frames,
            model.debug_info.boids,
            model.debug_info.mean_speed,
            model.debug_info.fps
        );
    }

    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(&mut model.egui, &model.debug_info);
}

// Called once when the app shuts down
pub fn exit(_app: &App, model: Model) {
    log::info!(
        "Simulation finished after {} frames ({} boids)",
        model.flock.frame(),
        model.flock.len()
    );
}

// Handle raw window events for egui
fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
