/*
 * UI Module
 *
 * A read-only nannou_egui panel with frame timing and flock statistics.
 * The simulation has no runtime controls, so nothing here writes back.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;

pub fn update_ui(egui: &mut Egui, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    egui::Window::new("Flock Stats")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
            ui.separator();
            ui.label(format!("Boids: {}", debug_info.boids));
            ui.label(format!("Frames simulated: {}", debug_info.frames));
            ui.label(format!("Mean speed: {:.3}", debug_info.mean_speed));
            ui.label(format!("Neighbor query: {}", debug_info.neighbor_query));
            ui.label(format!("Seed: {}", debug_info.seed));
            ui.separator();
            ui.label("Esc: quit");
        });
}
