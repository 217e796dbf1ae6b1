/*
 * Input Module
 *
 * Keyboard handling. Escape asks the flock to stop; the update callback
 * sees the cleared running flag and quits the app.
 */

use nannou::prelude::*;

use crate::app::Model;

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Escape {
        log::info!("Quit requested");
        model.flock.stop();
    }
}
