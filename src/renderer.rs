/*
 * Renderer Module
 *
 * Draws every boid as a small white arrow on a black background. The
 * renderer only reads the flock; the heading it draws is derived from the
 * velocity and never fed back into the simulation.
 *
 * Simulation space has its origin in the top-left corner with y pointing
 * down, nannou's has its origin in the window centre with y pointing up.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::params::SimulationParams;

pub const ARROW_LENGTH: f32 = 6.0;
pub const ARROWHEAD_SIZE: f32 = 6.0;
const ARROWHEAD_SPREAD: f32 = std::f32::consts::PI / 6.0;

// Convert a simulation-space point to window coordinates
pub fn to_screen(point: Vec2, params: &SimulationParams) -> Vec2 {
    vec2(
        point.x - params.world_width / 2.0,
        params.world_height / 2.0 - point.y,
    )
}

/// The three line segments of a boid's arrow, in simulation space.
///
/// The shaft starts at the boid and points opposite to its heading, with
/// the head drawn at the far end.
pub fn arrow_segments(boid: &Boid) -> [(Vec2, Vec2); 3] {
    let angle = boid.heading() + std::f32::consts::PI;
    let start = boid.position;
    let tip = start + vec2(angle.cos(), angle.sin()) * ARROW_LENGTH;

    let head = |a: f32| tip + vec2(a.cos(), a.sin()) * ARROWHEAD_SIZE;

    [
        (start, tip),
        (tip, head(angle - ARROWHEAD_SPREAD)),
        (tip, head(angle + ARROWHEAD_SPREAD)),
    ]
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    let params = model.flock.params();
    for boid in model.flock.boids() {
        for (start, end) in arrow_segments(boid) {
            draw.line()
                .start(to_screen(start, params))
                .end(to_screen(end, params))
                .weight(1.0)
                .color(WHITE);
        }
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::warn!("Failed to draw flock: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::warn!("Failed to draw stats panel: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_to_screen_maps_corners() {
        let params = SimulationParams::default();

        assert_eq!(to_screen(vec2(0.0, 0.0), &params), vec2(-720.0, 405.0));
        assert_eq!(to_screen(vec2(1440.0, 810.0), &params), vec2(720.0, -405.0));
        assert_eq!(to_screen(vec2(720.0, 405.0), &params), Vec2::ZERO);
    }

    #[test]
    fn test_arrow_trails_behind_heading() {
        let boid = Boid::new(vec2(100.0, 100.0), vec2(1.0, 0.0));
        let [shaft, left, right] = arrow_segments(&boid);

        assert_eq!(shaft.0, boid.position);
        assert!(approx(shaft.1, vec2(94.0, 100.0)));
        assert_eq!(left.0, shaft.1);
        assert_eq!(right.0, shaft.1);

        // Head lines fan out symmetrically around the shaft axis
        assert!(approx(vec2(left.1.x, 200.0 - left.1.y), right.1));
    }

    #[test]
    fn test_arrow_for_stopped_boid_is_finite() {
        let boid = Boid::new(vec2(10.0, 10.0), Vec2::ZERO);
        for (a, b) in arrow_segments(&boid) {
            assert!(a.x.is_finite() && a.y.is_finite());
            assert!(b.x.is_finite() && b.y.is_finite());
        }
    }
}
