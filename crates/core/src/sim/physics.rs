use crate::balance::{
    CAMERA_PAN_SPEED, CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN, CAMERA_ZOOM_RATE, SHIP_DRIFT_STRENGTH,
    SHIP_IMPULSE, SHIP_MAX_SPEED,
};
use crate::rng::next_rng;
use crate::state::{Camera, Ship};
use crate::types::{Mode, SimInput, Vec2};

/// Two draws from the physics stream nudge the velocity every tick. Thrust
/// only applies from the helm and scales with crew efficiency.
pub fn step_ship(
    ship: Ship,
    rng_state: u32,
    mode: Mode,
    input: &SimInput,
    efficiency: f64,
    dt: f64,
) -> (Ship, u32) {
    let first = next_rng(rng_state);
    let second = next_rng(first.next_state);
    let drift = Vec2::new(first.value - 0.5, second.value - 0.5).scale(SHIP_DRIFT_STRENGTH);

    let impulse = match mode {
        Mode::Command => {
            Vec2::new(input.move_x, input.move_y).scale(SHIP_IMPULSE * efficiency * dt)
        }
        Mode::Avatar => Vec2::ZERO,
    };
    let velocity = ship.velocity.add(drift).add(impulse).clamp_length(SHIP_MAX_SPEED);
    let position = ship.position.add(velocity.scale(dt));
    (Ship { position, velocity }, second.next_state)
}

/// Pan speed is multiplied by crew efficiency at the helm. On foot the
/// viewport pans at the base rate.
pub fn step_camera(
    camera: Camera,
    mode: Mode,
    input: &SimInput,
    efficiency: f64,
    dt: f64,
) -> Camera {
    if input.reset_camera {
        return Camera::default();
    }
    let speed = match mode {
        Mode::Command => CAMERA_PAN_SPEED * efficiency,
        Mode::Avatar => CAMERA_PAN_SPEED,
    };
    let pan = camera.pan.add(Vec2::new(input.pan_x, input.pan_y).scale(speed * dt));
    let zoom = camera.zoom + input.zoom_delta * CAMERA_ZOOM_RATE;
    let zoom = if zoom.is_finite() { zoom.clamp(CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX) } else { camera.zoom };
    Camera { pan, zoom }
}
