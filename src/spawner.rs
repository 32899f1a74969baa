//! Periodic creation of falling objects.
//!
//! The spawner owns no state of its own: the tick counter lives in
//! `GameState` and randomness comes through the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{FallingObject, ObjectKind};

/// Build one object at the top of the screen with a random column and kind.
pub fn spawn_object(config: &GameConfig, rng: &mut impl Rng) -> FallingObject {
    let span = (config.screen_width - config.obj_width).max(0.0) as u32;
    let x = if span == 0 { 0 } else { rng.gen_range(0..span) };
    let kind = if rng.gen_bool(config.hazard_chance) {
        ObjectKind::Hazard
    } else {
        ObjectKind::Reward
    };

    FallingObject {
        x: x as f32,
        y: 0.0,
        width: config.obj_width,
        height: config.obj_height,
        speed: config.obj_speed,
        kind,
    }
}

/// Advance the spawn timer by one tick.
///
/// Returns the new counter and, when the interval elapsed on this tick,
/// the freshly spawned object (the counter is then back at zero).
pub fn advance_spawner(
    counter: u32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> (u32, Option<FallingObject>) {
    let counter = counter + 1;
    if counter < config.spawn_interval {
        return (counter, None);
    }

    let object = spawn_object(config, rng);
    log::debug!("spawned {:?} at x={}", object.kind, object.x);
    (0, Some(object))
}
