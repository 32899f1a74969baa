//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{FallingObject, GameState, GameStatus, ObjectKind, Player, Rect};
use crate::spawner::advance_spawner;

/// Everything the host samples from its input devices for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal pointer position in screen coordinates.
    pub cursor_x: i32,
    /// Confirm key or confirm pointer button is down.
    pub confirm: bool,
}

/// How a falling object left play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Fell past the bottom edge.
    Missed,
    /// Touched the paddle.
    Caught,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: paddle centred near the bottom, full lives.
pub fn init_state(config: GameConfig) -> GameState {
    debug_assert!(config.is_valid(), "invalid game config: {:?}", config);
    GameState {
        player: Player {
            x: (config.screen_width - config.player_width) / 2.0,
            y: config.screen_height - config.player_height - config.player_bottom_margin,
            width: config.player_width,
            height: config.player_height,
        },
        objects: Vec::new(),
        spawn_counter: 0,
        score: 0,
        lives: config.starting_lives,
        status: GameStatus::Playing,
        config,
    }
}

/// Back to the starting baseline.  The paddle is left where it is; the next
/// tick re-centres it on the pointer anyway.
pub fn reset(state: &GameState) -> GameState {
    log::info!("resetting game (final score {})", state.score);
    GameState {
        objects: Vec::new(),
        spawn_counter: 0,
        score: 0,
        lives: state.config.starting_lives,
        status: GameStatus::Playing,
        ..state.clone()
    }
}

// ── Input-driven movement ────────────────────────────────────────────────────

/// Centre the paddle on the pointer, kept fully on screen.
pub fn track_cursor(state: &GameState, cursor_x: i32) -> GameState {
    let x = (cursor_x as f32 - state.player.width / 2.0).clamp(0.0, state.config.player_max_x());
    GameState {
        player: Player { x, ..state.player.clone() },
        ..state.clone()
    }
}

// ── Collision & resolution ───────────────────────────────────────────────────

/// Strict AABB overlap; rectangles that merely share an edge do not touch.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Decide whether `object` leaves play this tick.
///
/// The offscreen check wins over the paddle check, so an object is resolved
/// at most once even if it is past the bottom edge and overlapping the paddle.
pub fn resolve_object(object: &FallingObject, player: &Player, screen_height: f32) -> Option<Resolution> {
    if object.y > screen_height {
        Some(Resolution::Missed)
    } else if overlaps(&Rect::from(player), &Rect::from(object)) {
        Some(Resolution::Caught)
    } else {
        None
    }
}

/// Score and life deltas for one resolution event.
fn outcome(kind: ObjectKind, resolution: Resolution) -> (u32, i32) {
    match (kind, resolution) {
        (ObjectKind::Reward, Resolution::Caught) => (1, 0),
        (ObjectKind::Reward, Resolution::Missed) => (0, -1),
        (ObjectKind::Hazard, Resolution::Caught) => (0, -1),
        (ObjectKind::Hazard, Resolution::Missed) => (0, 0),
    }
}

// ── State machine ────────────────────────────────────────────────────────────

/// Status after a simulation step has settled every object.
pub fn next_status(status: GameStatus, lives: i32) -> GameStatus {
    match status {
        GameStatus::Playing if lives <= 0 => GameStatus::GameOver,
        other => other,
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the world by one tick.  Does nothing unless the game is playing.
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Paddle follows the pointer ────────────────────────────────────────
    let state = track_cursor(state, input.cursor_x);

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    let (spawn_counter, spawned) = advance_spawner(state.spawn_counter, &state.config, rng);
    let live = state.objects.iter().cloned().chain(spawned);

    // ── 3. Move, then resolve each object at most once ───────────────────────
    let mut score = state.score;
    let mut lives = state.lives;
    let mut objects = Vec::with_capacity(state.objects.len() + 1);

    for object in live {
        let moved = FallingObject { y: object.y + object.speed, ..object };
        match resolve_object(&moved, &state.player, state.config.screen_height) {
            Some(resolution) => {
                let (points, life_delta) = outcome(moved.kind, resolution);
                log::debug!("{:?} object {:?} at ({}, {})", moved.kind, resolution, moved.x, moved.y);
                score += points;
                lives += life_delta;
            }
            None => objects.push(moved),
        }
    }

    // ── 4. Status ────────────────────────────────────────────────────────────
    let status = next_status(state.status, lives);
    if status == GameStatus::GameOver {
        log::info!("game over: score {}, lives {}", score, lives);
    }

    GameState {
        objects,
        spawn_counter,
        score,
        lives,
        status,
        ..state
    }
}

/// One host tick: confirm-to-restart while game over, simulation otherwise.
/// The tick that performs a reset does not also simulate.
pub fn update(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    match state.status {
        GameStatus::Playing => tick(state, input, rng),
        GameStatus::GameOver if input.confirm => reset(state),
        GameStatus::GameOver => state.clone(),
    }
}
