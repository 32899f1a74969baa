//! All game entity types — pure data, no logic.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    /// Scores when caught, costs a life when missed.
    Reward,
    /// Costs a life when caught, harmless when missed.
    Hazard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Axis-aligned rectangle in screen coordinates (origin top-left, Y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ── Player & falling objects ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallingObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Downward distance covered per tick.
    pub speed: f32,
    pub kind: ObjectKind,
}

impl From<&Player> for Rect {
    fn from(p: &Player) -> Self {
        Rect { x: p.x, y: p.y, width: p.width, height: p.height }
    }
}

impl From<&FallingObject> for Rect {
    fn from(o: &FallingObject) -> Self {
        Rect { x: o.x, y: o.y, width: o.width, height: o.height }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Live objects in spawn order.
    pub objects: Vec<FallingObject>,
    /// Ticks since the last spawn, always below `config.spawn_interval`.
    pub spawn_counter: u32,
    pub score: u32,
    /// May dip below zero within a tick; the status check runs afterwards.
    pub lives: i32,
    pub status: GameStatus,
    pub config: GameConfig,
}

impl GameState {
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
