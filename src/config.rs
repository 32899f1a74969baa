//! Gameplay constants, gathered in one place so tests can bend them.

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Catch 'Em All";

/// Ticks between two spawns.
pub const SPAWN_INTERVAL: u32 = 60;

pub const OBJ_WIDTH: f32 = 40.0;
pub const OBJ_HEIGHT: f32 = 40.0;
/// Pixels per tick.
pub const OBJ_SPEED: f32 = 5.0;
/// Probability that a freshly spawned object is a hazard.
pub const HAZARD_CHANCE: f64 = 0.3;

pub const PLAYER_WIDTH: f32 = 120.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
/// Gap between the paddle's bottom edge and the bottom of the screen.
pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

pub const STARTING_LIVES: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Must be at least 1.
    pub spawn_interval: u32,
    pub obj_width: f32,
    pub obj_height: f32,
    pub obj_speed: f32,
    /// Probability in `[0, 1]`; NaN is rejected.
    pub hazard_chance: f64,
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub starting_lives: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            spawn_interval: SPAWN_INTERVAL,
            obj_width: OBJ_WIDTH,
            obj_height: OBJ_HEIGHT,
            obj_speed: OBJ_SPEED,
            hazard_chance: HAZARD_CHANCE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl GameConfig {
    /// Ranges the simulation relies on: a non-zero spawn interval and a
    /// hazard chance that `Rng::gen_bool` accepts.
    pub fn is_valid(&self) -> bool {
        self.spawn_interval >= 1 && (0.0..=1.0).contains(&self.hazard_chance)
    }

    /// Largest X the paddle may take while staying fully on screen.
    pub fn player_max_x(&self) -> f32 {
        (self.screen_width - self.player_width).max(0.0)
    }
}
