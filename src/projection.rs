//! Read-only projection of the game state into backend-neutral draw commands.
//!
//! Coordinates are in world space (the 800×600 screen); the host decides how
//! to rasterise them.

use crate::entities::{GameState, GameStatus, ObjectKind, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb { r: 0x33, g: 0x33, b: 0x33 };
pub const C_PLAYER: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x00 };
pub const C_REWARD: Rgb = Rgb { r: 0x00, g: 0xff, b: 0x00 };
pub const C_HAZARD: Rgb = Rgb { r: 0xff, g: 0x00, b: 0x00 };

pub const GAME_OVER_TEXT: &str = "Game Over!\nPress Space or Click to Restart";

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole screen.
    Fill(Rgb),
    FillRect { rect: Rect, color: Rgb },
    /// Multi-line text anchored at the top-left corner.
    DebugText(String),
}

/// Everything to put on screen for one frame, in painter's order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

pub fn object_color(kind: ObjectKind) -> Rgb {
    match kind {
        ObjectKind::Reward => C_REWARD,
        ObjectKind::Hazard => C_HAZARD,
    }
}

pub fn hud_text(state: &GameState) -> String {
    format!(
        "Score: {}\nLives: {}\nObject Count: {}",
        state.score,
        state.lives,
        state.object_count()
    )
}

/// Render one complete frame.  Never mutates the state, so two calls with no
/// update in between yield identical frames.
pub fn draw(state: &GameState) -> Frame {
    let mut commands = vec![DrawCommand::Fill(C_BACKGROUND)];

    if state.status == GameStatus::GameOver {
        commands.push(DrawCommand::DebugText(GAME_OVER_TEXT.to_string()));
        return Frame { commands };
    }

    commands.push(DrawCommand::FillRect {
        rect: Rect::from(&state.player),
        color: C_PLAYER,
    });
    commands.extend(state.objects.iter().map(|o| DrawCommand::FillRect {
        rect: Rect::from(o),
        color: object_color(o.kind),
    }));
    commands.push(DrawCommand::DebugText(hud_text(state)));

    Frame { commands }
}
