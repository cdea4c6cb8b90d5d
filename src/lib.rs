//! Catchfall - a falling-object catch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (entities, spawning,
//!   collision sweep, game state)
//! - `highscores`: Bounded, sorted top-10 leaderboard model
//! - `persistence`: File-backed leaderboard storage
//!
//! Rendering and raw input are external collaborators: a driver applies
//! paddle movement, calls [`sim::tick`] once per frame, and reads the
//! resulting state to draw.

pub mod highscores;
pub mod persistence;
pub mod sim;

pub use highscores::{HighScoreEntry, HighScores, MAX_HIGH_SCORES};
pub use persistence::{LoadError, ScoreStore};
pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Paddle geometry - horizontal bar near the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Y coordinate of the paddle's top edge (the catch threshold)
    pub const PADDLE_TOP_Y: f32 = HEIGHT - 40.0;
    /// Horizontal movement per input tick
    pub const PADDLE_STEP: f32 = 8.0;

    /// Falling entity radii (fixed per kind)
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BOMB_RADIUS: f32 = 20.0;

    /// Fall speed ranges (pixels per frame, closed ranges)
    pub const BALL_SPEED_MIN: f32 = 3.0;
    pub const BALL_SPEED_MAX: f32 = 7.0;
    pub const BOMB_SPEED_MIN: f32 = 2.0;
    pub const BOMB_SPEED_MAX: f32 = 5.0;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;

    /// Spawn schedule starting delays and difficulty floors (frames)
    pub const BALL_SPAWN_DELAY_START: u32 = 60;
    pub const BALL_SPAWN_DELAY_FLOOR: u32 = 15;
    pub const BOMB_SPAWN_DELAY_START: u32 = 180;
    pub const BOMB_SPAWN_DELAY_FLOOR: u32 = 60;

    /// Player name limits (name entry is a collaborator concern)
    pub const MAX_NAME_LEN: usize = 15;
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}

/// Clamp a raw player name to the name-entry rules: trimmed, at most
/// [`consts::MAX_NAME_LEN`] characters, falling back to the placeholder
/// when empty.
pub fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return consts::DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(consts::MAX_NAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name_passthrough() {
        assert_eq!(sanitize_name("Ada"), "Ada");
    }

    #[test]
    fn test_sanitize_name_trims_whitespace() {
        assert_eq!(sanitize_name("  Ada  "), "Ada");
    }

    #[test]
    fn test_sanitize_name_empty_defaults() {
        assert_eq!(sanitize_name(""), consts::DEFAULT_PLAYER_NAME);
        assert_eq!(sanitize_name("   "), consts::DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_sanitize_name_caps_length() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(sanitize_name(long), "abcdefghijklmno");
        assert_eq!(sanitize_name(long).chars().count(), consts::MAX_NAME_LEN);
    }
}
