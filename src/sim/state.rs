//! Game state and core simulation types
//!
//! Entities, the paddle, and the aggregate `GameState` the driver reads
//! back every frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::spawn::SpawnScheduler;
use crate::consts::*;
use crate::persistence::ScoreStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; sticky until an explicit reset
    GameOver,
}

/// Ball tint, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallColor {
    Red,
    Green,
    Blue,
}

impl BallColor {
    /// The full palette
    pub const ALL: [BallColor; 3] = [BallColor::Red, BallColor::Green, BallColor::Blue];
}

/// What a falling entity is: a reward to catch or a hazard to dodge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallerKind {
    Ball { color: BallColor },
    Bomb,
}

impl FallerKind {
    pub fn is_ball(&self) -> bool {
        matches!(self, FallerKind::Ball { .. })
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, FallerKind::Bomb)
    }
}

/// A falling entity (ball or bomb)
#[derive(Debug, Clone, PartialEq)]
pub struct Faller {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per frame, fixed for the entity's lifetime
    pub fall_speed: f32,
    pub kind: FallerKind,
}

impl Faller {
    /// Spawn a new ball just above the top edge
    pub fn ball(rng: &mut impl Rng) -> Self {
        let color = BallColor::ALL[rng.random_range(0..BallColor::ALL.len())];
        Self::spawn(
            BALL_RADIUS,
            BALL_SPEED_MIN..=BALL_SPEED_MAX,
            FallerKind::Ball { color },
            rng,
        )
    }

    /// Spawn a new bomb just above the top edge
    pub fn bomb(rng: &mut impl Rng) -> Self {
        Self::spawn(
            BOMB_RADIUS,
            BOMB_SPEED_MIN..=BOMB_SPEED_MAX,
            FallerKind::Bomb,
            rng,
        )
    }

    fn spawn(
        radius: f32,
        speed_range: std::ops::RangeInclusive<f32>,
        kind: FallerKind,
        rng: &mut impl Rng,
    ) -> Self {
        let x = rng.random_range(radius..=WIDTH - radius);
        let fall_speed = rng.random_range(speed_range);
        Self {
            pos: Vec2::new(x, -radius),
            radius,
            fall_speed,
            kind,
        }
    }

    /// Advance one frame of linear fall
    pub fn advance(&mut self) {
        self.pos.y += self.fall_speed;
    }

    /// Single-instant catch test against the paddle's top edge.
    ///
    /// True once the entity's leading edge has reached the catch threshold
    /// and its center lies within the paddle's horizontal span, inclusive
    /// at both ends. There is no upper bound on `y`: an entity already past
    /// the threshold still tests as caught while over the paddle, so the
    /// catch classification must be applied before the off-screen one.
    pub fn is_caught(&self, paddle: &Paddle) -> bool {
        self.pos.y + self.radius >= PADDLE_TOP_Y
            && paddle.x <= self.pos.x
            && self.pos.x <= paddle.x + PADDLE_WIDTH
    }

    /// True once the entity has fallen past the bottom edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > HEIGHT
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// X of the paddle's left edge, clamped to `[0, WIDTH - PADDLE_WIDTH]`
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        // Start centered
        Self {
            x: (WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    /// Step left, clamped at the left screen edge
    pub fn move_left(&mut self) {
        self.x = (self.x - PADDLE_STEP).max(0.0);
    }

    /// Step right, clamped at the right screen edge
    pub fn move_right(&mut self) {
        self.x = (self.x + PADDLE_STEP).min(WIDTH - PADDLE_WIDTH);
    }
}

/// Complete game state for one run
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Name shown in the HUD and recorded on the leaderboard
    pub player_name: String,
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
    pub paddle: Paddle,
    /// Live balls; order carries no meaning
    pub balls: Vec<Faller>,
    /// Live bombs; order carries no meaning
    pub bombs: Vec<Faller>,
    pub ball_spawner: SpawnScheduler,
    pub bomb_spawner: SpawnScheduler,
    /// Frames simulated since construction or the last reset
    pub frame: u64,
    pub(crate) rng: Pcg32,
    store: ScoreStore,
}

impl GameState {
    /// Create a new run. The caller supplies an already-validated player
    /// name (see [`crate::sanitize_name`]) and the score store to submit
    /// final scores to.
    pub fn new(seed: u64, player_name: impl Into<String>, store: ScoreStore) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let first_ball = Faller::ball(&mut rng);
        Self {
            seed,
            player_name: player_name.into(),
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
            paddle: Paddle::default(),
            balls: vec![first_ball],
            bombs: Vec::new(),
            ball_spawner: SpawnScheduler::balls(),
            bomb_spawner: SpawnScheduler::bombs(),
            frame: 0,
            rng,
            store,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Clamped paddle step. Performed unconditionally; withholding movement
    /// input while game-over is the driver's contract, not enforced here.
    pub fn move_paddle_left(&mut self) {
        self.paddle.move_left();
    }

    /// Clamped paddle step; see [`GameState::move_paddle_left`].
    pub fn move_paddle_right(&mut self) {
        self.paddle.move_right();
    }

    /// External quit signal: end the run and submit the score if one was
    /// still in progress. No-op when already game-over.
    pub fn quit(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.commit_score();
        }
    }

    /// Start a fresh run. A finished run's score is submitted first; a
    /// reset mid-run reinitializes unconditionally without saving.
    pub fn reset(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.commit_score();
        }
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
        self.balls.clear();
        self.bombs.clear();
        let first_ball = Faller::ball(&mut self.rng);
        self.balls.push(first_ball);
        self.ball_spawner = SpawnScheduler::balls();
        self.bomb_spawner = SpawnScheduler::bombs();
        self.frame = 0;
    }

    /// Submit the current score to the leaderboard. Fire-and-forget: store
    /// failures are logged inside the store, never surfaced to gameplay.
    pub(crate) fn commit_score(&mut self) {
        match self.store.submit(&self.player_name, self.score) {
            Some(rank) => log::info!(
                "{} scored {} - leaderboard rank {rank}",
                self.player_name,
                self.score
            ),
            None => log::info!(
                "{} scored {} - below the top {}",
                self.player_name,
                self.score,
                crate::highscores::MAX_HIGH_SCORES
            ),
        }
    }

    /// Read back the store this run submits scores to
    pub fn score_store(&self) -> &ScoreStore {
        &self.store
    }
}
