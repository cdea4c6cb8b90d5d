//! Per-frame update pipeline
//!
//! One `update` per frame: sweep balls, sweep bombs, then advance both
//! spawn schedulers. The driver loop feeds discrete movement intents
//! through [`tick`] and reads the state back to render.

use super::collision::sweep;
use super::state::{Faller, GamePhase, GameState};
use crate::consts::STARTING_LIVES;

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Restart after game over
    pub restart: bool,
    /// External quit signal; ends the run and saves the score
    pub quit: bool,
}

/// Advance the game by one frame: apply movement intents, then update.
/// While game-over, only `restart` and `quit` are honored.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.quit();
        return;
    }
    if state.is_game_over() {
        if input.restart {
            state.reset();
        }
        return;
    }
    if input.move_left {
        state.move_paddle_left();
    }
    if input.move_right {
        state.move_paddle_right();
    }
    state.update();
}

impl GameState {
    /// Run one frame of simulation: advance and resolve balls, then bombs,
    /// then the spawn schedulers. No-op while game-over.
    ///
    /// The pipeline of the frame that loses the last life still runs to
    /// completion, so spawn timers advance on the transition frame; only
    /// subsequent calls are no-ops.
    pub fn update(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.frame += 1;

        // Caught balls score; off-screen balls just disappear.
        let outcome = sweep(std::mem::take(&mut self.balls), &self.paddle);
        self.score += outcome.caught;
        self.balls = outcome.survivors;

        // Caught bombs cost lives; the last one ends the run and submits
        // the score exactly once, at the transition.
        let outcome = sweep(std::mem::take(&mut self.bombs), &self.paddle);
        self.bombs = outcome.survivors;
        for _ in 0..outcome.caught {
            if self.lives == 0 {
                break;
            }
            self.lives -= 1;
            if self.lives == 0 {
                self.phase = GamePhase::GameOver;
                self.commit_score();
            }
        }
        debug_assert!(self.lives <= STARTING_LIVES);
        debug_assert!((self.phase == GamePhase::GameOver) == (self.lives == 0));

        // Both schedules are independent and may fire on the same frame.
        if self.ball_spawner.advance(self.score) {
            let ball = Faller::ball(&mut self.rng);
            self.balls.push(ball);
        }
        if self.bomb_spawner.advance(self.score) {
            let bomb = Faller::bomb(&mut self.rng);
            self.bombs.push(bomb);
        }
    }
}
