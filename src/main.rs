//! Headless demo driver
//!
//! Stands in for a real render/input front end: seeds a run, autoplays it
//! with a simple chase policy, and prints the final score and leaderboard.
//!
//! Usage: `catchfall [name] [seed] [max-frames]`

use std::cmp::Ordering;

use catchfall::consts::{PADDLE_STEP, PADDLE_TOP_Y, PADDLE_WIDTH};
use catchfall::persistence::DEFAULT_SCORES_FILE;
use catchfall::{GameState, ScoreStore, TickInput, sanitize_name, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let raw_name = args.next().unwrap_or_default();
    let name = sanitize_name(&raw_name);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    // Default cap: ten minutes at 60 fps
    let max_frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(36_000);

    let store = ScoreStore::new(DEFAULT_SCORES_FILE);
    let mut game = GameState::new(seed, name, store);
    log::info!("starting run: player={} seed={seed}", game.player_name);

    for _ in 0..max_frames {
        if game.is_game_over() {
            break;
        }
        let input = chase_input(&game);
        tick(&mut game, &input);
    }
    let frames = game.frame;
    // Saves the run if the frame budget expired mid-game; no-op otherwise.
    game.quit();

    println!(
        "{} scored {} in {frames} frames (seed {seed})",
        game.player_name, game.score
    );
    let scores = game.score_store().load();
    if !scores.is_empty() {
        println!("-- high scores --");
        for (i, entry) in scores.entries.iter().enumerate() {
            println!("{:>2}. {:<15} {:>6}", i + 1, entry.name, entry.score);
        }
    }
}

/// One frame of autoplay: sidestep any bomb bearing down on the paddle,
/// otherwise chase the ball closest to the catch line.
fn chase_input(game: &GameState) -> TickInput {
    let paddle_center = game.paddle.x + PADDLE_WIDTH / 2.0;

    let threat = game
        .bombs
        .iter()
        .filter(|b| {
            b.pos.y + b.radius >= PADDLE_TOP_Y - 80.0
                && (b.pos.x - paddle_center).abs() < PADDLE_WIDTH
        })
        .min_by(|a, b| {
            (a.pos.x - paddle_center)
                .abs()
                .partial_cmp(&(b.pos.x - paddle_center).abs())
                .unwrap_or(Ordering::Equal)
        });
    if let Some(bomb) = threat {
        return if bomb.pos.x >= paddle_center {
            TickInput {
                move_left: true,
                ..Default::default()
            }
        } else {
            TickInput {
                move_right: true,
                ..Default::default()
            }
        };
    }

    let target = game
        .balls
        .iter()
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal));
    if let Some(ball) = target {
        if ball.pos.x < paddle_center - PADDLE_STEP {
            return TickInput {
                move_left: true,
                ..Default::default()
            };
        }
        if ball.pos.x > paddle_center + PADDLE_STEP {
            return TickInput {
                move_right: true,
                ..Default::default()
            };
        }
    }
    TickInput::default()
}
