//! Per-frame collision sweep
//!
//! Advances a collection of falling entities and partitions them by their
//! post-advance positions. The partition is a two-pass rebuild into a fresh
//! survivor list - entities are consumed by value, so an entity can only
//! ever be counted once and there is no remove-during-iterate aliasing.

use super::state::{Faller, Paddle};

/// What happened to an entity this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Landed on the paddle
    Caught,
    /// Fell past the bottom edge without being caught
    OffScreen,
    /// Still falling
    Active,
}

/// Classify an entity against its current position. Caught takes priority:
/// a fast entity past the bottom edge but over the paddle still counts as
/// caught, matching the forgiving single-sample catch test.
pub fn classify(faller: &Faller, paddle: &Paddle) -> Fate {
    if faller.is_caught(paddle) {
        Fate::Caught
    } else if faller.is_off_screen() {
        Fate::OffScreen
    } else {
        Fate::Active
    }
}

/// Result of one frame's sweep over a collection
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    /// Entities caught by the paddle this frame
    pub caught: u32,
    /// Entities still in play, in their original order
    pub survivors: Vec<Faller>,
}

/// Advance every entity one frame and partition the collection. Off-screen
/// entities are dropped with no effect; the caller applies score or life
/// effects for the caught count.
pub fn sweep(fallers: Vec<Faller>, paddle: &Paddle) -> SweepOutcome {
    let mut caught = 0;
    let mut survivors = Vec::with_capacity(fallers.len());
    for mut faller in fallers {
        faller.advance();
        match classify(&faller, paddle) {
            Fate::Caught => caught += 1,
            Fate::OffScreen => {}
            Fate::Active => survivors.push(faller),
        }
    }
    SweepOutcome { caught, survivors }
}
