//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one tick. Input is sampled by
//! the caller; `now_ms` comes from the backend clock and only feeds the
//! animation cadence.

use super::state::{GamePhase, GameState, playfield};
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Movement keys currently held (level-triggered)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start pressed this tick (edge-triggered)
    pub start: bool,
}

/// Advance the game state by one tick
///
/// Opening and GameOver only react to the start flag; everything else
/// happens while Playing, in a fixed order: shark motion, shrimp motion,
/// catch resolution, animation.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    match state.phase {
        GamePhase::Opening | GamePhase::GameOver => {
            if input.start {
                state.start_session(now_ms);
            }
        }
        GamePhase::Playing => {
            move_shark(state, input);
            move_shrimp(state);
            resolve_catch(state);
            state.anim.advance(now_ms);
        }
    }
}

/// Axes are independent, so holding two perpendicular keys moves
/// diagonally. Within an axis, opposing keys tie-break by check order:
/// up wins over down, right wins over left. The ordering is deliberate
/// policy, not an accident of branch layout.
fn move_shark(state: &mut GameState, input: &TickInput) {
    let shark = &mut state.shark;
    if input.up {
        shark.pos.y -= SHARK_SPEED;
    } else if input.down {
        shark.pos.y += SHARK_SPEED;
    }
    if input.right {
        shark.pos.x += SHARK_SPEED;
    } else if input.left {
        shark.pos.x -= SHARK_SPEED;
    }
    shark.clamp_within(&playfield());
}

/// Drift left; once the right edge has passed x=0 the shrimp respawns at
/// the right side instead of moving further.
fn move_shrimp(state: &mut GameState) {
    if state.shrimp.right() >= 0.0 {
        state.shrimp.pos.x -= SHRIMP_SPEED;
    } else {
        state.respawn_shrimp();
    }
}

/// AABB overlap between shark and shrimp scores a catch. Runs once per
/// Playing tick; the win check lives here and nowhere else.
fn resolve_catch(state: &mut GameState) {
    if state.shark.intersects(&state.shrimp) {
        state.respawn_shrimp();
        state.score += 1;
        log::debug!("shrimp caught, score {}", state.score);
        if state.score >= WIN_SCORE {
            state.phase = GamePhase::GameOver;
            log::info!("session over, final score {}", state.score);
        }
    }
}
