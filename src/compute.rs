//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `SessionState` (and, where needed, an RNG handle) and returns a brand-new
//! value.  Side effects are limited to the injected RNG and `log` output.

use log::{debug, info};
use rand::Rng;

use crate::consts::*;
use crate::difficulty;
use crate::entities::{
    Difficulty, FrameInput, Player, PlayerColor, PowerUp, Rect, SessionState, SessionStatus,
    Shield, Star,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh running session for the chosen colour.
pub fn init_state(color: PlayerColor, high_score: u32) -> SessionState {
    SessionState {
        player: Player::new(color),
        stars: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        high_score,
        best_at_start: high_score,
        difficulty: Difficulty::initial(),
        spawn_clock_ms: 0,
        elapsed_ms: 0,
        shield: None,
        status: SessionStatus::Running,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step left, unless that would leave the playfield.
pub fn move_player_left(state: &SessionState) -> SessionState {
    let mut next = state.clone();
    if state.player.rect.x - PLAYER_VEL >= 0 {
        next.player.rect.x -= PLAYER_VEL;
    }
    next
}

/// Step right, unless that would leave the playfield.
pub fn move_player_right(state: &SessionState) -> SessionState {
    let mut next = state.clone();
    if state.player.rect.right() + PLAYER_VEL <= WIDTH {
        next.player.rect.x += PLAYER_VEL;
    }
    next
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Number of stars emitted per spawn event at `level`.
pub fn star_batch_size(level: u32) -> usize {
    3 + (level / 2) as usize
}

/// Emit a batch of stars once the spawn clock passes the current interval,
/// then reset the clock.
pub fn spawn_stars(state: &SessionState, rng: &mut impl Rng) -> SessionState {
    if state.spawn_clock_ms <= state.difficulty.spawn_interval_ms {
        return state.clone();
    }
    let mut stars = state.stars.clone();
    for _ in 0..star_batch_size(state.difficulty.level) {
        stars.push(Star::above(rng.gen_range(0..=WIDTH - STAR_WIDTH)));
    }
    SessionState {
        stars,
        spawn_clock_ms: 0,
        ..state.clone()
    }
}

/// Roll the per-frame power-up chance.
pub fn spawn_power_up(state: &SessionState, rng: &mut impl Rng) -> SessionState {
    if !rng.gen_ratio(1, POWER_UP_CHANCE) {
        return state.clone();
    }
    let mut power_ups = state.power_ups.clone();
    power_ups.push(PowerUp::above(rng.gen_range(0..=WIDTH - POWER_UP_WIDTH)));
    SessionState {
        power_ups,
        ..state.clone()
    }
}

// ── Mover ────────────────────────────────────────────────────────────────────

fn fall(rect: Rect, velocity: i32) -> Rect {
    Rect {
        y: rect.y + velocity,
        ..rect
    }
}

pub fn move_stars(state: &SessionState) -> SessionState {
    let velocity = state.difficulty.star_velocity;
    let stars = state
        .stars
        .iter()
        .map(|s| Star {
            rect: fall(s.rect, velocity),
        })
        .collect();
    SessionState {
        stars,
        ..state.clone()
    }
}

pub fn move_power_ups(state: &SessionState) -> SessionState {
    let power_ups = state
        .power_ups
        .iter()
        .map(|p| PowerUp {
            rect: fall(p.rect, POWER_UP_VEL),
        })
        .collect();
    SessionState {
        power_ups,
        ..state.clone()
    }
}

// ── Collision Resolver ───────────────────────────────────────────────────────

fn exited(rect: &Rect) -> bool {
    rect.y > HEIGHT
}

/// Score dodged stars, absorb shielded hits, or end the session.
///
/// Stars are resolved in order.  The first unshielded hit marks the session
/// `Lost` and leaves the remaining stars untouched.
pub fn resolve_stars(state: &SessionState) -> SessionState {
    let player = state.player.rect;
    let shielded = state.shield_active();
    let mut score = state.score;
    let mut status = state.status;
    let mut stars = Vec::with_capacity(state.stars.len());

    let mut pending = state.stars.iter();
    for star in pending.by_ref() {
        if exited(&star.rect) {
            score += 1;
        } else if star.rect.intersects(&player) {
            if !shielded {
                status = SessionStatus::Lost;
                stars.push(star.clone());
                break;
            }
        } else {
            stars.push(star.clone());
        }
    }
    stars.extend(pending.cloned());

    SessionState {
        stars,
        score,
        status,
        ..state.clone()
    }
}

/// Drop exited power-ups; a touched one (re)starts the shield.
pub fn resolve_power_ups(state: &SessionState) -> SessionState {
    let player = state.player.rect;
    let mut shield = state.shield;
    let power_ups = state
        .power_ups
        .iter()
        .filter(|p| {
            if exited(&p.rect) {
                return false;
            }
            if p.rect.intersects(&player) {
                shield = Some(Shield {
                    activated_at_ms: state.elapsed_ms,
                });
                return false;
            }
            true
        })
        .cloned()
        .collect();
    SessionState {
        power_ups,
        shield,
        ..state.clone()
    }
}

pub fn expire_shield(state: &SessionState) -> SessionState {
    match state.shield {
        Some(s) if state.elapsed_ms.saturating_sub(s.activated_at_ms) > SHIELD_DURATION_MS => {
            SessionState {
                shield: None,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Terminal sessions are returned unchanged.
pub fn tick(state: &SessionState, input: &FrameInput, rng: &mut impl Rng) -> SessionState {
    if !state.is_running() {
        return state.clone();
    }
    if input.quit {
        info!("session quit at {} ms, score {}", state.elapsed_ms, state.score);
        return SessionState {
            status: SessionStatus::Quit,
            ..state.clone()
        };
    }

    // ── 1. Clocks ────────────────────────────────────────────────────────────
    let mut next = SessionState {
        frame: state.frame + 1,
        elapsed_ms: state.elapsed_ms + u64::from(input.dt_ms),
        spawn_clock_ms: state.spawn_clock_ms.saturating_add(input.dt_ms),
        ..state.clone()
    };

    // ── 2. Difficulty ────────────────────────────────────────────────────────
    next.difficulty = difficulty::recompute(next.difficulty, next.elapsed_ms);
    if next.difficulty.level != state.difficulty.level {
        debug!(
            "level {} -> {} (star velocity {}, spawn every {} ms)",
            state.difficulty.level,
            next.difficulty.level,
            next.difficulty.star_velocity,
            next.difficulty.spawn_interval_ms
        );
    }

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    next = spawn_stars(&next, rng);
    next = spawn_power_up(&next, rng);

    // ── 4. Player ────────────────────────────────────────────────────────────
    if input.left {
        next = move_player_left(&next);
    }
    if input.right {
        next = move_player_right(&next);
    }

    // ── 5. Stars ─────────────────────────────────────────────────────────────
    next = resolve_stars(&move_stars(&next));
    if next.status == SessionStatus::Lost {
        info!(
            "session lost at {} ms: level {}, score {}",
            next.elapsed_ms,
            next.difficulty.level,
            next.score
        );
        return with_high_score(next);
    }

    // ── 6. Power-ups & shield ────────────────────────────────────────────────
    let had_shield = next.shield;
    next = resolve_power_ups(&move_power_ups(&next));
    if next.shield != had_shield {
        info!("shield up at {} ms", next.elapsed_ms);
    }
    let before_expiry = next.shield_active();
    next = expire_shield(&next);
    if before_expiry && !next.shield_active() {
        info!("shield expired at {} ms", next.elapsed_ms);
    }

    with_high_score(next)
}

fn with_high_score(state: SessionState) -> SessionState {
    SessionState {
        high_score: state.high_score.max(state.score),
        ..state
    }
}
