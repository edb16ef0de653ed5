//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new `GameState`.  Nothing here touches
//! the terminal, the clock, or any other ambient resource.

use crate::entities::{Enemy, GameState, GameStatus, Player, Projectile, Rect};
use crate::input::FrameInput;

// ── Tuning constants ─────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Vertical offset of the player's top edge from the playfield bottom.
pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PROJECTILE_SPEED: f32 = 5.0;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 1.0;

pub const GRID_COLS: u32 = 8;
pub const GRID_ROWS: u32 = 3;
pub const GRID_SPACING: f32 = 60.0;
pub const GRID_ORIGIN_X: f32 = 100.0;
pub const GRID_ORIGIN_Y: f32 = 50.0;

/// Score awarded per enemy destroyed.
pub const KILL_REWARD: u32 = 10;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state for a playfield of the given size:
/// player centered above the bottom edge, opening formation in place.
pub fn init_state(width: f32, height: f32) -> GameState {
    GameState {
        player: Player {
            rect: Rect::new(
                width / 2.0 - PLAYER_WIDTH / 2.0,
                height - PLAYER_BOTTOM_OFFSET,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: PLAYER_SPEED,
            projectiles: Vec::new(),
        },
        enemies: spawn_grid(GRID_COLS, GRID_ROWS, GRID_SPACING, GRID_ORIGIN_X, GRID_ORIGIN_Y),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
        width,
        height,
    }
}

/// Lay out the opening formation: `cols × rows` enemies on a fixed-pitch grid.
/// Called exactly once per session.
pub fn spawn_grid(cols: u32, rows: u32, spacing: f32, origin_x: f32, origin_y: f32) -> Vec<Enemy> {
    assert!(cols > 0 && rows > 0, "formation must have at least one enemy");
    let mut enemies = Vec::with_capacity((cols * rows) as usize);
    for i in 0..cols {
        for j in 0..rows {
            enemies.push(Enemy {
                rect: Rect::new(
                    origin_x + i as f32 * spacing,
                    origin_y + j as f32 * spacing,
                    ENEMY_WIDTH,
                    ENEMY_HEIGHT,
                ),
            });
        }
    }
    enemies
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one tick's worth of input: movement first, then the queued shots.
///
/// Both directions held at once cancel to a net zero.  The player is not
/// clamped to the playfield — the ship may leave the visible field.  Every
/// shot queued this tick spawns at the same post-movement position.
pub fn apply_intents(state: &GameState, input: &FrameInput) -> GameState {
    let mut dx = 0.0;
    if input.move_left {
        dx -= state.player.speed;
    }
    if input.move_right {
        dx += state.player.speed;
    }

    let mut state = GameState {
        player: Player {
            rect: Rect {
                x: state.player.rect.x + dx,
                ..state.player.rect
            },
            ..state.player.clone()
        },
        ..state.clone()
    };
    for _ in 0..input.fire_events {
        state = fire(&state);
    }
    state
}

/// Spawn one projectile at the player's top-center.  No cooldown: every
/// fire event produces a shot.
pub fn fire(state: &GameState) -> GameState {
    let p = &state.player.rect;
    let shot = Projectile {
        rect: Rect::new(
            p.x + p.width / 2.0 - PROJECTILE_WIDTH / 2.0,
            p.y,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        ),
    };
    let mut projectiles = state.player.projectiles.clone();
    projectiles.push(shot);
    GameState {
        player: Player {
            projectiles,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

// ── Per-frame motion ─────────────────────────────────────────────────────────

/// Move every live shot up one step, discarding any whose bottom edge has
/// crossed above the top boundary (`y + height < 0`).
pub fn advance_projectiles(state: &GameState) -> GameState {
    let projectiles: Vec<Projectile> = state
        .player
        .projectiles
        .iter()
        .filter_map(|p| {
            let new_y = p.rect.y - PROJECTILE_SPEED;
            if new_y + p.rect.height < 0.0 {
                None
            } else {
                Some(Projectile {
                    rect: Rect { y: new_y, ..p.rect },
                })
            }
        })
        .collect();
    GameState {
        player: Player {
            projectiles,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// March the whole formation down one step.  No horizontal sweep and no
/// bounce — the descent is a straight march.
pub fn advance_enemies(state: &GameState) -> GameState {
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            rect: Rect {
                y: e.rect.y + ENEMY_SPEED,
                ..e.rect
            },
        })
        .collect();
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Loss check: true once any enemy's bottom edge is strictly below the
/// playfield bottom.
pub fn any_reached_bottom(state: &GameState) -> bool {
    state
        .enemies
        .iter()
        .any(|e| e.rect.y + e.rect.height > state.height)
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Resolve projectile ↔ enemy hits for this frame.
///
/// Matches are collected against a snapshot of both live sets in a read-only
/// pass, then both vectors are filtered in one batch — nothing is removed
/// while the pairs are being walked.  Policy: one projectile kills at most
/// one enemy (the first it overlaps in formation order), and an enemy
/// already claimed this pass cannot be claimed again; a projectile whose
/// only overlaps were already claimed keeps flying.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut spent_projectiles: Vec<usize> = Vec::new();

    for (pi, projectile) in state.player.projectiles.iter().enumerate() {
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if projectile.rect.overlaps(&enemy.rect) && !killed_enemies.contains(&ei) {
                killed_enemies.push(ei);
                spent_projectiles.push(pi);
                break;
            }
        }
    }

    let score_gain = killed_enemies.len() as u32 * KILL_REWARD;

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    let projectiles: Vec<Projectile> = state
        .player
        .projectiles
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent_projectiles.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    GameState {
        player: Player {
            projectiles,
            ..state.player.clone()
        },
        enemies,
        score: state.score + score_gain,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Once the session is over this is a no-op: the returned state is an
/// unchanged copy, so score, positions and entity sets stay frozen no
/// matter how many further ticks arrive.
pub fn tick(state: &GameState, input: &FrameInput) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Apply this tick's input (movement, then queued shots) ─────────────
    let state = apply_intents(state, input);

    // ── 2. Move shots up, pruning those past the top edge ────────────────────
    let state = advance_projectiles(&state);

    // ── 3. March the formation down ──────────────────────────────────────────
    let state = advance_enemies(&state);

    // ── 4. Resolve hits and score them ───────────────────────────────────────
    let mut state = resolve_collisions(&state);

    // ── 5. Loss check — permanent once tripped ───────────────────────────────
    if any_reached_bottom(&state) {
        state.status = GameStatus::GameOver;
    }

    state.frame += 1;
    state
}
