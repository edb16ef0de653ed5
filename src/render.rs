//! Render-command production — the core's only output channel.
//!
//! Each tick yields one `Vec<DrawCmd>` describing the complete frame in
//! composition order: clear, player, enemies, projectiles, score text,
//! and the terminal banner once the session has ended.  Back ends consume
//! the list in order and decide what a `Tint` or a font size means on
//! their device.

use crate::entities::{GameState, GameStatus, Rect};

/// Symbolic colors; the concrete mapping belongs to the back end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Player,
    Enemy,
    Projectile,
    Text,
}

// HUD placement, in playfield coordinates.
pub const SCORE_TEXT_X: f32 = 10.0;
pub const SCORE_TEXT_Y: f32 = 30.0;
pub const SCORE_FONT_SIZE: f32 = 20.0;
pub const GAME_OVER_FONT_SIZE: f32 = 40.0;

/// One drawing instruction in playfield coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tint: Tint,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        tint: Tint,
    },
}

fn fill_rect(r: &Rect, tint: Tint) -> DrawCmd {
    DrawCmd::FillRect {
        x: r.x,
        y: r.y,
        width: r.width,
        height: r.height,
        tint,
    }
}

/// Translate the current state into this frame's draw list.
pub fn render_commands(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds =
        Vec::with_capacity(state.enemies.len() + state.player.projectiles.len() + 4);

    cmds.push(DrawCmd::Clear);
    cmds.push(fill_rect(&state.player.rect, Tint::Player));

    for enemy in &state.enemies {
        cmds.push(fill_rect(&enemy.rect, Tint::Enemy));
    }
    for shot in &state.player.projectiles {
        cmds.push(fill_rect(&shot.rect, Tint::Projectile));
    }

    cmds.push(DrawCmd::Text {
        x: SCORE_TEXT_X,
        y: SCORE_TEXT_Y,
        text: format!("Score: {}", state.score),
        size: SCORE_FONT_SIZE,
        tint: Tint::Text,
    });

    if state.status == GameStatus::GameOver {
        cmds.push(DrawCmd::Text {
            x: state.width / 2.0 - 100.0,
            y: state.height / 2.0,
            text: "Game Over!".to_string(),
            size: GAME_OVER_FONT_SIZE,
            tint: Tint::Text,
        });
    }

    cmds
}
