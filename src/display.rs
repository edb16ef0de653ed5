//! Terminal back end — all I/O lives here.
//!
//! Translates a frame's draw list into crossterm commands.  Playfield
//! coordinates are scaled onto the terminal cell grid; no game logic is
//! performed in this module.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::render::{DrawCmd, Tint};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Yellow;
const C_TEXT: Color = Color::White;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Player => C_PLAYER,
        Tint::Enemy => C_ENEMY,
        Tint::Projectile => C_PROJECTILE,
        Tint::Text => C_TEXT,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps playfield coordinates onto the terminal cell grid.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub field_width: f32,
    pub field_height: f32,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(field_width: f32, field_height: f32, cols: u16, rows: u16) -> Self {
        Viewport {
            field_width,
            field_height,
            cols,
            rows,
        }
    }

    /// Nearest cell for a playfield point, clamped into the grid.
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let cx = (x / self.field_width * self.cols as f32).floor();
        let cy = (y / self.field_height * self.rows as f32).floor();
        (
            cx.clamp(0.0, self.cols.saturating_sub(1) as f32) as u16,
            cy.clamp(0.0, self.rows.saturating_sub(1) as f32) as u16,
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Draw one complete frame from its command list.
pub fn render<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    cmds: &[DrawCmd],
) -> std::io::Result<()> {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear => {
                out.queue(terminal::Clear(terminal::ClearType::All))?;
            }
            DrawCmd::FillRect {
                x,
                y,
                width,
                height,
                tint,
            } => {
                draw_rect(out, viewport, *x, *y, *width, *height, *tint)?;
            }
            // Font size has no terminal equivalent; text renders at cell scale.
            DrawCmd::Text { x, y, text, tint, .. } => {
                let (cx, cy) = viewport.cell(*x, *y);
                out.queue(cursor::MoveTo(cx, cy))?;
                out.queue(style::SetForegroundColor(tint_color(*tint)))?;
                out.queue(Print(text))?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_rect<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    tint: Tint,
) -> std::io::Result<()> {
    let (left, top) = viewport.cell(x, y);
    let (right, bottom) = viewport.cell(x + width, y + height);
    let span = (right.saturating_sub(left) + 1) as usize;

    out.queue(style::SetForegroundColor(tint_color(tint)))?;
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("█".repeat(span)))?;
    }
    Ok(())
}
