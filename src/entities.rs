//! All game entity types — pure data, geometry helpers only.

/// Axis-aligned rectangle in playfield coordinates: origin top-left,
/// y grows downward.  Dimensions are always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "rect dimensions must be positive"
        );
        Rect { x, y, width, height }
    }

    /// Strict overlap on all four axes — touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// A player shot travelling straight up at a fixed speed.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal step per active movement intent, px per frame.
    pub speed: f32,
    /// Live shots.  Owned exclusively by the player; nothing else keeps
    /// a handle to a projectile.
    pub projectiles: Vec<Projectile>,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
