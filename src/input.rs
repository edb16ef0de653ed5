//! Input intents — the bridge between raw key transitions and the
//! per-frame simulation step.
//!
//! Directional movement is level-triggered: the collector latches the most
//! recent held state and the same intent applies on every tick until it
//! changes.  Firing is edge-triggered: each press queues exactly one shot,
//! and the whole queue is drained by the next tick.

/// Input consumed by a single simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire presses since the previous tick.  Each one spawns a single
    /// projectile.
    pub fire_events: u32,
}

/// Latches directional intents and queues fire events between ticks.
///
/// Single-threaded by design: the frontend forwards raw events into the
/// same thread that steps the simulation, so no locking is needed here.
#[derive(Debug, Default)]
pub struct InputCollector {
    move_left: bool,
    move_right: bool,
    fire_events: u32,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_move_left(&mut self, held: bool) {
        self.move_left = held;
    }

    pub fn set_move_right(&mut self, held: bool) {
        self.move_right = held;
    }

    /// Queue one shot.  Every press counts; there is no rate limit here.
    pub fn push_fire(&mut self) {
        self.fire_events += 1;
    }

    /// Snapshot the latched intents and drain the fire queue.  Directional
    /// state persists across ticks; fire events do not.
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            move_left: self.move_left,
            move_right: self.move_right,
            fire_events: self.fire_events,
        };
        self.fire_events = 0;
        frame
    }
}
