//! Drag-session state machine.
//!
//! One session covers one gesture: `Idle -> Dragging -> Idle`. The session
//! owns the only mutable state in the core — the live offset and the most
//! recent classification — and everything else stays pure.

use crate::bindings::DirectionBindings;
use sling_geometry::{classify_offset, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Host-delivered gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start,
    Move { dx: f32, dy: f32 },
    End,
    Cancel,
}

/// What feeding one event changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    /// Nothing the host needs to react to.
    None,
    /// The classified zone changed; fire transition side effects (haptics,
    /// highlight) exactly once.
    DirectionChanged(Direction),
    /// The gesture ended. Carries the zone whose action ran, or
    /// `Direction::None` when the release was a no-op.
    Finished(Direction),
}

/// State for a single active gesture.
///
/// Classification is idempotent for a fixed offset, so comparing the fresh
/// result against the stored one is a sound transition detector.
#[derive(Clone, Debug)]
pub struct DragSession {
    phase: DragPhase,
    offset: Point,
    direction: Direction,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            offset: Point::ZERO,
            direction: Direction::None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current drag translation from the gesture origin.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Most recently classified zone, `Direction::None` outside a gesture.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Enters `Dragging` with a zeroed offset. A second start while a
    /// gesture is live is ignored: sessions never overlap under
    /// single-pointer semantics.
    pub fn begin(&mut self) {
        if self.phase == DragPhase::Dragging {
            log::warn!("drag start ignored: a gesture is already active");
            return;
        }
        self.phase = DragPhase::Dragging;
        self.offset = Point::ZERO;
        self.direction = Direction::None;
        log::trace!("drag session started");
    }

    /// Records a new offset sample and reclassifies. Returns the new zone
    /// when the classification changed, `None` otherwise (including all
    /// samples outside a gesture).
    pub fn update(&mut self, dx: f32, dy: f32) -> Option<Direction> {
        if self.phase != DragPhase::Dragging {
            log::trace!("offset sample ignored outside a gesture");
            return None;
        }
        self.offset = Point::new(dx, dy);
        let fresh = classify_offset(dx, dy);
        if fresh == self.direction {
            return None;
        }
        log::trace!("direction changed {:?} -> {:?}", self.direction, fresh);
        self.direction = fresh;
        Some(fresh)
    }

    /// Ends the gesture: resets the session, then invokes the action bound
    /// to the zone held at release. Returns the zone whose action ran, or
    /// `Direction::None` when the release was a no-op. Callback panics
    /// propagate to the host with the session already back at `Idle`.
    pub fn finish(&mut self, bindings: &DirectionBindings) -> Direction {
        if self.phase != DragPhase::Dragging {
            return Direction::None;
        }
        let released = self.direction;
        self.reset();
        if bindings.run_action(released) {
            log::trace!("drag released in {:?}, action fired", released);
            released
        } else {
            Direction::None
        }
    }

    /// Clears all gesture state without invoking anything.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.offset = Point::ZERO;
        self.direction = Direction::None;
    }

    /// Routes one host event through the state machine.
    pub fn handle(&mut self, event: DragEvent, bindings: &DirectionBindings) -> SessionChange {
        match event {
            DragEvent::Start => {
                self.begin();
                SessionChange::None
            }
            DragEvent::Move { dx, dy } => match self.update(dx, dy) {
                Some(direction) => SessionChange::DirectionChanged(direction),
                None => SessionChange::None,
            },
            DragEvent::End => SessionChange::Finished(self.finish(bindings)),
            DragEvent::Cancel => {
                self.reset();
                SessionChange::None
            }
        }
    }
}
