//! Drag-zone directions and offset classification.

use crate::geometry::Rect;

/// Margin in logical pixels added to every zone edge before containment
/// testing.
///
/// Neighbouring zones deliberately overlap once inflated; without the
/// margin, a finger resting near a shared edge flickers between zones on
/// every jittery sample. Overlaps are resolved by [`Direction::ZONES`]
/// order alone.
pub const ZONE_TOLERANCE: f32 = 20.0;

/// Discrete classification of a drag offset.
///
/// `None` is the "no zone active" sentinel: it has no bounds, no sector
/// geometry, and can never carry a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    DownLeft,
    DownRight,
    None,
}

impl Direction {
    /// Zones in classification priority order. The first inflated zone that
    /// contains an offset wins, so Left/Right shadow the down zones in the
    /// overlap band near y = 20.
    pub const ZONES: [Direction; 5] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Static zone rectangle in drag-offset space, `None` for the sentinel.
    pub fn bounds(self) -> Option<Rect> {
        match self {
            Direction::Left => Some(Rect::from_ltrb(20.0, -100.0, 100.0, 20.0)),
            Direction::Right => Some(Rect::from_ltrb(-100.0, -100.0, -20.0, 20.0)),
            Direction::Down => Some(Rect::from_ltrb(-35.0, 20.0, 35.0, 100.0)),
            Direction::DownLeft => Some(Rect::from_ltrb(35.0, 20.0, 100.0, 100.0)),
            Direction::DownRight => Some(Rect::from_ltrb(-100.0, 20.0, -35.0, 100.0)),
            Direction::None => None,
        }
    }
}

/// Maps a continuous drag offset to a [`Direction`].
///
/// Total and idempotent: any `(dx, dy)` pair yields a value, and repeated
/// calls with the same input always agree, so callers can diff against the
/// previous result to fire transition side effects exactly once.
pub fn classify_offset(dx: f32, dy: f32) -> Direction {
    for zone in Direction::ZONES {
        if let Some(bounds) = zone.bounds() {
            if bounds.inflate(ZONE_TOLERANCE).contains(dx, dy) {
                return zone;
            }
        }
    }
    Direction::None
}
