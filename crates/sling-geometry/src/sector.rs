//! Sector triangles: the screen region backing each drag zone.
//!
//! Every zone maps to a triangle fanning out from the menu center. Two
//! variants exist because the menu draws two different things from the same
//! zone table: the translucent highlight under an active drag, and the
//! static triangle whose centroid anchors a zone's icon. For the `Down`
//! zone the two variants genuinely disagree (the highlight is scaled 1.5,
//! the icon anchor is not, with a different corner order) — both formulas
//! are kept verbatim pending a design decision on whether that split is
//! intentional.

use crate::direction::Direction;
use crate::geometry::Point;

/// Which consumer the triangle is computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectorVariant {
    /// Fill region shown while the zone is actively dragged.
    Highlight,
    /// Region whose centroid positions the zone's icon.
    IconAnchor,
}

/// Scale applied to the down-facing zones so their triangles reach the
/// display edge.
const DOWN_SECTOR_SCALE: f32 = 1.5;

/// Triangle fanning out from the menu center: `points[0]` is the center,
/// `points[1]` and `points[2]` are zone corners offset from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorTriangle {
    pub points: [Point; 3],
}

impl SectorTriangle {
    /// Arithmetic mean of the three vertices, used as the icon anchor.
    pub fn centroid(&self) -> Point {
        let [p0, p1, p2] = self.points;
        Point::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0)
    }
}

/// Derives the sector triangle for a zone around `center`, or `None` for
/// the sentinel direction.
pub fn sector_triangle(
    direction: Direction,
    center: Point,
    variant: SectorVariant,
) -> Option<SectorTriangle> {
    let bounds = direction.bounds()?;
    let (x_min, x_max) = (bounds.left(), bounds.right());
    let (y_min, y_max) = (bounds.top(), bounds.bottom());
    let s = DOWN_SECTOR_SCALE;

    let (p1, p2) = match direction {
        Direction::Left => (
            center.offset_by(x_max, y_min),
            center.offset_by(x_max, y_max),
        ),
        Direction::Right => (
            center.offset_by(x_min, y_min),
            center.offset_by(x_min, y_max),
        ),
        Direction::Down => match variant {
            SectorVariant::Highlight => (
                center.offset_by(x_min * s, y_max * s),
                center.offset_by(x_max * s, y_max * s),
            ),
            SectorVariant::IconAnchor => (
                center.offset_by(x_min, y_max),
                center.offset_by(x_max, y_max),
            ),
        },
        Direction::DownLeft => (
            center.offset_by(x_min * s, y_max * s),
            center.offset_by(x_max * s, y_min * s),
        ),
        Direction::DownRight => (
            center.offset_by(x_max * s, y_max * s),
            center.offset_by(x_min * s, y_min * s),
        ),
        Direction::None => return None,
    };

    Some(SectorTriangle {
        points: [center, p1, p2],
    })
}
