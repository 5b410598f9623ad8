//! Pure scene data for the radial menu.
//!
//! The host renders this however it likes; the core only decides geometry
//! and glyphs. Icons for every bound zone are always present (the menu is
//! visible at rest); the highlight triangle exists only while a bound zone
//! is actively dragged.

use crate::menu::SlingMenu;
use sling_foundation::{IconGlyph, IconResolver};
use sling_geometry::{sector_triangle, Direction, Point, SectorTriangle, SectorVariant};

/// One zone's icon: where to draw it and what to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSlot {
    pub direction: Direction,
    /// Centroid of the zone's icon-anchor triangle.
    pub anchor: Point,
    pub glyph: IconGlyph,
    /// Whether the zone is under the current drag (hosts typically dim the
    /// icon while its zone is active).
    pub active: bool,
}

/// Everything the host needs to draw one frame of the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorScene {
    /// Fill region for the actively dragged zone, when that zone is bound.
    pub highlight: Option<SectorTriangle>,
    /// One slot per bound zone, in binding order.
    pub icons: Vec<IconSlot>,
}

impl SectorScene {
    pub fn build(
        menu: &SlingMenu,
        active: Direction,
        center: Point,
        icons: &dyn IconResolver,
    ) -> Self {
        let highlight = if menu.bindings().is_bound(active) {
            sector_triangle(active, center, SectorVariant::Highlight)
        } else {
            None
        };

        let slots = menu
            .bindings()
            .iter()
            .filter_map(|(direction, binding)| {
                let triangle = sector_triangle(direction, center, SectorVariant::IconAnchor)?;
                Some(IconSlot {
                    direction,
                    anchor: triangle.centroid(),
                    glyph: IconGlyph::resolve(icons, &binding.label),
                    active: direction == active,
                })
            })
            .collect();

        Self {
            highlight,
            icons: slots,
        }
    }
}
