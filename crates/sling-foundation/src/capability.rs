//! Capability seams for host platform services.
//!
//! The core never touches haptic hardware or icon catalogs; it only decides
//! *what* should happen and hands the host a value to act on.

use sling_geometry::Direction;

/// Abstract haptic effect, resolved to a platform effect by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticEffect {
    Click,
    DirectionUp,
    DirectionDown,
    Success,
    Notification,
}

/// Fixed per-zone haptic mapping played on a classification transition.
pub fn haptic_for(direction: Direction) -> Option<HapticEffect> {
    match direction {
        Direction::Left => Some(HapticEffect::Click),
        Direction::Right => Some(HapticEffect::DirectionUp),
        Direction::Down => Some(HapticEffect::Success),
        Direction::DownLeft => Some(HapticEffect::DirectionDown),
        Direction::DownRight => Some(HapticEffect::Notification),
        Direction::None => None,
    }
}

/// Host-side haptic hardware.
pub trait HapticDriver {
    fn play(&self, effect: HapticEffect);
}

/// Host-side symbol catalog lookup.
pub trait IconResolver {
    /// Whether `name` names a renderable symbol (as opposed to plain text).
    fn is_symbol(&self, name: &str) -> bool;
}

/// What the host should actually render for a zone label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    /// The label names a symbol in the host's catalog.
    Symbol(String),
    /// Plain text fallback.
    Text(String),
}

impl IconGlyph {
    /// Applies the symbol-or-text fallback for a label.
    pub fn resolve(resolver: &dyn IconResolver, label: &str) -> Self {
        if resolver.is_symbol(label) {
            IconGlyph::Symbol(label.to_string())
        } else {
            IconGlyph::Text(label.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCatalog(&'static [&'static str]);

    impl IconResolver for FixedCatalog {
        fn is_symbol(&self, name: &str) -> bool {
            self.0.contains(&name)
        }
    }

    #[test]
    fn every_zone_has_a_distinct_effect() {
        let effects: Vec<HapticEffect> = Direction::ZONES
            .iter()
            .map(|zone| haptic_for(*zone).expect("zones always map to an effect"))
            .collect();
        assert_eq!(
            effects,
            vec![
                HapticEffect::Click,
                HapticEffect::DirectionUp,
                HapticEffect::Success,
                HapticEffect::DirectionDown,
                HapticEffect::Notification,
            ]
        );
    }

    #[test]
    fn sentinel_has_no_effect() {
        assert_eq!(haptic_for(Direction::None), None);
    }

    #[test]
    fn glyph_resolution_falls_back_to_text() {
        let catalog = FixedCatalog(&["trash", "arrowshape.turn.up.left"]);
        assert_eq!(
            IconGlyph::resolve(&catalog, "trash"),
            IconGlyph::Symbol("trash".to_string())
        );
        assert_eq!(
            IconGlyph::resolve(&catalog, "Archive all"),
            IconGlyph::Text("Archive all".to_string())
        );
    }
}
