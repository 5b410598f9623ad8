//! Drives one drag session over a menu and dispatches transition haptics.

use crate::menu::SlingMenu;
use crate::scene::SectorScene;
use sling_foundation::{haptic_for, DragEvent, DragSession, HapticDriver, IconResolver, SessionChange};
use sling_geometry::{Direction, Point};

/// Glue between the host's pointer events and the menu: feeds the session,
/// plays haptics on zone transitions, and reports the action that fired on
/// release. One controller handles one pointer; gestures never overlap.
#[derive(Clone, Debug)]
pub struct SlingController {
    menu: SlingMenu,
    session: DragSession,
}

impl SlingController {
    pub fn new(menu: SlingMenu) -> Self {
        Self {
            menu,
            session: DragSession::new(),
        }
    }

    pub fn menu(&self) -> &SlingMenu {
        &self.menu
    }

    /// Live drag translation, for positioning the puck.
    pub fn offset(&self) -> Point {
        self.session.offset()
    }

    /// Zone currently under the drag, `Direction::None` outside a gesture.
    pub fn active_direction(&self) -> Direction {
        self.session.direction()
    }

    /// Routes one gesture event. On a zone transition, plays the zone's
    /// haptic on `haptics` (when configured on and a driver is present).
    /// Returns the zone whose action fired when the event ended the
    /// gesture, `None` otherwise.
    pub fn handle(
        &mut self,
        event: DragEvent,
        haptics: Option<&dyn HapticDriver>,
    ) -> Option<Direction> {
        match self.session.handle(event, self.menu.bindings()) {
            SessionChange::DirectionChanged(direction) => {
                if self.menu.config().haptics_enabled {
                    if let (Some(driver), Some(effect)) = (haptics, haptic_for(direction)) {
                        driver.play(effect);
                    }
                }
                None
            }
            SessionChange::Finished(direction) if direction != Direction::None => Some(direction),
            _ => None,
        }
    }

    /// Scene snapshot for the current frame.
    pub fn scene(&self, center: Point, icons: &dyn IconResolver) -> SectorScene {
        SectorScene::build(&self.menu, self.active_direction(), center, icons)
    }
}
