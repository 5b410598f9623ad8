//! Chainable sling-menu description.

use sling_foundation::{DirectionBinding, DirectionBindings, SlingConfig};
use sling_geometry::{Direction, LabelStyle, Size};

/// Immutable description of a sling menu: zone bindings plus display
/// options. Every builder method consumes and returns the menu, so a menu
/// reads as one chain:
///
/// ```
/// use sling_menu::SlingMenu;
/// use sling_geometry::{Direction, Size};
///
/// let menu = SlingMenu::new()
///     .action(Direction::Left, "trash", || {})
///     .labeled(Direction::Down, "archive")
///     .haptics(false)
///     .ball_size(Size::new(48.0, 48.0));
/// assert_eq!(menu.bindings().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SlingMenu {
    config: SlingConfig,
    bindings: DirectionBindings,
}

impl SlingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `direction` to a label and an action fired on release.
    pub fn action(
        mut self,
        direction: Direction,
        label: impl Into<String>,
        action: impl Fn() + 'static,
    ) -> Self {
        self.bindings
            .insert(direction, DirectionBinding::with_action(label, action));
        self
    }

    /// Binds `direction` to a label only; releasing there is a no-op.
    pub fn labeled(mut self, direction: Direction, label: impl Into<String>) -> Self {
        self.bindings
            .insert(direction, DirectionBinding::labeled(label));
        self
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.config = self.config.haptics(enabled);
        self
    }

    pub fn ball_size(mut self, size: Size) -> Self {
        self.config = self.config.ball_size(size);
        self
    }

    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.config = self.config.label_style(style);
        self
    }

    pub fn config(&self) -> &SlingConfig {
        &self.config
    }

    pub fn bindings(&self) -> &DirectionBindings {
        &self.bindings
    }
}
