//! Menu configuration value type.

use sling_geometry::{LabelStyle, Size};

/// Immutable menu options. Builder methods consume and return the value,
/// so configuration reads as a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct SlingConfig {
    /// Play a haptic effect when the classified zone changes.
    pub haptics_enabled: bool,
    /// Size of the draggable puck.
    pub ball_size: Size,
    /// Typography for zone labels; `None` means the host's default.
    pub label_style: Option<LabelStyle>,
}

impl Default for SlingConfig {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            ball_size: Size::new(40.0, 40.0),
            label_style: None,
        }
    }
}

impl SlingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    pub fn ball_size(mut self, size: Size) -> Self {
        self.ball_size = size;
        self
    }

    pub fn label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = Some(style);
        self
    }
}
