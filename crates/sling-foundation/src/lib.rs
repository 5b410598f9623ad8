//! Foundation elements for Sling: drag session, bindings, and capabilities

pub mod bindings;
pub mod capability;
pub mod config;
pub mod session;

#[cfg(test)]
mod tests;

pub use bindings::*;
pub use capability::*;
pub use config::*;
pub use session::*;

pub mod prelude {
    pub use crate::bindings::{DirectionAction, DirectionBinding, DirectionBindings};
    pub use crate::capability::{haptic_for, HapticDriver, HapticEffect, IconGlyph, IconResolver};
    pub use crate::config::SlingConfig;
    pub use crate::session::{DragEvent, DragPhase, DragSession, SessionChange};
}
