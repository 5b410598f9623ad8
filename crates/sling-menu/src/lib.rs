//! Radial sling-menu surface: chainable builder, drag controller, scene data
//!
//! The menu itself is a value: directions bound to labels and actions plus
//! display options. A controller drives one drag session over that value and
//! emits pure scene data (highlight triangle, icon slots) for the host to
//! render with whatever toolkit it owns.

pub mod controller;
pub mod menu;
pub mod scene;

#[cfg(test)]
mod tests;

pub use controller::*;
pub use menu::*;
pub use scene::*;

pub mod prelude {
    pub use crate::controller::SlingController;
    pub use crate::menu::SlingMenu;
    pub use crate::scene::{IconSlot, SectorScene};
    pub use sling_foundation::prelude::*;
    pub use sling_geometry::prelude::*;
}
