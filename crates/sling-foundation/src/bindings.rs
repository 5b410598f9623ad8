//! Direction→action bindings for the sling menu.

use sling_geometry::Direction;
use smallvec::SmallVec;
use std::rc::Rc;

/// Zero-argument callback invoked when a drag releases inside a zone.
pub type DirectionAction = Rc<dyn Fn()>;

/// What a zone shows and does. The label doubles as the icon name when the
/// host's icon resolver recognises it as a symbol.
#[derive(Clone)]
pub struct DirectionBinding {
    pub label: String,
    pub action: Option<DirectionAction>,
}

impl DirectionBinding {
    /// Display-only binding: shows a label/icon but releases are a no-op.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    pub fn with_action(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            action: Some(Rc::new(action)),
        }
    }
}

impl std::fmt::Debug for DirectionBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionBinding")
            .field("label", &self.label)
            .field("action", &self.action.as_ref().map(|_| "provided"))
            .finish()
    }
}

/// Insert-or-replace table of zone bindings.
///
/// At most five zones can ever be bound, so entries live inline; iteration
/// order is insertion order, which the scene layer preserves for icon slots.
#[derive(Clone, Debug, Default)]
pub struct DirectionBindings {
    entries: SmallVec<[(Direction, DirectionBinding); 5]>,
}

impl DirectionBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `direction`, replacing any previous binding. Binding the
    /// sentinel is rejected: "no zone" must stay inert everywhere.
    pub fn insert(&mut self, direction: Direction, binding: DirectionBinding) {
        if direction == Direction::None {
            log::warn!("ignoring binding {:?} for the sentinel direction", binding.label);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(dir, _)| *dir == direction) {
            entry.1 = binding;
        } else {
            self.entries.push((direction, binding));
        }
    }

    pub fn get(&self, direction: Direction) -> Option<&DirectionBinding> {
        self.entries
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, binding)| binding)
    }

    pub fn is_bound(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    pub fn label(&self, direction: Direction) -> Option<&str> {
        self.get(direction).map(|binding| binding.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &DirectionBinding)> {
        self.entries.iter().map(|(dir, binding)| (*dir, binding))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes the action bound to `direction`. Returns whether anything
    /// ran; an unbound or action-less zone is a no-op, not an error.
    pub fn run_action(&self, direction: Direction) -> bool {
        match self.get(direction).and_then(|binding| binding.action.clone()) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}
