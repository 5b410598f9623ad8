use crate::menu::SlingMenu;
use crate::SlingController;
use sling_foundation::{DragEvent, HapticDriver, HapticEffect};
use sling_geometry::{Direction, Point};
use std::cell::RefCell;
use std::rc::Rc;

struct RecordingHaptics {
    played: RefCell<Vec<HapticEffect>>,
}

impl RecordingHaptics {
    fn new() -> Self {
        Self {
            played: RefCell::new(Vec::new()),
        }
    }
}

impl HapticDriver for RecordingHaptics {
    fn play(&self, effect: HapticEffect) {
        self.played.borrow_mut().push(effect);
    }
}

fn menu_with_counter() -> (SlingMenu, Rc<RefCell<Vec<Direction>>>) {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let fired_left = fired.clone();
    let fired_down = fired.clone();
    let menu = SlingMenu::new()
        .action(Direction::Left, "trash", move || {
            fired_left.borrow_mut().push(Direction::Left);
        })
        .action(Direction::Down, "archive", move || {
            fired_down.borrow_mut().push(Direction::Down);
        });
    (menu, fired)
}

#[test]
fn transition_plays_the_zone_haptic_once() {
    let (menu, _) = menu_with_counter();
    let mut controller = SlingController::new(menu);
    let haptics = RecordingHaptics::new();

    controller.handle(DragEvent::Start, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 60.0, dy: 0.0 }, Some(&haptics));
    // Further samples inside the same zone stay silent.
    controller.handle(DragEvent::Move { dx: 70.0, dy: 0.0 }, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 80.0, dy: 0.0 }, Some(&haptics));

    assert_eq!(*haptics.played.borrow(), vec![HapticEffect::Click]);
}

#[test]
fn crossing_zones_plays_each_transition() {
    let (menu, _) = menu_with_counter();
    let mut controller = SlingController::new(menu);
    let haptics = RecordingHaptics::new();

    controller.handle(DragEvent::Start, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 60.0, dy: 0.0 }, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 0.0, dy: 80.0 }, Some(&haptics));

    assert_eq!(
        *haptics.played.borrow(),
        vec![HapticEffect::Click, HapticEffect::Success]
    );
}

#[test]
fn haptics_off_stays_silent() {
    let (menu, _) = menu_with_counter();
    let mut controller = SlingController::new(menu.haptics(false));
    let haptics = RecordingHaptics::new();

    controller.handle(DragEvent::Start, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 60.0, dy: 0.0 }, Some(&haptics));

    assert!(haptics.played.borrow().is_empty());
}

#[test]
fn missing_driver_is_tolerated() {
    let (menu, fired) = menu_with_counter();
    let mut controller = SlingController::new(menu);

    controller.handle(DragEvent::Start, None);
    controller.handle(DragEvent::Move { dx: 60.0, dy: 0.0 }, None);
    let released = controller.handle(DragEvent::End, None);

    assert_eq!(released, Some(Direction::Left));
    assert_eq!(*fired.borrow(), vec![Direction::Left]);
}

#[test]
fn release_reports_the_fired_zone_and_resets() {
    let (menu, fired) = menu_with_counter();
    let mut controller = SlingController::new(menu);
    let haptics = RecordingHaptics::new();

    controller.handle(DragEvent::Start, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 0.0, dy: 80.0 }, Some(&haptics));
    let released = controller.handle(DragEvent::End, Some(&haptics));

    assert_eq!(released, Some(Direction::Down));
    assert_eq!(*fired.borrow(), vec![Direction::Down]);
    assert_eq!(controller.active_direction(), Direction::None);
    assert_eq!(controller.offset(), Point::ZERO);
}

#[test]
fn release_outside_every_zone_reports_nothing() {
    let (menu, fired) = menu_with_counter();
    let mut controller = SlingController::new(menu);

    controller.handle(DragEvent::Start, None);
    controller.handle(
        DragEvent::Move {
            dx: 500.0,
            dy: 500.0,
        },
        None,
    );
    let released = controller.handle(DragEvent::End, None);

    assert_eq!(released, None);
    assert!(fired.borrow().is_empty());
}

#[test]
fn drifting_out_of_all_zones_is_a_silent_transition() {
    let (menu, _) = menu_with_counter();
    let mut controller = SlingController::new(menu);
    let haptics = RecordingHaptics::new();

    controller.handle(DragEvent::Start, Some(&haptics));
    controller.handle(DragEvent::Move { dx: 60.0, dy: 0.0 }, Some(&haptics));
    controller.handle(
        DragEvent::Move {
            dx: 500.0,
            dy: 500.0,
        },
        Some(&haptics),
    );

    // The transition to "no zone" has no haptic of its own.
    assert_eq!(*haptics.played.borrow(), vec![HapticEffect::Click]);
    assert_eq!(controller.active_direction(), Direction::None);
}
