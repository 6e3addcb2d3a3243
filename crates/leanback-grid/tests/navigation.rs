//! Integration tests for focus navigation through the engine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use leanback_grid::input::KeyInput;
use leanback_grid::prelude::*;
use parking_lot::Mutex;
use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

const STEP: Duration = Duration::from_millis(400);

fn category(label: &str, len: usize) -> Category {
    let items: Vec<Item> = (0..len)
        .map(|i| Item::new(format!("{label}.{i}"), format!("{label} {i}")))
        .collect();
    Category::new(label, items)
}

fn engine(sizes: &[usize]) -> GridEngine {
    let categories = sizes
        .iter()
        .enumerate()
        .map(|(i, &len)| category(&format!("cat{i}"), len))
        .collect();
    GridEngine::new(categories, GridLayout::default(), ViewportGeometry::default()).unwrap()
}

#[test]
fn test_down_then_up_through_every_row_returns_to_origin() {
    let mut engine = engine(&[7, 3, 11, 5]);
    let total_rows = engine.rows().row_count();
    let mut now = Instant::now();

    for _ in 0..total_rows - 1 {
        now += STEP;
        assert!(matches!(
            engine.on_directional_input(Direction::Down, now),
            InputOutcome::Moved(_)
        ));
        while engine.tick(now + STEP) {}
    }
    now += STEP;
    assert_eq!(
        engine.on_directional_input(Direction::Down, now),
        InputOutcome::Unchanged
    );

    for _ in 0..total_rows - 1 {
        now += STEP;
        assert!(matches!(
            engine.on_directional_input(Direction::Up, now),
            InputOutcome::Moved(_)
        ));
        while engine.tick(now + STEP) {}
    }

    assert_eq!(engine.focused_cell(), FocusCell::ORIGIN);
    assert_eq!(engine.viewport_offset(), 0.0);
    now += STEP;
    assert_eq!(
        engine.on_directional_input(Direction::Up, now),
        InputOutcome::LeftGrid
    );
}

#[test]
fn test_down_into_shorter_category_clamps_column() {
    let mut engine = engine(&[7, 3]);
    let now = Instant::now();
    engine.on_directional_input(Direction::Right, now);
    engine.on_directional_input(Direction::Down, now);
    assert_eq!(engine.focused_cell(), FocusCell::new(0, 1, 1));

    assert_eq!(
        engine.on_directional_input(Direction::Down, now + STEP),
        InputOutcome::Moved(FocusCell::new(1, 0, 1))
    );
}

#[test]
fn test_row_ends_self_loop() {
    let mut engine = engine(&[7]);
    let now = Instant::now();
    for _ in 0..4 {
        engine.on_directional_input(Direction::Right, now);
    }
    assert_eq!(engine.focused_cell(), FocusCell::new(0, 0, 4));
    assert_eq!(
        engine.on_directional_input(Direction::Right, now),
        InputOutcome::Unchanged
    );

    engine.on_directional_input(Direction::Down, now);
    assert_eq!(engine.focused_cell(), FocusCell::new(0, 1, 1));
    assert_eq!(
        engine.on_directional_input(Direction::Right, now),
        InputOutcome::Unchanged
    );
}

#[test]
fn test_repeat_burst_is_rate_limited() {
    let mut engine = engine(&[40]);
    let t0 = Instant::now();
    let mut moved = 0;
    // One second of key repeat at 20 Hz.
    for i in 0..20 {
        let now = t0 + Duration::from_millis(50 * i);
        if let InputOutcome::Moved(_) = engine.on_directional_input(Direction::Down, now) {
            moved += 1;
        }
    }
    // Accepted at 0, 300, 600 and 900 ms.
    assert_eq!(moved, 4);
    assert_eq!(engine.focused_cell(), FocusCell::new(0, 4, 0));
}

#[test]
fn test_keyboard_drives_engine() {
    let mut engine = engine(&[7, 3]);
    let activated = Arc::new(Mutex::new(Vec::new()));
    let sink = activated.clone();
    engine
        .item_activated
        .connect(move |id| sink.lock().push(id.clone()));

    let now = Instant::now();
    let right = KeyInput::pressed(
        Key::Named(NamedKey::ArrowRight),
        PhysicalKey::Code(KeyCode::ArrowRight),
    );
    assert_eq!(
        engine.handle_key(&right, now),
        Some(InputOutcome::Moved(FocusCell::new(0, 0, 1)))
    );

    let enter_down = KeyInput::pressed(Key::Named(NamedKey::Enter), PhysicalKey::Code(KeyCode::Enter));
    let enter_up = KeyInput::released(Key::Named(NamedKey::Enter), PhysicalKey::Code(KeyCode::Enter));
    assert_eq!(engine.handle_key(&enter_down, now), None);
    assert_eq!(
        engine.handle_key(&enter_up, now),
        Some(InputOutcome::Activated(ItemId::from("cat0.1")))
    );
    assert_eq!(*activated.lock(), vec![ItemId::from("cat0.1")]);
}

#[test]
fn test_focus_requests_follow_moves() {
    let mut engine = engine(&[7, 3]);
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = requested.clone();
    engine
        .focus_requested
        .connect(move |handle: &TileHandle| sink.lock().push(handle.index()));

    let now = Instant::now();
    engine.request_initial_focus(now);
    engine.on_directional_input(Direction::Right, now);
    engine.on_directional_input(Direction::Down, now);
    engine.on_directional_input(Direction::Down, now + STEP);

    assert_eq!(*requested.lock(), vec![0, 1, 6, 8]);
}
