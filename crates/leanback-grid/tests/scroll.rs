//! Integration tests for viewport scrolling driven by focus moves.
//!
//! With the default layout in a 1280x720 viewport, tiles are 126 px high and
//! the first row of a category adds a 16 px heading plus 20 px spacing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use leanback_grid::prelude::*;
use parking_lot::Mutex;

const STEP: Duration = Duration::from_millis(400);

fn engine(sizes: &[usize]) -> GridEngine {
    let categories = sizes
        .iter()
        .enumerate()
        .map(|(c, &len)| {
            let items: Vec<Item> = (0..len)
                .map(|i| Item::new(format!("c{c}.{i}"), format!("Item {i}")))
                .collect();
            Category::new(format!("Category {c}"), items)
        })
        .collect();
    GridEngine::new(categories, GridLayout::default(), ViewportGeometry::default()).unwrap()
}

/// Move once and let the scroll animation finish.
fn step(engine: &mut GridEngine, direction: Direction, now: &mut Instant) -> InputOutcome {
    *now += STEP;
    let outcome = engine.on_directional_input(direction, *now);
    while engine.tick(*now + STEP) {}
    outcome
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("leanback_grid=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_anchored_end_is_reversible() {
    init_tracing();
    // Rows: 162, 126, 126, 126 | 162. Content 862 px, max offset 142.
    let mut engine = engine(&[20, 5]);
    let mut now = Instant::now();

    step(&mut engine, Direction::Down, &mut now);
    assert_eq!(engine.viewport_offset(), 101.0);
    step(&mut engine, Direction::Down, &mut now);
    assert_eq!(engine.viewport_offset(), 142.0);
    assert!(!engine.is_anchored_at_end());

    step(&mut engine, Direction::Down, &mut now);
    assert!(engine.is_anchored_at_end());
    assert_eq!(engine.viewport_offset(), 142.0);

    // Into the last category: no overscroll.
    let outcome = step(&mut engine, Direction::Down, &mut now);
    assert_eq!(outcome, InputOutcome::Moved(FocusCell::new(1, 0, 0)));
    assert_eq!(engine.viewport_offset(), 142.0);
    assert!(engine.is_anchored_at_end());

    // The anchoring move scrolled nothing, so the first Up stays put.
    step(&mut engine, Direction::Up, &mut now);
    assert_eq!(engine.viewport_offset(), 142.0);
    assert!(!engine.is_anchored_at_end());
}

#[test]
fn test_up_after_interrupted_anchoring_scroll_restores_offset() {
    // Eight rows in a 500 px viewport: content 1264 px, max offset 764.
    let items: Vec<Item> = (0..40).map(|i| Item::new(format!("i{i}"), "Item")).collect();
    let mut engine = GridEngine::new(
        vec![Category::new("Apps", items)],
        GridLayout::default(),
        ViewportGeometry::new(1280.0, 500.0),
    )
    .unwrap();
    let mut now = Instant::now();
    for _ in 0..5 {
        step(&mut engine, Direction::Down, &mut now);
    }
    let pre_anchor = engine.viewport_offset();
    assert_eq!(pre_anchor, 685.0);

    // Row 6 anchors; its scroll toward 764 is only partly applied.
    let t = now + STEP;
    engine.on_directional_input(Direction::Down, t);
    assert!(engine.is_anchored_at_end());
    engine.tick(t + Duration::from_millis(150));
    let mid = engine.viewport_offset();
    assert!(mid > pre_anchor && mid < 764.0);

    // Row 7 cancels it and reveals nothing new.
    let t = t + Duration::from_millis(300);
    let outcome = engine.on_directional_input(Direction::Down, t);
    assert_eq!(outcome, InputOutcome::Moved(FocusCell::new(0, 7, 0)));
    assert!(!engine.is_scrolling());
    assert_eq!(engine.viewport_offset(), mid);

    let t = t + Duration::from_millis(300);
    engine.on_directional_input(Direction::Up, t);
    while engine.tick(t + STEP) {}
    assert_eq!(engine.viewport_offset(), pre_anchor);
    assert!(!engine.is_anchored_at_end());
}

#[test]
fn test_interrupted_scroll_starts_from_current_offset() {
    let mut engine = engine(&[40]);
    let t0 = Instant::now();

    engine.on_directional_input(Direction::Down, t0);
    engine.tick(t0 + Duration::from_millis(100));
    let mid = engine.viewport_offset();
    assert!(mid > 0.0 && mid < 101.0);

    // The next accepted move cancels the running scroll where it stands.
    let t1 = t0 + Duration::from_millis(300);
    engine.on_directional_input(Direction::Down, t1);
    assert_eq!(engine.viewport_offset(), mid);
    while engine.tick(t1 + STEP) {}
    // Row 0 is still first visible: mid + 126 + 20.
    assert_eq!(engine.viewport_offset(), mid + 146.0);
}

#[test]
fn test_short_content_never_scrolls() {
    let mut engine = engine(&[7, 3]);
    let offsets = Arc::new(Mutex::new(Vec::new()));
    let sink = offsets.clone();
    engine
        .viewport_offset_changed
        .connect(move |offset| sink.lock().push(*offset));

    let mut now = Instant::now();
    step(&mut engine, Direction::Down, &mut now);
    step(&mut engine, Direction::Down, &mut now);
    step(&mut engine, Direction::Up, &mut now);

    // Content is 570 px inside a 720 px viewport.
    assert_eq!(engine.viewport_offset(), 0.0);
    assert!(offsets.lock().is_empty());
}

#[test]
fn test_resize_clamps_offset() {
    let mut engine = engine(&[20, 5]);
    let mut now = Instant::now();
    step(&mut engine, Direction::Down, &mut now);
    step(&mut engine, Direction::Down, &mut now);
    assert_eq!(engine.viewport_offset(), 142.0);

    let offsets = Arc::new(Mutex::new(Vec::new()));
    let sink = offsets.clone();
    engine
        .viewport_offset_changed
        .connect(move |offset| sink.lock().push(*offset));

    // Taller viewport: 862 px of content fits.
    engine.set_viewport(ViewportGeometry::new(1280.0, 900.0));
    assert_eq!(engine.viewport_offset(), 0.0);
    assert!(!engine.is_anchored_at_end());
    assert_eq!(*offsets.lock(), vec![0.0]);
}

#[test]
fn test_layout_from_toml_changes_scroll_amounts() {
    let layout = GridLayout::from_toml_str(
        r#"
        columns = 4
        row_spacing = 10.0
        scroll_duration_ms = 0
        "#,
    )
    .unwrap();
    let items: Vec<Item> = (0..40).map(|i| Item::new(format!("i{i}"), "Item")).collect();
    let mut engine = GridEngine::new(
        vec![Category::new("Apps", items)],
        layout,
        ViewportGeometry::default(),
    )
    .unwrap();

    // Tiles: (1280 - 80 - 30) / 4 = 292.5 wide, 164.53125 high.
    // First row: 164.53125 + 16 + 10. First scroll: (190.53125 + 20) / 2.
    engine.on_directional_input(Direction::Down, Instant::now());
    assert!(!engine.tick(Instant::now()));
    assert_eq!(engine.viewport_offset(), 105.265625);
}
