//! Translation of platform keyboard events into grid input.
//!
//! Arrow keys move focus on press and on auto-repeat. Enter, Select and Space
//! activate the focused tile when the key is *released*, so the press that
//! launches an application never leaks into it.
//!
//! ```ignore
//! use leanback_grid::input::{translate_key, KeyInput};
//!
//! // Inside a winit `WindowEvent::KeyboardInput { event, .. }` handler:
//! if let Some(input) = translate_key(&KeyInput::from(&event)) {
//!     engine.handle_input(input, Instant::now());
//! }
//! ```

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

use leanback_grid_core::logging::targets;

use crate::model::Direction;

/// Input the grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridInput {
    /// Move focus.
    Move(Direction),
    /// Activate the focused tile.
    Activate,
}

/// The parts of a keyboard event the grid looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Layout-dependent key.
    pub logical_key: Key,
    /// Physical key location.
    pub physical_key: PhysicalKey,
    /// Pressed or released.
    pub state: ElementState,
    /// Whether this is an auto-repeat press.
    pub repeat: bool,
}

impl KeyInput {
    /// A key press.
    pub fn pressed(logical_key: Key, physical_key: PhysicalKey) -> Self {
        Self {
            logical_key,
            physical_key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A key release.
    pub fn released(logical_key: Key, physical_key: PhysicalKey) -> Self {
        Self {
            logical_key,
            physical_key,
            state: ElementState::Released,
            repeat: false,
        }
    }

    /// Mark the event as an auto-repeat.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

impl From<&KeyEvent> for KeyInput {
    fn from(event: &KeyEvent) -> Self {
        Self {
            logical_key: event.logical_key.clone(),
            physical_key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        }
    }
}

/// Key roles the grid distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRole {
    Arrow(Direction),
    Accept,
}

/// Translate a keyboard event into grid input.
///
/// Returns `None` for keys the grid ignores, for arrow releases and for
/// accept-key presses.
pub fn translate_key(input: &KeyInput) -> Option<GridInput> {
    let role = role_of_logical_key(&input.logical_key)
        .or_else(|| role_of_physical_key(&input.physical_key))?;

    let translated = match (role, input.state) {
        (KeyRole::Arrow(direction), ElementState::Pressed) => Some(GridInput::Move(direction)),
        (KeyRole::Accept, ElementState::Released) => Some(GridInput::Activate),
        _ => None,
    };

    tracing::trace!(
        target: targets::INPUT,
        ?role,
        state = ?input.state,
        repeat = input.repeat,
        ?translated,
        "translated key"
    );
    translated
}

/// Prefer the logical key so remapped layouts keep working.
fn role_of_logical_key(key: &Key) -> Option<KeyRole> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(KeyRole::Arrow(Direction::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(KeyRole::Arrow(Direction::Down)),
        Key::Named(NamedKey::ArrowLeft) => Some(KeyRole::Arrow(Direction::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(KeyRole::Arrow(Direction::Right)),
        Key::Named(NamedKey::Enter | NamedKey::Select | NamedKey::Space) => Some(KeyRole::Accept),
        Key::Character(c) if c.as_str() == " " => Some(KeyRole::Accept),
        _ => None,
    }
}

fn role_of_physical_key(key: &PhysicalKey) -> Option<KeyRole> {
    match key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(KeyRole::Arrow(Direction::Up)),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(KeyRole::Arrow(Direction::Down)),
        PhysicalKey::Code(KeyCode::ArrowLeft) => Some(KeyRole::Arrow(Direction::Left)),
        PhysicalKey::Code(KeyCode::ArrowRight) => Some(KeyRole::Arrow(Direction::Right)),
        PhysicalKey::Code(KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space) => {
            Some(KeyRole::Accept)
        }
        _ => None,
    }
}
