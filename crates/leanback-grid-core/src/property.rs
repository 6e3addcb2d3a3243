//! Change-detecting state cells.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. The grid engine pairs each property with a [`Signal`] so hosts
//! are only notified on real changes:
//!
//! ```
//! use leanback_grid_core::{Property, Signal};
//!
//! struct Viewport {
//!     offset: Property<f32>,
//!     offset_changed: Signal<f32>,
//! }
//!
//! impl Viewport {
//!     fn scroll_to(&self, offset: f32) {
//!         if self.offset.set(offset) {
//!             self.offset_changed.emit(offset);
//!         }
//!     }
//! }
//!
//! let viewport = Viewport { offset: Property::new(0.0), offset_changed: Signal::new() };
//! viewport.scroll_to(120.0);
//! assert_eq!(viewport.offset.get(), 120.0);
//! ```
//!
//! [`Signal`]: crate::Signal

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value changed; the caller emits the associated signal when it did.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// A read-only view for exposing the property publicly.
    pub fn read_only(&self) -> ReadOnlyProperty<'_, T> {
        ReadOnlyProperty::new(self)
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only view of a property.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Access the value through a closure.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.with(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }

    #[test]
    fn test_replace_returns_old_value() {
        let prop = Property::new((0usize, 1usize));
        assert_eq!(prop.replace((0, 1)), None);
        assert_eq!(prop.replace((2, 0)), Some((0, 1)));
        assert_eq!(prop.get(), (2, 0));
    }

    #[test]
    fn test_with_borrows_without_clone() {
        let prop = Property::new(vec![1, 2, 3]);
        assert_eq!(prop.with(|v| v.len()), 3);
    }

    #[test]
    fn test_read_only_view() {
        let prop = Property::new(String::from("apps"));
        let view = prop.read_only();
        assert_eq!(view.get(), "apps");
        assert_eq!(view.with(|s| s.len()), 4);
    }
}
