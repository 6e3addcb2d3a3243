//! Signal/slot notifications for the grid engine.
//!
//! A [`Signal<Args>`] is the outward edge of every grid component: the engine
//! emits on it when focus moves, when focus should leave the grid, when the
//! viewport scrolls, and when an item is activated. Hosts connect slots
//! (closures) to react.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type slots connect to
//! - [`ConnectionId`] - Identifier returned when connecting a slot
//! - [`ConnectionGuard`] - Scoped connection that disconnects on drop
//!
//! # Dispatch
//!
//! All slots are invoked synchronously on the emitting thread, in connection
//! order. The engine is driven from a single UI-affine thread, so there is no
//! queued delivery. Slots are cloned out of the connection table before they
//! run, which lets a slot connect or disconnect on the same signal without
//! deadlocking.
//!
//! # Example
//!
//! ```
//! use leanback_grid_core::Signal;
//!
//! let item_activated = Signal::<String>::new();
//!
//! let conn_id = item_activated.connect(|package| {
//!     println!("launch {package}");
//! });
//!
//! item_activated.emit("org.example.player".to_string());
//! item_activated.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// Keys are generational: an ID stays invalid once its connection is removed,
    /// even if the slot storage is reused.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no payload.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`; the connection table is guarded by a
/// `parking_lot::Mutex`.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use leanback_grid_core::Signal;
    ///
    /// let signal = Signal::<u32>::new();
    /// let id = signal.connect(|row| println!("row {row}"));
    /// signal.emit(3);
    /// assert!(signal.disconnect(id));
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that is disconnected when the returned guard is dropped.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "leanback_grid_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// A connection that disconnects itself when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal, so
/// it cannot outlive it.
///
/// # Example
///
/// ```
/// use leanback_grid_core::Signal;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<i32>::new();
/// let counter = Arc::new(AtomicI32::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);
/// }
/// signal.emit(43);
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The connection this guard owns.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        signal.connect(move |value: &T| sink.lock().push(value.clone()));
        seen
    }

    #[test]
    fn test_rows_reach_every_slot() {
        let row_changed = Signal::<usize>::new();
        let first = recorder(&row_changed);
        let second = recorder(&row_changed);

        row_changed.emit(4);
        row_changed.emit(5);

        assert_eq!(*first.lock(), vec![4, 5]);
        assert_eq!(*second.lock(), vec![4, 5]);
    }

    #[test]
    fn test_disconnected_slot_is_skipped() {
        let offset_changed = Signal::<f32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = offset_changed.connect(move |offset| sink.lock().push(*offset));

        offset_changed.emit(101.0);
        assert!(offset_changed.disconnect(id));
        assert!(!offset_changed.disconnect(id));
        offset_changed.emit(142.0);

        assert_eq!(*seen.lock(), vec![101.0]);
    }

    #[test]
    fn test_blocked_emit_is_dropped() {
        let leave_grid = Signal::<()>::new();
        let seen = recorder(&leave_grid);

        leave_grid.set_blocked(true);
        assert!(leave_grid.is_blocked());
        leave_grid.emit(());
        leave_grid.set_blocked(false);
        leave_grid.emit(());

        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let activated = Signal::<String>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for slot in ["launcher", "history", "analytics"] {
            let sink = order.clone();
            activated.connect(move |_| sink.lock().push(slot));
        }

        activated.emit("org.example.player".into());
        assert_eq!(*order.lock(), vec!["launcher", "history", "analytics"]);

        activated.disconnect_all();
        assert_eq!(activated.connection_count(), 0);
    }

    #[test]
    fn test_guard_disconnects_on_drop() {
        let row_changed = Signal::<usize>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let sink = seen.clone();
            let guard = row_changed.connect_scoped(move |row| sink.lock().push(*row));
            assert_eq!(row_changed.connection_count(), 1);
            row_changed.emit(1);
            let _ = guard.id();
        }
        row_changed.emit(2);

        assert_eq!(*seen.lock(), vec![1]);
        assert_eq!(row_changed.connection_count(), 0);
    }

    #[test]
    fn test_one_shot_slot_disconnects_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(Mutex::new(0));
        let own_id: Arc<Mutex<Option<ConnectionId>>> = Arc::new(Mutex::new(None));

        let id = {
            let weak = Arc::downgrade(&signal);
            let calls = calls.clone();
            let own_id = own_id.clone();
            signal.connect(move |_| {
                *calls.lock() += 1;
                if let (Some(signal), Some(id)) = (weak.upgrade(), *own_id.lock()) {
                    signal.disconnect(id);
                }
            })
        };
        *own_id.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(*calls.lock(), 1);
    }
}
