//! Signal/slot system for Typeahead.
//!
//! Signals are the control's outbound interface: the field emits a signal
//! when its observable state changes (text, selections, panel geometry),
//! and the host toolkit connects slots (callbacks) to react.
//!
//! The control is single-threaded and event-driven, so slots are always
//! invoked directly on the emitting thread, in connection order. There is
//! no queued delivery and no event loop in this crate.
//!
//! # Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("text is now {text}");
//! });
//!
//! text_changed.emit("Ap".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a
/// reference to the provided arguments. Use `()` for signals with no
/// arguments, or a tuple like `(String, usize)` for multiple arguments.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
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
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    ///
    /// # Example
    ///
    /// ```
    /// use typeahead_core::Signal;
    ///
    /// let signal = Signal::<usize>::new();
    /// let id = signal.connect(|n| println!("picked row {n}"));
    /// signal.emit(2);
    /// signal.disconnect(id);
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let connection = Connection {
            slot: Arc::new(slot),
        };
        self.connections.lock().insert(connection)
    }

    /// Connect a slot whose lifetime is managed by an RAII guard.
    ///
    /// The connection is removed when the returned [`ConnectionGuard`] is
    /// dropped, tying the subscription to a scope instead of a manual
    /// `disconnect` call.
    pub fn connect_guarded<F>(self: &Arc<Self>, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            signal: Arc::clone(self),
            id,
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false`
    /// otherwise.
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
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "typeahead_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Clone the slot handles out so a slot may connect/disconnect on
        // this same signal without deadlocking on the connections lock.
        let slots: Vec<_> = {
            let connections = self.connections.lock();
            tracing::trace!(
                target: "typeahead_core::signal",
                connection_count = connections.len(),
                "emitting signal"
            );
            connections
                .iter()
                .map(|(_, conn)| Arc::clone(&conn.slot))
                .collect()
        };

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args: 'static> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

/// RAII guard for a signal connection.
///
/// Disconnects the slot when dropped. Obtained from
/// [`Signal::connect_guarded`].
pub struct ConnectionGuard<Args: 'static> {
    signal: Arc<Signal<Args>>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<Args> {
    /// The connection ID held by this guard.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_invokes_connected_slot() {
        let signal = Signal::<i32>::new();
        let sum = Arc::new(AtomicUsize::new(0));

        let sum2 = Arc::clone(&sum);
        signal.connect(move |n| {
            sum2.fetch_add(*n as usize, Ordering::SeqCst);
        });

        signal.emit(3);
        signal.emit(4);
        assert_eq!(sum.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count2 = Arc::clone(&count);
        let id = signal.connect(move |()| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Double disconnect reports the stale ID.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_blocked_signal_skips_slots() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count2 = Arc::clone(&count);
        signal.connect(move |()| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_count() {
        let signal = Signal::<()>::new();
        assert_eq!(signal.connection_count(), 0);

        let a = signal.connect(|()| {});
        let _b = signal.connect(|()| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect(a);
        assert_eq!(signal.connection_count(), 1);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard_disconnects_on_drop() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicUsize::new(0));

        {
            let count2 = Arc::clone(&count);
            let _guard = signal.connect_guarded(move |()| {
                count2.fetch_add(1, Ordering::SeqCst);
            });
            signal.emit(());
        }

        // Guard dropped, slot no longer connected.
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_may_disconnect_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicUsize::new(0));

        let signal2 = Arc::clone(&signal);
        let count2 = Arc::clone(&count);
        let id = Arc::new(Mutex::new(None));
        let id2 = Arc::clone(&id);
        let conn = signal.connect(move |()| {
            count2.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *id2.lock() {
                signal2.disconnect(id);
            }
        });
        *id.lock() = Some(conn);

        signal.emit(());
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
