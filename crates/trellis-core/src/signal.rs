//! Signal/slot system for Trellis.
//!
//! Widgets expose their notifications as public [`Signal`] fields (for
//! example `clicked` on a button or `value_changed` on a slider). Application
//! code connects closures and the widget emits when its state changes.
//!
//! The toolkit is single-threaded and event-loop driven, so every slot runs
//! immediately on the emitting call, in connection order, and to completion
//! before the next event is dispatched.
//!
//! # Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn = text_changed.connect(|text| {
//!     println!("Text changed to: {text}");
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//! text_changed.disconnect(conn);
//! ```

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; remains valid until the connection is
    /// disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// A type-safe signal with any number of connected slots.
///
/// # Type Parameter
///
/// - `Args`: the argument type passed by reference to connected slots. Use
///   `()` for signals with no payload, or a tuple for several values.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Rc<dyn Fn(&Args)>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked on every [`emit`](Self::emit) until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + 'static,
    {
        self.connections.lock().insert(Rc::new(slot))
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots are snapshotted before invocation, so a slot may connect or
    /// disconnect on this same signal without deadlocking or invalidating
    /// the iteration.
    pub fn emit(&self, args: Args) {
        if self.blocked.load(Ordering::Relaxed) {
            return;
        }

        let slots: Vec<Rc<dyn Fn(&Args)>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: "trellis::signal", slots = slots.len(), "emitting signal");
        for slot in slots {
            slot(&args);
        }
    }

    /// Block or unblock emission. Returns the previous blocked state.
    ///
    /// While blocked, [`emit`](Self::emit) is a silent no-op. Useful when
    /// programmatically mutating a widget without triggering its observers.
    pub fn set_blocked(&self, blocked: bool) -> bool {
        self.blocked.swap(blocked, Ordering::Relaxed)
    }

    /// Check whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Relaxed)
    }

    /// Number of active connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_emit_invokes_slot() {
        let signal = Signal::<i32>::new();
        let received = Rc::new(Cell::new(0));

        let r = received.clone();
        signal.connect(move |&value| r.set(value));

        signal.emit(42);
        assert_eq!(received.get(), 42);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        let conn = signal.connect(move |_| c.set(c.get() + 1));

        signal.emit(());
        assert!(signal.disconnect(conn));
        signal.emit(());

        assert_eq!(count.get(), 1);
        assert!(!signal.disconnect(conn)); // Already gone
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let c = count.clone();
            signal.connect(move |_| c.set(c.get() + 1));
        }

        signal.emit(());
        assert_eq!(count.get(), 3);
        assert_eq!(signal.connection_count(), 3);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Rc::new(Cell::new(0));

        let c = count.clone();
        signal.connect(move |_| c.set(c.get() + 1));

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(count.get(), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_slot_may_connect_during_emit() {
        let signal = Rc::new(Signal::<()>::new());
        let count = Rc::new(Cell::new(0));

        let sig = signal.clone();
        let c = count.clone();
        signal.connect(move |_| {
            let c2 = c.clone();
            sig.connect(move |_| c2.set(c2.get() + 1));
        });

        // First emit connects a slot; it must not run until the next emit.
        signal.emit(());
        assert_eq!(count.get(), 0);
        signal.emit(());
        assert_eq!(count.get(), 1);
    }
}
