//! Scoped window-level listeners.
//!
//! Whoever reacts to window input holds a [`ListenerGuard`] for each event it listens to.
//! Dropping the guard unregisters it, so every exit path (teardown, early return, panic
//! unwinding) releases the listener. The registry only keeps counts, which is what the
//! "no listener survives unmount" checks need.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    Click,
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    KeyDown,
    Scroll,
}

const KIND_COUNT: usize = 8;

impl ListenerKind {
    pub const ALL: [ListenerKind; KIND_COUNT] = [
        ListenerKind::PointerMove,
        ListenerKind::Click,
        ListenerKind::PointerEnter,
        ListenerKind::PointerLeave,
        ListenerKind::PointerDown,
        ListenerKind::PointerUp,
        ListenerKind::KeyDown,
        ListenerKind::Scroll,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
struct Counts([AtomicUsize; KIND_COUNT]);

/// Shared listener table. Cloning shares the same counts.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    counts: Arc<Counts>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "the listener is released as soon as the guard is dropped"]
    pub fn acquire(&self, kind: ListenerKind) -> ListenerGuard {
        self.counts.0[kind.slot()].fetch_add(1, Ordering::Relaxed);
        tracing::trace!(?kind, "listener acquired");
        ListenerGuard {
            counts: Arc::clone(&self.counts),
            kind,
        }
    }

    /// Acquires one guard per kind, in order.
    pub fn acquire_all(&self, kinds: &[ListenerKind]) -> Vec<ListenerGuard> {
        kinds.iter().map(|&kind| self.acquire(kind)).collect()
    }

    pub fn live_of(&self, kind: ListenerKind) -> usize {
        self.counts.0[kind.slot()].load(Ordering::Relaxed)
    }

    pub fn live(&self) -> usize {
        ListenerKind::ALL.iter().map(|&k| self.live_of(k)).sum()
    }
}

/// A registered listener. Unregisters itself on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    counts: Arc<Counts>,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.counts.0[self.kind.slot()].fetch_sub(1, Ordering::Relaxed);
        tracing::trace!(kind = ?self.kind, "listener released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_counts_while_alive() {
        let registry = ListenerRegistry::new();
        let guard = registry.acquire(ListenerKind::Click);
        assert_eq!(registry.live_of(ListenerKind::Click), 1);
        assert_eq!(registry.live(), 1);

        drop(guard);
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn clones_share_counts() {
        let registry = ListenerRegistry::new();
        let other = registry.clone();
        let _guards = other.acquire_all(&[ListenerKind::PointerMove, ListenerKind::Click]);
        assert_eq!(registry.live(), 2);
    }

    #[test]
    fn guards_are_released_on_early_return() {
        fn mount_then_bail(registry: &ListenerRegistry) -> Result<(), &'static str> {
            let _move = registry.acquire(ListenerKind::PointerMove);
            let _click = registry.acquire(ListenerKind::Click);
            Err("container missing")
        }

        let registry = ListenerRegistry::new();
        assert!(mount_then_bail(&registry).is_err());
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn guards_are_released_on_unwind() {
        let registry = ListenerRegistry::new();
        let inner = registry.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.acquire(ListenerKind::PointerMove);
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(registry.live(), 0);
    }
}
