//! Registration of "pointer pressed anywhere" listeners.
//!
//! A dropdown closes when the pointer goes down outside of it, so it has to
//! hear about presses that land elsewhere on the page. The host owns an
//! [`OutsideClickRegistry`]; a mounted widget holds an [`OutsideClickGuard`]
//! and stops listening when the guard is dropped.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    active: BTreeSet<u64>,
}

/// Host-side set of widgets listening for outside pointer presses.
#[derive(Debug, Clone, Default)]
pub struct OutsideClickRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard is dropped.
    pub fn register(&self) -> OutsideClickGuard {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.active.insert(id);
        log::debug!("Outside-click listener {} registered", id);
        OutsideClickGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().active.is_empty()
    }
}

/// Keeps one listener registered while alive.
#[derive(Debug)]
pub struct OutsideClickGuard {
    id: u64,
    registry: Weak<RefCell<Listeners>>,
}

impl OutsideClickGuard {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the registry this guard belongs to still exists.
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(inner) => {
                let listeners = inner.borrow();
                listeners.active.contains(&self.id)
            }
            None => false,
        }
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().active.remove(&self.id);
            log::debug!("Outside-click listener {} released", self.id);
        }
    }
}
