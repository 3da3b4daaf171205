//! Callback abstractions for host-supplied collaborators
//!
//! Instead of writing `Option<Box<dyn Fn(&T)>>` for every optional hook,
//! widgets store a [`Handler<T>`], which may be empty.
//!
//! # Examples
//!
//! ```
//! use selecta_ui::{Handler, SelectOption};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let on_select: Handler<SelectOption> =
//!     Handler::new(move |o: &SelectOption| sink.borrow_mut().push(o.value.clone()));
//!
//! on_select.emit(&SelectOption::new("kyiv", "Kyiv"));
//! assert_eq!(*seen.borrow(), vec!["kyiv".to_string()]);
//! ```

use std::fmt;

/// A side-effect callback that borrows its argument and returns nothing.
pub struct Handler<T: ?Sized> {
    f: Option<Box<dyn Fn(&T)>>,
}

impl<T: ?Sized> Handler<T> {
    /// Create a new handler from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty handler.
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler, if it exists.
    pub fn emit(&self, value: &T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    /// Check if the handler is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the handler is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T: ?Sized> Default for Handler<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: ?Sized> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("set", &self.is_some())
            .finish()
    }
}
