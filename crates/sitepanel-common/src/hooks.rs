//! Explicit lifecycle hook lists.
//!
//! Each owning component keeps its own [`Hooks`] and invokes it at the
//! matching point of its lifecycle. Callbacks run in the order they were
//! added; the first error stops the run.

use std::fmt;

/// Points in a request where registered callbacks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Build the section/setting/control registry for an admin session.
    Register,
    /// Emit `<head>` styles on a rendered page.
    HeadStyles,
    /// Emit styles for the control panel itself.
    ControlsPrintStyles,
    /// Set up the preview frame (preview context only).
    PreviewInit,
}

type Callback<C, E> = Box<dyn Fn(&mut C) -> Result<(), E>>;

struct Entry<C, E> {
    event: LifecycleEvent,
    name: &'static str,
    callback: Callback<C, E>,
}

/// Ordered callbacks per [`LifecycleEvent`] over a context `C`.
pub struct Hooks<C, E> {
    entries: Vec<Entry<C, E>>,
}

impl<C, E> Hooks<C, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a callback for `event`.
    pub fn add<F>(&mut self, event: LifecycleEvent, name: &'static str, callback: F)
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        self.entries.push(Entry {
            event,
            name,
            callback: Box::new(callback),
        });
    }

    /// Run every callback registered for `event`, in insertion order.
    pub fn run(&self, event: LifecycleEvent, ctx: &mut C) -> Result<(), E> {
        for entry in self.entries.iter().filter(|e| e.event == event) {
            (entry.callback)(ctx)?;
        }
        Ok(())
    }

    /// Callback names registered for `event`, in run order.
    pub fn names(&self, event: LifecycleEvent) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.event == event)
            .map(|e| e.name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C, E> Default for Hooks<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> fmt::Debug for Hooks<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.event, e.name)))
            .finish()
    }
}
