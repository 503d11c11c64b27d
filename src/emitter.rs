//! Named-event publish/subscribe owned by the controller.
//!
//! Handlers are stored behind `Rc` and collected before dispatch, so a
//! handler may subscribe or unsubscribe while an event is being delivered.
//! Handlers are called in registration order.

use crate::types::CreationEvent;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Handler = Rc<dyn Fn(&CreationEvent)>;

/// Handle returned by [`EventEmitter::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Listener {
    id: SubscriptionId,
    /// `None` listens to every event
    event_name: Option<String>,
    handler: Handler,
}

#[derive(Default)]
pub struct EventEmitter {
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listener_count", &self.listeners.borrow().len())
            .finish()
    }
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to events named `event_name`.
    pub fn on(&self, event_name: &str, handler: impl Fn(&CreationEvent) + 'static) -> SubscriptionId {
        self.register(Some(event_name.to_string()), Rc::new(handler))
    }

    /// Listen to every event regardless of name.
    pub fn on_any(&self, handler: impl Fn(&CreationEvent) + 'static) -> SubscriptionId {
        self.register(None, Rc::new(handler))
    }

    fn register(&self, event_name: Option<String>, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            event_name,
            handler,
        });
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver `event` to every matching listener.
    pub fn emit(&self, event: &CreationEvent) {
        let handlers: Vec<Handler> = {
            let listeners = self.listeners.borrow();
            listeners
                .iter()
                .filter(|l| l.event_name.as_deref().is_none_or(|name| name == event.name))
                .map(|l| Rc::clone(&l.handler))
                .collect()
        };

        for handler in handlers {
            handler(event);
        }
    }
}
