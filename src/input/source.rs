//! Pointer drag source: signal kinds, raw inputs and listener registry.
//!
//! The source only forwards a signal to its handler while the handler is
//! subscribed to that signal kind. Handlers subscribe and unsubscribe
//! themselves as they move between states.

use crate::dom::Element;
use crate::error::CreationResult;
use crate::types::PointerEvent;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Kinds of signal a drag source reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragSignal {
    DragStart,
    Drag,
    DragEnd,
    Click,
}

impl DragSignal {
    pub const ALL: [DragSignal; 4] = [Self::DragStart, Self::Drag, Self::DragEnd, Self::Click];

    /// Signals a running session listens to
    pub const SESSION: [DragSignal; 3] = [Self::Drag, Self::DragEnd, Self::Click];
}

/// One raw signal with its data
#[derive(Debug, Clone, PartialEq)]
pub enum DragInput {
    Start { target: Element, event: PointerEvent },
    Drag { event: PointerEvent },
    End { event: PointerEvent },
    Click { event: PointerEvent },
}

impl DragInput {
    pub fn signal(&self) -> DragSignal {
        match self {
            Self::Start { .. } => DragSignal::DragStart,
            Self::Drag { .. } => DragSignal::Drag,
            Self::End { .. } => DragSignal::DragEnd,
            Self::Click { .. } => DragSignal::Click,
        }
    }
}

/// Receiver of forwarded drag signals
pub trait DragHandler {
    fn handle(&mut self, input: &DragInput) -> CreationResult<()>;
}

#[derive(Debug, Default)]
pub struct DragSource {
    listening: RefCell<BTreeSet<DragSignal>>,
}

impl DragSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, signals: &[DragSignal]) {
        self.listening.borrow_mut().extend(signals.iter().copied());
    }

    pub fn off(&self, signals: &[DragSignal]) {
        let mut listening = self.listening.borrow_mut();
        for signal in signals {
            listening.remove(signal);
        }
    }

    pub fn is_listening(&self, signal: DragSignal) -> bool {
        self.listening.borrow().contains(&signal)
    }

    /// Currently subscribed signal kinds, in declaration order
    pub fn listening(&self) -> Vec<DragSignal> {
        self.listening.borrow().iter().copied().collect()
    }

    /// Forward `input` to `handler` if its signal kind is subscribed.
    ///
    /// Returns `Ok(false)` when the signal was dropped.
    pub fn dispatch(&self, handler: &mut impl DragHandler, input: &DragInput) -> CreationResult<bool> {
        if !self.is_listening(input.signal()) {
            tracing::trace!(signal = ?input.signal(), "No listener, signal dropped");
            return Ok(false);
        }
        handler.handle(input)?;
        Ok(true)
    }
}
