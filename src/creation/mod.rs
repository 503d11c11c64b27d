//! Drag-to-create controller for the time grid.
//!
//! Owns at most one creation session. While idle it listens for drag starts
//! only; while a session is active it listens for moves, drag ends and clicks
//! only, so a second concurrent session cannot be started through the
//! drag source.
//!
//! ## Modules
//!
//! - `drag_start` - Target resolution and session start
//! - `drag` - Per-move conversion and the shared sample path
//! - `drag_end` - Drag end and click, range computation, teardown
//! - `invoke` - Programmatic creation click at a timestamp

mod drag;
mod drag_end;
mod drag_start;
mod invoke;

use crate::column::ColumnCollection;
use crate::config::CreationConfig;
use crate::emitter::{EventEmitter, SubscriptionId};
use crate::error::CreationResult;
use crate::input::{DragHandler, DragInput, DragSignal, DragSource, SessionState, TargetResolver};
use crate::types::{CreationEvent, CreationPayload, PointerSample};
use std::rc::Rc;

/// Caller hook that may adjust a sample before it is emitted
pub type Revise<'a> = Option<&'a mut dyn FnMut(&mut PointerSample)>;

#[derive(Debug)]
pub struct TimeCreation {
    config: CreationConfig,
    resolver: TargetResolver,
    columns: ColumnCollection,
    source: Rc<DragSource>,
    emitter: EventEmitter,
    state: SessionState,
}

impl TimeCreation {
    /// Create a controller and attach it to `source` for drag starts.
    pub fn new(
        config: CreationConfig,
        columns: ColumnCollection,
        source: Rc<DragSource>,
    ) -> CreationResult<Self> {
        config.validate()?;
        let resolver = TargetResolver::from_config(&config)?;
        source.on(&[DragSignal::DragStart]);

        Ok(Self {
            config,
            resolver,
            columns,
            source,
            emitter: EventEmitter::new(),
            state: SessionState::default(),
        })
    }

    pub fn config(&self) -> &CreationConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnCollection {
        &self.columns
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Listen to one named event.
    pub fn on(&self, event_name: &str, handler: impl Fn(&CreationEvent) + 'static) -> SubscriptionId {
        self.emitter.on(event_name, handler)
    }

    /// Listen to every event this controller emits.
    pub fn on_any(&self, handler: impl Fn(&CreationEvent) + 'static) -> SubscriptionId {
        self.emitter.on_any(handler)
    }

    pub fn off(&self, id: SubscriptionId) -> bool {
        self.emitter.off(id)
    }

    /// Detach from the drag source and drop any session.
    ///
    /// Safe to call repeatedly and from either state.
    pub fn destroy(&mut self) {
        self.source.off(&DragSignal::ALL);
        if self.state.take().is_some() {
            tracing::debug!("Creation session dropped by destroy");
        }
    }

    fn emit(&self, name: &str, payload: CreationPayload) {
        tracing::trace!(event = name, "Emitting creation event");
        self.emitter.emit(&CreationEvent {
            name: name.to_string(),
            payload,
        });
    }

    /// Swap drag-source subscriptions from idle to session listening.
    fn listen_for_session(&self) {
        self.source.off(&[DragSignal::DragStart]);
        self.source.on(&DragSignal::SESSION);
    }

    /// Swap drag-source subscriptions back to idle listening.
    fn listen_for_start(&self) {
        self.source.off(&DragSignal::SESSION);
        self.source.on(&[DragSignal::DragStart]);
    }
}

impl DragHandler for TimeCreation {
    fn handle(&mut self, input: &DragInput) -> CreationResult<()> {
        match input {
            DragInput::Start { target, event } => self.on_drag_start(target, event, None, None)?,
            DragInput::Drag { event } => self.on_drag(event, None, None)?,
            DragInput::End { event } => self.on_drag_end(event)?,
            DragInput::Click { event } => self.on_click(event)?,
        };
        Ok(())
    }
}

impl Drop for TimeCreation {
    fn drop(&mut self) {
        self.destroy();
    }
}
