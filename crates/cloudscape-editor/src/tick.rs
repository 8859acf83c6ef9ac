//! Per-frame tick notifications
//!
//! Handlers connect to a [`TickBus`] and are called once per rendered frame
//! with the elapsed seconds and the host's transform accessor.

use crate::error::EditorError;
use crate::host::TransformRequests;

/// Handle returned by [`TickBus::connect`], used to disconnect later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandlerId(u64);

/// A callback invoked on every tick.
pub trait TickHandler {
    fn on_tick(&mut self, delta_time: f32, transforms: &mut dyn TransformRequests);
}

/// Blanket implementation so closures can be used as tick handlers.
impl<F: FnMut(f32, &mut dyn TransformRequests)> TickHandler for F {
    fn on_tick(&mut self, delta_time: f32, transforms: &mut dyn TransformRequests) {
        (self)(delta_time, transforms);
    }
}

/// Subscription side of the host's tick notification source.
pub trait TickBus {
    /// Register a handler. It is called on every tick until disconnected.
    fn connect(&mut self, handler: Box<dyn TickHandler>) -> Result<TickHandlerId, EditorError>;

    /// Remove a handler. Returns false if the id was not connected.
    fn disconnect(&mut self, id: TickHandlerId) -> bool;

    /// Number of connected handlers.
    fn handler_count(&self) -> usize;
}

/// In-process tick bus: an ordered list of handlers dispatched each frame.
pub struct TickDispatcher {
    handlers: Vec<(TickHandlerId, Box<dyn TickHandler>)>,
    next_id: u64,
    accepting: bool,
}

impl TickDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
            accepting: true,
        }
    }

    /// Call every connected handler in connection order.
    pub fn dispatch(&mut self, delta_time: f32, transforms: &mut dyn TransformRequests) {
        let delta_time = delta_time.max(0.0);
        for (_, handler) in &mut self.handlers {
            handler.on_tick(delta_time, transforms);
        }
    }

    /// Refuse further connections. Already connected handlers keep ticking.
    pub fn shutdown(&mut self) {
        self.accepting = false;
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}

impl Default for TickDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TickBus for TickDispatcher {
    fn connect(&mut self, handler: Box<dyn TickHandler>) -> Result<TickHandlerId, EditorError> {
        if !self.accepting {
            return Err(EditorError::TickBusUnavailable);
        }
        let id = TickHandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        Ok(id)
    }

    fn disconnect(&mut self, id: TickHandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
