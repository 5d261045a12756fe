//! Event emitter embedded in view props.

use flume::Sender;
use tracing::debug;

/// Handle for sending events into the runtime.
///
/// Props callbacks (refresh, back, preference buttons) and completed effects
/// both hold a clone. Cloning is cheap and the handle may be used from any
/// thread; events are still processed one at a time by the runtime.
///
/// # Example
///
/// ```rust
/// use whattoeat::{Emitter, Event};
///
/// fn refresh_button(emitter: &Emitter<Event>) -> Box<dyn Fn() + Send> {
///     let emitter = emitter.clone();
///     Box::new(move || emitter.emit(Event::RefreshRequested))
/// }
/// ```
pub struct Emitter<Event: Send>(Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for the runtime.
    ///
    /// Events emitted after the runtime is gone are dropped.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            debug!("runtime stopped, dropping event");
        }
    }
}
