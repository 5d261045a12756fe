//! Deferred work returned alongside a new model.

use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

use crate::Emitter;

/// Declarative description of work that will produce events later.
///
/// Effects are returned from [`Logic::init`](crate::Logic::init) and
/// [`Logic::update`](crate::Logic::update). The runtime turns each one into a
/// future and hands it to its [`Spawner`](crate::Spawner), so an effect never
/// runs inside `update` itself.
///
/// # Example
///
/// ```rust
/// use whattoeat::{Effect, Event, MealTime};
///
/// // Re-enter the controller with a follow-up event
/// let effect = Effect::just(Event::MealTimeChosen(MealTime::Lunch.to_string()));
///
/// // Wrap an async call and map its output to an event
/// let effect = Effect::perform(async { 42 }, |_| Event::RefreshRequested);
///
/// // Nothing to do
/// let effect: Effect<Event> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event: Send + 'static>(
    Option<Box<dyn FnOnce(Emitter<Event>) -> BoxFuture<'static, ()> + Send + 'static>>,
);

impl<Event: Send + 'static> Effect<Event> {
    fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> BoxFuture<'static, ()> + Send + 'static,
    {
        Self(Some(Box::new(f)))
    }

    /// Turn the effect into a future that emits its events through `emitter`.
    pub fn execute(self, emitter: &Emitter<Event>) -> BoxFuture<'static, ()> {
        match self.0 {
            Some(f) => f(emitter.clone()),
            None => future::ready(()).boxed(),
        }
    }

    /// True for [`Effect::none`]. The runtime does not spawn these.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Emit a single event as soon as the effect runs.
    pub fn just(event: Event) -> Self {
        Self::from_fn(move |emitter| {
            emitter.emit(event);
            future::ready(()).boxed()
        })
    }

    /// An effect that does nothing.
    pub fn none() -> Self {
        Self(None)
    }

    /// Await `work` and emit the event `to_event` builds from its output.
    pub fn perform<T, Fut, F>(work: Fut, to_event: F) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        F: FnOnce(T) -> Event + Send + 'static,
    {
        Self::from_fn(move |emitter| {
            async move {
                let output = work.await;
                emitter.emit(to_event(output));
            }
            .boxed()
        })
    }

    /// Run several effects concurrently. Empty effects are dropped.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        let effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            return Self::none();
        }

        Self::from_fn(move |emitter| {
            let futures: Vec<_> = effects
                .into_iter()
                .map(|effect| effect.execute(&emitter))
                .collect();
            future::join_all(futures).map(|_| ()).boxed()
        })
    }
}
