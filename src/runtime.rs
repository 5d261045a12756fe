//! The event loop that owns the model.

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;
#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

use flume::Receiver;
use futures::future::BoxFuture;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;
use tracing::debug;

use crate::{Effect, Emitter, Logic, Renderer};

/// Executes effect futures on whatever async runtime the host uses.
///
/// Closures and function pointers implement this through the blanket impl,
/// so `|fut| { tokio::spawn(fut); }` is a valid spawner.
pub trait Spawner {
    fn spawn(&self, future: BoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(BoxFuture<'static, ()>),
{
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self(future)
    }
}

/// Drives a [`Logic`] implementation.
///
/// 1. Initializes the model and bootstrap effect via [`Logic::init`]
/// 2. Feeds each queued event through [`Logic::update`]
/// 3. Derives props via [`Logic::view`] and passes them to the [`Renderer`]
/// 4. Hands each non-empty effect to the [`Spawner`]
///
/// Events are queued on an unbounded channel and processed one at a time on
/// the task awaiting [`Runtime::run`]. Only this loop ever replaces the model.
pub struct Runtime<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    logic: L,
    renderer: R,
    spawner: S,
    model: L::Model,
    emitter: Emitter<L::Event>,
    events: Receiver<L::Event>,
}

impl<L, R, S> Runtime<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    /// Create a runtime. Nothing happens until [`run`](Self::run) is awaited.
    pub fn new(init_model: L::Model, logic: L, renderer: R, spawner: S) -> Self {
        let (sender, events) = flume::unbounded();

        Runtime {
            logic,
            renderer,
            spawner,
            model: init_model,
            emitter: Emitter::new(sender),
            events,
        }
    }

    /// A handle for injecting events from outside the props callbacks.
    pub fn emitter(&self) -> Emitter<L::Event> {
        self.emitter.clone()
    }

    pub fn model(&self) -> &L::Model {
        &self.model
    }

    /// Render the initial props, then process events until the channel closes.
    ///
    /// The runtime holds its own sender, so in practice this runs for the
    /// lifetime of the session.
    pub async fn run(&mut self) {
        self.start();

        while let Ok(event) = self.events.recv_async().await {
            self.step(event);
        }
        debug!("event channel closed, runtime stopping");
    }

    fn start(&mut self) {
        let (model, effect) = self.logic.init(self.model.clone());

        let props = self.logic.view(&model, &self.emitter);
        self.renderer.render(props);
        self.model = model;

        self.dispatch(effect);
    }

    fn step(&mut self, event: L::Event) {
        let (model, effect) = self.logic.update(event, &self.model);

        let props = self.logic.view(&model, &self.emitter);
        self.renderer.render(props);
        self.model = model;

        self.dispatch(effect);
    }

    fn dispatch(&self, effect: Effect<L::Event>) {
        if !effect.is_none() {
            self.spawner.spawn(effect.execute(&self.emitter));
        }
    }

    #[cfg(any(test, feature = "testing"))]
    fn process_queued_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.events.try_recv() {
            self.step(event);
            processed += 1;
        }
        debug!(processed, "drained event queue");
        processed
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runs an effect future to completion on the calling thread.
pub fn test_spawner_fn(fut: BoxFuture<'static, ()>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// A spawner that completes every effect synchronously, in order.
pub fn create_test_spawner() -> fn(BoxFuture<'static, ()>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// A spawner that parks effects until the test releases them.
///
/// Lets a test choose the order in which outstanding image requests finish.
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct QueuedSpawner {
    pending: Arc<Mutex<VecDeque<BoxFuture<'static, ()>>>>,
}

#[cfg(any(test, feature = "testing"))]
impl QueuedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Run the effect spawned `index`-th among those still pending.
    ///
    /// Returns false if there is no such effect.
    pub fn run_at(&self, index: usize) -> bool {
        let future = self.pending.lock().remove(index);
        match future {
            Some(future) => {
                futures::executor::block_on(future);
                true
            }
            None => false,
        }
    }

    /// Run the most recently spawned pending effect.
    pub fn run_newest(&self) -> bool {
        let future = self.pending.lock().pop_back();
        match future {
            Some(future) => {
                futures::executor::block_on(future);
                true
            }
            None => false,
        }
    }

    /// Run every pending effect, oldest first.
    pub fn run_all(&self) {
        while self.run_at(0) {}
    }
}

#[cfg(any(test, feature = "testing"))]
impl Spawner for QueuedSpawner {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self.pending.lock().push_back(future);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Manual control over a started [`TestRuntime`].
pub struct TestDriver<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    runtime: Runtime<L, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<L, R, S> TestDriver<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    /// Process every queued event. Returns how many were processed.
    pub fn process_events(&mut self) -> usize {
        self.runtime.process_queued_events()
    }

    /// Queue an event as if a props callback had fired.
    pub fn emit(&self, event: L::Event) {
        self.runtime.emitter.emit(event);
    }

    pub fn model(&self) -> &L::Model {
        self.runtime.model()
    }
}

#[cfg(any(test, feature = "testing"))]
/// A runtime that only processes events when told to.
///
/// ```rust
/// use whattoeat::{create_test_spawner, Catalog, Event, MealController, Model, TestRenderer, TestRuntime};
/// # use whattoeat::{ImageFetchError, ImageSource};
/// # use futures::future::{BoxFuture, FutureExt};
/// # struct NoPhotos;
/// # impl ImageSource for NoPhotos {
/// #     fn fetch(&self, _query: &str) -> BoxFuture<'static, Result<String, ImageFetchError>> {
/// #         futures::future::ready(Err(ImageFetchError::NoResults)).boxed()
/// #     }
/// # }
///
/// let renderer = TestRenderer::new();
/// let controller = MealController::new(Catalog::builtin(), NoPhotos);
/// let mut driver = TestRuntime::new(Model::default(), controller, renderer.clone(), create_test_spawner()).run();
///
/// driver.emit(Event::MealTimeChosen("lunch".into()));
/// driver.process_events();
///
/// assert_eq!(driver.model().selection.current_meal().unwrap().name, "Sandwich");
/// ```
pub struct TestRuntime<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    runtime: Runtime<L, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<L, R, S> TestRuntime<L, R, S>
where
    L: Logic,
    R: Renderer<L::Props>,
    S: Spawner,
{
    pub fn new(init_model: L::Model, logic: L, renderer: R, spawner: S) -> Self {
        TestRuntime {
            runtime: Runtime::new(init_model, logic, renderer, spawner),
        }
    }

    /// Render the initial props and run the bootstrap effect, then hand back a driver.
    pub fn run(mut self) -> TestDriver<L, R, S> {
        self.runtime.start();
        TestDriver {
            runtime: self.runtime,
        }
    }
}
