//! The contract between the runtime and application logic.

use crate::{Effect, Emitter};

/// Application logic driven by a [`Runtime`](crate::Runtime).
///
/// All three functions are pure with respect to the model: state changes
/// happen only by returning a new model from [`update`](Self::update), and
/// I/O happens only through the returned [`Effect`].
///
/// [`MealController`](crate::MealController) is the implementation this
/// crate ships.
pub trait Logic {
    type Event: Send + 'static;
    type Model: Clone;
    type Props;

    /// Prepare the starting model and any bootstrap effect.
    ///
    /// Called once, before the first render.
    fn init(&self, model: Self::Model) -> (Self::Model, Effect<Self::Event>);

    /// Reduce an event against the current model.
    ///
    /// # Returns
    ///
    /// The next model and the effect to hand to the spawner.
    fn update(&self, event: Self::Event, model: &Self::Model)
        -> (Self::Model, Effect<Self::Event>);

    /// Derive renderable props. Callbacks in the props emit through `emitter`.
    fn view(&self, model: &Self::Model, emitter: &Emitter<Self::Event>) -> Self::Props;
}
