//! Meal suggestions with a photo, as a small Model-View-Update application.
//!
//! The user picks a dietary [`Preference`] and a [`MealTime`]; the
//! [`MealController`] shows the first matching meal from the [`Catalog`] and
//! looks up a photo for it through an [`ImageSource`]. Refresh re-draws a
//! random meal from the same list, and back returns to the selector.
//!
//! The [`Runtime`] owns the [`Model`], feeds events through
//! [`Logic::update`], hands [`Props`] to a [`Renderer`] and passes effects to
//! a [`Spawner`]. Image results are tagged with a [`FetchToken`] and only the
//! newest request may update the model.
//!
//! ## Example
//!
//! ```rust,no_run
//! use whattoeat::{Catalog, ImageConfig, MealController, Model, Props, Renderer, Runtime, UnsplashClient};
//!
//! struct Console;
//!
//! impl Renderer<Props> for Console {
//!     fn render(&mut self, props: Props) {
//!         if let Props::Result(result) = props {
//!             println!("{} ({:?})", result.meal.name, result.image);
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), whattoeat::ConfigError> {
//! let images = UnsplashClient::new(ImageConfig::from_env()?);
//! let controller = MealController::new(Catalog::builtin(), images);
//!
//! // Hand effects to the host's async runtime, e.g. `tokio::spawn(fut);`
//! let spawner = |fut: futures::future::BoxFuture<'static, ()>| futures::executor::block_on(fut);
//!
//! let mut runtime = Runtime::new(Model::default(), controller, Console, spawner);
//! futures::executor::block_on(runtime.run());
//! # Ok(())
//! # }
//! ```

mod catalog;
mod config;
mod controller;
mod effect;
mod emitter;
mod error;
mod event;
mod image;
mod logic;
mod model;
mod props;
mod random;
mod renderer;
mod runtime;

pub use catalog::{Catalog, MealEntry, MealTime, Preference};
pub use config::{AccessKey, ImageConfig, ACCESS_KEY_VAR, DEFAULT_ENDPOINT, ENDPOINT_VAR};
pub use controller::{image_resolved, MealController};
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{CatalogError, ConfigError, ImageFetchError, SelectionError};
pub use event::Event;
pub use image::{ImageSource, UnsplashClient};
pub use logic::Logic;
pub use model::{FetchStatus, FetchToken, ImageFetchState, Model, Screen, SelectionState};
pub use props::{
    Callback, ImagePanel, MealTimeOption, PreferenceOption, Props, ResultProps, SelectorProps,
};
pub use random::{RandomSource, ThreadRandom};
pub use renderer::Renderer;
pub use runtime::{Runtime, Spawner};

#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, QueuedSpawner, TestDriver, TestRuntime};
