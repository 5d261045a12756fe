//! Rendering seam.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Presents props to the user.
///
/// The runtime calls [`render`](Self::render) after every processed event
/// with props freshly derived from the model. Markup, styling and icons all
/// live behind this trait.
///
/// # Example
///
/// ```rust
/// use whattoeat::{Props, Renderer};
///
/// struct LogRenderer;
///
/// impl Renderer<Props> for LogRenderer {
///     fn render(&mut self, props: Props) {
///         match props {
///             Props::Selector(selector) => println!("pick a meal time ({})", selector.preference),
///             Props::Result(result) => println!("{}: {}", result.meal_time, result.meal.name),
///         }
///     }
/// }
/// ```
pub trait Renderer<Props> {
    fn render(&mut self, props: Props);
}

impl<Props, R: Renderer<Props> + ?Sized> Renderer<Props> for Box<R> {
    fn render(&mut self, props: Props) {
        (**self).render(props)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Records every render for later assertions.
///
/// Clones share the same storage, so keep one clone and hand the other to
/// the runtime.
///
/// ```rust
/// use whattoeat::{Props, TestRenderer};
///
/// let renderer = TestRenderer::<Props>::new();
/// assert_eq!(renderer.count(), 0);
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Inspect all captured props, oldest first.
    ///
    /// Callbacks inside the props may be invoked from the closure; they only
    /// queue events, so the driver must still process them afterwards.
    pub fn with_renders<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Vec<Props>) -> T,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Inspect the most recent props.
    ///
    /// # Panics
    ///
    /// If nothing has been rendered yet.
    pub fn with_last<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Props) -> T,
    {
        let renders = self.renders.lock();
        f(renders.last().expect("nothing rendered yet"))
    }
}
