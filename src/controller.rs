//! Selection and image controller.
//!
//! Every transition is a pure function of the current model and an event.
//! The only I/O, the image lookup, leaves as an [`Effect`] tagged with a
//! [`FetchToken`]; its completion comes back as [`Event::ImageResolved`] and
//! is merged only if the token is still the outstanding one.

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, MealEntry, MealTime, Preference};
use crate::error::{ImageFetchError, SelectionError};
use crate::event::Event;
use crate::image::ImageSource;
use crate::model::{FetchStatus, FetchToken, Model, Screen};
use crate::props::{ImagePanel, MealTimeOption, PreferenceOption, Props, ResultProps, SelectorProps};
use crate::random::{RandomSource, ThreadRandom};
use crate::{Effect, Emitter, Logic};

/// Drives the meal widget. Owns the catalog and the two injected seams.
pub struct MealController<I, R = ThreadRandom> {
    catalog: Catalog,
    images: I,
    random: R,
}

impl<I: ImageSource> MealController<I, ThreadRandom> {
    pub fn new(catalog: Catalog, images: I) -> Self {
        Self::with_random(catalog, images, ThreadRandom)
    }
}

impl<I: ImageSource, R: RandomSource> MealController<I, R> {
    pub fn with_random(catalog: Catalog, images: I, random: R) -> Self {
        Self {
            catalog,
            images,
            random,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Change the preference. The meal on screen is left alone until the
    /// next meal time selection or refresh.
    pub fn set_preference(&self, model: &Model, preference: Preference) -> Model {
        debug!(%preference, "preference chosen");
        let mut next = model.clone();
        next.selection.preference = preference;
        next
    }

    /// Show the first meal for `label` under the current preference.
    pub fn select_meal_time(&self, model: &Model, label: &str) -> (Model, Effect<Event>) {
        let preference = model.selection.preference;
        let resolved = label.parse::<MealTime>().and_then(|meal_time| {
            self.catalog
                .lookup(meal_time, preference)
                .first()
                .map(|meal| (meal_time, meal.clone()))
                .ok_or(SelectionError::NoEntries {
                    meal_time,
                    preference,
                })
        });

        match resolved {
            Ok((meal_time, meal)) => {
                info!(%meal_time, %preference, meal = %meal.name, "meal time selected");
                self.show(model, meal_time, meal)
            }
            Err(e) => {
                warn!(label, %preference, "invalid selection: {}", e);
                let mut next = model.clone();
                next.selection.screen = Screen::Browsing;
                next.image = model.image.reset();
                next.notice = Some(e);
                (next, Effect::none())
            }
        }
    }

    /// Re-draw a random meal from the list for the current meal time and preference.
    pub fn refresh(&self, model: &Model) -> (Model, Effect<Event>) {
        let Some(meal_time) = model.selection.meal_time() else {
            debug!("refresh ignored outside the result screen");
            return (model.clone(), Effect::none());
        };

        let preference = model.selection.preference;
        let entries = self.catalog.lookup(meal_time, preference);
        if entries.is_empty() {
            let e = SelectionError::NoEntries {
                meal_time,
                preference,
            };
            warn!(%meal_time, %preference, "refresh blocked: {}", e);
            let mut next = model.clone();
            next.notice = Some(e);
            return (next, Effect::none());
        }

        let index = self.random.pick_index(entries.len()).min(entries.len() - 1);
        let meal = entries[index].clone();
        info!(%meal_time, %preference, meal = %meal.name, index, "meal refreshed");
        self.show(model, meal_time, meal)
    }

    /// Return to the selector, keeping the preference.
    pub fn go_back(&self, model: &Model) -> Model {
        if !model.selection.is_viewing() {
            debug!("back ignored outside the result screen");
            return model.clone();
        }

        if let Some(token) = model.image.current() {
            debug!(?token, "abandoning outstanding image request");
        }

        let mut next = model.clone();
        next.selection.screen = Screen::Browsing;
        next.image = model.image.reset();
        next.notice = None;
        next
    }

    fn show(&self, model: &Model, meal_time: MealTime, meal: MealEntry) -> (Model, Effect<Event>) {
        let (image, token) = model.image.begin();
        let lookup = self.images.fetch(&meal.query);

        let mut next = model.clone();
        next.selection.screen = Screen::Viewing { meal_time, meal };
        next.image = image;
        next.notice = None;

        let effect = Effect::perform(lookup, move |result| Event::ImageResolved { token, result });
        (next, effect)
    }
}

/// Merge a finished image request into the model.
///
/// Results for anything other than the outstanding request are dropped.
pub fn image_resolved(
    model: &Model,
    token: FetchToken,
    result: Result<String, ImageFetchError>,
) -> Model {
    if !model.image.is_current(token) {
        debug!(?token, current = ?model.image.current(), "discarding stale image result");
        return model.clone();
    }

    let mut next = model.clone();
    next.image.status = match result {
        Ok(url) => FetchStatus::Loaded(url),
        Err(e) => {
            warn!(?token, "image unavailable: {}", e);
            FetchStatus::Failed(e)
        }
    };
    next
}

fn preference_options(model: &Model, emitter: &Emitter<Event>) -> Vec<PreferenceOption> {
    Preference::ALL
        .into_iter()
        .map(|preference| {
            let emitter = emitter.clone();
            PreferenceOption {
                preference,
                active: preference == model.selection.preference,
                plant_based: preference.is_plant_based(),
                on_select: Box::new(move || emitter.emit(Event::PreferenceChosen(preference))),
            }
        })
        .collect()
}

fn image_panel(status: &FetchStatus, meal: &MealEntry) -> ImagePanel {
    match status {
        FetchStatus::Idle => ImagePanel::Empty,
        FetchStatus::Loading => ImagePanel::Loading,
        FetchStatus::Loaded(url) => ImagePanel::Photo {
            url: url.clone(),
            alt: meal.name.clone(),
        },
        FetchStatus::Failed(_) => ImagePanel::Unavailable,
    }
}

impl<I: ImageSource, R: RandomSource> Logic for MealController<I, R> {
    type Event = Event;
    type Model = Model;
    type Props = Props;

    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        (model, Effect::none())
    }

    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
        match event {
            Event::PreferenceChosen(preference) => {
                (self.set_preference(model, preference), Effect::none())
            }
            Event::MealTimeChosen(label) => self.select_meal_time(model, &label),
            Event::RefreshRequested => self.refresh(model),
            Event::BackRequested => (self.go_back(model), Effect::none()),
            Event::ImageResolved { token, result } => {
                (image_resolved(model, token, result), Effect::none())
            }
        }
    }

    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
        let preferences = preference_options(model, emitter);
        let notice = model.notice.as_ref().map(ToString::to_string);

        match &model.selection.screen {
            Screen::Browsing => {
                let meal_times = self
                    .catalog
                    .selectable_meal_times(model.selection.preference)
                    .into_iter()
                    .map(|meal_time| {
                        let emitter = emitter.clone();
                        MealTimeOption {
                            meal_time,
                            on_select: Box::new(move || {
                                emitter.emit(Event::MealTimeChosen(meal_time.to_string()))
                            }),
                        }
                    })
                    .collect();

                Props::Selector(SelectorProps {
                    preference: model.selection.preference,
                    preferences,
                    meal_times,
                    notice,
                })
            }
            Screen::Viewing { meal_time, meal } => {
                let on_refresh = {
                    let emitter = emitter.clone();
                    Box::new(move || emitter.emit(Event::RefreshRequested))
                };
                let on_back = {
                    let emitter = emitter.clone();
                    Box::new(move || emitter.emit(Event::BackRequested))
                };

                Props::Result(ResultProps {
                    meal_time: *meal_time,
                    meal: meal.clone(),
                    image: image_panel(&model.image.status, meal),
                    preferences,
                    notice,
                    on_refresh,
                    on_back,
                })
            }
        }
    }
}
