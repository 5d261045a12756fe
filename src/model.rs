//! Session state owned by the runtime.

use crate::catalog::{MealEntry, MealTime, Preference};
use crate::error::{ImageFetchError, SelectionError};

/// Which of the two screens is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// The selector: no meal time chosen yet.
    #[default]
    Browsing,
    /// A meal time is chosen and a meal is on screen.
    Viewing { meal_time: MealTime, meal: MealEntry },
}

/// What the user has chosen so far.
///
/// `preference` is independent of the screen and survives going back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub preference: Preference,
    pub screen: Screen,
}

impl SelectionState {
    pub fn meal_time(&self) -> Option<MealTime> {
        match &self.screen {
            Screen::Browsing => None,
            Screen::Viewing { meal_time, .. } => Some(*meal_time),
        }
    }

    pub fn current_meal(&self) -> Option<&MealEntry> {
        match &self.screen {
            Screen::Browsing => None,
            Screen::Viewing { meal, .. } => Some(meal),
        }
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self.screen, Screen::Viewing { .. })
    }
}

/// Correlates an image request with its completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(pub u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded(String),
    Failed(ImageFetchError),
}

/// Lifecycle of the photo for the current meal.
///
/// At most one request is outstanding at a time. `issued` only grows, so a
/// token handed out once is never handed out again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageFetchState {
    issued: u64,
    current: Option<FetchToken>,
    pub status: FetchStatus,
}

impl ImageFetchState {
    /// Start a new request, superseding any outstanding one.
    pub fn begin(&self) -> (ImageFetchState, FetchToken) {
        let token = FetchToken(self.issued + 1);
        let next = ImageFetchState {
            issued: token.0,
            current: Some(token),
            status: FetchStatus::Loading,
        };
        (next, token)
    }

    /// Forget the outstanding request without reusing its token.
    pub fn reset(&self) -> ImageFetchState {
        ImageFetchState {
            issued: self.issued,
            current: None,
            status: FetchStatus::Idle,
        }
    }

    pub fn current(&self) -> Option<FetchToken> {
        self.current
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.current == Some(token)
    }
}

/// The full session model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub selection: SelectionState,
    pub image: ImageFetchState,
    /// Last blocked selection, cleared by the next successful transition.
    pub notice: Option<SelectionError>,
}

impl Model {
    pub fn with_preference(preference: Preference) -> Self {
        Model {
            selection: SelectionState {
                preference,
                ..SelectionState::default()
            },
            ..Model::default()
        }
    }
}
