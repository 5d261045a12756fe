//! Events accepted by the meal controller.

use crate::catalog::Preference;
use crate::error::ImageFetchError;
use crate::model::FetchToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// User picked a dietary preference.
    PreferenceChosen(Preference),
    /// User picked a meal time, by label. Labels outside the known set are rejected.
    MealTimeChosen(String),
    /// User asked for another meal from the same list.
    RefreshRequested,
    /// User left the result screen.
    BackRequested,
    /// An image request finished.
    ImageResolved {
        token: FetchToken,
        result: Result<String, ImageFetchError>,
    },
}
