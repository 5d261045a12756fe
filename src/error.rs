//! Error types.

use thiserror::Error;

use crate::catalog::{MealTime, Preference};

/// A requested selection that the catalog cannot satisfy.
///
/// The transition is blocked and the view stays on (or returns to) the selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown meal time: {0:?}")]
    UnknownMealTime(String),
    #[error("unknown dietary preference: {0:?}")]
    UnknownPreference(String),
    #[error("no meals for {meal_time} / {preference}")]
    NoEntries {
        meal_time: MealTime,
        preference: Preference,
    },
}

/// Why a photo could not be produced for the current meal.
///
/// Carries rendered messages rather than source errors so it can live in the
/// model and travel inside events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageFetchError {
    #[error("image request failed: {0}")]
    Transport(String),
    #[error("image provider returned status {0}")]
    Status(u16),
    #[error("could not decode image provider response: {0}")]
    Decode(String),
    #[error("image provider returned no results")]
    NoResults,
}

impl From<reqwest::Error> for ImageFetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the access key.
        let err = err.without_url();
        match err.status() {
            Some(status) => ImageFetchError::Status(status.as_u16()),
            None if err.is_decode() => ImageFetchError::Decode(err.to_string()),
            None => ImageFetchError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ImageFetchError {
    fn from(err: serde_json::Error) -> Self {
        ImageFetchError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing image provider access key (set {0})")]
    MissingAccessKey(&'static str),
    #[error("invalid image provider endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Malformed(String),
}
