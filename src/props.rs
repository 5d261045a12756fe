//! Renderable view of the model.

use crate::catalog::{MealEntry, MealTime, Preference};

/// A user action wired to the runtime.
pub type Callback = Box<dyn Fn() + Send>;

/// One preference button.
pub struct PreferenceOption {
    pub preference: Preference,
    pub active: bool,
    /// Vegetarian and vegan options carry a leaf badge.
    pub plant_based: bool,
    pub on_select: Callback,
}

/// One meal time button. Only meal times the catalog can satisfy are offered.
pub struct MealTimeOption {
    pub meal_time: MealTime,
    pub on_select: Callback,
}

/// The selector screen.
pub struct SelectorProps {
    pub preference: Preference,
    pub preferences: Vec<PreferenceOption>,
    pub meal_times: Vec<MealTimeOption>,
    /// Message for the last blocked selection, if any.
    pub notice: Option<String>,
}

/// What to show in place of the photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImagePanel {
    Empty,
    Loading,
    Photo { url: String, alt: String },
    Unavailable,
}

/// The result screen.
pub struct ResultProps {
    pub meal_time: MealTime,
    pub meal: MealEntry,
    pub image: ImagePanel,
    pub preferences: Vec<PreferenceOption>,
    pub notice: Option<String>,
    pub on_refresh: Callback,
    pub on_back: Callback,
}

pub enum Props {
    Selector(SelectorProps),
    Result(ResultProps),
}

impl Props {
    pub fn as_selector(&self) -> Option<&SelectorProps> {
        match self {
            Props::Selector(selector) => Some(selector),
            Props::Result(_) => None,
        }
    }

    pub fn as_result(&self) -> Option<&ResultProps> {
        match self {
            Props::Result(result) => Some(result),
            Props::Selector(_) => None,
        }
    }
}
