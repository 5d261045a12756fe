//! The static meal catalog.
//!
//! Meals are grouped by [`MealTime`] and then by [`Preference`]. A catalog is
//! built once and only ever read afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CatalogError, SelectionError};

/// A segment of the day used as the top-level catalog key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Morning,
    Lunch,
    Dinner,
}

impl MealTime {
    /// All meal times, in the order they are offered to the user.
    pub const ALL: [MealTime; 3] = [MealTime::Morning, MealTime::Lunch, MealTime::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealTime::Morning => "morning",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealTime {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealTime::ALL
            .into_iter()
            .find(|time| time.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownMealTime(s.to_string()))
    }
}

/// Dietary preference filtering the entries of a meal time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Regular,
    Vegetarian,
    Vegan,
}

impl Preference {
    /// All preferences, in the order they are offered to the user.
    pub const ALL: [Preference; 3] = [
        Preference::Regular,
        Preference::Vegetarian,
        Preference::Vegan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::Regular => "regular",
            Preference::Vegetarian => "vegetarian",
            Preference::Vegan => "vegan",
        }
    }

    /// Whether the preference excludes meat.
    pub fn is_plant_based(self) -> bool {
        !matches!(self, Preference::Regular)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preference {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|preference| preference.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownPreference(s.to_string()))
    }
}

/// A single meal suggestion. `query` is the term sent to the image provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MealEntry {
    pub name: String,
    pub query: String,
}

impl MealEntry {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
        }
    }
}

/// Read-only lookup table from (meal time, preference) to an ordered list of meals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<(MealTime, Preference), Vec<MealEntry>>,
}

const BUILTIN: [(MealTime, Preference, &[(&str, &str)]); 9] = [
    (
        MealTime::Morning,
        Preference::Regular,
        &[
            ("Omelette", "omelette breakfast"),
            ("Pancakes", "pancakes breakfast"),
        ],
    ),
    (
        MealTime::Morning,
        Preference::Vegetarian,
        &[("Vegetable Omelette", "vegetable omelette breakfast")],
    ),
    (
        MealTime::Morning,
        Preference::Vegan,
        &[("Vegan Pancakes", "vegan pancakes breakfast")],
    ),
    (
        MealTime::Lunch,
        Preference::Regular,
        &[("Sandwich", "sandwich lunch"), ("Salad", "salad lunch")],
    ),
    (
        MealTime::Lunch,
        Preference::Vegetarian,
        &[("Vegetarian Wrap", "vegetarian wrap lunch")],
    ),
    (
        MealTime::Lunch,
        Preference::Vegan,
        &[("Vegan Salad", "vegan salad lunch")],
    ),
    (
        MealTime::Dinner,
        Preference::Regular,
        &[("Spaghetti", "spaghetti dinner"), ("Steak", "steak dinner")],
    ),
    (
        MealTime::Dinner,
        Preference::Vegetarian,
        &[("Vegetarian Pasta", "vegetarian pasta dinner")],
    ),
    (
        MealTime::Dinner,
        Preference::Vegan,
        &[("Vegan Burger", "vegan burger dinner")],
    ),
];

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(time, preference, meals)| {
            (
                *time,
                *preference,
                meals
                    .iter()
                    .map(|(name, query)| MealEntry::new(*name, *query))
                    .collect(),
            )
        }))
    }

    /// Build a catalog from `(meal time, preference, meals)` triples.
    ///
    /// Later triples for the same pair replace earlier ones. Pairs that are
    /// never mentioned resolve to an empty list.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MealTime, Preference, Vec<MealEntry>)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(time, preference, meals)| ((time, preference), meals))
                .collect(),
        }
    }

    /// Parse a catalog laid out as `{ "<time>": { "<preference>": [ { "name", "query" } ] } }`.
    ///
    /// Unknown time or preference keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let nested: HashMap<MealTime, HashMap<Preference, Vec<MealEntry>>> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        Ok(Self::from_entries(nested.into_iter().flat_map(
            |(time, by_preference)| {
                by_preference
                    .into_iter()
                    .map(move |(preference, meals)| (time, preference, meals))
            },
        )))
    }

    pub fn lookup(&self, meal_time: MealTime, preference: Preference) -> &[MealEntry] {
        self.entries
            .get(&(meal_time, preference))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up by the meal time's label. Labels outside the enumerated set yield an empty list.
    pub fn lookup_label(&self, meal_time: &str, preference: Preference) -> &[MealEntry] {
        match meal_time.parse::<MealTime>() {
            Ok(time) => self.lookup(time, preference),
            Err(_) => &[],
        }
    }

    /// Meal times that can be offered for `preference`, in [`MealTime::ALL`] order.
    pub fn selectable_meal_times(&self, preference: Preference) -> Vec<MealTime> {
        MealTime::ALL
            .into_iter()
            .filter(|time| !self.lookup(*time, preference).is_empty())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
