//! Activity types
//!
//! A logged activity with its estimated carbon emissions. Activities are
//! immutable once recorded; the store keeps them newest-first and never
//! deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EcoTraceError, Result};
use crate::utils::relative_time::relative_label;

/// Category of a logged activity
///
/// `Other` absorbs categories written by older versions of the persisted
/// documents so a single unknown value does not poison the whole record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Transportation,
    Food,
    Shopping,
    Energy,
    Waste,
    #[serde(other)]
    Other,
}

/// Display styling derived from an activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub badge_class: &'static str,
}

impl ActivityCategory {
    /// Human-readable label, also used for case-insensitive matching
    /// against achievement categories
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Energy => "Energy",
            Self::Waste => "Waste",
            Self::Other => "Other",
        }
    }

    /// Icon and badge class for this category; unknown categories fall
    /// back to a neutral style
    pub fn style(&self) -> CategoryStyle {
        match self {
            Self::Transportation => CategoryStyle { icon: "car", badge_class: "badge-blue" },
            Self::Food => CategoryStyle { icon: "utensils", badge_class: "badge-green" },
            Self::Shopping => CategoryStyle { icon: "shopping-bag", badge_class: "badge-amber" },
            Self::Energy => CategoryStyle { icon: "lightbulb", badge_class: "badge-orange" },
            Self::Waste => CategoryStyle { icon: "trash", badge_class: "badge-red" },
            Self::Other => CategoryStyle { icon: "activity", badge_class: "badge-gray" },
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single logged activity with its emissions estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier, generated at record time
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    /// Estimated emissions in kg CO2e (>= 0)
    pub emissions: f64,
    /// When the activity was recorded
    pub logged_at: DateTime<Utc>,
    /// Relative display label frozen at record time (e.g. "Just now")
    pub timestamp_label: String,
    pub icon: String,
    pub badge_class: String,
}

impl Activity {
    /// Record a new activity at `now`, deriving id, label and styling
    pub fn record(input: NewActivity, now: DateTime<Utc>) -> Self {
        let style = input.category.style();
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            category: input.category,
            emissions: input.emissions,
            logged_at: now,
            timestamp_label: relative_label(now, now),
            icon: style.icon.to_string(),
            badge_class: style.badge_class.to_string(),
        }
    }
}

/// Caller-supplied payload for recording an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub category: ActivityCategory,
    pub name: String,
    /// Estimated emissions in kg CO2e
    pub emissions: f64,
}

impl NewActivity {
    /// Validate the payload before it reaches any aggregate
    ///
    /// # Errors
    /// Returns `EcoTraceError::InvalidInput` for an empty name or a
    /// non-finite/negative emissions value.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EcoTraceError::InvalidInput("activity name must not be empty".into()));
        }
        if !self.emissions.is_finite() {
            return Err(EcoTraceError::InvalidInput(format!(
                "emissions must be a finite number, got {}",
                self.emissions
            )));
        }
        if self.emissions < 0.0 {
            return Err(EcoTraceError::InvalidInput(format!(
                "emissions must not be negative, got {}",
                self.emissions
            )));
        }
        Ok(())
    }
}
