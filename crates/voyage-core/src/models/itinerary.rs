//! Day-by-day itinerary produced by an itinerary generator.

use std::{path::Path, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Part of the day an activity is scheduled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
        }
    }

    /// Icon shown next to activities in this period.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use voyage_core::models::Period;
    ///
    /// assert_eq!(Period::Morning.icon(), "☀");
    /// assert_eq!(Period::Evening.icon(), "☾");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            Period::Morning => "☀",
            Period::Afternoon => "◐",
            Period::Evening => "☾",
        }
    }
}

/// Kind of a scheduled activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A meal at a restaurant, café or market
    #[serde(alias = "restaurant")]
    Dining,

    /// Sightseeing, tours and events
    Attraction,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Dining => "Dining",
            ActivityKind::Attraction => "Attraction",
        }
    }
}

/// Relative price of an activity, from 1 (cheap) to 3 (expensive).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const MAX: u8 = 3;

    /// Creates a price level, clamping into `1..=3`.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (1..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(format!("Price level must be between 1 and {}, got {level}", Self::MAX))
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Start time label, e.g. "9:00 AM"
    pub time: String,
    pub period: Period,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub rating: f32,
    pub price_level: PriceLevel,
    /// Duration label, e.g. "1.5 hours"
    pub duration: String,
    pub location: String,
}

/// One day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub date: Date,
    pub activities: Vec<Activity>,
}

/// Ordered sequence of days with their scheduled activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Looks up a day by its 1-based number.
    pub fn day(&self, day: u32) -> Option<&ItineraryDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Number of the first day, if there are any days.
    pub fn first_day(&self) -> Option<u32> {
        self.days.first().map(|d| d.day)
    }

    pub fn total_activities(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// File formats an itinerary can be exported to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The whole trip as a markdown document
    #[default]
    Markdown,

    /// Trip parameters and itinerary as pretty-printed JSON
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        }
    }

    /// Picks the format from a file extension: `.json` is JSON, anything
    /// else is markdown.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Markdown,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}
