//! Trip parameters collected by the planning form.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// Smallest and largest party size accepted by the planning form.
pub const MIN_TRAVELERS: u8 = 1;
pub const MAX_TRAVELERS: u8 = 10;

/// Daily per-person budget tiers offered by the planning form.
///
/// Serialized as the tier's daily amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(into = "u32", try_from = "u32")]
pub enum BudgetTier {
    /// 500 per day
    Budget,

    /// 1,000 per day
    #[default]
    Moderate,

    /// 2,000 per day
    Luxury,

    /// 3,000 or more per day
    UltraLuxury,
}

impl BudgetTier {
    /// All tiers in ascending order.
    pub const ALL: [BudgetTier; 4] = [
        BudgetTier::Budget,
        BudgetTier::Moderate,
        BudgetTier::Luxury,
        BudgetTier::UltraLuxury,
    ];

    /// Daily per-person amount for the tier.
    pub fn amount(&self) -> u32 {
        match self {
            BudgetTier::Budget => 500,
            BudgetTier::Moderate => 1000,
            BudgetTier::Luxury => 2000,
            BudgetTier::UltraLuxury => 3000,
        }
    }

    /// Looks up the tier whose amount is exactly `amount`.
    pub fn from_amount(amount: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.amount() == amount)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Moderate => "moderate",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra",
        }
    }

    /// Human-readable tier name.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::Moderate => "Moderate",
            BudgetTier::Luxury => "Luxury",
            BudgetTier::UltraLuxury => "Ultra Luxury",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "budget" => Ok(BudgetTier::Budget),
            "moderate" => Ok(BudgetTier::Moderate),
            "luxury" => Ok(BudgetTier::Luxury),
            "ultra" | "ultra-luxury" | "ultra_luxury" => Ok(BudgetTier::UltraLuxury),
            other => other
                .parse::<u32>()
                .ok()
                .and_then(BudgetTier::from_amount)
                .ok_or_else(|| format!("Invalid budget tier: {s}")),
        }
    }
}

impl From<BudgetTier> for u32 {
    fn from(tier: BudgetTier) -> Self {
        tier.amount()
    }
}

impl TryFrom<u32> for BudgetTier {
    type Error = String;

    fn try_from(amount: u32) -> std::result::Result<Self, Self::Error> {
        BudgetTier::from_amount(amount)
            .ok_or_else(|| format!("{amount} is not one of the daily budget tiers"))
    }
}

/// Interest tags a traveler can pick in the second planning step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Food,
    Culture,
    Nightlife,
    Adventure,
    Shopping,
    Nature,
}

impl Interest {
    /// All interests in display order.
    pub const ALL: [Interest; 6] = [
        Interest::Food,
        Interest::Culture,
        Interest::Nightlife,
        Interest::Adventure,
        Interest::Shopping,
        Interest::Nature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Food => "food",
            Interest::Culture => "culture",
            Interest::Nightlife => "nightlife",
            Interest::Adventure => "adventure",
            Interest::Shopping => "shopping",
            Interest::Nature => "nature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Food => "Local Cuisine",
            Interest::Culture => "Culture & History",
            Interest::Nightlife => "Nightlife",
            Interest::Adventure => "Adventure",
            Interest::Shopping => "Shopping",
            Interest::Nature => "Nature",
        }
    }
}

impl FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Interest::ALL
            .into_iter()
            .find(|interest| interest.as_str() == normalized)
            .ok_or_else(|| format!("Invalid interest: {s}"))
    }
}

/// Everything the planning form collects about a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripParameters {
    /// Destination entered on the landing screen
    pub destination: String,

    /// First day of the trip
    pub check_in: Option<Date>,

    /// Last day of the trip
    pub check_out: Option<Date>,

    /// Party size, between 1 and 10
    pub travelers: u8,

    /// Daily per-person spend
    pub budget: BudgetTier,

    /// Picked interests, in the order they were first picked
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl TripParameters {
    /// Starts a trip for `destination` with no dates, no interests and the
    /// default budget tier. The party size is clamped to the allowed range.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if the destination is blank.
    pub fn new(destination: &str, travelers: u32) -> Result<Self> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TripError::invalid_input("destination").with_reason("Destination cannot be empty"));
        }

        Ok(Self {
            destination: destination.to_string(),
            check_in: None,
            check_out: None,
            travelers: clamp_travelers(travelers),
            budget: BudgetTier::default(),
            interests: Vec::new(),
        })
    }

    /// Whether both check-in and check-out are set.
    pub fn has_dates(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Nights between check-in and check-out, when both are set.
    pub fn nights(&self) -> Option<i32> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).get_days()),
            _ => None,
        }
    }

    /// Daily budget for the whole party.
    pub fn daily_group_budget(&self) -> u32 {
        self.budget.amount() * u32::from(self.travelers)
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }
}

/// Clamps a requested party size into `[MIN_TRAVELERS, MAX_TRAVELERS]`.
pub fn clamp_travelers(travelers: u32) -> u8 {
    // The clamp bounds fit in u8, so the cast cannot truncate.
    travelers.clamp(u32::from(MIN_TRAVELERS), u32::from(MAX_TRAVELERS)) as u8
}
