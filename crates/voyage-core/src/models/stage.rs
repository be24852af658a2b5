//! Stage and step enumerations for the planning session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the session's top-level stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// Landing screen collecting the destination
    #[default]
    Hero,

    /// Three-step trip parameter form
    Planning,

    /// Catalog browsing and selection
    Discovery,

    /// Generated itinerary
    Results,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Hero => "hero",
            StageKind::Planning => "planning",
            StageKind::Discovery => "discovery",
            StageKind::Results => "results",
        }
    }
}

impl FromStr for StageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hero" | "home" => Ok(StageKind::Hero),
            "planning" => Ok(StageKind::Planning),
            "discovery" => Ok(StageKind::Discovery),
            "results" => Ok(StageKind::Results),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}

/// Steps of the planning form, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStep {
    /// Check-in and check-out dates
    #[default]
    Dates,

    /// Interest tags
    Interests,

    /// Daily budget tier and number of travelers
    BudgetAndTravelers,
}

impl PlanningStep {
    /// Number of steps in the planning form.
    pub const COUNT: u8 = 3;

    /// 1-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            PlanningStep::Dates => 1,
            PlanningStep::Interests => 2,
            PlanningStep::BudgetAndTravelers => 3,
        }
    }

    /// The step after this one, or `None` for the last step.
    pub fn next(&self) -> Option<Self> {
        match self {
            PlanningStep::Dates => Some(PlanningStep::Interests),
            PlanningStep::Interests => Some(PlanningStep::BudgetAndTravelers),
            PlanningStep::BudgetAndTravelers => None,
        }
    }

    /// The step before this one, or `None` for the first step.
    pub fn previous(&self) -> Option<Self> {
        match self {
            PlanningStep::Dates => None,
            PlanningStep::Interests => Some(PlanningStep::Dates),
            PlanningStep::BudgetAndTravelers => Some(PlanningStep::Interests),
        }
    }

    /// Heading shown for the step.
    pub fn title(&self) -> &'static str {
        match self {
            PlanningStep::Dates => "When are you traveling?",
            PlanningStep::Interests => "Pick your vibe",
            PlanningStep::BudgetAndTravelers => "How much are you looking to spend?",
        }
    }
}

/// Where the itinerary's activities came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    /// Built from the items the traveler selected
    #[default]
    Manual,

    /// Chosen entirely by the itinerary generator
    Autoplan,
}

impl PlanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanSource::Manual => "manual",
            PlanSource::Autoplan => "autoplan",
        }
    }
}
