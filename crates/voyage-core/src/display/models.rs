//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Compact single-line forms for labels, tags and list entries

use std::fmt;

use super::{
    datetime::{LongDate, StayDates},
    units::{group_thousands, Amount, Hours, Price},
};
use crate::{
    aggregate::SelectionSummary,
    models::{
        Activity, ActivityKind, BudgetTier, CatalogItem, Category, Interest, Itinerary, ItineraryDay, Period,
        PlanSource, PlanningStep, PriceLevel, SelectedItem, StageKind, TripParameters,
    },
    planning::Progress,
};

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plus = if *self == BudgetTier::UltraLuxury { "+" } else { "" };
        write!(
            f,
            "{} (${}{plus}/day)",
            self.label(),
            group_thousands(u64::from(self.amount()))
        )
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.as_str())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filled `$` for the level, `○` for the rest, e.g. `$$○`.
impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = usize::from(self.get());
        let empty = usize::from(PriceLevel::MAX).saturating_sub(level);
        write!(f, "{}{}", "$".repeat(level), "○".repeat(empty))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {} ({}%)", self.step, self.total, self.percent)
    }
}

impl fmt::Display for TripParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip to {}", self.destination)?;
        writeln!(f)?;

        writeln!(f, "- Dates: {}", StayDates(self))?;
        writeln!(f, "- Travelers: {}", self.travelers)?;
        writeln!(f, "- Budget: {}", self.budget)?;
        if self.interests.is_empty() {
            writeln!(f, "- Interests: none yet")?;
        } else {
            let interests: Vec<&str> = self.interests.iter().map(Interest::label).collect();
            writeln!(f, "- Interests: {}", interests.join(", "))?;
        }

        Ok(())
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**{}** `{}` ★{:.1} · {} · {}",
            self.title,
            self.id,
            self.rating,
            Price(self.price),
            Hours(self.duration_hours)
        )?;
        if self.tags.is_empty() {
            writeln!(f, "  {}", self.description)
        } else {
            writeln!(f, "  {} · _{}_", self.description, self.tags.join(", "))
        }
    }
}

impl fmt::Display for SelectedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} `{}` ({}) · {} · {}",
            self.title,
            self.id,
            self.category.as_str(),
            Price(self.cost),
            Hours(self.duration_hours)
        )
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} · {}", self.time, self.period.icon(), self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} · ★{:.1} · {} · {} · {}",
            self.kind, self.rating, self.price_level, self.duration, self.location
        )?;
        writeln!(f)
    }
}

impl fmt::Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {} · {}", self.day, LongDate(&self.date))?;
        writeln!(f)?;

        if self.activities.is_empty() {
            return writeln!(f, "Free day, nothing planned.");
        }
        for activity in &self.activities {
            write!(f, "{activity}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.is_empty() {
            return writeln!(f, "The itinerary is empty.");
        }
        for day in &self.days {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = if self.count == 1 { "item" } else { "items" };
        write!(
            f,
            "**{} {items} selected** · {} / {} ({:.1}% of the daily budget) · {}",
            self.count,
            Amount(self.total_cost),
            Amount(self.group_budget),
            self.utilization,
            Hours(self.total_hours)
        )?;
        if self.is_over_budget() {
            write!(f, " · over budget")?;
        }
        Ok(())
    }
}
