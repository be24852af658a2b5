//! Screen views for each stage of a session.
//!
//! [`StageView`] renders whatever stage a [`Session`] is in. The per-stage
//! views can also be used on their own.

use std::fmt;

use super::{collections::CatalogListing, datetime::StayDates};
use crate::{
    discovery::DiscoverySelection,
    models::{BudgetTier, Category, Interest, PlanningStep, TripParameters},
    planning::PlanningFlow,
    session::{ResultsView, Session, Stage},
};

/// The current screen of a session.
pub struct StageView<'a>(pub &'a Session);

impl<'a> fmt::Display for StageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        match session.stage() {
            Stage::Hero => write!(f, "{}", HeroView),
            Stage::Planning(flow) => write!(f, "{}", PlanningView(flow)),
            Stage::Discovery(discovery) => write!(
                f,
                "{}",
                DiscoveryView {
                    discovery,
                    trip: session.trip(),
                }
            ),
            Stage::Results(view) => write!(
                f,
                "{}",
                ResultsPage {
                    view,
                    trip: session.trip(),
                }
            ),
        }
    }
}

/// The landing screen.
pub struct HeroView;

impl fmt::Display for HeroView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Where to next?")?;
        writeln!(f)?;
        writeln!(f, "Tell us a destination and we'll plan the trip around what you love.")
    }
}

/// The planning form at its current step.
pub struct PlanningView<'a>(pub &'a PlanningFlow);

impl<'a> PlanningView<'a> {
    fn fmt_dates(form: &TripParameters, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = || "not set".to_string();
        writeln!(f, "- Check-in: {}", form.check_in.map_or_else(unset, |d| d.to_string()))?;
        writeln!(f, "- Check-out: {}", form.check_out.map_or_else(unset, |d| d.to_string()))?;
        if form.has_dates() {
            writeln!(f, "- Stay: {}", StayDates(form))?;
        }
        Ok(())
    }

    fn fmt_interests(form: &TripParameters, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interest in Interest::ALL {
            let marker = if form.has_interest(interest) { "[x]" } else { "[ ]" };
            writeln!(f, "- {marker} {} `{}`", interest.label(), interest.as_str())?;
        }
        Ok(())
    }

    fn fmt_budget(form: &TripParameters, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tier in BudgetTier::ALL {
            let marker = if form.budget == tier { "(•)" } else { "( )" };
            writeln!(f, "- {marker} {tier} `{}`", tier.amount())?;
        }
        writeln!(f)?;
        writeln!(f, "Travelers: {}", form.travelers)
    }
}

impl<'a> fmt::Display for PlanningView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flow = self.0;
        let form = flow.form();

        writeln!(f, "# Plan your trip to {}", form.destination)?;
        writeln!(f)?;
        writeln!(f, "{}", flow.progress())?;
        writeln!(f)?;
        writeln!(f, "## {}", flow.step())?;
        writeln!(f)?;

        match flow.step() {
            PlanningStep::Dates => Self::fmt_dates(form, f)?,
            PlanningStep::Interests => Self::fmt_interests(form, f)?,
            PlanningStep::BudgetAndTravelers => Self::fmt_budget(form, f)?,
        }

        let missing = [PlanningStep::Dates, PlanningStep::Interests]
            .into_iter()
            .filter(|step| *step <= flow.step())
            .find(|step| !flow.is_step_valid(*step));
        match missing {
            Some(PlanningStep::Dates) => writeln!(f, "\n_Set both dates to continue._")?,
            Some(_) => writeln!(f, "\n_Pick at least one interest to continue._")?,
            None => {}
        }
        Ok(())
    }
}

/// The catalog tab being browsed, with selection totals.
pub struct DiscoveryView<'a> {
    pub discovery: &'a DiscoverySelection,
    pub trip: Option<&'a TripParameters>,
}

impl<'a> fmt::Display for DiscoveryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let discovery = self.discovery;
        let active = discovery.active_category();

        match self.trip {
            Some(trip) => writeln!(f, "# Discover {}", trip.destination)?,
            None => writeln!(f, "# Discover")?,
        }
        writeln!(f)?;

        let tabs: Vec<String> = Category::ALL
            .iter()
            .map(|category| {
                let count = discovery.catalog().items(*category).len();
                if *category == active {
                    format!("**{} ({count})**", category.label())
                } else {
                    format!("{} ({count})", category.label())
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" · "))?;
        writeln!(f)?;

        let listing =
            CatalogListing::new(discovery.catalog().items(active), active).with_selection(discovery.selection());
        write!(f, "{listing}")?;

        if let Some(trip) = self.trip {
            writeln!(f, "{}", discovery.summary(trip))?;
        }
        Ok(())
    }
}

/// The generated itinerary, showing the selected day.
pub struct ResultsPage<'a> {
    pub view: &'a ResultsView,
    pub trip: Option<&'a TripParameters>,
}

fn fmt_trip_heading(trip: Option<&TripParameters>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match trip {
        Some(trip) => {
            writeln!(f, "# Your {} itinerary", trip.destination)?;
            writeln!(f)?;
            writeln!(
                f,
                "{} · {} travelers · {}",
                StayDates(trip),
                trip.travelers,
                trip.budget
            )?;
        }
        None => writeln!(f, "# Your itinerary")?,
    }
    writeln!(f)
}

impl<'a> fmt::Display for ResultsPage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        fmt_trip_heading(self.trip, f)?;

        let days: Vec<String> = view
            .itinerary()
            .days
            .iter()
            .map(|day| {
                if day.day == view.selected_day() {
                    format!("**Day {}**", day.day)
                } else {
                    format!("Day {}", day.day)
                }
            })
            .collect();
        if !days.is_empty() {
            writeln!(f, "{}", days.join(" · "))?;
            writeln!(f)?;
        }

        match view.current_day() {
            Some(day) => write!(f, "{day}")?,
            None => writeln!(f, "The itinerary is empty.")?,
        }

        if view.is_autoplanned() {
            writeln!(f, "_Planned automatically from your interests._")?;
        }
        Ok(())
    }
}

/// The whole itinerary as one markdown document, every day in order.
pub struct ItineraryDocument<'a> {
    pub view: &'a ResultsView,
    pub trip: Option<&'a TripParameters>,
}

impl<'a> fmt::Display for ItineraryDocument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_trip_heading(self.trip, f)?;
        if let Some(trip) = self.trip {
            if !trip.interests.is_empty() {
                let interests: Vec<&str> = trip.interests.iter().map(Interest::label).collect();
                writeln!(f, "Interests: {}", interests.join(", "))?;
                writeln!(f)?;
            }
        }

        let mut days = self.view.itinerary().days.iter().peekable();
        if days.peek().is_none() {
            writeln!(f, "The itinerary is empty.")?;
        }
        while let Some(day) = days.next() {
            write!(f, "{day}")?;
            if days.peek().is_some() {
                writeln!(f)?;
            }
        }

        if self.view.is_autoplanned() {
            writeln!(f)?;
            writeln!(f, "_Planned automatically from your interests._")?;
        }
        Ok(())
    }
}
