//! The three-step planning form.
//!
//! [`PlanningFlow`] walks a traveler through dates, interests, and budget and
//! party size. Forward navigation is gated per step: dates must both be set
//! before leaving the first step and at least one interest must be picked
//! before leaving the second. A blocked advance is reported as
//! [`Advance::Blocked`] and leaves the form untouched.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    models::{clamp_travelers, BudgetTier, Interest, PlanningStep, TripParameters},
};

/// Outcome of [`PlanningFlow::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved forward to the given step
    Moved(PlanningStep),
    /// The last step was confirmed; carries the finished trip parameters
    Completed(TripParameters),
    /// The current step is incomplete; nothing changed
    Blocked,
}

/// Outcome of [`PlanningFlow::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back to the given step
    Moved(PlanningStep),
    /// Already at the first step; the caller should leave the form
    Exit,
}

/// How far through the form the traveler is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    pub step: u8,
    pub total: u8,
    /// Rounded percentage of steps reached
    pub percent: u8,
}

/// State of the planning form: the current step plus the trip being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningFlow {
    step: PlanningStep,
    form: TripParameters,
}

impl PlanningFlow {
    /// Opens the form at the first step, pre-filled with `trip`.
    pub fn new(trip: TripParameters) -> Self {
        Self {
            step: PlanningStep::Dates,
            form: trip,
        }
    }

    pub fn step(&self) -> PlanningStep {
        self.step
    }

    /// The trip parameters as edited so far.
    pub fn form(&self) -> &TripParameters {
        &self.form
    }

    /// Whether `step`'s own requirement holds for the current form.
    pub fn is_step_valid(&self, step: PlanningStep) -> bool {
        match step {
            PlanningStep::Dates => self.form.has_dates(),
            PlanningStep::Interests => !self.form.interests.is_empty(),
            PlanningStep::BudgetAndTravelers => true,
        }
    }

    /// Whether [`advance`](Self::advance) would move forward.
    ///
    /// Every step up to and including the current one must be valid, so
    /// clearing an earlier field after moving on still blocks completion.
    pub fn can_advance(&self) -> bool {
        [
            PlanningStep::Dates,
            PlanningStep::Interests,
            PlanningStep::BudgetAndTravelers,
        ]
        .into_iter()
        .filter(|step| *step <= self.step)
        .all(|step| self.is_step_valid(step))
    }

    /// Moves to the next step, or completes the form from the last step.
    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => Advance::Completed(self.form.clone()),
        }
    }

    /// Moves to the previous step, or signals that the form should close.
    pub fn retreat(&mut self) -> Retreat {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Retreat::Moved(previous)
            }
            None => Retreat::Exit,
        }
    }

    /// Adds the interest if absent, removes it if present.
    ///
    /// Returns whether the interest is picked afterwards.
    pub fn toggle_interest(&mut self, interest: Interest) -> bool {
        if let Some(index) = self.form.interests.iter().position(|i| *i == interest) {
            self.form.interests.remove(index);
            false
        } else {
            self.form.interests.push(interest);
            true
        }
    }

    /// Sets the daily budget from an amount.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if `amount` is not one of the tier
    /// amounts (500, 1000, 2000, 3000); the form is left unchanged.
    pub fn set_budget(&mut self, amount: u32) -> Result<BudgetTier> {
        let tier = BudgetTier::from_amount(amount).ok_or_else(|| {
            TripError::invalid_input("budget").with_reason(format!(
                "{amount} is not a daily budget tier; choose one of 500, 1000, 2000 or 3000"
            ))
        })?;
        self.form.budget = tier;
        Ok(tier)
    }

    /// Sets the party size, clamped to 1–10. Returns the stored value.
    pub fn set_travelers(&mut self, travelers: u32) -> u8 {
        self.form.travelers = clamp_travelers(travelers);
        self.form.travelers
    }

    /// Sets the check-in date.
    ///
    /// A check-out that would now fall before check-in is cleared.
    pub fn set_check_in(&mut self, date: Date) {
        self.form.check_in = Some(date);
        if self.form.check_out.is_some_and(|check_out| check_out < date) {
            self.form.check_out = None;
        }
    }

    /// Sets the check-out date.
    ///
    /// # Errors
    ///
    /// Returns `TripError::InvalidInput` if the date falls before check-in.
    pub fn set_check_out(&mut self, date: Date) -> Result<()> {
        if let Some(check_in) = self.form.check_in {
            if date < check_in {
                return Err(TripError::invalid_input("check_out")
                    .with_reason(format!("Check-out {date} is before check-in {check_in}")));
            }
        }
        self.form.check_out = Some(date);
        Ok(())
    }

    /// Position in the form, as shown on the progress bar.
    pub fn progress(&self) -> Progress {
        let step = self.step.number();
        let total = PlanningStep::COUNT;
        let percent = (f64::from(step) / f64::from(total) * 100.0).round() as u8;
        Progress {
            step,
            total,
            percent,
        }
    }
}

/// Parses a `YYYY-MM-DD` date for the named field.
///
/// # Errors
///
/// Returns `TripError::InvalidInput` if the text is not a valid date.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        TripError::invalid_input(field).with_reason(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}
