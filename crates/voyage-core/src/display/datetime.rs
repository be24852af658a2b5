//! Date display utilities.
//!
//! Wrapper types for formatting trip and itinerary dates in a consistent,
//! human-readable way.

use std::fmt;

use jiff::civil::Date;

use crate::models::TripParameters;

/// A wrapper around `Date` that formats it the way itinerary days are
/// headed.
///
/// # Format
///
/// `Weekday, Month D`, e.g. `Friday, March 15`. The year is omitted.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %-d"))
    }
}

/// The check-in to check-out span of a trip, e.g.
/// `2030-06-01 → 2030-06-04 (3 nights)`.
///
/// Missing dates are shown as `not set`.
pub struct StayDates<'a>(pub &'a TripParameters);

impl<'a> fmt::Display for StayDates<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trip = self.0;
        match (trip.check_in, trip.check_out) {
            (None, None) => write!(f, "not set"),
            (Some(check_in), None) => write!(f, "{check_in} → not set"),
            (None, Some(check_out)) => write!(f, "not set → {check_out}"),
            (Some(check_in), Some(check_out)) => {
                write!(f, "{check_in} → {check_out}")?;
                match trip.nights() {
                    Some(1) => write!(f, " (1 night)"),
                    Some(nights) => write!(f, " ({nights} nights)"),
                    None => Ok(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(LongDate(&date(2024, 3, 15)).to_string(), "Friday, March 15");
        assert_eq!(LongDate(&date(2030, 6, 1)).to_string(), "Saturday, June 1");
    }

    #[test]
    fn test_stay_dates() {
        let mut trip = TripParameters::new("Paris", 2).unwrap();
        assert_eq!(StayDates(&trip).to_string(), "not set");

        trip.check_in = Some(date(2030, 6, 1));
        assert_eq!(StayDates(&trip).to_string(), "2030-06-01 → not set");

        trip.check_out = Some(date(2030, 6, 2));
        assert_eq!(StayDates(&trip).to_string(), "2030-06-01 → 2030-06-02 (1 night)");
    }
}
