//! Itinerary generators.

use async_trait::async_trait;
use jiff::{civil::Date, Span};
use log::debug;

use crate::{
    error::{Result, TripError},
    models::{Activity, ActivityKind, Itinerary, ItineraryDay, Period, PriceLevel, Selection, TripParameters},
};

/// Produces a day-by-day itinerary for a trip.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Generate an itinerary
    ///
    /// # Arguments
    /// * `trip` - Completed trip parameters
    /// * `selection` - Items the traveler picked, or `None` to let the
    ///   generator choose everything
    ///
    /// # Errors
    /// `TripError::Unavailable` for transient failures that may be retried.
    async fn generate(&self, trip: &TripParameters, selection: Option<&Selection>) -> Result<Itinerary>;
}

/// Returns the built-in two-day sample itinerary.
///
/// Day dates start at the trip's check-in when one is set; activities are the
/// same regardless of the trip or selection.
#[derive(Debug, Clone, Default)]
pub struct StaticItinerary;

impl StaticItinerary {
    /// First day used when the trip has no check-in date.
    pub const DEFAULT_START: Date = jiff::civil::date(2024, 3, 15);
}

#[async_trait]
impl ItineraryGenerator for StaticItinerary {
    async fn generate(&self, trip: &TripParameters, selection: Option<&Selection>) -> Result<Itinerary> {
        debug!(
            "Generating sample itinerary for {} ({} selected items)",
            trip.destination,
            selection.map_or(0, Selection::len)
        );

        let start = trip.check_in.unwrap_or(Self::DEFAULT_START);
        let days = sample_days()
            .into_iter()
            .enumerate()
            .map(|(offset, activities)| {
                let date = start
                    .checked_add(Span::new().days(offset as i64))
                    .map_err(|e| TripError::invalid_input("check_in").with_reason(e.to_string()))?;
                Ok(ItineraryDay {
                    day: offset as u32 + 1,
                    date,
                    activities,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Itinerary { days })
    }
}

#[allow(clippy::too_many_arguments)]
fn activity(
    time: &str,
    period: Period,
    kind: ActivityKind,
    title: &str,
    description: &str,
    rating: f32,
    price_level: u8,
    duration: &str,
    location: &str,
) -> Activity {
    Activity {
        time: time.to_string(),
        period,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        rating,
        price_level: PriceLevel::new(price_level),
        duration: duration.to_string(),
        location: location.to_string(),
    }
}

fn sample_days() -> Vec<Vec<Activity>> {
    use ActivityKind::{Attraction, Dining};
    use Period::{Afternoon, Evening, Morning};

    vec![
        vec![
            activity("9:00 AM", Morning, Dining, "Beachside Café", "Start your day with fresh tropical fruits and coffee", 4.8, 2, "1 hour", "Main Beach Boulevard"),
            activity("11:00 AM", Morning, Attraction, "Historic Old Town Walking Tour", "Explore colonial architecture and local markets", 4.6, 1, "2 hours", "Old Town Square"),
            activity("1:30 PM", Afternoon, Dining, "Ocean View Grill", "Fresh seafood with panoramic ocean views", 4.9, 3, "1.5 hours", "Coastal Highway"),
            activity("4:00 PM", Afternoon, Attraction, "Sunset Beach Activities", "Snorkeling, kayaking, or beach volleyball", 4.7, 2, "3 hours", "Paradise Beach"),
            activity("8:00 PM", Evening, Dining, "Rooftop Bar & Grill", "Craft cocktails and live music under the stars", 4.5, 3, "2 hours", "Downtown District"),
        ],
        vec![
            activity("8:30 AM", Morning, Dining, "Local Market Breakfast", "Authentic street food and fresh juices", 4.4, 1, "45 minutes", "Central Market"),
            activity("10:30 AM", Morning, Attraction, "Cultural Museum & Gallery", "Discover local art and historical artifacts", 4.3, 2, "2.5 hours", "Arts District"),
            activity("2:00 PM", Afternoon, Dining, "Garden Terrace Restaurant", "Farm-to-table cuisine in a tropical setting", 4.8, 3, "1.5 hours", "Botanical Gardens"),
            activity("5:30 PM", Afternoon, Attraction, "Adventure Nature Trail", "Hiking through rainforest with waterfalls", 4.9, 2, "3 hours", "National Park"),
        ],
    ]
}
