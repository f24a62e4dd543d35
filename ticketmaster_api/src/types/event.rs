//! Event records returned by `/events`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Attraction, Classification, Image, Links, Venue};

/// An event: a concert, game, show or similar.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier (e.g. `vvG1zZfbJQpVWp`).
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub url: Option<String>,

    pub locale: Option<String>,

    pub test: Option<bool>,

    pub info: Option<String>,

    pub please_note: Option<String>,

    #[serde(default)]
    pub images: Vec<Image>,

    pub dates: Option<EventDates>,

    #[serde(default)]
    pub classifications: Vec<Classification>,

    /// Ticket price tiers. Empty when the API lists none.
    #[serde(default)]
    pub price_ranges: Vec<PriceRange>,

    pub promoter: Option<Promoter>,

    #[serde(default)]
    pub promoters: Vec<Promoter>,

    #[serde(rename = "_links", default)]
    pub links: Links,

    #[serde(rename = "_embedded", default)]
    pub embedded: EventEmbedded,
}

impl Event {
    /// Venues hosting this event.
    pub fn venues(&self) -> &[Venue] {
        &self.embedded.venues
    }

    /// Performers or teams appearing at this event.
    pub fn attractions(&self) -> &[Attraction] {
        &self.embedded.attractions
    }

    /// UTC start time, when the API provides one.
    pub fn start_date_time(&self) -> Option<DateTime<Utc>> {
        self.dates
            .as_ref()
            .and_then(|d| d.start.as_ref())
            .and_then(|s| s.date_time)
    }

    /// Genre names of every classification attached to the event.
    pub fn genre_names(&self) -> Vec<&str> {
        self.classifications
            .iter()
            .filter_map(|c| c.genre.as_ref())
            .map(|g| g.name.as_str())
            .collect()
    }
}

/// Records nested under an event's `_embedded` block.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventEmbedded {
    #[serde(default)]
    pub venues: Vec<Venue>,

    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

/// Start and end dates of an event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDates {
    pub start: Option<EventDate>,

    pub end: Option<EventDate>,

    /// IANA timezone of the venue (e.g. `America/New_York`).
    pub timezone: Option<String>,

    pub status: Option<EventStatus>,

    pub span_multiple_days: Option<bool>,
}

/// One end of an event's date range.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDate {
    pub local_date: Option<NaiveDate>,

    /// Venue-local time as sent by the API (e.g. `19:30:00`).
    pub local_time: Option<String>,

    pub date_time: Option<DateTime<Utc>>,

    #[serde(rename = "dateTBD")]
    pub date_tbd: Option<bool>,

    #[serde(rename = "dateTBA")]
    pub date_tba: Option<bool>,

    #[serde(rename = "timeTBA")]
    pub time_tba: Option<bool>,

    pub no_specific_time: Option<bool>,

    pub approximate: Option<bool>,
}

/// Sale status of an event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventStatus {
    /// `onsale`, `offsale`, `cancelled`, `postponed` or `rescheduled`.
    pub code: Option<String>,
}

/// One ticket price tier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub currency: Option<String>,

    pub min: Option<f64>,

    pub max: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Promoter {
    pub id: Option<String>,

    pub name: Option<String>,

    pub description: Option<String>,
}
