//! Venue records returned by `/venues` and embedded in events.

use serde::{Deserialize, Serialize};

use super::{Image, Links};

/// A venue. Only `id` is guaranteed by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique venue identifier (e.g. `KovZpaFEZe`).
    pub id: String,

    pub name: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub url: Option<String>,

    pub locale: Option<String>,

    pub test: Option<bool>,

    pub postal_code: Option<String>,

    pub timezone: Option<String>,

    pub city: Option<City>,

    pub state: Option<State>,

    pub country: Option<Country>,

    pub address: Option<Address>,

    pub location: Option<Location>,

    #[serde(default)]
    pub markets: Vec<Market>,

    #[serde(default)]
    pub dmas: Vec<Dma>,

    #[serde(default)]
    pub images: Vec<Image>,

    /// Social media handles, e.g. `{"twitter": {"handle": "@FoxTheatreATL"}}`.
    pub social: Option<serde_json::Value>,

    pub general_info: Option<serde_json::Value>,

    pub box_office_info: Option<serde_json::Value>,

    pub parking_detail: Option<serde_json::Value>,

    pub accessible_seating_detail: Option<serde_json::Value>,

    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Venue {
    /// `"City, ST"` when either part is known.
    pub fn locality(&self) -> Option<String> {
        let city = self.city.as_ref().and_then(|c| c.name.as_deref());
        let state = self.state.as_ref().and_then(|s| s.state_code.as_deref());
        match (city, state) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub name: Option<String>,

    pub state_code: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: Option<String>,

    pub country_code: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,

    pub line2: Option<String>,

    pub line3: Option<String>,
}

/// Coordinates as sent by the API, which encodes them as strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Option<String>,

    pub longitude: Option<String>,
}
impl Location {
    /// `(latitude, longitude)` if both parse as numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.as_deref()?.trim().parse().ok()?;
        let long = self.longitude.as_deref()?.trim().parse().ok()?;
        Some((lat, long))
    }
}

/// A Ticketmaster market (metro area).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Market {
    pub id: Option<String>,

    pub name: Option<String>,
}

/// A designated market area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dma {
    pub id: Option<i64>,
}
