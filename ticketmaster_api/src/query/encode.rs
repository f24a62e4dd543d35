//! Validation and encoding of search criteria into API query parameters.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use url::Url;

use crate::{resource::Resource, Error};

use super::common::{Criteria, Inclusion, Param, SortOrder, Source, Unit};

/// Timestamp format required by every date-time filter.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Largest page size the API serves.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Byte limit for free-text options.
pub const MAX_TEXT_LENGTH: usize = 256;

/// Formats a timestamp the way date-time filters expect it.
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Validated query parameters, keyed by their API names, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedQuery {
    pairs: Vec<(String, String)>,
}

impl EncodedQuery {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded` string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends these parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.pairs.iter());
        }
        url
    }
}

impl std::fmt::Display for EncodedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Validates `criteria` against what `resource` accepts and encodes it.
///
/// Fails on the first option that is unknown, not accepted by the resource,
/// or malformed. Nothing is returned on failure.
pub fn encode(resource: Resource, criteria: &Criteria) -> Result<EncodedQuery, Error> {
    let mut encoded = EncodedQuery::default();
    for (name, value) in criteria.iter() {
        let param = Param::from_name(name).ok_or_else(|| {
            if name.eq_ignore_ascii_case("apikey") {
                Error::validation(name, "the API key is set on the client")
            } else {
                Error::validation(name, "unknown search option")
            }
        })?;
        if !resource.allows(param) {
            return Err(Error::validation(
                name,
                format!("not a {} search option", resource),
            ));
        }
        let value = normalize(resource, param, value).map_err(|reason| {
            tracing::debug!("Rejected {}={:?}: {}", name, value, reason);
            Error::validation(name, reason)
        })?;
        encoded.set(param.api_name(), value);
    }
    Ok(encoded)
}

fn normalize(resource: Resource, param: Param, value: &str) -> Result<String, String> {
    match param {
        Param::StartDateTime
        | Param::EndDateTime
        | Param::OnsaleStartDateTime
        | Param::OnsaleEndDateTime => date_time(value),
        Param::LatLong => lat_long(value),
        Param::Radius | Param::Page | Param::MarketId | Param::DmaId => {
            whole_number(value).map(|n| n.to_string())
        }
        Param::Size => {
            let size = whole_number(value)?;
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                return Err(format!("must be between 1 and {}", MAX_PAGE_SIZE));
            }
            Ok(size.to_string())
        }
        Param::Unit => Unit::from_str(value)
            .map(|u| u.to_string())
            .map_err(|_| "expected 'miles' or 'km'".to_string()),
        Param::IncludeTest | Param::IncludeTba | Param::IncludeTbd => Inclusion::from_str(value)
            .map(|i| i.to_string())
            .map_err(|_| "expected 'yes', 'no' or 'only'".to_string()),
        Param::CountryCode | Param::StateCode => region_code(value),
        Param::Sort => {
            let sort = SortOrder::from_str(value)
                .map_err(|_| format!("unknown sort order '{}'", value.trim()))?;
            if sort.events_only() && resource != Resource::Events {
                return Err(format!("sort order '{}' only applies to events", sort));
            }
            Ok(sort.to_string())
        }
        Param::Source => Source::from_str(value)
            .map(|s| s.to_string())
            .map_err(|_| "expected 'ticketmaster', 'universe', 'frontgate' or 'tmr'".to_string()),
        Param::Id
        | Param::Keyword
        | Param::Locale
        | Param::VenueId
        | Param::AttractionId
        | Param::SegmentId
        | Param::SegmentName
        | Param::ClassificationName
        | Param::ClassificationId
        | Param::PromoterId
        | Param::ClientVisibility => text(value),
    }
}

fn date_time(value: &str) -> Result<String, String> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_TIME_FORMAT)
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .map_err(|_| "expected a timestamp formatted as YYYY-MM-DDTHH:mm:ssZ".to_string())
}

fn lat_long(value: &str) -> Result<String, String> {
    let mut parts = value.split(',');
    let (Some(lat), Some(long), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected 'latitude,longitude'".to_string());
    };
    let (lat, long) = (lat.trim(), long.trim());
    let coordinate = |s: &str, bound: f64, axis: &str| -> Result<(), String> {
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v.abs() <= bound => Ok(()),
            Ok(_) => Err(format!("{} must be within +/-{}", axis, bound)),
            Err(_) => Err(format!("{} '{}' is not a number", axis, s)),
        }
    };
    coordinate(lat, 90.0, "latitude")?;
    coordinate(long, 180.0, "longitude")?;
    Ok(format!("{},{}", lat, long))
}

fn whole_number(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a non-negative whole number", value.trim()))
}

fn region_code(value: &str) -> Result<String, String> {
    let code = value.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("'{}' is not a two-letter code", code))
    }
}

/// Strips control characters, trims, and enforces a byte-length limit.
fn text(value: &str) -> Result<String, String> {
    if value.len() > MAX_TEXT_LENGTH {
        return Err(format!(
            "exceeds maximum length of {} bytes",
            MAX_TEXT_LENGTH
        ));
    }
    let sanitized: String = value
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err("empty value".to_string());
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn criteria(pairs: &[(&str, &str)]) -> Criteria {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_encode_exact_options() {
        let encoded = encode(
            Resource::Events,
            &criteria(&[
                ("keyword", "  Radiohead "),
                ("state_code", "ga"),
                ("startDateTime", "2024-06-01T19:00:00Z"),
                ("latlong", "33.7838737, -84.366088"),
                ("include_tba", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(
            encoded.pairs(),
            &[
                ("keyword".to_string(), "Radiohead".to_string()),
                ("stateCode".to_string(), "GA".to_string()),
                ("startDateTime".to_string(), "2024-06-01T19:00:00Z".to_string()),
                ("latlong".to_string(), "33.7838737,-84.366088".to_string()),
                ("includeTBA".to_string(), "yes".to_string()),
            ]
        );
        assert_eq!(
            encoded.to_query_string(),
            "keyword=Radiohead&stateCode=GA&startDateTime=2024-06-01T19%3A00%3A00Z\
             &latlong=33.7838737%2C-84.366088&includeTBA=yes"
        );
    }

    #[test]
    fn test_encode_empty_criteria() {
        let encoded = encode(Resource::Venues, &Criteria::new()).unwrap();
        assert!(encoded.is_empty());
        assert_eq!(encoded.to_query_string(), "");
    }

    #[test]
    fn test_encode_aliases_collapse_to_one_param() {
        let encoded = encode(
            Resource::Venues,
            &criteria(&[("stateCode", "GA"), ("state_code", "TN")]),
        )
        .unwrap();
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded.get("stateCode"), Some("TN"));
    }

    #[test_case("venue_name", "Tabernacle"; "unknown option")]
    #[test_case("apikey", "secret"; "reserved api key")]
    #[test_case("StateCode", "GA"; "wrong case")]
    fn test_encode_rejects_unsupported_names(name: &str, value: &str) {
        let err = encode(Resource::Events, &criteria(&[(name, value)])).unwrap_err();
        match err {
            Error::Validation { option, .. } => assert_eq!(option, name),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test_case(Resource::Venues, "latlong", "33.7,-84.3"; "venues take no geo point")]
    #[test_case(Resource::Attractions, "stateCode", "GA"; "attractions take no state")]
    #[test_case(Resource::Classifications, "startDateTime", "2024-06-01T19:00:00Z"; "classifications take no dates")]
    #[test_case(Resource::Venues, "sort", "date,asc"; "event-only sort on venues")]
    fn test_encode_rejects_options_of_other_resources(resource: Resource, name: &str, value: &str) {
        let err = encode(resource, &criteria(&[(name, value)])).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test_case("startDateTime", "2024-06-01"; "date without time")]
    #[test_case("endDateTime", "2024-06-01 19:00:00"; "space separator")]
    #[test_case("onsaleStartDateTime", "2024-06-01T19:00:00+02:00"; "offset instead of Z")]
    #[test_case("startDateTime", "2024-13-01T19:00:00Z"; "month out of range")]
    #[test_case("latlong", "33.7"; "single coordinate")]
    #[test_case("latlong", "33.7,-84.3,1"; "three coordinates")]
    #[test_case("latlong", "91,10"; "latitude out of range")]
    #[test_case("latlong", "north,west"; "not numeric")]
    #[test_case("radius", "1.5"; "fractional radius")]
    #[test_case("size", "0"; "zero page size")]
    #[test_case("size", "201"; "page size above maximum")]
    #[test_case("page", "-1"; "negative page")]
    #[test_case("marketId", "atlanta"; "non numeric market")]
    #[test_case("unit", "furlongs"; "unknown unit")]
    #[test_case("includeTBA", "sometimes"; "unknown inclusion")]
    #[test_case("stateCode", "Georgia"; "state name")]
    #[test_case("countryCode", "U5"; "digit in country")]
    #[test_case("sort", "popularity,desc"; "unknown sort")]
    #[test_case("source", "stubhub"; "unknown source")]
    #[test_case("keyword", "   "; "blank keyword")]
    fn test_encode_rejects_malformed_values(name: &str, value: &str) {
        let err = encode(Resource::Events, &criteria(&[(name, value)])).unwrap_err();
        match err {
            Error::Validation { option, .. } => assert_eq!(option, name),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_fails_on_first_invalid_option() {
        let err = encode(
            Resource::Events,
            &criteria(&[("keyword", "jazz"), ("radius", "far"), ("size", "0")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_encode_rejects_oversized_text() {
        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        assert!(encode(Resource::Events, &criteria(&[("keyword", &long)])).is_err());
    }

    #[test]
    fn test_add_to_url_keeps_existing_query() {
        let url = Url::parse("https://example.com/events.json?apikey=k").unwrap();
        let encoded = encode(Resource::Events, &criteria(&[("keyword", "jazz & blues")])).unwrap();
        assert_eq!(
            encoded.add_to_url(&url).as_str(),
            "https://example.com/events.json?apikey=k&keyword=jazz+%26+blues"
        );
    }

    #[test]
    fn test_format_date_time() {
        let dt = DateTime::parse_from_rfc3339("2024-06-01T19:00:00+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date_time(&dt), "2024-06-01T19:00:00Z");
    }
}
