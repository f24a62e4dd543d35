use chrono::{DateTime, Utc};

use crate::types::Event;

use super::{
    common::{Criteria, Inclusion, Param, Unit},
    encode::format_date_time,
    Query,
};

/// Search criteria for `/events`.
#[derive(Clone, Debug, Default)]
pub struct EventQuery {
    pub criteria: Criteria,
}

impl Query for EventQuery {
    type Record = Event;

    fn criteria(&self) -> &Criteria {
        &self.criteria
    }
    fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }
}

impl EventQuery {
    fn with(mut self, param: Param, value: impl Into<String>) -> Self {
        self.criteria.set(param.api_name(), value);
        self
    }

    /// Events starting at or after this instant.
    pub fn with_start_date_time(self, start: DateTime<Utc>) -> Self {
        self.with(Param::StartDateTime, format_date_time(&start))
    }
    /// Events starting at or before this instant.
    pub fn with_end_date_time(self, end: DateTime<Utc>) -> Self {
        self.with(Param::EndDateTime, format_date_time(&end))
    }

    pub fn with_onsale_start_date_time(self, start: DateTime<Utc>) -> Self {
        self.with(Param::OnsaleStartDateTime, format_date_time(&start))
    }
    pub fn with_onsale_end_date_time(self, end: DateTime<Utc>) -> Self {
        self.with(Param::OnsaleEndDateTime, format_date_time(&end))
    }

    /// Centers the search on a point. Combine with [`Self::with_radius`].
    pub fn with_lat_long(self, latitude: f64, longitude: f64) -> Self {
        self.with(Param::LatLong, format!("{},{}", latitude, longitude))
    }
    pub fn with_radius(self, radius: u32) -> Self {
        self.with(Param::Radius, radius.to_string())
    }
    pub fn with_unit(self, unit: Unit) -> Self {
        self.with(Param::Unit, unit.to_string())
    }

    /// Two-letter country code (e.g. `US`).
    pub fn with_country_code(self, country_code: &str) -> Self {
        self.with(Param::CountryCode, country_code)
    }
    /// Two-letter state code (e.g. `GA`, not `Georgia`).
    pub fn with_state_code(self, state_code: &str) -> Self {
        self.with(Param::StateCode, state_code)
    }

    pub fn with_venue_id(self, venue_id: &str) -> Self {
        self.with(Param::VenueId, venue_id)
    }
    pub fn with_attraction_id(self, attraction_id: &str) -> Self {
        self.with(Param::AttractionId, attraction_id)
    }
    pub fn with_promoter_id(self, promoter_id: &str) -> Self {
        self.with(Param::PromoterId, promoter_id)
    }

    pub fn with_segment_id(self, segment_id: &str) -> Self {
        self.with(Param::SegmentId, segment_id)
    }
    pub fn with_segment_name(self, segment_name: &str) -> Self {
        self.with(Param::SegmentName, segment_name)
    }

    /// Any classification level: segment, genre, subgenre, type or subtype.
    pub fn with_classification_name(self, classification_name: &str) -> Self {
        self.with(Param::ClassificationName, classification_name)
    }
    pub fn with_classification_id(self, classification_id: &str) -> Self {
        self.with(Param::ClassificationId, classification_id)
    }

    pub fn with_market_id(self, market_id: u32) -> Self {
        self.with(Param::MarketId, market_id.to_string())
    }
    pub fn with_dma_id(self, dma_id: u32) -> Self {
        self.with(Param::DmaId, dma_id.to_string())
    }

    /// Events whose date is still to be announced.
    pub fn with_include_tba(self, include: Inclusion) -> Self {
        self.with(Param::IncludeTba, include.to_string())
    }
    /// Events whose date is still to be defined.
    pub fn with_include_tbd(self, include: Inclusion) -> Self {
        self.with(Param::IncludeTbd, include.to_string())
    }

    pub fn with_client_visibility(self, client_visibility: &str) -> Self {
        self.with(Param::ClientVisibility, client_visibility)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::query::{Inclusion, Query, SortOrder, Unit};

    use super::EventQuery;

    #[test]
    fn test_event_query() {
        let start = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 19, 0, 0).unwrap();
        let encoded = EventQuery::default()
            .with_keyword("LCD Soundsystem")
            .with_start_date_time(start)
            .with_lat_long(33.7838737, -84.366088)
            .with_radius(3)
            .with_unit(Unit::Miles)
            .with_market_id(10)
            .with_include_tba(Inclusion::Yes)
            .with_sort(SortOrder::DateAsc)
            .encode()
            .unwrap();

        assert_eq!(encoded.get("keyword"), Some("LCD Soundsystem"));
        assert_eq!(encoded.get("startDateTime"), Some("2024-06-01T19:00:00Z"));
        assert_eq!(encoded.get("latlong"), Some("33.7838737,-84.366088"));
        assert_eq!(encoded.get("radius"), Some("3"));
        assert_eq!(encoded.get("unit"), Some("miles"));
        assert_eq!(encoded.get("marketId"), Some("10"));
        assert_eq!(encoded.get("includeTBA"), Some("yes"));
        assert_eq!(encoded.get("sort"), Some("date,asc"));
        assert_eq!(encoded.len(), 8);
    }

    #[test]
    fn test_event_query_raw_params() {
        let encoded = EventQuery::default()
            .with_params([("classification_name", "Hip-Hop"), ("venueId", "KovZpZAJledA")])
            .encode()
            .unwrap();
        assert_eq!(
            encoded.to_query_string(),
            "classificationName=Hip-Hop&venueId=KovZpZAJledA"
        );
    }
}
