//! The resource kinds exposed by the Discovery API.

use crate::query::{Param, SortOrder};

/// A searchable resource. Each one maps to a `/{name}.json` search endpoint
/// and a `/{name}/{id}.json` lookup endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    Venues,
    Attractions,
    Classifications,
}

/// Options accepted by every resource.
const COMMON_PARAMS: &[Param] = &[
    Param::Id,
    Param::Keyword,
    Param::Sort,
    Param::Page,
    Param::Size,
    Param::Locale,
    Param::IncludeTest,
    Param::Source,
];

const EVENT_PARAMS: &[Param] = &[
    Param::LatLong,
    Param::Radius,
    Param::Unit,
    Param::StartDateTime,
    Param::EndDateTime,
    Param::OnsaleStartDateTime,
    Param::OnsaleEndDateTime,
    Param::CountryCode,
    Param::StateCode,
    Param::VenueId,
    Param::AttractionId,
    Param::SegmentId,
    Param::SegmentName,
    Param::ClassificationName,
    Param::ClassificationId,
    Param::MarketId,
    Param::PromoterId,
    Param::DmaId,
    Param::IncludeTba,
    Param::IncludeTbd,
    Param::ClientVisibility,
];

const VENUE_PARAMS: &[Param] = &[Param::CountryCode, Param::StateCode];

impl Resource {
    /// Path segment and `_embedded` key used by the API for this resource.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Venues => "venues",
            Resource::Attractions => "attractions",
            Resource::Classifications => "classifications",
        }
    }

    /// Sort order sent when a search does not choose one. Events come back
    /// soonest first; other resources keep the API's own default.
    pub fn default_sort(&self) -> Option<SortOrder> {
        match self {
            Resource::Events => Some(SortOrder::DateAsc),
            _ => None,
        }
    }

    /// Returns `true` if `param` may be sent to this resource's search endpoint.
    pub fn allows(&self, param: Param) -> bool {
        if COMMON_PARAMS.contains(&param) {
            return true;
        }
        match self {
            Resource::Events => EVENT_PARAMS.contains(&param),
            Resource::Venues => VENUE_PARAMS.contains(&param),
            Resource::Attractions | Resource::Classifications => false,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_params() {
        assert!(Resource::Events.allows(Param::StartDateTime));
        assert!(Resource::Venues.allows(Param::StateCode));
        assert!(!Resource::Venues.allows(Param::LatLong));
        assert!(Resource::Attractions.allows(Param::Keyword));
        assert!(!Resource::Classifications.allows(Param::MarketId));
        assert_eq!(Resource::Events.default_sort(), Some(SortOrder::DateAsc));
        assert_eq!(Resource::Venues.default_sort(), None);
    }
}
