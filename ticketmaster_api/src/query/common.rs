//! Shared query infrastructure: the [`Query`] trait, the [`Criteria`] map, the
//! [`Param`] vocabulary, and the enumerated option values.

use std::str::FromStr;

use crate::{types::Record, Error};

use super::encode::{encode, EncodedQuery};

/// Trait implemented by all query builders. Provides encoding and shared
/// builder methods for the options every resource accepts.
pub trait Query {
    /// The record type this query searches for.
    type Record: Record;

    /// Returns the raw criteria collected so far.
    fn criteria(&self) -> &Criteria;

    /// Returns a mutable reference to the raw criteria.
    fn criteria_mut(&mut self) -> &mut Criteria;

    /// Validates every option and encodes it for the resource's endpoint.
    fn encode(&self) -> Result<EncodedQuery, Error> {
        encode(<Self::Record as Record>::RESOURCE, self.criteria())
    }

    /// Sets an option by name. The name may be the API's (`stateCode`) or
    /// snake_case (`state_code`). Validation happens at encode time.
    fn with_param(mut self, name: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(name, value);
        self
    }

    /// Sets several options by name.
    fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in params {
            self.criteria_mut().set(name.as_ref(), value);
        }
        self
    }

    /// Full-text keyword search.
    fn with_keyword(mut self, keyword: &str) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Keyword.api_name(), keyword);
        self
    }

    /// Restricts results to the entity with this ID.
    fn with_id(mut self, id: &str) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Id.api_name(), id);
        self
    }

    /// Sets the sort order.
    fn with_sort(mut self, sort: SortOrder) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Sort.api_name(), sort.to_string());
        self
    }

    /// Sets the first page to fetch (0-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Page.api_name(), page.to_string());
        self
    }

    /// Sets the number of results per page, overriding the client default.
    fn with_page_size(mut self, size: u32) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Size.api_name(), size.to_string());
        self
    }

    /// Sets the response locale (API default: `en`).
    fn with_locale(mut self, locale: &str) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut().set(Param::Locale.api_name(), locale);
        self
    }

    /// Whether entities flagged as test data are returned.
    fn with_include_test(mut self, include: Inclusion) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut()
            .set(Param::IncludeTest.api_name(), include.to_string());
        self
    }

    /// Filters entities by ticketing source.
    fn with_source(mut self, source: Source) -> Self
    where
        Self: Sized,
    {
        self.criteria_mut()
            .set(Param::Source.api_name(), source.to_string());
        self
    }
}

/// An ordered set of named search options with raw string values.
///
/// Setting the same name twice replaces the earlier value. Nothing is
/// validated until the criteria are encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    entries: Vec<(String, String)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any earlier value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `param` was set under either of its names.
    pub fn contains_param(&self, param: Param) -> bool {
        self.entries
            .iter()
            .any(|(n, _)| Param::from_name(n) == Some(param))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = Criteria::new();
        for (name, value) in iter {
            criteria.set(name.as_ref(), value);
        }
        criteria
    }
}

/// Every search option the client knows how to encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Id,
    Keyword,
    Sort,
    Page,
    Size,
    Locale,
    IncludeTest,
    Source,
    LatLong,
    Radius,
    Unit,
    StartDateTime,
    EndDateTime,
    OnsaleStartDateTime,
    OnsaleEndDateTime,
    CountryCode,
    StateCode,
    VenueId,
    AttractionId,
    SegmentId,
    SegmentName,
    ClassificationName,
    ClassificationId,
    MarketId,
    PromoterId,
    DmaId,
    IncludeTba,
    IncludeTbd,
    ClientVisibility,
}

/// (param, API name, snake_case alias)
const PARAM_NAMES: &[(Param, &str, &str)] = &[
    (Param::Id, "id", "id"),
    (Param::Keyword, "keyword", "keyword"),
    (Param::Sort, "sort", "sort"),
    (Param::Page, "page", "page"),
    (Param::Size, "size", "size"),
    (Param::Locale, "locale", "locale"),
    (Param::IncludeTest, "includeTest", "include_test"),
    (Param::Source, "source", "source"),
    (Param::LatLong, "latlong", "lat_long"),
    (Param::Radius, "radius", "radius"),
    (Param::Unit, "unit", "unit"),
    (Param::StartDateTime, "startDateTime", "start_date_time"),
    (Param::EndDateTime, "endDateTime", "end_date_time"),
    (
        Param::OnsaleStartDateTime,
        "onsaleStartDateTime",
        "onsale_start_date_time",
    ),
    (
        Param::OnsaleEndDateTime,
        "onsaleEndDateTime",
        "onsale_end_date_time",
    ),
    (Param::CountryCode, "countryCode", "country_code"),
    (Param::StateCode, "stateCode", "state_code"),
    (Param::VenueId, "venueId", "venue_id"),
    (Param::AttractionId, "attractionId", "attraction_id"),
    (Param::SegmentId, "segmentId", "segment_id"),
    (Param::SegmentName, "segmentName", "segment_name"),
    (
        Param::ClassificationName,
        "classificationName",
        "classification_name",
    ),
    (
        Param::ClassificationId,
        "classificationId",
        "classification_id",
    ),
    (Param::MarketId, "marketId", "market_id"),
    (Param::PromoterId, "promoterId", "promoter_id"),
    (Param::DmaId, "dmaId", "dma_id"),
    (Param::IncludeTba, "includeTBA", "include_tba"),
    (Param::IncludeTbd, "includeTBD", "include_tbd"),
    (Param::ClientVisibility, "clientVisibility", "client_visibility"),
];

impl Param {
    /// The query-string name the API expects.
    pub fn api_name(&self) -> &'static str {
        PARAM_NAMES
            .iter()
            .find(|(p, _, _)| p == self)
            .map(|(_, api, _)| *api)
            .unwrap_or_default()
    }

    /// Resolves either the API name or the snake_case alias.
    pub fn from_name(name: &str) -> Option<Param> {
        PARAM_NAMES
            .iter()
            .find(|(_, api, snake)| *api == name || *snake == name)
            .map(|(p, _, _)| *p)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Sort orders accepted by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    RelevanceAsc,
    RelevanceDesc,
    Random,
    IdAsc,
    IdDesc,
    // Event-only orders below.
    DateAsc,
    DateDesc,
    NameDateAsc,
    NameDateDesc,
    DateNameAsc,
    DateNameDesc,
    DistanceAsc,
    DistanceDateAsc,
    OnsaleStartDateAsc,
    VenueNameAsc,
    VenueNameDesc,
}

const SORT_NAMES: &[(SortOrder, &str)] = &[
    (SortOrder::NameAsc, "name,asc"),
    (SortOrder::NameDesc, "name,desc"),
    (SortOrder::RelevanceAsc, "relevance,asc"),
    (SortOrder::RelevanceDesc, "relevance,desc"),
    (SortOrder::Random, "random"),
    (SortOrder::IdAsc, "id,asc"),
    (SortOrder::IdDesc, "id,desc"),
    (SortOrder::DateAsc, "date,asc"),
    (SortOrder::DateDesc, "date,desc"),
    (SortOrder::NameDateAsc, "name,date,asc"),
    (SortOrder::NameDateDesc, "name,date,desc"),
    (SortOrder::DateNameAsc, "date,name,asc"),
    (SortOrder::DateNameDesc, "date,name,desc"),
    (SortOrder::DistanceAsc, "distance,asc"),
    (SortOrder::DistanceDateAsc, "distance,date,asc"),
    (SortOrder::OnsaleStartDateAsc, "onSaleStartDate,asc"),
    (SortOrder::VenueNameAsc, "venueName,asc"),
    (SortOrder::VenueNameDesc, "venueName,desc"),
];

impl SortOrder {
    /// Orders that only make sense for event searches.
    pub fn events_only(&self) -> bool {
        !matches!(
            self,
            SortOrder::NameAsc
                | SortOrder::NameDesc
                | SortOrder::RelevanceAsc
                | SortOrder::RelevanceDesc
                | SortOrder::Random
                | SortOrder::IdAsc
                | SortOrder::IdDesc
        )
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = SORT_NAMES
            .iter()
            .find(|(s, _)| s == self)
            .map(|(_, name)| *name)
            .unwrap_or_default();
        f.write_str(name)
    }
}
impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SORT_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(sort, _)| *sort)
            .ok_or(())
    }
}

/// Tri-state inclusion flag used by `includeTBA`, `includeTBD` and `includeTest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inclusion {
    Yes,
    /// API default.
    #[default]
    No,
    /// Return only the flagged entities.
    Only,
}
impl std::fmt::Display for Inclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Inclusion::Yes => "yes",
                Inclusion::No => "no",
                Inclusion::Only => "only",
            }
        )
    }
}
impl FromStr for Inclusion {
    type Err = ();

    /// Accepts `yes`/`no`/`only` in any case, and `true`/`false` as `yes`/`no`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "true" => Ok(Inclusion::Yes),
            "no" | "false" => Ok(Inclusion::No),
            "only" => Ok(Inclusion::Only),
            _ => Err(()),
        }
    }
}
impl From<bool> for Inclusion {
    fn from(value: bool) -> Self {
        if value {
            Inclusion::Yes
        } else {
            Inclusion::No
        }
    }
}

/// Unit of a search radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Miles,
    Km,
}
impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Unit::Miles => "miles",
                Unit::Km => "km",
            }
        )
    }
}
impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "miles" => Ok(Unit::Miles),
            "km" => Ok(Unit::Km),
            _ => Err(()),
        }
    }
}

/// Ticketing platform an entity originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Ticketmaster,
    Universe,
    Frontgate,
    Tmr,
}
impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Source::Ticketmaster => "ticketmaster",
                Source::Universe => "universe",
                Source::Frontgate => "frontgate",
                Source::Tmr => "tmr",
            }
        )
    }
}
impl FromStr for Source {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ticketmaster" => Ok(Source::Ticketmaster),
            "universe" => Ok(Source::Universe),
            "frontgate" => Ok(Source::Frontgate),
            "tmr" => Ok(Source::Tmr),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_replaces_duplicate_names() {
        let mut criteria = Criteria::new();
        criteria.set("keyword", "jazz");
        criteria.set("stateCode", "GA");
        criteria.set("keyword", "blues");
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria.get("keyword"), Some("blues"));
        assert!(criteria.contains_param(Param::StateCode));
        assert!(!criteria.contains_param(Param::Size));
    }

    #[test]
    fn test_param_names() {
        assert_eq!(Param::from_name("stateCode"), Some(Param::StateCode));
        assert_eq!(Param::from_name("state_code"), Some(Param::StateCode));
        assert_eq!(Param::from_name("includeTBA"), Some(Param::IncludeTba));
        assert_eq!(Param::from_name("StateCode"), None);
        assert_eq!(Param::from_name("apikey"), None);
        assert_eq!(Param::IncludeTbd.api_name(), "includeTBD");
    }

    #[test]
    fn test_sort_order_round_trip() {
        for (sort, name) in SORT_NAMES {
            assert_eq!(sort.to_string(), *name);
            assert_eq!(SortOrder::from_str(name), Ok(*sort));
        }
        assert!(SortOrder::from_str("popularity,desc").is_err());
        assert!(SortOrder::DateAsc.events_only());
        assert!(!SortOrder::NameAsc.events_only());
    }

    #[test]
    fn test_inclusion_accepts_booleans() {
        assert_eq!(Inclusion::from_str("TRUE"), Ok(Inclusion::Yes));
        assert_eq!(Inclusion::from_str("false"), Ok(Inclusion::No));
        assert_eq!(Inclusion::from_str("Only"), Ok(Inclusion::Only));
        assert!(Inclusion::from_str("maybe").is_err());
        assert_eq!(Inclusion::from(true), Inclusion::Yes);
    }
}
