use chrono::{TimeZone, Utc};
use ticketmaster_api::{
    AttractionQuery, ClassificationQuery, Error, EventQuery, Inclusion, Query, SortOrder, Source,
    Unit, VenueQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/discovery/v2/events.json").unwrap()
}

#[test]
fn event_query_defaults() {
    let encoded = EventQuery::default().encode().unwrap();
    assert!(encoded.is_empty());
    let url = encoded.add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn event_query_with_filters() {
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap();
    let encoded = EventQuery::default()
        .with_keyword("hawks")
        .with_start_date_time(start)
        .with_end_date_time(end)
        .with_state_code("ga")
        .with_market_id(10)
        .with_include_tba(Inclusion::No)
        .encode()
        .unwrap();

    assert_eq!(encoded.len(), 6);
    assert_eq!(encoded.get("keyword"), Some("hawks"));
    assert_eq!(encoded.get("startDateTime"), Some("2026-03-01T00:00:00Z"));
    assert_eq!(encoded.get("endDateTime"), Some("2026-03-31T23:59:59Z"));
    assert_eq!(encoded.get("stateCode"), Some("GA"));
    assert_eq!(encoded.get("marketId"), Some("10"));
    assert_eq!(encoded.get("includeTBA"), Some("no"));

    let url = encoded.add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.starts_with("keyword=hawks&startDateTime=2026-03-01T00%3A00%3A00Z"));
}

#[test]
fn event_query_geo_search() {
    let encoded = EventQuery::default()
        .with_lat_long(33.7838737, -84.366088)
        .with_radius(10)
        .with_unit(Unit::Miles)
        .with_sort(SortOrder::DistanceAsc)
        .encode()
        .unwrap();
    assert_eq!(encoded.get("latlong"), Some("33.7838737,-84.366088"));
    assert_eq!(encoded.get("radius"), Some("10"));
    assert_eq!(encoded.get("unit"), Some("miles"));
    assert_eq!(encoded.get("sort"), Some("distance,asc"));
}

#[test]
fn snake_case_and_api_names_are_equivalent() {
    let snake = EventQuery::default()
        .with_param("state_code", "TX")
        .with_param("classification_name", "Hip-Hop")
        .encode()
        .unwrap();
    let camel = EventQuery::default()
        .with_param("stateCode", "TX")
        .with_param("classificationName", "Hip-Hop")
        .encode()
        .unwrap();
    assert_eq!(snake, camel);
}

#[test]
fn setting_twice_replaces() {
    let encoded = VenueQuery::default()
        .with_keyword("fox")
        .with_keyword("tabernacle")
        .with_param("keyword", "masquerade")
        .encode()
        .unwrap();
    assert_eq!(encoded.len(), 1);
    assert_eq!(encoded.get("keyword"), Some("masquerade"));
}

#[test]
fn venue_query_with_filters() {
    let encoded = VenueQuery::default()
        .with_keyword("arena")
        .with_country_code("us")
        .with_state_code("NY")
        .with_sort(SortOrder::NameAsc)
        .with_source(Source::Ticketmaster)
        .with_page(2)
        .with_page_size(50)
        .encode()
        .unwrap();
    assert_eq!(
        encoded.to_query_string(),
        "keyword=arena&countryCode=US&stateCode=NY&sort=name%2Casc&source=ticketmaster&page=2&size=50"
    );
}

#[test]
fn venue_query_rejects_event_sort() {
    let err = VenueQuery::default()
        .with_sort(SortOrder::DateAsc)
        .encode()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref option, .. } if option == "sort"));
}

#[test]
fn attraction_query_rejects_event_options() {
    let err = AttractionQuery::default()
        .with_param("startDateTime", "2026-03-01T00:00:00Z")
        .encode()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let encoded = AttractionQuery::default()
        .with_keyword("radiohead")
        .with_include_test(Inclusion::Only)
        .with_locale("en-us")
        .encode()
        .unwrap();
    assert_eq!(encoded.get("includeTest"), Some("only"));
}

#[test]
fn classification_query_with_id() {
    let encoded = ClassificationQuery::default()
        .with_id("KZFzniwnSyZfZ7v7nJ")
        .encode()
        .unwrap();
    assert_eq!(encoded.pairs().len(), 1);
    assert_eq!(encoded.get("id"), Some("KZFzniwnSyZfZ7v7nJ"));
}

#[test]
fn unknown_option_is_rejected() {
    let err = EventQuery::default()
        .with_param("startDate", "2026-03-01")
        .encode()
        .unwrap_err();
    match err {
        Error::Validation { option, .. } => assert_eq!(option, "startDate"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn malformed_values_are_rejected() {
    for (name, value) in [
        ("startDateTime", "2026-03-01"),
        ("latlong", "91,0"),
        ("radius", "-5"),
        ("size", "0"),
        ("size", "201"),
        ("unit", "furlongs"),
        ("includeTBD", "maybe"),
        ("stateCode", "Georgia"),
        ("keyword", "   "),
    ] {
        let result = EventQuery::default().with_param(name, value).encode();
        assert!(
            matches!(result, Err(Error::Validation { .. })),
            "{}={} should be rejected",
            name,
            value
        );
    }
}
