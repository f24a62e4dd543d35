use tabled::settings::Style;
use tabled::{Table, Tabled};
use ticketmaster_api::types::{Attraction, Classification, ClassificationNode, Event, Venue};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Venue")]
    venue: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Genres")]
    genres: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct VenueRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct AttractionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Segment")]
    segment: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct ClassificationRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Children")]
    children: String,
    #[tabled(rename = "ID")]
    id: String,
}

// -- Row builders --

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| {
            let venue = e.venues().first();
            let start = e.dates.as_ref().and_then(|d| d.start.as_ref());
            EventRow {
                date: start
                    .map(|s| match (&s.local_date, &s.local_time) {
                        (Some(date), Some(time)) => format!("{} {}", date, time),
                        (Some(date), None) => date.to_string(),
                        _ => "TBA".to_string(),
                    })
                    .unwrap_or_else(|| "TBA".to_string()),
                name: e.name.clone(),
                venue: venue.and_then(|v| v.name.clone()).unwrap_or_default(),
                city: venue.and_then(|v| v.locality()).unwrap_or_default(),
                genres: e.genre_names().join(", "),
                price: e
                    .price_ranges
                    .first()
                    .map(|p| {
                        format_price_range(p.min, p.max, p.currency.as_deref().unwrap_or("USD"))
                    })
                    .unwrap_or_default(),
                status: e
                    .dates
                    .as_ref()
                    .and_then(|d| d.status.as_ref())
                    .and_then(|s| s.code.clone())
                    .unwrap_or_default(),
                id: e.id.clone(),
            }
        })
        .collect()
}

fn build_venue_rows(venues: &[Venue]) -> Vec<VenueRow> {
    venues
        .iter()
        .map(|v| VenueRow {
            name: v.name.clone().unwrap_or_default(),
            city: v.locality().unwrap_or_default(),
            country: v
                .country
                .as_ref()
                .and_then(|c| c.country_code.clone())
                .unwrap_or_default(),
            address: v
                .address
                .as_ref()
                .and_then(|a| a.line1.clone())
                .unwrap_or_default(),
            id: v.id.clone(),
        })
        .collect()
}

fn build_attraction_rows(attractions: &[Attraction]) -> Vec<AttractionRow> {
    attractions
        .iter()
        .map(|a| {
            let primary = a
                .classifications
                .iter()
                .find(|c| c.primary == Some(true))
                .or_else(|| a.classifications.first());
            AttractionRow {
                name: a.name.clone(),
                segment: primary
                    .and_then(|c| c.segment.as_ref())
                    .map(|s| s.name.clone())
                    .unwrap_or_default(),
                genre: primary
                    .and_then(|c| c.genre.as_ref())
                    .map(|g| g.name.clone())
                    .unwrap_or_default(),
                id: a.id.clone(),
            }
        })
        .collect()
}

fn build_classification_rows(classifications: &[Classification]) -> Vec<ClassificationRow> {
    classifications
        .iter()
        .filter_map(|c| {
            if let Some(segment) = &c.segment {
                return Some(ClassificationRow {
                    kind: "segment".to_string(),
                    name: segment.name.clone(),
                    children: join_names(segment.genres().iter().map(|g| g.name.as_str())),
                    id: segment.id.clone(),
                });
            }
            c.kind.as_ref().map(|t| ClassificationRow {
                kind: "type".to_string(),
                name: t.name.clone().unwrap_or_default(),
                children: join_names(t.subtypes().iter().filter_map(|s| s.name.as_deref())),
                id: t.id.clone().unwrap_or_default(),
            })
        })
        .collect()
}

fn build_node_rows(node: &ClassificationNode) -> Vec<ClassificationRow> {
    match node {
        ClassificationNode::Segment(s) => vec![ClassificationRow {
            kind: "segment".to_string(),
            name: s.name.clone(),
            children: join_names(s.genres().iter().map(|g| g.name.as_str())),
            id: s.id.clone(),
        }],
        ClassificationNode::Genre(g) => vec![ClassificationRow {
            kind: "genre".to_string(),
            name: g.name.clone(),
            children: join_names(g.subgenres().iter().map(|s| s.name.as_str())),
            id: g.id.clone(),
        }],
        ClassificationNode::SubGenre(s) => vec![ClassificationRow {
            kind: "subgenre".to_string(),
            name: s.name.clone(),
            children: String::new(),
            id: s.id.clone(),
        }],
        ClassificationNode::Classification(c) => {
            build_classification_rows(std::slice::from_ref(&**c))
        }
    }
}

// -- Table output --

pub fn print_events_table(events: &[Event]) {
    println!("{}", Table::new(build_event_rows(events)));
}

pub fn print_venues_table(venues: &[Venue]) {
    println!("{}", Table::new(build_venue_rows(venues)));
}

pub fn print_attractions_table(attractions: &[Attraction]) {
    println!("{}", Table::new(build_attraction_rows(attractions)));
}

pub fn print_classifications_table(classifications: &[Classification]) {
    println!("{}", Table::new(build_classification_rows(classifications)));
}

pub fn print_node_table(node: &ClassificationNode) {
    println!("{}", Table::new(build_node_rows(node)));
}

// -- Markdown output --

fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_events_markdown(events: &[Event]) {
    print_markdown(build_event_rows(events));
}

pub fn print_venues_markdown(venues: &[Venue]) {
    print_markdown(build_venue_rows(venues));
}

pub fn print_attractions_markdown(attractions: &[Attraction]) {
    print_markdown(build_attraction_rows(attractions));
}

pub fn print_classifications_markdown(classifications: &[Classification]) {
    print_markdown(build_classification_rows(classifications));
}

pub fn print_node_markdown(node: &ClassificationNode) {
    print_markdown(build_node_rows(node));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn format_price_range(min: Option<f64>, max: Option<f64>, currency: &str) -> String {
    match (min, max) {
        (Some(min), Some(max)) if (max - min).abs() < f64::EPSILON => {
            format!("{:.2} {}", min, currency)
        }
        (Some(min), Some(max)) => format!("{:.2}-{:.2} {}", min, max, currency),
        (Some(price), None) | (None, Some(price)) => format!("{:.2} {}", price, currency),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketmaster_api::types::parse_page;

    fn load_events_fixture() -> Vec<Event> {
        let json_str = include_str!("../../ticketmaster_api/tests/fixtures/events.json");
        parse_page::<Event>(json_str).unwrap().into_records()
    }

    fn load_venues_fixture() -> Vec<Venue> {
        let json_str = include_str!("../../ticketmaster_api/tests/fixtures/venues.json");
        parse_page::<Venue>(json_str).unwrap().into_records()
    }

    fn load_classifications_fixture() -> Vec<Classification> {
        let json_str = include_str!("../../ticketmaster_api/tests/fixtures/classifications.json");
        parse_page::<Classification>(json_str).unwrap().into_records()
    }

    // -- format_price_range tests --

    #[test]
    fn test_format_price_range() {
        assert_eq!(format_price_range(Some(24.0), Some(315.0), "USD"), "24.00-315.00 USD");
        assert_eq!(format_price_range(Some(50.0), Some(50.0), "EUR"), "50.00 EUR");
        assert_eq!(format_price_range(None, Some(10.5), "USD"), "10.50 USD");
        assert_eq!(format_price_range(None, None, "USD"), "");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_event_rows_mapping() {
        let events = load_events_fixture();
        let rows = build_event_rows(&events);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.date, "2026-06-12 19:20:00");
        assert_eq!(row.venue, "Truist Park");
        assert_eq!(row.city, "Atlanta, GA");
        assert_eq!(row.genres, "Baseball");
        assert_eq!(row.price, "24.00-315.00 USD");
        assert_eq!(row.status, "onsale");

        let sparse = &rows[1];
        assert_eq!(sparse.date, "2026-07-01");
        assert_eq!(sparse.venue, "");
        assert_eq!(sparse.price, "");
    }

    #[test]
    fn test_build_venue_rows_mapping() {
        let venues = load_venues_fixture();
        let rows = build_venue_rows(&venues);
        assert_eq!(rows[0].name, "Fox Theatre");
        assert_eq!(rows[0].country, "US");
        assert_eq!(rows[0].address, "660 Peachtree St NE");
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[1].id, "KovZpZAEdntA");
    }

    #[test]
    fn test_build_classification_rows_mapping() {
        let classifications = load_classifications_fixture();
        let rows = build_classification_rows(&classifications);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, "segment");
        assert_eq!(rows[0].children, "Rock");
        assert_eq!(rows[1].kind, "type");
        assert_eq!(rows[1].children, "Festival");
    }

    #[test]
    fn test_build_node_rows_genre() {
        let classifications = load_classifications_fixture();
        let node = classifications[0].clone().resolve("KnvZfZ7vAeA");
        let rows = build_node_rows(&node);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "genre");
        assert_eq!(rows[0].name, "Rock");
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_event_rows(&[]).is_empty());
        assert!(build_venue_rows(&[]).is_empty());
        assert!(build_attraction_rows(&[]).is_empty());
    }
}
