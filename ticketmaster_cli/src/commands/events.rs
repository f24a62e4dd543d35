//! The `events` subcommand: searches events with the common Discovery filters.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use ticketmaster_api::{Client, EventQuery, Query, SortOrder, Unit};

use super::{collect, PageArgs};
use crate::output::{print_events_markdown, print_events_table, print_json, OutputFormat};

#[derive(Args)]
pub struct EventsArgs {
    /// Full-text search (artist, team, event name)
    #[arg(long)]
    pub keyword: Option<String>,

    /// Events starting on/after (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)
    #[arg(long)]
    pub start: Option<String>,

    /// Events starting on/before (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)
    #[arg(long)]
    pub end: Option<String>,

    /// Two-letter country code (e.g. US, GB)
    #[arg(long)]
    pub country: Option<String>,

    /// Two-letter state code (e.g. GA, not Georgia)
    #[arg(long)]
    pub state: Option<String>,

    /// Classification name (segment, genre or subgenre, e.g. Hip-Hop)
    #[arg(long)]
    pub classification: Option<String>,

    /// Market ID (e.g. 10 for Atlanta)
    #[arg(long)]
    pub market: Option<u32>,

    /// Search around a point: "latitude,longitude"
    #[arg(long)]
    pub latlong: Option<String>,

    /// Radius around --latlong
    #[arg(long, requires = "latlong")]
    pub radius: Option<u32>,

    /// Radius unit: miles or km
    #[arg(long, requires = "latlong")]
    pub unit: Option<String>,

    /// Only events at this venue
    #[arg(long)]
    pub venue_id: Option<String>,

    /// Sort order, e.g. date,asc or relevance,desc
    #[arg(long)]
    pub sort: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

/// Accepts a full timestamp, or a bare date meaning midnight UTC.
fn parse_date_time(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}': expected YYYY-MM-DD", value))?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| anyhow!("Invalid date '{}'", value))
}

fn build_query(args: &EventsArgs) -> Result<EventQuery> {
    let mut query = args.paging.apply(EventQuery::default());

    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(start) = &args.start {
        query = query.with_start_date_time(parse_date_time(start)?);
    }
    if let Some(end) = &args.end {
        query = query.with_end_date_time(parse_date_time(end)?);
    }
    if let Some(country) = &args.country {
        query = query.with_country_code(country);
    }
    if let Some(state) = &args.state {
        query = query.with_state_code(state);
    }
    if let Some(classification) = &args.classification {
        query = query.with_classification_name(classification);
    }
    if let Some(market) = args.market {
        query = query.with_market_id(market);
    }
    if let Some(latlong) = &args.latlong {
        query = query.with_param("latlong", latlong);
    }
    if let Some(radius) = args.radius {
        query = query.with_radius(radius);
    }
    if let Some(unit) = &args.unit {
        let unit = match Unit::from_str(unit) {
            Ok(unit) => unit,
            Err(()) => bail!("Invalid unit '{}': expected miles or km", unit),
        };
        query = query.with_unit(unit);
    }
    if let Some(venue_id) = &args.venue_id {
        query = query.with_venue_id(venue_id);
    }
    if let Some(sort) = &args.sort {
        let sort = match SortOrder::from_str(sort) {
            Ok(sort) => sort,
            Err(()) => bail!("Unknown sort order '{}'", sort),
        };
        query = query.with_sort(sort);
    }

    Ok(query)
}

pub async fn run(args: &EventsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let pager = client.events().find(&query).await?;
    let events = collect(pager, &args.paging).await?;

    match format {
        OutputFormat::Table => print_events_table(&events),
        OutputFormat::Markdown => print_events_markdown(&events),
        OutputFormat::Json => print_json(&events),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_time() {
        assert_eq!(
            parse_date_time("2026-06-12").unwrap().to_rfc3339(),
            "2026-06-12T00:00:00+00:00"
        );
        assert_eq!(
            parse_date_time("2026-06-12T23:20:00Z").unwrap().to_rfc3339(),
            "2026-06-12T23:20:00+00:00"
        );
        assert!(parse_date_time("June 12").is_err());
    }
}
