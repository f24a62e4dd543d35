use anyhow::Result;
use clap::Args;
use ticketmaster_api::{Client, Query, VenueQuery};

use super::{collect, PageArgs};
use crate::output::{print_json, print_venues_markdown, print_venues_table, OutputFormat};

#[derive(Args)]
pub struct VenuesArgs {
    /// Search by name
    #[arg(long)]
    pub keyword: Option<String>,

    /// Two-letter state code (e.g. GA)
    #[arg(long)]
    pub state: Option<String>,

    /// Two-letter country code (e.g. US)
    #[arg(long)]
    pub country: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &VenuesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(VenueQuery::default());
    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(state) = &args.state {
        query = query.with_state_code(state);
    }
    if let Some(country) = &args.country {
        query = query.with_country_code(country);
    }

    let pager = client.venues().find(&query).await?;
    let venues = collect(pager, &args.paging).await?;

    match format {
        OutputFormat::Table => print_venues_table(&venues),
        OutputFormat::Markdown => print_venues_markdown(&venues),
        OutputFormat::Json => print_json(&venues),
    }

    Ok(())
}
