use anyhow::Result;
use clap::Args;
use ticketmaster_api::{AttractionQuery, Client, Query};

use super::{collect, PageArgs};
use crate::output::{
    print_attractions_markdown, print_attractions_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct AttractionsArgs {
    /// Search by name
    #[arg(long)]
    pub keyword: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &AttractionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(AttractionQuery::default());
    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }

    let pager = client.attractions().find(&query).await?;
    let attractions = collect(pager, &args.paging).await?;

    match format {
        OutputFormat::Table => print_attractions_table(&attractions),
        OutputFormat::Markdown => print_attractions_markdown(&attractions),
        OutputFormat::Json => print_json(&attractions),
    }

    Ok(())
}
