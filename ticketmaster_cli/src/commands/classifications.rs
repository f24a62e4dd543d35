use anyhow::{bail, Result};
use clap::Args;
use ticketmaster_api::{ClassificationQuery, Client, Query};

use super::{collect, PageArgs};
use crate::output::{
    print_classifications_markdown, print_classifications_table, print_json,
    print_node_markdown, print_node_table, OutputFormat,
};

#[derive(Args)]
pub struct ClassificationsArgs {
    /// Look up a single segment, genre or subgenre by ID
    #[arg(long, conflicts_with = "keyword")]
    pub id: Option<String>,

    /// Search by name
    #[arg(long)]
    pub keyword: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(
    args: &ClassificationsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    if let Some(id) = &args.id {
        let node = match client.classifications().by_id(id).await? {
            Some(node) => node,
            None => bail!("No classification found with id '{}'", id),
        };
        match format {
            OutputFormat::Table => print_node_table(&node),
            OutputFormat::Markdown => print_node_markdown(&node),
            OutputFormat::Json => print_json(&node),
        }
        return Ok(());
    }

    let mut query = args.paging.apply(ClassificationQuery::default());
    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }

    let pager = client.classifications().find(&query).await?;
    let classifications = collect(pager, &args.paging).await?;

    match format {
        OutputFormat::Table => print_classifications_table(&classifications),
        OutputFormat::Markdown => print_classifications_markdown(&classifications),
        OutputFormat::Json => print_json(&classifications),
    }

    Ok(())
}
