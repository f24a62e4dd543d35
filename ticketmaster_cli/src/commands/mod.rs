//! CLI subcommand implementations.

use anyhow::Result;
use clap::Args;
use ticketmaster_api::types::Record;
use ticketmaster_api::{PageIterator, Query, DEFAULT_PAGE_LIMIT};

pub mod attractions;
pub mod classifications;
pub mod events;
pub mod venues;

/// Paging flags shared by every search subcommand.
#[derive(Args)]
pub struct PageArgs {
    /// Results per page (1-200)
    #[arg(long)]
    pub size: Option<u32>,

    /// Page to start from (0-indexed)
    #[arg(long)]
    pub page: Option<u32>,

    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT, conflicts_with = "all")]
    pub pages: usize,

    /// Fetch every page the API reports
    #[arg(long)]
    pub all: bool,
}

impl PageArgs {
    pub fn apply<Q: Query>(&self, mut query: Q) -> Q {
        if let Some(size) = self.size {
            query = query.with_page_size(size);
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

/// Drains `pager` within the page budget and the API's paging depth,
/// reporting progress on stderr.
pub async fn collect<T: Record>(pager: PageIterator<T>, args: &PageArgs) -> Result<Vec<T>> {
    let pager = pager.with_depth_cap();
    let mut pager = if args.all {
        pager
    } else {
        pager.with_page_limit(args.pages)
    };

    let mut records = Vec::new();
    while let Some(page) = pager.next_page().await? {
        eprintln!(
            "Page {}/{} ({} total)",
            page.number() + 1,
            page.paging.total_pages,
            page.paging.total_elements
        );
        let at_depth = page.paging.has_next() && page.paging.max_depth_reached();
        records.extend(page.into_records());
        if at_depth {
            eprintln!("Reached the API's maximum paging depth; narrow the search to see more.");
            break;
        }
    }
    Ok(records)
}
