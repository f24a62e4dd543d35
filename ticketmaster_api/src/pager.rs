//! Pagination over search results.
//!
//! A [`Search`] is an encoded query bound to a client. Starting it fetches
//! the first page and yields a [`PageIterator`], which fetches one further
//! page per [`PageIterator::advance`] until the API's reported page count or
//! the caller's page limit is reached. [`PageIterator::maximum`] also stops
//! at the API's paging depth instead of running into its error.

use std::marker::PhantomData;

use futures::Stream;

use crate::{
    query::{EncodedQuery, Param},
    types::{Page, Paging, Record},
    Client, Error,
};

/// Page limit used by callers that want "a few pages" without picking a number.
pub const DEFAULT_PAGE_LIMIT: usize = 5;

/// An encoded search against one resource.
pub struct Search<T> {
    client: Client,
    query: EncodedQuery,
    record: PhantomData<fn() -> T>,
}

impl<T> Clone for Search<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            query: self.query.clone(),
            record: PhantomData,
        }
    }
}

impl<T: Record> Search<T> {
    pub fn new(client: Client, query: EncodedQuery) -> Self {
        Self {
            client,
            query,
            record: PhantomData,
        }
    }

    pub fn query(&self) -> &EncodedQuery {
        &self.query
    }

    /// Index of the first page: the query's `page`, or 0.
    pub fn first_page(&self) -> u32 {
        self.query
            .get(Param::Page.api_name())
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }

    /// Fetches the first page and returns an iterator positioned on it.
    pub async fn start(self) -> Result<PageIterator<T>, Error> {
        let first = self.client.get_page::<T>(&self.query).await?;
        tracing::debug!(
            "{} search returned {} of {} records over {} pages",
            T::RESOURCE,
            first.len(),
            first.paging.total_elements,
            first.paging.total_pages
        );
        Ok(PageIterator::new(self, first))
    }

    /// Fetches page `number` of this search.
    pub async fn fetch(&self, number: u32) -> Result<Page<T>, Error> {
        let mut query = self.query.clone();
        query.set(Param::Page.api_name(), number.to_string());
        self.client.get_page::<T>(&query).await
    }
}

/// Where a [`PageIterator`] stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    /// Page `n` is the last one fetched and more may follow.
    HasPage(u32),
    /// No further requests will be made.
    Exhausted,
}

/// Stateful cursor over the pages of one search.
///
/// The first page is fetched when the iterator is created. Every later page
/// costs exactly one request. The cursor follows the page index that was
/// requested, so the iterator terminates even if the API reports a
/// different page number.
pub struct PageIterator<T> {
    search: Search<T>,
    state: PagerState,
    cursor: u32,
    paging: Paging,
    fetched: usize,
    page_limit: Option<usize>,
    depth_capped: bool,
    pending: Option<Page<T>>,
}

impl<T: Record> PageIterator<T> {
    fn new(search: Search<T>, first: Page<T>) -> Self {
        let cursor = search.first_page();
        Self {
            search,
            state: PagerState::HasPage(cursor),
            cursor,
            paging: first.paging.clone(),
            fetched: 1,
            page_limit: None,
            depth_capped: false,
            pending: Some(first),
        }
    }

    pub fn search(&self) -> &Search<T> {
        &self.search
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Index of the last page fetched.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Paging metadata of the last page fetched.
    pub fn paging(&self) -> &Paging {
        &self.paging
    }

    pub fn total_pages(&self) -> u32 {
        self.paging.total_pages
    }

    /// Number of pages fetched so far, the first one included.
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    /// The fetched page not yet handed out by [`PageIterator::next_page`].
    pub fn current_page(&self) -> Option<&Page<T>> {
        self.pending.as_ref()
    }

    /// Stops advancing once `limit` pages have been fetched in total. A limit
    /// of 0 hands out no pages at all.
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn page_limit(&self) -> Option<usize> {
        self.page_limit
    }

    /// Stops advancing before the first page the API would refuse for being
    /// past its paging depth.
    pub fn with_depth_cap(mut self) -> Self {
        self.depth_capped = true;
        self
    }

    fn limit_reached(&self) -> bool {
        self.page_limit.is_some_and(|limit| self.fetched >= limit)
    }

    fn past_depth(&self, next: u32) -> bool {
        self.depth_capped && !self.paging.within_depth(next)
    }

    /// Fetches the next page, replacing the current one.
    ///
    /// Returns `Ok(false)`, without a request, once the last reported page or
    /// the page limit has been reached, or the next page is past the paging
    /// depth while the depth cap is on. On error the iterator is left as it
    /// was.
    pub async fn advance(&mut self) -> Result<bool, Error> {
        if self.state == PagerState::Exhausted {
            return Ok(false);
        }
        let next = self.cursor.saturating_add(1);
        if next >= self.paging.total_pages || self.limit_reached() || self.past_depth(next) {
            tracing::debug!(
                "{} search exhausted after {} pages",
                T::RESOURCE,
                self.fetched
            );
            self.state = PagerState::Exhausted;
            return Ok(false);
        }

        let page = self.search.fetch(next).await?;
        tracing::debug!(
            "{} search advanced to page {}/{}",
            T::RESOURCE,
            next + 1,
            page.paging.total_pages
        );
        self.cursor = next;
        self.paging = page.paging.clone();
        self.fetched += 1;
        self.state = PagerState::HasPage(next);
        self.pending = Some(page);
        Ok(true)
    }

    /// Returns the next page, fetching it if needed.
    ///
    /// The first call hands out the page fetched at creation without a
    /// request. Returns `Ok(None)` once exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>, Error> {
        if self.page_limit == Some(0) {
            self.state = PagerState::Exhausted;
            return Ok(None);
        }
        if let Some(page) = self.pending.take() {
            return Ok(Some(page));
        }
        if self.advance().await? {
            Ok(self.pending.take())
        } else {
            Ok(None)
        }
    }

    /// The pages of [`PageIterator::next_page`] as a stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>, Error>> {
        futures::stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page, pager)))
        })
    }

    /// Records of the current page only. Makes no request.
    pub fn one(self) -> Vec<T> {
        self.pending.map(Page::into_records).unwrap_or_default()
    }

    /// Records of up to `pages` further pages, in page order.
    ///
    /// Pages already handed out by [`PageIterator::next_page`] do not count
    /// against `pages`.
    pub async fn limit(mut self, pages: usize) -> Result<Vec<T>, Error> {
        if pages == 0 {
            return Ok(Vec::new());
        }
        let consumed = self.fetched - usize::from(self.pending.is_some());
        let budget = consumed.saturating_add(pages);
        self.page_limit = Some(match self.page_limit {
            Some(existing) => existing.min(budget),
            None => budget,
        });
        self.all().await
    }

    /// Records of every remaining page the API is willing to serve.
    ///
    /// Like [`PageIterator::all`], but stops before the paging depth (1000
    /// records at the current page size) instead of failing there.
    pub async fn maximum(self) -> Result<Vec<T>, Error> {
        self.with_depth_cap().all().await
    }

    /// Records of every remaining page, in page order.
    ///
    /// Without a page limit this fetches every page the API reports.
    pub async fn all(mut self) -> Result<Vec<T>, Error> {
        let mut records = Vec::new();
        while let Some(page) = self.next_page().await? {
            records.extend(page.into_records());
        }
        Ok(records)
    }

    /// Runs the same search again from its first page.
    pub async fn restart(&self) -> Result<PageIterator<T>, Error> {
        let mut pager = self.search.clone().start().await?;
        pager.page_limit = self.page_limit;
        pager.depth_capped = self.depth_capped;
        Ok(pager)
    }
}
