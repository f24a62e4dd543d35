//! Per-resource search and lookup operations.

use std::marker::PhantomData;

use crate::{
    pager::{PageIterator, Search},
    query::{EventQuery, Param, Query, SortOrder, Unit, VenueQuery},
    resource::Resource,
    types::{
        Attraction, Classification, ClassificationNode, Event, Genre, Record, Segment, SubGenre,
        Venue,
    },
    Client, Error,
};

/// Search and lookup operations for one resource kind.
pub struct Endpoint<T> {
    client: Client,
    record: PhantomData<fn() -> T>,
}

pub type Events = Endpoint<Event>;
pub type Venues = Endpoint<Venue>;
pub type Attractions = Endpoint<Attraction>;
pub type Classifications = Endpoint<Classification>;

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            record: PhantomData,
        }
    }
}

impl<T: Record> Endpoint<T> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            record: PhantomData,
        }
    }

    pub fn resource(&self) -> Resource {
        T::RESOURCE
    }

    /// Runs a search and fetches its first page.
    ///
    /// The query is validated before anything is sent. The client's default
    /// page size is added when the query does not set `size`, and the
    /// resource's default sort when it does not set `sort`. If the query
    /// sets `page`, that page is fetched first.
    pub async fn find<Q>(&self, query: &Q) -> Result<PageIterator<T>, Error>
    where
        Q: Query<Record = T>,
    {
        let mut encoded = query.encode()?;
        if let Some(size) = self.client.config().page_size {
            if !encoded.contains(Param::Size.api_name()) {
                encoded.set(Param::Size.api_name(), size.to_string());
            }
        }
        if let Some(sort) = T::RESOURCE.default_sort() {
            if !encoded.contains(Param::Sort.api_name()) {
                encoded.set(Param::Sort.api_name(), sort.to_string());
            }
        }
        Search::new(self.client.clone(), encoded).start().await
    }

    /// Fetches a single record by ID.
    pub async fn get(&self, id: &str) -> Result<T, Error> {
        self.client.get_entity(T::RESOURCE, id).await
    }
}

impl Endpoint<Event> {
    /// Searches for events within `radius` of a point.
    ///
    /// Sorts by `relevance,desc` unless `query` sets another order; `date,asc`
    /// tends to surface far-away events first.
    pub async fn by_location(
        &self,
        latitude: f64,
        longitude: f64,
        radius: u32,
        unit: Unit,
        query: EventQuery,
    ) -> Result<PageIterator<Event>, Error> {
        let mut query = query
            .with_lat_long(latitude, longitude)
            .with_radius(radius)
            .with_unit(unit);
        if !query.criteria().contains_param(Param::Sort) {
            query = query.with_sort(SortOrder::RelevanceDesc);
        }
        self.find(&query).await
    }
}

impl Endpoint<Venue> {
    /// Searches for venues by name, optionally within one state.
    pub async fn by_name(
        &self,
        name: &str,
        state_code: Option<&str>,
    ) -> Result<PageIterator<Venue>, Error> {
        let mut query = VenueQuery::default().with_keyword(name);
        if let Some(state_code) = state_code {
            query = query.with_state_code(state_code);
        }
        self.find(&query).await
    }
}

impl Endpoint<Classification> {
    /// Looks up a segment, genre or subgenre by ID.
    ///
    /// Returns `Ok(None)` when the API has no classification with that ID.
    /// If the response contains no node with the ID, the whole
    /// classification is returned.
    pub async fn by_id(&self, id: &str) -> Result<Option<ClassificationNode>, Error> {
        match self.get(id).await {
            Ok(classification) => Ok(Some(classification.resolve(id))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn segment_by_id(&self, id: &str) -> Result<Option<Segment>, Error> {
        Ok(self.by_id(id).await?.and_then(ClassificationNode::into_segment))
    }

    pub async fn genre_by_id(&self, id: &str) -> Result<Option<Genre>, Error> {
        Ok(self.by_id(id).await?.and_then(ClassificationNode::into_genre))
    }

    pub async fn subgenre_by_id(&self, id: &str) -> Result<Option<SubGenre>, Error> {
        Ok(self
            .by_id(id)
            .await?
            .and_then(ClassificationNode::into_subgenre))
    }
}
