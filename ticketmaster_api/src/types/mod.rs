use serde::de::DeserializeOwned;

use crate::resource::Resource;

mod common;
pub use self::common::{Image, Link, Links};

mod page;
pub use self::page::{parse_page, Page, Paging, MAX_PAGING_DEPTH};

mod event;
pub use self::event::{Event, EventDate, EventDates, EventEmbedded, EventStatus, PriceRange, Promoter};

mod venue;
pub use self::venue::{Address, City, Country, Dma, Location, Market, State, Venue};

mod attraction;
pub use self::attraction::Attraction;

mod classification;
pub use self::classification::{
    Classification, ClassificationNode, ClassificationSubType, ClassificationType, Genre,
    Segment, SubGenre,
};

/// A record type served by one of the search endpoints.
pub trait Record: DeserializeOwned {
    /// The resource whose endpoint returns this record.
    const RESOURCE: Resource;
}

impl Record for Event {
    const RESOURCE: Resource = Resource::Events;
}
impl Record for Venue {
    const RESOURCE: Resource = Resource::Venues;
}
impl Record for Attraction {
    const RESOURCE: Resource = Resource::Attractions;
}
impl Record for Classification {
    const RESOURCE: Resource = Resource::Classifications;
}
