mod client;
mod endpoint;
mod errors;
mod pager;
mod query;
mod resource;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use self::endpoint::{Attractions, Classifications, Endpoint, Events, Venues};
pub use self::errors::Error;
pub use self::pager::{PageIterator, PagerState, Search, DEFAULT_PAGE_LIMIT};
pub use self::query::{
    encode, format_date_time, AttractionQuery, ClassificationQuery, Criteria, EncodedQuery,
    EventQuery, Inclusion, Param, Query, SortOrder, Source, Unit, VenueQuery, DATE_TIME_FORMAT,
    MAX_PAGE_SIZE, MAX_TEXT_LENGTH,
};
pub use self::resource::Resource;
