mod common;
pub use self::common::{Criteria, Inclusion, Param, Query, SortOrder, Source, Unit};

mod encode;
pub use self::encode::{
    encode, format_date_time, EncodedQuery, DATE_TIME_FORMAT, MAX_PAGE_SIZE, MAX_TEXT_LENGTH,
};

mod attraction;
pub use self::attraction::AttractionQuery;

mod classification;
pub use self::classification::ClassificationQuery;

mod event;
pub use self::event::EventQuery;

mod venue;
pub use self::venue::VenueQuery;
