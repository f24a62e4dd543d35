//! The paginated response envelope and its deserializer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Error;

use super::{Links, Record};

/// The API refuses to page past this many items (`size * page`).
pub const MAX_PAGING_DEPTH: u64 = 1000;

/// The `page` block of a search response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// Requested page size.
    pub size: u32,
    /// Matching records across all pages.
    pub total_elements: u64,
    pub total_pages: u32,
    /// Index of this page, starting at 0.
    pub number: u32,
}

impl Paging {
    /// Returns `true` if the API will serve page `number` at this page size.
    pub fn within_depth(&self, number: u32) -> bool {
        u64::from(self.size) * u64::from(number) < MAX_PAGING_DEPTH
    }

    /// Returns `true` when the page after this one lies past the API's
    /// paging depth, so requesting it would fail.
    pub fn max_depth_reached(&self) -> bool {
        !self.within_depth(self.number.saturating_add(1))
    }

    /// Returns `true` if the API reports a page after this one.
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }
}

#[derive(Deserialize)]
struct PageEnvelope<T> {
    #[serde(rename = "_embedded")]
    embedded: Option<HashMap<String, Vec<T>>>,
    #[serde(rename = "_links", default)]
    links: Links,
    page: Paging,
}

/// One response's worth of records plus pagination metadata.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub paging: Paging,
    pub links: Links,
    records: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(paging: Paging, links: Links, records: Vec<T>) -> Self {
        Self {
            paging,
            links,
            records,
        }
    }

    /// Index of this page, starting at 0.
    pub fn number(&self) -> u32 {
        self.paging.number
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parses one search response body into a [`Page`].
///
/// An absent `_embedded` block means the search matched nothing and yields an
/// empty page. A missing `page` block or a malformed record fails the whole page.
pub fn parse_page<T: Record>(body: &str) -> Result<Page<T>, Error> {
    let envelope: PageEnvelope<T> = serde_json::from_str(body)?;
    let records = envelope
        .embedded
        .and_then(|mut embedded| embedded.remove(T::RESOURCE.name()))
        .unwrap_or_default();
    Ok(Page::new(envelope.page, envelope.links, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Venue;

    #[test]
    fn test_parse_empty_page() {
        let body = r#"{
            "_links": {"self": {"href": "/discovery/v2/venues.json?keyword=zzzz"}},
            "page": {"size": 20, "totalElements": 0, "totalPages": 0, "number": 0}
        }"#;
        let page = parse_page::<Venue>(body).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.paging.total_pages, 0);
        assert!(!page.paging.has_next());
    }

    #[test]
    fn test_parse_page_requires_paging() {
        let body = r#"{"_embedded": {"venues": [{"id": "KovZpaFEZe"}]}}"#;
        assert!(matches!(
            parse_page::<Venue>(body),
            Err(Error::Deserialization(_))
        ));
    }

    #[test]
    fn test_max_depth_reached() {
        let paging = Paging {
            size: 20,
            total_elements: 5000,
            total_pages: 250,
            number: 49,
        };
        assert!(paging.max_depth_reached());
        assert!(!Paging { number: 48, ..paging }.max_depth_reached());
        assert!(paging.within_depth(49));
        assert!(!paging.within_depth(50));
        assert!(Paging { size: 200, number: 4, ..paging }.max_depth_reached());
    }
}
