//! Value types shared by several records.

use serde::{Deserialize, Serialize};

/// An image attached to an event, venue or attraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: Option<String>,

    /// Aspect ratio, e.g. `16_9`, `3_2`, `4_3`.
    pub ratio: Option<String>,

    pub width: Option<u32>,

    pub height: Option<u32>,

    pub fallback: Option<bool>,

    pub attribution: Option<String>,
}

/// A HAL link. The API sometimes returns templated hrefs such as
/// `/discovery/v2/events?page=1{&sort}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,

    #[serde(default)]
    pub templated: bool,
}

/// The `_links` block of a record or page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,

    pub next: Option<Link>,

    pub prev: Option<Link>,

    pub first: Option<Link>,

    pub last: Option<Link>,
}
