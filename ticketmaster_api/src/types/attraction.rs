use serde::{Deserialize, Serialize};

use super::{Classification, Image, Links};

/// A performer, team or other draw.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub url: Option<String>,

    pub locale: Option<String>,

    pub test: Option<bool>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub classifications: Vec<Classification>,

    #[serde(rename = "_links", default)]
    pub links: Links,
}
