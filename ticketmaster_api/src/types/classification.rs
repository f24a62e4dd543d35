//! The classification hierarchy: segment → genre → subgenre.

use serde::{Deserialize, Serialize};

use super::Links;

/// A classification as returned by `/classifications` and attached to events
/// and attractions.
///
/// Search results carry the full tree under `segment`. Classifications
/// attached to events carry flat `segment`/`genre`/`subGenre` references.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub primary: Option<bool>,

    pub family: Option<bool>,

    pub segment: Option<Segment>,

    pub genre: Option<Genre>,

    pub sub_genre: Option<SubGenre>,

    #[serde(rename = "type")]
    pub kind: Option<ClassificationType>,

    pub sub_type: Option<ClassificationSubType>,

    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Classification {
    /// Finds the node with `id`, checking the segment, then its genres, then
    /// their subgenres.
    pub fn find(&self, id: &str) -> Option<ClassificationNode> {
        let segment = self.segment.as_ref()?;
        if segment.id == id {
            return Some(ClassificationNode::Segment(segment.clone()));
        }
        if let Some(genre) = segment.genres().iter().find(|g| g.id == id) {
            return Some(ClassificationNode::Genre(genre.clone()));
        }
        segment
            .genres()
            .iter()
            .flat_map(|g| g.subgenres())
            .find(|s| s.id == id)
            .map(|s| ClassificationNode::SubGenre(s.clone()))
    }

    /// Resolves this classification into the node matching `id`, or the
    /// whole classification when no node in the tree has that id.
    pub fn resolve(self, id: &str) -> ClassificationNode {
        match self.find(id) {
            Some(node) => node,
            None => ClassificationNode::Classification(Box::new(self)),
        }
    }
}

/// Top level of the hierarchy (e.g. Music, Sports).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,

    pub name: String,

    #[serde(rename = "_links", default)]
    pub links: Links,

    #[serde(rename = "_embedded", default)]
    pub embedded: SegmentEmbedded,
}

impl Segment {
    pub fn genres(&self) -> &[Genre] {
        &self.embedded.genres
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmentEmbedded {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,

    pub name: String,

    #[serde(rename = "_links", default)]
    pub links: Links,

    #[serde(rename = "_embedded", default)]
    pub embedded: GenreEmbedded,
}

impl Genre {
    pub fn subgenres(&self) -> &[SubGenre] {
        &self.embedded.subgenres
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenreEmbedded {
    #[serde(default)]
    pub subgenres: Vec<SubGenre>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubGenre {
    pub id: String,

    pub name: String,

    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassificationType {
    pub id: Option<String>,

    pub name: Option<String>,

    #[serde(rename = "_embedded", default)]
    pub embedded: ClassificationTypeEmbedded,
}

impl ClassificationType {
    pub fn subtypes(&self) -> &[ClassificationSubType] {
        &self.embedded.subtypes
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassificationTypeEmbedded {
    #[serde(default)]
    pub subtypes: Vec<ClassificationSubType>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassificationSubType {
    pub id: Option<String>,

    pub name: Option<String>,
}

/// The result of a classification lookup by id.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "snake_case")]
pub enum ClassificationNode {
    Segment(Segment),
    Genre(Genre),
    SubGenre(SubGenre),
    Classification(Box<Classification>),
}

impl ClassificationNode {
    pub fn id(&self) -> Option<&str> {
        match self {
            ClassificationNode::Segment(s) => Some(&s.id),
            ClassificationNode::Genre(g) => Some(&g.id),
            ClassificationNode::SubGenre(s) => Some(&s.id),
            ClassificationNode::Classification(c) => c.segment.as_ref().map(|s| s.id.as_str()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ClassificationNode::Segment(s) => Some(&s.name),
            ClassificationNode::Genre(g) => Some(&g.name),
            ClassificationNode::SubGenre(s) => Some(&s.name),
            ClassificationNode::Classification(c) => {
                c.segment.as_ref().map(|s| s.name.as_str())
            }
        }
    }

    pub fn into_segment(self) -> Option<Segment> {
        match self {
            ClassificationNode::Segment(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_genre(self) -> Option<Genre> {
        match self {
            ClassificationNode::Genre(g) => Some(g),
            _ => None,
        }
    }

    pub fn into_subgenre(self) -> Option<SubGenre> {
        match self {
            ClassificationNode::SubGenre(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn music() -> Classification {
        serde_json::from_str(
            r#"{
                "segment": {
                    "id": "KZFzniwnSyZfZ7v7nJ",
                    "name": "Music",
                    "_embedded": {
                        "genres": [
                            {
                                "id": "KnvZfZ7vAeA",
                                "name": "Rock",
                                "_embedded": {
                                    "subgenres": [
                                        {"id": "KZazBEonSMnZfZ7v6F1", "name": "Pop"},
                                        {"id": "KZazBEonSMnZfZ7v6dt", "name": "Alternative Rock"}
                                    ]
                                }
                            },
                            {"id": "KnvZfZ7vAvv", "name": "Alternative"}
                        ]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_segment() {
        let node = music().resolve("KZFzniwnSyZfZ7v7nJ");
        let segment = node.into_segment().unwrap();
        assert_eq!(segment.name, "Music");
        let names: Vec<&str> = segment.genres().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Rock", "Alternative"]);
    }

    #[test]
    fn test_resolve_genre_and_subgenre() {
        let genre = music().resolve("KnvZfZ7vAvv").into_genre().unwrap();
        assert_eq!(genre.name, "Alternative");
        assert!(genre.subgenres().is_empty());

        let subgenre = music()
            .resolve("KZazBEonSMnZfZ7v6dt")
            .into_subgenre()
            .unwrap();
        assert_eq!(subgenre.name, "Alternative Rock");
    }

    #[test]
    fn test_resolve_falls_back_to_classification() {
        let node = music().resolve("nope");
        assert!(matches!(node, ClassificationNode::Classification(_)));
        assert_eq!(node.name(), Some("Music"));
    }
}
