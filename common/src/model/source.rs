//! Source reference records.
//!
//! These structs mirror the three tables of the source store
//! (`source_categories`, `sources`, `source_passages`) and the projections the
//! API hands out. A source's `slug` is a public identifier: it is the lookup key
//! for `/api/citations/{slug}` and the in-page anchor of `/sources#<slug>`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of publication a source is. Stored and serialized in snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    PeerReviewed,
    Agency,
    Advocacy,
    News,
    Legal,
    #[default]
    Other,
}

impl SourceType {
    /// All variants in legend order.
    pub const ALL: [SourceType; 6] = [
        SourceType::PeerReviewed,
        SourceType::Agency,
        SourceType::Legal,
        SourceType::Advocacy,
        SourceType::News,
        SourceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::PeerReviewed => "peer_reviewed",
            SourceType::Agency => "agency",
            SourceType::Advocacy => "advocacy",
            SourceType::News => "news",
            SourceType::Legal => "legal",
            SourceType::Other => "other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSourceType(pub String);

impl fmt::Display for UnknownSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown source type '{}'", self.0)
    }
}

impl std::error::Error for UnknownSourceType {}

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peer_reviewed" => Ok(SourceType::PeerReviewed),
            "agency" => Ok(SourceType::Agency),
            "advocacy" => Ok(SourceType::Advocacy),
            "news" => Ok(SourceType::News),
            "legal" => Ok(SourceType::Legal),
            "other" => Ok(SourceType::Other),
            other => Err(UnknownSourceType(other.to_string())),
        }
    }
}

/// An editorially curated grouping of sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCategory {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A citable reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_title: Option<String>,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub year: Option<i32>,
    pub source_type: SourceType,
    pub url: Option<String>,
    pub pdf_url: Option<String>,
    pub doi: Option<String>,
    pub description: Option<String>,
    pub full_citation: Option<String>,
    pub is_featured: bool,
    /// `None` for orphaned sources; those never appear in grouped views.
    pub category_id: Option<String>,
    pub sort_order: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Source {
    /// Short title when present, full title otherwise.
    pub fn display_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }
}

/// A quoted excerpt owned by exactly one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePassage {
    pub id: String,
    pub source_id: String,
    pub quote_text: String,
    pub context: Option<String>,
    pub section: Option<String>,
    pub page_number: Option<String>,
    pub usage_hint: Option<String>,
    pub fragment_url: Option<String>,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceWithCategory {
    #[serde(flatten)]
    pub source: Source,
    pub category: Option<SourceCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceWithPassages {
    #[serde(flatten)]
    pub source: Source,
    pub passages: Vec<SourcePassage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFull {
    #[serde(flatten)]
    pub source: Source,
    pub category: Option<SourceCategory>,
    pub passages: Vec<SourcePassage>,
}

/// One section of the grouped listing. Never built with an empty `sources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: SourceCategory,
    pub sources: Vec<SourceWithPassages>,
}

/// Reduced view of a source used by inline citation popovers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationData {
    pub slug: String,
    pub title: String,
    pub short_title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub source_type: SourceType,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl From<&Source> for CitationData {
    fn from(source: &Source) -> Self {
        CitationData {
            slug: source.slug.clone(),
            title: source.title.clone(),
            short_title: source.short_title.clone(),
            author: source.author.clone(),
            year: source.year,
            source_type: source.source_type,
            url: source.url.clone(),
            description: source.description.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn source(slug: &str, sort_order: i64) -> Source {
        Source {
            id: format!("id-{}", slug),
            slug: slug.to_string(),
            title: format!("Title of {}", slug),
            short_title: None,
            author: None,
            publication: None,
            year: None,
            source_type: SourceType::Agency,
            url: None,
            pdf_url: None,
            doi: None,
            description: None,
            full_citation: None,
            is_featured: false,
            category_id: None,
            sort_order,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn category(slug: &str, sort_order: i64) -> SourceCategory {
        SourceCategory {
            id: format!("cat-{}", slug),
            slug: slug.to_string(),
            name: format!("Category {}", slug),
            description: None,
            sort_order,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn passage(source: &Source, quote: &str, sort_order: i64) -> SourcePassage {
        SourcePassage {
            id: format!("{}-p{}", source.slug, sort_order),
            source_id: source.id.clone(),
            quote_text: quote.to_string(),
            context: None,
            section: None,
            page_number: None,
            usage_hint: None,
            fragment_url: None,
            sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::source;
    use super::*;

    #[test]
    fn source_type_round_trips_through_its_store_text() {
        for ty in SourceType::ALL {
            assert_eq!(ty.as_str().parse::<SourceType>().unwrap(), ty);
        }
        assert!("Agency".parse::<SourceType>().is_err());
    }

    #[test]
    fn source_type_serializes_snake_case() {
        let json = serde_json::to_string(&SourceType::PeerReviewed).unwrap();
        assert_eq!(json, "\"peer_reviewed\"");
    }

    #[test]
    fn citation_projection_keeps_only_popover_fields() {
        let mut s = source("fwc-rodman", 4);
        s.pdf_url = Some("https://example.org/a.pdf".to_string());
        s.doi = Some("10.1/x".to_string());
        let citation = CitationData::from(&s);
        let json = serde_json::to_value(&citation).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 8);
        assert!(!keys.contains(&"pdf_url"));
        assert!(!keys.contains(&"doi"));
        assert_eq!(json["source_type"], "agency");
    }

    #[test]
    fn display_title_prefers_short_title() {
        let mut s = source("a", 1);
        assert_eq!(s.display_title(), "Title of a");
        s.short_title = Some("Short".to_string());
        assert_eq!(s.display_title(), "Short");
    }

    #[test]
    fn flattened_source_with_category_serializes_flat() {
        let s = source("a", 1);
        let joined = SourceWithCategory {
            source: s,
            category: None,
        };
        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["slug"], "a");
        assert!(json["category"].is_null());
    }
}
