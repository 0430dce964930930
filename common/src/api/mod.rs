//! Paths and payloads shared by the HTTP API and its browser client.

use serde::{Deserialize, Serialize};

/// Base path of the citation lookup endpoint.
pub const CITATIONS_API: &str = "/api/citations";

/// Base path of the source listing endpoints.
pub const SOURCES_API: &str = "/api/sources";

/// Page that lists every source, one anchor per slug.
pub const SOURCES_PAGE: &str = "/sources";

/// Fixed sub-paths of [`SOURCES_API`]. A source with one of these slugs could
/// never be reached at `/api/sources/<slug>`, so they cannot name a source.
pub const RESERVED_SOURCE_SLUGS: [&str; 3] = ["categories", "grouped", "featured"];

pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SOURCE_SLUGS.contains(&slug)
}

/// Message returned with every 404 from the source endpoints.
pub const SOURCE_NOT_FOUND: &str = "Source not found";

/// JSON body of an error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn source_not_found() -> Self {
        ErrorBody {
            error: SOURCE_NOT_FOUND.to_string(),
        }
    }
}

/// `/api/citations/<slug>`
pub fn citation_path(slug: &str) -> String {
    format!("{}/{}", CITATIONS_API, slug)
}

/// `/sources#<slug>`, the stable public address of a source card.
pub fn source_anchor_href(slug: &str) -> String {
    format!("{}#{}", SOURCES_PAGE, slug)
}

/// Returns the slug of a `/sources#<slug>` link, if `href` is one.
pub fn slug_from_anchor_href(href: &str) -> Option<&str> {
    href.strip_prefix(SOURCES_PAGE)
        .and_then(|rest| rest.strip_prefix('#'))
        .filter(|slug| !slug.is_empty())
}
