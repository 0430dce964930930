//! # HTTP Services
//!
//! Route groups of the JSON API. Each sub-module exposes a
//! `configure_routes()` returning the Actix `Scope` mounted in `main.rs`.
//!
//! ## Sub-modules:
//! - `citations`: the reduced citation lookup used by inline popovers.
//! - `sources`: listings and full records for the sources page.

pub mod citations;
pub mod sources;

use common::api::is_reserved_slug;
use regex::Regex;
use std::sync::OnceLock;

/// Slugs are ASCII letters, digits, `-` and `_`, minus the reserved listing
/// paths. Anything else cannot name a source and is answered as not found
/// without touching the store.
pub(crate) fn is_valid_slug(slug: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
        .is_match(slug)
        && !is_reserved_slug(slug)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::repository::SourceRepository;
    use crate::store::testing::fixture_store;
    use actix_web::web;

    pub fn repository_data() -> web::Data<SourceRepository> {
        web::Data::new(SourceRepository::new(fixture_store()))
    }
}
