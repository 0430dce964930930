//! # Sources Service Module
//!
//! Read-only endpoints behind the sources page and anything else that needs
//! whole source records.
//!
//! ## Sub-modules:
//! - `list`: categories, all sources, the grouped listing and featured sources.
//! - `get`: one source with its category and passages.

mod get;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::api::SOURCES_API;

/// Configures the `/api/sources` scope.
///
/// # Registered Routes:
///
/// *   **`GET ""`**: every source with its category (`list::all`).
/// *   **`GET /categories`**: categories by `sort_order` (`list::categories`).
/// *   **`GET /grouped`**: non-empty categories with their sources and
///     passages (`list::grouped`). This is what the sources page renders.
/// *   **`GET /featured`**: sources flagged as featured (`list::featured`).
/// *   **`GET /{slug}`**: one full source, or `404 {"error":"Source not found"}`
///     (`get::process`).
///
/// The fixed paths are registered before `/{slug}` so they are never taken
/// for slugs.
pub fn configure_routes() -> Scope {
    scope(SOURCES_API)
        .route("", get().to(list::all))
        .route("/categories", get().to(list::categories))
        .route("/grouped", get().to(list::grouped))
        .route("/featured", get().to(list::featured))
        .route("/{slug}", get().to(get::process))
}
