//! # Citation Service Module
//!
//! Serves the reduced source record that inline citations show in their
//! popover card.
//!
//! ## Sub-modules:
//! - `get`: looks one source up by slug and returns its citation projection.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::api::CITATIONS_API;

/// Configures the `/api/citations` scope.
///
/// # Registered Routes:
///
/// *   **`GET /{slug}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `slug, title, short_title, author, year,
///       source_type, url, description` for the source, cacheable for an hour.
///       Unknown or malformed slugs get `404 {"error":"Source not found"}`.
pub fn configure_routes() -> Scope {
    scope(CITATIONS_API).route("/{slug}", get().to(get::process))
}
