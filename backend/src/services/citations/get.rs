//! # Citation Lookup
//!
//! Handler for `GET /api/citations/{slug}`.
//!
//! The slug is matched exactly (case-sensitive). A malformed slug is answered
//! the same way as an unknown one. Successful responses may be cached by
//! shared caches for an hour and served stale for a day while revalidating;
//! not-found responses carry no cache header.

use crate::repository::SourceRepository;
use crate::services::is_valid_slug;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{web, HttpResponse, Responder};
use common::api::ErrorBody;
use log::debug;

pub const CITATION_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

pub async fn process(
    slug: web::Path<String>,
    repository: web::Data<SourceRepository>,
) -> impl Responder {
    let slug = slug.into_inner();
    if !is_valid_slug(&slug) {
        debug!("Rejected malformed citation slug '{}'", slug);
        return HttpResponse::NotFound().json(ErrorBody::source_not_found());
    }

    match repository.get_citation_projection(&slug).await {
        Some(citation) => HttpResponse::Ok()
            .insert_header((CACHE_CONTROL, CITATION_CACHE_CONTROL))
            .json(citation),
        None => HttpResponse::NotFound().json(ErrorBody::source_not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::citations::configure_routes;
    use crate::services::testing::repository_data;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::source::{CitationData, SourceType};

    #[actix_web::test]
    async fn known_slug_returns_projection_with_cache_header() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/citations/fwc-rodman")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CACHE_CONTROL).unwrap(),
            CITATION_CACHE_CONTROL
        );
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body.as_object().unwrap().len(), 8);
        let citation: CitationData = serde_json::from_value(body).unwrap();
        assert_eq!(citation.slug, "fwc-rodman");
        assert_eq!(citation.source_type, SourceType::Agency);
        assert_eq!(citation.year, None);
    }

    #[actix_web::test]
    async fn unknown_slug_is_404_without_cache_header() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/citations/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(resp.headers().get(CACHE_CONTROL).is_none());
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Source not found");
    }

    #[actix_web::test]
    async fn slug_match_is_case_sensitive() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/citations/FWC-RODMAN")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_slug_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/citations/fwc.rodman")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Source not found");
    }
}
