//! Handler for `GET /api/sources/{slug}`: the full record (source, category
//! and passages) behind a single source card.

use crate::repository::SourceRepository;
use crate::services::is_valid_slug;
use actix_web::{web, HttpResponse, Responder};
use common::api::ErrorBody;

pub async fn process(
    slug: web::Path<String>,
    repository: web::Data<SourceRepository>,
) -> impl Responder {
    let slug = slug.into_inner();
    if !is_valid_slug(&slug) {
        return HttpResponse::NotFound().json(ErrorBody::source_not_found());
    }
    match repository.get_source_full(&slug).await {
        Some(source) => HttpResponse::Ok().json(source),
        None => HttpResponse::NotFound().json(ErrorBody::source_not_found()),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::sources::configure_routes;
    use crate::services::testing::repository_data;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::api::ErrorBody;
    use common::model::source::SourceFull;

    #[actix_web::test]
    async fn full_source_by_slug() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/sources/usfws-recovery")
            .to_request();
        let source: SourceFull = test::call_and_read_body_json(&app, req).await;
        assert_eq!(source.source.slug, "usfws-recovery");
        assert_eq!(source.category.unwrap().slug, "manatees-habitat");
        assert!(source.passages.is_empty());
    }

    #[actix_web::test]
    async fn unknown_source_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(repository_data())
                .service(configure_routes()),
        )
            .await;
        let req = test::TestRequest::get()
            .uri("/api/sources/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body, ErrorBody::source_not_found());
    }
}
