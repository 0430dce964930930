//! Listing handlers. A store failure shows up as an empty array, the same as
//! an empty store.

use crate::repository::SourceRepository;
use actix_web::{web, HttpResponse, Responder};

pub async fn all(repository: web::Data<SourceRepository>) -> impl Responder {
    HttpResponse::Ok().json(repository.list_all_sources().await)
}

pub async fn categories(repository: web::Data<SourceRepository>) -> impl Responder {
    HttpResponse::Ok().json(repository.list_categories().await)
}

pub async fn grouped(repository: web::Data<SourceRepository>) -> impl Responder {
    HttpResponse::Ok().json(repository.list_sources_grouped_by_category().await)
}

pub async fn featured(repository: web::Data<SourceRepository>) -> impl Responder {
    HttpResponse::Ok().json(repository.list_featured_sources().await)
}
