mod config;
mod repository;
mod services;
mod store;

use crate::config::Config;
use crate::repository::SourceRepository;
use crate::store::seed::{self, SeedFile};
use crate::store::SourceStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::api::ErrorBody;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend. Unknown paths get `index.html` so the client
/// can route them, except under `/api/` where a JSON 404 is returned.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return HttpResponse::NotFound().json(ErrorBody {
            error: "Not found".to_string(),
        });
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn other_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(other_error)?;
    let url = config.url();

    let store = SourceStore::open(&config.database_path).map_err(other_error)?;
    info!("Source store opened at {}", config.database_path.display());

    if let Some(seed_path) = &config.seed_file {
        let report = SeedFile::load(seed_path)
            .and_then(|file| seed::apply(&store, &file))
            .map_err(other_error)?;
        if !report.skipped.is_empty() {
            warn!("Seed skipped sources: {}", report.skipped.join(", "));
        }
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let repository = web::Data::new(SourceRepository::new(store));
    let json_limit = config.json_limit_bytes;

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(repository.clone())
            .service(services::citations::configure_routes())
            .service(services::sources::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unknown_api_paths_are_json_404() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Not found");
    }

    #[actix_web::test]
    async fn page_paths_fall_back_to_the_frontend() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri("/sources").to_request();
        let resp = test::call_service(&app, req).await;
        // index.html when the frontend was built into static/dist, plain 404 otherwise
        let expected = if STATIC_DIR.get_file("index.html").is_some() {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        assert_eq!(resp.status(), expected);
    }
}
