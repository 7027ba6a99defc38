pub mod auth_handlers;
pub mod home;

use actix_web::{web, HttpResponse};

/// Register the page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/signin", web::get().to(auth_handlers::signin_form))
        .route("/signin", web::post().to(auth_handlers::signin))
        .route("/signout", web::post().to(auth_handlers::signout));
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
