use actix_web::{get, web, HttpResponse, Responder};
use tera::Tera;
use tracing::error;

use super::templates::render_home;
use crate::{shared::api::ApiResponse, site::application::load_home_page, AppState};

#[get("/")]
pub async fn home_handler(data: web::Data<AppState>, templates: web::Data<Tera>) -> impl Responder {
    let page = load_home_page(&data).await;

    match render_home(&templates, &page) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            error!(error = ?err, "failed to render home page");
            ApiResponse::internal_error()
        }
    }
}
