use actix_web::{web, HttpRequest, HttpResponse};

use super::{
    error_mapping::map_content_error,
    payload::{discard_image, read_payload, store_image},
    route_access::SingletonRoute,
};
use crate::{shared::api::ApiResponse, AppState};

//
// ──────────────────────────────────────────────────────────
// Route Group
// ──────────────────────────────────────────────────────────
//
// GET    /api/<singleton>   document, or {} when none exists
// POST   /api/<singleton>   create (fills or replaces the slot)
// PUT    /api/<singleton>   upsert submitted fields
// PATCH  /api/<singleton>   upsert submitted fields
// DELETE /api/<singleton>   remove
//

pub fn configure_singleton<R: SingletonRoute>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", R::COLLECTION))
            .route(web::get().to(get_handler::<R>))
            .route(web::post().to(create_handler::<R>))
            .route(web::put().to(upsert_handler::<R>))
            .route(web::patch().to(upsert_handler::<R>))
            .route(web::delete().to(remove_handler::<R>)),
    );
}

pub async fn get_handler<R: SingletonRoute>(data: web::Data<AppState>) -> HttpResponse {
    match R::use_case(&data).get().await {
        Ok(Some(doc)) => ApiResponse::success(doc),
        Ok(None) => ApiResponse::empty_object(),
        Err(err) => map_content_error::<R>(err),
    }
}

pub async fn create_handler<R: SingletonRoute>(
    req: HttpRequest,
    body: web::Payload,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = match read_payload::<R>(&req, body, &data).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    let draft = match R::validate_draft(form.payload) {
        Ok(draft) => draft,
        Err(err) => return ApiResponse::bad_request(err.message()),
    };
    let image = match store_image(&data, form.image).await {
        Ok(image) => image,
        Err(resp) => return resp,
    };

    match R::use_case(&data).create(draft).await {
        Ok(doc) => ApiResponse::created(doc),
        Err(err) => {
            discard_image(&data, image).await;
            map_content_error::<R>(err)
        }
    }
}

pub async fn upsert_handler<R: SingletonRoute>(
    req: HttpRequest,
    body: web::Payload,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = match read_payload::<R>(&req, body, &data).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    let changes = match R::validate_changes(form.payload) {
        Ok(changes) => changes,
        Err(err) => return ApiResponse::bad_request(err.message()),
    };
    let image = match store_image(&data, form.image).await {
        Ok(image) => image,
        Err(resp) => return resp,
    };

    // An empty slot is validated as a full document inside the use case.
    match R::use_case(&data).upsert(changes).await {
        Ok(doc) => ApiResponse::success(doc),
        Err(err) => {
            discard_image(&data, image).await;
            map_content_error::<R>(err)
        }
    }
}

pub async fn remove_handler<R: SingletonRoute>(data: web::Data<AppState>) -> HttpResponse {
    match R::use_case(&data).remove().await {
        Ok(doc) => ApiResponse::success(doc),
        Err(err) => map_content_error::<R>(err),
    }
}

// ============================================================================
// Tests
// ============================================================================
