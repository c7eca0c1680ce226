use actix_web::{web, HttpRequest, HttpResponse};

use super::{
    error_mapping::{map_content_error, parse_id},
    payload::{discard_image, read_payload, store_image},
    route_access::CollectionRoute,
};
use crate::{content::domain::ReorderItem, shared::api::ApiResponse, AppState};

//
// ──────────────────────────────────────────────────────────
// Route Group
// ──────────────────────────────────────────────────────────
//
// GET    /api/<collection>        list
// POST   /api/<collection>        create (JSON or multipart)
// PUT    /api/<collection>        bulk reorder
// GET    /api/<collection>/{id}   single document
// PATCH  /api/<collection>/{id}   partial update
// PUT    /api/<collection>/{id}   partial update
// DELETE /api/<collection>/{id}   delete
//

pub fn configure_collection<R: CollectionRoute>(cfg: &mut web::ServiceConfig) {
    let base = format!("/api/{}", R::COLLECTION);

    cfg.service(
        web::resource(base.as_str())
            .route(web::get().to(list_handler::<R>))
            .route(web::post().to(create_handler::<R>))
            .route(web::put().to(reorder_handler::<R>)),
    )
    .service(
        web::resource(format!("{base}/{{id}}"))
            .route(web::get().to(get_one_handler::<R>))
            .route(web::patch().to(update_handler::<R>))
            .route(web::put().to(update_handler::<R>))
            .route(web::delete().to(remove_handler::<R>)),
    );
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

pub async fn list_handler<R: CollectionRoute>(data: web::Data<AppState>) -> HttpResponse {
    match R::use_cases(&data).manage.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(err) => map_content_error::<R>(err),
    }
}

pub async fn get_one_handler<R: CollectionRoute>(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match parse_id::<R>(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match R::use_cases(&data).manage.get_one(id).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => map_content_error::<R>(err),
    }
}

pub async fn create_handler<R: CollectionRoute>(
    req: HttpRequest,
    body: web::Payload,
    data: web::Data<AppState>,
) -> HttpResponse {
    // 1️⃣ Read and validate the body; an attached image is not written yet
    let form = match read_payload::<R>(&req, body, &data).await {
        Ok(form) => form,
        Err(resp) => return resp,
    };
    let draft = match R::validate_draft(form.payload) {
        Ok(draft) => draft,
        Err(err) => return ApiResponse::bad_request(err.message()),
    };

    // 2️⃣ Write the image, then the document
    let image = match store_image(&data, form.image).await {
        Ok(image) => image,
        Err(resp) => return resp,
    };

    match R::use_cases(&data).manage.create(draft).await {
        Ok(item) => ApiResponse::created(item),
        Err(err) => {
            discard_image(&data, image).await;
            map_content_error::<R>(err)
        }
    }
}

pub async fn update_handler<R: CollectionRoute>(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Payload,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match parse_id::<R>(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

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

    match R::use_cases(&data).manage.update(id, changes).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => {
            discard_image(&data, image).await;
            map_content_error::<R>(err)
        }
    }
}

pub async fn remove_handler<R: CollectionRoute>(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = match parse_id::<R>(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match R::use_cases(&data).manage.remove(id).await {
        Ok(item) => ApiResponse::success(item),
        Err(err) => map_content_error::<R>(err),
    }
}

pub async fn reorder_handler<R: CollectionRoute>(
    items: web::Json<Vec<ReorderItem>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Some(reorder) = R::use_cases(&data).reorder.as_ref() else {
        return ApiResponse::method_not_allowed(&format!(
            "{} does not support reordering",
            R::NAME
        ));
    };

    match reorder.reorder(items.into_inner()).await {
        Ok(items) => ApiResponse::success(items),
        Err(err) => map_content_error::<R>(err),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{
        init_routes,
        media::adapter::outgoing::LocalImageStore,
        project::domain::entities::Project,
        shared::api::custom_json_config,
        skill::domain::entities::Skill,
        tests::support::{
            app_state_builder::{ordered, unordered, TestAppStateBuilder},
            fixtures,
            in_memory::InMemoryCollection,
            multipart::{file_part, text_part, with_parts},
        },
    };
    use std::path::Path;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(custom_json_config())
                    .configure(init_routes),
            )
            .await
        };
    }

    fn ids(body: &Value) -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|item| item["_id"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_skills_create_then_reorder_flow() {
        let app = app!(TestAppStateBuilder::default().build());

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(json!({ "name": "Rust", "icon": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let rust: Value = test::read_body_json(resp).await;
        assert_eq!(rust["name"], "Rust");
        assert_eq!(rust["icon"], Value::Null);
        assert_eq!(rust["order"], 0);

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(json!({ "name": "Go" }))
            .to_request();
        let go: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(go["order"], 1);

        let req = test::TestRequest::put()
            .uri("/api/skills")
            .set_json(json!([
                { "_id": go["_id"], "order": 0 },
                { "_id": rust["_id"], "order": 1 }
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }

    #[actix_web::test]
    async fn test_reorder_permutation_loses_nothing() {
        let a = fixtures::project("A", 0);
        let b = fixtures::project("B", 1);
        let c = fixtures::project("C", 2);
        let state = TestAppStateBuilder::default()
            .with_projects(ordered(InMemoryCollection::with_items(vec![
                a.clone(),
                b.clone(),
                c.clone(),
            ])))
            .build();
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/api/projects")
            .set_json(json!([
                { "_id": a.id, "order": 2 },
                { "_id": b.id, "order": 0 },
                { "_id": c.id, "order": 1 }
            ]))
            .to_request();
        let reordered: Value = test::call_and_read_body_json(&app, req).await;

        let expected = vec![b.id.to_string(), c.id.to_string(), a.id.to_string()];
        assert_eq!(ids(&reordered), expected);

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&listed), expected);
    }

    #[actix_web::test]
    async fn test_reorder_unknown_id_changes_nothing() {
        let a = fixtures::social_media("GitHub", 0);
        let repo = InMemoryCollection::with_items(vec![a.clone()]);
        let state = TestAppStateBuilder::default()
            .with_social_media(ordered(repo.clone()))
            .build();
        let app = app!(state);
        let ghost = uuid::Uuid::new_v4();

        let req = test::TestRequest::put()
            .uri("/api/social-media")
            .set_json(json!([
                { "_id": a.id, "order": 5 },
                { "_id": ghost, "order": 0 }
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], format!("Social media {ghost} not found"));
        assert_eq!(repo.snapshot()[0].order, 0);
    }

    #[actix_web::test]
    async fn test_reorder_on_unordered_collection_is_not_allowed() {
        let app = app!(TestAppStateBuilder::default().build());

        let req = test::TestRequest::put()
            .uri("/api/experiences")
            .set_json(json!([]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_missing_required_field_names_it() {
        let app = app!(TestAppStateBuilder::default().build());

        let req = test::TestRequest::post()
            .uri("/api/social-media")
            .set_json(json!({ "platform": "GitHub" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[actix_web::test]
    async fn test_responsibilities_are_cleaned_before_check() {
        let app = app!(TestAppStateBuilder::default().build());
        let base = json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "startDate": "January 2024",
        });

        let mut body = base.clone();
        body["responsibilities"] = json!(["", "  ", "valid"]);
        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["responsibilities"], json!(["valid"]));
        assert_eq!(created["endDate"], "");

        let mut body = base;
        body["responsibilities"] = json!(["", ""]);
        let req = test::TestRequest::post()
            .uri("/api/experiences")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_dates_must_be_month_year() {
        let app = app!(TestAppStateBuilder::default().build());

        for bad in ["01/2024", "2024", "Jan 2024"] {
            let req = test::TestRequest::post()
                .uri("/api/educations")
                .set_json(json!({
                    "degree": "BSc",
                    "institution": "State University",
                    "location": "Kupang",
                    "startYear": bad,
                    "descriptions": ["Thesis"]
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "accepted {bad}");
        }

        let req = test::TestRequest::post()
            .uri("/api/educations")
            .set_json(json!({
                "degree": "BSc",
                "institution": "State University",
                "location": "Kupang",
                "startYear": "January 2024",
                "descriptions": ["Thesis"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_404_and_keeps_items() {
        let repo = InMemoryCollection::with_items(vec![fixtures::skill("Rust", 0)]);
        let state = TestAppStateBuilder::default()
            .with_skills(ordered(repo.clone()))
            .build();
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/skills/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Skill not found");

        let req = test::TestRequest::delete()
            .uri("/api/skills/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_delete_returns_removed_document() {
        let rust = fixtures::skill("Rust", 0);
        let repo = InMemoryCollection::with_items(vec![rust.clone()]);
        let app = app!(TestAppStateBuilder::default()
            .with_skills(ordered(repo.clone()))
            .build());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/skills/{}", rust.id))
            .to_request();
        let removed: Skill = test::call_and_read_body_json(&app, req).await;

        assert_eq!(removed.id, rust.id);
        assert!(repo.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn test_patch_updates_only_submitted_fields() {
        let exp = fixtures::experience("Engineer", "March 2018", "December 2020");
        let app = app!(TestAppStateBuilder::default()
            .with_experiences(unordered(InMemoryCollection::with_items(vec![exp.clone()])))
            .build());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/experiences/{}", exp.id))
            .set_json(json!({ "endDate": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;

        assert_eq!(updated["endDate"], "");
        assert_eq!(updated["title"], "Engineer");
        assert_eq!(updated["startDate"], "March 2018");
    }

    #[actix_web::test]
    async fn test_duplicate_skill_name_is_rejected() {
        let app = app!(TestAppStateBuilder::default()
            .with_skills(ordered(InMemoryCollection::with_items(vec![
                fixtures::skill("Rust", 0)
            ])))
            .build());

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(json!({ "name": "Rust" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Skill \"Rust\" already exists");
    }

    #[actix_web::test]
    async fn test_store_failure_is_opaque_500() {
        let app = app!(TestAppStateBuilder::default()
            .with_projects(ordered(InMemoryCollection::failing(
                "password authentication failed"
            )))
            .build());

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "An unexpected error occurred");
    }

    #[actix_web::test]
    async fn test_malformed_reorder_body_is_400() {
        let app = app!(TestAppStateBuilder::default().build());

        let req = test::TestRequest::put()
            .uri("/api/skills")
            .insert_header(("content-type", "application/json"))
            .set_payload("[{\"_id\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    fn files_in(dir: &Path) -> Vec<String> {
        match std::fs::read_dir(dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    fn project_form() -> Vec<Vec<u8>> {
        vec![
            text_part("title", "Portfolio"),
            text_part("description", "This site"),
            text_part("link", "https://example.com"),
            text_part("tags", "rust, actix"),
            file_part("image", "shot.png", "image/png", &[1, 2, 3]),
        ]
    }

    #[actix_web::test]
    async fn test_rejected_project_form_writes_no_image() {
        let public = tempfile::tempdir().unwrap();
        let app = app!(TestAppStateBuilder::default()
            .with_image_store(LocalImageStore::new(public.path()))
            .build());

        let req = with_parts(
            test::TestRequest::post().uri("/api/projects"),
            vec![file_part("image", "shot.png", "image/png", &[1, 2, 3])],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Title is required");
        assert!(files_in(&public.path().join("project-images")).is_empty());
    }

    #[actix_web::test]
    async fn test_project_form_stores_image_under_returned_url() {
        let public = tempfile::tempdir().unwrap();
        let repo = InMemoryCollection::<Project>::new();
        let app = app!(TestAppStateBuilder::default()
            .with_projects(ordered(repo.clone()))
            .with_image_store(LocalImageStore::new(public.path()))
            .build());

        let req = with_parts(test::TestRequest::post().uri("/api/projects"), project_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["tags"], json!(["rust", "actix"]));

        let url = body["image"].as_str().unwrap();
        let written = std::fs::read(public.path().join(url.trim_start_matches('/'))).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_failed_project_create_removes_written_image() {
        let public = tempfile::tempdir().unwrap();
        let app = app!(TestAppStateBuilder::default()
            .with_projects(ordered(InMemoryCollection::failing("connection reset")))
            .with_image_store(LocalImageStore::new(public.path()))
            .build());

        let req = with_parts(test::TestRequest::post().uri("/api/projects"), project_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(files_in(&public.path().join("project-images")).is_empty());
    }
}
