use actix_multipart::{Field, Multipart};
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use futures::StreamExt;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::{
    content::domain::Resource,
    media::domain::{ImageSlot, UploadPolicy},
    shared::api::ApiResponse,
    AppState,
};

const MAX_JSON_BYTES: usize = 256 * 1024;
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// An uploaded image held in memory until the form it came with validates.
#[derive(Debug)]
pub struct PendingImage {
    pub slot: ImageSlot,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// An image that has been written and may still need removing.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub slot: ImageSlot,
    pub file_name: String,
}

#[derive(Debug)]
pub struct FormBody<P> {
    pub payload: P,
    pub image: Option<PendingImage>,
}

/// Reads a create/update body as JSON or, when an image is attached, as a
/// multipart form. An attached image passes the upload policy and gets its
/// final URL in the payload field the resource expects, but nothing is
/// written until [`store_image`].
pub async fn read_payload<R: Resource>(
    req: &HttpRequest,
    body: web::Payload,
    state: &AppState,
) -> Result<FormBody<R::Payload>, HttpResponse> {
    let (value, image) = if is_multipart(req) {
        read_multipart(req, body, R::IMAGE, state).await?
    } else {
        (read_json(body).await?, None)
    };

    let payload = serde_json::from_value(value)
        .map_err(|e| ApiResponse::bad_request(&format!("Invalid payload: {e}")))?;

    Ok(FormBody { payload, image })
}

pub async fn store_image(
    state: &AppState,
    image: Option<PendingImage>,
) -> Result<Option<StoredImage>, HttpResponse> {
    let Some(PendingImage {
        slot,
        file_name,
        bytes,
    }) = image
    else {
        return Ok(None);
    };

    state
        .image_store
        .save(slot, file_name.clone(), bytes)
        .await
        .map_err(|e| {
            error!(folder = slot.folder, error = %e, "image upload failed");
            ApiResponse::internal_error()
        })?;

    Ok(Some(StoredImage { slot, file_name }))
}

/// Removes an image whose document was never written.
pub async fn discard_image(state: &AppState, image: Option<StoredImage>) {
    let Some(StoredImage { slot, file_name }) = image else {
        return;
    };

    if let Err(e) = state.image_store.delete(slot, file_name.clone()).await {
        warn!(folder = slot.folder, %file_name, error = %e, "failed to remove orphaned image");
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_json(mut body: web::Payload) -> Result<Value, HttpResponse> {
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| ApiResponse::bad_request(&e.to_string()))?;
        if bytes.len() + chunk.len() > MAX_JSON_BYTES {
            return Err(ApiResponse::bad_request("Request body is too large"));
        }
        bytes.extend_from_slice(&chunk);
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiResponse::bad_request(&format!("Invalid JSON: {e}")))
}

async fn read_multipart(
    req: &HttpRequest,
    body: web::Payload,
    slot: Option<ImageSlot>,
    state: &AppState,
) -> Result<(Value, Option<PendingImage>), HttpResponse> {
    let mut multipart = Multipart::new(req.headers(), body);
    let mut fields = Map::new();
    let mut image = None;

    while let Some(item) = multipart.next().await {
        let mut field = item.map_err(invalid_multipart)?;

        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let limit = if file_name.is_some() {
            state.upload_policy.max_file_size_bytes as usize
        } else {
            MAX_TEXT_FIELD_BYTES
        };
        let bytes = read_field(&mut field, limit).await?;

        match (file_name, slot) {
            // browsers send an empty part when no file was chosen
            (Some(_), _) if bytes.is_empty() => continue,
            (Some(file_name), Some(slot)) if name == slot.form_field => {
                let pending = accept_image(&state.upload_policy, slot, &file_name, &mime, bytes)?;
                fields.insert(
                    slot.payload_field.to_string(),
                    Value::String(slot.public_url(&pending.file_name)),
                );
                image = Some(pending);
            }
            (Some(_), _) => {
                return Err(ApiResponse::bad_request(&format!(
                    "Unexpected file field \"{name}\""
                )));
            }
            (None, _) => {
                let text = String::from_utf8(bytes).map_err(|_| {
                    ApiResponse::bad_request(&format!("Field \"{name}\" is not valid UTF-8"))
                })?;
                insert_text(&mut fields, name, text);
            }
        }
    }

    Ok((Value::Object(fields), image))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, HttpResponse> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(invalid_multipart)?;
        if bytes.len() + chunk.len() > limit {
            return Err(ApiResponse::bad_request(&format!(
                "Field \"{}\" exceeds the {limit} byte limit",
                field.name().unwrap_or_default()
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn accept_image(
    policy: &UploadPolicy,
    slot: ImageSlot,
    file_name: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<PendingImage, HttpResponse> {
    policy
        .check_file_name(file_name)
        .and_then(|_| policy.check_mime(mime))
        .and_then(|_| policy.check_size(bytes.len() as u64))
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))?;

    let extension = UploadPolicy::extension_for(file_name, mime);
    Ok(PendingImage {
        slot,
        file_name: slot.new_file_name(&extension),
        bytes,
    })
}

/// Text parts are strings, except JSON arrays (`tags='["a","b"]'`); a repeated
/// name collects into an array.
fn insert_text(fields: &mut Map<String, Value>, name: String, text: String) {
    let value = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Value>(&text)
            .ok()
            .filter(Value::is_array)
            .unwrap_or(Value::String(text))
    } else {
        Value::String(text)
    };

    match fields.get_mut(&name) {
        Some(Value::Array(existing)) => existing.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

fn invalid_multipart(err: actix_multipart::MultipartError) -> HttpResponse {
    ApiResponse::bad_request(&format!("Invalid multipart body: {err}"))
}
