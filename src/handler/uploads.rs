use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{
    dtos::uploaddtos::{AvatarUploadDto, FileUploadDto, UploadResponseDto},
    error::{ErrorMessage, HttpError},
    service::storage::ArtifactKind,
    utils::{
        extension::{file_name_extension, image_extension},
        payload::{decode, metadata_mime, Base64Payload},
        response::reply,
        url::artifact_url,
    },
    AppState,
};

pub fn upload_handler() -> Router {
    Router::new()
        .route(
            "/upload_avatar_base64",
            post(upload_avatar_base64).options(preflight),
        )
        .route(
            "/upload_file_base64",
            post(upload_file_base64).options(preflight),
        )
}

pub async fn preflight() -> impl IntoResponse {
    reply(StatusCode::OK, ())
}

pub async fn upload_avatar_base64(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, HttpError> {
    tracing::info!("Received request to /upload_avatar_base64");

    let body: AvatarUploadDto = parse_json(&read_body(body)?)?;
    body.validate()
        .map_err(|e| HttpError::bad_request(validation_message(&e, &["avatar"])))?;

    tracing::debug!("Avatar data length: {}", body.avatar.len());

    // Avatars must be a strict `<metadata>,<data>` pair.
    let (metadata, data) = match Base64Payload::parse(&body.avatar) {
        Base64Payload::DataUrl { metadata, data } => (metadata, data),
        other => {
            tracing::warn!("Invalid base64 format, parts: {}", other.segments());
            return Err(HttpError::bad_request(ErrorMessage::InvalidDataUrl.to_string()));
        }
    };

    tracing::debug!("MIME type: {}", metadata_mime(metadata).unwrap_or(metadata));

    let extension = image_extension(metadata).ok_or_else(|| {
        HttpError::bad_request(ErrorMessage::UnsupportedImageType.to_string())
    })?;

    let image_data = decode(data)
        .map_err(|e| HttpError::bad_request(ErrorMessage::Base64Decode.with_cause(e)))?;

    tracing::debug!("Decoded image size: {} bytes", image_data.len());

    let artifact = app_state
        .store
        .save(ArtifactKind::Avatar, extension, &image_data)
        .await?;

    let url = artifact_url(&headers, &uri, &artifact.public_path());
    tracing::info!("Avatar saved successfully: {} ({})", url, artifact.path.display());

    Ok(reply(StatusCode::OK, Json(UploadResponseDto { url })))
}

pub async fn upload_file_base64(
    Extension(app_state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, HttpError> {
    tracing::info!("Received request to /upload_file_base64");

    let body: FileUploadDto = parse_json(&read_body(body)?)?;
    body.validate()
        .map_err(|e| HttpError::bad_request(validation_message(&e, &["file", "name"])))?;

    let extension = file_name_extension(&body.name);

    // Bare strings and multi-comma strings both go to the decoder whole.
    let payload = Base64Payload::parse(&body.file);
    if let Base64Payload::MultiComma { segments, .. } = &payload {
        tracing::debug!("File payload has {} comma-separated parts, decoding as-is", segments);
    }

    let file_data = decode(payload.lenient_data())
        .map_err(|e| HttpError::bad_request(ErrorMessage::Base64Decode.with_cause(e)))?;

    tracing::debug!("Decoded file size: {} bytes", file_data.len());

    let artifact = app_state
        .store
        .save(ArtifactKind::File, extension, &file_data)
        .await?;

    let url = artifact_url(&headers, &uri, &artifact.public_path());
    tracing::info!("File saved successfully: {} ({})", url, artifact.path.display());

    Ok(reply(StatusCode::OK, Json(UploadResponseDto { url })))
}

// Body read failures (e.g. over the size limit) keep their status but
// still go out through `reply`.
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, HttpError> {
    body.map_err(|rejection| HttpError::new(rejection.body_text(), rejection.status()))
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpError> {
    serde_json::from_slice(body)
        .map_err(|e| HttpError::bad_request(ErrorMessage::InvalidJson.with_cause(e)))
}

/// First failing field's message, in the order the fields are checked.
fn validation_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();
    order
        .iter()
        .filter_map(|field| {
            fields
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, errs)| *errs)
        })
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
