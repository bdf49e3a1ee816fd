// src/presentation/http/controllers/uploads.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::AuthContext;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};
use serde::Serialize;

const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpg", "image/jpeg"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// `PUT /post-image`: multipart `image` file plus an optional `oldPath`
/// field naming the file it replaces. Non-PNG/JPEG uploads are silently
/// declined rather than rejected with an error.
pub async fn put_post_image(
    Extension(state): Extension<HttpState>,
    ctx: AuthContext,
    mut multipart: Multipart,
) -> HttpResult<Json<UploadResponse>> {
    if ctx.actor().is_none() {
        return Err(HttpError::from_error(ApplicationError::unauthenticated(
            "not authenticated",
        )));
    }

    let mut image: Option<Vec<u8>> = None;
    let mut old_path: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
    })? {
        match field.name() {
            Some("image") => {
                let accepted = field
                    .content_type()
                    .is_some_and(|ct| ACCEPTED_IMAGE_TYPES.contains(&ct));
                let bytes = field.bytes().await.map_err(|err| {
                    HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
                })?;
                if accepted {
                    image = Some(bytes.to_vec());
                }
            }
            Some("oldPath") => {
                let value = field.text().await.map_err(|err| {
                    HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
                })?;
                if !value.is_empty() {
                    old_path = Some(value);
                }
            }
            _ => {}
        }
    }

    let Some(image) = image else {
        return Ok(Json(UploadResponse {
            message: "no file provided".into(),
            file_path: None,
        }));
    };

    let store = state.services.image_store();

    if let Some(old_path) = old_path {
        if let Err(err) = store.remove(&old_path).await {
            tracing::warn!(error = %err, path = %old_path, "failed to remove replaced image");
        }
    }

    let file_path = store
        .store(image)
        .await
        .map_err(HttpError::from_error)?;

    Ok(Json(UploadResponse {
        message: "file stored".into(),
        file_path: Some(file_path),
    }))
}
