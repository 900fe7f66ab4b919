//! Request body decoding shared by the write endpoints.
//!
//! The web front-end posts `FormData` (multipart) while scripts tend to post
//! JSON. [`JsonOrForm`] normalizes either, or a url-encoded form, into the
//! same typed input before a handler sees it.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Body decoded from JSON, multipart form data, or a url-encoded form,
/// chosen by `Content-Type`.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Multipart,
    UrlEncoded,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "multipart/form-data" {
        BodyKind::Multipart
    } else {
        BodyKind::UrlEncoded
    }
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());

        match body_kind(content_type) {
            BodyKind::Json => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?;
                Ok(Self(value))
            }
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?;
                let pairs = multipart_pairs(multipart).await?;
                from_form_pairs(pairs).map(Self)
            }
            BodyKind::UrlEncoded => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?;
                from_form_pairs(pairs).map(Self)
            }
        }
    }
}

/// Decode form fields into `T`. A repeated key keeps its first value, so
/// multipart and url-encoded bodies agree.
fn from_form_pairs<T: DeserializeOwned>(pairs: Vec<(String, String)>) -> Result<T, ApiError> {
    let mut fields = Map::new();
    for (name, value) in pairs {
        fields.entry(name).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::Validation(format!("Invalid form data: {e}")))
}

/// Named text fields in body order. Unnamed parts are skipped.
async fn multipart_pairs(mut multipart: Multipart) -> Result<Vec<(String, String)>, ApiError> {
    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field
            .text()
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        pairs.push((name, text));
    }
    Ok(pairs)
}
