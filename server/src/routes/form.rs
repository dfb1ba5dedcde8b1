//! Multipart form decoding shared by the POST endpoints.
//!
//! The kiosk pages submit browser `FormData`, so every mutating endpoint
//! reads `multipart/form-data`. Fields are collected into a map up front;
//! handlers then pull required and optional values by name.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::StatusCode;

/// Read every field of a multipart body into a name -> text map.
///
/// # Errors
///
/// Returns `400 Bad Request` when the body is not readable as multipart
/// text fields.
pub(crate) async fn collect_fields(multipart: &mut Multipart) -> Result<HashMap<String, String>, StatusCode> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        fields.insert(name, value);
    }
    Ok(fields)
}

/// A field the form must carry. Missing field -> `400 Bad Request`.
pub(crate) fn required(fields: &HashMap<String, String>, name: &str) -> Result<String, StatusCode> {
    fields.get(name).cloned().ok_or(StatusCode::BAD_REQUEST)
}

/// A field that defaults to empty when absent.
pub(crate) fn optional(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// A field with an explicit default when absent.
pub(crate) fn optional_or(fields: &HashMap<String, String>, name: &str, default: &str) -> String {
    fields.get(name).cloned().unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
