//! HTTP mapping for [`ExporterError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use cmcexporter_core::error::ExporterError;

/// Wrapper so core errors can be returned from axum handlers.
#[derive(Debug)]
pub struct HttpError(pub ExporterError);

impl From<ExporterError> for HttpError {
    fn from(e: ExporterError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // Scrape failures never get here; they are reported in-band.
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
