use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::response::reply;

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    InvalidJson,
    InvalidDataUrl,
    UnsupportedImageType,
    Base64Decode,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl ErrorMessage {
    /// `"<message>: <cause>"`, for errors that echo their underlying cause.
    pub fn with_cause(&self, cause: impl fmt::Display) -> String {
        format!("{}: {}", self.to_str(), cause)
    }

    fn to_str(&self) -> &'static str {
        match self {
            ErrorMessage::InvalidJson => "Invalid JSON",
            ErrorMessage::InvalidDataUrl => "Invalid base64 format",
            ErrorMessage::UnsupportedImageType => "Unsupported image type",
            ErrorMessage::Base64Decode => "Failed to decode base64",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn into_http_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(status = %self.status, "{}", self.message);
        }

        reply(self.status, self.message)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
