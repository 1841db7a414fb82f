use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body, `{"msg": "..."}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Informational body with the same shape as [`ErrorResponse`].
#[derive(Object, Debug, Clone)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
