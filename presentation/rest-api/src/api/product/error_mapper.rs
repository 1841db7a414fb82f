use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::NoFileUploaded
            | ProductError::NameEmpty
            | ProductError::SlugEmpty
            | ProductError::InvalidStock
            | ProductError::InvalidPrice
            | ProductError::InvalidCategory => StatusCode::BAD_REQUEST,
            ProductError::InvalidImage | ProductError::ImageTooLarge => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ProductError::Repository(_) | ProductError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
