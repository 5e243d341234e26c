//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;

use mr_core::errors::DomainError;
use mr_shared::types::response::ApiResponse;

/// Render a domain error with the status code the taxonomy prescribes.
///
/// Account state errors are all client errors; store and internal failures
/// are logged and collapsed into an opaque 500.
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("{} not found", resource))),
        DomainError::PermissionDenied => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error("Permission denied"))
        }
        DomainError::Account(account_error) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(account_error.to_string()))
        }
        DomainError::Database(_) | DomainError::Internal { .. } => {
            log::error!("internal error: {}", error);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}
