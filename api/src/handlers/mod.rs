//! Shared handler utilities

pub mod error;

use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::Validate;

use mr_shared::types::response::ApiResponse;

/// Run validator-derived checks and render field errors as a 400 response
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), HttpResponse> {
    if let Err(validation_errors) = payload.validate() {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for (field, errors) in validation_errors.field_errors() {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            field_errors.insert(field.to_string(), messages);
        }

        return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::validation(
            "validation failed",
            field_errors,
        )));
    }
    Ok(())
}
