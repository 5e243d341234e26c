//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy for the API.
///
/// Permissive about origins (mobile clients), explicit about methods and
/// headers.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ])
        .max_age(3600)
}
