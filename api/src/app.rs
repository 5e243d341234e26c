//! Application state and route wiring.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{
    AccountService, CacheStore, Notifier, PasswordResetService, ProfileService,
    RegistrationService, VerificationService,
};

use crate::middleware::auth::JwtAuth;
use crate::routes;

/// Shared services handed to every handler
pub struct AppState<A, V, R, P, D, N, C>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    R: ResetTokenRepository,
    P: ProfileRepository,
    D: DistrictRepository,
    N: Notifier,
    C: CacheStore,
{
    pub registration: Arc<RegistrationService<A, V, N>>,
    pub verification: Arc<VerificationService<A, V>>,
    pub password_reset: Arc<PasswordResetService<A, R, N>>,
    pub account: Arc<AccountService<A, N>>,
    pub profiles: Arc<ProfileService<A, P, C>>,
    pub districts: Arc<D>,
}

/// Mount every route on the given service config.
///
/// Call with the concrete repository/service types and an `AppState` of the
/// same types already registered as app data.
pub fn configure<A, V, R, P, D, N, C>(cfg: &mut web::ServiceConfig)
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    R: ResetTokenRepository + 'static,
    P: ProfileRepository + 'static,
    D: DistrictRepository + 'static,
    N: Notifier + 'static,
    C: CacheStore + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route(
                            "/register",
                            web::post().to(routes::auth::register::register::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/verify-phone",
                            web::post()
                                .to(routes::auth::verify::verify_phone::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/verify-email",
                            web::post()
                                .to(routes::auth::verify::verify_email::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/resend-code",
                            web::post()
                                .to(routes::auth::register::resend_code::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/password-reset",
                            web::post().to(
                                routes::auth::password_reset::request_reset::<A, V, R, P, D, N, C>,
                            ),
                        )
                        .route(
                            "/password-reset/confirm",
                            web::post().to(
                                routes::auth::password_reset::confirm_reset::<A, V, R, P, D, N, C>,
                            ),
                        )
                        .route(
                            "/recover",
                            web::post().to(routes::auth::recover::recover::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/account-status",
                            web::get()
                                .to(routes::auth::recover::account_status::<A, V, R, P, D, N, C>)
                                .wrap(JwtAuth::new()),
                        ),
                )
                .route(
                    "/districts",
                    web::get().to(routes::districts::list_districts::<A, V, R, P, D, N, C>),
                )
                .service(
                    web::scope("/profiles")
                        .route(
                            "/riders/available",
                            web::get()
                                .to(routes::profiles::riders::available_riders::<A, V, R, P, D, N, C>),
                        )
                        .route(
                            "/riders/{id}/location",
                            web::patch()
                                .to(routes::profiles::riders::update_location::<A, V, R, P, D, N, C>)
                                .wrap(JwtAuth::new()),
                        )
                        .service(
                            web::resource("/me")
                                .wrap(JwtAuth::new())
                                .route(web::get().to(
                                    routes::profiles::crud::my_profile::<A, V, R, P, D, N, C>,
                                ))
                                .route(web::put().to(
                                    routes::profiles::crud::update_profile::<A, V, R, P, D, N, C>,
                                ))
                                .route(web::delete().to(
                                    routes::profiles::crud::delete_profile::<A, V, R, P, D, N, C>,
                                )),
                        )
                        .service(
                            web::resource("")
                                .wrap(JwtAuth::new())
                                .route(web::post().to(
                                    routes::profiles::crud::create_profile::<A, V, R, P, D, N, C>,
                                ))
                                .route(web::get().to(
                                    routes::profiles::crud::list_profiles::<A, V, R, P, D, N, C>,
                                )),
                        ),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "motoride-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
