use actix_web::{web, HttpResponse};

use mr_core::domain::entities::verification_code::Channel;
use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;
use mr_shared::utils::masking::{mask_email, mask_phone};
use mr_shared::utils::validation::normalize_phone_number;

use crate::app::AppState;
use crate::dto::auth::{EmailVerificationRequest, PhoneVerificationRequest, VerificationResponse};
use crate::handlers::{error::to_response, validate_payload};

/// Handler for POST /api/v1/auth/verify-phone
pub async fn verify_phone<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<PhoneVerificationRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    R: ResetTokenRepository + 'static,
    P: ProfileRepository + 'static,
    D: DistrictRepository + 'static,
    N: Notifier + 'static,
    C: CacheStore + 'static,
{
    if let Err(response) = validate_payload(&payload.0) {
        return response;
    }

    let phone_number = normalize_phone_number(&payload.phone_number);
    log::info!("verifying phone for {}", mask_phone(&phone_number));

    match state
        .verification
        .verify(&phone_number, Channel::Phone, &payload.code)
        .await
    {
        Ok(account) => HttpResponse::Ok().json(ApiResponse::success(VerificationResponse {
            message: "Phone verified successfully.".to_string(),
            phone_verified: account.phone_verified,
            email_verified: account.email_verified,
            is_active: account.is_active,
        })),
        Err(error) => to_response(&error),
    }
}

/// Handler for POST /api/v1/auth/verify-email
pub async fn verify_email<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<EmailVerificationRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    R: ResetTokenRepository + 'static,
    P: ProfileRepository + 'static,
    D: DistrictRepository + 'static,
    N: Notifier + 'static,
    C: CacheStore + 'static,
{
    if let Err(response) = validate_payload(&payload.0) {
        return response;
    }

    log::info!("verifying email for {}", mask_email(&payload.email));

    match state
        .verification
        .verify(&payload.email, Channel::Email, &payload.code)
        .await
    {
        Ok(account) => HttpResponse::Ok().json(ApiResponse::success(VerificationResponse {
            message: "Email verified successfully.".to_string(),
            phone_verified: account.phone_verified,
            email_verified: account.email_verified,
            is_active: account.is_active,
        })),
        Err(error) => to_response(&error),
    }
}
