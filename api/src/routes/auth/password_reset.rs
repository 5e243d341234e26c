use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, PasswordResetConfirmRequest, PasswordResetRequest};
use crate::handlers::{error::to_response, validate_payload};

/// Handler for POST /api/v1/auth/password-reset
///
/// Always reports success: the response must not reveal whether the email
/// belongs to an account.
pub async fn request_reset<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<PasswordResetRequest>,
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

    match state.password_reset.request_reset(&payload.email).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "If an account with this email exists, a password reset link has been sent.",
        ))),
        Err(error) => to_response(&error),
    }
}

/// Handler for POST /api/v1/auth/password-reset/confirm
pub async fn confirm_reset<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<PasswordResetConfirmRequest>,
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

    if payload.new_password != payload.new_password_confirm {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Password fields didn't match"));
    }

    match state
        .password_reset
        .confirm_reset(&payload.token, &payload.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Password reset successful. You can now log in with your new password.",
        ))),
        Err(error) => to_response(&error),
    }
}
