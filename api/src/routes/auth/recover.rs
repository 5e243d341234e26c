use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;
use mr_shared::utils::validation::normalize_phone_number;

use crate::app::AppState;
use crate::dto::auth::{AccountRecoveryRequest, AccountStatusResponse, MessageResponse};
use crate::handlers::{error::to_response, validate_payload};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/auth/recover
///
/// Two-factor identity confirmation: the email and the phone number must
/// both match the same locked account.
pub async fn recover<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<AccountRecoveryRequest>,
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

    match state.account.recover(&payload.email, &phone_number).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Account recovered successfully. You can now log in.",
        ))),
        Err(error) => to_response(&error),
    }
}

/// Handler for GET /api/v1/auth/account-status (bearer auth)
pub async fn account_status<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    auth: AuthContext,
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
    match state.account.account_status(auth.account_id).await {
        Ok(account) => {
            HttpResponse::Ok().json(ApiResponse::success(AccountStatusResponse::from(&account)))
        }
        Err(error) => to_response(&error),
    }
}
