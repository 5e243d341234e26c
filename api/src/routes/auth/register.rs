use actix_web::{web, HttpResponse};

use mr_core::domain::entities::account::UserType;
use mr_core::domain::entities::verification_code::Channel;
use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::registration::NewRegistration;
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;
use mr_shared::utils::masking::mask_email;
use mr_shared::utils::validation::normalize_phone_number;

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, RegisterRequest, RegisterResponse, ResendCodeRequest};
use crate::handlers::{error::to_response, validate_payload};

/// Handler for POST /api/v1/auth/register
///
/// Creates an inactive account and dispatches one verification code per
/// channel.
pub async fn register<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<RegisterRequest>,
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

    if payload.password != payload.password_confirm {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Password fields didn't match"));
    }

    let user_type = match UserType::parse(&payload.user_type) {
        Some(user_type) => user_type,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
                "user_type must be 'passenger' or 'rider'",
            ));
        }
    };

    let input = NewRegistration {
        email: payload.email.clone(),
        phone_number: normalize_phone_number(&payload.phone_number),
        password: payload.password.clone(),
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        user_type,
    };

    log::info!("processing registration for {}", mask_email(&input.email));

    match state.registration.register(input).await {
        Ok(account) => HttpResponse::Created().json(ApiResponse::success(RegisterResponse {
            message: "Registration successful. Verification codes sent to your phone and email."
                .to_string(),
            account_id: account.id,
            email: account.email,
            phone_number: account.phone_number,
        })),
        Err(error) => to_response(&error),
    }
}

/// Handler for POST /api/v1/auth/resend-code
pub async fn resend_code<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    payload: web::Json<ResendCodeRequest>,
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

    let channel = match Channel::parse(&payload.channel) {
        Some(channel) => channel,
        None => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("channel must be 'phone' or 'email'"));
        }
    };

    match state.registration.resend_code(&payload.email, channel).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Verification code sent.",
        ))),
        Err(error) => to_response(&error),
    }
}
