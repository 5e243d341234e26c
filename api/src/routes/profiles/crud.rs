use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::MessageResponse;
use crate::dto::profile::{ProfileDetailsDto, ProfileListResponse};
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/profiles (bearer auth)
pub async fn create_profile<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    auth: AuthContext,
    payload: web::Json<ProfileDetailsDto>,
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
    let details = payload.0.into_new_details();

    match state.profiles.create_profile(auth.account_id, details).await {
        Ok(profile) => HttpResponse::Created().json(ApiResponse::success(profile)),
        Err(error) => to_response(&error),
    }
}

/// Handler for GET /api/v1/profiles/me (bearer auth)
pub async fn my_profile<A, V, R, P, D, N, C>(
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
    match state.profiles.my_profile(auth.account_id).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(profile)),
        Err(error) => to_response(&error),
    }
}

/// Handler for PUT /api/v1/profiles/me (bearer auth)
pub async fn update_profile<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    auth: AuthContext,
    payload: web::Json<ProfileDetailsDto>,
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
    // Server-managed rider fields carry over from the stored payload.
    let current = match state.profiles.my_profile(auth.account_id).await {
        Ok(profile) => profile,
        Err(error) => return to_response(&error),
    };
    let details = payload.0.into_updated_details(&current.details);

    match state.profiles.update_profile(auth.account_id, details).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(profile)),
        Err(error) => to_response(&error),
    }
}

/// Handler for DELETE /api/v1/profiles/me (bearer auth)
pub async fn delete_profile<A, V, R, P, D, N, C>(
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
    match state.profiles.delete_profile(auth.account_id).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new("Profile deleted.")))
        }
        Err(error) => to_response(&error),
    }
}

/// Handler for GET /api/v1/profiles (bearer auth, administrative listing)
pub async fn list_profiles<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    _auth: AuthContext,
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
    match state.profiles.list_profiles().await {
        Ok(profiles) => {
            HttpResponse::Ok().json(ApiResponse::success(ProfileListResponse::new(profiles)))
        }
        Err(error) => to_response(&error),
    }
}
