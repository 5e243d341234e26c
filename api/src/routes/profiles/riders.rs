use actix_web::{web, HttpResponse};
use uuid::Uuid;

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::profile::{ProfileListResponse, UpdateLocationRequest};
use crate::handlers::{error::to_response, validate_payload};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/profiles/riders/available
///
/// Served read-through from the cache with a 300 s TTL.
pub async fn available_riders<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
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
    match state.profiles.available_riders().await {
        Ok(riders) => {
            HttpResponse::Ok().json(ApiResponse::success(ProfileListResponse::new(riders)))
        }
        Err(error) => to_response(&error),
    }
}

/// Handler for PATCH /api/v1/profiles/riders/{id}/location (bearer auth)
///
/// Only the owning rider may move their pin; the cached rider view is
/// invalidated on success.
pub async fn update_location<A, V, R, P, D, N, C>(
    state: web::Data<AppState<A, V, R, P, D, N, C>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateLocationRequest>,
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

    let profile_id = path.into_inner();

    match state
        .profiles
        .update_location(
            auth.account_id,
            profile_id,
            payload.current_latitude,
            payload.current_longitude,
        )
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(profile)),
        Err(error) => to_response(&error),
    }
}
