use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{CacheStore, Notifier};
use mr_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::handlers::error::to_response;

/// Handler for GET /api/v1/districts
pub async fn list_districts<A, V, R, P, D, N, C>(
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
    match state.districts.list_active().await {
        Ok(districts) => HttpResponse::Ok().json(ApiResponse::success(districts)),
        Err(error) => to_response(&error),
    }
}
