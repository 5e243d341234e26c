//! Profile service: role-specific profiles and the cached available-riders
//! view.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::profile::{Profile, ProfileDetails};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::cache::CacheStore;

/// Cache key for the derived available-riders view
pub const AVAILABLE_RIDERS_CACHE_KEY: &str = "available_riders";

/// TTL for the available-riders view (300 seconds)
pub const AVAILABLE_RIDERS_TTL_SECONDS: u64 = 300;

/// CRUD over profiles plus the read-through available-riders cache.
pub struct ProfileService<A, P, C>
where
    A: AccountRepository,
    P: ProfileRepository,
    C: CacheStore,
{
    account_repo: Arc<A>,
    profile_repo: Arc<P>,
    cache: Arc<C>,
}

impl<A, P, C> ProfileService<A, P, C>
where
    A: AccountRepository,
    P: ProfileRepository,
    C: CacheStore,
{
    pub fn new(account_repo: Arc<A>, profile_repo: Arc<P>, cache: Arc<C>) -> Self {
        Self {
            account_repo,
            profile_repo,
            cache,
        }
    }

    /// Create the profile for an account. One profile per account, and the
    /// payload role must match the account's role.
    pub async fn create_profile(
        &self,
        account_id: Uuid,
        details: ProfileDetails,
    ) -> DomainResult<Profile> {
        let account = self.require_account(account_id).await?;

        if details.role() != account.user_type {
            return Err(DomainError::validation(
                "profile role does not match account role",
            ));
        }
        if self
            .profile_repo
            .find_by_account(account.id)
            .await?
            .is_some()
        {
            return Err(DomainError::validation("profile already exists"));
        }

        let profile = self
            .profile_repo
            .create(Profile::new(account.id, details))
            .await?;

        tracing::info!(
            account_id = %account.id,
            profile_id = %profile.id,
            role = profile.role().as_str(),
            "profile created"
        );

        Ok(profile)
    }

    /// The caller's own profile
    pub async fn my_profile(&self, account_id: Uuid) -> DomainResult<Profile> {
        self.profile_repo
            .find_by_account(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("profile"))
    }

    /// Replace the caller's profile payload (role is immutable)
    pub async fn update_profile(
        &self,
        account_id: Uuid,
        details: ProfileDetails,
    ) -> DomainResult<Profile> {
        let mut profile = self.my_profile(account_id).await?;
        profile.update_details(details)?;
        let profile = self.profile_repo.update(profile).await?;

        // Availability or approval may have changed; drop the derived view.
        self.invalidate_available_riders().await;

        Ok(profile)
    }

    /// Delete the caller's profile
    pub async fn delete_profile(&self, account_id: Uuid) -> DomainResult<()> {
        let profile = self.my_profile(account_id).await?;
        if !self.profile_repo.delete(profile.id).await? {
            return Err(DomainError::not_found("profile"));
        }
        self.invalidate_available_riders().await;
        Ok(())
    }

    /// Every profile (administrative listing)
    pub async fn list_profiles(&self) -> DomainResult<Vec<Profile>> {
        self.profile_repo.list_all().await
    }

    /// The available-riders view: approved riders currently marked
    /// available, served read-through from the cache with a 300 s TTL.
    ///
    /// Concurrent misses may recompute redundantly; the source query is
    /// idempotent and the TTL bounds any staleness.
    pub async fn available_riders(&self) -> DomainResult<Vec<Profile>> {
        match self.cache.get(AVAILABLE_RIDERS_CACHE_KEY).await {
            Ok(Some(cached)) => match serde_json::from_str::<Vec<Profile>>(&cached) {
                Ok(profiles) => return Ok(profiles),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding undecodable cached rider view");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "cache read failed, falling back to store");
            }
        }

        let riders = self.profile_repo.find_available_riders().await?;

        match serde_json::to_string(&riders) {
            Ok(serialized) => {
                if let Err(e) = self
                    .cache
                    .set_with_ttl(
                        AVAILABLE_RIDERS_CACHE_KEY,
                        &serialized,
                        AVAILABLE_RIDERS_TTL_SECONDS,
                    )
                    .await
                {
                    tracing::warn!(error = %e, "cache write failed");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "rider view serialization failed");
            }
        }

        Ok(riders)
    }

    /// Update a rider's current coordinates. The caller must own the
    /// profile; the cached rider view is dropped synchronously afterwards.
    pub async fn update_location(
        &self,
        caller_account_id: Uuid,
        profile_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> DomainResult<Profile> {
        let mut profile = self
            .profile_repo
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| DomainError::not_found("profile"))?;

        if profile.account_id != caller_account_id {
            return Err(DomainError::PermissionDenied);
        }

        profile.set_location(latitude, longitude)?;
        let profile = self.profile_repo.update(profile).await?;

        self.invalidate_available_riders().await;

        Ok(profile)
    }

    /// Drop the cached rider view; the next read repopulates from the store
    pub async fn invalidate_available_riders(&self) {
        if let Err(e) = self.cache.delete(AVAILABLE_RIDERS_CACHE_KEY).await {
            tracing::warn!(error = %e, "cache invalidation failed");
        }
    }

    async fn require_account(&self, account_id: Uuid) -> DomainResult<Account> {
        self.account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))
    }
}
