//! Shared test fixture: one in-memory backend implementing every
//! repository and collaborator trait, and helpers to assemble the app.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use mr_api::app::AppState;
use mr_api::middleware::auth::Claims;
use mr_core::domain::entities::account::Account;
use mr_core::domain::entities::district::District;
use mr_core::domain::entities::profile::Profile;
use mr_core::domain::entities::reset_token::ResetToken;
use mr_core::domain::entities::verification_code::{Channel, VerificationCode};
use mr_core::errors::DomainError;
use mr_core::repositories::{
    AccountRepository, DistrictRepository, ProfileRepository, ResetTokenRepository,
    VerificationCodeRepository,
};
use mr_core::services::{
    AccountService, CacheStore, Notifier, PasswordResetConfig, PasswordResetService,
    ProfileService, RegistrationService, VerificationService,
};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// In-memory backend playing every persistence and delivery role at once
#[derive(Default)]
pub struct InMemoryBackend {
    pub accounts: Mutex<Vec<Account>>,
    pub codes: Mutex<Vec<VerificationCode>>,
    pub tokens: Mutex<Vec<ResetToken>>,
    pub profiles: Mutex<Vec<Profile>>,
    pub districts: Mutex<Vec<District>>,
    pub cache: Mutex<HashMap<String, String>>,
    pub sent_emails: Mutex<Vec<(String, String)>>,
    pub sent_sms: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl AccountRepository for InMemoryBackend {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.phone_number == phone_number)
            .cloned())
    }

    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email && a.phone_number == phone_number)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.email == email))
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.phone_number == phone_number))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(slot) => {
                *slot = account.clone();
                Ok(account)
            }
            None => Err(DomainError::not_found("account")),
        }
    }

    async fn apply_verification(
        &self,
        account: &Account,
        code_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        let mut codes = self.codes.lock().unwrap();
        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| DomainError::not_found("account"))?;
        let code = codes
            .iter_mut()
            .find(|c| c.id == code_id)
            .ok_or_else(|| DomainError::not_found("verification code"))?;
        *slot = account.clone();
        code.mark_used();
        Ok(())
    }

    async fn apply_password_reset(
        &self,
        account: &Account,
        token_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        let mut tokens = self.tokens.lock().unwrap();
        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| DomainError::not_found("account"))?;
        let token = tokens
            .iter_mut()
            .find(|t| t.id == token_id)
            .ok_or_else(|| DomainError::not_found("reset token"))?;
        *slot = account.clone();
        token.mark_used();
        Ok(())
    }
}

#[async_trait]
impl VerificationCodeRepository for InMemoryBackend {
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        self.codes.lock().unwrap().push(code.clone());
        Ok(code)
    }

    async fn find_latest_unused(
        &self,
        account_id: Uuid,
        channel: Channel,
    ) -> Result<Option<VerificationCode>, DomainError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.account_id == account_id && c.channel == channel && !c.is_used)
            .max_by_key(|c| c.created_at)
            .cloned())
    }
}

#[async_trait]
impl ResetTokenRepository for InMemoryBackend {
    async fn create(&self, token: ResetToken) -> Result<ResetToken, DomainError> {
        self.tokens.lock().unwrap().push(token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, DomainError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token == token)
            .cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryBackend {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.account_id == account_id)
            .cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => {
                *slot = profile.clone();
                Ok(profile)
            }
            None => Err(DomainError::not_found("profile")),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn find_available_riders(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_available_rider())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DistrictRepository for InMemoryBackend {
    async fn list_active(&self) -> Result<Vec<District>, DomainError> {
        let mut districts: Vec<District> = self
            .districts
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.is_active)
            .cloned()
            .collect();
        districts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(districts)
    }
}

#[async_trait]
impl Notifier for InMemoryBackend {
    async fn send_email(&self, to: &str, _subject: &str, body: &str) -> Result<(), String> {
        self.sent_emails
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(())
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<(), String> {
        self.sent_sms
            .lock()
            .unwrap()
            .push((to.to_string(), message.to_string()));
        Ok(())
    }
}

#[async_trait]
impl CacheStore for InMemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.cache.lock().unwrap().get(key).cloned())
    }

    async fn set_with_ttl(&self, key: &str, value: &str, _ttl_seconds: u64) -> Result<(), String> {
        self.cache
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.cache.lock().unwrap().remove(key).is_some())
    }
}

pub type TestState = AppState<
    InMemoryBackend,
    InMemoryBackend,
    InMemoryBackend,
    InMemoryBackend,
    InMemoryBackend,
    InMemoryBackend,
    InMemoryBackend,
>;

/// Build the shared app state over one in-memory backend
pub fn build_state() -> (web::Data<TestState>, Arc<InMemoryBackend>) {
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);

    let backend = Arc::new(InMemoryBackend::default());

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&backend),
        Arc::clone(&backend),
    ));
    let registration = Arc::new(RegistrationService::new(
        Arc::clone(&backend),
        Arc::clone(&verification),
        Arc::clone(&backend),
    ));
    let password_reset = Arc::new(PasswordResetService::new(
        Arc::clone(&backend),
        Arc::clone(&backend),
        Arc::clone(&backend),
        PasswordResetConfig::default(),
    ));
    let account = Arc::new(AccountService::new(
        Arc::clone(&backend),
        Arc::clone(&backend),
    ));
    let profiles = Arc::new(ProfileService::new(
        Arc::clone(&backend),
        Arc::clone(&backend),
        Arc::clone(&backend),
    ));

    let state = web::Data::new(AppState {
        registration,
        verification,
        password_reset,
        account,
        profiles,
        districts: Arc::clone(&backend),
    });

    (state, backend)
}

/// Mint a bearer token for an account id, signed with the test secret
pub fn bearer_token(account_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: account_id.to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Route-mounting shorthand for tests
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().app_data($state.clone()).configure(
                mr_api::app::configure::<
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                    common::InMemoryBackend,
                >,
            ),
        )
        .await
    };
}
