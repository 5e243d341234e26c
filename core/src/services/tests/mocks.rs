//! Mock implementations for service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::account::{Account, UserType};
use crate::domain::entities::profile::Profile;
use crate::domain::entities::reset_token::ResetToken;
use crate::domain::entities::verification_code::{Channel, VerificationCode};
use crate::errors::DomainError;
use crate::repositories::{
    AccountRepository, ProfileRepository, ResetTokenRepository, VerificationCodeRepository,
};
use crate::services::cache::CacheStore;
use crate::services::notifier::Notifier;

/// Shared in-memory tables, so the account repository's compound operations
/// can reach the code and token rows the way a transaction would.
#[derive(Default)]
pub struct MockStores {
    pub accounts: Arc<Mutex<Vec<Account>>>,
    pub codes: Arc<Mutex<Vec<VerificationCode>>>,
    pub tokens: Arc<Mutex<Vec<ResetToken>>>,
}

impl MockStores {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct MockAccountRepository {
    stores: Arc<MockStores>,
}

impl MockAccountRepository {
    pub fn new(stores: Arc<MockStores>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.phone_number == phone_number).cloned())
    }

    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.email == email && a.phone_number == phone_number)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts.iter().any(|a| a.email == email))
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        let accounts = self.stores.accounts.lock().unwrap();
        Ok(accounts.iter().any(|a| a.phone_number == phone_number))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.stores.accounts.lock().unwrap();
        accounts.push(account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.stores.accounts.lock().unwrap();
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
        let mut accounts = self.stores.accounts.lock().unwrap();
        let mut codes = self.stores.codes.lock().unwrap();

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
        let mut accounts = self.stores.accounts.lock().unwrap();
        let mut tokens = self.stores.tokens.lock().unwrap();

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

pub struct MockVerificationCodeRepository {
    stores: Arc<MockStores>,
}

impl MockVerificationCodeRepository {
    pub fn new(stores: Arc<MockStores>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.stores.codes.lock().unwrap();
        codes.push(code.clone());
        Ok(code)
    }

    async fn find_latest_unused(
        &self,
        account_id: Uuid,
        channel: Channel,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.stores.codes.lock().unwrap();
        Ok(codes
            .iter()
            .filter(|c| c.account_id == account_id && c.channel == channel && !c.is_used)
            .max_by_key(|c| c.created_at)
            .cloned())
    }
}

pub struct MockResetTokenRepository {
    stores: Arc<MockStores>,
}

impl MockResetTokenRepository {
    pub fn new(stores: Arc<MockStores>) -> Self {
        Self { stores }
    }
}

#[async_trait]
impl ResetTokenRepository for MockResetTokenRepository {
    async fn create(&self, token: ResetToken) -> Result<ResetToken, DomainError> {
        let mut tokens = self.stores.tokens.lock().unwrap();
        tokens.push(token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, DomainError> {
        let tokens = self.stores.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| t.token == token).cloned())
    }
}

pub struct MockProfileRepository {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.account_id == account_id).cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        profiles.push(profile.clone());
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
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.clone())
    }

    async fn find_available_riders(&self) -> Result<Vec<Profile>, DomainError> {
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles
            .iter()
            .filter(|p| p.is_available_rider())
            .cloned()
            .collect())
    }
}

/// Notifier that records deliveries and optionally fails every send
pub struct MockNotifier {
    pub emails: Arc<Mutex<Vec<(String, String, String)>>>,
    pub sms: Arc<Mutex<Vec<(String, String)>>>,
    pub fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            sms: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.fail {
            return Err("delivery failed".to_string());
        }
        self.emails
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }

    async fn send_sms(&self, to: &str, message: &str) -> Result<(), String> {
        if self.fail {
            return Err("delivery failed".to_string());
        }
        self.sms
            .lock()
            .unwrap()
            .push((to.to_string(), message.to_string()));
        Ok(())
    }
}

/// Cache store over a plain map; TTLs are recorded but never enforced
pub struct MockCacheStore {
    pub entries: Arc<Mutex<HashMap<String, (String, u64)>>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }
}

/// A plain unverified account for seeding tests. The hash is a placeholder;
/// tests that exercise password rotation install a real one through the
/// service under test.
pub fn seed_account(email: &str, phone: &str, user_type: UserType) -> Account {
    Account::new(
        email.to_string(),
        phone.to_string(),
        "$2b$12$placeholderplaceholderplace".to_string(),
        user_type,
        "Test".to_string(),
        "User".to_string(),
    )
}
