//! Account services: registration, verification, password reset, recovery,
//! and profiles, plus the collaborator traits they depend on.

pub mod account;
pub mod cache;
pub mod notifier;
pub mod password;
pub mod password_reset;
pub mod profile;
pub mod registration;
pub mod verification;

pub use account::AccountService;
pub use cache::CacheStore;
pub use notifier::Notifier;
pub use password_reset::{PasswordResetConfig, PasswordResetService};
pub use profile::ProfileService;
pub use registration::{NewRegistration, RegistrationService};
pub use verification::VerificationService;

#[cfg(test)]
mod tests;
