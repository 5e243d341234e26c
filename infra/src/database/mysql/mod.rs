//! MySQL implementations of the core repository traits

pub mod account_repository;
pub mod district_repository;
pub mod profile_repository;
pub mod reset_token_repository;
pub mod verification_code_repository;

pub use account_repository::MySqlAccountRepository;
pub use district_repository::MySqlDistrictRepository;
pub use profile_repository::MySqlProfileRepository;
pub use reset_token_repository::MySqlResetTokenRepository;
pub use verification_code_repository::MySqlVerificationCodeRepository;
