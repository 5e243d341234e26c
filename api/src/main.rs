use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use mr_api::app::{self, AppState};
use mr_api::middleware::cors::create_cors;

use mr_core::services::{
    AccountService, Notifier, PasswordResetConfig, PasswordResetService, ProfileService,
    RegistrationService, VerificationService,
};
use mr_infra::cache::{RedisCacheStore, RedisClient};
use mr_infra::database::mysql::{
    MySqlAccountRepository, MySqlDistrictRepository, MySqlProfileRepository,
    MySqlResetTokenRepository, MySqlVerificationCodeRepository,
};
use mr_infra::database::DatabasePool;
use mr_infra::notify::{GatewayNotifier, MockNotifier, SmsGatewayClient, SmtpMailer};
use mr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting MotoRide API Server");

    // The SMS provider decides which notifier backs the whole stack; the
    // mock keeps local development free of credentials.
    if config.notify.sms.provider == "mock" {
        run(config, MockNotifier::new()).await
    } else {
        let mailer = SmtpMailer::new(&config.notify.smtp)?;
        let sms = SmsGatewayClient::new(config.notify.sms.clone())?;
        run(config, GatewayNotifier::new(mailer, sms)).await
    }
}

async fn run<N: Notifier + 'static>(config: AppConfig, notifier: N) -> anyhow::Result<()> {
    let pool = DatabasePool::new(&config.database).await?;
    let redis_client = RedisClient::new(&config.cache).await?;

    let account_repo = Arc::new(MySqlAccountRepository::new(pool.inner().clone()));
    let code_repo = Arc::new(MySqlVerificationCodeRepository::new(pool.inner().clone()));
    let token_repo = Arc::new(MySqlResetTokenRepository::new(pool.inner().clone()));
    let profile_repo = Arc::new(MySqlProfileRepository::new(pool.inner().clone()));
    let district_repo = Arc::new(MySqlDistrictRepository::new(pool.inner().clone()));
    let cache = Arc::new(RedisCacheStore::new(redis_client));
    let notifier = Arc::new(notifier);

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&account_repo),
        Arc::clone(&code_repo),
    ));
    let registration = Arc::new(RegistrationService::new(
        Arc::clone(&account_repo),
        Arc::clone(&verification),
        Arc::clone(&notifier),
    ));
    let password_reset = Arc::new(PasswordResetService::new(
        Arc::clone(&account_repo),
        token_repo,
        Arc::clone(&notifier),
        PasswordResetConfig {
            frontend_url: config.notify.smtp.frontend_url.clone(),
        },
    ));
    let account = Arc::new(AccountService::new(
        Arc::clone(&account_repo),
        Arc::clone(&notifier),
    ));
    let profiles = Arc::new(ProfileService::new(account_repo, profile_repo, cache));

    let state = web::Data::new(AppState {
        registration,
        verification,
        password_reset,
        account,
        profiles,
        districts: district_repo,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(
                app::configure::<
                    MySqlAccountRepository,
                    MySqlVerificationCodeRepository,
                    MySqlResetTokenRepository,
                    MySqlProfileRepository,
                    MySqlDistrictRepository,
                    N,
                    RedisCacheStore,
                >,
            )
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
