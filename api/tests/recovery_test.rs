//! Account recovery and status endpoints

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use mr_core::domain::entities::account::{Account, UserType};

fn locked_account(email: &str, phone: &str) -> Account {
    let mut account = Account::new(
        email.to_string(),
        phone.to_string(),
        "$2b$12$placeholderplaceholderplace".to_string(),
        UserType::Rider,
        "Test".to_string(),
        "User".to_string(),
    );
    account.lock(None);
    account
}

#[actix_rt::test]
async fn test_recover_unlocks_and_notifies() {
    let (state, backend) = common::build_state();
    backend
        .accounts
        .lock()
        .unwrap()
        .push(locked_account("a@x.com", "+250700000001"));
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/recover")
        .set_json(json!({"email": "a@x.com", "phone_number": "+250700000001"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(!backend.accounts.lock().unwrap()[0].is_account_locked);
    assert_eq!(backend.sent_emails.lock().unwrap().len(), 1);
    assert_eq!(backend.sent_sms.lock().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_recover_mismatched_pair() {
    let (state, backend) = common::build_state();
    backend
        .accounts
        .lock()
        .unwrap()
        .push(locked_account("a@x.com", "+250700000001"));
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/recover")
        .set_json(json!({"email": "a@x.com", "phone_number": "+250700000002"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_recover_unlocked_account() {
    let (state, backend) = common::build_state();
    let mut account = locked_account("a@x.com", "+250700000001");
    account.clear_lock();
    backend.accounts.lock().unwrap().push(account);
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/recover")
        .set_json(json!({"email": "a@x.com", "phone_number": "+250700000001"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_account_status_requires_bearer() {
    let (state, _) = common::build_state();
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/account-status")
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    assert!(resp.is_err() || resp.unwrap().status() == StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_account_status_snapshot() {
    let (state, backend) = common::build_state();
    let account = locked_account("a@x.com", "+250700000001");
    let account_id = account.id;
    backend.accounts.lock().unwrap().push(account);
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/account-status")
        .insert_header((
            "Authorization",
            format!("Bearer {}", common::bearer_token(account_id)),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["is_account_locked"], true);
    assert_eq!(body["data"]["is_active"], false);
}

#[actix_rt::test]
async fn test_account_status_with_stale_token() {
    let (state, _) = common::build_state();
    let app = test_app!(state);

    // Valid signature, but the account no longer exists.
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/account-status")
        .insert_header((
            "Authorization",
            format!("Bearer {}", common::bearer_token(Uuid::new_v4())),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
