//! District listing endpoint

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;
use uuid::Uuid;

use mr_core::domain::entities::district::District;

fn district(name: &str, code: &str, is_active: bool) -> District {
    District {
        id: Uuid::new_v4(),
        name: name.to_string(),
        code: code.to_string(),
        province: "Kigali".to_string(),
        is_active,
    }
}

#[actix_rt::test]
async fn test_lists_active_districts_sorted_by_name() {
    let (state, backend) = common::build_state();
    {
        let mut districts = backend.districts.lock().unwrap();
        districts.push(district("Nyarugenge", "NYG", true));
        districts.push(district("Gasabo", "GSB", true));
        districts.push(district("Kicukiro", "KCK", false));
    }
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/districts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Gasabo");
    assert_eq!(data[1]["name"], "Nyarugenge");
}
