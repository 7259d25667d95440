//! Tests for the application healthcheck.

use salvo::http::StatusCode;

use super::helpers::*;
use cadence_test::component::constants::APP_ROUTE_PREFIX;

#[test_log::test(tokio::test)]
async fn healthcheck_responds_ok() {
    let service = create_test_service();

    TestRequest::get(&format!("{APP_ROUTE_PREFIX}/healthcheck"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}
