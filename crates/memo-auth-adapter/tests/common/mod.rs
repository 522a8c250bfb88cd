/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for memo-auth-adapter tests

use memo_auth_adapter::{ClientConfig, FetchMode, LensClient, LoginManager, MiddlewareClient};
use wiremock::MockServer;

/// Fixture key and the address it derives
#[allow(dead_code)]
pub const FIXTURE_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const FIXTURE_ADDRESS: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Login manager whose middleware and Lens clients both point at mock servers
#[allow(dead_code)]
pub fn login_manager_for(
    middleware: &MockServer,
    lens: &MockServer,
    fetch_mode: FetchMode,
) -> LoginManager {
    let middleware = MiddlewareClient::with_config_and_base_url(
        ClientConfig::default(),
        &middleware.uri(),
        "https://memo.io",
    )
    .expect("middleware client");
    let lens = LensClient::with_config_and_base_url(ClientConfig::default(), &lens.uri(), "memo.io")
        .expect("lens client");

    LoginManager::new(vec![Box::new(middleware), Box::new(lens)]).with_fetch_mode(fetch_mode)
}

/// Lens reply carrying `text` as the challenge
pub fn lens_challenge_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {"challenge": {"text": text}},
    })
}
