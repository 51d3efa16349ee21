#![allow(dead_code)]

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    test,
};
use edge_ai_api::{AppMetrics, AppSettings, AppState, LoginForm, create_app};

pub const ALICE: &str = "alice";
pub const ALICE_PASSWORD: &str = "secret";
pub const BOB: &str = "bob";
pub const BOB_PASSWORD: &str = "hunter2";

/// In-memory state seeded with two users
pub async fn seeded_state() -> AppState {
    let state = AppState::in_memory(&AppSettings::default().jwt);
    state
        .auth
        .create_user(ALICE, ALICE_PASSWORD)
        .await
        .expect("seed alice");
    state
        .auth
        .create_user(BOB, BOB_PASSWORD)
        .await
        .expect("seed bob");
    state
}

pub fn app_with(
    state: AppState,
    settings: AppSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    create_app(
        state,
        AppMetrics::new().expect("metrics registry"),
        settings,
    )
}

pub fn login_request(username: &str, password: &str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/api/login")
        .set_form(LoginForm::new(username, password))
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

/// Log in through the real endpoint and evaluate to the access token
#[allow(unused_macros)]
macro_rules! login_token {
    ($app:expr, $username:expr, $password:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            common::login_request($username, $password).to_request(),
        )
        .await;
        assert!(resp.status().is_success(), "login for {} failed", $username);
        let token: edge_ai_api::TokenResponse = actix_web::test::read_body_json(resp).await;
        token.access_token
    }};
}
