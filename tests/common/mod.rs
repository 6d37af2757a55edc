//! Shared test infrastructure for HTTP-level tests.
//!
//! - `init_app!()` - full application service with a fresh cookie session key
//! - `start_session()` - landing page visit, returns the session cookie and CSRF token
//! - `enter_as()` - submit the entry form and return the updated cookie

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use regex::Regex;

use academia::config::AppConfig;
use academia::models::academy::ReferenceData;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const MEMBER_EMAIL: &str = "ana@academia.co";
pub const MEMBER_NAME: &str = "Ana Torres";
pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// APP SETUP
// ============================================================================

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "APP_NAME" => Some("Academia de Fútbol Elite".to_string()),
        _ => None,
    })
}

pub fn test_data() -> ReferenceData {
    ReferenceData::academy().expect("reference data should parse")
}

/// Build and initialise the application under test.
macro_rules! init_app {
    () => {{
        let config = common::test_config();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(academia::session_middleware(config.session_key.clone(), false))
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new(common::test_data()))
                .configure(academia::routes)
                .default_service(actix_web::web::to(academia::handlers::not_found)),
        )
        .await
    }};
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub async fn body_text<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}

pub fn stat(html: &str, id: &str) -> String {
    let re = Regex::new(&format!(r#"id="{id}">([^<]*)<"#)).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| panic!("stat {id} not found"))
}

pub fn entry_form(email: &str, name: &str, user_type: &str, csrf: &str) -> String {
    serde_urlencoded::to_string([
        ("email", email),
        ("name", name),
        ("user_type", user_type),
        ("csrf_token", csrf),
    ])
    .expect("form should encode")
}
