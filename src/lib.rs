//! Member dashboard for Academia de Fútbol Elite.
//!
//! Server-rendered with actix-web and askama. The dashboard's lifecycle and
//! headline numbers live in [`dashboard`]; everything it shows is fixed
//! reference data from [`models::academy`].

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;

/// Cookie-backed session holding the member markers and CSRF token.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

/// Page routes. Static files and the 404 fallback are wired in `main`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::session_handlers::landing))
        .route("/", web::post().to(handlers::session_handlers::enter))
        .route("/dashboard", web::get().to(handlers::dashboard::index))
        .route("/logout", web::post().to(handlers::session_handlers::logout));
}
