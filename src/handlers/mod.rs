pub mod dashboard;
pub mod session_handlers;

use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::dashboard::Navigation;
use crate::errors::AppError;
use crate::templates_structs::NotFoundTemplate;

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

pub fn navigate(nav: &Navigation) -> HttpResponse {
    see_other(&nav.location)
}

/// Fallback for every unmatched route.
pub async fn not_found(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    use askama::Template;

    let body = NotFoundTemplate { app_name: config.app_name.clone() }.render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
