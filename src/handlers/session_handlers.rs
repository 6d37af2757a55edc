use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::{SessionContext, SessionMarker, VISITOR_ROLE};
use crate::auth::{csrf, validate};
use crate::config::AppConfig;
use crate::dashboard::state;
use crate::errors::{AppError, render};
use crate::templates_structs::LandingTemplate;

const MEMBER_TYPES: [&str; 2] = [VISITOR_ROLE, "admin"];
const NAME_MAX_LEN: usize = 100;

#[derive(Deserialize)]
pub struct EntryForm {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub user_type: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn landing(
    session: Session,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    // Members with a session go straight to their dashboard
    if SessionContext::load(&session).is_visitor() {
        return Ok(super::see_other("/dashboard"));
    }

    let tmpl = LandingTemplate {
        app_name: config.app_name.clone(),
        csrf_token: csrf::get_or_create_token(&session),
        errors: vec![],
        email: String::new(),
        name: String::new(),
    };
    render(tmpl)
}

/// Writes the session markers the dashboard checks. No credentials involved.
pub async fn enter(
    session: Session,
    config: web::Data<AppConfig>,
    form: web::Form<EntryForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let errors: Vec<String> = [
        validate::validate_email(&form.email),
        validate::validate_optional(&form.name, "El nombre", NAME_MAX_LEN),
        validate::validate_choice(&form.user_type, "El tipo de miembro", &MEMBER_TYPES),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !errors.is_empty() {
        let tmpl = LandingTemplate {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(&session),
            errors,
            email: form.email.clone(),
            name: form.name.clone(),
        };
        return render(tmpl);
    }

    let marker = SessionMarker {
        user_type: form.user_type.clone(),
        email: form.email.trim().to_string(),
        name: form.name.trim().to_string(),
    };
    marker.store(&session)?;
    log::info!("Session started for {} ({})", marker.email, marker.user_type);

    Ok(super::see_other("/dashboard"))
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let nav = state::logout(&session);
    log::info!("Session markers cleared");
    Ok(super::navigate(&nav))
}
