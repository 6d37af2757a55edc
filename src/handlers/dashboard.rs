use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::SessionContext;
use crate::config::AppConfig;
use crate::dashboard::{DashboardView, Screen, Tab, derive_metrics};
use crate::errors::{AppError, render};
use crate::models::academy::ReferenceData;
use crate::templates_structs::{DashboardTemplate, LoadingTemplate, PageContext, TabLink};

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
}

pub async fn index(
    session: Session,
    config: web::Data<AppConfig>,
    data: web::Data<ReferenceData>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let mut view = DashboardView::new();
    view.mount();
    view.authorize(&SessionContext::load(&session));

    match view.screen() {
        Screen::Loading => render(LoadingTemplate { app_name: config.app_name.clone() }),
        Screen::Redirect(nav) => {
            log::debug!("Dashboard visit without member session, redirecting to {}", nav.location);
            Ok(super::navigate(nav))
        }
        Screen::Dashboard(visitor) => {
            let active = Tab::from_param(query.tab.as_deref());
            let tmpl = DashboardTemplate {
                ctx: PageContext::build(&session, &config, visitor),
                tabs: TabLink::strip(active),
                active_tab: active.slug(),
                metrics: derive_metrics(&data.players, &data.payments, &data.trainings),
                data: &data,
            };
            render(tmpl)
        }
    }
}
