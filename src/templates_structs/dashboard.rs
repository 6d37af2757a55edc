use askama::Template;

use super::PageContext;
use crate::dashboard::{DashboardMetrics, Tab};
use crate::models::academy::ReferenceData;

/// One entry in the tab strip.
pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl TabLink {
    pub fn strip(active: Tab) -> Vec<TabLink> {
        Tab::ALL
            .into_iter()
            .map(|tab| TabLink {
                slug: tab.slug(),
                label: tab.label(),
                active: tab == active,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub ctx: PageContext,
    pub tabs: Vec<TabLink>,
    pub active_tab: &'static str,
    pub metrics: DashboardMetrics,
    pub data: &'a ReferenceData,
}
