// Template context structures for askama templates.

mod common;
mod dashboard;

pub use common::*;
pub use dashboard::*;

use actix_session::Session;

use crate::auth::csrf;
use crate::config::AppConfig;
use crate::dashboard::Visitor;

/// Context shared by every page rendered for an authorized visitor.
/// Templates access these as `ctx.email`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub email: String,
    pub avatar_initial: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, visitor: &Visitor) -> Self {
        Self {
            app_name: config.app_name.clone(),
            email: visitor.email.clone(),
            avatar_initial: visitor.avatar_initial(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
