use askama::Template;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub errors: Vec<String>,
    pub email: String,
    pub name: String,
}

/// Shown while the dashboard has not been mounted yet.
#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub app_name: String,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
}
