use actix_web::{App, HttpServer, middleware, web};

use academia::config::AppConfig;
use academia::models::academy::ReferenceData;
use academia::{handlers, routes, session_middleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is the normal case outside development
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }
    env_logger::init();

    let config = AppConfig::from_env();
    let data = ReferenceData::academy().map_err(std::io::Error::other)?;

    let bind_addr = config.bind_addr;
    let config = web::Data::new(config);
    let data = web::Data::new(data);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(
                config.session_key.clone(),
                config.cookie_secure,
            ))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(data.clone())
            .service(actix_files::Files::new("/static", &config.static_dir))
            .configure(routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
