use std::net::SocketAddr;

use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_APP_NAME: &str = "Academia de Fútbol Elite";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
///
/// Invalid values never abort startup; they fall back to defaults with a
/// warning.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub session_key: Key,
    pub cookie_secure: bool,
    pub static_dir: String,
    pub app_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .and_then(|raw| match raw.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    log::warn!("BIND_ADDR {raw:?} is invalid ({e}), using {DEFAULT_BIND_ADDR}");
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);

        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let app_name = lookup("APP_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Self { bind_addr, session_key, cookie_secure, static_dir, app_name }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
