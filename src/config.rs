use actix_web::cookie::Key;

const DEFAULT_API_URL: &str = "http://localhost:3060/graphql";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "./static";
/// Served by this app; point `SIGNIN_URL` at an external auth page instead if there is one.
pub const DEFAULT_SIGNIN_URL: &str = "/signin";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime configuration, read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub signin_url: String,
    pub session_key: Option<String>,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_empty("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            signin_url: non_empty("SIGNIN_URL").unwrap_or_else(|| DEFAULT_SIGNIN_URL.to_string()),
            session_key: non_empty("SESSION_KEY"),
            cookie_secure: non_empty("COOKIE_SECURE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Cookie signing key. Falls back to a random key, which logs every
    /// viewer out on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need {}+), generating random key", val.len(), MIN_SESSION_KEY_LEN);
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
