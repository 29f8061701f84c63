// src/config/mod.rs
// Environment-driven configuration, loaded once at startup

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone, Deserialize)]
pub struct MindfulConfig {
    // ── Gemini Configuration
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub model_timeout: u64,

    // ── Identity Configuration
    pub google_client_id: Option<String>,
    pub jwt_secret: Option<String>,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings
    pub cors_origins: Vec<String>,

    // ── Conversation Settings
    pub history_window: usize,
    pub strict_credential: bool,

    // ── Logging Configuration
    pub log_level: String,
}

impl Default for MindfulConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model_timeout: 60,
            google_client_id: None,
            jwt_secret: None,
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            history_window: 10,
            strict_credential: false,
            log_level: "info".to_string(),
        }
    }
}

// Values may carry trailing `# comments` from hand-edited .env files.
fn clean(val: &str) -> &str {
    val.split('#').next().unwrap_or("").trim()
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => match clean(&val).parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Config: {} = '{}' (parse failed, using default)", key, val);
                default
            }
        },
        Err(_) => default,
    }
}

/// Optional secrets: unset and blank both mean "not configured".
fn env_secret(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| clean(&v).to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

impl MindfulConfig {
    pub fn from_env() -> Self {
        // A missing .env is normal in production
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let cors_origins = match std::env::var("MINDFUL_CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => defaults.cors_origins,
        };

        Self {
            gemini_api_key: env_secret("GEMINI_API_KEY"),
            gemini_model: env_var_or("GEMINI_MODEL", defaults.gemini_model),
            gemini_base_url: env_var_or("GEMINI_BASE_URL", defaults.gemini_base_url),
            model_timeout: env_var_or("MINDFUL_MODEL_TIMEOUT", defaults.model_timeout),
            google_client_id: env_secret("GOOGLE_CLIENT_ID"),
            jwt_secret: env_secret("MINDFUL_JWT_SECRET"),
            host: env_var_or("MINDFUL_HOST", defaults.host),
            port: env_var_or("MINDFUL_PORT", defaults.port),
            cors_origins,
            history_window: env_var_or("MINDFUL_HISTORY_WINDOW", defaults.history_window),
            strict_credential: env_var_or("MINDFUL_STRICT_CREDENTIAL", defaults.strict_credential),
            log_level: env_var_or("MINDFUL_LOG_LEVEL", defaults.log_level),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Max tracing level; unknown names fall back to INFO.
    pub fn tracing_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<MindfulConfig> = Lazy::new(MindfulConfig::from_env);
