use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_JITSI_SERVER_URL: &str = "meet.jit.si";

const DEFAULT_CLASS_SERVICE_URL: &str = "http://127.0.0.1:8081";
const DEFAULT_SCHEDULE_SERVICE_URL: &str = "http://127.0.0.1:8082";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub project_name: String,
    pub version: String,
    pub services: ServicesConfig,
    pub providers: ProvidersConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Base URLs for the backend services this layer proxies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub class_service_url: String,
    pub schedule_service_url: String,
}

/// Client-integration settings handed out by GET /api/:provider/config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub blip_app_key: Option<String>,
    pub jitsi_server_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub session_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self {
            environment,
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "portal".to_string()),
            version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            services: ServicesConfig {
                class_service_url: env::var("CLASS_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_CLASS_SERVICE_URL.to_string()),
                schedule_service_url: env::var("SCHEDULE_SERVICE_URL")
                    .unwrap_or_else(|_| DEFAULT_SCHEDULE_SERVICE_URL.to_string()),
            },
            providers: ProvidersConfig {
                blip_app_key: env::var("BLIP_APP_KEY").ok().filter(|v| !v.is_empty()),
                jitsi_server_url: env::var("JITSI_SERVER_URL")
                    .ok()
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| DEFAULT_JITSI_SERVER_URL.to_string()),
            },
            security: SecurityConfig {
                session_secret: env::var("SESSION_SECRET").unwrap_or_default(),
            },
        }
    }

    /// The session secret is the one setting without a usable default; every
    /// gated route depends on it.
    pub fn is_ready(&self) -> bool {
        !self.security.session_secret.is_empty()
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
