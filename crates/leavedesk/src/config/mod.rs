use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub desk: DeskConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let seed_demo_data = load_flag("APP_SEED_DEMO", true)?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            desk: DeskConfig { seed_demo_data },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn load_flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { name }),
        },
    }
}

/// Settings controlling the in-memory desk's starting state.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub seed_demo_data: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFlag { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { name } => {
                write!(f, "{name} must be one of 1, 0, true, false, yes, no")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_SEED_DEMO");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.desk.seed_demo_data);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn recognizes_production_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
    }

    #[test]
    fn parses_seed_flag_spellings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEED_DEMO", "no");
        let config = AppConfig::load().expect("config loads");
        assert!(!config.desk.seed_demo_data);

        env::set_var("APP_SEED_DEMO", "1");
        let config = AppConfig::load().expect("config loads");
        assert!(config.desk.seed_demo_data);
    }

    #[test]
    fn rejects_unrecognized_seed_flag() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEED_DEMO", "maybe");
        match AppConfig::load() {
            Err(ConfigError::InvalidFlag { name }) => assert_eq!(name, "APP_SEED_DEMO"),
            other => panic!("expected invalid flag error, got {other:?}"),
        }
    }
}
