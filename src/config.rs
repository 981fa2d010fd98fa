use std::env;

use crate::services::nutrition::DEFAULT_CALORIE_TARGET;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub cors_allowed_origin: Option<String>,
    pub default_calorie_target: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: "3000".to_string(),
            cors_allowed_origin: None,
            default_calorie_target: DEFAULT_CALORIE_TARGET,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());
        let default_calorie_target = match env::var("DEFAULT_CALORIE_TARGET") {
            Ok(value) => value.parse().map_err(|e| {
                anyhow::anyhow!("DEFAULT_CALORIE_TARGET must be a whole number: {}", e)
            })?,
            Err(_) => DEFAULT_CALORIE_TARGET,
        };

        Ok(Self {
            port,
            cors_allowed_origin,
            default_calorie_target,
        })
    }
}
