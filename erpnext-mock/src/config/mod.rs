use serde::Deserialize;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ErpNextConfig {
    pub port: u16,
}

impl ErpNextConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = match env::var("ERPNEXT_PORT") {
            Ok(val) => val.parse().map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!("ERPNEXT_PORT is not a valid port: {}", val))
            })?,
            Err(_) => 8080,
        };

        Ok(ErpNextConfig { port })
    }
}
