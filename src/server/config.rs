use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` present and `PORT` absent or a valid port number
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `PORT` unparsable
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
