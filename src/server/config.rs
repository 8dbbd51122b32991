use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::server::error::config::ConfigError;

/// Default listen address when `BIND_ADDRESS` is not set
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `JWT_ALGORITHM` unknown or not an HMAC algorithm
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let jwt_algorithm = match lookup("JWT_ALGORITHM") {
            Some(value) => parse_hmac_algorithm(&value)?,
            None => Algorithm::HS256,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_algorithm,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "JWT_ALGORITHM".to_string(),
        reason,
    };

    let algorithm = Algorithm::from_str(value)
        .map_err(|_| invalid(format!("unknown algorithm {}", value)))?;

    // Tokens are verified with a shared secret only
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(invalid(format!("{:?} is not an HMAC algorithm", other))),
    }
}
