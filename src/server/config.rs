use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_JWT_EXPIRES_IN_HOURS: i64 = 168;
/// Ten years.
const MAX_JWT_EXPIRES_IN_HOURS: i64 = 87_600;

/// Credentials used to create the first administrator at startup.
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in_hours: i64,

    pub host: String,
    pub port: u16,

    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,

    pub admin_bootstrap: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_bootstrap = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_expires_in_hours: parse_token_lifetime(optional_var("JWT_EXPIRES_IN_HOURS"))?,
            host: optional_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed_var("PORT", DEFAULT_PORT)?,
            cors_origins: optional_var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            admin_bootstrap,
        })
    }

    /// Socket address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

/// Parses the token lifetime in hours, accepting 1 up to `MAX_JWT_EXPIRES_IN_HOURS`.
///
/// # Returns
/// - `Ok(i64)` - The parsed lifetime, or the default when unset
/// - `Err(ConfigError::InvalidEnvVar)` - Not an integer or outside the accepted range
fn parse_token_lifetime(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_JWT_EXPIRES_IN_HOURS);
    };

    match value.parse::<i64>() {
        Ok(hours) if (1..=MAX_JWT_EXPIRES_IN_HOURS).contains(&hours) => Ok(hours),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRES_IN_HOURS".to_string(),
            value,
        }),
    }
}

/// Splits a comma-separated origin list, dropping blank entries.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("http://localhost:3000, https://alumni.example.edu ,,");

        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://alumni.example.edu".to_string()
            ]
        );
    }

    #[test]
    fn token_lifetime_defaults_when_unset() {
        assert_eq!(
            parse_token_lifetime(None).unwrap(),
            DEFAULT_JWT_EXPIRES_IN_HOURS
        );
        assert_eq!(parse_token_lifetime(Some("24".to_string())).unwrap(), 24);
        assert_eq!(
            parse_token_lifetime(Some("87600".to_string())).unwrap(),
            MAX_JWT_EXPIRES_IN_HOURS
        );
    }

    #[test]
    fn token_lifetime_outside_range_is_rejected() {
        for value in ["0", "-1", "87601", "10000000000000000", "week"] {
            assert!(
                matches!(
                    parse_token_lifetime(Some(value.to_string())),
                    Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "JWT_EXPIRES_IN_HOURS"
                ),
                "accepted {value}"
            );
        }
    }

    #[test]
    fn empty_origin_list_allows_any() {
        assert!(parse_origins("  ").is_empty());
    }
}
