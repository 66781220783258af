//! Environment configuration.
//!
//! Credentials and the target vehicle come from environment variables.
//! Missing or empty required values are fatal before any network
//! activity.

use std::env;

use thiserror::Error;

/// Environment variable holding the Skoda Connect account user.
pub const ENV_USERNAME: &str = "SKODA_USERNAME";
/// Environment variable holding the Skoda Connect account password.
pub const ENV_PASSWORD: &str = "SKODA_PASSWORD";
/// Environment variable holding the vehicle identification number.
pub const ENV_VIN: &str = "SKODA_VIN";
/// Environment variable enabling verbose API client logging.
pub const ENV_DEBUG: &str = "DEBUG";

/// Marker rendered in logs in place of a present password.
const REDACTED: &str = "<redacted>";

/// Fatal configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Username or password missing from the environment.
    #[error("No SKODA_USERNAME or SKODA_PASSWORD set")]
    MissingCredentials,

    /// VIN missing from the environment.
    #[error("No SKODA_VIN set")]
    MissingVin,
}

/// Account credentials and the vehicle they apply to.
///
/// The password never appears in `Debug` output or logs; use
/// [`VehicleIdentity::password`] to read it for authentication and
/// [`VehicleIdentity::password_display`] anywhere a log line needs to
/// mention it.
#[derive(Clone, PartialEq, Eq)]
pub struct VehicleIdentity {
    /// Skoda Connect account user.
    pub username: String,
    /// Vehicle identification number.
    pub vin: String,
    password: String,
}

impl VehicleIdentity {
    /// Create an identity from its parts.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            vin: vin.into(),
            password: password.into(),
        }
    }

    /// The account password, for authentication only.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Loggable stand-in for the password: a redaction marker when one is
    /// set, the literal `None` otherwise.
    pub fn password_display(&self) -> &'static str {
        if self.password.is_empty() {
            "None"
        } else {
            REDACTED
        }
    }
}

impl std::fmt::Debug for VehicleIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleIdentity")
            .field("username", &self.username)
            .field("vin", &self.vin)
            .field("password", &self.password_display())
            .finish()
    }
}

/// Runtime configuration drawn from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials and target vehicle.
    pub identity: VehicleIdentity,
    /// Verbose API client logging (`DEBUG=true`, case-insensitive).
    pub api_debug: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if a required variable is missing or empty.
    /// Username and password are checked together, then the VIN.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a lookup function.
    ///
    /// Split out of [`Config::from_env`] so tests can supply variables
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = non_empty(lookup(ENV_USERNAME)).ok_or(ConfigError::MissingCredentials)?;
        let password = non_empty(lookup(ENV_PASSWORD)).ok_or(ConfigError::MissingCredentials)?;
        let vin = non_empty(lookup(ENV_VIN)).ok_or(ConfigError::MissingVin)?;
        let api_debug = lookup(ENV_DEBUG)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            identity: VehicleIdentity::new(username, password, vin),
            api_debug,
        })
    }
}

/// Treat empty values as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_full_config_loads() {
        let config = Config::from_lookup(vars(&[
            (ENV_USERNAME, "user@example.com"),
            (ENV_PASSWORD, "hunter2"),
            (ENV_VIN, "TMBJJ7NS5K8000000"),
        ]))
        .unwrap();

        assert_eq!(config.identity.username, "user@example.com");
        assert_eq!(config.identity.password(), "hunter2");
        assert_eq!(config.identity.vin, "TMBJJ7NS5K8000000");
        assert!(!config.api_debug);
    }

    #[test]
    fn test_missing_username_is_credentials_error() {
        let err =
            Config::from_lookup(vars(&[(ENV_PASSWORD, "pw"), (ENV_VIN, "VIN")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredentials);
    }

    #[test]
    fn test_empty_password_counts_as_missing() {
        let err = Config::from_lookup(vars(&[
            (ENV_USERNAME, "user"),
            (ENV_PASSWORD, ""),
            (ENV_VIN, "VIN"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingCredentials);
    }

    #[test]
    fn test_missing_vin_reported_after_credentials() {
        let err =
            Config::from_lookup(vars(&[(ENV_USERNAME, "user"), (ENV_PASSWORD, "pw")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVin);
    }

    #[test]
    fn test_credentials_error_takes_precedence_over_vin() {
        // Everything missing: the credentials error is the one reported.
        let err = Config::from_lookup(vars(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingCredentials);
    }

    #[test]
    fn test_debug_flag_case_insensitive() {
        for value in ["true", "TRUE", "True", "tRuE"] {
            let config = Config::from_lookup(vars(&[
                (ENV_USERNAME, "u"),
                (ENV_PASSWORD, "p"),
                (ENV_VIN, "v"),
                (ENV_DEBUG, value),
            ]))
            .unwrap();
            assert!(config.api_debug, "DEBUG={value} should enable api debug");
        }
    }

    #[test]
    fn test_debug_flag_off_for_other_values() {
        for value in ["false", "1", "yes", "truely", ""] {
            let config = Config::from_lookup(vars(&[
                (ENV_USERNAME, "u"),
                (ENV_PASSWORD, "p"),
                (ENV_VIN, "v"),
                (ENV_DEBUG, value),
            ]))
            .unwrap();
            assert!(
                !config.api_debug,
                "DEBUG={value} should not enable api debug"
            );
        }
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let identity = VehicleIdentity::new("user", "hunter2", "VIN");
        let rendered = format!("{identity:?}");
        assert!(!rendered.contains("hunter2"), "got {rendered}");
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_password_display_markers() {
        assert_eq!(
            VehicleIdentity::new("u", "pw", "v").password_display(),
            "<redacted>"
        );
        assert_eq!(VehicleIdentity::new("u", "", "v").password_display(), "None");
    }
}
