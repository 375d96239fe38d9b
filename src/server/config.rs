use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CLOUDINARY_FOLDER: &str = "tourtoise";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPLOAD_CONCURRENCY: usize = 4;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Credentials and target folder for the Cloudinary account.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

/// Bounds applied to the concurrent upload fan-out.
#[derive(Debug, Clone, Copy)]
pub struct UploadSettings {
    pub timeout: Duration,
    pub concurrency: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
            concurrency: DEFAULT_UPLOAD_CONCURRENCY,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub app_addr: SocketAddr,

    pub cloudinary: CloudinaryConfig,
    pub upload: UploadSettings,

    pub session_secure_cookie: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let app_addr = lookup("APP_ADDR").unwrap_or_else(|| DEFAULT_APP_ADDR.to_string());
        let app_addr = app_addr
            .parse::<SocketAddr>()
            .map_err(|e| invalid("APP_ADDR", e))?;

        let timeout_secs = match lookup("UPLOAD_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| invalid("UPLOAD_TIMEOUT_SECS", e))?,
            None => DEFAULT_UPLOAD_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(invalid("UPLOAD_TIMEOUT_SECS", "must be at least 1").into());
        }

        let concurrency = match lookup("UPLOAD_CONCURRENCY") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|e| invalid("UPLOAD_CONCURRENCY", e))?,
            None => DEFAULT_UPLOAD_CONCURRENCY,
        };
        if concurrency == 0 {
            return Err(invalid("UPLOAD_CONCURRENCY", "must be at least 1").into());
        }

        let session_secure_cookie = match lookup("SESSION_SECURE_COOKIE") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| invalid("SESSION_SECURE_COOKIE", e))?,
            None => false,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(invalid("LOG_FORMAT", format!("unknown format '{}'", other)).into())
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_addr,
            cloudinary: CloudinaryConfig {
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
                folder: lookup("CLOUDINARY_FOLDER")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_FOLDER.to_string()),
            },
            upload: UploadSettings {
                timeout: Duration::from_secs(timeout_secs),
                concurrency,
            },
            session_secure_cookie,
            log_format,
        })
    }
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DATABASE_URL", "sqlite::memory:"),
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_API_KEY", "key"),
        ("CLOUDINARY_API_SECRET", "secret"),
    ];

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.app_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.cloudinary.folder, "tourtoise");
        assert_eq!(config.upload.timeout, Duration::from_secs(30));
        assert_eq!(config.upload.concurrency, 4);
        assert!(!config.session_secure_cookie);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn reports_missing_variable_by_name() {
        let result = Config::from_lookup(lookup_from(&REQUIRED[1..]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_unparsable_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("UPLOAD_CONCURRENCY", "zero"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) if name == "UPLOAD_CONCURRENCY"
        ));
    }

    #[test]
    fn rejects_zero_concurrency() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("UPLOAD_CONCURRENCY", "0"));

        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn reads_json_log_format() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("LOG_FORMAT", "json"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
    }
}
