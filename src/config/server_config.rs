/// Configuration for the server, including the listener and the backing store.
use std::{env, fmt, str::FromStr};

use sqlx::postgres::PgConnectOptions;

use crate::{config::ConfigError, models::SecretString};

/// Which repository implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryStorageType {
    InMemory,
    #[default]
    Postgres,
}

impl FromStr for RepositoryStorageType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inmemory" | "in_memory" | "in-memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::InvalidFormat(format!(
                "Invalid repository storage type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for RepositoryStorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => write!(f, "in_memory"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Connection settings for the Postgres store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: SecretString,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    /// Reads `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = required_env("DB_PORT")?;
        Ok(Self {
            user: required_env("DB_USER")?,
            password: SecretString::new(&required_env("DB_PASSWORD")?),
            host: required_env("DB_HOST")?,
            port: port
                .parse()
                .map_err(|_| ConfigError::InvalidFormat(format!("Invalid DB_PORT: {}", port)))?,
            name: required_env("DB_NAME")?,
        })
    }

    /// Connect options for the pool. Credentials are passed as-is, so no URL escaping is
    /// involved.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        self.password.as_str(|password| options.password(password))
    }

    /// `postgres://{user}:***@{host}:{port}/{name}`, for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The repository implementation to run on.
    pub repository_storage_type: RepositoryStorageType,
    /// Postgres settings; present whenever the storage type is Postgres.
    pub database: Option<DatabaseConfig>,
    /// Upper bound of pooled store connections.
    pub db_max_connections: u32,
    /// Serve the OpenAPI document.
    pub enable_swagger: bool,
    /// Application secret. Loaded for parity with the deployment environment; no endpoint
    /// consumes it.
    pub secret_key: Option<SecretString>,
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the storage type is Postgres and one of
    /// the `DB_*` variables is absent, and [`ConfigError::InvalidFormat`] for an unknown
    /// `REPOSITORY_STORAGE_TYPE` or a non-numeric `DB_PORT`.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `REPOSITORY_STORAGE_TYPE` defaults to `postgres`.
    /// - `DB_MAX_CONNECTIONS` defaults to `5`.
    /// - `ENABLE_SWAGGER` defaults to `false`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let repository_storage_type = match env::var("REPOSITORY_STORAGE_TYPE") {
            Ok(value) => value.parse()?,
            Err(_) => RepositoryStorageType::default(),
        };

        let database = match repository_storage_type {
            RepositoryStorageType::Postgres => Some(DatabaseConfig::from_env()?),
            RepositoryStorageType::InMemory => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            repository_storage_type,
            database,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            enable_swagger: env::var("ENABLE_SWAGGER")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            secret_key: env::var("SECRET_KEY")
                .ok()
                .map(|key| SecretString::new(&key)),
        })
    }
}
