use eventhub_utils::create_random_secret;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. In memory repositories are used when
    /// this is not set.
    pub database_url: Option<String>,
    /// Key that back office clients send in the `x-api-key` header to
    /// manage the saved events of any user
    pub admin_api_key: String,
    /// Secret used to verify the HS256 identity tokens given by the
    /// identity provider
    pub identity_token_secret: String,
    /// Upper bound for a single call against the store
    pub store_timeout: Duration,
    /// Page size used when the client does not ask for one
    pub default_page_size: i64,
    /// Maximum page size a client can ask for. This is used to avoid having
    /// clients ask for the whole catalog in one response.
    pub max_page_size: i64,
}

fn secret_from_env(env_var: &str) -> String {
    match std::env::var(env_var) {
        Ok(secret) => secret,
        Err(_) => {
            info!(
                "Did not find {} environment variable. Going to create one.",
                env_var
            );
            let secret = create_random_secret(16);
            info!("{} was generated and set to: {}", env_var, secret);
            secret
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            warn!("Did not find DATABASE_URL environment variable. Events and saved events will only be kept in memory.");
        }

        let default_store_timeout_ms = 5000;
        let store_timeout_ms = match std::env::var("STORE_TIMEOUT_MS") {
            Ok(timeout) => match timeout.parse::<u64>() {
                Ok(timeout) if timeout > 0 => timeout,
                _ => {
                    warn!(
                        "The given STORE_TIMEOUT_MS: {} is not valid, falling back to: {}.",
                        timeout, default_store_timeout_ms
                    );
                    default_store_timeout_ms
                }
            },
            Err(_) => default_store_timeout_ms,
        };

        Self {
            port,
            database_url,
            admin_api_key: secret_from_env("ADMIN_API_KEY"),
            identity_token_secret: secret_from_env("IDENTITY_TOKEN_SECRET"),
            store_timeout: Duration::from_millis(store_timeout_ms),
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
