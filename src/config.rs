use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    /// Lifetime of issued bearer tokens, in hours
    pub token_ttl_hours: i64,
    /// Allowed CORS origins (comma-separated). Use "*" for any origin (development only).
    pub cors_origins: Vec<String>,
    /// Optional JSON file replacing the built-in song catalog
    pub catalog_path: Option<String>,
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        // JWT_SECRET is required - no insecure defaults
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| {
            anyhow::anyhow!(
                "JWT_SECRET environment variable must be set. \
                Generate a secure secret with: openssl rand -base64 32"
            )
        })?;

        // Validate JWT secret length (at least 32 bytes for HS256)
        if jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long for security. \
                Generate a secure secret with: openssl rand -base64 32"
            ));
        }

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".to_string()),
        );

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            jwt_secret,
            token_ttl_hours: env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|hours| *hours > 0)
                .unwrap_or(24),
            cors_origins,
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|max| *max > 0)
                .unwrap_or(100),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(15 * 60),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
impl Config {
    /// Configuration used by in-process router tests
    pub fn for_tests() -> Self {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            jwt_secret: "test-secret-that-is-at-least-32-characters".to_string(),
            token_ttl_hours: 24,
            cors_origins: vec!["*".to_string()],
            catalog_path: None,
            rate_limit_max_requests: 1000,
            rate_limit_window_secs: 60,
        }
    }
}
