/// Access service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccessConfig {
    /// PostgreSQL connection URL for the elevated service credentials.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3271). Env var: `ACCESS_PORT`.
    pub access_port: u16,
    /// HMAC secret shared with the identity provider, used to verify caller
    /// access tokens.
    pub jwt_secret: String,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            access_port: std::env::var("ACCESS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3271),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
        }
    }
}
