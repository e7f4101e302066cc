use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Empty strings count as unset so a blank .env entry behaves the
        // same as a missing one.
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            database_name: env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty()),
        }
    }
}
