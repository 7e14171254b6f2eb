use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty disables CORS headers.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// In-memory SQLite databases exist per connection, keep this at 1 for `sqlite::memory:`.
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Semicolon-delimited nominee list read once at startup.
    pub csv_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("AWARDS_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://awards.db?mode=rwc")?
            .set_default("database.max_connections", 1)?
            .set_default("data.csv_path", "movielist.csv")?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., AWARDS__DATA__CSV_PATH)
            .add_source(
                Environment::with_prefix("AWARDS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
