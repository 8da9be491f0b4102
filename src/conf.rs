use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub upload_dir: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .set_default("service_name", "career-portal")?
            .set_default("listen_port", "5000")?
            .set_default("database_url", "sqlite://career_portal.db")?
            .set_default("database_pool_max_connections", 5)?
            .set_default("upload_dir", "uploads")?
            .set_default("jwt_expiry_hours", 720)?
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
