use std::time::Duration;

use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    //artificial delay before each store operation
    pub store_latency_ms: u64,
    pub seed_store: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobhunt")?
            .set_default("listen_port", "3000")?
            .set_default("store_latency_ms", 0)?
            .set_default("seed_store", true)?
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }

    pub fn store_latency(&self) -> Duration {
        Duration::from_millis(self.store_latency_ms)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
