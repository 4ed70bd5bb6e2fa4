use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_host")]
    pub host: String,
    #[serde(default = "AppConfig::default_port")]
    pub port: u16,
    /// Interval of the background re-sweep that retries unassigned
    /// pending tickets.
    #[serde(default = "AppConfig::default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl AppConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8180
    }

    fn default_sweep_interval_secs() -> u64 {
        30
    }

    /// `config.yaml` next to the binary, overridable per key with
    /// `DISPATCH__`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DISPATCH").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            sweep_interval_secs: Self::default_sweep_interval_secs(),
        }
    }
}
