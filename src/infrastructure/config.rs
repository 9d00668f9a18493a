use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub broker: BrokerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub host: String,
    pub port: u16,
}

impl BrokerSettings {
    /// WebSocket endpoint of the broker.
    pub fn url(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }
}

/// Load broker settings: compiled-in defaults, then an optional
/// `config/broker.toml`, then environment overrides
/// (`DASHBOARD__BROKER__HOST`, `DASHBOARD__BROKER__PORT`).
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("broker.host", "localhost")?
        .set_default("broker.port", 9001)?
        .add_source(config::File::with_name("config/broker").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = load_config().unwrap();
        assert_eq!(config.broker.host, "localhost");
        assert_eq!(config.broker.port, 9001);
    }

    #[test]
    fn url_formats_websocket_endpoint() {
        let settings = BrokerSettings {
            host: "broker.example".to_string(),
            port: 9001,
        };
        assert_eq!(settings.url(), "ws://broker.example:9001");
    }
}
