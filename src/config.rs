use std::net::SocketAddr;

/// Process-wide configuration, read from the environment once at startup
/// and carried into the shared application state. Handlers never touch the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    /// URL of the external TTS cloud function. Requests made while this is
    /// unset fail before any outbound call.
    pub provider_url: Option<String>,
    /// Secret sent to the provider as `x-api-key`. Omitted when unset.
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a number");
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string());
        let provider_url = std::env::var("TTS_PROVIDER_URL")
            .ok()
            .filter(|v| !v.is_empty());
        let api_key = std::env::var("TTS_API_KEY").ok().filter(|v| !v.is_empty());

        Self {
            host,
            port,
            static_dir,
            provider_url,
            api_key,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_combines_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: "./static".to_string(),
            provider_url: None,
            api_key: None,
        };
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }
}
