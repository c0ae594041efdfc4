use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, resolved once at startup.
///
/// Precedence: CLI arguments > environment > defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid listen host: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Config {
    /// Resolve configuration from the environment, applying CLI overrides.
    pub fn load(host_override: Option<String>, port_override: Option<u16>) -> anyhow::Result<Self> {
        let host = host_override
            .or_else(|| std::env::var("FOYER_HOST").ok())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port_override {
            Some(port) => port,
            None => match std::env::var("FOYER_PORT") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid FOYER_PORT value: {raw}"))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Ok(Self {
            server: ServerConfig { host, port },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarGuard {
        fn unset(key: &'static str) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: tests run in isolation and restore previous environment state on drop.
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, previous }
        }

        fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
            let previous = std::env::var_os(key);
            // SAFETY: tests run in isolation and restore previous environment state on drop.
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            // SAFETY: we reinstate the environment variable to its prior state.
            unsafe {
                match &self.previous {
                    Some(prev) => std::env::set_var(self.key, prev),
                    None => std::env::remove_var(self.key),
                }
            }
        }
    }

    // Single test so the FOYER_* variables are never mutated concurrently.
    #[test]
    fn resolution_precedence() {
        {
            let _host = EnvVarGuard::unset("FOYER_HOST");
            let _port = EnvVarGuard::unset("FOYER_PORT");

            let config = Config::load(None, None).expect("config resolves");
            assert_eq!(config.server.host, DEFAULT_HOST);
            assert_eq!(config.server.port, DEFAULT_PORT);
        }

        {
            let _host = EnvVarGuard::set("FOYER_HOST", "127.0.0.1");
            let _port = EnvVarGuard::set("FOYER_PORT", "9000");

            let env_only = Config::load(None, None).expect("config resolves");
            assert_eq!(env_only.server.host, "127.0.0.1");
            assert_eq!(env_only.server.port, 9000);

            let overridden = Config::load(Some("0.0.0.0".to_string()), Some(9443))
                .expect("config resolves");
            assert_eq!(overridden.server.host, "0.0.0.0");
            assert_eq!(overridden.server.port, 9443);
        }

        {
            let _port = EnvVarGuard::set("FOYER_PORT", "not-a-port");

            let err = Config::load(None, None).expect_err("config load fails");
            assert!(err.to_string().contains("FOYER_PORT"));
        }
    }

    #[test]
    fn socket_addr_rejects_non_ip_hosts() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
        };
        assert!(server.socket_addr().is_err());
    }
}
