//! Listener Config

use clap::Args;

/// Where the HTTP listener binds.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind; IPv6 literals are accepted without brackets
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, bracketing bare IPv6 hosts.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        let host = self.host.trim();

        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listen(host: &str) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: host.to_owned(),
            port: 8698,
        }
    }

    #[test]
    fn ipv4_and_names_are_joined_directly() {
        assert_eq!(listen("127.0.0.1").socket_addr(), "127.0.0.1:8698");
        assert_eq!(listen("localhost").socket_addr(), "localhost:8698");
    }

    #[test]
    fn bare_ipv6_is_bracketed() {
        assert_eq!(listen("::").socket_addr(), "[::]:8698");
        assert_eq!(listen("[::1]").socket_addr(), "[::1]:8698");
    }
}
