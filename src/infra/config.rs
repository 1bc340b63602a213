//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Host the API server binds to (`ESTOQUE_HOST`, default `0.0.0.0`).
pub fn server_host() -> String {
    std::env::var("ESTOQUE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

/// Port the API server binds to (`ESTOQUE_PORT`, default `5001`).
pub fn server_port() -> anyhow::Result<u16> {
    match std::env::var("ESTOQUE_PORT") {
        Ok(v) => parse_port(&v),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

pub fn server_addr() -> anyhow::Result<SocketAddr> {
    let host = server_host();
    let port = server_port()?;
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("ESTOQUE_HOST must be an IP address, got {:?}", host))
}

/// Base URL the terminal client talks to (`ESTOQUE_API_URL`).
pub fn api_base_url() -> String {
    std::env::var("ESTOQUE_API_URL")
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("ESTOQUE_PORT must be a valid port number, got {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ports() {
        assert_eq!(parse_port("5001").unwrap(), 5001);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
    }
}
