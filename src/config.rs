//! Process Configuration
//!
//! Command-line flags with environment fallbacks. Addresses use the `host:port`
//! form, where an empty host (`:8080`) means "all interfaces" for the listener and
//! "localhost" for the store.

use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serves random quotes from a shared Redis list")]
pub struct Config {
    /// host:port on which to listen
    #[arg(long, env = "LISTEN_ADDR", default_value = ":8080")]
    pub listen_addr: String,

    /// Redis host:port to connect to
    #[arg(long, env = "REDIS_ADDR", default_value = ":6379")]
    pub redis_addr: String,

    /// Timeout for connecting to Redis (e.g. 500ms, 30s, 1m, 1m30s)
    #[arg(
        long,
        env = "REDIS_CONNECT_TIMEOUT",
        default_value = "1m",
        value_parser = parse_duration
    )]
    pub redis_connect_timeout: Duration,
}

/// Parses durations such as `250ms`, `30s`, `1m`, `2h` or `1m30s`.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(format!("invalid duration '{}': expected a number", input));
        }
        let value: u64 = rest[..digits]
            .parse()
            .map_err(|e| format!("invalid duration '{}': {}", input, e))?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value * 60),
            "h" => Duration::from_secs(value * 3600),
            "" => return Err(format!("invalid duration '{}': missing unit", input)),
            unit => return Err(format!("invalid duration '{}': unknown unit '{}'", input, unit)),
        };
        total += part;
        rest = &rest[unit_len..];
    }

    Ok(total)
}

/// Connection URL for a store `host:port`, defaulting the host to localhost.
pub fn store_url(addr: &str) -> String {
    format!("redis://{}/", with_default_host(addr, "127.0.0.1"))
}

/// Address the HTTP server binds to, defaulting the host to all interfaces.
///
/// Hostnames are kept as-is and resolved when the listener binds.
pub fn listen_addr(addr: &str) -> String {
    with_default_host(addr, "0.0.0.0")
}

fn with_default_host(addr: &str, default_host: &str) -> String {
    if addr.starts_with(':') {
        format!("{}{}", default_host, addr)
    } else {
        addr.to_string()
    }
}
