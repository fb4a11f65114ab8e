//! Command-line configuration for the server binary.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Output format of the process-wide log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Command-line arguments for the server.
#[derive(Debug, Parser)]
#[command(name = "fibweb-server", version, about = "Fibonacci sequence HTTP server")]
pub struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Answer invalid input with 400 and unknown paths with 404 instead of 200.
    #[arg(long)]
    pub strict_status: bool,

    /// Log output format. The filter itself is read from `RUST_LOG`.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fibweb-server"]).unwrap();
        assert_eq!(args.port, 8080);
        assert!(!args.strict_status);
        assert_eq!(args.log_format, LogFormat::Compact);
        assert_eq!(args.socket_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "fibweb-server",
            "-p",
            "3000",
            "--host",
            "127.0.0.1",
            "--strict-status",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.socket_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(args.strict_status);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Args::try_parse_from(["fibweb-server", "--port", "70000"]).is_err());
    }
}
