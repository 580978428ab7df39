//! Command-line interface.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{
    Config, LogFormat, LogLevel, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// SEO audit and social media preview tool.
#[derive(Debug, Parser)]
#[command(name = "seo_audit", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the audit web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Audit a single URL and print the report
    Audit {
        /// Page to audit (https:// is assumed when no scheme is given)
        url: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format of the `audit` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// The report as pretty-printed JSON
    Json,
}

impl Cli {
    /// Library configuration for these arguments.
    pub fn config(&self) -> Config {
        let mut config = Config {
            log_level: self.log_level,
            log_format: self.log_format,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        };
        if let Command::Serve { host, port } = &self.command {
            config.host = host.clone();
            config.port = *port;
        }
        config
    }
}
