//! Tests for CLI subcommand parsing.

use clap::Parser;
use seo_audit::cli::{Cli, Command, OutputFormat};
use seo_audit::config::{LogFormat, LogLevel, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_audit_command_defaults() {
    let cli = Cli::try_parse_from(["seo_audit", "audit", "example.com"]).expect("parses");
    match &cli.command {
        Command::Audit { url, format } => {
            assert_eq!(url, "example.com");
            assert_eq!(*format, OutputFormat::Text);
        }
        other => panic!("expected audit, got {other:?}"),
    }
    assert_eq!(cli.log_level, LogLevel::Info);
    assert_eq!(cli.log_format, LogFormat::Plain);
    assert_eq!(cli.timeout_seconds, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_audit_command_json_format() {
    let cli = Cli::try_parse_from(["seo_audit", "audit", "https://example.com", "--format", "json"])
        .expect("parses");
    assert!(matches!(
        cli.command,
        Command::Audit {
            format: OutputFormat::Json,
            ..
        }
    ));
}

#[test]
fn test_global_args_after_subcommand() {
    let cli = Cli::try_parse_from([
        "seo_audit",
        "audit",
        "example.com",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--timeout-seconds",
        "3",
        "--user-agent",
        "audit-bot/1.0",
    ])
    .expect("parses");
    assert_eq!(cli.log_level, LogLevel::Debug);
    assert_eq!(cli.log_format, LogFormat::Json);

    let config = cli.config();
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.user_agent, "audit-bot/1.0");
}

#[test]
fn test_serve_command_sets_bind_address() {
    let cli = Cli::try_parse_from(["seo_audit", "serve", "--host", "0.0.0.0", "--port", "8081"])
        .expect("parses");
    let config = cli.config();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8081);
    assert_eq!(config.bind_address(), "0.0.0.0:8081");
}

#[test]
fn test_serve_command_default_host() {
    // --port is given explicitly so a PORT variable in the environment cannot interfere
    let cli = Cli::try_parse_from(["seo_audit", "serve", "--port", "3000"]).expect("parses");
    assert_eq!(cli.config().host, DEFAULT_HOST);
}

#[test]
fn test_minimum_timeout_is_accepted() {
    let cli = Cli::try_parse_from(["seo_audit", "audit", "example.com", "--timeout-seconds", "1"])
        .expect("parses");
    assert_eq!(cli.config().timeout_seconds, 1);
}

#[test]
fn test_rejects_invalid_arguments() {
    let cases: &[&[&str]] = &[
        &["seo_audit"],
        &["seo_audit", "audit"],
        &["seo_audit", "audit", "example.com", "--format", "xml"],
        &["seo_audit", "serve", "--port", "not-a-port"],
        &["seo_audit", "serve", "--port", "70000"],
        &["seo_audit", "audit", "example.com", "--log-level", "loud"],
        &["seo_audit", "audit", "example.com", "--timeout-seconds", "0"],
        &["seo_audit", "--timeout-seconds", "0", "serve", "--port", "3000"],
    ];
    for args in cases {
        assert!(Cli::try_parse_from(*args).is_err(), "{args:?} should fail");
    }
}
