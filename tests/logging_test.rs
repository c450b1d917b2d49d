// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment variable handling, format parsing, and subscriber setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use std::env;

use serial_test::serial;

use photon_assistant::constants::SERVICE_NAME;
use photon_assistant::logging::{LogFormat, LoggingConfig};

/// Clear every variable the logging config reads
fn clear_env() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
    env::remove_var("SERVICE_VERSION");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_THREAD");
    env::remove_var("LOG_INCLUDE_SPANS");
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert!(matches!(config.format, LogFormat::Pretty));
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
    assert!(!config.include_thread);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert!(matches!(config.format, LogFormat::Json));
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    // Production turns on the richer event metadata
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);

    clear_env();
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert!(matches!(config.format, LogFormat::Pretty));
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_compact_format_and_unknown_format_fallback() {
    clear_env();

    env::set_var("LOG_FORMAT", "compact");
    assert!(matches!(LoggingConfig::from_env().format, LogFormat::Compact));

    env::set_var("LOG_FORMAT", "nonsense");
    assert!(matches!(LoggingConfig::from_env().format, LogFormat::Pretty));

    clear_env();
}

#[test]
#[serial]
fn test_init_installs_subscriber() {
    clear_env();

    // Only one global subscriber per process; this is the binary's wiring path
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    assert!(config.init().is_ok());
}
