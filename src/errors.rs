// ABOUTME: Unified error handling with the assistant's standard error codes
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling system for the Photon
//! assistant. It defines the standard error codes surfaced to callers and the
//! [`AppError`] type every fallible operation returns. Errors are propagated
//! unmodified to the calling layer, which displays the message and lets the
//! user retry by resubmitting.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes surfaced by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller-supplied input was rejected before any work happened
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,

    /// Required configuration (typically the API credential) is missing
    #[serde(rename = "MISCONFIGURED")]
    Misconfigured,

    /// The backend call completed but produced no usable text
    #[serde(rename = "EMPTY_RESPONSE")]
    EmptyResponse,

    /// The network request or the backend itself failed
    #[serde(rename = "TRANSPORT_FAILURE")]
    TransportFailure,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::Misconfigured => "Required configuration is missing",
            Self::EmptyResponse => "The assistant returned no usable content",
            Self::TransportFailure => "The chat backend could not be reached or failed",
        }
    }
}

/// Unified error type for the assistant
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing or unusable configuration
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Misconfigured, message)
    }

    /// Completed call with no usable content
    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyResponse, message)
    }

    /// Failed request or failing backend
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportFailure, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_input("prompt must not be empty");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: prompt must not be empty"
        );
    }

    #[test]
    fn test_constructors_set_codes() {
        assert_eq!(AppError::invalid_input("x").code, ErrorCode::InvalidInput);
        assert_eq!(AppError::misconfigured("x").code, ErrorCode::Misconfigured);
        assert_eq!(AppError::empty_response("x").code, ErrorCode::EmptyResponse);
        assert_eq!(
            AppError::transport_failure("x").code,
            ErrorCode::TransportFailure
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::TransportFailure).unwrap();
        assert_eq!(json, "\"TRANSPORT_FAILURE\"");

        let code: ErrorCode = serde_json::from_str("\"EMPTY_RESPONSE\"").unwrap();
        assert_eq!(code, ErrorCode::EmptyResponse);
    }

    #[test]
    fn test_source_chaining() {
        let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error =
            AppError::transport_failure("failed to reach chat backend").with_source(io_error);

        let source = std::error::Error::source(&error);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("refused"));
    }
}
