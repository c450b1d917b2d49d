// ABOUTME: Runtime configuration for the chat backend connection
// ABOUTME: Resolves credentials, base URL, and model from the environment with sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Assistant Configuration
//!
//! Connection settings for the OpenAI-compatible chat backend. Values come
//! from `PHOTON_LLM_*` environment variables via [`AssistantConfig::from_env`],
//! or from the builder methods in embedding scenarios and tests.

use std::env;

use crate::constants::{
    env_vars, CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, DEFAULT_MODEL, REQUEST_TIMEOUT_SECS,
};

/// Connection settings for the chat backend
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// API credential; `None` means the client refuses online requests
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API, without the endpoint path
    pub base_url: String,
    /// Model identifier requested on each completion
    pub model: String,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// End-to-end request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AssistantConfig {
    /// Build configuration from `PHOTON_LLM_*` environment variables.
    ///
    /// Unset or empty variables fall back to defaults; an empty
    /// `PHOTON_LLM_API_KEY` is treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = env::var(env_vars::API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = env::var(env_vars::BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let model = env::var(env_vars::MODEL)
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        Self {
            api_key,
            base_url,
            model,
            ..Self::default()
        }
    }

    /// Set the API credential
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the backend base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the requested model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
