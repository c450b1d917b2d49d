// ABOUTME: Connectivity probe abstraction used to gate outbound chat requests
// ABOUTME: Provides an always-online default and a flag-backed probe for apps and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Photon Learning

//! # Connectivity Probes
//!
//! The chat client consults a [`ConnectivityProbe`] before every request so it
//! can answer with the offline fallback instead of burning a doomed network
//! call. Host applications plug in whatever reachability signal they have;
//! [`ConnectivityFlag`] covers the common case of an externally toggled flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the chat backend is believed reachable.
///
/// Implementations must be cheap; the probe runs on every request.
pub trait ConnectivityProbe: Send + Sync {
    /// `true` when outbound requests should be attempted
    fn is_online(&self) -> bool;
}

/// Probe that always reports online; the default when none is supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl ConnectivityProbe for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}

/// Probe backed by an atomic flag toggled by the host application
#[derive(Debug)]
pub struct ConnectivityFlag {
    online: AtomicBool,
}

impl ConnectivityFlag {
    /// Create a flag with the given initial state
    #[must_use]
    pub const fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    /// Update the reachability state
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl Default for ConnectivityFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectivityProbe for ConnectivityFlag {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_online_reports_online() {
        assert!(AlwaysOnline.is_online());
    }

    #[test]
    fn connectivity_flag_toggles() {
        let flag = ConnectivityFlag::new(true);
        assert!(flag.is_online());

        flag.set_online(false);
        assert!(!flag.is_online());

        flag.set_online(true);
        assert!(flag.is_online());
    }

    #[test]
    fn connectivity_flag_defaults_online() {
        assert!(ConnectivityFlag::default().is_online());
    }
}
