//! HTTP transport tuning.
//!
//! This module provides the default timeouts for each family of Restage
//! operations and the connection settings applied to the underlying HTTP
//! client. Requests are never retried; a failure is reported to the caller
//! as-is.

use std::time::Duration;

// Operation-family timeout defaults (in seconds)

/// Default timeout for design generation requests (staging, remodeling,
/// landscaping, sketch rendering). Generation renders several images per
/// request and is the slowest family.
pub const GENERATION_DEFAULT_TIMEOUT: u64 = 120;

/// Default timeout for single-image edit requests (wall priming, recolors,
/// sky replacement, object removal)
pub const EDIT_DEFAULT_TIMEOUT: u64 = 60;

/// Default timeout for upscaling requests
pub const UPSCALE_DEFAULT_TIMEOUT: u64 = 120;

/// Default timeout for caption generation requests
pub const CAPTION_DEFAULT_TIMEOUT: u64 = 30;

/// Timeout for fetching a caller-supplied image URL before upload
pub const SOURCE_FETCH_TIMEOUT: u64 = 30;

// Connection settings

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP connection configuration.
///
/// Configures the connection behavior of the underlying HTTP client.
/// Request timeouts are not part of this configuration; they are chosen
/// per operation family or overridden per client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Connect timeout
    pub connect_timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable response compression
    pub enable_compression: bool,
}

impl HttpConfig {
    /// Create a new connection configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
