//! Request configuration.
//!
//! `RequestConfig` controls how a [`Requester`](crate::Requester) talks to
//! the network. Defaults keep the wire quiet: no extra headers are sent and
//! responses with a status outside 200/404/403/500 never reach the
//! completion handler.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use json_request::RequestConfig;
//! let cfg = RequestConfig::default();
//! assert!(cfg.user_agent.is_none());
//! assert!(!cfg.report_unhandled_status);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use json_request::RequestConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = RequestConfig::builder()
//!     .user_agent("PlanDash/1.0")
//!     .report_unhandled_status(true)
//!     .build()?; // returns Result<RequestConfig, RequestConfigError>
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `user_agent`: Optional `User-Agent` header value. Not sent when `None`.
//! - `report_unhandled_status`: When `true`, statuses outside the handled
//!   set and transport failures are delivered to the handler as errors
//!   instead of being dropped (default: `false`).
//!
//! # Errors
//!
//! Builder validation returns [`RequestConfigError`] when the user agent is
//! empty or cannot be sent as a header value.

use http::HeaderValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub user_agent: Option<String>,
    pub report_unhandled_status: bool,
}

impl RequestConfig {
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::default()
    }
}

/// Builder for [`RequestConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequestConfigBuilder {
    inner: RequestConfig,
}

impl RequestConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut RequestConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = Some(ua.into())) }
    pub fn report_unhandled_status(self, on: bool) -> Self { self.map(|c| c.report_unhandled_status = on) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<RequestConfig, RequestConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestConfigError {
    #[error("user_agent must not be empty")]
    EmptyUserAgent,

    #[error("user_agent {0:?} is not a valid header value")]
    InvalidUserAgent(String),
}

pub(crate) fn validate(c: &RequestConfig) -> Result<(), RequestConfigError> {
    if let Some(ua) = c.user_agent.as_deref() {
        if ua.trim().is_empty() {
            return Err(RequestConfigError::EmptyUserAgent);
        }
        if HeaderValue::from_str(ua).is_err() {
            return Err(RequestConfigError::InvalidUserAgent(ua.to_string()));
        }
    }
    Ok(())
}
