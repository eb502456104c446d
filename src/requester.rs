use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::Handle;

use crate::config::{validate, RequestConfig};
use crate::decode::decode_json;
use crate::errors::{RequestError, RequesterError};
use crate::net::fetch;
use crate::status::StatusClass;

/// Outcome of a single JSON request: `None` when the response is dropped
/// without reaching the caller.
pub type Completion<T> = Option<Result<T, RequestError>>;

/// Issues JSON GET requests and delivers their outcome.
///
/// A requester owns the HTTP client and the runtime handle that requests are spawned on. It is
/// cheap to clone; clones share the client's connection pool. Every call performs its own
/// request, nothing is cached or deduplicated between calls.
#[derive(Clone)]
pub struct Requester {
    client: reqwest::Client,
    config: RequestConfig,
    runtime: Handle,
}

impl Requester {
    /// Creates a requester bound to the tokio runtime of the caller.
    pub fn new(config: RequestConfig) -> Result<Self, RequesterError> {
        let runtime = Handle::try_current().map_err(|_| RequesterError::NoRuntime)?;
        Self::with_runtime(config, runtime)
    }

    /// Creates a requester that spawns its requests on the given runtime.
    pub fn with_runtime(config: RequestConfig, runtime: Handle) -> Result<Self, RequesterError> {
        validate(&config)?;

        let mut builder = reqwest::Client::builder();
        if let Some(ua) = config.user_agent.as_deref() {
            builder = builder.user_agent(ua);
        }
        let client = builder.build()?;

        Ok(Self { client, config, runtime })
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Fetches `address` and decodes the body as `T`.
    ///
    /// - 200: `Some(Ok(value))`, or `Some(Err(RequestError::Decode(..)))` for a malformed body
    /// - 404, 403, 500: `Some(Err(RequestError::Status(code)))`
    /// - any other status or a transport failure: `None`, unless the config asks for unhandled
    ///   outcomes to be reported
    pub async fn fetch_json<T: DeserializeOwned>(&self, address: &str) -> Completion<T> {
        log::debug!("GET {address}");

        let resp = match fetch(&self.client, address).await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("GET {address} failed: {e}");
                return self.unhandled(RequestError::Transport(e.to_string()));
            }
        };

        log::debug!("GET {address} completed: {} {}", resp.status, resp.status_text);

        match resp.class() {
            StatusClass::Success => Some(decode_json(&resp.body)),
            StatusClass::Reported(code) => Some(Err(RequestError::Status(code))),
            StatusClass::Unhandled(code) => self.unhandled(RequestError::Status(code)),
        }
    }

    /// Same as [`fetch_json`](Self::fetch_json), but yields to the scheduler once before the
    /// request is issued.
    pub async fn fetch_json_deferred<T: DeserializeOwned>(&self, address: &str) -> Completion<T> {
        tokio::task::yield_now().await;
        self.fetch_json(address).await
    }

    fn unhandled<T>(&self, err: RequestError) -> Completion<T> {
        if self.config.report_unhandled_status {
            Some(Err(err))
        } else {
            log::debug!("dropping unhandled outcome: {err}");
            None
        }
    }

    /// Requests `address` in the background and calls `on_complete` with the decoded JSON.
    ///
    /// Returns immediately. The handler runs at most once, on a runtime task; it is dropped
    /// without being called when the outcome is unhandled.
    pub fn json_request<F>(&self, address: impl Into<String>, on_complete: F)
    where
        F: FnOnce(Result<Value, RequestError>) + Send + 'static,
    {
        self.json_request_as(address, on_complete);
    }

    /// Typed variant of [`json_request`](Self::json_request).
    pub fn json_request_as<T, F>(&self, address: impl Into<String>, on_complete: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, RequestError>) + Send + 'static,
    {
        let this = self.clone();
        let address = address.into();
        self.runtime.spawn(async move {
            if let Some(outcome) = this.fetch_json::<T>(&address).await {
                on_complete(outcome);
            }
        });
    }

    /// Deferred variant of [`json_request`](Self::json_request): the request itself is only
    /// issued after the spawned task has yielded once.
    pub fn async_json_request<F>(&self, address: impl Into<String>, on_complete: F)
    where
        F: FnOnce(Result<Value, RequestError>) + Send + 'static,
    {
        let this = self.clone();
        let address = address.into();
        self.runtime.spawn(async move {
            if let Some(outcome) = this.fetch_json_deferred::<Value>(&address).await {
                on_complete(outcome);
            }
        });
    }
}

// Free functions run on the caller's runtime with the default config and a client of their own, so
// no pooled connection outlives the runtime it was opened on. When no requester can be built the
// handler is dropped and the failure logged.
fn ambient_requester() -> Option<Requester> {
    match Requester::new(RequestConfig::default()) {
        Ok(requester) => Some(requester),
        Err(e) => {
            log::error!("cannot issue json request: {e}");
            None
        }
    }
}

/// Fetches `address` as JSON and calls `on_complete` with the outcome.
/// See [`Requester::json_request`].
pub fn json_request<F>(address: impl Into<String>, on_complete: F)
where
    F: FnOnce(Result<Value, RequestError>) + Send + 'static,
{
    if let Some(requester) = ambient_requester() {
        requester.json_request(address, on_complete);
    }
}

/// Deferred form of [`json_request`]. See [`Requester::async_json_request`].
pub fn async_json_request<F>(address: impl Into<String>, on_complete: F)
where
    F: FnOnce(Result<Value, RequestError>) + Send + 'static,
{
    if let Some(requester) = ambient_requester() {
        requester.async_json_request(address, on_complete);
    }
}
