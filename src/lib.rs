//! JSON over HTTP GET with callback delivery.
//!
//! [`json_request`] issues a request in the background and hands the decoded
//! body (or an error) to a completion handler. [`async_json_request`] does the
//! same after yielding to the scheduler once. Both run on the caller's tokio
//! runtime; use a [`Requester`] to pick a runtime or a [`RequestConfig`].
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() {
//! json_request::json_request("http://localhost:8804/v1/players", |res| match res {
//!     Ok(json) => println!("{json}"),
//!     Err(e) => eprintln!("failed: {e}"),
//! });
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod errors;
pub mod net;
pub mod requester;
pub mod status;

pub use config::{RequestConfig, RequestConfigBuilder, RequestConfigError};
pub use decode::decode_json;
pub use errors::{RequestError, RequesterError};
pub use requester::{async_json_request, json_request, Completion, Requester};
pub use status::StatusClass;
