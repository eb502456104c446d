use std::time::Duration;

use json_request::RequestError;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

/// Completion handler that forwards its argument to the returned receiver.
/// A handler dropped without being called closes the channel instead.
pub fn capture<T: Send + 'static>() -> (
    impl FnOnce(Result<T, RequestError>) + Send + 'static,
    oneshot::Receiver<Result<T, RequestError>>,
) {
    let (tx, rx) = oneshot::channel();
    let handler = move |res: Result<T, RequestError>| {
        let _ = tx.send(res);
    };
    (handler, rx)
}

/// Waits for a captured completion. `None` means the handler was dropped uncalled.
pub async fn completion<T>(rx: oneshot::Receiver<Result<T, RequestError>>) -> Option<Result<T, RequestError>> {
    tokio::time::timeout(Duration::from_secs(10), rx)
        .await
        .expect("request did not finish in time")
        .ok()
}
