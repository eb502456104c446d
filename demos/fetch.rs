use anyhow::{bail, Context};
use json_request::{RequestConfig, RequestError, Requester};
use tokio::sync::oneshot;

// Usage: cargo run --example fetch -- <url> [--deferred] [--report-all]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(url) = args.next() else {
        bail!("usage: fetch <url> [--deferred] [--report-all]");
    };
    let flags: Vec<String> = args.collect();
    let deferred = flags.iter().any(|f| f == "--deferred");
    let report_all = flags.iter().any(|f| f == "--report-all");

    let cfg = RequestConfig::builder()
        .user_agent(concat!("json-request-demo/", env!("CARGO_PKG_VERSION")))
        .report_unhandled_status(report_all)
        .build()
        .context("building request config")?;
    let requester = Requester::new(cfg).context("creating requester")?;

    // The handler is dropped uncalled for unhandled statuses, which closes the channel
    let (tx, rx) = oneshot::channel();
    let handler = move |res: Result<serde_json::Value, RequestError>| {
        let _ = tx.send(res);
    };
    if deferred {
        requester.async_json_request(url.clone(), handler);
    } else {
        requester.json_request(url.clone(), handler);
    }

    match rx.await {
        Ok(Ok(json)) => println!("{}", serde_json::to_string_pretty(&json)?),
        Ok(Err(e)) => println!("{url}: error: {e}"),
        Err(_) => println!("{url}: no result (unhandled status or network failure)"),
    }

    Ok(())
}
