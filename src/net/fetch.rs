use crate::net::Response;

// Issues a GET for the address and returns the fully buffered response. The address is handed to
// reqwest as-is; an unparsable address surfaces as a builder error from `send()`.
pub async fn fetch(client: &reqwest::Client, address: &str) -> Result<Response, reqwest::Error> {
    let res = client.get(address).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. No streaming, the decoder needs all of it anyway
    let body = res.bytes().await?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
