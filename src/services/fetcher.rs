use crate::error::FetchError;

/// Single-attempt GET; no retry. Fails on network errors and on any
/// non-success status.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    log::info!("Extracting data from {}", url);

    let response = client.get(url).send().await.map_err(|e| {
        log::error!("Request to {} failed: {:?}", url, e);
        FetchError::Request {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        log::error!("Request to {} returned status {}", url, status);
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|e| {
        log::error!("Failed to read response body from {}: {:?}", url, e);
        FetchError::Request {
            url: url.to_string(),
            source: e,
        }
    })
}
