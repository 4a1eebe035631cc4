use tracing::{debug, info};

use crate::errors::FetchError;

/// Downloads the access log with a single request. Non-success statuses and
/// bodies that are not valid UTF-8 are errors.
pub async fn download_log(url: &str) -> Result<String, FetchError> {
    debug!(url, "requesting access log");
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.bytes().await?;
    let data = String::from_utf8(body.to_vec())?;
    info!(url, bytes = data.len(), "downloaded access log");
    Ok(data)
}

/// Like [`download_log`], but reports the failure to the operator and yields
/// nothing so the caller can stop before parsing.
pub async fn fetch_log(url: &str) -> Option<String> {
    match download_log(url).await {
        Ok(data) => Some(data),
        Err(e) => {
            eprintln!("Failed to download file: {e}");
            None
        }
    }
}
