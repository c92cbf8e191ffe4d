//! Retrieval of the configuration document from a path or URL.

use std::fs;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;

/// Timeout applied to remote configuration fetches.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Read the configuration text at `location`.
///
/// `http://` and `https://` locations are fetched; anything else is a local path.
/// A location with an HTTP scheme that is not a valid URL is a fetch error.
pub fn load_config_text(location: &str) -> Result<String, AppError> {
    match remote_location(location)? {
        Some(url) => fetch(url),
        None => {
            tracing::info!(file = %location, "read config file");
            fs::read_to_string(location).map_err(|err| AppError::io(location, err))
        }
    }
}

fn remote_location(location: &str) -> Result<Option<Url>, AppError> {
    if !(location.starts_with("http://") || location.starts_with("https://")) {
        return Ok(None);
    }
    Url::parse(location).map(Some).map_err(|err| AppError::Fetch {
        location: location.to_string(),
        details: format!("invalid URL: {err}"),
    })
}

fn fetch(url: Url) -> Result<String, AppError> {
    tracing::info!(url = %url, "fetching config file");
    let fetch_error = |details: String| AppError::Fetch { location: url.to_string(), details };

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| fetch_error(format!("failed to create HTTP client: {err}")))?;

    let response = client
        .get(url.clone())
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|err| fetch_error(err.to_string()))?;

    response.text().map_err(|err| fetch_error(err.to_string()))
}
