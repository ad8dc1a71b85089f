use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    config::Config,
    types::{PlaylistItemsPage, PlaylistsPage},
    warning,
};

use super::{REQUEST_TIMEOUT_SECS, RETRY_DELAY_SECS};

/// Retrieves one page of the authenticated user's playlists.
///
/// The first call passes `page_url = None`; subsequent calls pass the
/// absolute `next` URL from the previous page until it comes back `None`.
///
/// # Example
///
/// ```
/// let mut page_url = None;
/// loop {
///     let page = get_playlists_page(&config, &token, page_url).await?;
///     all.extend(page.items);
///     match page.next {
///         Some(next) => page_url = Some(next),
///         None => break,
///     }
/// }
/// ```
pub async fn get_playlists_page(
    config: &Config,
    token: &str,
    page_url: Option<String>,
) -> Result<PlaylistsPage, reqwest::Error> {
    let url = page_url.unwrap_or_else(|| {
        format!(
            "{uri}/me/playlists?limit=50",
            uri = &config.api_url
        )
    });

    fetch_page(&url, token).await
}

/// Retrieves one page of a playlist's track listing.
///
/// Follows the same cursor convention as [`get_playlists_page`]: the
/// returned page carries an absolute `next` URL while more pages remain.
/// Entries are returned in playlist order, duplicates included.
///
/// # Errors
///
/// Propagates the HTTP error when the remote rejects the request (expired
/// token, unknown playlist, revoked access). The caller treats this as the
/// playlist being unavailable for the current request.
pub async fn get_playlist_items_page(
    config: &Config,
    token: &str,
    playlist_id: &str,
    page_url: Option<String>,
) -> Result<PlaylistItemsPage, reqwest::Error> {
    let url = page_url.unwrap_or_else(|| {
        format!(
            "{uri}/playlists/{id}/tracks?limit=100",
            uri = &config.api_url,
            id = playlist_id
        )
    });

    fetch_page(&url, token).await
}

/// Performs one GET request against the Web API and decodes the JSON body.
///
/// Retries 502 Bad Gateway responses after a fixed delay and honors the
/// `Retry-After` header on 429 responses within a sane bound. Every request
/// carries a bounded timeout. All other error statuses are propagated.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    loop {
        let response = client.get(url).bearer_auth(token).send().await?;

        // check for retry-after header
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again later.",
                    retry_after
                );
            }
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(RETRY_DELAY_SECS)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        return response.json::<T>().await;
    }
}
