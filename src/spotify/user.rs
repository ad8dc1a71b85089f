use crate::{config::Config, types::CurrentUser};

use super::playlists::fetch_page;

/// Retrieves the profile of the authenticated user.
pub async fn get_current_user(
    config: &Config,
    token: &str,
) -> Result<CurrentUser, reqwest::Error> {
    let url = format!("{uri}/me", uri = &config.api_url);
    fetch_page(&url, token).await
}
