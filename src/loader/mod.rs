//! Client side of `/api/players` for the player page.
//!
//! The page gets either the fully decoded records or a 404 page error. A
//! missing player, an unreachable API and an unreadable body all render the
//! same way; the cause is kept on the error for logging.

use reqwest::StatusCode;
use serde::Serialize;

use crate::models::PlayerSeasonRecord;

pub const PAGE_NOT_FOUND_MESSAGE: &str = "No player found.";

/// Data handed to the player page.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerPage {
    pub player: Vec<PlayerSeasonRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No player found.")]
    NotFound { status: StatusCode },
    #[error("No player found.")]
    Request(#[source] reqwest::Error),
}

impl PageError {
    /// Status the hosting page should render with.
    pub fn status(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[derive(Debug, Clone)]
pub struct PlayerPageLoader {
    client: reqwest::Client,
    base_url: String,
}

impl PlayerPageLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every season for the player in the route parameter `id`.
    pub async fn load(&self, id: &str) -> Result<PlayerPage, PageError> {
        let url = format!("{}/api/players", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("player_id", id)])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(player_id = id, error = %err, "Player request failed");
                PageError::Request(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(player_id = id, %status, "Player lookup unsuccessful");
            return Err(PageError::NotFound { status });
        }

        let player = response
            .json::<Vec<PlayerSeasonRecord>>()
            .await
            .map_err(|err| {
                tracing::warn!(player_id = id, error = %err, "Player response could not be decoded");
                PageError::Request(err)
            })?;

        Ok(PlayerPage { player })
    }
}
