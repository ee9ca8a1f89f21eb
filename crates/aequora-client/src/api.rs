//! Notification endpoint client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use aequora_core::config::api::ApiConfig;
use aequora_core::error::{AppError, ErrorKind};
use aequora_core::result::AppResult;
use aequora_core::types::Role;
use aequora_entity::ServerNotification;

/// One page of notifications as returned by the backend.
///
/// The server reports its own unread count, but the feed recomputes the
/// count from the merged list; the field is kept for completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPage {
    /// Server-side unread count.
    #[serde(default, alias = "unreadCount")]
    pub unread_count: i64,
    /// The caller's notifications.
    #[serde(default)]
    pub notifications: Vec<ServerNotification>,
}

/// Backend notification operations required by the feed.
#[async_trait]
pub trait NotificationApi: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the notification page for the authenticated caller.
    async fn fetch(&self, role: Role) -> AppResult<NotificationPage>;

    /// Mark every notification of the authenticated caller as read.
    async fn mark_all_read(&self, role: Role) -> AppResult<()>;
}

/// Reqwest-backed client for the Aequora REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Backend base URL without trailing slash.
    base_url: String,
    /// Bearer token of the authenticated session, if any.
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            http: crate::http::build_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach the session's bearer token to all subsequent requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Resolve the notification endpoint path for a role.
    fn notifications_url(&self, role: Role) -> String {
        format!("{}/{}/notifications/", self.base_url, role.as_str())
    }

    /// Apply the auth header if a token is set.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl NotificationApi for ApiClient {
    async fn fetch(&self, role: Role) -> AppResult<NotificationPage> {
        let url = self.notifications_url(role);
        debug!(%url, "Fetching notifications");

        let response = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Api, format!("Notification fetch failed: {e}"), e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(format!(
                "Notification fetch returned status {status}"
            )));
        }

        response.json::<NotificationPage>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed notification response: {e}"),
                e,
            )
        })
    }

    async fn mark_all_read(&self, role: Role) -> AppResult<()> {
        let url = self.notifications_url(role);
        debug!(%url, "Marking all notifications read");

        // The endpoint takes no body; a bare POST flips every row.
        let response = self
            .authorize(self.http.post(&url))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Api, format!("Mark-all-read failed: {e}"), e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(format!(
                "Mark-all-read returned status {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_accepts_both_count_spellings() {
        let snake: NotificationPage =
            serde_json::from_str(r#"{"unread_count": 3, "notifications": []}"#).unwrap();
        assert_eq!(snake.unread_count, 3);

        let camel: NotificationPage =
            serde_json::from_str(r#"{"unreadCount": 2, "notifications": []}"#).unwrap();
        assert_eq!(camel.unread_count, 2);
    }

    #[test]
    fn test_empty_page_defaults() {
        let page: NotificationPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.unread_count, 0);
        assert!(page.notifications.is_empty());
    }

    #[test]
    fn test_role_scoped_urls() {
        let config = ApiConfig {
            base_url: "https://api.aequora.example/api/".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.notifications_url(Role::Resident),
            "https://api.aequora.example/api/resident/notifications/"
        );
        assert_eq!(
            client.notifications_url(Role::Authority),
            "https://api.aequora.example/api/authority/notifications/"
        );
    }
}
