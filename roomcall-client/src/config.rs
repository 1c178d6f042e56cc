use serde::Deserialize;

/// Settings handed over by the hosting page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Full URL of the token endpoint.
    pub token_url: String,
    pub local_container_id: String,
    pub remote_container_id: String,
    pub status_id: String,
    pub notification_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token_url: "http://localhost:5000/generate-token".to_string(),
            local_container_id: "local-video".to_string(),
            remote_container_id: "remote-videos".to_string(),
            status_id: "status".to_string(),
            notification_id: "notification".to_string(),
        }
    }
}
