use std::time::Duration;

use serde::Deserialize;

/// Where and how the client talks to the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub graphql_path: String,
    pub auth_token: Option<String>,
    pub client_name: String,
    #[serde(with = "seconds")]
    pub connect_timeout: Duration,
    #[serde(with = "seconds")]
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            graphql_path: "/api/graphql".to_string(),
            auth_token: None,
            client_name: "readlater-cli".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    /// Headers attached to every operation.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("X-ReadLater-Client".to_string(), self.client_name.clone())];
        if let Some(token) = self.auth_token.as_deref().filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), token.to_string()));
        }
        headers
    }
}

mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
