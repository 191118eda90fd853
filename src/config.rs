/// Build-time configuration for the client.
///
/// `FOODIE_API_URL` points at the review API and `FIREBASE_API_KEY` is the web
/// API key of the identity provider project. Both are read when the crate is
/// compiled, e.g. `FOODIE_API_URL=https://api.example.com trunk build`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub identity_api_key: String,
}

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

impl AppConfig {
    pub fn new(api_base_url: &str, identity_api_key: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            identity_api_key: identity_api_key.trim().to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            option_env!("FOODIE_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("FIREBASE_API_KEY").unwrap_or_default(),
        )
    }

    /// Joins the API base with `path` using exactly one separator.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
