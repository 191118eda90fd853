use serde::{Deserialize, Serialize};

/// The signed-in identity, as supplied by the identity provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl SessionUser {
    /// First letter of the display name, else of the email, upper-cased.
    pub fn initial(&self) -> String {
        self.display_name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .or_else(|| self.email.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }

    pub fn name_or(&self, fallback: &str) -> String {
        self.display_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
