//! Email/password accounts through the Firebase Identity Toolkit REST API.
//!
//! The session (tokens plus the user) is kept in `localStorage` so reloads
//! stay signed in. An id token past its expiry is swapped through the secure
//! token endpoint before it is used.

use std::cell::RefCell;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::IdentityProvider;
use crate::error::AppError;
use crate::models::SessionUser;

const IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts";
const TOKEN_URL: &str = "https://securetoken.googleapis.com/v1/token";
/// `localStorage` key holding the serialized [`StoredSession`].
pub const STORAGE_KEY: &str = "foodiecircle.session";
/// Refresh this long before the provider's stated expiry.
const EXPIRY_SLACK_MS: i64 = 60_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredSession {
    id_token: String,
    refresh_token: String,
    expires_at_ms: i64,
    user: SessionUser,
}

impl StoredSession {
    fn needs_refresh(&self, now_ms: i64) -> bool {
        now_ms + EXPIRY_SLACK_MS >= self.expires_at_ms
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordAuthResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

fn expiry_from(now_ms: i64, expires_in: &str) -> i64 {
    now_ms + expires_in.trim().parse::<i64>().unwrap_or(3600) * 1000
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PasswordAuthResponse {
    fn into_session(self, now_ms: i64) -> StoredSession {
        StoredSession {
            expires_at_ms: expiry_from(now_ms, &self.expires_in),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            user: SessionUser {
                uid: self.local_id,
                display_name: non_blank(self.display_name),
                email: self.email,
                photo_url: non_blank(self.profile_picture),
            },
        }
    }
}

/// Turns a provider error code such as `EMAIL_EXISTS` or
/// `WEAK_PASSWORD : Password should be ...` into text for the user.
pub fn describe_provider_error(raw: &str) -> String {
    let code = raw.split(" : ").next().unwrap_or(raw).trim();
    let text = match code {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password."
        }
        "INVALID_EMAIL" => "Please enter a valid email address.",
        "MISSING_PASSWORD" => "Password is required",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
        "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
            "Your session has expired. Please log in again."
        }
        other => other,
    };
    text.to_string()
}

fn provider_error(body: &str) -> AppError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(parsed) => AppError::Auth(describe_provider_error(&parsed.error.message)),
        Err(_) => AppError::Auth("Authentication failed. Please try again.".to_string()),
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.text().await?;
    if !response.ok() {
        return Err(provider_error(&body));
    }
    Ok(serde_json::from_str(&body)?)
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn local_storage() -> Result<web_sys::Storage, AppError> {
    gloo_utils::window()
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
}

pub struct FirebaseIdentity {
    api_key: String,
    session: RefCell<Option<StoredSession>>,
}

impl FirebaseIdentity {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            session: RefCell::new(None),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}:{}?key={}", IDENTITY_URL, method, urlencoding::encode(&self.api_key))
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: serde_json::Value) -> Result<T, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::Auth(
                "Sign-in is not configured. Set FIREBASE_API_KEY at build time.".to_string(),
            ));
        }
        log!("[AUTH] accounts:{}", method);
        let response = Request::post(&self.url(method)).json(&body)?.send().await?;
        read_response(response).await
    }

    fn persist(&self, session: Option<StoredSession>) {
        let stored = local_storage().and_then(|storage| match &session {
            Some(s) => {
                let json = serde_json::to_string(s)?;
                storage
                    .set_item(STORAGE_KEY, &json)
                    .map_err(|_| AppError::Storage("could not write session".to_string()))
            }
            None => storage
                .remove_item(STORAGE_KEY)
                .map_err(|_| AppError::Storage("could not clear session".to_string())),
        });
        if let Err(err) = stored {
            warn!("[AUTH] {}", err);
        }
        *self.session.borrow_mut() = session;
    }

    fn load_persisted(&self) -> Option<StoredSession> {
        let raw = local_storage().ok()?.get_item(STORAGE_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("[AUTH] discarding unreadable session: {}", err);
                None
            }
        }
    }

    async fn password_auth(&self, method: &str, email: String, password: String) -> Result<SessionUser, AppError> {
        let response: PasswordAuthResponse = self
            .call(
                method,
                json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;
        let session = response.into_session(now_ms());
        let user = session.user.clone();
        self.persist(Some(session));
        Ok(user)
    }

    async fn refresh(&self, session: StoredSession) -> Result<StoredSession, AppError> {
        log!("[AUTH] refreshing id token");
        let body = format!(
            "grant_type=refresh_token&refresh_token={}",
            urlencoding::encode(&session.refresh_token)
        );
        let response = Request::post(&format!("{}?key={}", TOKEN_URL, urlencoding::encode(&self.api_key)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)?
            .send()
            .await?;
        let refreshed: RefreshResponse = read_response(response).await?;
        Ok(StoredSession {
            expires_at_ms: expiry_from(now_ms(), &refreshed.expires_in),
            id_token: refreshed.id_token,
            refresh_token: refreshed.refresh_token,
            user: session.user,
        })
    }

    /// The current session with a usable id token.
    async fn fresh_session(&self) -> Result<StoredSession, AppError> {
        let current = self.session.borrow().clone();
        let session = current.ok_or(AppError::NotSignedIn)?;
        if !session.needs_refresh(now_ms()) {
            return Ok(session);
        }
        let refreshed = self.refresh(session).await?;
        self.persist(Some(refreshed.clone()));
        Ok(refreshed)
    }

    async fn restore_session(&self) -> Result<Option<SessionUser>, AppError> {
        let Some(saved) = self.load_persisted() else {
            return Ok(None);
        };
        *self.session.borrow_mut() = Some(saved);

        let session = match self.fresh_session().await {
            Ok(session) => session,
            Err(err) => {
                self.persist(None);
                return Err(err);
            }
        };
        let lookup: LookupResponse = match self.call("lookup", json!({ "idToken": session.id_token })).await {
            Ok(lookup) => lookup,
            Err(err) => {
                self.persist(None);
                return Err(err);
            }
        };
        let Some(found) = lookup.users.into_iter().next() else {
            self.persist(None);
            return Ok(None);
        };
        let user = SessionUser {
            uid: found.local_id,
            display_name: non_blank(found.display_name),
            email: found.email,
            photo_url: non_blank(found.photo_url),
        };
        self.persist(Some(StoredSession { user: user.clone(), ..session }));
        Ok(Some(user))
    }

    async fn update(&self, display_name: String, photo_url: String) -> Result<SessionUser, AppError> {
        let session = self.fresh_session().await?;
        let updated: UpdateResponse = self
            .call(
                "update",
                json!({
                    "idToken": session.id_token,
                    "displayName": display_name,
                    "photoUrl": photo_url,
                    "returnSecureToken": false,
                }),
            )
            .await?;
        let user = SessionUser {
            uid: updated.local_id,
            display_name: non_blank(updated.display_name),
            email: updated.email,
            photo_url: non_blank(updated.photo_url),
        };
        self.persist(Some(StoredSession { user: user.clone(), ..session }));
        Ok(user)
    }
}

impl IdentityProvider for FirebaseIdentity {
    fn sign_up(&self, email: String, password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        self.password_auth("signUp", email, password).boxed_local()
    }

    fn sign_in(&self, email: String, password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        self.password_auth("signInWithPassword", email, password).boxed_local()
    }

    fn update_profile(
        &self,
        display_name: String,
        photo_url: String,
    ) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        self.update(display_name, photo_url).boxed_local()
    }

    // The REST surface has no sign-out call; dropping the tokens ends the session.
    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), AppError>> {
        async move {
            self.persist(None);
            Ok(())
        }
        .boxed_local()
    }

    fn restore(&self) -> LocalBoxFuture<'_, Result<Option<SessionUser>, AppError>> {
        self.restore_session().boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes_become_readable() {
        assert_eq!(describe_provider_error("EMAIL_EXISTS"), "An account with this email already exists.");
        assert_eq!(describe_provider_error("INVALID_LOGIN_CREDENTIALS"), "Incorrect email or password.");
        assert_eq!(
            describe_provider_error("WEAK_PASSWORD : Password should be at least 6 characters"),
            "Password should be at least 6 characters."
        );
        assert_eq!(describe_provider_error("OPERATION_NOT_ALLOWED"), "OPERATION_NOT_ALLOWED");
    }

    #[test]
    fn error_body_is_parsed() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND","errors":[]}}"#;
        assert_eq!(provider_error(body), AppError::Auth("Incorrect email or password.".into()));
        assert_eq!(
            provider_error("bad gateway"),
            AppError::Auth("Authentication failed. Please try again.".into())
        );
    }

    #[test]
    fn sign_in_response_becomes_session() {
        let json = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc123",
            "email": "nabila@example.com",
            "displayName": "",
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        }"#;
        let response: PasswordAuthResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session(1_000);
        assert_eq!(session.expires_at_ms, 3_601_000);
        assert_eq!(session.user.uid, "abc123");
        assert_eq!(session.user.display_name, None);
        assert!(!session.needs_refresh(1_000));
        assert!(session.needs_refresh(3_541_000));
    }

    #[test]
    fn stored_session_round_trips_through_storage_json() {
        let session = StoredSession {
            id_token: "t".into(),
            refresh_token: "r".into(),
            expires_at_ms: 42,
            user: SessionUser {
                uid: "u".into(),
                display_name: Some("Sami".into()),
                email: "sami@example.com".into(),
                photo_url: None,
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"photoURL\":null"));
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn method_urls_carry_the_key() {
        let identity = FirebaseIdentity::new("web-key");
        assert_eq!(
            identity.url("signInWithPassword"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=web-key"
        );
    }
}
