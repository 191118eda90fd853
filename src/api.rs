use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Favorite, NewFavorite, Review, ReviewDraft, ReviewUpdate};

/// Thin client over the review API. Each method performs exactly one request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// `GET /reviews`, with `?search=` when the trimmed term is not empty.
    pub fn reviews_url(&self, search: &str) -> String {
        let base = self.config.endpoint("reviews");
        match search.trim() {
            "" => base,
            term => with_query(&base, "search", term),
        }
    }

    pub fn top_reviews_url(&self) -> String {
        self.config.endpoint("reviews/top")
    }

    pub fn review_url(&self, id: &str) -> String {
        self.config.endpoint(&format!("reviews/{}", urlencoding::encode(id)))
    }

    pub fn my_reviews_url(&self, email: &str) -> String {
        with_query(&self.config.endpoint("my-reviews"), "email", email)
    }

    pub fn favorites_url(&self, email: &str) -> String {
        with_query(&self.config.endpoint("favorites"), "email", email)
    }

    pub fn favorite_url(&self, id: &str) -> String {
        self.config.endpoint(&format!("favorites/{}", urlencoding::encode(id)))
    }

    pub async fn list_reviews(&self, search: &str) -> Result<Vec<Review>, AppError> {
        get_json(&self.reviews_url(search)).await
    }

    pub async fn top_reviews(&self) -> Result<Vec<Review>, AppError> {
        get_json(&self.top_reviews_url()).await
    }

    pub async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        get_json(&self.review_url(id)).await
    }

    pub async fn create_review(&self, draft: &ReviewDraft) -> Result<serde_json::Value, AppError> {
        let url = self.config.endpoint("reviews");
        log!("[API] POST {} ({})", url, draft.food_name);
        expect_success(Request::post(&url).json(draft)?.send().await?).await
    }

    pub async fn update_review(&self, id: &str, update: &ReviewUpdate) -> Result<serde_json::Value, AppError> {
        let url = self.review_url(id);
        log!("[API] PUT {}", url);
        expect_success(Request::put(&url).json(update)?.send().await?).await
    }

    pub async fn delete_review(&self, id: &str) -> Result<serde_json::Value, AppError> {
        let url = self.review_url(id);
        log!("[API] DELETE {}", url);
        expect_success(Request::delete(&url).send().await?).await
    }

    pub async fn my_reviews(&self, email: &str) -> Result<Vec<Review>, AppError> {
        get_json(&self.my_reviews_url(email)).await
    }

    pub async fn favorites(&self, email: &str) -> Result<Vec<Favorite>, AppError> {
        get_json(&self.favorites_url(email)).await
    }

    pub async fn add_favorite(&self, favorite: &NewFavorite) -> Result<serde_json::Value, AppError> {
        let url = self.config.endpoint("favorites");
        log!("[API] POST {} (review {})", url, favorite.review_id);
        expect_success(Request::post(&url).json(favorite)?.send().await?).await
    }

    pub async fn delete_favorite(&self, id: &str) -> Result<serde_json::Value, AppError> {
        let url = self.favorite_url(id);
        log!("[API] DELETE {}", url);
        expect_success(Request::delete(&url).send().await?).await
    }
}

fn with_query(base: &str, key: &str, value: &str) -> String {
    format!("{}?{}={}", base, key, urlencoding::encode(value))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    log!("[API] GET {}", url);
    let response = Request::get(url).send().await?;
    let value = expect_success(response).await?;
    Ok(serde_json::from_value(value)?)
}

/// Turns a non-2xx response into `AppError::Status`. Successful responses
/// with an empty body decode to `null`.
async fn expect_success(response: Response) -> Result<serde_json::Value, AppError> {
    let status = response.status();
    let body = response.text().await?;
    if !response.ok() {
        leptos::logging::error!("[API] {} returned {}: {}", response.url(), status, body);
        return Err(AppError::from_status(status, &body));
    }
    decode_body(&body)
}

fn decode_body(body: &str) -> Result<serde_json::Value, AppError> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(AppConfig::new("https://api.foodie.test/", ""))
    }

    #[test]
    fn list_url_omits_blank_search() {
        assert_eq!(client().reviews_url(""), "https://api.foodie.test/reviews");
        assert_eq!(client().reviews_url("   "), "https://api.foodie.test/reviews");
    }

    #[test]
    fn list_url_encodes_trimmed_search() {
        assert_eq!(
            client().reviews_url("  beef tehari "),
            "https://api.foodie.test/reviews?search=beef%20tehari"
        );
    }

    #[test]
    fn email_queries_are_encoded() {
        assert_eq!(
            client().my_reviews_url("a+b@example.com"),
            "https://api.foodie.test/my-reviews?email=a%2Bb%40example.com"
        );
        assert_eq!(
            client().favorites_url("me@example.com"),
            "https://api.foodie.test/favorites?email=me%40example.com"
        );
    }

    #[test]
    fn id_paths() {
        assert_eq!(client().review_url("665f"), "https://api.foodie.test/reviews/665f");
        assert_eq!(client().favorite_url("f1"), "https://api.foodie.test/favorites/f1");
        assert_eq!(client().top_reviews_url(), "https://api.foodie.test/reviews/top");
    }

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(decode_body("").unwrap(), serde_json::Value::Null);
        assert_eq!(decode_body(r#"{"deletedCount":1}"#).unwrap()["deletedCount"], 1);
        assert!(matches!(decode_body("<html>"), Err(AppError::Decode(_))));
    }
}
