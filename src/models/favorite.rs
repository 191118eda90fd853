use serde::{Deserialize, Serialize};

use super::lenient;
use super::review::Review;

/// A saved reference to a review, with the review's display fields copied in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(rename = "_id", default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub review_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub food_image: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub restaurant_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_email: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub created_at: Option<String>,
}

/// Body of `POST /favorites`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub review_id: String,
    pub food_name: String,
    pub food_image: String,
    pub restaurant_name: String,
    pub location: String,
    pub rating: f64,
    pub user_email: String,
    pub created_at: String,
}

impl NewFavorite {
    pub fn from_review(review: &Review, user_email: &str, created_at: String) -> Self {
        Self {
            review_id: review.id.clone(),
            food_name: review.food_name.clone(),
            food_image: review.food_image.clone(),
            restaurant_name: review.restaurant_name.clone(),
            location: review.location.clone(),
            rating: review.rating,
            user_email: user_email.to_string(),
            created_at,
        }
    }
}
