use serde::{Deserialize, Serialize};

use super::lenient;

/// A review as the API returns it. Payloads are schema-less, so every display
/// field tolerates being absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default, deserialize_with = "lenient::string")]
    pub id: String,
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
    pub review_text: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub reviewer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_email: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub category: Option<String>,
}

impl Review {
    pub fn reviewer(&self) -> &str {
        self.reviewer_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("Local Food")
    }
}

/// Body of `POST /reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub food_name: String,
    pub food_image: String,
    pub restaurant_name: String,
    pub location: String,
    pub rating: u8,
    pub review_text: String,
    pub reviewer_name: String,
    pub user_email: String,
    pub created_at: String,
}

/// Body of `PUT /reviews/:id`. Reviewer and timestamp are not editable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub food_name: String,
    pub food_image: String,
    pub restaurant_name: String,
    pub location: String,
    pub rating: u8,
    pub review_text: String,
}

impl ReviewUpdate {
    pub fn into_draft(self, reviewer_name: String, user_email: String, created_at: String) -> ReviewDraft {
        ReviewDraft {
            food_name: self.food_name,
            food_image: self.food_image,
            restaurant_name: self.restaurant_name,
            location: self.location,
            rating: self.rating,
            review_text: self.review_text,
            reviewer_name,
            user_email,
            created_at,
        }
    }
}

impl From<&Review> for ReviewUpdate {
    fn from(review: &Review) -> Self {
        Self {
            food_name: review.food_name.clone(),
            food_image: review.food_image.clone(),
            restaurant_name: review.restaurant_name.clone(),
            location: review.location.clone(),
            rating: review.rating.round().clamp(1.0, 5.0) as u8,
            review_text: review.review_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_document() {
        let json = r#"{
            "_id": "665f1c",
            "foodName": "Kacchi Biryani",
            "foodImage": "https://img.test/kacchi.jpg",
            "restaurantName": "Sultan's Dine",
            "location": "Dhanmondi",
            "rating": 4.5,
            "reviewText": "Tender mutton and fragrant rice.",
            "reviewerName": "Rafi",
            "userEmail": "rafi@example.com",
            "createdAt": "2025-01-04T10:00:00.000Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, "665f1c");
        assert_eq!(review.rating, 4.5);
        assert_eq!(review.reviewer(), "Rafi");
        assert_eq!(review.category(), "Local Food");
    }

    #[test]
    fn sparse_document_gets_defaults() {
        let review: Review = serde_json::from_str(r#"{"_id":"1","rating":3}"#).unwrap();
        assert_eq!(review.food_name, "");
        assert_eq!(review.reviewer(), "Anonymous");
        assert!(review.created_at.is_none());
    }

    #[test]
    fn null_and_mistyped_fields_fall_back() {
        let json = r#"[
            {"_id":"a","foodName":"Haleem","rating":null},
            {"_id":"b","foodName":null,"rating":"4","reviewerName":null},
            {"_id":"c","foodName":"Nihari","rating":{"avg":5},"createdAt":12}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].rating, 0.0);
        assert_eq!(reviews[1].rating, 4.0);
        assert_eq!(reviews[1].food_name, "");
        assert_eq!(reviews[1].reviewer(), "Anonymous");
        assert_eq!(reviews[2].rating, 0.0);
        assert_eq!(reviews[2].created_at.as_deref(), Some("12"));
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ReviewUpdate {
            food_name: "Fuchka".into(),
            food_image: "https://img.test/f.jpg".into(),
            restaurant_name: "Street Cart".into(),
            location: "Mirpur".into(),
            rating: 5,
            review_text: "Crunchy and tangy, perfect.".into(),
        }
        .into_draft("Nadia".into(), "nadia@example.com".into(), "2025-02-01T00:00:00Z".into());
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["foodName"], "Fuchka");
        assert_eq!(value["reviewerName"], "Nadia");
        assert_eq!(value["userEmail"], "nadia@example.com");
        assert_eq!(value["rating"], 5);
    }

    #[test]
    fn update_from_review_clamps_rating() {
        let review = Review { rating: 4.6, ..Default::default() };
        assert_eq!(ReviewUpdate::from(&review).rating, 5);
        let review = Review { rating: 0.0, ..Default::default() };
        assert_eq!(ReviewUpdate::from(&review).rating, 1);
    }
}
