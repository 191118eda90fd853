pub mod add_review;
pub mod all_reviews;
pub mod edit_review;
pub mod home;
pub mod layout;
pub mod login;
pub mod my_favorites;
pub mod my_reviews;
pub mod not_found;
pub mod register;
pub mod review_details;
