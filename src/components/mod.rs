pub mod fields;
pub mod footer;
pub mod loading_spinner;
pub mod navbar;
pub mod review_card;
pub mod review_form;
pub mod reviews_list;
pub mod star_rating;
