pub mod favorite;
mod lenient;
pub mod review;
pub mod user;

pub use favorite::{Favorite, NewFavorite};
pub use review::{Review, ReviewDraft, ReviewUpdate};
pub use user::SessionUser;
