use crate::models::{Favorite, NewFavorite, Review, SessionUser};

#[derive(Clone, Debug, PartialEq)]
pub enum FavoriteAction {
    LoginRequired,
    AlreadyFavorite,
    Add(NewFavorite),
}

pub fn is_favorite(favorites: &[Favorite], review_id: &str) -> bool {
    favorites.iter().any(|fav| fav.review_id == review_id)
}

/// Decides what a click on a review's heart does, given what is already saved.
pub fn favorite_action(
    user: Option<&SessionUser>,
    favorites: &[Favorite],
    review: &Review,
    created_at: String,
) -> FavoriteAction {
    let Some(user) = user else {
        return FavoriteAction::LoginRequired;
    };
    if is_favorite(favorites, &review.id) {
        return FavoriteAction::AlreadyFavorite;
    }
    FavoriteAction::Add(NewFavorite::from_review(review, &user.email, created_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str) -> Review {
        Review {
            id: id.into(),
            food_name: "Beef Tehari".into(),
            rating: 5.0,
            ..Default::default()
        }
    }

    fn saved(review_id: &str) -> Favorite {
        Favorite {
            id: format!("fav-{review_id}"),
            review_id: review_id.into(),
            ..Default::default()
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            uid: "u".into(),
            display_name: None,
            email: "me@example.com".into(),
            photo_url: None,
        }
    }

    #[test]
    fn anonymous_click_requires_login() {
        assert_eq!(
            favorite_action(None, &[], &review("r1"), String::new()),
            FavoriteAction::LoginRequired
        );
    }

    #[test]
    fn duplicate_is_a_no_op() {
        let favorites = vec![saved("r0"), saved("r1")];
        assert!(is_favorite(&favorites, "r1"));
        assert_eq!(
            favorite_action(Some(&user()), &favorites, &review("r1"), String::new()),
            FavoriteAction::AlreadyFavorite
        );
    }

    #[test]
    fn new_favorite_is_built_for_the_user() {
        let action = favorite_action(Some(&user()), &[saved("r0")], &review("r2"), "2025-05-05T00:00:00Z".into());
        let fav = match action {
            FavoriteAction::Add(fav) => fav,
            other => panic!("expected Add, got {other:?}"),
        };
        assert_eq!(fav.review_id, "r2");
        assert_eq!(fav.user_email, "me@example.com");
        assert_eq!(fav.food_name, "Beef Tehari");
        assert_eq!(fav.created_at, "2025-05-05T00:00:00Z");
    }
}
