use leptos::*;

use crate::components::review_card::ReviewCard;
use crate::favorites::is_favorite;
use crate::models::{Favorite, Review};

/// Grid of review cards; hearts are filled for reviews in `favorites`.
#[component]
pub fn ReviewsList(
    reviews: Vec<Review>,
    #[prop(into)] favorites: Signal<Vec<Favorite>>,
    #[prop(optional_no_strip)] on_favorite: Option<Callback<Review>>,
    #[prop(optional_no_strip)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-3">
            {reviews
                .into_iter()
                .map(|review| {
                    let id = review.id.clone();
                    let favorite = Signal::derive(move || favorites.with(|f| is_favorite(f, &id)));
                    view! {
                        <ReviewCard review=review favorite=favorite on_favorite=on_favorite busy=busy/>
                    }
                })
                .collect_view()}
        </div>
    }
}
