use leptos::*;
use leptos_router::A;

use crate::components::star_rating::Stars;
use crate::models::Review;

#[component]
pub fn ReviewCard(
    review: Review,
    #[prop(into)] favorite: Signal<bool>,
    #[prop(optional_no_strip)] on_favorite: Option<Callback<Review>>,
    #[prop(optional_no_strip)] busy: Option<Signal<bool>>,
) -> impl IntoView {
    let details = format!("/review/{}", review.id);
    let heart = on_favorite.map(|on_favorite| {
        let review = review.clone();
        view! {
            <button
                class="absolute right-3 top-3 btn btn-xs btn-circle border-0 bg-base-100/90 hover:bg-white shadow"
                title="Add to favorites"
                disabled=move || busy.map(|b| b.get()).unwrap_or(false)
                on:click=move |_| on_favorite.call(review.clone())
            >
                {move || if favorite.get() {
                    view! { <span class="text-red-500">"♥"</span> }
                } else {
                    view! { <span class="text-gray-500">"♡"</span> }
                }}
            </button>
        }
    });

    view! {
        <article class="rounded-2xl bg-base-100 shadow-sm border border-base-200 overflow-hidden flex flex-col">
            <div class="relative h-48 overflow-hidden">
                <img src=review.food_image.clone() alt=review.food_name.clone() class="w-full h-full object-cover"/>
                {heart}
            </div>
            <div class="p-4 flex flex-col gap-2 flex-1">
                <p class="text-xs uppercase tracking-[0.2em] text-primary mb-1">{review.restaurant_name.clone()}</p>
                <h3 class="text-lg font-semibold line-clamp-1">{review.food_name.clone()}</h3>
                <p class="text-xs text-gray-500">"📍 " {review.location.clone()}</p>
                <p class="text-xs text-gray-600 mt-1 line-clamp-3">{review.review_text.clone()}</p>
                <div class="flex items-center justify-between mt-2">
                    <Stars rating=review.rating/>
                    <p class="text-xs text-gray-500">
                        "by " <span class="font-medium">{review.reviewer().to_string()}</span>
                    </p>
                </div>
                <A href=details class="btn btn-sm w-full rounded-full normal-case mt-auto bg-base-200 hover:bg-primary hover:text-white">
                    "View Details"
                </A>
            </div>
        </article>
    }
}
