use leptos::logging::warn;
use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::ApiClient;
use crate::components::star_rating::Stars;
use crate::models::Review;
use crate::query::{use_query, QueryKey};
use crate::utils::format::format_date;

fn go_back() {
    let back = gloo_utils::window().history().and_then(|history| history.back());
    if let Err(err) = back {
        warn!("[NAV] history.back failed: {:?}", err);
    }
}

#[component]
fn DetailsSkeleton() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <div class="mb-4">
                <div class="h-8 w-32 bg-base-200 rounded-full animate-pulse"></div>
            </div>
            <div class="bg-base-100 rounded-3xl border border-base-200 shadow-xl overflow-hidden animate-pulse">
                <div class="h-56 md:h-72 bg-base-200"></div>
                <div class="p-6 md:p-8 space-y-3">
                    <div class="h-6 bg-base-200 w-1/2 rounded"></div>
                    <div class="h-4 bg-base-200 w-1/3 rounded"></div>
                    <div class="h-4 bg-base-200 w-full rounded"></div>
                    <div class="h-4 bg-base-200 w-5/6 rounded"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReviewDetails(review: Review) -> impl IntoView {
    let reviewer = review
        .reviewer_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Foodie User".to_string());
    let initial = reviewer
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "F".to_string());

    view! {
        <div class="max-w-4xl mx-auto space-y-4">
            <button
                class="inline-flex items-center gap-2 text-sm px-3 py-1.5 rounded-full border border-base-300 hover:border-primary hover:bg-primary/5 transition"
                on:click=move |_| go_back()
            >
                "← Back"
            </button>

            <div class="bg-base-100 rounded-3xl border border-base-200 shadow-xl overflow-hidden">
                <div class="relative h-56 md:h-72">
                    <img src=review.food_image.clone() alt=review.food_name.clone() class="w-full h-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-black/10"></div>
                    <div class="absolute bottom-4 left-4 right-4 md:left-8 md:right-8 text-white">
                        <p class="text-xs md:text-sm uppercase tracking-[0.25em] text-orange-200 mb-1">
                            {review.restaurant_name.clone()}
                        </p>
                        <h1 class="text-2xl md:text-3xl font-extrabold drop-shadow-sm">{review.food_name.clone()}</h1>
                        <p class="text-xs md:text-sm text-gray-100 mt-1">"📍 " {review.location.clone()}</p>
                    </div>
                </div>

                <div class="p-6 md:p-8 space-y-5">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                        <div class="flex items-center gap-3">
                            <span class="text-yellow-400 text-xl">"★"</span>
                            <Stars rating=review.rating/>
                        </div>
                        <div class="flex items-center gap-2 text-xs md:text-sm text-gray-500">
                            <div class="avatar placeholder">
                                <div class="w-8 rounded-full bg-primary/10 text-primary text-xs font-bold flex items-center justify-center">
                                    {initial}
                                </div>
                            </div>
                            <div>
                                <p class="font-semibold text-gray-700">{reviewer}</p>
                                <p class="text-[0.7rem] md:text-xs">
                                    "Posted on " {format_date(review.created_at.as_deref())}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="divider my-0"></div>

                    <div class="space-y-2">
                        <h2 class="text-base md:text-lg font-semibold">"Review"</h2>
                        <p class="text-sm md:text-base leading-relaxed text-gray-700 whitespace-pre-line">
                            {review.review_text.clone()}
                        </p>
                    </div>

                    <div class="pt-2 flex flex-wrap justify-between items-center gap-3">
                        <div class="text-xs text-gray-500">
                            "Category: " <span class="font-medium">{review.category().to_string()}</span>
                        </div>
                        <div class="flex flex-wrap gap-2">
                            <A href="/all-reviews" class="btn btn-sm rounded-full normal-case bg-base-200 hover:bg-primary hover:text-white border border-base-200 hover:border-primary">
                                "Browse More Reviews"
                            </A>
                            <A href="/add-review" class="btn btn-sm rounded-full normal-case bg-primary text-white border-0 hover:bg-primary/90">
                                "Add Your Own Review"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewDetailsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let review = use_query(
        move || {
            params
                .with(|p| p.get("id").cloned())
                .filter(|id| !id.is_empty())
                .map(QueryKey::Review)
        },
        move |key| {
            let api = api.clone();
            async move { api.get_review(key.arg()).await }
        },
    );

    view! {
        <section class="mt-4 md:mt-6 mb-12">
            <Transition fallback=move || view! { <DetailsSkeleton/> }>
                {move || {
                    review.get().map(|result| match result {
                        Ok(review) => view! { <ReviewDetails review=review/> }.into_view(),
                        Err(err) => view! {
                            <div class="max-w-3xl mx-auto">
                                <div class="bg-red-50 border border-red-200 rounded-2xl p-6 text-sm text-red-600">
                                    {err.user_message("Failed to fetch review details")}
                                </div>
                            </div>
                        }
                        .into_view(),
                    })
                }}
            </Transition>
        </section>
    }
}
