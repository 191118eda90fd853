use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions};

use crate::api::ApiClient;
use crate::components::review_form::{review_form_state, review_form_values, ReviewForm};
use crate::models::ReviewUpdate;
use crate::query::{invalidates, use_query, QueryClient, QueryKey};
use crate::toast::use_toasts;

#[component]
fn FormSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-base-200 bg-base-100 p-6 md:p-8 animate-pulse">
            <div class="h-6 bg-base-200 rounded w-1/3 mb-4"></div>
            <div class="h-10 bg-base-200 rounded mb-3"></div>
            <div class="h-10 bg-base-200 rounded mb-3"></div>
            <div class="h-10 bg-base-200 rounded mb-3"></div>
            <div class="h-24 bg-base-200 rounded mb-3"></div>
        </div>
    }
}

#[component]
pub fn EditReviewPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let queries = expect_context::<QueryClient>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();

    let review_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let review = {
        let api = api.clone();
        use_query(
            move || Some(review_id()).filter(|id| !id.is_empty()).map(QueryKey::Review),
            move |key| {
                let api = api.clone();
                async move { api.get_review(key.arg()).await }
            },
        )
    };

    let form = review_form_state();
    create_effect(move |_| {
        if let Some(Ok(loaded)) = review.get() {
            form.reset(&review_form_values(&ReviewUpdate::from(&loaded)));
        }
    });

    let update_review = create_action(move |(id, update): &(String, ReviewUpdate)| {
        let api = api.clone();
        let queries = queries.clone();
        let navigate = navigate.clone();
        let id = id.clone();
        let update = update.clone();
        async move {
            match api.update_review(&id, &update).await {
                Ok(_) => {
                    toasts.success("Review updated successfully");
                    queries.invalidate(invalidates::UPDATE_REVIEW);
                    navigate("/my-reviews", NavigateOptions::default());
                }
                Err(err) => toasts.error(err.user_message("Failed to update review")),
            }
        }
    });

    let on_submit = move |update: ReviewUpdate| {
        update_review.dispatch((review_id(), update));
    };

    view! {
        <section class="mt-4 md:mt-6 mb-10">
            <div class="max-w-3xl mx-auto">
                <Transition fallback=move || view! { <FormSkeleton/> }>
                    {move || {
                        review.get().map(|result| match result {
                            Err(err) => view! {
                                <div class="rounded-3xl border border-red-200 bg-red-50 p-6 md:p-8 text-sm text-red-700">
                                    {err.user_message("Failed to fetch review details")}
                                </div>
                            }
                            .into_view(),
                            Ok(_) => view! {
                                <div class="mb-6">
                                    <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"Edit Review"</p>
                                    <h1 class="text-2xl md:text-3xl font-extrabold">
                                        "Update your " <span class="text-primary">"food experience"</span>
                                    </h1>
                                    <p class="text-sm text-gray-500 mt-1 max-w-xl">
                                        "Adjust your rating, photo or text if something has changed."
                                    </p>
                                </div>
                                <div class="bg-base-100 rounded-3xl shadow-xl border border-base-200 p-6 md:p-8">
                                    <ReviewForm
                                        form=form
                                        on_submit=on_submit
                                        pending=update_review.pending()
                                        submit_label="Save Changes"
                                        pending_label="Updating..."
                                        text_label="Update your review"
                                        rating_caption="Current:"
                                    />
                                </div>
                            }
                            .into_view(),
                        })
                    }}
                </Transition>
            </div>
        </section>
    }
}
