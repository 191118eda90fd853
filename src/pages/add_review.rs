use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::review_form::{review_form_state, ReviewForm, RATING};
use crate::guard::{current_path, login_redirect};
use crate::models::{ReviewDraft, ReviewUpdate};
use crate::query::{invalidates, QueryClient};
use crate::toast::use_toasts;
use crate::utils::format::{format_date, now_iso};

const DEFAULT_RATING: u8 = 4;

#[component]
pub fn AddReviewPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let queries = expect_context::<QueryClient>();
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let location = use_location();

    let form = review_form_state();
    form.set(RATING, DEFAULT_RATING.to_string());

    let add_review = {
        let navigate = navigate.clone();
        create_action(move |draft: &ReviewDraft| {
            let api = api.clone();
            let queries = queries.clone();
            let navigate = navigate.clone();
            let draft = draft.clone();
            async move {
                match api.create_review(&draft).await {
                    Ok(_) => {
                        toasts.success("Review added successfully!");
                        queries.invalidate(invalidates::ADD_REVIEW);
                        form.reset(&[(RATING, DEFAULT_RATING.to_string())]);
                        navigate(
                            "/all-reviews",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => toasts.error(err.user_message("Failed to add review.")),
                }
            }
        })
    };

    let on_submit = {
        let auth = auth.clone();
        move |update: ReviewUpdate| {
            let Some(user) = auth.user().get_untracked() else {
                toasts.error("You must be logged in to add a review.");
                navigate(&login_redirect(&current_path(&location)), NavigateOptions::default());
                return;
            };
            let draft = update.into_draft(user.name_or("Anonymous"), user.email, now_iso());
            add_review.dispatch(draft);
        }
    };

    let user = auth.user();
    let reviewer = move || user.get();
    let today = format_date(Some(&now_iso()));

    view! {
        <section class="mt-4 md:mt-6 mb-10">
            <div class="max-w-3xl mx-auto">
                <div class="mb-6">
                    <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"Share a Review"</p>
                    <h1 class="text-2xl md:text-3xl font-extrabold">
                        "Add your " <span class="text-primary">"local food experience"</span>
                    </h1>
                    <p class="text-sm text-gray-500 mt-1 max-w-xl">
                        "Help others discover great spots by sharing honest reviews with photos and ratings."
                    </p>
                </div>

                <div class="bg-base-100 rounded-3xl shadow-xl border border-base-200 p-6 md:p-8">
                    <div class="mb-5 flex flex-wrap items-center gap-3 text-sm bg-base-200/60 rounded-2xl px-4 py-3">
                        <div class="avatar placeholder">
                            <div class="w-9 rounded-full bg-primary/10 text-primary font-bold">
                                <span>{move || reviewer().map(|u| u.initial()).unwrap_or_else(|| "U".to_string())}</span>
                            </div>
                        </div>
                        <div>
                            <p class="font-semibold">
                                {move || reviewer().map(|u| u.name_or("Foodie User")).unwrap_or_default()}
                            </p>
                            <p class="text-xs text-gray-500">{move || reviewer().map(|u| u.email).unwrap_or_default()}</p>
                        </div>
                        <span class="ml-auto text-xs text-gray-400">{today}</span>
                    </div>

                    <ReviewForm
                        form=form
                        on_submit=on_submit
                        pending=add_review.pending()
                        submit_label="Submit Review"
                        pending_label="Submitting..."
                    />
                </div>
            </div>
        </section>
    }
}
