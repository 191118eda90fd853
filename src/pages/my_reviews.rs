use leptos::*;
use leptos_router::A;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::models::Review;
use crate::query::{invalidates, use_query, QueryClient, QueryKey};
use crate::toast::use_toasts;
use crate::utils::format::format_date;

#[component]
fn TableSkeleton() -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <div class="rounded-2xl border border-base-200 bg-base-100 p-4 animate-pulse">
                <div class="h-5 bg-base-200 rounded w-1/2 mb-4"></div>
                <div class="h-10 bg-base-200 rounded mb-2"></div>
                <div class="h-10 bg-base-200 rounded mb-2"></div>
                <div class="h-10 bg-base-200 rounded mb-2"></div>
            </div>
        </div>
    }
}

#[component]
fn ReviewRow(index: usize, review: Review, on_delete: Callback<Review>) -> impl IntoView {
    let edit = format!("/edit-review/{}", review.id);
    let target = review.clone();

    view! {
        <tr class="hover">
            <td class="text-xs md:text-sm">{index + 1}</td>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar">
                        <div class="mask mask-squircle w-12 h-12">
                            <img src=review.food_image.clone() alt=review.food_name.clone()/>
                        </div>
                    </div>
                    <div>
                        <div class="font-semibold text-sm md:text-base">{review.food_name.clone()}</div>
                        <div class="text-xs text-gray-500 flex items-center gap-1">"⭐ " {review.rating}</div>
                    </div>
                </div>
            </td>
            <td class="text-xs md:text-sm">
                <div class="font-medium">{review.restaurant_name.clone()}</div>
            </td>
            <td class="text-xs md:text-sm">{review.location.clone()}</td>
            <td class="text-xs md:text-sm">{format_date(review.created_at.as_deref())}</td>
            <td>
                <div class="flex items-center justify-center gap-2">
                    <A href=edit class="btn btn-xs md:btn-sm rounded-full bg-base-200 hover:bg-primary hover:text-white border-none flex items-center gap-1">
                        "✎" <span class="hidden md:inline">"Edit"</span>
                    </A>
                    <button
                        class="btn btn-xs md:btn-sm rounded-full bg-red-50 text-red-500 hover:bg-red-500 hover:text-white border-none flex items-center gap-1"
                        on:click=move |_| on_delete.call(target.clone())
                    >
                        "🗑" <span class="hidden md:inline">"Delete"</span>
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Confirmation shown while `selected` holds a review.
#[component]
fn DeleteModal(
    selected: RwSignal<Option<Review>>,
    #[prop(into)] on_confirm: Callback<String>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let food_name = move || selected.with(|s| s.as_ref().map(|r| r.food_name.clone()).unwrap_or_default());
    let confirm = move |_| {
        if let Some(id) = selected.with_untracked(|s| s.as_ref().map(|r| r.id.clone())) {
            if !id.is_empty() {
                on_confirm.call(id);
            }
        }
    };

    view! {
        <div class="modal" class:modal-open=move || selected.with(Option::is_some)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-2">"Delete Review?"</h3>
                <p class="text-sm text-gray-600">
                    "Are you sure you want to delete "
                    <span class="font-semibold">{food_name}</span>
                    " from your reviews? This action cannot be undone."
                </p>
                <div class="modal-action">
                    <div class="flex gap-2">
                        <button class="btn btn-sm rounded-full" on:click=move |_| selected.set(None)>"Cancel"</button>
                        <button
                            type="button"
                            class="btn btn-sm rounded-full bg-red-500 text-white border-none hover:bg-red-600"
                            disabled=move || pending.get()
                            on:click=confirm
                        >
                            {move || if pending.get() { "Deleting..." } else { "Confirm" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MyReviewsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let queries = expect_context::<QueryClient>();
    let auth = use_auth();
    let toasts = use_toasts();

    let selected = create_rw_signal(None::<Review>);

    let reviews = {
        let api = api.clone();
        use_query(
            move || auth.email().map(QueryKey::MyReviews),
            move |key| {
                let api = api.clone();
                async move { api.my_reviews(key.arg()).await }
            },
        )
    };

    let delete_review = create_action(move |id: &String| {
        let api = api.clone();
        let queries = queries.clone();
        let id = id.clone();
        async move {
            match api.delete_review(&id).await {
                Ok(_) => {
                    toasts.success("Review deleted successfully");
                    queries.invalidate(invalidates::DELETE_REVIEW);
                    selected.set(None);
                }
                Err(err) => toasts.error(err.user_message("Failed to delete review")),
            }
        }
    });

    let on_delete = Callback::new(move |review: Review| selected.set(Some(review)));

    view! {
        <section class="mt-4 md:mt-6 mb-10">
            <div class="mb-6">
                <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"Manage"</p>
                <h1 class="text-2xl md:text-3xl font-extrabold">
                    "My " <span class="text-primary">"Reviews"</span>
                </h1>
                <p class="text-sm text-gray-500 mt-1 max-w-md">
                    "Edit or delete your submitted reviews from here. Keep your food diary up to date."
                </p>
            </div>

            <Transition fallback=move || view! { <TableSkeleton/> }>
                {move || {
                    reviews.get().map(|result| match result {
                        Err(err) => view! {
                            <div class="p-4 rounded-2xl bg-red-50 border border-red-200 text-sm text-red-600">
                                {err.user_message("Failed to fetch your reviews")}
                            </div>
                        }
                        .into_view(),
                        Ok(list) if list.is_empty() => view! {
                            <div class="rounded-2xl border border-base-200 bg-base-100 p-8 text-center">
                                <p class="text-gray-600 font-medium">"You haven't added any reviews yet."</p>
                                <A href="/add-review" class="btn btn-primary rounded-full mt-4 normal-case">
                                    "Add Your First Review"
                                </A>
                            </div>
                        }
                        .into_view(),
                        Ok(list) => view! {
                            <div class="rounded-2xl border border-base-200 bg-base-100 p-4 md:p-6">
                                <div class="overflow-x-auto">
                                    <table class="table table-zebra w-full">
                                        <thead>
                                            <tr class="text-xs md:text-sm text-gray-500">
                                                <th>"#"</th>
                                                <th>"Food"</th>
                                                <th>"Restaurant"</th>
                                                <th>"Location"</th>
                                                <th>"Posted"</th>
                                                <th class="text-center">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, review)| {
                                                    view! { <ReviewRow index=index review=review on_delete=on_delete/> }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }
                        .into_view(),
                    })
                }}
            </Transition>

            <DeleteModal
                selected=selected
                on_confirm=move |id: String| delete_review.dispatch(id)
                pending=delete_review.pending()
            />
        </section>
    }
}
