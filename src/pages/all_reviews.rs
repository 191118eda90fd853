use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::loading_spinner::SkeletonGrid;
use crate::components::reviews_list::ReviewsList;
use crate::favorites::{favorite_action, FavoriteAction};
use crate::guard::{current_path, login_redirect};
use crate::models::{NewFavorite, Review};
use crate::query::{invalidates, use_query, QueryClient, QueryKey};
use crate::toast::use_toasts;
use crate::utils::format::{now_iso, results_summary};

#[component]
pub fn AllReviewsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let queries = expect_context::<QueryClient>();
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let location = use_location();

    let (search_input, set_search_input) = create_signal(String::new());
    let (search_text, set_search_text) = create_signal(String::new());

    let reviews = {
        let api = api.clone();
        use_query(
            move || Some(QueryKey::Reviews(search_text.get())),
            move |key| {
                let api = api.clone();
                async move { api.list_reviews(key.arg()).await }
            },
        )
    };

    let favorites = {
        let api = api.clone();
        let auth = auth.clone();
        use_query(
            move || auth.email().map(QueryKey::Favorites),
            move |key| {
                let api = api.clone();
                async move { api.favorites(key.arg()).await }
            },
        )
    };
    let saved = Signal::derive(move || {
        favorites
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });

    let add_favorite = create_action(move |favorite: &NewFavorite| {
        let api = api.clone();
        let queries = queries.clone();
        let favorite = favorite.clone();
        async move {
            match api.add_favorite(&favorite).await {
                Ok(_) => {
                    toasts.success("Added to favorites");
                    queries.invalidate(invalidates::FAVORITES);
                }
                Err(err) => toasts.error(err.user_message("Failed to add favorite")),
            }
        }
    });

    let on_favorite = Callback::new(move |review: Review| {
        let user = auth.user().get_untracked();
        let action = saved.with_untracked(|saved| {
            favorite_action(user.as_ref(), saved, &review, now_iso())
        });
        match action {
            FavoriteAction::LoginRequired => {
                toasts.error("You need to login to add favorites");
                navigate(&login_redirect(&current_path(&location)), NavigateOptions::default());
            }
            FavoriteAction::AlreadyFavorite => toasts.info("Already in your favorites"),
            FavoriteAction::Add(favorite) => add_favorite.dispatch(favorite),
        }
    });

    let handle_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_search_text.set(search_input.get_untracked().trim().to_string());
    };

    view! {
        <section class="mt-6 mb-10">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-6">
                <div>
                    <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"All Reviews"</p>
                    <h1 class="text-2xl md:text-3xl font-extrabold">
                        "Discover " <span class="text-primary">"local food stories"</span>
                    </h1>
                    <p class="text-sm text-gray-500 mt-1 max-w-md">
                        "Browse what people are eating nearby. Use search to find your next favorite dish."
                    </p>
                </div>
                <form on:submit=handle_search class="join w-full md:w-auto">
                    <input
                        type="text"
                        placeholder="Search by food name"
                        class="input input-bordered join-item w-full md:w-72 rounded-l-full"
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary join-item rounded-r-full">"🔍"</button>
                </form>
            </div>

            <Transition fallback=move || view! { <SkeletonGrid/> }>
                {move || {
                    reviews.get().map(|result| match result {
                        Err(err) => view! {
                            <div class="alert alert-error">
                                <span>"Failed to load reviews. Please try again later."</span>
                                <span class="text-xs">{err.to_string()}</span>
                            </div>
                        }
                        .into_view(),
                        Ok(list) if list.is_empty() => view! {
                            <p class="text-sm text-gray-500">"No reviews found matching your search."</p>
                        }
                        .into_view(),
                        Ok(list) => {
                            let term = search_text.get_untracked();
                            view! {
                                <p class="text-xs text-gray-500 mb-3">
                                    {results_summary(list.len())}
                                    {(!term.is_empty()).then(|| view! {
                                        " for " <span class="font-semibold">"\"" {term.clone()} "\""</span>
                                    })}
                                </p>
                                <ReviewsList
                                    reviews=list
                                    favorites=saved
                                    on_favorite=Some(on_favorite)
                                    busy=Some(add_favorite.pending().into())
                                />
                            }
                            .into_view()
                        }
                    })
                }}
            </Transition>
        </section>
    }
}
