use leptos::*;
use leptos_router::A;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::loading_spinner::SkeletonGrid;
use crate::components::star_rating::Stars;
use crate::models::Favorite;
use crate::query::{invalidates, use_query, QueryClient, QueryKey};
use crate::toast::use_toasts;

#[component]
fn FavoriteCard(
    favorite: Favorite,
    #[prop(into)] on_remove: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let details = format!("/review/{}", favorite.review_id);
    let id = favorite.id.clone();

    view! {
        <div class="rounded-2xl border border-base-200 bg-base-100 overflow-hidden shadow-sm hover:shadow-md transition">
            <div class="relative h-44 overflow-hidden">
                <img
                    src=favorite.food_image.clone()
                    alt=favorite.food_name.clone()
                    class="w-full h-full object-cover hover:scale-105 duration-300"
                />
                <button
                    class="absolute top-3 right-3 bg-white/90 hover:bg-red-500 hover:text-white btn btn-xs btn-circle shadow transition-all"
                    title="Remove from favorites"
                    disabled=move || busy.get()
                    on:click=move |_| on_remove.call(id.clone())
                >
                    "🗑"
                </button>
            </div>
            <div class="p-4 flex flex-col gap-2">
                <p class="text-xs uppercase tracking-[0.2em] text-primary">{favorite.restaurant_name.clone()}</p>
                <h3 class="text-lg font-semibold">{favorite.food_name.clone()}</h3>
                <p class="text-xs text-gray-500">"📍 " {favorite.location.clone()}</p>
                <div class="mt-2">
                    <Stars rating=favorite.rating/>
                </div>
                <A href=details class="btn btn-sm w-full rounded-full normal-case mt-3 bg-base-200 hover:bg-primary hover:text-white border border-base-200 hover:border-primary">
                    "View Details"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn MyFavoritesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let queries = expect_context::<QueryClient>();
    let auth = use_auth();
    let toasts = use_toasts();

    let favorites = {
        let api = api.clone();
        use_query(
            move || auth.email().map(QueryKey::Favorites),
            move |key| {
                let api = api.clone();
                async move { api.favorites(key.arg()).await }
            },
        )
    };

    let remove = create_action(move |id: &String| {
        let api = api.clone();
        let queries = queries.clone();
        let id = id.clone();
        async move {
            match api.delete_favorite(&id).await {
                Ok(_) => {
                    toasts.success("Removed from favorites");
                    queries.invalidate(invalidates::FAVORITES);
                }
                Err(_) => toasts.error("Failed to remove favorite"),
            }
        }
    });
    let on_remove = Callback::new(move |id: String| remove.dispatch(id));

    view! {
        <section class="mt-4 md:mt-6 mb-10">
            <div class="mb-6">
                <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"Saved Items"</p>
                <h1 class="text-2xl md:text-3xl font-extrabold">
                    "My " <span class="text-primary">"Favorites"</span>
                </h1>
                <p class="text-sm text-gray-500 max-w-md mt-1">
                    "All your saved reviews appear here. Explore or remove them anytime."
                </p>
            </div>

            <Transition fallback=move || view! { <SkeletonGrid/> }>
                {move || {
                    favorites.get().map(|result| match result {
                        Err(err) => view! {
                            <div class="p-6 bg-red-50 border border-red-200 rounded-xl text-red-600 text-sm">
                                {err.user_message("Failed to fetch favorites")}
                            </div>
                        }
                        .into_view(),
                        Ok(list) if list.is_empty() => view! {
                            <div class="flex flex-col items-center justify-center py-20">
                                <span class="text-5xl text-gray-400 mb-3">"💔"</span>
                                <p class="text-gray-600 font-medium">"You haven't added any favorites yet."</p>
                                <A href="/all-reviews" class="btn btn-primary rounded-full mt-4 normal-case">
                                    "Explore Reviews"
                                </A>
                            </div>
                        }
                        .into_view(),
                        Ok(list) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5">
                                {list
                                    .into_iter()
                                    .map(|favorite| view! {
                                        <FavoriteCard favorite=favorite on_remove=on_remove busy=remove.pending()/>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_view(),
                    })
                }}
            </Transition>
        </section>
    }
}
