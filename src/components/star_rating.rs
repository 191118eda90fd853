use leptos::*;

use crate::utils::format::{filled_stars, format_rating};

/// Read-only five star strip with the numeric rating in front.
#[component]
pub fn Stars(rating: f64) -> impl IntoView {
    let filled = filled_stars(rating);
    view! {
        <div class="flex items-center gap-1">
            <span class="text-sm font-semibold">{format_rating(rating)}</span>
            {(0..5)
                .map(|idx| {
                    let class = if idx < filled { "text-yellow-400 text-xs" } else { "text-base-300 text-xs" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </div>
    }
}

/// Clickable stars; `on_pick` receives 1..=5.
#[component]
pub fn StarRatingInput(
    #[prop(into)] value: Signal<u8>,
    #[prop(into)] on_pick: Callback<u8>,
    #[prop(default = "You selected:")] caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <p class="text-sm font-medium">"Star Rating"</p>
                <p class="text-xs text-gray-500">
                    {caption} " " <span class="font-semibold">{move || value.get()}</span> " / 5"
                </p>
            </div>
            <div class="flex gap-1">
                {(1..=5u8)
                    .map(|star| {
                        view! {
                            <button
                                type="button"
                                data-star=star
                                class=move || {
                                    if star <= value.get() {
                                        "text-2xl md:text-3xl text-yellow-400 hover:scale-110 transition-transform"
                                    } else {
                                        "text-2xl md:text-3xl text-base-300 hover:scale-110 transition-transform"
                                    }
                                }
                                on:click=move |_| on_pick.call(star)
                            >
                                "★"
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
