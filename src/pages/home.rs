use leptos::*;
use leptos_router::A;

use crate::api::ApiClient;
use crate::components::loading_spinner::SkeletonGrid;
use crate::components::reviews_list::ReviewsList;
use crate::models::{Favorite, Review};
use crate::query::{use_query, QueryKey};

const FEATURED_COUNT: usize = 6;

struct Mood {
    label: &'static str,
    title: &'static str,
    desc: &'static str,
    tag: &'static str,
}

const MOODS: [Mood; 4] = [
    Mood {
        label: "Quick Bite",
        title: "Street-side snacks",
        desc: "Fuchka, chotpoti, roll: perfect for a fast treat on busy days.",
        tag: "Under 15 minutes",
    },
    Mood {
        label: "Friends Hangout",
        title: "Cafe & coffee vibes",
        desc: "Cozy cafes with great coffee and long-conversation ambience.",
        tag: "Chill & chat",
    },
    Mood {
        label: "Family Dinner",
        title: "Shared platters & biriyani",
        desc: "Family-friendly places with big portions and comfortable seating.",
        tag: "Family approved",
    },
    Mood {
        label: "Date Night",
        title: "Mood lighting & desserts",
        desc: "Romantic settings with beautiful plating and sweet endings.",
        tag: "Special occasion",
    },
];

const REASONS: [(&str, &str); 3] = [
    (
        "Local-first discovery",
        "Find hidden gems, street food and small family restaurants that don't always show up on big apps.",
    ),
    (
        "Honest, photo-based reviews",
        "See real photos, real ratings and detailed experiences from other food lovers near you.",
    ),
    (
        "Built around community",
        "Save favorites, share your stories and help the next foodie decide what to eat tonight.",
    ),
];

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="mb-10 mt-6">
            <div
                class="hero min-h-[420px] rounded-3xl overflow-hidden"
                style="background-image: url('https://images.pexels.com/photos/70497/pexels-photo-70497.jpeg?auto=compress&cs=tinysrgb&w=1200');"
            >
                <div class="hero-overlay bg-black/50"></div>
                <div class="hero-content text-center text-white">
                    <div class="max-w-xl">
                        <h1 class="mb-4 text-4xl md:text-5xl font-extrabold">
                            "Discover Local " <span class="text-primary">"Flavors"</span>
                        </h1>
                        <p class="mb-6 text-sm md:text-base">
                            "Join the Local Food Lovers Network to explore honest reviews, hidden gems, and must-try dishes around you."
                        </p>
                        <div class="flex gap-3 justify-center">
                            <A href="/all-reviews" class="btn btn-primary rounded-full px-6">"Explore Reviews"</A>
                            <A href="/add-review" class="btn btn-outline rounded-full px-6 text-white">"Share Your Review"</A>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedReviews() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let top = use_query(
        || Some(QueryKey::TopReviews),
        move |_| {
            let api = api.clone();
            async move { api.top_reviews().await }
        },
    );
    let no_favorites = Signal::derive(Vec::<Favorite>::new);

    view! {
        <section class="mt-10">
            <div class="flex items-center justify-between mb-5">
                <h2 class="text-2xl md:text-3xl font-bold">"Top Rated This Week"</h2>
                <A href="/all-reviews" class="btn btn-sm btn-outline rounded-full">"Show All"</A>
            </div>
            <Transition fallback=move || view! { <SkeletonGrid/> }>
                {move || {
                    top.get()
                        .map(|result| match result {
                            Ok(reviews) if reviews.is_empty() => {
                                view! { <p class="text-gray-500 text-sm">"No reviews yet. Be the first to share one!"</p> }
                                    .into_view()
                            }
                            Ok(reviews) => {
                                let reviews: Vec<Review> = reviews.into_iter().take(FEATURED_COUNT).collect();
                                view! { <ReviewsList reviews=reviews favorites=no_favorites/> }.into_view()
                            }
                            Err(err) => {
                                leptos::logging::error!("[HOME] top reviews: {}", err);
                                view! { <p class="text-error text-sm">"Failed to load top reviews."</p> }.into_view()
                            }
                        })
                }}
            </Transition>
        </section>
    }
}

#[component]
fn ExploreByMood() -> impl IntoView {
    view! {
        <section class="mt-10 md:mt-14">
            <p class="text-xs uppercase tracking-[0.25em] text-primary mb-1">"Explore by mood"</p>
            <h2 class="text-xl md:text-2xl font-extrabold mb-5">
                "What are you " <span class="text-primary">"craving"</span> " today?"
            </h2>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {MOODS
                    .iter()
                    .map(|mood| {
                        view! {
                            <div class="rounded-2xl border border-base-200 bg-gradient-to-br from-base-100 to-base-200/60 p-4 md:p-5 flex flex-col justify-between h-full">
                                <div>
                                    <p class="text-[0.65rem] uppercase tracking-[0.25em] text-primary mb-1">{mood.label}</p>
                                    <h3 class="text-sm md:text-base font-semibold mb-1">{mood.title}</h3>
                                    <p class="text-xs md:text-sm text-gray-600">{mood.desc}</p>
                                </div>
                                <span class="mt-4 self-start px-3 py-1 rounded-full bg-white shadow-sm text-xs text-gray-600">
                                    {mood.tag}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WhyFoodieCircle() -> impl IntoView {
    view! {
        <section class="mt-12 md:mt-16 mb-10 grid gap-8 lg:grid-cols-[1.4fr_1fr]">
            <div class="space-y-4">
                <p class="text-xs uppercase tracking-[0.25em] text-primary">"Why FoodieCircle"</p>
                <h2 class="text-2xl md:text-3xl font-extrabold">
                    "Not just ratings. " <span class="text-primary">"Real food stories."</span>
                </h2>
                <p class="text-sm md:text-base text-gray-600 max-w-xl">
                    "FoodieCircle is made for people who care about taste, texture and the full experience, not just stars."
                </p>
                <div class="grid gap-4 sm:grid-cols-3">
                    {REASONS
                        .iter()
                        .map(|(title, desc)| {
                            view! {
                                <div class="rounded-2xl bg-base-200/60 p-4">
                                    <h3 class="text-sm font-semibold">{*title}</h3>
                                    <p class="text-xs text-gray-600">{*desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="rounded-3xl bg-gradient-to-br from-primary to-orange-500 text-white p-6 flex flex-col gap-3">
                <p class="text-xs uppercase tracking-[0.25em] text-white/70">"Join the circle"</p>
                <h3 class="text-xl font-bold">"Start sharing your food journey today."</h3>
                <p class="text-xs text-white/80">
                    "Add your first review in less than a minute and help someone discover their next favorite meal."
                </p>
                <div class="flex gap-2 mt-auto">
                    <A href="/add-review" class="btn btn-sm bg-white text-primary border-0 rounded-full">"Add a review"</A>
                    <A href="/all-reviews" class="btn btn-sm btn-outline text-white rounded-full">"Browse all reviews"</A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <FeaturedReviews/>
        <ExploreByMood/>
        <WhyFoodieCircle/>
    }
}
