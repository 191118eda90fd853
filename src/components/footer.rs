use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer footer-center p-8 bg-base-200 text-base-content mt-12">
            <aside>
                <p class="text-xl font-extrabold">
                    <span class="text-primary">"Foodie"</span>"Circle"
                </p>
                <p class="text-sm text-gray-500">"Honest local food reviews from people who love to eat."</p>
            </aside>
            <nav class="flex gap-4 text-sm">
                <A href="/all-reviews">"All Reviews"</A>
                <A href="/add-review">"Share a Review"</A>
                <A href="/my-favorites">"Favorites"</A>
            </nav>
            <p class="text-xs text-gray-400">"© " {year} " FoodieCircle. All rights reserved."</p>
        </footer>
    }
}
