use leptos::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-[40vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// Placeholder cards shown while a grid of reviews loads.
#[component]
pub fn SkeletonGrid(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-3">
            {(0..count)
                .map(|_| view! { <div class="skeleton h-72 w-full rounded-2xl"></div> })
                .collect_view()}
        </div>
    }
}
