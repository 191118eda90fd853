use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center text-center gap-4">
            <p class="text-7xl font-extrabold text-primary">"404"</p>
            <h1 class="text-2xl font-bold">"This plate is empty"</h1>
            <p class="text-sm text-gray-500 max-w-md">
                "The page you are looking for does not exist or has been moved."
            </p>
            <A href="/" class="btn btn-primary rounded-full px-6">"Back to Home"</A>
        </section>
    }
}
