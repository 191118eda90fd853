use leptos::*;
use leptos_router::Outlet;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Navbar/>
            <main class="flex-1 w-11/12 max-w-6xl mx-auto">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}
