use leptos::*;
use leptos_router::A;

use crate::auth::use_auth;
use crate::models::SessionUser;
use crate::toast::use_toasts;
use crate::utils::format::truncate_email;

#[component]
fn NavLinks() -> impl IntoView {
    view! {
        <li><A href="/" exact=true active_class="text-primary font-semibold">"Home"</A></li>
        <li><A href="/all-reviews" active_class="text-primary font-semibold">"All Reviews"</A></li>
    }
}

#[component]
fn UserMenu(user: SessionUser) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let handle_logout = move |_| {
        let auth = auth.clone();
        spawn_local(async move {
            match auth.log_out().await {
                Ok(()) => toasts.success("Logged out successfully."),
                Err(_) => toasts.error("Failed to logout. Please try again."),
            }
        });
    };

    let avatar = match user.photo_url.clone() {
        Some(src) => view! { <img src=src alt="User avatar" class="w-10 h-10 rounded-full object-cover"/> }.into_view(),
        None => view! {
            <span class="w-10 h-10 rounded-full bg-primary text-white flex items-center justify-center font-bold">
                {user.initial()}
            </span>
        }
        .into_view(),
    };
    let email = user.email.clone();

    view! {
        <div class="flex items-center gap-3">
            <div class="hidden md:block text-right">
                <p class="text-sm font-semibold leading-tight">{user.name_or("Foodie")}</p>
                <p class="text-xs text-gray-500">{truncate_email(&email)}</p>
            </div>
            <div class="dropdown dropdown-end">
                <label tabindex="0" class="btn btn-ghost btn-circle avatar">{avatar}</label>
                <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[60] p-0 shadow-lg bg-base-100 rounded-2xl w-60">
                    <li class="px-4 py-3 border-b border-base-200">
                        <p class="text-sm font-semibold">{user.name_or("Foodie User")}</p>
                        <p class="text-xs text-gray-500">{email}</p>
                    </li>
                    <li><A href="/add-review">"Add Review"</A></li>
                    <li><A href="/my-reviews">"My Reviews"</A></li>
                    <li><A href="/my-favorites">"My Favorites"</A></li>
                    <li>
                        <button class="text-red-500" on:click=handle_logout>"Logout"</button>
                    </li>
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    view! {
        <nav class="navbar bg-base-100/90 backdrop-blur shadow-sm sticky top-0 z-40 px-4 md:px-8">
            <div class="navbar-start">
                <div class="dropdown">
                    <div tabindex="0" role="button" class="btn btn-ghost lg:hidden">"☰"</div>
                    <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[60] p-2 shadow bg-base-100 rounded-box w-52">
                        <NavLinks/>
                    </ul>
                </div>
                <A href="/" class="flex items-center gap-2">
                    <span class="text-2xl font-extrabold tracking-tight">
                        <span class="text-primary">"Foodie"</span>
                        <span class="text-neutral">"Circle"</span>
                    </span>
                </A>
            </div>
            <div class="navbar-center hidden lg:flex">
                <ul class="menu menu-horizontal px-1 gap-2">
                    <NavLinks/>
                </ul>
            </div>
            <div class="navbar-end gap-2">
                {move || match user.get() {
                    Some(user) => view! { <UserMenu user=user/> }.into_view(),
                    None => view! {
                        <A href="/login" class="btn btn-sm btn-ghost rounded-full">"Login"</A>
                        <A href="/register" class="btn btn-sm rounded-full normal-case border-0 bg-gradient-to-r from-primary to-orange-500 text-white">
                            "Register"
                        </A>
                    }
                    .into_view(),
                }}
            </div>
        </nav>
    }
}
