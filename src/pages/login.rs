use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions, A};

use crate::auth::use_auth;
use crate::components::fields::{PasswordField, TextField};
use crate::forms::{fields, FormState};
use crate::guard::post_login_target;
use crate::toast::use_toasts;

const EMAIL: &str = "email";
const PASSWORD: &str = "password";

/// Card shell shared by the login and register pages.
#[component]
pub fn AuthCard(title: &'static str, tagline: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-80px)] flex items-center justify-center px-4 py-10">
            <div class="w-full max-w-md">
                <div class="bg-base-100 shadow-xl rounded-3xl p-8 border border-orange-200">
                    <div class="mb-4">
                        <h2 class="relative text-3xl font-bold tracking-tight pl-10">
                            <span class="absolute left-0 top-2 w-4 h-4 rounded-full bg-primary"></span>
                            <span class="absolute left-0 top-2 w-4 h-4 rounded-full bg-primary/60 animate-ping"></span>
                            {title}
                        </h2>
                        <p class="text-sm text-gray-500 mt-1">
                            {tagline} " " <span class="font-semibold text-primary">"FoodieCircle"</span> "."
                        </p>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();

    let form = FormState::new(vec![(EMAIL, fields::EMAIL), (PASSWORD, fields::PASSWORD)]);

    let sign_in = create_action(move |(email, password): &(String, String)| {
        let auth = auth.clone();
        let navigate = navigate.clone();
        let (email, password) = (email.clone(), password.clone());
        let target = query.with_untracked(|q| post_login_target(q.get("from").map(String::as_str)));
        async move {
            match auth.sign_in(email, password).await {
                Ok(_) => navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                ),
                Err(err) => toasts.error(err.user_message("Login failed. Please check your details.")),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.validate_all() {
            sign_in.dispatch((
                form.value_untracked(EMAIL).trim().to_string(),
                form.value_untracked(PASSWORD),
            ));
        }
    };

    view! {
        <AuthCard title="Login" tagline="Welcome back to">
            <form on:submit=handle_submit class="space-y-5" novalidate=true>
                <TextField form=form name=EMAIL label="Email" input_type="email"/>
                <PasswordField form=form name=PASSWORD label="Password"/>
                <button type="submit" class="btn btn-primary w-full rounded-xl text-base" disabled=move || sign_in.pending().get()>
                    "Login"
                </button>
            </form>
            <p class="text-center text-sm mt-5">
                "New to FoodieCircle? "
                <A href="/register" class="text-primary font-semibold">"Create an account"</A>
            </p>
        </AuthCard>
    }
}
