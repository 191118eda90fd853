use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, A};

use crate::auth::use_auth;
use crate::components::fields::{PasswordField, TextField};
use crate::error::AppError;
use crate::forms::{check_new_password, fields, FormState};
use crate::pages::login::AuthCard;
use crate::toast::use_toasts;

const NAME: &str = "name";
const EMAIL: &str = "email";
const PHOTO_URL: &str = "photoURL";
const PASSWORD: &str = "password";
const CONFIRM_PASSWORD: &str = "confirmPassword";

#[derive(Clone)]
struct Registration {
    name: String,
    email: String,
    photo_url: String,
    password: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let form = FormState::new(vec![
        (NAME, fields::NAME),
        (EMAIL, fields::EMAIL),
        (PHOTO_URL, fields::PHOTO_URL),
        (PASSWORD, fields::PASSWORD),
        (CONFIRM_PASSWORD, fields::CONFIRM_PASSWORD),
    ]);

    let register = create_action(move |registration: &Registration| {
        let auth = auth.clone();
        let navigate = navigate.clone();
        let registration = registration.clone();
        async move {
            let result: Result<(), AppError> = async {
                auth.create_user(registration.email, registration.password).await?;
                auth.update_user_profile(registration.name, registration.photo_url).await
            }
            .await;
            match result {
                Ok(()) => {
                    form.reset(&[]);
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => toasts.error(err.user_message("Registration failed.")),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.validate_all() {
            return;
        }
        let password = form.value_untracked(PASSWORD);
        if let Err(message) = check_new_password(&password, &form.value_untracked(CONFIRM_PASSWORD)) {
            toasts.error(message);
            return;
        }
        register.dispatch(Registration {
            name: form.value_untracked(NAME).trim().to_string(),
            email: form.value_untracked(EMAIL).trim().to_string(),
            photo_url: form.value_untracked(PHOTO_URL).trim().to_string(),
            password,
        });
    };

    view! {
        <AuthCard title="Register" tagline="Create an account to join">
            <form on:submit=handle_submit class="space-y-5" novalidate=true>
                <TextField form=form name=NAME label="Full Name"/>
                <TextField form=form name=EMAIL label="Email" input_type="email"/>
                <TextField form=form name=PHOTO_URL label="Photo URL"/>
                <PasswordField
                    form=form
                    name=PASSWORD
                    label="Password"
                    hint="Must include uppercase, lowercase & be at least 6 characters."
                />
                <PasswordField form=form name=CONFIRM_PASSWORD label="Confirm Password"/>
                <button type="submit" class="btn btn-primary w-full rounded-xl text-base" disabled=move || register.pending().get()>
                    "Register"
                </button>
            </form>
            <p class="text-center text-sm mt-5">
                "Already have an account? "
                <A href="/login" class="text-primary font-semibold">"Login"</A>
            </p>
        </AuthCard>
    }
}
