use leptos::*;
use leptos::ev::SubmitEvent;

use crate::components::fields::{TextAreaField, TextField};
use crate::components::star_rating::StarRatingInput;
use crate::forms::{fields, FormState};
use crate::models::ReviewUpdate;

pub const FOOD_NAME: &str = "foodName";
pub const FOOD_IMAGE: &str = "foodImage";
pub const RESTAURANT_NAME: &str = "restaurantName";
pub const LOCATION: &str = "location";
pub const RATING: &str = "rating";
pub const REVIEW_TEXT: &str = "reviewText";

pub fn review_form_state() -> FormState {
    FormState::new(vec![
        (FOOD_NAME, fields::FOOD_NAME),
        (FOOD_IMAGE, fields::FOOD_IMAGE),
        (RESTAURANT_NAME, fields::RESTAURANT_NAME),
        (LOCATION, fields::LOCATION),
        (RATING, fields::RATING),
        (REVIEW_TEXT, fields::REVIEW_TEXT),
    ])
}

pub fn review_form_values(update: &ReviewUpdate) -> Vec<(&'static str, String)> {
    vec![
        (FOOD_NAME, update.food_name.clone()),
        (FOOD_IMAGE, update.food_image.clone()),
        (RESTAURANT_NAME, update.restaurant_name.clone()),
        (LOCATION, update.location.clone()),
        (RATING, update.rating.to_string()),
        (REVIEW_TEXT, update.review_text.clone()),
    ]
}

/// Reads the validated form back into a request body.
pub fn read_review_form(form: &FormState) -> ReviewUpdate {
    ReviewUpdate {
        food_name: form.value_untracked(FOOD_NAME).trim().to_string(),
        food_image: form.value_untracked(FOOD_IMAGE).trim().to_string(),
        restaurant_name: form.value_untracked(RESTAURANT_NAME).trim().to_string(),
        location: form.value_untracked(LOCATION).trim().to_string(),
        rating: form.value_untracked(RATING).trim().parse().unwrap_or(0),
        review_text: form.value_untracked(REVIEW_TEXT).trim().to_string(),
    }
}

/// Fields shared by the add and edit pages. `on_submit` only fires once every
/// rule passes.
#[component]
pub fn ReviewForm(
    form: FormState,
    #[prop(into)] on_submit: Callback<ReviewUpdate>,
    #[prop(into)] pending: Signal<bool>,
    submit_label: &'static str,
    pending_label: &'static str,
    #[prop(default = "Write your review")] text_label: &'static str,
    #[prop(default = "You selected:")] rating_caption: &'static str,
) -> impl IntoView {
    let rating = Signal::derive(move || form.value(RATING).parse::<u8>().unwrap_or(0));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.validate_all() {
            on_submit.call(read_review_form(&form));
        }
    };

    view! {
        <form on:submit=handle_submit class="space-y-5" novalidate=true>
            <TextField form=form name=FOOD_NAME label="Food Name"/>
            <TextField form=form name=FOOD_IMAGE label="Food Image URL"/>
            <div class="grid gap-4 md:grid-cols-2">
                <TextField form=form name=RESTAURANT_NAME label="Restaurant Name"/>
                <TextField form=form name=LOCATION label="Location (Area / City)"/>
            </div>
            <div>
                <StarRatingInput
                    value=rating
                    on_pick=move |star: u8| form.set_validated(RATING, star.to_string())
                    caption=rating_caption
                />
                {move || {
                    form.error(RATING)
                        .map(|message| view! { <p class="text-error text-xs mt-1">{message}</p> })
                }}
            </div>
            <TextAreaField form=form name=REVIEW_TEXT label=text_label/>
            <button
                type="submit"
                class="btn w-full rounded-full normal-case mt-2 bg-gradient-to-r from-primary to-orange-500 text-white border-0"
                disabled=move || pending.get()
            >
                {move || if pending.get() { pending_label } else { submit_label }}
            </button>
        </form>
    }
}
