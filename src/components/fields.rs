//! Floating-label inputs bound to a [`FormState`] field.

use leptos::*;

use crate::forms::FormState;

const INPUT_CLASS: &str = "peer w-full border border-gray-300 rounded-xl px-3 pt-5 pb-2 text-sm bg-base-100 outline-none focus:border-primary transition";
const LABEL_CLASS: &str = "absolute left-3 top-1.5 text-gray-400 text-xs pointer-events-none transition-all peer-focus:text-primary";

#[component]
fn FieldError(form: FormState, name: &'static str) -> impl IntoView {
    move || {
        form.error(name)
            .map(|message| view! { <p class="text-error text-xs mt-1">{message}</p> })
    }
}

#[component]
pub fn TextField(
    form: FormState,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block relative w-full">
                <input
                    type=input_type
                    name=name
                    placeholder=" "
                    class=INPUT_CLASS
                    prop:value=move || form.value(name)
                    on:input=move |ev| form.set_validated(name, event_target_value(&ev))
                />
                <span class=LABEL_CLASS>{label}</span>
            </label>
            <FieldError form=form name=name/>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    form: FormState,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div>
            <label class="block relative w-full">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    name=name
                    placeholder=" "
                    class=format!("{INPUT_CLASS} pr-10")
                    prop:value=move || form.value(name)
                    on:input=move |ev| form.set_validated(name, event_target_value(&ev))
                />
                <span class=LABEL_CLASS>{label}</span>
                <button
                    type="button"
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 hover:text-primary transition text-xs"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </label>
            <FieldError form=form name=name/>
            {hint.map(|hint| view! { <p class="text-xs text-gray-500 mt-1">{hint}</p> })}
        </div>
    }
}

#[component]
pub fn TextAreaField(form: FormState, name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <label class="block relative w-full">
                <textarea
                    rows=4
                    name=name
                    placeholder=" "
                    class=format!("{INPUT_CLASS} resize-none")
                    prop:value=move || form.value(name)
                    on:input=move |ev| form.set_validated(name, event_target_value(&ev))
                ></textarea>
                <span class=LABEL_CLASS>{label}</span>
            </label>
            <FieldError form=form name=name/>
        </div>
    }
}
