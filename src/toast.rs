use gloo_timers::callback::Timeout;
use leptos::*;
use uuid::Uuid;

const TOAST_MILLIS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications shown at the top of the page.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { items: create_rw_signal(Vec::new()) }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Toast { id, kind, message }));
        id
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let id = self.push(kind, message);
        let toasts = *self;
        Timeout::new(TOAST_MILLIS, move || toasts.dismiss(id)).forget();
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast toast-top toast-center z-50">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success",
                        ToastKind::Error => "alert alert-error",
                        ToastKind::Info => "alert alert-info",
                    };
                    let icon = match toast.kind {
                        ToastKind::Success => "✔",
                        ToastKind::Error => "✖",
                        ToastKind::Info => "❤️",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            <span>{icon}</span>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
