use crate::state::toast::{Notifier, Toast, ToastKind};
use leptos::*;
use uuid::Uuid;

const TOAST_TTL_MS: u32 = 4000;

#[component]
pub fn ToastHost(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite" aria-atomic="true">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast notifier=notifier /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, notifier: Notifier) -> impl IntoView {
    let id = toast.id;
    schedule_dismiss(notifier, id);
    let class = match toast.kind {
        ToastKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    };

    view! {
        <div
            class=format!("flex items-start justify-between gap-3 border rounded-lg shadow px-4 py-3 text-sm {}", class)
            role="status"
        >
            <span>{toast.message}</span>
            <button
                class="opacity-70 hover:opacity-100"
                aria-label="Dismiss notification"
                on:click=move |_| notifier.dismiss(id)
            >
                "✕"
            </button>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(notifier: Notifier, id: Uuid) {
    let handle = gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || notifier.dismiss(id));
    on_cleanup(move || drop(handle));
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_notifier: Notifier, _id: Uuid) {
    log::trace!("toast auto-dismiss after {} ms is browser-only", TOAST_TTL_MS);
}
