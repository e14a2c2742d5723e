use crate::{
    api::{TimeSlot, UserResponse},
    components::layout::Layout,
    pages::dashboard::{components::TimeSlotSelect, utils::TimeSlotFilter},
    utils::time::{format_app_clock_time, today_in_app_tz},
};
use chrono::{DateTime, Utc};
use std::time::Duration;
use leptos::{ev::MouseEvent, *};

#[component]
pub fn DashboardFrame(
    #[prop(into)] user: Signal<Option<UserResponse>>,
    children: Children,
) -> impl IntoView {
    view! { <Layout user=user>{children()}</Layout> }
}

#[component]
pub fn DashboardHeader(
    filter: RwSignal<TimeSlotFilter>,
    #[prop(into)] slot_options: Signal<Vec<TimeSlot>>,
    #[prop(into)] last_updated: Signal<Option<DateTime<Utc>>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] polling_every: Signal<Option<Duration>>,
    on_filter_change: Callback<String>,
    on_refresh: Callback<MouseEvent>,
) -> impl IntoView {
    let today = today_in_app_tz().format("%A, %d %B %Y").to_string();
    let updated = move || {
        last_updated
            .get()
            .map(|at| format!("Last updated {}", format_app_clock_time(at)))
            .unwrap_or_else(|| "Not loaded yet".into())
    };

    view! {
        <div class="flex flex-col gap-4 lg:flex-row lg:items-end lg:justify-between">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Attendance Dashboard"</h1>
                <p class="mt-1 text-sm text-fg-muted">{today}</p>
            </div>
            <div class="flex flex-wrap items-center gap-3">
                <TimeSlotSelect filter=filter options=slot_options on_change=on_filter_change />
                <button
                    class="inline-flex items-center px-4 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    on:click=move |ev| on_refresh.call(ev)
                    disabled=move || loading.get()
                >
                    "Refresh"
                </button>
                <span class="text-xs text-fg-muted">{updated}</span>
                {move || polling_every.get().map(|period| view! {
                    <span class="text-xs text-fg-muted">{format!("Auto-refresh every {}s", period.as_secs())}</span>
                })}
            </div>
        </div>
    }
}
