use crate::{api::UserResponse, state::auth::is_admin_user};
use leptos::*;

pub const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("/students", "View Students"),
    ("/students/register", "Register Student"),
    ("/attendance/capture", "Capture Attendance"),
    ("/attendance/reports", "Attendance Reports"),
];

#[component]
pub fn QuickActions(#[prop(into)] user: Signal<Option<UserResponse>>) -> impl IntoView {
    let is_admin = move || user.with(|user| is_admin_user(user.as_ref()));

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Quick Actions"</h3>
            <nav class="grid grid-cols-1 gap-2 sm:grid-cols-2">
                {QUICK_ACTIONS
                    .iter()
                    .map(|(href, label)| view! { <ActionLink href=*href label=*label /> })
                    .collect_view()}
                <Show when=is_admin>
                    <ActionLink href="/admin" label="Admin Panel" />
                </Show>
            </nav>
        </div>
    }
}

#[component]
fn ActionLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="block rounded-md border border-border px-4 py-2 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover"
        >
            {label}
        </a>
    }
}
