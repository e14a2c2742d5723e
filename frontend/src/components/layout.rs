use crate::api::UserResponse;
use leptos::*;

pub const APP_TITLE: &str = "FaceTrack";

fn display_name(user: &UserResponse) -> String {
    if user.full_name.trim().is_empty() {
        user.username.clone()
    } else {
        user.full_name.clone()
    }
}

#[component]
pub fn Header(#[prop(into)] user: Signal<Option<UserResponse>>) -> impl IntoView {
    let signed_in = move || {
        user.with(|user| {
            user.as_ref()
                .map(|user| (display_name(user), user.role.clone()))
        })
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-fg">{APP_TITLE}</a>
                    {move || signed_in().map(|(name, role)| view! {
                        <div class="flex items-center gap-2 text-sm">
                            <span class="font-medium text-fg">{name}</span>
                            <span class="px-2 py-0.5 rounded-full bg-surface-muted text-fg-muted text-xs uppercase">{role}</span>
                        </div>
                    })}
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    #[prop(into)] user: Signal<Option<UserResponse>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header user=user/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status" aria-label="Loading">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
