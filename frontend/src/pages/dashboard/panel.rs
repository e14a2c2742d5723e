use crate::{
    api::UserResponse,
    components::layout::LoadingSpinner,
    pages::dashboard::{
        components::{QuickActions, SummarySection, TodayAttendanceTable, TopPerformersSection},
        layout::{DashboardFrame, DashboardHeader},
        view_model::{use_dashboard_view_model, DashboardViewModel},
    },
    state::toast::Notifier,
};
use leptos::*;

/// Dashboard route. The signed-in user and the notifier are handed in by the
/// caller rather than looked up here.
#[component]
pub fn DashboardPage(
    #[prop(into)] user: Signal<Option<UserResponse>>,
    notifier: Notifier,
) -> impl IntoView {
    let vm = use_dashboard_view_model(notifier);
    view! {
        <DashboardFrame user=user>
            <DashboardContent vm=vm user=user />
        </DashboardFrame>
    }
}

#[component]
pub fn DashboardContent(
    vm: DashboardViewModel,
    #[prop(into)] user: Signal<Option<UserResponse>>,
) -> impl IntoView {
    let loading = vm.loading;
    let summary = vm.summary();
    let performers = vm.top_performers();
    let records: Signal<Vec<_>> = vm.records.into();

    view! {
        <div class="space-y-6">
            <DashboardHeader
                filter=vm.filter
                slot_options=vm.slot_options
                last_updated=vm.last_updated
                loading=loading
                polling_every=vm.polling_every
                on_filter_change=Callback::new(vm.on_filter_change())
                on_refresh=Callback::new(vm.on_refresh())
            />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <SummarySection summary=summary />
                <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                    <div class="lg:col-span-2">
                        <TodayAttendanceTable records=records />
                    </div>
                    <div class="space-y-6">
                        <QuickActions user=user />
                        <TopPerformersSection performers=performers />
                    </div>
                </div>
            </Show>
        </div>
    }
}
