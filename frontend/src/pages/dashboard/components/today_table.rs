use crate::{
    api::{AttendanceRecord, AttendanceStatus, VerificationMethod},
    components::empty_state::EmptyState,
    pages::dashboard::utils::format_slot,
    utils::time::format_app_clock_time,
};
use leptos::*;

#[component]
pub fn TodayAttendanceTable(records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Today's Attendance"</h3>
            <Show
                when=move || records.with(|list| !list.is_empty())
                fallback=|| view! {
                    <EmptyState
                        title="No attendance recorded today"
                        description="Records appear here as students are marked present."
                    />
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Student"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Registration No."</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Time"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Time Slot"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Method"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || records.get()
                                key=|record| record.id.clone()
                                children=move |record: AttendanceRecord| view! { <RecordRow record=record /> }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RecordRow(record: AttendanceRecord) -> impl IntoView {
    let slot = format_slot(record.start_time.as_deref(), record.end_time.as_deref());
    view! {
        <tr>
            <td class="px-4 py-2 text-fg">{record.student.name}</td>
            <td class="px-4 py-2 text-fg-muted">{record.student.registration_number}</td>
            <td class="px-4 py-2 text-fg-muted">{format_app_clock_time(record.created_at)}</td>
            <td class="px-4 py-2 text-fg-muted">{slot}</td>
            <td class="px-4 py-2">{method_badge(&record.verification_method)}</td>
            <td class="px-4 py-2">{status_badge(&record.status)}</td>
        </tr>
    }
}

fn method_badge(method: &VerificationMethod) -> View {
    let color = match method {
        VerificationMethod::Face => "bg-blue-100 text-blue-800",
        VerificationMethod::Manual => "bg-amber-100 text-amber-800",
        VerificationMethod::Other => "bg-gray-100 text-gray-800",
    };
    badge(color, method.label())
}

fn status_badge(status: &AttendanceStatus) -> View {
    let color = match status {
        AttendanceStatus::Present => "bg-emerald-100 text-emerald-800",
        AttendanceStatus::Absent => "bg-red-100 text-red-800",
        AttendanceStatus::Other => "bg-gray-100 text-gray-800",
    };
    badge(color, status.label())
}

fn badge(color: &'static str, text: &'static str) -> View {
    view! {
        <span class=format!("px-2 py-0.5 rounded-full text-xs font-semibold {}", color)>
            {text}
        </span>
    }
    .into_view()
}
