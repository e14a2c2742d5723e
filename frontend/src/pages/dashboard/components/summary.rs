use crate::{
    components::cards::{CardTone, StatCard},
    pages::dashboard::{summary::DashboardSummary, utils::format_percentage},
};
use leptos::*;

#[component]
pub fn SummarySection(summary: Signal<DashboardSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <StatCard
                label="Total Students"
                value=Signal::derive(move || summary.get().total_students.to_string())
            />
            <StatCard
                label="Average Attendance"
                value=Signal::derive(move || format_percentage(summary.get().average_attendance))
                tone=CardTone::Positive
            />
            <StatCard
                label="Present Today"
                value=Signal::derive(move || summary.get().present_today.to_string())
            />
            <StatCard
                label="Below 75%"
                value=Signal::derive(move || summary.get().below_threshold.to_string())
                hint="Students needing attention"
                tone=CardTone::Warning
            />
        </div>
    }
}
