use crate::{
    api::TimeSlot,
    pages::dashboard::utils::{slot_choices, TimeSlotFilter, ALL_SLOTS},
};
use leptos::*;

#[component]
pub fn TimeSlotSelect(
    filter: RwSignal<TimeSlotFilter>,
    #[prop(into)] options: Signal<Vec<TimeSlot>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let choices = move || options.with(|options| slot_choices(options, &filter.get()));

    view! {
        <label class="flex items-center gap-2 text-sm text-fg-muted">
            <span class="font-medium text-fg">"Time slot"</span>
            <select
                class="rounded-md border border-border bg-surface-elevated px-3 py-1.5 text-sm text-fg"
                on:change=move |ev| on_change.call(event_target_value(&ev))
                prop:value=move || filter.get().to_string()
            >
                <option value=ALL_SLOTS selected=move || filter.get() == TimeSlotFilter::All>
                    "All time slots"
                </option>
                <For
                    each=choices
                    key=|slot| slot.to_string()
                    children=move |slot: TimeSlot| {
                        let value = slot.to_string();
                        let selected = {
                            let slot = slot.clone();
                            move || filter.get().slot() == Some(&slot)
                        };
                        view! {
                            <option value=value.clone() selected=selected>{value.clone()}</option>
                        }
                    }
                />
            </select>
        </label>
    }
}
