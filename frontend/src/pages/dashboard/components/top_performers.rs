use crate::{
    components::empty_state::EmptyState,
    pages::dashboard::{summary::TopPerformer, utils::format_percentage},
};
use leptos::*;

#[component]
pub fn TopPerformersSection(performers: Signal<Vec<TopPerformer>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Top Performers"</h3>
            <Show
                when=move || performers.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No attendance statistics yet" /> }
            >
                <ol class="space-y-2">
                    {move || {
                        performers
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(rank, performer)| view! {
                                <li class="flex items-center justify-between text-sm">
                                    <span class="text-fg">{format!("{}. {}", rank + 1, performer.name)}</span>
                                    <span class="font-semibold text-fg">{format_percentage(performer.attendance)}</span>
                                </li>
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn ranks_performers() {
        let html = render_to_string(|| {
            let performers = Signal::derive(|| {
                vec![
                    TopPerformer { name: "Ana".into(), attendance: 98.0 },
                    TopPerformer { name: "Ben".into(), attendance: 91.5 },
                ]
            });
            view! { <TopPerformersSection performers=performers /> }
        });
        assert!(html.contains("1. Ana"));
        assert!(html.contains("2. Ben"));
        assert!(html.contains("91.50%"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <TopPerformersSection performers=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("No attendance statistics yet"));
    }
}
