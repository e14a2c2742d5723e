use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Positive,
    Warning,
}

impl CardTone {
    pub fn accent(&self) -> &'static str {
        match self {
            CardTone::Neutral => "bg-brand-50 text-brand-600",
            CardTone::Positive => "bg-emerald-50 text-emerald-600",
            CardTone::Warning => "bg-amber-50 text-amber-600",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] tone: CardTone,
) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm">
            <div class=format!("absolute top-0 right-0 -mr-4 -mt-4 w-20 h-20 rounded-full opacity-50 {}", tone.accent())></div>
            <p class="relative z-10 text-xs font-bold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="relative z-10 mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
            {hint.map(|text| view! { <p class="relative z-10 mt-1 text-xs text-fg-muted">{text}</p> })}
        </div>
    }
}
