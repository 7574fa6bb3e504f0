use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Success,
    Error,
    Warning,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: Option<StatTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = tone.unwrap_or(StatTone::Neutral).class();

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
