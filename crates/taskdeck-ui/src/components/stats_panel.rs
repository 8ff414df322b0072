use taskdeck_shared::StatsSummary;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: Option<StatsSummary>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let Some(stats) = &props.stats else {
        return html! { <div class="panel stats muted">{ "Loading stats…" }</div> };
    };

    let cell = |label: &str, value: u64| {
        html! {
            <div class="stat">
                <span class="value">{ value }</span>
                <span class="label">{ label.to_string() }</span>
            </div>
        }
    };

    html! {
        <div class="panel stats">
            { cell("Total", stats.total) }
            { cell("Pending", stats.pending) }
            { cell("In progress", stats.in_progress) }
            { cell("Completed", stats.completed) }
        </div>
    }
}
