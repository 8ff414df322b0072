use taskdeck_core::pagination::PageDisplay;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub display: PageDisplay,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev = props.on_prev.clone();
    let on_next = props.on_next.clone();

    html! {
        <div class="pagination">
            <button
                class="btn ghost"
                disabled={!props.display.prev_enabled}
                onclick={move |_| on_prev.emit(())}
            >
                { "Prev" }
            </button>
            <span class="range">{ props.display.range_label() }</span>
            <button
                class="btn ghost"
                disabled={!props.display.next_enabled}
                onclick={move |_| on_next.emit(())}
            >
                { "Next" }
            </button>
        </div>
    }
}
