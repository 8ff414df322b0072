use taskdeck_shared::{TaskPriority, TaskStatus};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

use crate::app::types::{ModalMode, ModalState};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub state: ModalState,
    pub on_update: Callback<ModalState>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let title = match props.state.mode {
        ModalMode::Add => "New task",
        ModalMode::Edit(_) => "Edit task",
    };

    let on_title = {
        let state = props.state.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_update.emit(ModalState {
                    draft_title: input.value(),
                    ..state.clone()
                });
            }
        })
    };

    let on_description = {
        let state = props.state.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                on_update.emit(ModalState {
                    draft_description: area.value(),
                    ..state.clone()
                });
            }
        })
    };

    let on_status = {
        let state = props.state.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(status) = TaskStatus::from_key(&select.value()) {
                    on_update.emit(ModalState {
                        draft_status: status,
                        ..state.clone()
                    });
                }
            }
        })
    };

    let on_priority = {
        let state = props.state.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(priority) = TaskPriority::from_key(&select.value()) {
                    on_update.emit(ModalState {
                        draft_priority: priority,
                        ..state.clone()
                    });
                }
            }
        })
    };

    let on_submit = {
        let submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submit.emit(());
        })
    };

    let on_close = props.on_close.clone();

    html! {
        <div class="overlay">
            <div class="panel modal">
                <h3>{ title }</h3>
                <form onsubmit={on_submit}>
                    <input
                        class="input"
                        placeholder="Title"
                        required=true
                        value={props.state.draft_title.clone()}
                        oninput={on_title}
                    />
                    <textarea
                        class="input"
                        placeholder="Description"
                        value={props.state.draft_description.clone()}
                        oninput={on_description}
                    />
                    <select class="input" onchange={on_status}>
                        {
                            for TaskStatus::all().into_iter().map(|status| html! {
                                <option
                                    value={status.as_key()}
                                    selected={props.state.draft_status == status}
                                >
                                    { status.label() }
                                </option>
                            })
                        }
                    </select>
                    <select class="input" onchange={on_priority}>
                        {
                            for TaskPriority::all().into_iter().map(|priority| html! {
                                <option
                                    value={priority.as_key()}
                                    selected={props.state.draft_priority == priority}
                                >
                                    { priority.label() }
                                </option>
                            })
                        }
                    </select>
                    <div class="modal-actions">
                        <button class="btn primary" type="submit" disabled={props.state.busy}>
                            { if props.state.busy { "Saving…" } else { "Save" } }
                        </button>
                        <button
                            class="btn ghost"
                            type="button"
                            onclick={move |_| on_close.emit(())}
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
