use taskdeck_shared::Task;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub empty: bool,
    pub on_edit: Callback<Task>,
    pub on_toggle: Callback<Task>,
    pub on_delete: Callback<Task>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.loading {
        return html! {
            <div class="panel list">
                <div class="loading">{ "Loading tasks…" }</div>
            </div>
        };
    }

    if props.empty {
        return html! {
            <div class="panel list">
                <div class="empty">{ "No tasks found." }</div>
            </div>
        };
    }

    html! {
        <div class="panel list">
            {
                for props.tasks.iter().cloned().map(|task| {
                    let on_edit = props.on_edit.clone();
                    let on_toggle = props.on_toggle.clone();
                    let on_delete = props.on_delete.clone();
                    let edit_task = task.clone();
                    let toggle_task = task.clone();
                    let delete_task = task.clone();

                    html! {
                        <div class={classes!("row", task.status.as_key())}>
                            <div class="row-main">
                                <span class="title">{ &task.title }</span>
                                <span class="desc">{ &task.description }</span>
                            </div>
                            <span class={classes!("badge", "status", task.status.as_key())}>
                                { task.status.label() }
                            </span>
                            <span class={classes!("badge", "priority", task.priority.as_key())}>
                                { task.priority.label() }
                            </span>
                            <div class="row-actions">
                                <button
                                    class="btn ghost"
                                    title="Advance status"
                                    onclick={move |_| on_toggle.emit(toggle_task.clone())}
                                >
                                    { "Toggle" }
                                </button>
                                <button
                                    class="btn ghost"
                                    onclick={move |_| on_edit.emit(edit_task.clone())}
                                >
                                    { "Edit" }
                                </button>
                                <button
                                    class="btn danger"
                                    onclick={move |_| on_delete.emit(delete_task.clone())}
                                >
                                    { "Delete" }
                                </button>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
