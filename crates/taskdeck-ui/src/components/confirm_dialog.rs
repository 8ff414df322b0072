use yew::{Callback, Html, Properties, function_component, html};

use crate::app::types::PendingDelete;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub pending: PendingDelete,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = props.on_confirm.clone();
    let on_cancel = props.on_cancel.clone();

    html! {
        <div class="overlay">
            <div class="panel modal confirm">
                <h3>{ "Delete task?" }</h3>
                <p>{ format!("\"{}\" will be permanently removed.", props.pending.title) }</p>
                <div class="modal-actions">
                    <button class="btn danger" onclick={move |_| on_confirm.emit(())}>
                        { "Delete" }
                    </button>
                    <button class="btn ghost" onclick={move |_| on_cancel.emit(())}>
                        { "Cancel" }
                    </button>
                </div>
            </div>
        </div>
    }
}
