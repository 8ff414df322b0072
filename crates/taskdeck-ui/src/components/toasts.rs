use yew::{Callback, Html, Properties, classes, function_component, html};

use crate::app::types::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    html! {
        <div class="toast-shelf">
            {
                for props.toasts.iter().cloned().map(|toast| {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    html! {
                        <div
                            key={toast.id.to_string()}
                            class={classes!("toast", toast.kind.as_class())}
                            onclick={move |_| on_dismiss.emit(id)}
                        >
                            { toast.message }
                        </div>
                    }
                })
            }
        </div>
    }
}
