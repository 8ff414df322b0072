use taskdeck_core::session::AuthView;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub view: AuthView,
    pub on_switch: Callback<()>,
    pub on_login: Callback<(String, String)>,
    pub on_register: Callback<(String, String)>,
}

#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let view = props.view;
        let on_login = props.on_login.clone();
        let on_register = props.on_register.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = ((*username).clone(), (*password).clone());
            match view {
                AuthView::Login => on_login.emit(credentials),
                AuthView::Register => on_register.emit(credentials),
            }
            password.set(String::new());
        })
    };

    let (title, action, switch_label) = match props.view {
        AuthView::Login => ("Sign in", "Login", "Need an account? Register"),
        AuthView::Register => ("Create an account", "Register", "Have an account? Log in"),
    };

    let on_switch = props.on_switch.clone();

    html! {
        <div class="panel auth-card">
            <h2>{ title }</h2>
            <form onsubmit={on_submit}>
                <input
                    class="input"
                    placeholder="Username"
                    required=true
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    required=true
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button class="btn primary" type="submit">{ action }</button>
            </form>
            <button class="btn link" onclick={move |_| on_switch.emit(())}>
                { switch_label }
            </button>
        </div>
    }
}
