use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use taskdeck_core::config::ClientConfig;
use taskdeck_core::pagination::PageDisplay;
use taskdeck_core::reconcile::{RenderedPage, Sequencer};
use taskdeck_core::session::{AuthView, SessionState};
use taskdeck_core::view_state::{FilterPatch, ViewState};
use taskdeck_shared::{StatsSummary, Task, TaskPriority, TaskStatus};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::{
    Callback, Html, TargetCast, function_component, html, use_effect_with, use_mut_ref,
    use_reducer, use_state,
};

use super::controller::AppCtx;
use super::storage;
use super::types::{ModalMode, ModalState, PendingDelete, ToastAction, ToastKind, ToastStack};
use crate::components::{AuthCard, ConfirmDialog, Pagination, StatsPanel, TaskList, TaskModal, Toasts};

#[function_component(App)]
pub fn app() -> Html {
    let config = ClientConfig::default();
    let page_size = config.page_size;

    let session = use_state(|| SessionState::bootstrap(storage::load_token()));
    let auth_view = use_state(|| AuthView::Login);
    // The authoritative ViewState lives in the cell so that continuations
    // (debounce timers, in-flight futures) always mutate the current value;
    // the state handle is a render mirror of it.
    let view_ref = use_mut_ref(move || ViewState::new(page_size));
    let view_state = use_state(move || ViewState::new(page_size));
    let search_input = use_state(String::new);
    let tasks = use_state(RenderedPage::default);
    let stats = use_state(|| None::<StatsSummary>);
    let loading = use_state(|| false);
    let toast_state = use_reducer(ToastStack::default);
    let modal = use_state(|| None::<ModalState>);
    let pending_delete = use_state(|| None::<PendingDelete>);
    let fetch_gate = use_mut_ref(Sequencer::default);
    let stats_gate = use_mut_ref(Sequencer::default);
    let search_gate = use_mut_ref(Sequencer::default);
    let autosave_gate = use_mut_ref(Sequencer::default);
    let toast_ids = use_mut_ref(|| 0_u64);

    let ctx = AppCtx {
        config: config.clone(),
        session: session.clone(),
        tasks: tasks.clone(),
        stats: stats.clone(),
        loading: loading.clone(),
        fetch_gate: fetch_gate.clone(),
        stats_gate: stats_gate.clone(),
        toasts: toast_state.dispatcher(),
        toast_ids: toast_ids.clone(),
    };

    // Startup probe: a persisted token is only trusted once an authenticated
    // fetch accepts it.
    {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        use_effect_with((), move |_| {
            if (*ctx.session).is_validating() {
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ctx.api();
                    match api.probe().await {
                        Ok(()) => {
                            ctx.session.set((*ctx.session).clone().probe_succeeded());
                            let view = view_ref.borrow().clone();
                            ctx.enter_dashboard(&api, &view).await;
                        }
                        Err(err) => {
                            tracing::info!(error = %err, "startup probe failed");
                            storage::clear_token();
                            ctx.session.set((*ctx.session).clone().probe_failed());
                        }
                    }
                });
            }
            || ()
        });
    }

    // While a create draft is open, a page unload flushes the autosave
    // snapshot immediately.
    {
        let modal = modal.clone();
        use_effect_with((*modal).clone(), move |state| {
            let listener = state
                .as_ref()
                .filter(|state| state.mode == ModalMode::Add)
                .and_then(|state| {
                    let snapshot = state.snapshot();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "beforeunload", move |_| {
                            storage::save_form_snapshot(storage::TASK_FORM_ID, &snapshot);
                        })
                    })
                });
            move || drop(listener)
        });
    }

    let on_switch_auth = {
        let auth_view = auth_view.clone();
        Callback::from(move |_: ()| {
            auth_view.set((*auth_view).toggled());
        })
    };

    let on_login = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        Callback::from(move |(username, password): (String, String)| {
            let ctx = ctx.clone();
            let view_ref = view_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ctx.api().login(&username, &password).await {
                    Ok(token) => {
                        storage::save_token(&token.access_token);
                        let api = crate::api::Api::new(&ctx.config, Some(&token.access_token));
                        ctx.session.set(SessionState::logged_in(
                            token.access_token,
                            Some(username),
                        ));
                        let view = view_ref.borrow().clone();
                        ctx.enter_dashboard(&api, &view).await;
                    }
                    Err(err) => {
                        tracing::info!(error = %err, "login failed");
                        ctx.push_toast(ToastKind::Error, err.to_string());
                    }
                }
            });
        })
    };

    let on_register = {
        let ctx = ctx.clone();
        let auth_view = auth_view.clone();
        Callback::from(move |(username, password): (String, String)| {
            let ctx = ctx.clone();
            let auth_view = auth_view.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let body = taskdeck_shared::UserCreate { username, password };
                match ctx.api().register(&body).await {
                    Ok(()) => {
                        ctx.push_toast(
                            ToastKind::Success,
                            "Account created. You can now log in.",
                        );
                        auth_view.set(AuthView::Login);
                    }
                    Err(err) => ctx.push_toast(ToastKind::Error, err.to_string()),
                }
            });
        })
    };

    let on_logout = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        let search_input = search_input.clone();
        Callback::from(move |_: ()| {
            storage::clear_token();
            ctx.session.set((*ctx.session).clone().logged_out());
            *view_ref.borrow_mut() = ViewState::new(ctx.config.page_size);
            view_state.set(ViewState::new(ctx.config.page_size));
            search_input.set(String::new());
            ctx.tasks.set(RenderedPage::default());
            ctx.stats.set(None);
        })
    };

    // Keystrokes update the input immediately; the fetch itself waits out
    // the quiet window, and a superseded timer never fires. The timer
    // applies the search to the authoritative cell, so a filter or page
    // change landing inside the window survives the late commit.
    let on_search = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        let search_input = search_input.clone();
        let search_gate = search_gate.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let text = input.value();
            search_input.set(text.clone());

            let ticket = search_gate.borrow_mut().issue();
            let ctx = ctx.clone();
            let view_ref = view_ref.clone();
            let view_state = view_state.clone();
            let search_gate = search_gate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(ctx.config.search_debounce_ms).await;
                if !search_gate.borrow().is_current(ticket) {
                    return;
                }
                let view = {
                    let mut view = view_ref.borrow_mut();
                    view.set_search(text);
                    view.clone()
                };
                view_state.set(view.clone());
                let api = ctx.api();
                ctx.refresh_tasks(&api, &view).await;
            });
        })
    };

    let on_status_filter = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let view = {
                let mut view = view_ref.borrow_mut();
                view.apply_filter(FilterPatch::Status(TaskStatus::from_key(&select.value())));
                view.clone()
            };
            view_state.set(view.clone());

            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                ctx.refresh_tasks(&api, &view).await;
            });
        })
    };

    let on_priority_filter = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let view = {
                let mut view = view_ref.borrow_mut();
                view.apply_filter(FilterPatch::Priority(TaskPriority::from_key(
                    &select.value(),
                )));
                view.clone()
            };
            view_state.set(view.clone());

            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                ctx.refresh_tasks(&api, &view).await;
            });
        })
    };

    let on_prev_page = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        Callback::from(move |_: ()| {
            let view = {
                let mut view = view_ref.borrow_mut();
                if !view.page_back() {
                    return;
                }
                view.clone()
            };
            view_state.set(view.clone());

            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                ctx.refresh_tasks(&api, &view).await;
            });
        })
    };

    let on_next_page = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let view_state = view_state.clone();
        Callback::from(move |_: ()| {
            let last_page_len = (*ctx.tasks).len();
            let view = {
                let mut view = view_ref.borrow_mut();
                if !view.page_forward(last_page_len) {
                    return;
                }
                view.clone()
            };
            view_state.set(view.clone());

            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                ctx.refresh_tasks(&api, &view).await;
            });
        })
    };

    let on_open_create = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let restored = storage::load_form_snapshot(storage::TASK_FORM_ID);
            modal.set(Some(ModalState::add(&restored)));
        })
    };

    let on_open_edit = {
        let ctx = ctx.clone();
        let modal = modal.clone();
        Callback::from(move |task: Task| {
            let ctx = ctx.clone();
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ctx.api().get_task(task.id).await {
                    Ok(fresh) => modal.set(Some(ModalState::edit(&fresh))),
                    Err(err) => ctx.handle_api_error(&err),
                }
            });
        })
    };

    // Draft edits re-render the modal and, for create drafts, schedule a
    // debounced autosave write.
    let on_modal_update = {
        let ctx = ctx.clone();
        let modal = modal.clone();
        let autosave_gate = autosave_gate.clone();
        Callback::from(move |state: ModalState| {
            let snapshot = (state.mode == ModalMode::Add).then(|| state.snapshot());
            modal.set(Some(state));

            let Some(snapshot) = snapshot else {
                return;
            };
            let ticket = autosave_gate.borrow_mut().issue();
            let autosave_gate = autosave_gate.clone();
            let debounce_ms = ctx.config.search_debounce_ms;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(debounce_ms).await;
                if autosave_gate.borrow().is_current(ticket) {
                    storage::save_form_snapshot(storage::TASK_FORM_ID, &snapshot);
                }
            });
        })
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            modal.set(None);
        })
    };

    let on_modal_submit = {
        let ctx = ctx.clone();
        let modal = modal.clone();
        let view_ref = view_ref.clone();
        Callback::from(move |_: ()| {
            let Some(state) = (*modal).clone() else {
                return;
            };
            if state.busy {
                return;
            }
            modal.set(Some(ModalState {
                busy: true,
                ..state.clone()
            }));

            let ctx = ctx.clone();
            let modal = modal.clone();
            let view_ref = view_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                let result = match state.mode {
                    ModalMode::Add => api.create_task(&state.create_payload()).await,
                    ModalMode::Edit(id) => api.update_task(id, &state.update_payload()).await,
                };
                match result {
                    Ok(()) => {
                        let message = match state.mode {
                            ModalMode::Add => "Task created.",
                            ModalMode::Edit(_) => "Task updated.",
                        };
                        ctx.push_toast(ToastKind::Success, message);
                        if state.mode == ModalMode::Add {
                            storage::clear_form_snapshot(storage::TASK_FORM_ID);
                        }
                        modal.set(None);
                        let view = view_ref.borrow().clone();
                        ctx.after_mutation(&api, &view).await;
                    }
                    Err(err) => {
                        ctx.handle_api_error(&err);
                        modal.set(Some(ModalState {
                            busy: false,
                            ..state
                        }));
                    }
                }
            });
        })
    };

    let on_toggle = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        Callback::from(move |task: Task| {
            let ctx = ctx.clone();
            let view_ref = view_ref.clone();
            let patch = task.toggle_patch();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                match api.update_task(task.id, &patch).await {
                    Ok(()) => {
                        ctx.push_toast(
                            ToastKind::Success,
                            format!("Task moved to {}.", patch.status.label().to_lowercase()),
                        );
                        let view = view_ref.borrow().clone();
                        ctx.after_mutation(&api, &view).await;
                    }
                    Err(err) => ctx.handle_api_error(&err),
                }
            });
        })
    };

    let on_delete_request = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |task: Task| {
            pending_delete.set(Some(PendingDelete {
                id: task.id,
                title: task.title,
            }));
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| {
            pending_delete.set(None);
        })
    };

    let on_delete_confirm = {
        let ctx = ctx.clone();
        let view_ref = view_ref.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| {
            let Some(pending) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);

            let ctx = ctx.clone();
            let view_ref = view_ref.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ctx.api();
                match api.delete_task(pending.id).await {
                    Ok(()) => {
                        ctx.push_toast(ToastKind::Success, "Task deleted.");
                        let view = view_ref.borrow().clone();
                        ctx.after_mutation(&api, &view).await;
                    }
                    Err(err) => ctx.handle_api_error(&err),
                }
            });
        })
    };

    let on_toast_dismiss = {
        let toasts = toast_state.dispatcher();
        Callback::from(move |id: u64| {
            toasts.dispatch(ToastAction::Dismiss(id));
        })
    };

    let content = match &*session {
        SessionState::Validating { .. } => html! {
            <div class="boot">{ "Checking session…" }</div>
        },
        SessionState::Unauthenticated => html! {
            <AuthCard
                view={*auth_view}
                on_switch={on_switch_auth}
                on_login={on_login}
                on_register={on_register}
            />
        },
        SessionState::Authenticated { username, .. } => {
            let view = (*view_state).clone();
            let display = PageDisplay::compute(view.page(), view.page_size(), (*tasks).len());
            let status_filter = view.filters().status;
            let priority_filter = view.filters().priority;
            let empty = !*loading && (*tasks).is_empty();
            let logout = on_logout.clone();

            html! {
                <div class="dashboard">
                    <header class="topbar">
                        <h1>{ "Taskdeck" }</h1>
                        <div class="account">
                            if let Some(name) = username {
                                <span class="who">{ name.clone() }</span>
                            }
                            <button class="btn ghost" onclick={move |_| logout.emit(())}>
                                { "Log out" }
                            </button>
                        </div>
                    </header>

                    <StatsPanel stats={(*stats).clone()} />

                    <div class="toolbar">
                        <input
                            class="input search"
                            placeholder="Search tasks"
                            value={(*search_input).clone()}
                            oninput={on_search.clone()}
                        />
                        <select class="input" onchange={on_status_filter.clone()}>
                            <option value="all" selected={status_filter.is_none()}>
                                { "All statuses" }
                            </option>
                            {
                                for TaskStatus::all().into_iter().map(|status| html! {
                                    <option
                                        value={status.as_key()}
                                        selected={status_filter == Some(status)}
                                    >
                                        { status.label() }
                                    </option>
                                })
                            }
                        </select>
                        <select class="input" onchange={on_priority_filter.clone()}>
                            <option value="all" selected={priority_filter.is_none()}>
                                { "All priorities" }
                            </option>
                            {
                                for TaskPriority::all().into_iter().map(|priority| html! {
                                    <option
                                        value={priority.as_key()}
                                        selected={priority_filter == Some(priority)}
                                    >
                                        { priority.label() }
                                    </option>
                                })
                            }
                        </select>
                        <button
                            class="btn primary"
                            onclick={let open = on_open_create.clone(); move |_| open.emit(())}
                        >
                            { "Add task" }
                        </button>
                    </div>

                    <TaskList
                        tasks={(*tasks).tasks().to_vec()}
                        loading={*loading}
                        empty={empty}
                        on_edit={on_open_edit.clone()}
                        on_toggle={on_toggle.clone()}
                        on_delete={on_delete_request.clone()}
                    />

                    <Pagination
                        display={display}
                        on_prev={on_prev_page.clone()}
                        on_next={on_next_page.clone()}
                    />
                </div>
            }
        }
    };

    html! {
        <div class="app">
            { content }
            if let Some(state) = (*modal).clone() {
                <TaskModal
                    state={state}
                    on_update={on_modal_update.clone()}
                    on_submit={on_modal_submit.clone()}
                    on_close={on_modal_close.clone()}
                />
            }
            if let Some(pending) = (*pending_delete).clone() {
                <ConfirmDialog
                    pending={pending}
                    on_confirm={on_delete_confirm.clone()}
                    on_cancel={on_delete_cancel.clone()}
                />
            }
            <Toasts toasts={toast_state.toasts.clone()} on_dismiss={on_toast_dismiss} />
        </div>
    }
}
