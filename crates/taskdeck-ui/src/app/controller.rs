use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use taskdeck_core::config::ClientConfig;
use taskdeck_core::reconcile::{
    DASHBOARD_ENTRY_REFRESH, MUTATION_REFRESH, RefreshKind, RenderedPage, Sequencer,
};
use taskdeck_core::session::SessionState;
use taskdeck_core::view_state::ViewState;
use taskdeck_shared::{ApiError, StatsSummary};
use tracing::{debug, error, info};
use yew::{UseReducerDispatcher, UseStateHandle};

use super::storage;
use super::types::{Toast, ToastAction, ToastKind, ToastStack};
use crate::api::Api;

// Everything a dashboard action needs, cloned into its spawned future.
// Constructor-injected from the component; no global state.
#[derive(Clone)]
pub struct AppCtx {
    pub config: ClientConfig,
    pub session: UseStateHandle<SessionState>,
    pub tasks: UseStateHandle<RenderedPage>,
    pub stats: UseStateHandle<Option<StatsSummary>>,
    pub loading: UseStateHandle<bool>,
    pub fetch_gate: Rc<RefCell<Sequencer>>,
    pub stats_gate: Rc<RefCell<Sequencer>>,
    pub toasts: UseReducerDispatcher<ToastStack>,
    pub toast_ids: Rc<RefCell<u64>>,
}

impl AppCtx {
    pub fn api(&self) -> Api {
        Api::new(&self.config, (*self.session).token())
    }

    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut ids = self.toast_ids.borrow_mut();
            *ids += 1;
            *ids
        };
        self.toasts.dispatch(ToastAction::Push(Toast {
            id,
            kind,
            message: message.into(),
        }));

        let toasts = self.toasts.clone();
        let dismiss_ms = self.config.toast_dismiss_ms;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            toasts.dispatch(ToastAction::Dismiss(id));
        });
    }

    // Rejected tokens silently return the user to the login view; every
    // other failure becomes an error toast.
    pub fn handle_api_error(&self, err: &ApiError) {
        if err.is_auth() {
            info!("token rejected, clearing session");
            storage::clear_token();
            self.session.set((*self.session).clone().probe_failed());
        } else {
            self.push_toast(ToastKind::Error, err.to_string());
        }
    }

    // The authoritative reconciliation step: one fetch per call, and only
    // the most recently issued call may replace the rendered page.
    pub async fn refresh_tasks(&self, api: &Api, view: &ViewState) {
        let ticket = self.fetch_gate.borrow_mut().issue();
        self.loading.set(true);

        let result = api.list_tasks(&view.to_query_params()).await;

        if !self.fetch_gate.borrow().is_current(ticket) {
            debug!("discarding superseded fetch response");
            return;
        }

        match result {
            Ok(list) => {
                debug!(count = list.len(), page = view.page(), "rendered page replaced");
                self.tasks.set(RenderedPage::replaced(list));
            }
            Err(err) => {
                error!(error = %err, "task fetch failed, clearing list");
                self.tasks.set(RenderedPage::cleared());
                self.handle_api_error(&err);
            }
        }
        self.loading.set(false);
    }

    // Gated like the task list: only the most recently issued stats fetch
    // may replace the displayed counts.
    pub async fn refresh_stats(&self, api: &Api) {
        let ticket = self.stats_gate.borrow_mut().issue();

        let result = api.stats().await;

        if !self.stats_gate.borrow().is_current(ticket) {
            debug!("discarding superseded stats response");
            return;
        }

        match result {
            Ok(summary) => self.stats.set(Some(summary)),
            Err(err) => {
                error!(error = %err, "stats refresh failed");
                self.handle_api_error(&err);
            }
        }
    }

    async fn run_refresh_plan(&self, plan: &[RefreshKind], api: &Api, view: &ViewState) {
        for step in plan {
            match step {
                RefreshKind::TaskList => self.refresh_tasks(api, view).await,
                RefreshKind::Stats => self.refresh_stats(api).await,
            }
        }
    }

    pub async fn enter_dashboard(&self, api: &Api, view: &ViewState) {
        self.run_refresh_plan(&DASHBOARD_ENTRY_REFRESH, api, view).await;
    }

    // Both values come from the service after every mutation, never from
    // local arithmetic, so they cannot drift.
    pub async fn after_mutation(&self, api: &Api, view: &ViewState) {
        self.run_refresh_plan(&MUTATION_REFRESH, api, view).await;
    }
}
