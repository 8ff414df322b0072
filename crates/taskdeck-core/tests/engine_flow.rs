use std::cell::RefCell;
use std::rc::Rc;

use taskdeck_core::pagination::PageDisplay;
use taskdeck_core::reconcile::{
    DASHBOARD_ENTRY_REFRESH, MUTATION_REFRESH, RefreshKind, RenderedPage, Sequencer,
};
use taskdeck_core::session::SessionState;
use taskdeck_core::view_state::{FilterPatch, ViewState};
use taskdeck_shared::{StatsSummary, Task, TaskPriority, TaskStatus};

fn fetched_page(len: usize) -> Vec<Task> {
    (0..len as u64)
        .map(|id| Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status: TaskStatus::Pending,
            completed: false,
            priority: TaskPriority::Medium,
            created_at: None,
            updated_at: None,
        })
        .collect()
}

#[test]
fn browse_filter_and_paginate_flow() {
    let mut vs = ViewState::new(10);
    let mut fetches = Sequencer::default();

    // First page comes back full, so the user can move forward twice.
    let ticket = fetches.issue();
    let page = fetched_page(10);
    assert!(fetches.is_current(ticket));
    assert!(vs.page_forward(page.len()));

    let ticket = fetches.issue();
    let page = fetched_page(10);
    assert!(fetches.is_current(ticket));
    assert!(vs.page_forward(page.len()));
    assert_eq!(vs.page(), 2);

    // Third page is short: display shows the tail range and forward
    // navigation is refused.
    let ticket = fetches.issue();
    let page = fetched_page(7);
    assert!(fetches.is_current(ticket));
    let display = PageDisplay::compute(vs.page(), vs.page_size(), page.len());
    assert_eq!(display.range_label(), "21-27");
    assert!(display.prev_enabled);
    assert!(!display.next_enabled);
    assert!(!vs.page_forward(page.len()));
    assert_eq!(vs.page(), 2);

    // Changing the criteria invalidates the position in the collection.
    vs.apply_filter(FilterPatch::Status(Some(TaskStatus::Completed)));
    assert_eq!(vs.page(), 0);
    let params = vs.to_query_params();
    assert!(params.contains(&("skip".to_string(), "0".to_string())));
    assert!(params.contains(&("status".to_string(), "completed".to_string())));
}

#[test]
fn overlapping_fetches_render_only_the_newest() {
    let mut vs = ViewState::new(10);
    let mut fetches = Sequencer::default();
    let mut rendered = RenderedPage::default();

    // A page change and a search land back-to-back; the page-change response
    // arrives after the search response and must be discarded.
    assert!(vs.page_forward(10));
    let slow = fetches.issue();

    vs.set_search("sync");
    let fast = fetches.issue();

    let fast_body = fetched_page(3);
    if fetches.is_current(fast) {
        rendered = RenderedPage::replaced(fast_body);
    }

    let slow_body = fetched_page(10);
    if fetches.is_current(slow) {
        rendered = RenderedPage::replaced(slow_body);
    }

    assert_eq!(rendered.len(), 3);
}

#[test]
fn late_search_commit_keeps_filters_landed_mid_window() {
    // The authoritative view state is shared, the way the app holds it in a
    // cell: the debounce timer mutates the current value instead of a
    // keystroke-time snapshot.
    let view = Rc::new(RefCell::new(ViewState::new(10)));
    let mut window = Sequencer::default();

    // Keystroke opens the debounce window.
    let ticket = window.issue();

    // A status filter lands before the timer fires.
    view.borrow_mut()
        .apply_filter(FilterPatch::Status(Some(TaskStatus::InProgress)));

    // Timer fires and commits the search; the filter must survive.
    if window.is_current(ticket) {
        view.borrow_mut().set_search("report");
    }

    let params = view.borrow().to_query_params();
    assert!(params.contains(&("search".to_string(), "report".to_string())));
    assert!(params.contains(&("status".to_string(), "in-progress".to_string())));
}

#[test]
fn overlapping_stats_refreshes_keep_the_newest_counts() {
    let mut gate = Sequencer::default();
    let mut shown: Option<StatsSummary> = None;

    // Two quick mutations each trigger a stats refetch; the first response
    // straggles in after the second and must not win.
    let first = gate.issue();
    let second = gate.issue();

    let newer = StatsSummary {
        total: 5,
        pending: 2,
        in_progress: 1,
        completed: 2,
    };
    if gate.is_current(second) {
        shown = Some(newer.clone());
    }

    let older = StatsSummary {
        total: 5,
        pending: 3,
        in_progress: 1,
        completed: 1,
    };
    if gate.is_current(first) {
        shown = Some(older);
    }

    assert_eq!(shown, Some(newer));
}

#[test]
fn refresh_plans_run_each_step_once_in_order() {
    fn run(plan: &[RefreshKind]) -> Vec<&'static str> {
        let mut calls = Vec::new();
        for step in plan {
            match step {
                RefreshKind::TaskList => calls.push("tasks"),
                RefreshKind::Stats => calls.push("stats"),
            }
        }
        calls
    }

    assert_eq!(run(&MUTATION_REFRESH), ["tasks", "stats"]);
    assert_eq!(run(&DASHBOARD_ENTRY_REFRESH), ["stats", "tasks"]);
}

#[test]
fn failed_fetch_leaves_the_empty_state() {
    let mut fetches = Sequencer::default();
    let mut rendered = RenderedPage::replaced(fetched_page(10));

    let ticket = fetches.issue();
    if fetches.is_current(ticket) {
        rendered = RenderedPage::cleared();
    }

    assert!(rendered.is_empty());
    let display = PageDisplay::compute(0, 10, rendered.len());
    assert_eq!(display.range_label(), "0-0");
    assert!(!display.prev_enabled);
    assert!(!display.next_enabled);
}

#[test]
fn debounced_search_admits_only_the_final_keystroke() {
    let mut window = Sequencer::default();

    let tickets: Vec<_> = ["r", "re", "rep", "repo", "report"]
        .iter()
        .map(|_| window.issue())
        .collect();

    let fired: Vec<_> = tickets
        .iter()
        .filter(|ticket| window.is_current(**ticket))
        .collect();
    assert_eq!(fired.len(), 1);
    assert!(window.is_current(tickets[4]));
}

#[test]
fn session_probe_flow_matches_dashboard_entry() {
    // Reload with a stored token: probe succeeds, dashboard becomes ready.
    let session = SessionState::bootstrap(Some("stored".to_string()));
    assert!(session.is_validating());
    let session = session.probe_succeeded();
    assert!(session.is_authenticated());

    // Explicit logout clears everything, and a rejected probe on the next
    // reload looks exactly the same.
    let session = session.logged_out();
    assert_eq!(session, SessionState::Unauthenticated);

    let rejected = SessionState::bootstrap(Some("stale".to_string())).probe_failed();
    assert_eq!(rejected, session);
}
