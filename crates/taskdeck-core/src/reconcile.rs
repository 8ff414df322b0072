use taskdeck_shared::Task;
use tracing::trace;

// One instance guards one class of overlapping async work: every new
// invocation takes a ticket, and only the ticket issued last is allowed to
// apply its result. Used for both fetch reconciliation and the search
// debounce window.
#[derive(Debug, Default)]
pub struct Sequencer {
    issued: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Sequencer {
    pub fn issue(&mut self) -> Ticket {
        self.issued = self.issued.wrapping_add(1);
        trace!(seq = self.issued, "issued ticket");
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

// The task rows currently on screen. Replaced wholesale per completed fetch;
// a failed fetch leaves the empty state, never a half-updated list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPage {
    tasks: Vec<Task>,
}

impl RenderedPage {
    pub fn replaced(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    TaskList,
    Stats,
}

// Entering the dashboard shows the aggregate counts first; after a mutation
// the changed rows come first. Both are full refetches from the service.
pub const DASHBOARD_ENTRY_REFRESH: [RefreshKind; 2] = [RefreshKind::Stats, RefreshKind::TaskList];
pub const MUTATION_REFRESH: [RefreshKind; 2] = [RefreshKind::TaskList, RefreshKind::Stats];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let mut seq = Sequencer::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));

        let third = seq.issue();
        assert!(!seq.is_current(second));
        assert!(seq.is_current(third));
    }

    #[test]
    fn burst_of_issues_admits_exactly_one() {
        let mut seq = Sequencer::default();
        let tickets: Vec<_> = (0..8).map(|_| seq.issue()).collect();
        let admitted = tickets
            .iter()
            .filter(|ticket| seq.is_current(**ticket))
            .count();
        assert_eq!(admitted, 1);
        assert!(seq.is_current(tickets[7]));
    }

    #[test]
    fn failed_fetch_clears_the_rendered_page() {
        let task = Task {
            id: 1,
            title: "write report".to_string(),
            description: String::new(),
            status: Default::default(),
            completed: false,
            priority: Default::default(),
            created_at: None,
            updated_at: None,
        };
        let page = RenderedPage::replaced(vec![task]);
        assert_eq!(page.len(), 1);

        let page = RenderedPage::cleared();
        assert!(page.is_empty());
        assert_eq!(page, RenderedPage::default());
    }

    #[test]
    fn refresh_orders_differ_by_trigger() {
        assert_eq!(
            DASHBOARD_ENTRY_REFRESH,
            [RefreshKind::Stats, RefreshKind::TaskList]
        );
        assert_eq!(MUTATION_REFRESH, [RefreshKind::TaskList, RefreshKind::Stats]);
    }
}
