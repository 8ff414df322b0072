use std::rc::Rc;

use taskdeck_core::autosave::FormSnapshot;
use taskdeck_shared::{Task, TaskCreate, TaskPriority, TaskStatus, TaskUpdate};
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(Self { toasts })
            }
            ToastAction::Dismiss(id) => Rc::new(Self {
                toasts: self
                    .toasts
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub mode: ModalMode,
    pub draft_title: String,
    pub draft_description: String,
    pub draft_status: TaskStatus,
    pub draft_priority: TaskPriority,
    pub busy: bool,
}

impl ModalState {
    pub fn add(restored: &FormSnapshot) -> Self {
        Self {
            mode: ModalMode::Add,
            draft_title: restored.get("title").to_string(),
            draft_description: restored.get("description").to_string(),
            draft_status: TaskStatus::from_key(restored.get("status"))
                .unwrap_or_default(),
            draft_priority: TaskPriority::from_key(restored.get("priority"))
                .unwrap_or_default(),
            busy: false,
        }
    }

    pub fn edit(task: &Task) -> Self {
        Self {
            mode: ModalMode::Edit(task.id),
            draft_title: task.title.clone(),
            draft_description: task.description.clone(),
            draft_status: task.status,
            draft_priority: task.priority,
            busy: false,
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("title", &self.draft_title);
        snapshot.set("description", &self.draft_description);
        snapshot.set("status", self.draft_status.as_key());
        snapshot.set("priority", self.draft_priority.as_key());
        snapshot
    }

    pub fn create_payload(&self) -> TaskCreate {
        TaskCreate {
            title: self.draft_title.clone(),
            description: self.draft_description.clone(),
            status: self.draft_status,
            completed: self.draft_status.is_completed(),
            priority: self.draft_priority,
        }
    }

    pub fn update_payload(&self) -> TaskUpdate {
        TaskUpdate {
            title: self.draft_title.clone(),
            description: self.draft_description.clone(),
            status: self.draft_status,
            completed: self.draft_status.is_completed(),
            priority: self.draft_priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: u64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_modal_restores_autosaved_draft() {
        let mut snapshot = FormSnapshot::default();
        snapshot.set("title", "Half-written task");
        snapshot.set("status", "in-progress");
        snapshot.set("priority", "high");

        let state = ModalState::add(&snapshot);
        assert_eq!(state.mode, ModalMode::Add);
        assert_eq!(state.draft_title, "Half-written task");
        assert_eq!(state.draft_status, TaskStatus::InProgress);
        assert_eq!(state.draft_priority, TaskPriority::High);
        assert!(state.draft_description.is_empty());
    }

    #[test]
    fn payloads_mirror_the_completed_flag() {
        let snapshot = FormSnapshot::default();
        let mut state = ModalState::add(&snapshot);
        state.draft_title = "t".to_string();
        state.draft_status = TaskStatus::Completed;

        assert!(state.create_payload().completed);
        state.draft_status = TaskStatus::Pending;
        assert!(!state.update_payload().completed);
    }

    #[test]
    fn snapshot_round_trips_the_draft() {
        let task = Task {
            id: 3,
            title: "Renew passport".to_string(),
            description: "bring photos".to_string(),
            status: TaskStatus::Pending,
            completed: false,
            priority: TaskPriority::Low,
            created_at: None,
            updated_at: None,
        };
        let state = ModalState::edit(&task);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.get("title"), "Renew passport");
        assert_eq!(snapshot.get("status"), "pending");
        assert_eq!(snapshot.get("priority"), "low");
    }
}
