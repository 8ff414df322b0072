pub mod error;

use serde::{Deserialize, Serialize};

pub use error::ApiError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn all() -> [Self; 3] {
        [Self::Pending, Self::InProgress, Self::Completed]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    // Cycles the status and keeps the mirror flag consistent with it.
    pub fn toggle_patch(&self) -> TaskUpdate {
        let status = self.status.next();
        TaskUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            status,
            completed: status.is_completed(),
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskCreate {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub completed: bool,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub completed: bool,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserOut {
    pub id: u64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycle_is_closed() {
        assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.next(), TaskStatus::Pending);
    }

    #[test]
    fn toggle_patch_mirrors_completed_flag() {
        let task = Task {
            id: 7,
            title: "Ship release".to_string(),
            description: "cut the tag".to_string(),
            status: TaskStatus::InProgress,
            completed: false,
            priority: TaskPriority::High,
            created_at: None,
            updated_at: None,
        };

        let patch = task.toggle_patch();
        assert_eq!(patch.status, TaskStatus::Completed);
        assert!(patch.completed);

        let task = Task {
            status: TaskStatus::Completed,
            completed: true,
            ..task
        };
        let patch = task.toggle_patch();
        assert_eq!(patch.status, TaskStatus::Pending);
        assert!(!patch.completed);
    }

    #[test]
    fn status_serializes_with_service_spelling() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
        let back: TaskStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, TaskStatus::InProgress);
    }

    #[test]
    fn task_round_trips_without_field_mutation() {
        let raw = r#"{
            "id": 42,
            "title": "Water the plants",
            "description": "back porch only",
            "status": "pending",
            "completed": false,
            "priority": "low",
            "created_at": "2026-08-01T10:00:00Z",
            "updated_at": "2026-08-02T09:30:00Z"
        }"#;

        let task: Task = serde_json::from_str(raw).expect("decode task");
        let encoded = serde_json::to_string(&task).expect("encode task");
        let back: Task = serde_json::from_str(&encoded).expect("decode again");
        assert_eq!(task, back);
        assert_eq!(back.created_at.as_deref(), Some("2026-08-01T10:00:00Z"));
    }
}
