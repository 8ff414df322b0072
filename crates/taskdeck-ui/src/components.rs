mod auth_card;
mod confirm_dialog;
mod pagination;
mod stats_panel;
mod task_list;
mod task_modal;
mod toasts;

pub use auth_card::AuthCard;
pub use confirm_dialog::ConfirmDialog;
pub use pagination::Pagination;
pub use stats_panel::StatsPanel;
pub use task_list::TaskList;
pub use task_modal::TaskModal;
pub use toasts::Toasts;
