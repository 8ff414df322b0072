pub mod autosave;
pub mod config;
pub mod pagination;
pub mod reconcile;
pub mod session;
pub mod view_state;
