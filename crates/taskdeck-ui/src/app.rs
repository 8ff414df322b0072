mod component;
mod controller;
mod storage;
pub(crate) mod types;

pub use component::App;
