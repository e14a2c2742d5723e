pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod summary;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPage;
