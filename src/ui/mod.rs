pub mod chat;
pub mod dashboard;
pub mod form;
pub mod output;
pub mod theme;

pub use dashboard::DashboardView;
pub use theme::Theme;
