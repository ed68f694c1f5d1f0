pub mod compose;
pub mod data;
pub mod icon;
pub mod models;
pub mod navigation;
pub mod theme;

pub use compose::{compose_dashboard, DashboardModel, QuickActionTile, StatusMarker};
pub use icon::Icon;
pub use models::{
    AppointmentEntry, AppointmentStatus, ColorToken, CurrentUser, DashboardData, QuickAction,
    StatCard,
};
pub use navigation::Navigator;
pub use theme::ThemeMode;
