use crate::icon::Icon;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Accent color family. Limited to the families the stylesheet generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
    Orange,
}

impl ColorToken {
    pub fn accent_class(self, mode: ThemeMode) -> String {
        match mode {
            ThemeMode::Light => format!("text-{}-600", self),
            ThemeMode::Dark => format!("text-{}-400", self),
        }
    }

    pub fn tile_class(self, mode: ThemeMode) -> String {
        match mode {
            ThemeMode::Light => format!("bg-{0}-50 hover:bg-{0}-100", self),
            ThemeMode::Dark => format!("bg-{0}-900/30 hover:bg-{0}-900/50", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub icon: Icon,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub target: String,
    pub color: ColorToken,
}

/// Appointment status. Any label other than `"completed"` reads as upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Upcoming,
    Completed,
}

impl AppointmentStatus {
    pub fn from_label(label: &str) -> Self {
        if label == "completed" {
            AppointmentStatus::Completed
        } else {
            AppointmentStatus::Upcoming
        }
    }
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> Self {
        AppointmentStatus::from_label(&value)
    }
}

impl From<&str> for AppointmentStatus {
    fn from(value: &str) -> Self {
        AppointmentStatus::from_label(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEntry {
    pub time: String,
    pub patient: String,
    pub session_type: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub quick_actions: Vec<QuickAction>,
    pub appointments: Vec<AppointmentEntry>,
}

fn stat(title: &str, value: &str, icon: Icon, color: ColorToken) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        icon,
        color,
    }
}

fn action(
    icon: Icon,
    title: &str,
    description: &str,
    target: &str,
    color: ColorToken,
) -> QuickAction {
    QuickAction {
        icon,
        title: title.to_string(),
        description: description.to_string(),
        target: target.to_string(),
        color,
    }
}

fn appointment(time: &str, patient: &str, session_type: &str, status: &str) -> AppointmentEntry {
    AppointmentEntry {
        time: time.to_string(),
        patient: patient.to_string(),
        session_type: session_type.to_string(),
        status: status.into(),
    }
}

impl Default for DashboardData {
    /// Placeholder practice figures shown until a real backend exists.
    fn default() -> Self {
        Self {
            stats: vec![
                stat("Today's Sessions", "8", Icon::Calendar, ColorToken::Blue),
                stat("Active Patients", "24", Icon::Users, ColorToken::Green),
                stat("Unread Messages", "3", Icon::MessageSquare, ColorToken::Purple),
                stat("This Week", "32", Icon::BarChart3, ColorToken::Orange),
            ],
            quick_actions: vec![
                action(
                    Icon::Calendar,
                    "Schedule Appointment",
                    "Book a new session",
                    "/appointments/new",
                    ColorToken::Blue,
                ),
                action(
                    Icon::Users,
                    "Add New Patient",
                    "Register a new patient record",
                    "/patients/new",
                    ColorToken::Green,
                ),
                action(
                    Icon::MessageSquare,
                    "Send Message",
                    "Reach out to a patient",
                    "/messages",
                    ColorToken::Purple,
                ),
                action(
                    Icon::BarChart3,
                    "View Reports",
                    "Review practice analytics",
                    "/reports",
                    ColorToken::Orange,
                ),
            ],
            appointments: vec![
                appointment("9:00 AM", "Sarah Johnson", "CBT Session", "upcoming"),
                appointment("10:30 AM", "Michael Chen", "Initial Consultation", "upcoming"),
                appointment("2:00 PM", "Emma Davis", "Follow-up", "completed"),
                appointment("3:30 PM", "James Wilson", "Group Therapy", "upcoming"),
            ],
        }
    }
}
