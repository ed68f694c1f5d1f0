//! Turns identity, theme and dashboard data into a render-ready model.
//!
//! Every themed class is picked here so that the view layer only lays out
//! what it is given.

use crate::icon::Icon;
use crate::models::{
    AppointmentEntry, AppointmentStatus, ColorToken, CurrentUser, DashboardData, QuickAction,
    StatCard,
};
use crate::navigation::Navigator;
use crate::theme::{palette, ThemeMode};

pub const DASHBOARD_TITLE: &str = "Therapist Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Here's an overview of your practice.";
pub const SCHEDULE_HEADING: &str = "Today's Schedule";
pub const QUICK_ACTIONS_HEADING: &str = "Quick Actions";

const TILE_BASE_CLASS: &str = "w-full text-left p-3 rounded-lg transition-colors";

/// Builds the welcome line. The name is shown as supplied; only a missing
/// name drops the name slot.
pub fn greeting(user: Option<&CurrentUser>) -> String {
    match user.and_then(|u| u.name.as_deref()) {
        Some(name) => format!("Welcome back, Dr. {name}!"),
        None => "Welcome back!".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    Dot,
    Check,
}

impl From<AppointmentStatus> for StatusMarker {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Completed => StatusMarker::Check,
            AppointmentStatus::Upcoming => StatusMarker::Dot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub title: &'static str,
    pub greeting: String,
    pub subtitle: &'static str,
    pub title_class: &'static str,
    pub subtitle_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardModel {
    pub title: String,
    pub value: String,
    pub icon: Icon,
    pub card_class: &'static str,
    pub label_class: &'static str,
    pub value_class: &'static str,
    pub icon_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRowModel {
    pub time: String,
    pub patient: String,
    pub session_type: String,
    pub marker: StatusMarker,
    pub marker_class: String,
    pub row_class: &'static str,
    pub primary_class: &'static str,
    pub secondary_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleModel {
    pub heading: &'static str,
    pub panel_class: &'static str,
    pub heading_class: &'static str,
    pub rows: Vec<ScheduleRowModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionTile {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub target: String,
    pub tile_class: String,
    pub icon_class: String,
    pub title_class: &'static str,
    pub description_class: &'static str,
}

impl QuickActionTile {
    /// Hands the tile's target to the navigator, once.
    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &N) {
        navigator.navigate(&self.target);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickActionsModel {
    pub heading: &'static str,
    pub panel_class: &'static str,
    pub heading_class: &'static str,
    pub tiles: Vec<QuickActionTile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardModel {
    pub theme: ThemeMode,
    pub page_class: &'static str,
    pub header: HeaderModel,
    pub stats: Vec<StatCardModel>,
    pub schedule: ScheduleModel,
    pub actions: QuickActionsModel,
}

fn stat_card(card: &StatCard, mode: ThemeMode) -> StatCardModel {
    StatCardModel {
        title: card.title.clone(),
        value: card.value.clone(),
        icon: card.icon,
        card_class: palette::STAT_CARD.pick(mode),
        label_class: palette::STAT_LABEL.pick(mode),
        value_class: palette::STAT_VALUE.pick(mode),
        icon_class: format!("h-8 w-8 {}", card.color.accent_class(mode)),
    }
}

fn marker_class(marker: StatusMarker, mode: ThemeMode) -> String {
    match marker {
        StatusMarker::Check => format!("h-5 w-5 {}", ColorToken::Green.accent_class(mode)),
        StatusMarker::Dot => {
            let fill = if mode.is_dark() { "bg-blue-400" } else { "bg-blue-600" };
            format!("h-2 w-2 rounded-full {fill}")
        }
    }
}

fn schedule_row(entry: &AppointmentEntry, mode: ThemeMode) -> ScheduleRowModel {
    let marker = StatusMarker::from(entry.status);
    ScheduleRowModel {
        time: entry.time.clone(),
        patient: entry.patient.clone(),
        session_type: entry.session_type.clone(),
        marker,
        marker_class: marker_class(marker, mode),
        row_class: palette::SCHEDULE_ROW.pick(mode),
        primary_class: palette::PRIMARY_TEXT.pick(mode),
        secondary_class: palette::SECONDARY_TEXT.pick(mode),
    }
}

fn quick_action_tile(action: &QuickAction, mode: ThemeMode) -> QuickActionTile {
    QuickActionTile {
        icon: action.icon,
        title: action.title.clone(),
        description: action.description.clone(),
        target: action.target.clone(),
        tile_class: format!("{TILE_BASE_CLASS} {}", action.color.tile_class(mode)),
        icon_class: format!("h-5 w-5 {}", action.color.accent_class(mode)),
        title_class: palette::PRIMARY_TEXT.pick(mode),
        description_class: palette::SECONDARY_TEXT.pick(mode),
    }
}

pub fn compose_dashboard(
    user: Option<&CurrentUser>,
    mode: ThemeMode,
    data: &DashboardData,
) -> DashboardModel {
    DashboardModel {
        theme: mode,
        page_class: palette::PAGE.pick(mode),
        header: HeaderModel {
            title: DASHBOARD_TITLE,
            greeting: greeting(user),
            subtitle: DASHBOARD_SUBTITLE,
            title_class: palette::HEADER_TITLE.pick(mode),
            subtitle_class: palette::HEADER_SUBTITLE.pick(mode),
        },
        stats: data.stats.iter().map(|card| stat_card(card, mode)).collect(),
        schedule: ScheduleModel {
            heading: SCHEDULE_HEADING,
            panel_class: palette::PANEL.pick(mode),
            heading_class: palette::PANEL_HEADING.pick(mode),
            rows: data
                .appointments
                .iter()
                .map(|entry| schedule_row(entry, mode))
                .collect(),
        },
        actions: QuickActionsModel {
            heading: QUICK_ACTIONS_HEADING,
            panel_class: palette::PANEL.pick(mode),
            heading_class: palette::PANEL_HEADING.pick(mode),
            tiles: data
                .quick_actions
                .iter()
                .map(|action| quick_action_tile(action, mode))
                .collect(),
        },
    }
}
