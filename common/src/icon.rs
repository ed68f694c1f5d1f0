use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Symbolic icons used on the dashboard, drawn as 24x24 stroke outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Icon {
    Calendar,
    Users,
    MessageSquare,
    BarChart3,
    Clock,
    CheckCircle,
}

impl Icon {
    /// SVG path data for the icon's outline.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::MessageSquare => {
                &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2z"]
            }
            Icon::BarChart3 => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 6v6l4 2"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_icon_has_path_data() {
        for icon in Icon::iter() {
            assert!(!icon.paths().is_empty(), "{icon}");
            assert!(icon.paths().iter().all(|d| !d.is_empty()), "{icon}");
        }
    }
}
