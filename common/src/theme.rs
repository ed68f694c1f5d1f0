use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads a theme flag. Only `"dark"` selects dark mode.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// A pair of mutually exclusive style classes for one themed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemedClass {
    pub light: &'static str,
    pub dark: &'static str,
}

impl ThemedClass {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    pub fn pick(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

pub mod palette {
    use super::ThemedClass;

    pub const NAV: ThemedClass = ThemedClass::new(
        "flex items-center justify-between px-6 py-4 bg-white border-b border-gray-200 text-gray-900",
        "flex items-center justify-between px-6 py-4 bg-gray-800 border-b border-gray-700 text-white",
    );
    pub const PAGE: ThemedClass = ThemedClass::new(
        "min-h-screen bg-gray-50 p-6",
        "min-h-screen bg-gray-900 p-6",
    );
    pub const HEADER_TITLE: ThemedClass = ThemedClass::new(
        "text-3xl font-bold text-gray-900 mb-2",
        "text-3xl font-bold text-white mb-2",
    );
    pub const HEADER_SUBTITLE: ThemedClass =
        ThemedClass::new("text-gray-600", "text-gray-300");
    pub const STAT_CARD: ThemedClass = ThemedClass::new(
        "bg-white rounded-lg shadow-sm p-6 border border-gray-200",
        "bg-gray-800 rounded-lg shadow-sm p-6 border border-gray-700",
    );
    pub const STAT_LABEL: ThemedClass = ThemedClass::new(
        "text-sm font-medium text-gray-600",
        "text-sm font-medium text-gray-400",
    );
    pub const STAT_VALUE: ThemedClass = ThemedClass::new(
        "text-2xl font-bold text-gray-900",
        "text-2xl font-bold text-white",
    );
    pub const PANEL: ThemedClass = ThemedClass::new(
        "bg-white rounded-lg shadow-sm border border-gray-200",
        "bg-gray-800 rounded-lg shadow-sm border border-gray-700",
    );
    pub const PANEL_HEADING: ThemedClass = ThemedClass::new(
        "p-6 border-b border-gray-200 text-lg font-semibold text-gray-900",
        "p-6 border-b border-gray-700 text-lg font-semibold text-white",
    );
    pub const SCHEDULE_ROW: ThemedClass = ThemedClass::new(
        "flex items-center justify-between p-4 bg-gray-50 rounded-lg",
        "flex items-center justify-between p-4 bg-gray-700 rounded-lg",
    );
    pub const PRIMARY_TEXT: ThemedClass = ThemedClass::new(
        "text-sm font-medium text-gray-900",
        "text-sm font-medium text-gray-100",
    );
    pub const SECONDARY_TEXT: ThemedClass =
        ThemedClass::new("text-xs text-gray-500", "text-xs text-gray-400");

    /// Every themed element, by name.
    pub const ALL: &[(&str, ThemedClass)] = &[
        ("nav", NAV),
        ("page", PAGE),
        ("header_title", HEADER_TITLE),
        ("header_subtitle", HEADER_SUBTITLE),
        ("stat_card", STAT_CARD),
        ("stat_label", STAT_LABEL),
        ("stat_value", STAT_VALUE),
        ("panel", PANEL),
        ("panel_heading", PANEL_HEADING),
        ("schedule_row", SCHEDULE_ROW),
        ("primary_text", PRIMARY_TEXT),
        ("secondary_text", SECONDARY_TEXT),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_element_has_distinct_light_and_dark_classes() {
        for (name, class) in palette::ALL {
            assert!(!class.pick(ThemeMode::Light).is_empty(), "{name} light");
            assert!(!class.pick(ThemeMode::Dark).is_empty(), "{name} dark");
            assert_ne!(class.light, class.dark, "{name}");
        }
    }

    #[test]
    fn dark_flag_selects_dark() {
        assert_eq!(ThemeMode::from_flag("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_flag("Dark"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_flag("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_flag(""), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    proptest! {
        #[test]
        fn anything_but_dark_is_light(flag in "\\PC*") {
            prop_assume!(flag != "dark");
            prop_assert_eq!(ThemeMode::from_flag(&flag), ThemeMode::Light);
        }
    }
}
