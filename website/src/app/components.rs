pub mod icon;
pub mod theme_toggle;
