//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod avatar;
pub mod loading;
pub mod nav;
pub mod toast;

pub use avatar::Avatar;
pub use loading::{render_loadable, InlineLoading, Loading};
pub use nav::Nav;
pub use toast::Toast;

use campusconnect::views::Tone;

/// Text colour for a tone
pub fn tone_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "text-green-500",
        Tone::Warning => "text-yellow-500",
        Tone::Danger => "text-red-500",
    }
}

/// Badge background for a tone
pub fn tone_badge(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "bg-green-100 text-green-700 dark:bg-green-900/40 dark:text-green-300",
        Tone::Warning => "bg-yellow-100 text-yellow-700 dark:bg-yellow-900/40 dark:text-yellow-300",
        Tone::Danger => "bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300",
    }
}

pub const PANEL: &str = "bg-white dark:bg-gray-800 rounded-xl shadow p-6";
pub const INPUT: &str = "w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-2 \
                         border border-gray-300 dark:border-gray-600 focus:border-blue-500 focus:outline-none";
pub const BUTTON: &str = "px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-500 \
                          text-white rounded-lg font-medium transition-colors";
pub const BUTTON_DANGER: &str = "px-3 py-1 bg-red-600 hover:bg-red-700 text-white rounded-lg text-sm";

#[cfg(test)]
mod tests {
    use super::*;
    use campusconnect::views;

    #[test]
    fn test_trust_score_colours() {
        assert_eq!(tone_text(views::trust_tone(85)), "text-green-500");
        assert_eq!(tone_text(views::trust_tone(40)), "text-yellow-500");
        assert_eq!(tone_text(views::trust_tone(12)), "text-red-500");
    }

    #[test]
    fn test_attendance_badges() {
        assert!(tone_badge(views::status_tone("Low Attendance")).starts_with("bg-red-100"));
        assert!(tone_badge(views::status_tone("Risk")).starts_with("bg-yellow-100"));
        assert!(tone_badge(views::status_tone("Safe")).starts_with("bg-green-100"));
    }
}
