//! Local UI chrome state (theme, menu, scroll indicators, loading screen).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat session so page
//! chrome can evolve independently of conversation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Startup overlay progression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Overlay fully shown.
    #[default]
    Visible,
    /// `loaded` class applied; overlay fading out.
    Fading,
    /// `display: none`.
    Hidden,
}

impl LoadingPhase {
    /// Delay before the overlay starts fading, in milliseconds.
    pub const FADE_DELAY_MS: u32 = 1000;
    /// Fade duration before the overlay is removed, in milliseconds.
    pub const HIDE_DELAY_MS: u32 = 500;

    /// Whether `document.readyState` means the window `load` event has fired.
    pub fn page_loaded(ready_state: &str) -> bool {
        ready_state == "complete"
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Visible => Self::Fading,
            Self::Fading | Self::Hidden => Self::Hidden,
        }
    }
}

/// UI state for theme, navigation, and scroll-driven chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
    pub loading: LoadingPhase,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recompute scroll-driven fields. Returns `true` if anything changed.
    pub fn apply_scroll(&mut self, active_section: Option<&str>, scroll_top_visible: bool) -> bool {
        let changed =
            self.active_section.as_deref() != active_section || self.scroll_top_visible != scroll_top_visible;
        if changed {
            self.active_section = active_section.map(str::to_owned);
            self.scroll_top_visible = scroll_top_visible;
        }
        changed
    }
}
