//! Light/dark theme initialization and toggle.
//!
//! Reads the user's preference from storage and applies the `dark-theme`
//! class to `<body>`. Toggle writes back to storage, updates the class, and
//! briefly adds `theme-transition` so colors animate. Requires a browser
//! environment for the DOM side.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

use super::storage::ThemeStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "portfolio-theme";

#[cfg(feature = "hydrate")]
const TRANSITION_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Pick the startup theme from a stored value and the system preference.
    ///
    /// Only an explicit `"dark"` or an absent value with a dark system
    /// preference yields dark; anything else stored means light.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            None if system_prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Read the stored preference, falling back to `prefers-color-scheme`.
pub fn read_preference(store: &impl ThemeStore) -> Theme {
    Theme::resolve(store.get(STORAGE_KEY).as_deref(), system_prefers_dark())
}

/// Persist `theme` under the preference key.
pub fn save_preference(store: &impl ThemeStore, theme: Theme) {
    store.set(STORAGE_KEY, theme.as_str());
}

/// Flip the theme, apply it, and persist the result.
pub fn toggle(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    animate_transition();
    save_preference(store, next);
    next
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark-theme` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let result = if theme.is_dark() {
            class_list.add_1("dark-theme")
        } else {
            class_list.remove_1("dark-theme")
        };
        if let Err(e) = result {
            log::warn!("applying {} theme failed: {e:?}", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn animate_transition() {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if body.class_list().add_1("theme-transition").is_err() {
            return;
        }
        gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
            if let Err(e) = body.class_list().remove_1("theme-transition") {
                log::debug!("clearing theme transition failed: {e:?}");
            }
        })
        .forget();
    }
}
