use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_and_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.menu_open);
    assert_eq!(state.active_section, None);
    assert!(!state.scroll_top_visible);
    assert_eq!(state.loading, LoadingPhase::Visible);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips_and_close_menu_clears() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);

    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn apply_scroll_reports_changes_only() {
    let mut state = UiState::default();
    assert!(state.apply_scroll(Some("about"), false));
    assert_eq!(state.active_section.as_deref(), Some("about"));
    assert!(!state.apply_scroll(Some("about"), false));
    assert!(state.apply_scroll(Some("about"), true));
    assert!(state.scroll_top_visible);
    assert!(state.apply_scroll(None, true));
    assert_eq!(state.active_section, None);
}

// =============================================================
// LoadingPhase
// =============================================================

#[test]
fn loading_phase_progresses_and_stops_at_hidden() {
    let phase = LoadingPhase::default();
    assert_eq!(phase, LoadingPhase::Visible);
    assert_eq!(phase.next(), LoadingPhase::Fading);
    assert_eq!(phase.next().next(), LoadingPhase::Hidden);
    assert_eq!(LoadingPhase::Hidden.next(), LoadingPhase::Hidden);
}

#[test]
fn loading_delays_match_overlay_timing() {
    assert_eq!(LoadingPhase::FADE_DELAY_MS, 1000);
    assert_eq!(LoadingPhase::HIDE_DELAY_MS, 500);
}

#[test]
fn fade_waits_for_complete_ready_state() {
    assert!(LoadingPhase::page_loaded("complete"));
    assert!(!LoadingPhase::page_loaded("interactive"));
    assert!(!LoadingPhase::page_loaded("loading"));
}
