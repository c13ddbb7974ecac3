use super::*;

// =============================================================
// Theme string forms
// =============================================================

#[test]
fn as_str_round_trips_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn from_attr_only_light_is_light() {
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attr(Some("anything-else")), Theme::Dark);
    assert_eq!(Theme::from_attr(None), Theme::Dark);
}

#[test]
fn flipped_is_an_involution() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn initial_prefers_stored_over_os() {
    let (core, theme) = ThemeCore::initial(Some(Theme::Light), true);
    assert_eq!(theme, Theme::Light);
    assert!(core.has_user_preference());
}

#[test]
fn initial_falls_back_to_os_dark() {
    let (core, theme) = ThemeCore::initial(None, true);
    assert_eq!(theme, Theme::Dark);
    assert!(!core.has_user_preference());
}

#[test]
fn initial_falls_back_to_light_when_os_is_light() {
    let (_, theme) = ThemeCore::initial(None, false);
    assert_eq!(theme, Theme::Light);
}

// =============================================================
// Toggling and OS mirroring
// =============================================================

#[test]
fn toggle_flips_the_live_theme_and_marks_explicit() {
    let (mut core, _) = ThemeCore::initial(None, false);
    assert_eq!(core.toggle(Theme::Light), Theme::Dark);
    assert!(core.has_user_preference());
}

#[test]
fn toggle_follows_the_applied_argument_not_history() {
    let (mut core, _) = ThemeCore::initial(None, false);
    // Something else flipped the root attribute to dark; toggle still flips
    // what is actually applied.
    assert_eq!(core.toggle(Theme::Dark), Theme::Light);
}

#[test]
fn os_change_applies_while_no_explicit_preference() {
    let (core, _) = ThemeCore::initial(None, false);
    assert_eq!(core.os_change(true), Some(Theme::Dark));
    assert_eq!(core.os_change(false), Some(Theme::Light));
}

#[test]
fn os_change_is_ignored_after_a_toggle() {
    let (mut core, _) = ThemeCore::initial(None, false);
    core.toggle(Theme::Light);
    assert_eq!(core.os_change(true), None);
    assert_eq!(core.os_change(false), None);
}

#[test]
fn os_change_is_ignored_when_a_stored_preference_existed() {
    let (core, _) = ThemeCore::initial(Some(Theme::Dark), false);
    assert_eq!(core.os_change(false), None);
}

// =============================================================
// Toggle-button UI descriptor
// =============================================================

#[test]
fn toggle_ui_for_dark() {
    let ui = ToggleUi::for_theme(Theme::Dark);
    assert_eq!(ui.label, "Dark");
    assert_eq!(ui.icon_class, "bi bi-moon-stars-fill");
    assert_eq!(ui.aria_pressed, "true");
    assert_eq!(ui.aria_label, "Switch to light mode");
    assert!(ui.outline_light);
}

#[test]
fn toggle_ui_for_light() {
    let ui = ToggleUi::for_theme(Theme::Light);
    assert_eq!(ui.label, "Light");
    assert_eq!(ui.icon_class, "bi bi-sun-fill");
    assert_eq!(ui.aria_pressed, "false");
    assert_eq!(ui.aria_label, "Switch to dark mode");
    assert!(!ui.outline_light);
}
