#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn toggle_twice_restores_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(toggle(toggle(theme)), theme);
    }
}

#[test]
fn stored_values_match_data_theme_attribute() {
    assert_eq!(toggle(Theme::Light).as_str(), "dark");
    assert_eq!(toggle(Theme::Dark).as_str(), "light");
}
