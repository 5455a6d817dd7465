// SPDX-License-Identifier: MPL-2.0
use iced_waypoint::config::{self, Config};
use iced_waypoint::domain::DestinationFields;
use iced_waypoint::i18n::fluent::I18n;
use iced_waypoint::ui::coordinate_entry::{self, Event, Message, State};
use iced_waypoint::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn entry_flow_hands_back_exact_text() {
    let mut state = State::new();

    coordinate_entry::update(&mut state, Message::LatitudeInputChanged("51.5074".to_string()));
    coordinate_entry::update(
        &mut state,
        Message::LongitudeInputChanged("-0.1278".to_string()),
    );

    match coordinate_entry::update(&mut state, Message::Confirm) {
        Event::Submitted(fields) => {
            assert_eq!(
                fields,
                DestinationFields {
                    latitude: "51.5074".to_string(),
                    longitude: "-0.1278".to_string(),
                }
            );
        }
        _ => panic!("expected a submission"),
    }
}

#[test]
fn entry_flow_passes_unvalidated_text_through() {
    let mut state = State::new();

    coordinate_entry::update(&mut state, Message::LongitudeInputChanged("abc".to_string()));

    match coordinate_entry::update(&mut state, Message::Confirm) {
        Event::Submitted(fields) => {
            assert_eq!(fields.latitude, "");
            assert_eq!(fields.longitude, "abc");
        }
        _ => panic!("expected a submission"),
    }
}

#[test]
fn payload_serializes_under_fixed_keys() {
    let fields = DestinationFields {
        latitude: "48.8566".to_string(),
        longitude: "2.3522".to_string(),
    };
    let serialized = toml::to_string(&fields).expect("payload should serialize");
    assert!(serialized.starts_with("latitude = \"48.8566\""));
    assert!(serialized.contains("longitude = \"2.3522\""));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &config_path)
        .expect("Failed to write initial config file");

    let loaded_initial = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded_initial);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &config_path)
        .expect("Failed to write french config file");

    let loaded_french = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded_french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_lang_overrides_config_language() {
    let config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn translations_cover_both_locales() {
    let mut i18n = I18n::default();

    i18n.set_locale("en-US".parse().unwrap());
    assert_eq!(i18n.tr("coordinate-entry-confirm-button"), "Confirm");

    i18n.set_locale("fr".parse().unwrap());
    assert_eq!(i18n.tr("coordinate-entry-confirm-button"), "Confirmer");
}

#[test]
fn config_round_trips_theme_mode() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        language: None,
        theme_mode: ThemeMode::Dark,
    };

    config::save(&config, Some(dir.path())).expect("Failed to save config");
    let (loaded, warning) = config::load(Some(dir.path()));

    assert!(warning.is_none());
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    assert!(loaded.language.is_none());
}
