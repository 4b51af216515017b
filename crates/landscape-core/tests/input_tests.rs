// Host-side tests for the shared key map.

use landscape_core::input::*;
use landscape_core::*;

#[test]
fn letters_map_to_catalog_order() {
    assert_eq!(emotion_index_for_key("a"), Some(0));
    assert_eq!(emotion_index_for_key("A"), Some(0));
    assert_eq!(emotion_index_for_key("o"), Some(14));
    assert_eq!(emotion_index_for_key("p"), None);
    assert_eq!(emotion_index_for_key("ab"), None);
    assert_eq!(emotion_index_for_key(""), None);
    assert_eq!(emotion_index_for_key("1"), None);
}

#[test]
fn key_labels_round_trip() {
    for i in 0..EMOTION_COUNT {
        let key = key_for_emotion(i).unwrap();
        assert_eq!(emotion_index_for_key(&key.to_string()), Some(i));
    }
    assert_eq!(key_for_emotion(EMOTION_COUNT), None);
}

#[test]
fn legend_pairs_keys_with_names_and_colors() {
    let legend = key_legend();
    assert_eq!(legend.len(), EMOTION_COUNT);
    assert_eq!(legend[0], "a Happy #FFD700");
    assert_eq!(legend[9], "j In Love #FF69B4");
    assert_eq!(legend[14], "o Stressed #CD5C5C");
}

#[test]
fn digits_select_themes() {
    assert_eq!(theme_for_digit("1"), Some(ColorTheme::Plasma));
    assert_eq!(theme_for_digit("2"), Some(ColorTheme::Viridis));
    assert_eq!(theme_for_digit("5"), Some(ColorTheme::Cividis));
    assert_eq!(theme_for_digit("6"), None);
    assert_eq!(theme_for_digit("0"), None);
    assert_eq!(theme_for_digit("12"), None);
}

#[test]
fn command_table() {
    assert_eq!(
        command_for_key("c"),
        Some(Command::Increment("Angry".to_string()))
    );
    assert_eq!(
        command_for_key("J"),
        Some(Command::Increment("In Love".to_string()))
    );
    assert_eq!(
        command_for_key("3"),
        Some(Command::SetTheme(ColorTheme::Magma))
    );
    assert_eq!(command_for_key(" "), Some(Command::ToggleAutoRotate));
    assert_eq!(command_for_key("Backspace"), Some(Command::ResetAll));
    assert_eq!(command_for_key("Delete"), Some(Command::ResetAll));
    assert_eq!(command_for_key("Tab"), Some(Command::NextBackground));
    assert_eq!(command_for_key("Enter"), Some(Command::ReportTally));
    assert_eq!(
        command_for_key("ArrowLeft"),
        Some(Command::NudgeCamera {
            d_elevation: 0.0,
            d_azimuth: -CAMERA_NUDGE_DEG,
        })
    );
    assert_eq!(command_for_key("Escape"), None);
    assert_eq!(command_for_key("z"), None);
}

#[test]
fn every_letter_command_names_a_real_emotion() {
    let mut state = EmotionState::new();
    for c in 'a'..='o' {
        match command_for_key(&c.to_string()) {
            Some(Command::Increment(name)) => state.increment(&name).unwrap(),
            other => panic!("unexpected command for {c}: {other:?}"),
        }
    }
    assert!(state.emotions().all(|(_, count)| count == 1));
}
