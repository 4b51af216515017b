//! Key bindings for the shell.
//!
//! Key names follow the DOM `KeyboardEvent.key` spelling ("a", "1", " ",
//! "ArrowUp", "Backspace"), so any front-end can translate its own key events
//! into these strings and share one table.

use crate::constants::CAMERA_NUDGE_DEG;
use crate::emotion::{EMOTIONS, EMOTION_COUNT};
use crate::session::Command;
use crate::theme::ColorTheme;

const FIRST_EMOTION_KEY: u8 = b'a';

/// `a`…`o` map to the catalog in order.
#[inline]
pub fn emotion_index_for_key(key: &str) -> Option<usize> {
    let &[c] = key.as_bytes() else {
        return None;
    };
    let idx = c.to_ascii_lowercase().checked_sub(FIRST_EMOTION_KEY)? as usize;
    (idx < EMOTION_COUNT).then_some(idx)
}

/// Inverse of [`emotion_index_for_key`].
#[inline]
pub fn key_for_emotion(index: usize) -> Option<char> {
    (index < EMOTION_COUNT).then(|| (FIRST_EMOTION_KEY + index as u8) as char)
}

/// "a Happy #FFD700" per catalog entry, for the startup help line.
pub fn key_legend() -> Vec<String> {
    EMOTIONS
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            let key = key_for_emotion(i)?;
            Some(format!("{key} {} {}", e.name, e.color.to_hex_string()))
        })
        .collect()
}

/// `1`…`5` pick themes in palette order.
#[inline]
pub fn theme_for_digit(key: &str) -> Option<ColorTheme> {
    let &[c @ b'1'..=b'9'] = key.as_bytes() else {
        return None;
    };
    ColorTheme::ALL.get((c - b'1') as usize).copied()
}

pub fn command_for_key(key: &str) -> Option<Command> {
    if let Some(i) = emotion_index_for_key(key) {
        return Some(Command::Increment(EMOTIONS[i].name.to_string()));
    }
    if let Some(theme) = theme_for_digit(key) {
        return Some(Command::SetTheme(theme));
    }
    let cmd = match key {
        " " => Command::ToggleAutoRotate,
        "Backspace" | "Delete" => Command::ResetAll,
        "Tab" => Command::NextBackground,
        "Enter" => Command::ReportTally,
        "ArrowUp" => Command::NudgeCamera {
            d_elevation: CAMERA_NUDGE_DEG,
            d_azimuth: 0.0,
        },
        "ArrowDown" => Command::NudgeCamera {
            d_elevation: -CAMERA_NUDGE_DEG,
            d_azimuth: 0.0,
        },
        "ArrowLeft" => Command::NudgeCamera {
            d_elevation: 0.0,
            d_azimuth: -CAMERA_NUDGE_DEG,
        },
        "ArrowRight" => Command::NudgeCamera {
            d_elevation: 0.0,
            d_azimuth: CAMERA_NUDGE_DEG,
        },
        _ => return None,
    };
    Some(cmd)
}
