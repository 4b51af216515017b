use crate::theme::Rgb;
use std::f64::consts::PI;

/// Fixed point on the unit sphere: azimuthal `theta` in \[0, 2π), polar `phi` in \[0, π\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub theta: f64,
    pub phi: f64,
}

impl Anchor {
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }
}

/// Static catalog entry. The color only labels buttons; it never tints the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emotion {
    pub name: &'static str,
    pub anchor: Anchor,
    pub color: Rgb,
}

const fn emotion(name: &'static str, theta: f64, phi: f64, color: u32) -> Emotion {
    Emotion {
        name,
        anchor: Anchor::new(theta, phi),
        color: Rgb::from_hex(color),
    }
}

pub const EMOTION_COUNT: usize = 15;

pub const EMOTIONS: [Emotion; EMOTION_COUNT] = [
    emotion("Happy", 0.0, PI / 3.0, 0xFFD700),
    emotion("Sad", 0.0, 2.0 * PI / 3.0, 0x4169E1),
    emotion("Angry", PI / 2.0, PI / 4.0, 0xFF4500),
    emotion("Calm", 3.0 * PI / 2.0, PI / 4.0, 0x98FB98),
    emotion("Anxious", PI / 2.0, 3.0 * PI / 4.0, 0xDDA0DD),
    emotion("Peaceful", 3.0 * PI / 2.0, 3.0 * PI / 4.0, 0x87CEEB),
    emotion("Excited", PI / 4.0, PI / 6.0, 0xFFA500),
    emotion("Bored", 7.0 * PI / 4.0, 5.0 * PI / 6.0, 0x808080),
    emotion("Jealous", 2.0 * PI / 3.0, PI / 2.0, 0x32CD32),
    emotion("In Love", 4.0 * PI / 3.0, PI / 2.0, 0xFF69B4),
    emotion("Tired", PI, PI / 2.0, 0x8B4513),
    emotion("Confident", 0.0, PI / 6.0, 0xFFD700),
    emotion("Insecure", 0.0, 5.0 * PI / 6.0, 0x483D8B),
    emotion("Grateful", PI / 3.0, PI / 3.0, 0x9370DB),
    emotion("Stressed", 5.0 * PI / 3.0, 2.0 * PI / 3.0, 0xCD5C5C),
];

/// Catalog index for `name` (exact, case-sensitive match).
pub fn index_of(name: &str) -> Option<usize> {
    EMOTIONS.iter().position(|e| e.name == name)
}
