//! Mutable application state: emotion counters, camera orientation and display
//! settings.
//!
//! Nothing here triggers a render. Callers mutate the state and then ask the
//! pipeline for a new frame, so every frame is a pure function of a snapshot.

use crate::constants::{
    AUTO_ROTATE_AZIMUTH_RATE, AUTO_ROTATE_ELEVATION_BASE, AUTO_ROTATE_ELEVATION_SWING,
    AZIMUTH_PERIOD, DEFAULT_AZIMUTH, DEFAULT_ELEVATION, ELEVATION_MAX, ELEVATION_MIN,
};
use crate::emotion::{index_of, Emotion, EMOTIONS, EMOTION_COUNT};
use crate::error::{LandscapeError, Result};
use crate::theme::{ColorTheme, Rgb};

/// Camera orientation in degrees plus the auto-rotate driver variable.
///
/// Elevation always lies in \[0, 180\] and azimuth in \[0, 360).
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    elevation: f64,
    azimuth: f64,
    auto_rotate_phase: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
            auto_rotate_phase: 0.0,
        }
    }
}

impl CameraState {
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn auto_rotate_phase(&self) -> f64 {
        self.auto_rotate_phase
    }

    /// Clamp elevation, wrap azimuth. Non-finite inputs leave that angle as it was.
    pub fn set(&mut self, elevation: f64, azimuth: f64) {
        if elevation.is_finite() {
            self.elevation = clamp_elevation(elevation);
        }
        if azimuth.is_finite() {
            self.azimuth = wrap_azimuth(azimuth);
        }
    }

    /// Pointer drag: azimuth wraps, elevation stops at the poles.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.set(self.elevation + dy, self.azimuth + dx);
    }

    pub fn restart_auto_rotate(&mut self) {
        self.auto_rotate_phase = 0.0;
    }

    /// Closed-form sweep: the angles are derived from the phase, not integrated.
    pub fn advance_auto_rotate(&mut self, dt: f64) {
        self.auto_rotate_phase += dt;
        let phase = self.auto_rotate_phase;
        let azimuth = (phase * AUTO_ROTATE_AZIMUTH_RATE) % AZIMUTH_PERIOD;
        let elevation = AUTO_ROTATE_ELEVATION_BASE + AUTO_ROTATE_ELEVATION_SWING * phase.sin();
        // Written through the clamped setter, so a dip below 0 is cut off.
        self.set(elevation, azimuth);
    }
}

#[inline]
pub fn clamp_elevation(elevation: f64) -> f64 {
    elevation.clamp(ELEVATION_MIN, ELEVATION_MAX)
}

#[inline]
pub fn wrap_azimuth(azimuth: f64) -> f64 {
    let wrapped = azimuth.rem_euclid(AZIMUTH_PERIOD);
    // rem_euclid rounds tiny negatives up to exactly the period
    if wrapped >= AZIMUTH_PERIOD {
        0.0
    } else {
        wrapped
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayConfig {
    pub theme: ColorTheme,
    pub background: Rgb,
}

/// The single state object of the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmotionState {
    counts: [u64; EMOTION_COUNT],
    pub camera: CameraState,
    pub display: DisplayConfig,
}

impl EmotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog entries with their current counts, in catalog order.
    pub fn emotions(&self) -> impl Iterator<Item = (&'static Emotion, u64)> + '_ {
        EMOTIONS.iter().zip(self.counts.iter().copied())
    }

    pub fn count(&self, name: &str) -> Result<u64> {
        index_of(name)
            .map(|i| self.counts[i])
            .ok_or_else(|| LandscapeError::UnknownEmotion(name.to_string()))
    }

    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Adds one to `name`'s counter. Unknown names leave every count untouched.
    pub fn increment(&mut self, name: &str) -> Result<()> {
        let i = index_of(name).ok_or_else(|| LandscapeError::UnknownEmotion(name.to_string()))?;
        self.counts[i] = self.counts[i].saturating_add(1);
        log::info!("[emotion] {} -> {}", name, self.counts[i]);
        Ok(())
    }

    pub fn reset_all(&mut self) {
        self.counts = [0; EMOTION_COUNT];
        log::info!("[emotion] all counts reset");
    }

    pub fn set_camera(&mut self, elevation: f64, azimuth: f64) {
        self.camera.set(elevation, azimuth);
    }

    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.camera.drag(dx, dy);
    }

    pub fn restart_auto_rotate(&mut self) {
        self.camera.restart_auto_rotate();
    }

    pub fn advance_auto_rotate(&mut self, dt: f64) {
        self.camera.advance_auto_rotate(dt);
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.display.theme = theme;
    }

    /// `None` is a dismissed picker and keeps the current background.
    pub fn choose_background(&mut self, choice: Option<Rgb>) {
        if let Some(color) = choice {
            self.display.background = color;
        }
    }
}
