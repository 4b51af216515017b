//! Mutation entry points for a UI shell.
//!
//! Each entry point changes the state and hands back the render the shell
//! should perform, if any. The session never draws on its own; the shell
//! decides when to call [`Session::render`].

use crate::constants::SETTLE_DELAY_MS;
use crate::error::Result;
use crate::pipeline::{LandscapePipeline, Renderer};
use crate::rotate::AutoRotateDriver;
use crate::state::EmotionState;
use crate::theme::{ColorTheme, Rgb, BACKGROUND_PRESETS};
use instant::Instant;
use std::time::Duration;

/// Which quality the next frame should be drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub interactive: bool,
}

impl RenderRequest {
    pub const SETTLED: RenderRequest = RenderRequest { interactive: false };
    pub const INTERACTIVE: RenderRequest = RenderRequest { interactive: true };
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Increment(String),
    ResetAll,
    ToggleAutoRotate,
    SetTheme(ColorTheme),
    NextBackground,
    NudgeCamera { d_elevation: f64, d_azimuth: f64 },
    ReportTally,
}

pub struct Session {
    state: EmotionState,
    pipeline: LandscapePipeline,
    rotation: AutoRotateDriver,
    dragging: bool,
    settle_at: Option<Instant>,
    settle_delay: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LandscapePipeline::default())
    }
}

impl Session {
    pub fn new(pipeline: LandscapePipeline) -> Self {
        Self {
            state: EmotionState::new(),
            pipeline,
            rotation: AutoRotateDriver::default(),
            dragging: false,
            settle_at: None,
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }

    pub fn state(&self) -> &EmotionState {
        &self.state
    }

    pub fn pipeline(&self) -> &LandscapePipeline {
        &self.pipeline
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.rotation.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn handle(&mut self, command: Command, now: Instant) -> Result<Option<RenderRequest>> {
        let request = match command {
            Command::Increment(name) => {
                self.state.increment(&name)?;
                Some(RenderRequest::SETTLED)
            }
            Command::ResetAll => {
                self.state.reset_all();
                Some(RenderRequest::SETTLED)
            }
            Command::ToggleAutoRotate => self.toggle_auto_rotate(now),
            Command::SetTheme(theme) => {
                self.state.set_theme(theme);
                log::info!("[keys] theme={}", theme.name());
                Some(RenderRequest::SETTLED)
            }
            Command::NextBackground => {
                let next = next_background(self.state.display.background);
                self.choose_background(Some(next))
            }
            Command::NudgeCamera {
                d_elevation,
                d_azimuth,
            } => {
                let cam = &self.state.camera;
                let (elevation, azimuth) = (cam.elevation() + d_elevation, cam.azimuth() + d_azimuth);
                self.state.set_camera(elevation, azimuth);
                self.settle_at = Some(now + self.settle_delay);
                Some(RenderRequest::INTERACTIVE)
            }
            Command::ReportTally => {
                log::info!("[emotion] {}", self.button_labels().join(", "));
                None
            }
        };
        Ok(request)
    }

    fn toggle_auto_rotate(&mut self, now: Instant) -> Option<RenderRequest> {
        if self.rotation.is_running() {
            self.rotation.stop();
            Some(RenderRequest::SETTLED)
        } else {
            self.rotation.start(&mut self.state, now);
            self.settle_at = None;
            // The first tick is due now; the next `tick` call draws it.
            None
        }
    }

    /// Result of a color picker. `None` (dismissed) changes nothing.
    pub fn choose_background(&mut self, choice: Option<Rgb>) -> Option<RenderRequest> {
        let color = choice?;
        self.state.choose_background(Some(color));
        log::info!("[keys] background={}", color.to_hex_string());
        Some(RenderRequest::SETTLED)
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.settle_at = None;
    }

    /// Pointer moved by `(dx, dy)` pixels since the last sample, `dy` positive upwards.
    pub fn drag(&mut self, dx: f64, dy: f64) -> Option<RenderRequest> {
        if !self.dragging {
            return None;
        }
        self.state.apply_drag(dx, dy);
        Some(RenderRequest::INTERACTIVE)
    }

    pub fn end_drag(&mut self) -> Option<RenderRequest> {
        std::mem::take(&mut self.dragging).then_some(RenderRequest::SETTLED)
    }

    /// Timer work: auto-rotate ticks and the delayed settle after a nudge.
    pub fn tick(&mut self, now: Instant) -> Option<RenderRequest> {
        if self.rotation.poll(&mut self.state, now) {
            return Some(RenderRequest::INTERACTIVE);
        }
        match self.settle_at {
            Some(at) if now >= at && !self.dragging && !self.rotation.is_running() => {
                self.settle_at = None;
                Some(RenderRequest::SETTLED)
            }
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.rotation.next_deadline(), self.settle_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, request: RenderRequest, renderer: &mut R) -> Result<()> {
        self.pipeline.render(&self.state, request.interactive, renderer)
    }

    /// "Happy (3)" style labels in catalog order.
    pub fn button_labels(&self) -> Vec<String> {
        self.state
            .emotions()
            .map(|(emotion, count)| format!("{} ({})", emotion.name, count))
            .collect()
    }
}

fn next_background(current: Rgb) -> Rgb {
    let next = BACKGROUND_PRESETS
        .iter()
        .position(|c| *c == current)
        .map_or(0, |i| (i + 1) % BACKGROUND_PRESETS.len());
    BACKGROUND_PRESETS[next]
}
