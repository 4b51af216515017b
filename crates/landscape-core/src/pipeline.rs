//! Deformation-and-render pipeline.
//!
//! Every call recomputes the whole mesh from the state snapshot it is handed.
//! There is no cache between frames; at ≤10⁴ nodes a full rebuild is cheaper
//! than tracking what changed.

use crate::constants::{
    AMPLITUDE_PER_COUNT, BASE_RADIUS, BUMP_SIGMA, LANDSCAPE_TITLE, MESH_DENSITY_INTERACTIVE,
    MESH_DENSITY_MIN, MESH_DENSITY_SETTLED, SURFACE_ALPHA,
};
use crate::emotion::Anchor;
use crate::error::{LandscapeError, Result};
use crate::field::gaussian_bump;
use crate::mesh::{phi_samples, theta_samples, LandscapeMesh};
use crate::state::EmotionState;
use crate::theme::{ColorTheme, Rgb};

/// Pipeline tuning. `Default` uses the values in `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineParams {
    pub interactive_resolution: usize,
    pub settled_resolution: usize,
    pub sigma: f64,
    pub amplitude_per_count: f64,
    pub surface_alpha: f32,
    pub title: &'static str,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            interactive_resolution: MESH_DENSITY_INTERACTIVE,
            settled_resolution: MESH_DENSITY_SETTLED,
            sigma: BUMP_SIGMA,
            amplitude_per_count: AMPLITUDE_PER_COUNT,
            surface_alpha: SURFACE_ALPHA,
            title: LANDSCAPE_TITLE,
        }
    }
}

impl PipelineParams {
    /// Rejects values that would put NaN or infinities into the mesh.
    pub fn validate(&self) -> Result<()> {
        check_resolution(self.interactive_resolution)?;
        check_resolution(self.settled_resolution)?;
        check_param("sigma", self.sigma, |v| v > 0.0)?;
        check_param("amplitude_per_count", self.amplitude_per_count, |v| v >= 0.0)?;
        check_param("surface_alpha", f64::from(self.surface_alpha), |v| {
            (0.0..=1.0).contains(&v)
        })
    }

    /// Coarse grid while something is moving, fine grid once settled.
    pub fn resolution_for(&self, interactive: bool) -> usize {
        if interactive {
            self.interactive_resolution
        } else {
            self.settled_resolution
        }
    }
}

fn check_resolution(resolution: usize) -> Result<()> {
    if resolution < MESH_DENSITY_MIN {
        return Err(LandscapeError::DegenerateResolution {
            resolution,
            min: MESH_DENSITY_MIN,
        });
    }
    Ok(())
}

fn check_param(name: &'static str, value: f64, ok: impl Fn(f64) -> bool) -> Result<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(LandscapeError::InvalidParameter { name, value })
    }
}

/// Title overlay requested on settled frames.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleOverlay {
    pub text: &'static str,
    pub color: Rgb,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub mesh: LandscapeMesh,
    pub theme: ColorTheme,
    pub background: Rgb,
    pub shade: bool,
    pub antialias: bool,
    pub title: Option<TitleOverlay>,
    pub elevation: f64,
    pub azimuth: f64,
    pub alpha: f32,
    pub interactive: bool,
}

/// Drawing backend consumed by the pipeline.
pub trait Renderer {
    fn submit(&mut self, frame: &RenderFrame) -> anyhow::Result<()>;
}

#[derive(Clone, Copy)]
struct ActiveBump {
    anchor: Anchor,
    amplitude: f64,
}

#[derive(Clone, Debug, Default)]
pub struct LandscapePipeline {
    params: PipelineParams,
}

impl LandscapePipeline {
    pub fn new(params: PipelineParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    fn active_bumps(&self, state: &EmotionState) -> Vec<ActiveBump> {
        state
            .emotions()
            .filter(|(_, count)| *count > 0)
            .map(|(emotion, count)| ActiveBump {
                anchor: emotion.anchor,
                amplitude: self.params.amplitude_per_count * count as f64,
            })
            .collect()
    }

    /// Radius of the deformed surface at an arbitrary angular position.
    pub fn radius_at(&self, state: &EmotionState, theta: f64, phi: f64) -> f64 {
        let sigma = self.params.sigma;
        self.active_bumps(state).iter().fold(BASE_RADIUS, |r, b| {
            r + gaussian_bump(theta, phi, b.anchor, b.amplitude, sigma)
        })
    }

    /// Samples the radius field on a `resolution × resolution` grid.
    ///
    /// With `interactive` set and every count at zero the accumulation is
    /// skipped; the result is the same unit sphere the full loop would give.
    pub fn mesh_at_resolution(
        &self,
        state: &EmotionState,
        resolution: usize,
        interactive: bool,
    ) -> Result<LandscapeMesh> {
        check_resolution(resolution)?;
        let mut radii = vec![BASE_RADIUS; resolution * resolution];

        if !interactive || state.total_count() > 0 {
            let bumps = self.active_bumps(state);
            if !bumps.is_empty() {
                let thetas = theta_samples(resolution);
                let phis = phi_samples(resolution);
                let sigma = self.params.sigma;
                for (i, &theta) in thetas.iter().enumerate() {
                    let row = &mut radii[i * resolution..(i + 1) * resolution];
                    for (r, &phi) in row.iter_mut().zip(phis.iter()) {
                        for b in &bumps {
                            *r += gaussian_bump(theta, phi, b.anchor, b.amplitude, sigma);
                        }
                    }
                }
            }
        }

        Ok(LandscapeMesh::from_radii(resolution, radii))
    }

    pub fn build_mesh(&self, state: &EmotionState, interactive: bool) -> Result<LandscapeMesh> {
        self.mesh_at_resolution(state, self.params.resolution_for(interactive), interactive)
    }

    /// Mesh plus view directive for one frame.
    pub fn frame(&self, state: &EmotionState, interactive: bool) -> Result<RenderFrame> {
        let mesh = self.build_mesh(state, interactive)?;
        let background = state.display.background;
        let title = (!interactive).then(|| TitleOverlay {
            text: self.params.title,
            color: title_color(background),
        });
        log::debug!(
            "[pipeline] {}x{} grid, total={}, interactive={}",
            mesh.resolution(),
            mesh.resolution(),
            state.total_count(),
            interactive
        );
        Ok(RenderFrame {
            mesh,
            theme: state.display.theme,
            background,
            shade: !interactive,
            antialias: !interactive,
            title,
            elevation: state.camera.elevation(),
            azimuth: state.camera.azimuth(),
            alpha: self.params.surface_alpha,
            interactive,
        })
    }

    /// Builds a frame and hands it to `renderer`.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        state: &EmotionState,
        interactive: bool,
        renderer: &mut R,
    ) -> Result<()> {
        let frame = self.frame(state, interactive)?;
        renderer.submit(&frame)?;
        Ok(())
    }
}

/// White on a black background, black on anything else.
pub fn title_color(background: Rgb) -> Rgb {
    if background == Rgb::BLACK {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}
