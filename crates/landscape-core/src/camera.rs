//! Orbit camera built from elevation/azimuth in degrees.
//!
//! Matches the usual 3D-plot convention: azimuth turns around +Z starting from
//! +X, elevation is the angle above the XY plane. Past 90° the eye crosses the
//! pole and the view turns upside down, as a plotting library's `view_init`
//! would. No platform types here, so the native shell and tests share it.

use crate::constants::{CAMERA_DISTANCE_PER_RADIUS, CAMERA_FOVY_DEG};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera orbiting the origin.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
    pub distance: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Frames a surface whose largest radius is `max_radius`.
    pub fn framing(elevation_deg: f64, azimuth_deg: f64, max_radius: f64, aspect: f32) -> Self {
        let distance = CAMERA_DISTANCE_PER_RADIUS * (max_radius as f32).max(1.0);
        Self {
            elevation_deg: elevation_deg as f32,
            azimuth_deg: azimuth_deg as f32,
            distance,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: distance * 0.05,
            zfar: distance * 4.0,
        }
    }

    /// Unit vector from the origin towards the eye.
    pub fn eye_direction(&self) -> Vec3 {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vec3::new(ce * ca, ce * sa, se)
    }

    pub fn eye(&self) -> Vec3 {
        self.eye_direction() * self.distance
    }

    /// Screen-up vector, always perpendicular to the view direction so the
    /// look-at never degenerates at the poles.
    pub fn up(&self) -> Vec3 {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vec3::new(-se * ca, -se * sa, ce)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, self.up())
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
