//! Scalar radius field over the sphere.
//!
//! Angles follow the grid convention used throughout the crate: `theta` is the
//! azimuth around +Z and `phi` the polar angle measured from +Z.

use crate::emotion::Anchor;
use glam::DVec3;

/// Angular distance between `(theta, phi)` and `anchor` by the spherical law of cosines.
///
/// The cosine term is `sin φa sin φ + cos φa cos φ cos(θ − θa)`, rewritten as
/// `cos(φa − φ) − cos φa cos φ (1 − cos(θ − θa))`. Both forms are the same
/// expression; the second one evaluates to exactly 1 when the point sits on the
/// anchor, so the distance there is exactly 0. The clamp keeps `acos` defined
/// when rounding lands just outside \[−1, 1\].
#[inline]
pub fn angular_distance(theta: f64, phi: f64, anchor: Anchor) -> f64 {
    let cos_d = (anchor.phi - phi).cos()
        - anchor.phi.cos() * phi.cos() * (1.0 - (theta - anchor.theta).cos());
    cos_d.clamp(-1.0, 1.0).acos()
}

/// Gaussian bump in angular distance, peaking at `amplitude` on the anchor.
#[inline]
pub fn gaussian_bump(theta: f64, phi: f64, anchor: Anchor, amplitude: f64, sigma: f64) -> f64 {
    let d = angular_distance(theta, phi, anchor);
    amplitude * (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// `(r, θ, φ)` to Cartesian with Z up.
#[inline]
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    DVec3::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
}
