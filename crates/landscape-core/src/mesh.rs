use crate::field::spherical_to_cartesian;
use glam::DVec3;
use std::f64::consts::PI;

/// `n` evenly spaced samples over `[0, span]`, both endpoints included.
pub fn linspace(span: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|k| if k + 1 == n { span } else { span * k as f64 / last })
                .collect()
        }
    }
}

/// Azimuth samples over \[0, 2π\].
pub fn theta_samples(n: usize) -> Vec<f64> {
    linspace(2.0 * PI, n)
}

/// Polar samples over \[0, π\].
pub fn phi_samples(n: usize) -> Vec<f64> {
    linspace(PI, n)
}

/// Deformed latitude/longitude grid, `resolution × resolution` nodes.
///
/// Node `(i, j)` sits at azimuth sample `i` and polar sample `j` and is stored
/// at `i * resolution + j`.
#[derive(Clone, Debug, PartialEq)]
pub struct LandscapeMesh {
    resolution: usize,
    radii: Vec<f64>,
    positions: Vec<DVec3>,
}

impl LandscapeMesh {
    /// Converts a radius field laid out on the grid to Cartesian positions.
    pub(crate) fn from_radii(resolution: usize, radii: Vec<f64>) -> Self {
        debug_assert_eq!(radii.len(), resolution * resolution);
        let thetas = theta_samples(resolution);
        let phis = phi_samples(resolution);
        let positions = radii
            .iter()
            .enumerate()
            .map(|(k, &r)| spherical_to_cartesian(r, thetas[k / resolution], phis[k % resolution]))
            .collect();
        Self {
            resolution,
            radii,
            positions,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index(&self, i_theta: usize, j_phi: usize) -> usize {
        i_theta * self.resolution + j_phi
    }

    pub fn radius(&self, i_theta: usize, j_phi: usize) -> f64 {
        self.radii[self.index(i_theta, j_phi)]
    }

    pub fn position(&self, i_theta: usize, j_phi: usize) -> DVec3 {
        self.positions[self.index(i_theta, j_phi)]
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn max_radius(&self) -> f64 {
        self.radii.iter().copied().fold(0.0, f64::max)
    }

    /// Two triangles per grid cell.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let n = self.resolution;
        let cells = n.saturating_sub(1);
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for i in 0..cells {
            for j in 0..cells {
                let a = (i * n + j) as u32;
                let b = a + n as u32;
                indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
            }
        }
        indices
    }

    /// Vertex heights (z) mapped to \[0, 1\] for the color gradient.
    pub fn height_scalars(&self) -> Vec<f32> {
        let (lo, hi) = self
            .positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.z), hi.max(p.z))
            });
        let span = hi - lo;
        if !(span > f64::EPSILON) {
            return vec![0.5; self.positions.len()];
        }
        self.positions
            .iter()
            .map(|p| ((p.z - lo) / span) as f32)
            .collect()
    }
}
