//! Color themes and background colors.
//!
//! A theme is a continuous gradient sampled by a scalar in \[0, 1\]; the
//! renderer feeds it the normalised height of each vertex. Gradient stops are
//! evenly spaced samples of the matplotlib colormaps of the same name.

use glam::Vec3;

/// Plain 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Components scaled to \[0, 1\].
    pub fn to_unit(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

/// Background choices offered by the shell in place of a color picker.
pub const BACKGROUND_PRESETS: [Rgb; 6] = [
    Rgb::BLACK,
    Rgb::from_hex(0x0B1021), // midnight
    Rgb::from_hex(0x2F2F2F), // graphite
    Rgb::from_hex(0xF5F5F0), // paper
    Rgb::from_hex(0x1E3A34), // forest
    Rgb::WHITE,
];

/// The fixed palette set for surface coloring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    #[default]
    Plasma,
    Viridis,
    Magma,
    Inferno,
    Cividis,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Plasma,
        ColorTheme::Viridis,
        ColorTheme::Magma,
        ColorTheme::Inferno,
        ColorTheme::Cividis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorTheme::Plasma => "plasma",
            ColorTheme::Viridis => "viridis",
            ColorTheme::Magma => "magma",
            ColorTheme::Inferno => "inferno",
            ColorTheme::Cividis => "cividis",
        }
    }

    fn stops(self) -> &'static [Vec3] {
        match self {
            ColorTheme::Plasma => &PLASMA,
            ColorTheme::Viridis => &VIRIDIS,
            ColorTheme::Magma => &MAGMA,
            ColorTheme::Inferno => &INFERNO,
            ColorTheme::Cividis => &CIVIDIS,
        }
    }

    /// Samples the gradient at `t` (clamped to \[0, 1\]); NaN maps to the low end.
    pub fn sample(self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let colors = self.stops();
        let n = colors.len() - 1;
        let idx = ((t * n as f32).floor() as usize).min(n - 1);
        let frac = t * n as f32 - idx as f32;
        colors[idx].lerp(colors[idx + 1], frac)
    }
}

const PLASMA: [Vec3; 11] = [
    Vec3::new(0.050, 0.030, 0.528),
    Vec3::new(0.254, 0.014, 0.615),
    Vec3::new(0.417, 0.001, 0.658),
    Vec3::new(0.562, 0.052, 0.642),
    Vec3::new(0.692, 0.165, 0.565),
    Vec3::new(0.798, 0.280, 0.470),
    Vec3::new(0.881, 0.393, 0.383),
    Vec3::new(0.949, 0.517, 0.295),
    Vec3::new(0.988, 0.652, 0.211),
    Vec3::new(0.988, 0.809, 0.145),
    Vec3::new(0.940, 0.975, 0.131),
];

const VIRIDIS: [Vec3; 11] = [
    Vec3::new(0.267, 0.004, 0.329),
    Vec3::new(0.282, 0.140, 0.457),
    Vec3::new(0.253, 0.265, 0.529),
    Vec3::new(0.206, 0.371, 0.553),
    Vec3::new(0.163, 0.471, 0.558),
    Vec3::new(0.127, 0.566, 0.550),
    Vec3::new(0.134, 0.658, 0.517),
    Vec3::new(0.266, 0.749, 0.440),
    Vec3::new(0.477, 0.821, 0.318),
    Vec3::new(0.741, 0.873, 0.150),
    Vec3::new(0.993, 0.906, 0.144),
];

const MAGMA: [Vec3; 11] = [
    Vec3::new(0.001, 0.000, 0.014),
    Vec3::new(0.079, 0.054, 0.211),
    Vec3::new(0.232, 0.060, 0.437),
    Vec3::new(0.390, 0.100, 0.502),
    Vec3::new(0.550, 0.161, 0.506),
    Vec3::new(0.716, 0.215, 0.475),
    Vec3::new(0.868, 0.288, 0.409),
    Vec3::new(0.967, 0.439, 0.360),
    Vec3::new(0.994, 0.624, 0.427),
    Vec3::new(0.995, 0.812, 0.573),
    Vec3::new(0.987, 0.991, 0.750),
];

const INFERNO: [Vec3; 11] = [
    Vec3::new(0.001, 0.000, 0.014),
    Vec3::new(0.087, 0.045, 0.225),
    Vec3::new(0.258, 0.039, 0.406),
    Vec3::new(0.416, 0.090, 0.433),
    Vec3::new(0.578, 0.148, 0.404),
    Vec3::new(0.735, 0.216, 0.330),
    Vec3::new(0.865, 0.317, 0.226),
    Vec3::new(0.954, 0.469, 0.098),
    Vec3::new(0.987, 0.645, 0.040),
    Vec3::new(0.964, 0.843, 0.273),
    Vec3::new(0.988, 0.998, 0.645),
];

const CIVIDIS: [Vec3; 11] = [
    Vec3::new(0.000, 0.135, 0.305),
    Vec3::new(0.112, 0.207, 0.434),
    Vec3::new(0.236, 0.277, 0.430),
    Vec3::new(0.337, 0.346, 0.438),
    Vec3::new(0.424, 0.417, 0.451),
    Vec3::new(0.512, 0.490, 0.470),
    Vec3::new(0.605, 0.566, 0.462),
    Vec3::new(0.700, 0.645, 0.443),
    Vec3::new(0.799, 0.728, 0.411),
    Vec3::new(0.901, 0.815, 0.360),
    Vec3::new(0.995, 0.905, 0.268),
];
