// Host-side tests for colors, palettes and the orbit camera.

use glam::Vec3;
use landscape_core::*;

#[test]
fn hex_colors_parse_and_print() {
    let c = Rgb::from_hex(0xCD5C5C);
    assert_eq!(c, Rgb::new(0xCD, 0x5C, 0x5C));
    assert_eq!(c.to_hex_string(), "#CD5C5C");
    assert_eq!(Rgb::WHITE.to_unit(), Vec3::ONE);
    assert_eq!(Rgb::default(), Rgb::BLACK);
}

#[test]
fn title_color_contrasts_with_background() {
    assert_eq!(title_color(Rgb::BLACK), Rgb::WHITE);
    assert_eq!(title_color(Rgb::WHITE), Rgb::BLACK);
    assert_eq!(title_color(Rgb::new(0, 0, 1)), Rgb::BLACK);
}

#[test]
fn theme_names_are_distinct() {
    for (i, a) in ColorTheme::ALL.iter().enumerate() {
        for b in &ColorTheme::ALL[i + 1..] {
            assert_ne!(a.name(), b.name());
        }
    }
    assert_eq!(ColorTheme::default(), ColorTheme::Plasma);
}

#[test]
fn palette_endpoints() {
    let low = ColorTheme::Plasma.sample(0.0);
    let high = ColorTheme::Plasma.sample(1.0);
    assert!(low.abs_diff_eq(Vec3::new(0.050, 0.030, 0.528), 1e-6));
    assert!(high.abs_diff_eq(Vec3::new(0.940, 0.975, 0.131), 1e-6));
}

#[test]
fn palette_sampling_clamps_out_of_range() {
    for theme in ColorTheme::ALL {
        assert_eq!(theme.sample(-3.0), theme.sample(0.0));
        assert_eq!(theme.sample(7.0), theme.sample(1.0));
        assert_eq!(theme.sample(f32::NAN), theme.sample(0.0));
        let mid = theme.sample(0.5);
        assert!(mid.cmpge(Vec3::ZERO).all() && mid.cmple(Vec3::ONE).all());
    }
}

#[test]
fn camera_looks_along_azimuth_at_zero_elevation() {
    let cam = OrbitCamera::framing(0.0, 0.0, 1.0, 1.5);
    assert!(cam.eye_direction().abs_diff_eq(Vec3::X, 1e-6));
    assert!(cam.up().abs_diff_eq(Vec3::Z, 1e-6));
    assert!((cam.eye().length() - CAMERA_DISTANCE_PER_RADIUS).abs() < 1e-5);
}

#[test]
fn camera_up_stays_perpendicular_through_the_pole() {
    for elev in [0.0, 45.0, 90.0, 135.0, 180.0] {
        let cam = OrbitCamera::framing(elev, 120.0, 1.0, 1.0);
        let dot = cam.eye_direction().dot(cam.up());
        assert!(dot.abs() < 1e-6, "elevation {elev}: dot {dot}");
        assert!(cam.view_proj().is_finite());
    }
}

#[test]
fn camera_backs_off_for_taller_surfaces() {
    let small = OrbitCamera::framing(30.0, 45.0, 1.0, 1.0);
    let tall = OrbitCamera::framing(30.0, 45.0, 3.0, 1.0);
    assert!(tall.distance > small.distance);
    assert!(tall.znear < tall.distance && tall.zfar > tall.distance);
}

#[test]
fn shader_source_declares_entry_points() {
    assert!(LANDSCAPE_WGSL.contains("fn vs_main"));
    assert!(LANDSCAPE_WGSL.contains("fn fs_main"));
}
