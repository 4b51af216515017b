// Host-side tests for the session: which render each interaction asks for.

use instant::Instant;
use landscape_core::*;
use std::time::Duration;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn submit(&mut self, frame: &RenderFrame) -> anyhow::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn increment(name: &str) -> Command {
    Command::Increment(name.to_string())
}

#[test]
fn counter_commands_ask_for_settled_frames() {
    let mut session = Session::default();
    let now = Instant::now();

    let r = session.handle(increment("Excited"), now).unwrap();
    assert_eq!(r, Some(RenderRequest::SETTLED));
    assert_eq!(session.state().count("Excited").unwrap(), 1);

    let r = session.handle(Command::ResetAll, now).unwrap();
    assert_eq!(r, Some(RenderRequest::SETTLED));
    assert_eq!(session.state().total_count(), 0);
}

#[test]
fn unknown_emotion_is_an_error_and_requests_nothing() {
    let mut session = Session::default();
    let before = session.state().clone();
    let err = session.handle(increment("Nonexistent"), Instant::now()).unwrap_err();
    assert!(matches!(err, LandscapeError::UnknownEmotion(_)));
    assert_eq!(session.state(), &before);
}

#[test]
fn theme_change_is_settled() {
    let mut session = Session::default();
    let r = session
        .handle(Command::SetTheme(ColorTheme::Viridis), Instant::now())
        .unwrap();
    assert_eq!(r, Some(RenderRequest::SETTLED));
    assert_eq!(session.state().display.theme, ColorTheme::Viridis);
}

#[test]
fn dismissed_background_choice_requests_nothing() {
    let mut session = Session::default();
    assert_eq!(session.choose_background(None), None);
    assert_eq!(session.state().display.background, Rgb::BLACK);

    let r = session.choose_background(Some(Rgb::from_hex(0x224466)));
    assert_eq!(r, Some(RenderRequest::SETTLED));
    assert_eq!(session.state().display.background, Rgb::from_hex(0x224466));
}

#[test]
fn background_cycle_walks_the_presets() {
    let mut session = Session::default();
    let now = Instant::now();
    for expected in BACKGROUND_PRESETS.iter().skip(1).chain(BACKGROUND_PRESETS.iter().take(1)) {
        let r = session.handle(Command::NextBackground, now).unwrap();
        assert_eq!(r, Some(RenderRequest::SETTLED));
        assert_eq!(session.state().display.background, *expected);
    }
}

#[test]
fn background_cycle_from_custom_color_starts_over() {
    let mut session = Session::default();
    session.choose_background(Some(Rgb::from_hex(0x123456)));
    session.handle(Command::NextBackground, Instant::now()).unwrap();
    assert_eq!(session.state().display.background, BACKGROUND_PRESETS[0]);
}

#[test]
fn tally_report_does_not_render() {
    let mut session = Session::default();
    let r = session.handle(Command::ReportTally, Instant::now()).unwrap();
    assert_eq!(r, None);
}

#[test]
fn drag_is_interactive_and_release_is_settled() {
    let mut session = Session::default();
    assert_eq!(session.drag(10.0, 5.0), None);
    assert_eq!(session.state().camera.azimuth(), 45.0);

    session.begin_drag();
    assert!(session.is_dragging());
    assert_eq!(session.drag(10.0, 5.0), Some(RenderRequest::INTERACTIVE));
    assert_eq!(session.state().camera.azimuth(), 55.0);
    assert_eq!(session.state().camera.elevation(), 35.0);

    assert_eq!(session.end_drag(), Some(RenderRequest::SETTLED));
    assert!(!session.is_dragging());
    assert_eq!(session.end_drag(), None);
}

#[test]
fn nudge_renders_coarse_then_settles_after_delay() {
    let mut session = Session::default();
    let t0 = Instant::now();
    let r = session
        .handle(
            Command::NudgeCamera {
                d_elevation: 5.0,
                d_azimuth: 0.0,
            },
            t0,
        )
        .unwrap();
    assert_eq!(r, Some(RenderRequest::INTERACTIVE));
    assert_eq!(session.state().camera.elevation(), 35.0);

    let settle = t0 + Duration::from_millis(SETTLE_DELAY_MS);
    assert_eq!(session.next_deadline(), Some(settle));
    assert_eq!(session.tick(t0 + Duration::from_millis(100)), None);
    assert_eq!(session.tick(settle), Some(RenderRequest::SETTLED));
    assert_eq!(session.tick(settle + Duration::from_millis(10)), None);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn nudge_at_pole_is_clamped() {
    let mut session = Session::default();
    let now = Instant::now();
    let down = Command::NudgeCamera {
        d_elevation: -5.0,
        d_azimuth: 0.0,
    };
    for _ in 0..10 {
        session.handle(down.clone(), now).unwrap();
    }
    assert_eq!(session.state().camera.elevation(), 0.0);
}

#[test]
fn auto_rotate_toggle_drives_interactive_ticks() {
    let mut session = Session::default();
    let t0 = Instant::now();

    let r = session.handle(Command::ToggleAutoRotate, t0).unwrap();
    assert_eq!(r, None);
    assert!(session.is_auto_rotating());
    assert_eq!(session.next_deadline(), Some(t0));

    assert_eq!(session.tick(t0), Some(RenderRequest::INTERACTIVE));
    assert!((session.state().camera.azimuth() - 2.5).abs() < 1e-9);
    assert_eq!(session.tick(t0 + Duration::from_millis(10)), None);
    assert_eq!(
        session.tick(t0 + Duration::from_millis(50)),
        Some(RenderRequest::INTERACTIVE)
    );

    let r = session
        .handle(Command::ToggleAutoRotate, t0 + Duration::from_millis(60))
        .unwrap();
    assert_eq!(r, Some(RenderRequest::SETTLED));
    assert!(!session.is_auto_rotating());
    assert_eq!(session.tick(t0 + Duration::from_millis(200)), None);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn render_passes_requested_quality_through() {
    let mut session = Session::default();
    session.handle(increment("Anxious"), Instant::now()).unwrap();
    let mut renderer = RecordingRenderer::default();

    session.render(RenderRequest::INTERACTIVE, &mut renderer).unwrap();
    session.render(RenderRequest::SETTLED, &mut renderer).unwrap();

    assert_eq!(renderer.frames.len(), 2);
    assert!(renderer.frames[0].interactive);
    assert_eq!(renderer.frames[0].mesh.resolution(), 50);
    assert!(!renderer.frames[1].interactive);
    assert_eq!(renderer.frames[1].mesh.resolution(), 100);
}

#[test]
fn button_labels_show_counts_in_catalog_order() {
    let mut session = Session::default();
    let now = Instant::now();
    session.handle(increment("Happy"), now).unwrap();
    session.handle(increment("Happy"), now).unwrap();
    session.handle(increment("Stressed"), now).unwrap();

    let labels = session.button_labels();
    assert_eq!(labels.len(), 15);
    assert_eq!(labels[0], "Happy (2)");
    assert_eq!(labels[1], "Sad (0)");
    assert_eq!(labels[14], "Stressed (1)");
}
