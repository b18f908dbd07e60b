use tui_donut::core::{Animation, DonutConfig, FrameRenderer};
use tui_donut::term::{
    debug_readout, DonutView, FrameBuffer, Viewport, KEY_HINT, LEFT_MARGIN, TOP_MARGIN,
};
use tui_donut::types::{RenderConfig, Rotation, RotationSpeed};

const GOLDEN_A0_B0: &str = include_str!("golden/frame_a0_b0.txt");

fn first_frame() -> Animation {
    let mut anim = Animation::new(RenderConfig::default(), RotationSpeed::default());
    anim.step();
    anim
}

#[test]
fn term_view_places_frame_rows_after_margins() {
    let anim = first_frame();
    let view = DonutView::default();
    let fb = view.render(anim.frame(), &anim.snapshot(), false, Viewport::new(60, 32));

    for (y, expected) in GOLDEN_A0_B0.lines().enumerate() {
        let row = fb.row_text(TOP_MARGIN + y as u16);
        let margin = &row[..LEFT_MARGIN as usize];
        assert!(margin.chars().all(|c| c == ' '));
        let body: String = row.chars().skip(LEFT_MARGIN as usize).take(40).collect();
        assert_eq!(body, expected, "row {y}");
    }
}

#[test]
fn term_view_status_row_is_blank_without_debug() {
    let anim = first_frame();
    let fb = DonutView::default().render(anim.frame(), &anim.snapshot(), false, Viewport::new(60, 32));
    assert!(fb.row_text(0).chars().all(|c| c == ' '));
}

#[test]
fn term_view_shows_speed_readout_in_debug() {
    let anim = first_frame();
    let fb = DonutView::default().render(anim.frame(), &anim.snapshot(), true, Viewport::new(60, 32));
    let status = fb.row_text(0);
    assert_eq!(
        status.trim_end(),
        "      DELTA_A: 0.080000 DELTA_B: 0.040000"
    );
}

#[test]
fn term_view_draws_key_hint_below_the_frame() {
    let anim = first_frame();
    let fb = DonutView::default().render(anim.frame(), &anim.snapshot(), false, Viewport::new(60, 32));
    // 1 status row + 27 frame rows + 1 spacer.
    assert!(fb.row_text(29).contains(KEY_HINT));

    let bare = DonutView::default()
        .with_hint(false)
        .render(anim.frame(), &anim.snapshot(), false, Viewport::new(60, 32));
    assert!(!bare.row_text(29).contains(KEY_HINT));
}

#[test]
fn term_view_clips_to_small_viewports() {
    let anim = first_frame();
    let fb = DonutView::default().render(anim.frame(), &anim.snapshot(), true, Viewport::new(20, 5));
    assert_eq!(fb.width(), 20);
    assert_eq!(fb.height(), 5);
    assert_eq!(fb.cells().len(), 100);
}

#[test]
fn term_view_reuses_framebuffer_without_stale_cells() {
    let view = DonutView::default();
    let mut renderer = FrameRenderer::new(RenderConfig::default());
    let snap = first_frame().snapshot();
    let vp = Viewport::new(60, 32);

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(renderer.render(Rotation::new(2.0, 1.0)), &snap, true, vp, &mut fb);
    view.render_into(renderer.render(Rotation::default()), &snap, false, vp, &mut fb);

    let fresh = view.render(renderer.frame(), &snap, false, vp);
    assert_eq!(fb, fresh);
}

#[test]
fn term_view_readout_from_an_oversized_env_speed() {
    let config = DonutConfig::from_vars(|key: &str| match key {
        "DONUT_DELTA_A" => Some("1e30".to_string()),
        _ => None,
    });
    let mut anim = Animation::new(config.render, config.speed);
    anim.step();
    assert_eq!(
        debug_readout(&anim.snapshot()).as_str(),
        "DELTA_A: 0.500000 DELTA_B: 0.040000"
    );
}
