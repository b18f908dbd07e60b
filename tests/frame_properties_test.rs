//! Whole-frame properties of the renderer: determinism, reset, occlusion,
//! edge exclusion and angle advancement.

use tui_donut::core::{
    intensity_char, luminance, project, sweep, Animation, FrameRenderer, RotationTrig, SampleTrig,
};
use tui_donut::types::{
    RenderConfig, Rotation, RotationSpeed, BLANK, DELTA_A, DELTA_B, GRADIENT, SWEEP_PERIOD,
};

fn rotations() -> Vec<Rotation> {
    vec![
        Rotation::new(0.0, 0.0),
        Rotation::new(0.8, 0.4),
        Rotation::new(3.1, -1.7),
        Rotation::new(42.0, 17.5),
        Rotation::new(-250.25, 1000.0),
    ]
}

#[test]
fn rendering_is_idempotent() {
    let mut a = FrameRenderer::new(RenderConfig::default());
    let mut b = FrameRenderer::new(RenderConfig::default());
    for r in rotations() {
        let first = a.render(r).clone();
        let again = a.render(r).clone();
        assert_eq!(first, again);
        assert_eq!(&first, b.render(r));
    }
}

#[test]
fn no_stale_cells_leak_between_frames() {
    let mut reused = FrameRenderer::new(RenderConfig::default());
    let mut fresh = FrameRenderer::new(RenderConfig::default());

    // Dirty the reused buffer with a different pose first.
    reused.render(Rotation::new(1.3, 2.9));
    let target = Rotation::new(0.2, 5.0);
    assert_eq!(reused.render(target), fresh.render(target));

    for cell in reused.frame().cells() {
        assert!(cell.glyph == BLANK || GRADIENT.contains(&cell.glyph));
    }
}

#[test]
fn edge_row_and_column_are_never_written() {
    let cfg = RenderConfig::default();
    let mut renderer = FrameRenderer::new(cfg);
    for r in rotations() {
        let frame = renderer.render(r);
        for x in 0..cfg.width {
            assert_eq!(frame.glyph(x, 0), Some(BLANK));
        }
        for y in 0..cfg.height {
            assert_eq!(frame.glyph(0, y), Some(BLANK));
        }
    }
}

/// Re-run the sweep by hand and check every cell keeps the nearest sample.
#[test]
fn each_cell_keeps_the_nearest_sample() {
    let cfg = RenderConfig::default();
    let rotation = Rotation::new(0.9, 2.3);
    let mut renderer = FrameRenderer::new(cfg);
    let frame = renderer.render(rotation).clone();

    let rot = RotationTrig::new(rotation);
    let mut best = vec![0.0f64; cfg.cell_count()];
    let mut best_glyph = vec![BLANK; cfg.cell_count()];
    for j in sweep(SWEEP_PERIOD, cfg.step_j) {
        for i in sweep(SWEEP_PERIOD, cfg.step_i) {
            let s = SampleTrig::new(i, j);
            let p = project(&rot, &s, &cfg);
            if !p.is_inside(cfg.width, cfg.height) {
                continue;
            }
            let k = p.index(cfg.width);
            if p.closeness > best[k] {
                best[k] = p.closeness;
                best_glyph[k] = intensity_char(luminance(&rot, &s));
            }
        }
    }

    for (k, cell) in frame.cells().iter().enumerate() {
        assert_eq!(cell.closeness, best[k], "closeness at cell {k}");
        assert_eq!(cell.glyph, best_glyph[k], "glyph at cell {k}");
    }
}

#[test]
fn angles_advance_by_exactly_one_delta_per_frame() {
    let start = Rotation::new(0.5, -0.25);
    let mut anim = Animation::with_rotation(RenderConfig::default(), RotationSpeed::default(), start);
    anim.step();
    assert_eq!(anim.rotation(), Rotation::new(0.5 + DELTA_A, -0.25 + DELTA_B));

    let custom = RotationSpeed::new(0.3, 0.0);
    anim.set_speed(custom);
    let before = anim.rotation();
    anim.step();
    assert_eq!(anim.rotation(), Rotation::new(before.a + 0.3, before.b));
}

#[test]
fn rotation_is_periodic_in_effect() {
    // A frame depends on the angles only through sin/cos, so a quarter-turn
    // pose looks different from the rest pose but a full turn is close to it.
    let mut renderer = FrameRenderer::new(RenderConfig::default());
    let rest = renderer.render(Rotation::default()).to_text();
    let quarter = renderer
        .render(Rotation::new(std::f64::consts::FRAC_PI_2, 0.0))
        .to_text();
    assert_ne!(rest, quarter);

    let full = renderer
        .render(Rotation::new(std::f64::consts::TAU, std::f64::consts::TAU))
        .to_text();
    let differing = rest.chars().zip(full.chars()).filter(|(a, b)| a != b).count();
    assert!(differing < 20, "{differing} cells differ after a full turn");
}

#[test]
fn smaller_grid_still_renders_inside_bounds() {
    let cfg = RenderConfig {
        width: 20,
        height: 12,
        scale: 6.0,
        ..RenderConfig::default()
    };
    let mut renderer = FrameRenderer::new(cfg);
    let frame = renderer.render(Rotation::new(0.4, 0.7));
    assert_eq!(frame.cells().len(), 240);
    assert!(frame.cells().iter().any(|c| c.glyph != BLANK));
}

type Vec3 = [f64; 3];

fn rotate_x(v: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0], v[1] * c - v[2] * s, v[1] * s + v[2] * c]
}

fn rotate_z(v: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [v[0] * c - v[1] * s, v[0] * s + v[1] * c, v[2]]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[test]
fn projection_agrees_with_an_explicit_torus_model() {
    // Build the torus from a tube circle swept around the z axis, rotate it
    // with plain rotation matrices (x by A, then z by B) and light it from
    // (0, -1, -1). None of this goes through the renderer's algebra.
    let cfg = RenderConfig::default();
    let mut checked = 0;
    for r in rotations() {
        let rot = RotationTrig::new(r);
        for &(i, j) in &[(0.0_f64, 0.0_f64), (0.3, 1.1), (2.0, 4.0), (4.4, 2.5), (5.9, 5.2)] {
            let h = j.cos() + 2.0;
            let point = [h * i.cos(), h * i.sin(), j.sin()];
            let normal = [j.cos() * i.cos(), j.cos() * i.sin(), j.sin()];

            let p = rotate_z(rotate_x(point, r.a), r.b);
            let n = rotate_z(rotate_x(normal, r.a), r.b);
            let closeness = 1.0 / (p[2] + 5.0);
            let x = 20.0 + 30.0 * closeness * p[0];
            let y = 13.0 + 15.0 * closeness * p[1];

            let got = project(&rot, &SampleTrig::new(i, j), &cfg);
            assert!((got.closeness - closeness).abs() < 1e-12);
            // Skip truncation boundaries where rounding order could decide.
            if (x - x.round()).abs() > 1e-9 && (y - y.round()).abs() > 1e-9 {
                assert_eq!(got.x, x as i32, "x for {r:?} at ({i}, {j})");
                assert_eq!(got.y, y as i32, "y for {r:?} at ({i}, {j})");
                checked += 1;
            }

            let light = dot(n, [0.0, -1.0, -1.0]);
            assert!((luminance(&rot, &SampleTrig::new(i, j)) - light).abs() < 1e-12);
        }
    }
    assert!(checked > 20);
}
