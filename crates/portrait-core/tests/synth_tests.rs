// Host-side tests for foreground/background dot synthesis.

use glam::Vec2;
use portrait_core::synth::{
    background_count, background_dots, background_radius, darken_factor, foreground_dots,
};
use portrait_core::{Dot, DotColor, PortraitConfig, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid(n: usize, color: DotColor) -> Vec<Dot> {
    (0..n)
        .map(|i| Dot {
            position: Vec2::new(90.0 + (i % 50) as f32 * 6.0, (i / 50) as f32 * 6.0),
            color: color.clone(),
            radius: 1.5,
        })
        .collect()
}

#[test]
fn background_count_is_seventy_percent_floored() {
    let ratio = PortraitConfig::default().background_ratio;
    let cases = [
        (0, 0),
        (1, 0),
        (2, 1),
        (3, 2),
        (10, 7),
        (100, 70),
        (2157, 1509),
    ];
    for (primary, expected) in cases {
        assert_eq!(background_count(primary, ratio), expected, "primary={}", primary);
    }
}

#[test]
fn background_layer_has_expected_size() {
    let config = PortraitConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    for n in [0, 1, 2, 5, 33, 400] {
        let dots = grid(n, DotColor::Rgb(Rgb::new(120, 80, 40)));
        let bg = background_dots(&dots, &config, &mut rng);
        assert_eq!(bg.len(), background_count(n, config.background_ratio));
    }
}

#[test]
fn no_templates_means_no_background() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(background_dots(&[], &PortraitConfig::default(), &mut rng).is_empty());
}

#[test]
fn foreground_dots_are_full_depth_and_scaled() {
    let config = PortraitConfig::default();
    let dots = grid(40, DotColor::Rgb(Rgb::new(10, 20, 30)));
    let mut rng = StdRng::seed_from_u64(3);
    let fg = foreground_dots(&dots, &config, &mut rng);
    assert_eq!(fg.len(), dots.len());
    for (a, d) in fg.iter().zip(&dots) {
        assert_eq!(a.depth, 1.0);
        assert_eq!(a.original, d.position);
        assert_eq!(a.current, d.position);
        assert!((a.radius - d.radius * 0.6).abs() < 1e-6);
        assert_eq!(a.color, d.color);
        assert!(!a.hovered);
        assert_eq!(a.hover_offset, Vec2::ZERO);
        assert!((0.3..0.7).contains(&a.breathe_speed));
        assert!((1.2..2.0).contains(&a.breathe_amount));
        assert!((0.25..0.6).contains(&a.organic_speed));
        assert!(a.organic_offset.x.abs() <= 2.5 && a.organic_offset.y.abs() <= 2.5);
    }
}

#[test]
fn background_depth_jitter_and_radius_are_bounded() {
    let config = PortraitConfig::default();
    let dots = grid(500, DotColor::Rgb(Rgb::new(200, 150, 100)));
    let mut rng = StdRng::seed_from_u64(42);
    let bg = background_dots(&dots, &config, &mut rng);
    assert_eq!(bg.len(), 350);

    let mut min_depth = f32::MAX;
    let mut max_depth = f32::MIN;
    for a in &bg {
        assert!(a.depth >= 0.0 && a.depth < 0.5, "depth {}", a.depth);
        min_depth = min_depth.min(a.depth);
        max_depth = max_depth.max(a.depth);

        // Every background dot sits within the jitter window of some template.
        let near_template = dots.iter().any(|d| {
            (a.original.x - d.position.x).abs() <= 7.5 + 1e-3
                && (a.original.y - d.position.y).abs() <= 7.5 + 1e-3
        });
        assert!(near_template);
        assert_eq!(a.original, a.current);

        assert!(a.radius <= 1.5 * 0.4 * 0.5);
        assert!((a.radius - background_radius(1.5, a.depth)).abs() < 1e-6);

        assert!((0.15..0.4).contains(&a.breathe_speed));
        assert!((0.6..1.2).contains(&a.breathe_amount));
        assert!((0.15..0.4).contains(&a.organic_speed));
    }
    // The depth draw covers most of its range.
    assert!(min_depth < 0.05);
    assert!(max_depth > 0.45);
}

#[test]
fn background_colors_are_darkened_by_depth() {
    let config = PortraitConfig::default();
    let base = Rgb::new(200, 100, 50);
    let dots = grid(30, DotColor::Rgb(base));
    let mut rng = StdRng::seed_from_u64(9);
    let mut bg = background_dots(&dots, &config, &mut rng);
    assert_eq!(bg.len(), 21);

    for a in &bg {
        let c = a.color.rgb().expect("rgb template stays rgb");
        assert_eq!(c, base.darken(darken_factor(a.depth)));
        assert!(c.r <= base.r && c.g <= base.g && c.b <= base.b);
    }

    // Same template: shallower dots are never brighter than deeper ones.
    bg.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    for w in bg.windows(2) {
        let (c1, c2) = (w[0].color.rgb().unwrap(), w[1].color.rgb().unwrap());
        assert!(c1.r <= c2.r && c1.g <= c2.g && c1.b <= c2.b);
    }
}

#[test]
fn darkening_is_floor_rounded_and_monotonic() {
    let c = Rgb::new(200, 100, 51);
    assert_eq!(c.darken(darken_factor(0.0)), Rgb::new(120, 60, 30));
    assert_eq!(c.darken(darken_factor(0.25)), Rgb::new(140, 70, 35));

    let mut prev = c.darken(darken_factor(0.0));
    for i in 1..50 {
        let next = c.darken(darken_factor(i as f32 * 0.01));
        assert!(prev.r <= next.r && prev.g <= next.g && prev.b <= next.b);
        prev = next;
    }
}

#[test]
fn unparsed_template_colors_pass_through() {
    let config = PortraitConfig::default();
    let css = DotColor::Css("hsl(10, 50%, 50%)".to_string());
    let dots = grid(10, css.clone());
    let mut rng = StdRng::seed_from_u64(5);
    let bg = background_dots(&dots, &config, &mut rng);
    assert_eq!(bg.len(), 7);
    assert!(bg.iter().all(|a| a.color == css));
}

#[test]
fn synthesis_is_reproducible_with_the_same_seed() {
    let config = PortraitConfig::default();
    let dots = grid(60, DotColor::Rgb(Rgb::new(50, 60, 70)));
    let a = background_dots(&dots, &config, &mut StdRng::seed_from_u64(11));
    let b = background_dots(&dots, &config, &mut StdRng::seed_from_u64(11));
    assert_eq!(a, b);
}
