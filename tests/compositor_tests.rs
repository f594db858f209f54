use std::rc::Rc;

use glyphforge::compositor::{slider_geometry, BackgroundRequest, SliderRequest};
use glyphforge::style::{apply_state, base_palette, ControlSize, ControlState, RenderStyle, Shape, Variant};
use glyphforge::theme::ThemePalette;
use glyphforge::{RenderEngine, Rgba, ThemeVars};

fn background(width: f32, height: f32, state: ControlState) -> BackgroundRequest {
    BackgroundRequest {
        width,
        height,
        radius: 6.0,
        variant: Variant::Primary,
        state,
        accent: None,
        elevated: false,
    }
}

fn slider(value: f32) -> SliderRequest {
    SliderRequest {
        width: 200.0,
        height: 20.0,
        value,
        variant: Variant::Slider,
        state: ControlState::Idle,
        accent: None,
    }
}

#[test]
fn equal_background_requests_share_one_cached_resource() {
    let mut engine = RenderEngine::new(1.0);
    let req = background(120.0, 40.0, ControlState::Idle);

    let first = engine.render_background(&req);
    let second = engine.render_background(&req);
    let a = first.resource.expect("background should render a bitmap");
    let b = second.resource.expect("background should render a bitmap");
    assert!(Rc::ptr_eq(&a, &b), "cache hit must return the same resource");
    assert_eq!(engine.cache_len(), 1);
}

#[test]
fn cache_key_distinguishes_state_and_size() {
    let mut engine = RenderEngine::new(1.0);

    let idle = engine
        .render_background(&background(120.0, 40.0, ControlState::Idle))
        .resource
        .unwrap();
    let hover = engine
        .render_background(&background(120.0, 40.0, ControlState::Hover))
        .resource
        .unwrap();
    let wider = engine
        .render_background(&background(160.0, 40.0, ControlState::Idle))
        .resource
        .unwrap();

    assert!(!Rc::ptr_eq(&idle, &hover));
    assert!(!Rc::ptr_eq(&idle, &wider));
    assert_eq!(engine.cache_len(), 3);
}

#[test]
fn toggling_themes_and_back_hits_the_original_cache_entry() {
    let mut engine = RenderEngine::new(1.0);
    let req = background(120.0, 40.0, ControlState::Idle);

    engine.set_theme(&ThemeVars::new("dark"));
    let first = engine.render_background(&req).resource.unwrap();

    engine.set_theme(&ThemeVars::new("light"));
    engine.render_background(&req);

    engine.set_theme(&ThemeVars::new("dark"));
    let second = engine.render_background(&req).resource.unwrap();
    assert!(
        Rc::ptr_eq(&first, &second),
        "equal theme id and fields must hit the same cache entry"
    );
}

#[test]
fn fractional_sizes_round_to_one_cache_entry() {
    let mut engine = RenderEngine::new(1.0);
    let a = engine
        .render_background(&background(120.2, 40.0, ControlState::Idle))
        .resource
        .unwrap();
    let b = engine
        .render_background(&background(119.8, 40.0, ControlState::Idle))
        .resource
        .unwrap();
    assert!(Rc::ptr_eq(&a, &b), "sub-pixel widths must not multiply cache entries");
}

#[test]
fn zero_sized_background_returns_fallback_colors_only() {
    let mut engine = RenderEngine::new(1.0);
    let styled = engine.render_background(&background(0.0, 0.0, ControlState::Idle));
    assert!(styled.resource.is_none());
    // Callers degrade to a plain fill/border without a bitmap.
    assert!(styled.fill.a > 0.0);
    assert!(styled.border.a > 0.0);
}

#[test]
fn disabled_background_is_never_more_opaque_than_idle() {
    let mut engine = RenderEngine::new(1.0);
    for variant in [
        Variant::Primary,
        Variant::Secondary,
        Variant::Ghost,
        Variant::Chip,
        Variant::Icon,
    ] {
        let mut idle = background(120.0, 40.0, ControlState::Idle);
        idle.variant = variant;
        let mut disabled = background(120.0, 40.0, ControlState::Disabled);
        disabled.variant = variant;

        let idle = engine.render_background(&idle);
        let disabled = engine.render_background(&disabled);
        assert!(
            disabled.fill.a <= idle.fill.a,
            "{variant:?}: disabled fill may not gain opacity"
        );
        assert!(
            disabled.border.a <= idle.border.a,
            "{variant:?}: disabled border may not gain opacity"
        );

        let theme = ThemePalette::default();
        let idle_ink = apply_state(base_palette(variant, None, &theme), ControlState::Idle).ink;
        let disabled_ink =
            apply_state(base_palette(variant, None, &theme), ControlState::Disabled).ink;
        assert!(
            disabled_ink.a <= idle_ink.a,
            "{variant:?}: disabled ink may not gain opacity"
        );
    }
}

#[test]
fn icon_render_is_cached_and_falls_back_for_unknown_ids() {
    let mut engine = RenderEngine::new(1.0);

    let point = engine.render_icon("point", 64.0, None).expect("non-empty resource");
    assert!(point.pixel_width() > 0 && point.pixel_height() > 0);

    let again = engine.render_icon("point", 64.0, None).unwrap();
    assert!(Rc::ptr_eq(&point, &again));

    let unknown = engine
        .render_icon("flerbenfrazzle", 64.0, None)
        .expect("unknown ids degrade to the fallback glyph");
    assert_eq!(
        unknown.image().as_raw(),
        point.image().as_raw(),
        "fallback render should be pixel-equal to the point glyph"
    );
}

#[test]
fn icon_tint_is_part_of_the_cache_key() {
    let mut engine = RenderEngine::new(1.0);
    let plain = engine.render_icon("gear", 32.0, None).unwrap();
    let tinted = engine
        .render_icon("gear", 32.0, Some(Rgba::new(1.0, 0.0, 0.0, 1.0)))
        .unwrap();
    assert!(!Rc::ptr_eq(&plain, &tinted));
}

#[test]
fn zero_sized_icon_returns_no_resource() {
    let mut engine = RenderEngine::new(1.0);
    assert!(engine.render_icon("gear", 0.0, None).is_none());
}

#[test]
fn slider_values_rounding_to_the_same_milli_share_a_cache_entry() {
    let mut engine = RenderEngine::new(1.0);
    // Both round to 0.124 at three decimals.
    let a = engine.render_slider_overlay(&slider(0.1238)).unwrap();
    let b = engine.render_slider_overlay(&slider(0.1242)).unwrap();
    assert!(Rc::ptr_eq(&a, &b));

    let c = engine.render_slider_overlay(&slider(0.1252)).unwrap();
    assert!(!Rc::ptr_eq(&a, &c));
}

#[test]
fn slider_geometry_pins_the_knob_to_the_track_ends() {
    let zero = slider_geometry(200.0, 20.0, 0.0);
    assert_eq!(zero.fill.width, 0.0);
    assert_eq!(zero.knob_center.x, zero.track.x);

    let full = slider_geometry(200.0, 20.0, 1.0);
    assert_eq!(full.fill.width, full.track.width);
    assert_eq!(full.knob_center.x, full.track.x + full.track.width);

    let out_of_range = slider_geometry(200.0, 20.0, 7.5);
    assert_eq!(out_of_range.fill.width, out_of_range.track.width);
}

#[test]
fn style_tags_resolve_to_concrete_geometry() {
    let mut style = RenderStyle::new(Variant::Secondary, ControlState::Idle);
    style.size = ControlSize::Lg;
    style.shape = Shape::Pill;

    let req = BackgroundRequest::from_style(style, 120.0, 6.0, false);
    assert_eq!(req.height, 40.0);
    assert_eq!(req.radius, 20.0, "pill radius is half the height");
    assert_eq!(req.variant, Variant::Secondary);

    style.shape = Shape::Square;
    let req = BackgroundRequest::from_style(style, 120.0, 6.0, false);
    assert_eq!(req.radius, 0.0);

    let mut engine = RenderEngine::new(1.0);
    let styled = engine.render_background(&req);
    assert!(styled.resource.is_some());
}

#[test]
fn clearing_the_caches_forces_a_re_render() {
    let mut engine = RenderEngine::new(1.0);
    let req = background(120.0, 40.0, ControlState::Idle);

    let first = engine.render_background(&req).resource.unwrap();
    engine.clear_caches();
    assert_eq!(engine.cache_len(), 0);

    let second = engine.render_background(&req).resource.unwrap();
    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(
        first.image().as_raw(),
        second.image().as_raw(),
        "re-render after clear must still be deterministic"
    );
}
