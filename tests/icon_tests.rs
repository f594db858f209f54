use glyphforge::color::Rgba;
use glyphforge::icons::{self, DrawOptions, FALLBACK_ICON, ICON_IDS};
use tiny_skia::Pixmap;

fn render(id: &str, side: u32, options: &DrawOptions) -> Pixmap {
    let mut pixmap = Pixmap::new(side, side).unwrap();
    icons::draw(&mut pixmap.as_mut(), id, 0.0, 0.0, side as f32, options);
    pixmap
}

#[test]
fn identical_inputs_render_identical_pixels() {
    let first = render("gear", 64, &DrawOptions::glyph());
    let second = render("gear", 64, &DrawOptions::glyph());
    assert_eq!(
        first.data(),
        second.data(),
        "repeated draws should be byte-identical"
    );
}

#[test]
fn every_registered_icon_is_deterministic() {
    for id in ICON_IDS {
        let first = render(id, 32, &DrawOptions::mask());
        let second = render(id, 32, &DrawOptions::mask());
        assert_eq!(first.data(), second.data(), "icon {id} is not deterministic");
    }
}

#[test]
fn drawing_stays_inside_the_requested_region() {
    let mut pixmap = Pixmap::new(64, 64).unwrap();
    icons::draw(
        &mut pixmap.as_mut(),
        "noise",
        16.0,
        16.0,
        32.0,
        &DrawOptions::glyph(),
    );

    for y in 0..64u32 {
        for x in 0..64u32 {
            let inside = (16..48).contains(&x) && (16..48).contains(&y);
            if inside {
                continue;
            }
            let alpha = pixmap.data()[((y * 64 + x) * 4 + 3) as usize];
            assert_eq!(alpha, 0, "pixel ({x},{y}) outside the icon region was touched");
        }
    }
}

#[test]
fn fractional_coordinates_stay_inside_the_requested_region() {
    let mut pixmap = Pixmap::new(64, 64).unwrap();
    // Region [16.4, 47.8): only whole pixels 17..47 may be written.
    icons::draw(
        &mut pixmap.as_mut(),
        "noise",
        16.4,
        16.4,
        31.4,
        &DrawOptions::glyph(),
    );

    for y in 0..64u32 {
        for x in 0..64u32 {
            if (17..47).contains(&x) && (17..47).contains(&y) {
                continue;
            }
            let alpha = pixmap.data()[((y * 64 + x) * 4 + 3) as usize];
            assert_eq!(alpha, 0, "pixel ({x},{y}) outside the fractional region was touched");
        }
    }
}

#[test]
fn unknown_id_falls_back_to_the_point_glyph() {
    let fallback = render(FALLBACK_ICON, 48, &DrawOptions::glyph());
    let unknown = render("flerbenfrazzle", 48, &DrawOptions::glyph());
    assert_eq!(
        fallback.data(),
        unknown.data(),
        "unknown ids should render the fallback glyph, not fail"
    );
    assert!(icons::is_registered(FALLBACK_ICON));
    assert!(!icons::is_registered("flerbenfrazzle"));
}

#[test]
fn monochrome_tint_overwrites_every_opaque_pixel() {
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let pixmap = render("square", 48, &DrawOptions::tinted(red));

    let mut seen_ink = false;
    for px in pixmap.data().chunks_exact(4) {
        if px[3] == 0 {
            continue;
        }
        seen_ink = true;
        // Premultiplied: red channel carries the alpha, green/blue are zero.
        assert_eq!(px[1], 0, "green channel should be erased by the tint");
        assert_eq!(px[2], 0, "blue channel should be erased by the tint");
    }
    assert!(seen_ink, "tinted icon rendered no visible pixels");
}

#[test]
fn mask_style_renders_white_coverage() {
    let pixmap = render("play", 48, &DrawOptions::mask());

    let mut seen_ink = false;
    for px in pixmap.data().chunks_exact(4) {
        if px[3] == 0 {
            continue;
        }
        seen_ink = true;
        // White tint premultiplied: every channel equals the alpha.
        assert_eq!(px[0], px[3]);
        assert_eq!(px[1], px[3]);
        assert_eq!(px[2], px[3]);
    }
    assert!(seen_ink, "mask rendered no coverage at all");
}

#[test]
fn registry_enumeration_has_no_duplicates() {
    for (i, a) in ICON_IDS.iter().enumerate() {
        assert!(icons::is_registered(a), "{a} listed but not registered");
        for b in &ICON_IDS[i + 1..] {
            assert_ne!(a, b, "duplicate icon id {a}");
        }
    }
}
