use glyphforge::color::Rgba;
use glyphforge::theme::{ThemePalette, ThemeResolver, ThemeVars};

#[test]
fn repeated_ids_do_not_reparse_or_bump_the_epoch() {
    let mut resolver = ThemeResolver::new();
    let vars = ThemeVars::new("dark").with_var("accent", "#ff8800");

    resolver.resolve(&vars);
    let epoch = resolver.epoch();
    let palette = *resolver.palette();

    resolver.resolve(&vars);
    assert_eq!(resolver.epoch(), epoch);
    assert_eq!(*resolver.palette(), palette);
}

#[test]
fn switching_themes_bumps_the_epoch() {
    let mut resolver = ThemeResolver::new();
    resolver.resolve(&ThemeVars::new("dark"));
    let before = resolver.epoch();
    resolver.resolve(&ThemeVars::new("light"));
    assert_eq!(resolver.epoch(), before + 1);
}

#[test]
fn a_returning_theme_restores_its_epoch_and_palette() {
    let mut resolver = ThemeResolver::new();
    let dark = ThemeVars::new("dark").with_var("accent", "#ff8800");

    resolver.resolve(&dark);
    let epoch = resolver.epoch();
    let palette = *resolver.palette();

    resolver.resolve(&ThemeVars::new("light"));
    assert_ne!(resolver.epoch(), epoch);

    resolver.resolve(&dark);
    assert_eq!(resolver.epoch(), epoch, "a known id must keep its epoch");
    assert_eq!(*resolver.palette(), palette);
}

#[test]
fn declared_variables_override_the_defaults() {
    let mut resolver = ThemeResolver::new();
    let vars = ThemeVars::new("custom")
        .with_var("accent", "#ff0000")
        .with_var("surface", "#102030");
    let palette = resolver.resolve(&vars);

    assert_eq!(palette.accent, Rgba::from_u8(0xff, 0x00, 0x00, 0xff));
    assert_eq!(palette.surface, Rgba::from_u8(0x10, 0x20, 0x30, 0xff));
    assert_eq!(palette.border, ThemePalette::default().border);
}

#[test]
fn garbled_colors_fall_back_to_the_default_channel() {
    let mut resolver = ThemeResolver::new();
    let vars = ThemeVars::new("broken")
        .with_var("accent", "not-a-color")
        .with_var("border", "#123456");
    let palette = resolver.resolve(&vars);

    assert_eq!(palette.accent, ThemePalette::default().accent);
    assert_eq!(palette.border, Rgba::from_u8(0x12, 0x34, 0x56, 0xff));
}

#[test]
fn hex_parsing_accepts_short_long_and_alpha_forms() {
    assert_eq!(
        Rgba::parse_hex("#fff"),
        Some(Rgba::from_u8(0xff, 0xff, 0xff, 0xff))
    );
    assert_eq!(
        Rgba::parse_hex("#ff0000"),
        Some(Rgba::from_u8(0xff, 0x00, 0x00, 0xff))
    );
    assert_eq!(
        Rgba::parse_hex("#ff000080"),
        Some(Rgba::from_u8(0xff, 0x00, 0x00, 0x80))
    );
    assert_eq!(Rgba::parse_hex(""), None);
    assert_eq!(Rgba::parse_hex("#ggg"), None);
    assert_eq!(Rgba::parse_hex("#12345"), None);
}

#[test]
fn theme_vars_deserialize_from_host_json() {
    let vars: ThemeVars = serde_json::from_str(
        r##"{"id":"dark","vars":{"accent":"#ff8800"}}"##,
    )
    .unwrap();
    assert_eq!(vars.id, "dark");
    assert_eq!(vars.vars.get("accent").map(String::as_str), Some("#ff8800"));
}
