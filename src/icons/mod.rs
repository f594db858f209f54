mod art;

use log::debug;
use tiny_skia::{Pixmap, PixmapMut, PixmapPaint, PremultipliedColorU8, Transform};

use crate::color::Rgba;

/// Glyph drawn for ids nobody registered. Icon ids often come from
/// loosely-typed labels, so unknown ids degrade instead of failing.
pub const FALLBACK_ICON: &str = "point";

/// Alpha multiplier applied by the monochrome pass to compensate for
/// anti-aliased edges going soft after recoloring.
const ALPHA_BOOST: f32 = 1.08;

/// A pure icon painter. Identical inputs must produce identical pixels,
/// and nothing outside `[x, x+size) x [y, y+size)` may be touched.
pub type DrawProcedure = fn(&mut PixmapMut, f32, f32, f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// Glyph over a rounded backing plate.
    Tile,
    /// Artwork only.
    Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    pub style: IconStyle,
    pub tint: Option<Rgba>,
    pub monochrome: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            style: IconStyle::Glyph,
            tint: None,
            monochrome: false,
        }
    }
}

impl DrawOptions {
    pub fn glyph() -> Self {
        Self::default()
    }

    pub fn tile() -> Self {
        Self {
            style: IconStyle::Tile,
            ..Self::default()
        }
    }

    /// White monochrome glyph: a pure coverage mask, tintable at draw time.
    /// This is what the atlas builder requests for every tile.
    pub fn mask() -> Self {
        Self {
            style: IconStyle::Glyph,
            tint: Some(Rgba::WHITE),
            monochrome: true,
        }
    }

    pub fn tinted(tint: Rgba) -> Self {
        Self {
            style: IconStyle::Glyph,
            tint: Some(tint),
            monochrome: true,
        }
    }
}

/// The compiled-in icon set, in atlas enumeration order. The order is part
/// of the atlas contract and must stay stable.
pub const ICON_IDS: &[&str] = &[
    "point",
    "line",
    "curve",
    "circle",
    "square",
    "triangle",
    "grid",
    "merge",
    "transform",
    "scatter",
    "noise",
    "blur",
    "extrude",
    "mirror",
    "array",
    "boolean",
    "subdivide",
    "smooth",
    "wireframe",
    "group",
    "switch",
    "output",
    "render",
    "camera",
    "light",
    "material",
    "text",
    "delete",
    "copy",
    "plus",
    "minus",
    "gear",
    "folder",
    "eye",
    "lock",
    "play",
];

/// Looks up the drawing procedure for an id. `None` for unknown ids; the
/// caller decides between fallback (registry) and skip (atlas).
pub fn procedure(id: &str) -> Option<DrawProcedure> {
    let p: DrawProcedure = match id {
        "point" => art::point,
        "line" => art::line,
        "curve" => art::curve,
        "circle" => art::circle,
        "square" => art::square,
        "triangle" => art::triangle,
        "grid" => art::grid,
        "merge" => art::merge,
        "transform" => art::transform,
        "scatter" => art::scatter,
        "noise" => art::noise,
        "blur" => art::blur,
        "extrude" => art::extrude,
        "mirror" => art::mirror,
        "array" => art::array,
        "boolean" => art::boolean,
        "subdivide" => art::subdivide,
        "smooth" => art::smooth,
        "wireframe" => art::wireframe,
        "group" => art::group,
        "switch" => art::switch,
        "output" => art::output,
        "render" => art::render,
        "camera" => art::camera,
        "light" => art::light,
        "material" => art::material,
        "text" => art::text,
        "delete" => art::delete,
        "copy" => art::copy,
        "plus" => art::plus,
        "minus" => art::minus,
        "gear" => art::gear,
        "folder" => art::folder,
        "eye" => art::eye,
        "lock" => art::lock,
        "play" => art::play,
        _ => return None,
    };
    Some(p)
}

pub fn is_registered(id: &str) -> bool {
    procedure(id).is_some()
}

/// Draws one icon into a square region of `target`. Unknown ids draw the
/// fallback glyph. The icon is composed on its own scratch tile and then
/// blitted at whole-pixel coordinates snapped inward, which is what
/// guarantees the region-confinement contract when many icons share one
/// canvas, fractional inputs included.
pub fn draw(target: &mut PixmapMut, id: &str, x: f32, y: f32, size: f32, options: &DrawOptions) {
    let ox = x.ceil();
    let oy = y.ceil();
    let side = ((x + size).floor() - ox).min((y + size).floor() - oy);
    if side < 1.0 {
        return;
    }
    let side_px = side as u32;
    let mut tile = match Pixmap::new(side_px, side_px) {
        Some(p) => p,
        None => return,
    };

    let proc_fn = procedure(id).unwrap_or_else(|| {
        debug!("unknown icon id {id:?}, drawing {FALLBACK_ICON:?} instead");
        // The fallback is always registered.
        art::point
    });

    {
        let mut pm = tile.as_mut();
        if options.style == IconStyle::Tile {
            art::tile_plate(&mut pm, 0.0, 0.0, side);
        }
        proc_fn(&mut pm, 0.0, 0.0, side);
    }

    if let Some(tint) = options.tint {
        if options.monochrome {
            monochrome_pass(&mut tile, tint);
        } else {
            modulate_pass(&mut tile, tint);
        }
    }

    target.draw_pixmap(
        ox as i32,
        oy as i32,
        tile.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Overwrites every covered pixel's color with the tint and multiplies its
/// alpha by the tint's alpha. One artwork definition serves any recolor.
fn monochrome_pass(pixmap: &mut Pixmap, tint: Rgba) {
    for px in pixmap.pixels_mut() {
        let a = px.alpha();
        if a == 0 {
            continue;
        }
        let coverage = ((a as f32 / 255.0) * tint.a * ALPHA_BOOST).clamp(0.0, 1.0);
        let na = (coverage * 255.0).round() as u8;
        let r = ((tint.r.clamp(0.0, 1.0) * coverage * 255.0).round() as u8).min(na);
        let g = ((tint.g.clamp(0.0, 1.0) * coverage * 255.0).round() as u8).min(na);
        let b = ((tint.b.clamp(0.0, 1.0) * coverage * 255.0).round() as u8).min(na);
        if let Some(p) = PremultipliedColorU8::from_rgba(r, g, b, na) {
            *px = p;
        }
    }
}

/// Channel-wise multiply, for tints that keep the artwork's own shading.
fn modulate_pass(pixmap: &mut Pixmap, tint: Rgba) {
    for px in pixmap.pixels_mut() {
        let a = px.alpha();
        if a == 0 {
            continue;
        }
        let na = ((a as f32 * tint.a.clamp(0.0, 1.0)).round() as u8).min(255);
        let r = ((px.red() as f32 * tint.r.clamp(0.0, 1.0) * tint.a.clamp(0.0, 1.0)).round()
            as u8)
            .min(na);
        let g = ((px.green() as f32 * tint.g.clamp(0.0, 1.0) * tint.a.clamp(0.0, 1.0)).round()
            as u8)
            .min(na);
        let b = ((px.blue() as f32 * tint.b.clamp(0.0, 1.0) * tint.a.clamp(0.0, 1.0)).round()
            as u8)
            .min(na);
        if let Some(p) = PremultipliedColorU8::from_rgba(r, g, b, na) {
            *px = p;
        }
    }
}
