//! The compiled-in icon artwork: one pure procedure per id.
//!
//! Every procedure paints into `[x, x+s) x [y, y+s)` of the given pixmap
//! and nothing else. Treat this file as data; the registry contract lives
//! in the parent module.

use tiny_skia::{PathBuilder, PixmapMut, Stroke, StrokeDash, Transform};

use crate::color::Rgba;
use crate::raster::{circle as circle_path, fill_path, paint, rounded_rect, stroke_path};

const INK: Rgba = Rgba::rgb(0.84, 0.86, 0.90);
const DIM: Rgba = Rgba::rgb(0.56, 0.59, 0.65);
const ACCENT: Rgba = Rgba::rgb(0.40, 0.62, 0.98);
const WARM: Rgba = Rgba::rgb(0.98, 0.76, 0.34);
const PLATE: Rgba = Rgba::new(0.13, 0.14, 0.17, 0.92);
const PLATE_EDGE: Rgba = Rgba::new(0.30, 0.32, 0.38, 0.9);

/// Backing plate for the Tile style.
pub(super) fn tile_plate(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let m = s * 0.04;
    if let Some(path) = rounded_rect(x + m, y + m, s - m * 2.0, s - m * 2.0, s * 0.14) {
        fill_path(pm, &path, PLATE);
        stroke_path(pm, &path, PLATE_EDGE, (s * 0.02).max(1.0));
    }
}

pub(super) fn point(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    if let Some(p) = circle_path(x + c, y + c, s * 0.14) {
        fill_path(pm, &p, INK);
    }
    if let Some(p) = circle_path(x + c, y + c, s * 0.30) {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
}

pub(super) fn line(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.22, y + s * 0.78);
    pb.line_to(x + s * 0.78, y + s * 0.22);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
    for (cx, cy) in [(0.22, 0.78), (0.78, 0.22)] {
        if let Some(p) = circle_path(x + s * cx, y + s * cy, s * 0.08) {
            fill_path(pm, &p, ACCENT);
        }
    }
}

pub(super) fn curve(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.18, y + s * 0.80);
    pb.cubic_to(
        x + s * 0.18,
        y + s * 0.30,
        x + s * 0.82,
        y + s * 0.70,
        x + s * 0.82,
        y + s * 0.20,
    );
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn circle(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = circle_path(x + s * 0.5, y + s * 0.5, s * 0.32) {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn square(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.22, y + s * 0.22, s * 0.56, s * 0.56, s * 0.04) {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn triangle(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.5, y + s * 0.18);
    pb.line_to(x + s * 0.82, y + s * 0.78);
    pb.line_to(x + s * 0.18, y + s * 0.78);
    pb.close();
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn grid(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    for i in 0..4 {
        let t = 0.2 + 0.2 * i as f32;
        pb.move_to(x + s * t, y + s * 0.2);
        pb.line_to(x + s * t, y + s * 0.8);
        pb.move_to(x + s * 0.2, y + s * t);
        pb.line_to(x + s * 0.8, y + s * t);
    }
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, DIM, s * 0.045);
    }
}

pub(super) fn merge(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.18, y + s * 0.25);
    pb.line_to(x + s * 0.5, y + s * 0.5);
    pb.move_to(x + s * 0.18, y + s * 0.75);
    pb.line_to(x + s * 0.5, y + s * 0.5);
    pb.move_to(x + s * 0.5, y + s * 0.5);
    pb.line_to(x + s * 0.84, y + s * 0.5);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
    if let Some(p) = circle_path(x + s * 0.5, y + s * 0.5, s * 0.08) {
        fill_path(pm, &p, ACCENT);
    }
}

pub(super) fn transform(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    let mut pb = PathBuilder::new();
    pb.move_to(x + c, y + s * 0.16);
    pb.line_to(x + c, y + s * 0.84);
    pb.move_to(x + s * 0.16, y + c);
    pb.line_to(x + s * 0.84, y + c);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.06);
    }
    // Arrow heads on all four axis ends.
    let a = s * 0.09;
    for (tx, ty, dx, dy) in [
        (c, s * 0.16, 1.0, 1.0),
        (c, s * 0.84, 1.0, -1.0),
        (s * 0.16, c, 1.0, 1.0),
        (s * 0.84, c, -1.0, 1.0),
    ] {
        let mut hb = PathBuilder::new();
        if (ty - c).abs() > f32::EPSILON {
            hb.move_to(x + tx - a, y + ty + a * dy);
            hb.line_to(x + tx, y + ty);
            hb.line_to(x + tx + a, y + ty + a * dy);
        } else {
            hb.move_to(x + tx + a * dx, y + ty - a);
            hb.line_to(x + tx, y + ty);
            hb.line_to(x + tx + a * dx, y + ty + a);
        }
        if let Some(p) = hb.finish() {
            stroke_path(pm, &p, INK, s * 0.06);
        }
    }
}

pub(super) fn scatter(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    for (cx, cy, r) in [
        (0.28, 0.30, 0.07),
        (0.62, 0.22, 0.05),
        (0.76, 0.52, 0.08),
        (0.40, 0.62, 0.06),
        (0.26, 0.80, 0.05),
        (0.64, 0.80, 0.07),
    ] {
        if let Some(p) = circle_path(x + s * cx, y + s * cy, s * r) {
            fill_path(pm, &p, INK);
        }
    }
}

pub(super) fn noise(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.16, y + s * 0.55);
    let ys = [0.30, 0.68, 0.42, 0.75, 0.35, 0.60];
    for (i, ny) in ys.iter().enumerate() {
        let nx = 0.16 + (0.68 / ys.len() as f32) * (i as f32 + 1.0);
        pb.line_to(x + s * nx, y + s * ny);
    }
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.06);
    }
}

pub(super) fn blur(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    for (r, a) in [(0.16, 0.95), (0.24, 0.45), (0.32, 0.20)] {
        if let Some(p) = circle_path(x + c, y + c, s * r) {
            fill_path(pm, &p, INK.with_alpha(a));
        }
    }
}

pub(super) fn extrude(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.18, y + s * 0.34, s * 0.46, s * 0.46, 0.0) {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    if let Some(p) = rounded_rect(x + s * 0.36, y + s * 0.18, s * 0.46, s * 0.46, 0.0) {
        stroke_path(pm, &p, DIM, s * 0.055);
    }
    let mut pb = PathBuilder::new();
    for (fx, fy, tx, ty) in [
        (0.18, 0.34, 0.36, 0.18),
        (0.64, 0.34, 0.82, 0.18),
        (0.18, 0.80, 0.36, 0.64),
        (0.64, 0.80, 0.82, 0.64),
    ] {
        pb.move_to(x + s * fx, y + s * fy);
        pb.line_to(x + s * tx, y + s * ty);
    }
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, DIM, s * 0.04);
    }
}

pub(super) fn mirror(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut axis = PathBuilder::new();
    axis.move_to(x + s * 0.5, y + s * 0.14);
    axis.line_to(x + s * 0.5, y + s * 0.86);
    if let Some(p) = axis.finish() {
        stroke_path(pm, &p, DIM, s * 0.045);
    }
    let mut left = PathBuilder::new();
    left.move_to(x + s * 0.40, y + s * 0.30);
    left.line_to(x + s * 0.18, y + s * 0.50);
    left.line_to(x + s * 0.40, y + s * 0.70);
    left.close();
    if let Some(p) = left.finish() {
        fill_path(pm, &p, INK);
    }
    let mut right = PathBuilder::new();
    right.move_to(x + s * 0.60, y + s * 0.30);
    right.line_to(x + s * 0.82, y + s * 0.50);
    right.line_to(x + s * 0.60, y + s * 0.70);
    right.close();
    if let Some(p) = right.finish() {
        stroke_path(pm, &p, INK, s * 0.05);
    }
}

pub(super) fn array(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    for (ox, oy) in [(0.20, 0.20), (0.56, 0.20), (0.20, 0.56), (0.56, 0.56)] {
        if let Some(p) = rounded_rect(x + s * ox, y + s * oy, s * 0.24, s * 0.24, s * 0.03) {
            stroke_path(pm, &p, INK, s * 0.05);
        }
    }
}

pub(super) fn boolean(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = circle_path(x + s * 0.40, y + s * 0.5, s * 0.24) {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
    if let Some(p) = circle_path(x + s * 0.60, y + s * 0.5, s * 0.24) {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
    // Lens-shaped intersection.
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.5, y + s * 0.30);
    pb.cubic_to(
        x + s * 0.62,
        y + s * 0.38,
        x + s * 0.62,
        y + s * 0.62,
        x + s * 0.5,
        y + s * 0.70,
    );
    pb.cubic_to(
        x + s * 0.38,
        y + s * 0.62,
        x + s * 0.38,
        y + s * 0.38,
        x + s * 0.5,
        y + s * 0.30,
    );
    pb.close();
    if let Some(p) = pb.finish() {
        fill_path(pm, &p, ACCENT);
    }
}

pub(super) fn subdivide(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.2, y + s * 0.2, s * 0.6, s * 0.6, 0.0) {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.5, y + s * 0.2);
    pb.line_to(x + s * 0.5, y + s * 0.8);
    pb.move_to(x + s * 0.2, y + s * 0.5);
    pb.line_to(x + s * 0.8, y + s * 0.5);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, DIM, s * 0.04);
    }
    if let Some(p) = circle_path(x + s * 0.5, y + s * 0.5, s * 0.06) {
        fill_path(pm, &p, ACCENT);
    }
}

pub(super) fn smooth(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.16, y + s * 0.62);
    pb.cubic_to(
        x + s * 0.34,
        y + s * 0.30,
        x + s * 0.48,
        y + s * 0.78,
        x + s * 0.66,
        y + s * 0.46,
    );
    pb.cubic_to(
        x + s * 0.74,
        y + s * 0.34,
        x + s * 0.80,
        y + s * 0.36,
        x + s * 0.84,
        y + s * 0.40,
    );
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn wireframe(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    // Front face.
    pb.move_to(x + s * 0.22, y + s * 0.34);
    pb.line_to(x + s * 0.62, y + s * 0.34);
    pb.line_to(x + s * 0.62, y + s * 0.78);
    pb.line_to(x + s * 0.22, y + s * 0.78);
    pb.close();
    // Back face.
    pb.move_to(x + s * 0.38, y + s * 0.22);
    pb.line_to(x + s * 0.78, y + s * 0.22);
    pb.line_to(x + s * 0.78, y + s * 0.64);
    pb.line_to(x + s * 0.62, y + s * 0.64);
    // Connectors.
    pb.move_to(x + s * 0.22, y + s * 0.34);
    pb.line_to(x + s * 0.38, y + s * 0.22);
    pb.move_to(x + s * 0.62, y + s * 0.34);
    pb.line_to(x + s * 0.78, y + s * 0.22);
    pb.move_to(x + s * 0.62, y + s * 0.78);
    pb.line_to(x + s * 0.78, y + s * 0.64);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.045);
    }
}

pub(super) fn group(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.16, y + s * 0.16, s * 0.68, s * 0.68, s * 0.06) {
        let mut stroke = Stroke {
            width: s * 0.045,
            ..Stroke::default()
        };
        stroke.dash = StrokeDash::new(vec![s * 0.10, s * 0.07], 0.0);
        pm.stroke_path(&p, &paint(DIM), &stroke, Transform::identity(), None);
    }
    for (cx, cy) in [(0.38, 0.50), (0.62, 0.50)] {
        if let Some(p) = circle_path(x + s * cx, y + s * cy, s * 0.09) {
            fill_path(pm, &p, INK);
        }
    }
}

pub(super) fn switch(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.16, y + s * 0.34, s * 0.68, s * 0.32, s * 0.16) {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
    if let Some(p) = circle_path(x + s * 0.66, y + s * 0.5, s * 0.12) {
        fill_path(pm, &p, ACCENT);
    }
}

pub(super) fn output(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.58, y + s * 0.22);
    pb.line_to(x + s * 0.80, y + s * 0.22);
    pb.line_to(x + s * 0.80, y + s * 0.78);
    pb.line_to(x + s * 0.58, y + s * 0.78);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, DIM, s * 0.055);
    }
    let mut arrow = PathBuilder::new();
    arrow.move_to(x + s * 0.16, y + s * 0.5);
    arrow.line_to(x + s * 0.62, y + s * 0.5);
    arrow.move_to(x + s * 0.48, y + s * 0.36);
    arrow.line_to(x + s * 0.62, y + s * 0.5);
    arrow.line_to(x + s * 0.48, y + s * 0.64);
    if let Some(p) = arrow.finish() {
        stroke_path(pm, &p, INK, s * 0.06);
    }
}

pub(super) fn render(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.16, y + s * 0.22, s * 0.68, s * 0.56, s * 0.05) {
        stroke_path(pm, &p, INK, s * 0.05);
    }
    if let Some(p) = circle_path(x + s * 0.34, y + s * 0.38, s * 0.07) {
        fill_path(pm, &p, WARM);
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.22, y + s * 0.70);
    pb.line_to(x + s * 0.42, y + s * 0.48);
    pb.line_to(x + s * 0.56, y + s * 0.62);
    pb.line_to(x + s * 0.68, y + s * 0.52);
    pb.line_to(x + s * 0.78, y + s * 0.62);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
}

pub(super) fn camera(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.16, y + s * 0.30, s * 0.52, s * 0.40, s * 0.06) {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.68, y + s * 0.42);
    pb.line_to(x + s * 0.84, y + s * 0.32);
    pb.line_to(x + s * 0.84, y + s * 0.68);
    pb.line_to(x + s * 0.68, y + s * 0.58);
    pb.close();
    if let Some(p) = pb.finish() {
        fill_path(pm, &p, INK);
    }
    if let Some(p) = circle_path(x + s * 0.42, y + s * 0.5, s * 0.08) {
        stroke_path(pm, &p, DIM, s * 0.045);
    }
}

pub(super) fn light(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    if let Some(p) = circle_path(x + c, y + c, s * 0.16) {
        fill_path(pm, &p, WARM);
    }
    let mut pb = PathBuilder::new();
    for i in 0..8 {
        let ang = std::f32::consts::TAU * i as f32 / 8.0;
        let (sin, cos) = ang.sin_cos();
        pb.move_to(x + c + cos * s * 0.24, y + c + sin * s * 0.24);
        pb.line_to(x + c + cos * s * 0.34, y + c + sin * s * 0.34);
    }
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, WARM, s * 0.05);
    }
}

pub(super) fn material(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    if let Some(p) = circle_path(x + c, y + c, s * 0.30) {
        fill_path(pm, &p, DIM.with_alpha(0.85));
    }
    if let Some(p) = circle_path(x + s * 0.40, y + s * 0.40, s * 0.10) {
        fill_path(pm, &p, INK.with_alpha(0.9));
    }
}

pub(super) fn text(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.24, y + s * 0.24);
    pb.line_to(x + s * 0.76, y + s * 0.24);
    pb.move_to(x + s * 0.5, y + s * 0.24);
    pb.line_to(x + s * 0.5, y + s * 0.78);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.07);
    }
}

pub(super) fn delete(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.24, y + s * 0.30);
    pb.line_to(x + s * 0.76, y + s * 0.30);
    pb.move_to(x + s * 0.42, y + s * 0.30);
    pb.line_to(x + s * 0.42, y + s * 0.22);
    pb.line_to(x + s * 0.58, y + s * 0.22);
    pb.line_to(x + s * 0.58, y + s * 0.30);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.05);
    }
    if let Some(p) = rounded_rect(x + s * 0.30, y + s * 0.36, s * 0.40, s * 0.42, s * 0.04) {
        stroke_path(pm, &p, INK, s * 0.05);
    }
    let mut ribs = PathBuilder::new();
    for fx in [0.42, 0.5, 0.58] {
        ribs.move_to(x + s * fx, y + s * 0.44);
        ribs.line_to(x + s * fx, y + s * 0.70);
    }
    if let Some(p) = ribs.finish() {
        stroke_path(pm, &p, DIM, s * 0.04);
    }
}

pub(super) fn copy(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.30, y + s * 0.18, s * 0.46, s * 0.46, s * 0.05) {
        stroke_path(pm, &p, DIM, s * 0.05);
    }
    if let Some(p) = rounded_rect(x + s * 0.20, y + s * 0.32, s * 0.46, s * 0.46, s * 0.05) {
        fill_path(pm, &p, PLATE);
        stroke_path(pm, &p, INK, s * 0.05);
    }
}

pub(super) fn plus(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.5, y + s * 0.22);
    pb.line_to(x + s * 0.5, y + s * 0.78);
    pb.move_to(x + s * 0.22, y + s * 0.5);
    pb.line_to(x + s * 0.78, y + s * 0.5);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.08);
    }
}

pub(super) fn minus(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.22, y + s * 0.5);
    pb.line_to(x + s * 0.78, y + s * 0.5);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.08);
    }
}

pub(super) fn gear(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let c = s * 0.5;
    let mut pb = PathBuilder::new();
    for i in 0..8 {
        let ang = std::f32::consts::TAU * i as f32 / 8.0;
        let (sin, cos) = ang.sin_cos();
        pb.move_to(x + c + cos * s * 0.22, y + c + sin * s * 0.22);
        pb.line_to(x + c + cos * s * 0.32, y + c + sin * s * 0.32);
    }
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.08);
    }
    if let Some(p) = circle_path(x + c, y + c, s * 0.20) {
        stroke_path(pm, &p, INK, s * 0.06);
    }
    if let Some(p) = circle_path(x + c, y + c, s * 0.07) {
        fill_path(pm, &p, DIM);
    }
}

pub(super) fn folder(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.18, y + s * 0.30);
    pb.line_to(x + s * 0.42, y + s * 0.30);
    pb.line_to(x + s * 0.50, y + s * 0.38);
    pb.line_to(x + s * 0.82, y + s * 0.38);
    pb.line_to(x + s * 0.82, y + s * 0.74);
    pb.line_to(x + s * 0.18, y + s * 0.74);
    pb.close();
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.055);
    }
}

pub(super) fn eye(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.16, y + s * 0.5);
    pb.cubic_to(
        x + s * 0.32,
        y + s * 0.26,
        x + s * 0.68,
        y + s * 0.26,
        x + s * 0.84,
        y + s * 0.5,
    );
    pb.cubic_to(
        x + s * 0.68,
        y + s * 0.74,
        x + s * 0.32,
        y + s * 0.74,
        x + s * 0.16,
        y + s * 0.5,
    );
    pb.close();
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    if let Some(p) = circle_path(x + s * 0.5, y + s * 0.5, s * 0.10) {
        fill_path(pm, &p, INK);
    }
}

pub(super) fn lock(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    if let Some(p) = rounded_rect(x + s * 0.26, y + s * 0.44, s * 0.48, s * 0.36, s * 0.06) {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.34, y + s * 0.44);
    pb.line_to(x + s * 0.34, y + s * 0.36);
    pb.cubic_to(
        x + s * 0.34,
        y + s * 0.22,
        x + s * 0.66,
        y + s * 0.22,
        x + s * 0.66,
        y + s * 0.36,
    );
    pb.line_to(x + s * 0.66, y + s * 0.44);
    if let Some(p) = pb.finish() {
        stroke_path(pm, &p, INK, s * 0.055);
    }
    if let Some(p) = circle_path(x + s * 0.5, y + s * 0.60, s * 0.05) {
        fill_path(pm, &p, INK);
    }
}

pub(super) fn play(pm: &mut PixmapMut, x: f32, y: f32, s: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x + s * 0.32, y + s * 0.22);
    pb.line_to(x + s * 0.78, y + s * 0.5);
    pb.line_to(x + s * 0.32, y + s * 0.78);
    pb.close();
    if let Some(p) = pb.finish() {
        fill_path(pm, &p, INK);
    }
}
