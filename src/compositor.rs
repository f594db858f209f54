//! Cached style compositor: renders fully-styled control backgrounds,
//! standalone icons and slider overlays on a CPU raster surface and
//! exports them as reusable bitmap resources. Every entry point memoizes
//! by a deterministic cache key; a hit returns the stored resource with
//! no rendering work.

use std::collections::HashMap;
use std::rc::Rc;

use image::RgbaImage;
use log::debug;
use tiny_skia::Pixmap;
use uuid::Uuid;

use crate::color::Rgba;
use crate::icons::{self, DrawOptions};
use crate::raster::{circle, fill_path, fill_rect, rounded_rect, stroke_path};
use crate::style::{apply_state, base_palette, ControlPalette, ControlState, RenderStyle, Variant};
use crate::theme::ThemePalette;
use crate::utils::{round_px, Position, Rectangle};

/// Logical padding reserved around a background so shadow and glow can
/// overhang the control bounds.
pub const SHADOW_PAD: f32 = 8.0;

/// An exported, self-contained image. Hosts hand the `RgbaImage` payload
/// to whatever image sink they display through; the `Uuid` gives cached
/// resources a stable identity.
#[derive(Debug)]
pub struct Bitmap {
    id: Uuid,
    logical_width: f32,
    logical_height: f32,
    image: RgbaImage,
}

impl Bitmap {
    fn from_pixmap(pixmap: &Pixmap, logical_width: f32, logical_height: f32) -> Self {
        let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
        for (src, dst) in pixmap.pixels().iter().zip(image.pixels_mut()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Self {
            id: Uuid::new_v4(),
            logical_width,
            logical_height,
            image,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn pixel_width(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.image.height()
    }

    /// Size the bitmap should be displayed at; the pixel size is larger by
    /// the supersample factor.
    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f32 {
        self.logical_height
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

pub type BitmapResource = Rc<Bitmap>;

#[derive(Debug, Clone, Copy)]
pub struct BackgroundRequest {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub variant: Variant,
    pub state: ControlState,
    pub accent: Option<Rgba>,
    pub elevated: bool,
}

impl BackgroundRequest {
    /// Resolves a semantic style into concrete geometry: the size tag
    /// picks the height, the shape tag the corner radius.
    pub fn from_style(style: RenderStyle, width: f32, radius: f32, elevated: bool) -> Self {
        let height = style.size.height();
        Self {
            width,
            height,
            radius: style.shape.corner_radius(height, radius),
            variant: style.variant,
            state: style.state,
            accent: style.accent,
            elevated,
        }
    }
}

/// Result of a background render. The fallback `fill`/`border` colors are
/// always present so callers can degrade to flat styling when no raster
/// could be produced.
#[derive(Debug, Clone)]
pub struct StyledBackground {
    pub resource: Option<BitmapResource>,
    pub fill: Rgba,
    pub border: Rgba,
    /// Logical distance from the bitmap edge to the control edge.
    pub content_inset: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct SliderRequest {
    pub width: f32,
    pub height: f32,
    /// Position of the knob along the track, 0..=1.
    pub value: f32,
    pub variant: Variant,
    pub state: ControlState,
    pub accent: Option<Rgba>,
}

/// Track/fill/knob placement for a slider overlay of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub track: Rectangle,
    pub fill: Rectangle,
    pub knob_center: Position,
    pub knob_radius: f32,
}

/// Pure geometry: `value` 0 puts the knob exactly at the track's left
/// edge, 1 exactly at the right edge, and the fill width scales linearly.
pub fn slider_geometry(width: f32, height: f32, value: f32) -> SliderGeometry {
    let v = value.clamp(0.0, 1.0);
    let track_h = (height * 0.32).max(2.0).min(height);
    let track = Rectangle::new(0.0, (height - track_h) * 0.5, width, track_h);
    let fill = Rectangle::new(track.x, track.y, track.width * v, track.height);
    SliderGeometry {
        track,
        fill,
        knob_center: Position {
            x: track.x + track.width * v,
            y: height * 0.5,
        },
        knob_radius: (height * 0.38).min(width * 0.5).max(1.0),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BackgroundKey {
    epoch: u64,
    variant: Variant,
    state: ControlState,
    accent: Option<[u8; 4]>,
    width: u32,
    height: u32,
    radius: u32,
    elevated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IconKey {
    id: String,
    size: u32,
    tint: Option<[u8; 4]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SliderKey {
    epoch: u64,
    variant: Variant,
    state: ControlState,
    accent: Option<[u8; 4]>,
    width: u32,
    height: u32,
    /// Value rounded to 3 decimals; bounds cache growth under drag input.
    value_milli: u16,
}

/// Supersample factor for crisp edges after downscaling in the host.
fn supersample(device_pixel_ratio: f32) -> f32 {
    (device_pixel_ratio.max(0.5) * 1.35).clamp(1.0, 3.0)
}

pub struct StyleCompositor {
    device_pixel_ratio: f32,
    backgrounds: HashMap<BackgroundKey, StyledBackground>,
    icons: HashMap<IconKey, BitmapResource>,
    sliders: HashMap<SliderKey, BitmapResource>,
}

impl StyleCompositor {
    pub fn new(device_pixel_ratio: f32) -> Self {
        Self {
            device_pixel_ratio,
            backgrounds: HashMap::new(),
            icons: HashMap::new(),
            sliders: HashMap::new(),
        }
    }

    /// Total number of cached entries across all three caches. Entries are
    /// never evicted; hosts that care can `clear` on their own schedule.
    pub fn cache_len(&self) -> usize {
        self.backgrounds.len() + self.icons.len() + self.sliders.len()
    }

    pub fn clear(&mut self) {
        self.backgrounds.clear();
        self.icons.clear();
        self.sliders.clear();
    }

    pub fn render_background(
        &mut self,
        theme: &ThemePalette,
        epoch: u64,
        req: &BackgroundRequest,
    ) -> StyledBackground {
        let key = BackgroundKey {
            epoch,
            variant: req.variant,
            state: req.state,
            accent: req.accent.map(Rgba::key_bytes),
            width: round_px(req.width),
            height: round_px(req.height),
            radius: round_px(req.radius),
            elevated: req.elevated,
        };
        if let Some(hit) = self.backgrounds.get(&key) {
            return hit.clone();
        }
        debug!(
            "compositing background {:?}/{:?} {}x{}",
            req.variant, req.state, key.width, key.height
        );

        let palette = apply_state(base_palette(req.variant, req.accent, theme), req.state);
        let resource = compose_background(&key, req.variant, req.state, &palette, self.device_pixel_ratio);
        let styled = StyledBackground {
            resource,
            fill: palette.fill,
            border: palette.border,
            content_inset: SHADOW_PAD,
        };
        self.backgrounds.insert(key, styled.clone());
        styled
    }

    /// Renders a single icon at the requested size, bypassing the atlas.
    /// A tint switches the registry to its monochrome path.
    pub fn render_icon(
        &mut self,
        id: &str,
        size: f32,
        tint: Option<Rgba>,
    ) -> Option<BitmapResource> {
        let key = IconKey {
            id: id.to_string(),
            size: round_px(size),
            tint: tint.map(Rgba::key_bytes),
        };
        if let Some(hit) = self.icons.get(&key) {
            return Some(Rc::clone(hit));
        }
        if key.size == 0 {
            return None;
        }

        let ss = supersample(self.device_pixel_ratio);
        let side = (key.size as f32 * ss).ceil();
        let mut pixmap = Pixmap::new(side as u32, side as u32)?;
        let options = match tint {
            Some(t) => DrawOptions::tinted(t),
            None => DrawOptions::glyph(),
        };
        icons::draw(&mut pixmap.as_mut(), id, 0.0, 0.0, side, &options);

        let resource = Rc::new(Bitmap::from_pixmap(
            &pixmap,
            key.size as f32,
            key.size as f32,
        ));
        self.icons.insert(key, Rc::clone(&resource));
        Some(resource)
    }

    pub fn render_slider_overlay(
        &mut self,
        theme: &ThemePalette,
        epoch: u64,
        req: &SliderRequest,
    ) -> Option<BitmapResource> {
        let value = if req.value.is_finite() {
            req.value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let key = SliderKey {
            epoch,
            variant: req.variant,
            state: req.state,
            accent: req.accent.map(Rgba::key_bytes),
            width: round_px(req.width),
            height: round_px(req.height),
            value_milli: (value * 1000.0).round() as u16,
        };
        if let Some(hit) = self.sliders.get(&key) {
            return Some(Rc::clone(hit));
        }
        if key.width == 0 || key.height == 0 {
            return None;
        }

        let palette = apply_state(base_palette(req.variant, req.accent, theme), req.state);
        let accent = req.accent.unwrap_or(theme.accent);
        let ss = supersample(self.device_pixel_ratio);
        let (pw, ph) = (
            (key.width as f32 * ss).ceil() as u32,
            (key.height as f32 * ss).ceil() as u32,
        );
        let mut pixmap = Pixmap::new(pw, ph)?;
        let rounded_value = key.value_milli as f32 / 1000.0;
        let geom = slider_geometry(pw as f32, ph as f32, rounded_value);

        {
            let mut pm = pixmap.as_mut();
            let track_r = geom.track.height * 0.5;
            if let Some(p) = rounded_rect(
                geom.track.x,
                geom.track.y,
                geom.track.width,
                geom.track.height,
                track_r,
            ) {
                fill_path(&mut pm, &p, palette.fill);
                stroke_path(&mut pm, &p, palette.border, (1.0 * ss).max(1.0));
            }
            if let Some(p) = rounded_rect(
                geom.fill.x,
                geom.fill.y,
                geom.fill.width,
                geom.fill.height,
                track_r,
            ) {
                fill_path(&mut pm, &p, apply_state_accent(accent, req.state));
            }
            if let Some(p) = circle(geom.knob_center.x, geom.knob_center.y, geom.knob_radius) {
                fill_path(&mut pm, &p, theme.on_accent);
                stroke_path(&mut pm, &p, palette.border, (1.0 * ss).max(1.0));
            }
        }

        let resource = Rc::new(Bitmap::from_pixmap(
            &pixmap,
            key.width as f32,
            key.height as f32,
        ));
        self.sliders.insert(key, Rc::clone(&resource));
        Some(resource)
    }
}

/// The slider fill follows the same state rules as control fills.
fn apply_state_accent(accent: Rgba, state: ControlState) -> Rgba {
    match state {
        ControlState::Idle => accent,
        ControlState::Hover => accent.lighten(0.08),
        ControlState::Pressed => accent.darken(0.12),
        ControlState::Active => accent.darken(0.06),
        ControlState::Disabled => accent.desaturate(0.8).scale_alpha(0.55, 0.18),
    }
}

/// Paints the layered background back-to-front at supersampled scale and
/// exports it. `None` for degenerate geometry.
fn compose_background(
    key: &BackgroundKey,
    variant: Variant,
    state: ControlState,
    palette: &ControlPalette,
    device_pixel_ratio: f32,
) -> Option<BitmapResource> {
    if key.width == 0 || key.height == 0 {
        return None;
    }
    let ss = supersample(device_pixel_ratio);
    let logical_w = key.width as f32 + SHADOW_PAD * 2.0;
    let logical_h = key.height as f32 + SHADOW_PAD * 2.0;
    let mut pixmap = Pixmap::new(
        (logical_w * ss).ceil() as u32,
        (logical_h * ss).ceil() as u32,
    )?;
    let mut pm = pixmap.as_mut();

    let rect = Rectangle::new(
        SHADOW_PAD * ss,
        SHADOW_PAD * ss,
        key.width as f32 * ss,
        key.height as f32 * ss,
    );
    let radius = key.radius as f32 * ss;
    let stroke_w = (1.0 * ss).max(1.0);
    let hovered_or_active = matches!(state, ControlState::Hover | ControlState::Active);

    // Outer glow halo.
    if !variant.is_flat() && palette.glow.a > 0.0 && hovered_or_active {
        for (grow, alpha) in [(4.0, 0.10), (2.5, 0.18), (1.2, 0.30)] {
            let g = grow * ss;
            if let Some(p) = rounded_rect(
                rect.x - g,
                rect.y - g,
                rect.width + g * 2.0,
                rect.height + g * 2.0,
                radius + g,
            ) {
                fill_path(&mut pm, &p, palette.glow.with_alpha(palette.glow.a * alpha));
            }
        }
    }

    // Drop shadow; pressed/active squash the offset to fake the control
    // sitting closer to the surface.
    if palette.shadow.a > 0.0 {
        let squash = if matches!(state, ControlState::Pressed | ControlState::Active) {
            0.4
        } else {
            1.0
        };
        let offset_y = (if key.elevated { 3.0 } else { 1.5 }) * squash * ss;
        let spread = (if key.elevated { 5.0 } else { 2.5 }) * ss;
        for (t, alpha) in [(1.0, 0.25), (0.66, 0.45), (0.33, 0.75)] {
            let g = spread * t;
            if let Some(p) = rounded_rect(
                rect.x - g * 0.5,
                rect.y + offset_y - g * 0.5,
                rect.width + g,
                rect.height + g,
                radius + g * 0.5,
            ) {
                fill_path(
                    &mut pm,
                    &p,
                    palette.shadow.with_alpha(palette.shadow.a * alpha * 0.5),
                );
            }
        }
    }

    // Border shell, then fill inset by the stroke width.
    if let Some(p) = rounded_rect(rect.x, rect.y, rect.width, rect.height, radius) {
        fill_path(&mut pm, &p, palette.border);
    }
    let inner = rect.inset(stroke_w);
    if let Some(p) = rounded_rect(
        inner.x,
        inner.y,
        inner.width,
        inner.height,
        (radius - stroke_w).max(0.0),
    ) {
        fill_path(&mut pm, &p, palette.fill);
    }

    // Flat variants stay matte; everything else gets depth cues.
    if !variant.is_flat() {
        if palette.glow.a > 0.0 {
            let glow_rect = rect.inset(stroke_w * 2.0);
            if let Some(p) = rounded_rect(
                glow_rect.x,
                glow_rect.y,
                glow_rect.width,
                glow_rect.height,
                (radius - stroke_w * 2.0).max(0.0),
            ) {
                stroke_path(
                    &mut pm,
                    &p,
                    palette.glow.with_alpha(palette.glow.a * 0.6),
                    stroke_w * 1.5,
                );
            }
        }

        // Gloss bands fading toward the bottom, then a darker sheen strip
        // along the bottom edge. Bands are inset past the corner radius so
        // they stay inside the rounded silhouette.
        let band_x = inner.x + radius.max(stroke_w);
        let band_w = inner.width - (radius.max(stroke_w)) * 2.0;
        if band_w > 0.0 {
            let band_h = inner.height * 0.11;
            for (i, alpha) in [0.10f32, 0.05, 0.025].iter().enumerate() {
                fill_rect(
                    &mut pm,
                    band_x,
                    inner.y + stroke_w + band_h * i as f32,
                    band_w,
                    band_h,
                    Rgba::WHITE.with_alpha(*alpha),
                );
            }
            fill_rect(
                &mut pm,
                band_x,
                inner.y + inner.height - stroke_w - band_h,
                band_w,
                band_h,
                Rgba::BLACK.with_alpha(0.10),
            );
        }
    }

    Some(Rc::new(Bitmap::from_pixmap(&pixmap, logical_w, logical_h)))
}
