//! glyphforge renders a compiled-in library of vector icons and stateful
//! control chrome (buttons, sliders, panels) and exports the pixels as
//! reusable bitmap resources. Two render paths share one icon registry:
//! the atlas + batched quad renderer for GPU-composited overlays drawing
//! many icons per frame, and the cached style compositor for one-off,
//! host-composited images.

pub mod atlas;
pub mod batch;
pub mod color;
pub mod compositor;
pub mod gpu;
pub mod icons;
mod raster;
pub mod style;
pub mod theme;
pub mod utils;

pub use atlas::{AtlasLayout, IconAtlas, UvRect};
pub use batch::{QuadBatch, QuadBatchRenderer, QuadVertex};
pub use color::Rgba;
pub use compositor::{
    slider_geometry, BackgroundRequest, Bitmap, BitmapResource, SliderRequest, StyleCompositor,
    StyledBackground,
};
pub use gpu::GpuContext;
pub use style::{ControlSize, ControlState, RenderStyle, Shape, Variant};
pub use theme::{ThemePalette, ThemeResolver, ThemeVars};
pub use utils::{Position, Rectangle};

/// Owns the theme resolver and the compositor caches so hosts hold one
/// handle instead of module-level globals. The GPU fast path (atlas +
/// batch renderer) is constructed separately because it needs a device;
/// this facade covers every CPU render path.
pub struct RenderEngine {
    theme: ThemeResolver,
    compositor: StyleCompositor,
}

impl RenderEngine {
    pub fn new(device_pixel_ratio: f32) -> Self {
        Self {
            theme: ThemeResolver::new(),
            compositor: StyleCompositor::new(device_pixel_ratio),
        }
    }

    /// Re-resolves the palette when the theme id changes; a repeated id is
    /// a cheap no-op and keeps existing cache entries valid.
    pub fn set_theme(&mut self, vars: &ThemeVars) {
        self.theme.resolve(vars);
    }

    pub fn palette(&self) -> &ThemePalette {
        self.theme.palette()
    }

    pub fn render_background(&mut self, req: &BackgroundRequest) -> StyledBackground {
        self.compositor
            .render_background(self.theme.palette(), self.theme.epoch(), req)
    }

    pub fn render_icon(&mut self, id: &str, size: f32, tint: Option<Rgba>) -> Option<BitmapResource> {
        self.compositor.render_icon(id, size, tint)
    }

    pub fn render_slider_overlay(&mut self, req: &SliderRequest) -> Option<BitmapResource> {
        self.compositor
            .render_slider_overlay(self.theme.palette(), self.theme.epoch(), req)
    }

    pub fn cache_len(&self) -> usize {
        self.compositor.cache_len()
    }

    pub fn clear_caches(&mut self) {
        self.compositor.clear();
    }
}
