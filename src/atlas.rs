use std::collections::HashMap;

use anyhow::{anyhow, Result};
use log::info;
use tiny_skia::Pixmap;

use crate::gpu::GpuContext;
use crate::icons::{self, DrawOptions, ICON_IDS};

/// Fixed grid width of the atlas, in tiles.
pub const ATLAS_COLUMNS: u32 = 12;
/// Tile size below which glyph fidelity is unacceptable.
pub const MIN_TILE: u32 = 96;
/// Tile size used whenever the device allows it.
pub const PREFERRED_TILE: u32 = 128;

/// Normalized texture coordinates of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

/// Pure grid arithmetic for the atlas; split from the GPU upload so the
/// packing can be verified without a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    pub columns: u32,
    pub rows: u32,
    pub tile: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasLayout {
    /// Chooses the largest tile size, capped at [`PREFERRED_TILE`], such
    /// that the full grid fits within `max_dim` on both axes. The
    /// [`MIN_TILE`] fidelity floor wins over the device cap; every real
    /// device allows far more than `12 x 96` pixels.
    pub fn compute(icon_count: usize, max_dim: u32) -> Self {
        let columns = ATLAS_COLUMNS;
        let rows = ((icon_count as u32) + columns - 1) / columns.max(1);
        let rows = rows.max(1);
        let fit = (max_dim / columns).min(max_dim / rows);
        let tile = fit.clamp(MIN_TILE, PREFERRED_TILE);
        Self {
            columns,
            rows,
            tile,
            width: columns * tile,
            height: rows * tile,
        }
    }

    /// Pixel origin of the tile at `index` in enumeration order.
    pub fn tile_origin(&self, index: usize) -> (u32, u32) {
        let col = index as u32 % self.columns;
        let row = index as u32 / self.columns;
        (col * self.tile, row * self.tile)
    }

    /// Normalized UV rectangle of the tile at `index`.
    pub fn uv(&self, index: usize) -> UvRect {
        let (x, y) = self.tile_origin(index);
        UvRect {
            u0: x as f32 / self.width as f32,
            v0: y as f32 / self.height as f32,
            u1: (x + self.tile) as f32 / self.width as f32,
            v1: (y + self.tile) as f32 / self.height as f32,
        }
    }
}

/// One texture holding every registered icon as a white coverage mask,
/// tinted per draw by the batched quad renderer. Built once per GPU
/// context and immutable afterwards.
pub struct IconAtlas {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    layout: AtlasLayout,
    uv_by_id: HashMap<&'static str, UvRect>,
}

impl IconAtlas {
    /// Renders the full icon enumeration into one raster and uploads it.
    /// Failure to allocate the raster or the texture is fatal; a partial
    /// atlas is never returned.
    pub fn build(gpu: &GpuContext) -> Result<Self> {
        let layout = AtlasLayout::compute(ICON_IDS.len(), gpu.max_texture_dimension());
        let mut pixmap = Pixmap::new(layout.width, layout.height)
            .ok_or_else(|| anyhow!("failed to allocate {}x{} atlas raster", layout.width, layout.height))?;

        let mask = DrawOptions::mask();
        let mut uv_by_id = HashMap::with_capacity(ICON_IDS.len());
        for (index, id) in ICON_IDS.iter().enumerate() {
            let (x, y) = layout.tile_origin(index);
            icons::draw(
                &mut pixmap.as_mut(),
                id,
                x as f32,
                y as f32,
                layout.tile as f32,
                &mask,
            );
            uv_by_id.insert(*id, layout.uv(index));
        }

        // The pixmap is premultiplied already; upload it as-is.
        let texture = gpu.upload_rgba(
            "Icon Atlas",
            layout.width,
            layout.height,
            pixmap.data(),
            wgpu::TextureFormat::Rgba8Unorm,
        )?;
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        info!(
            "icon atlas built: {} icons, {}x{} ({}px tiles)",
            ICON_IDS.len(),
            layout.width,
            layout.height,
            layout.tile
        );

        Ok(Self {
            texture,
            view,
            layout,
            uv_by_id,
        })
    }

    pub fn uv(&self, id: &str) -> Option<UvRect> {
        self.uv_by_id.get(id).copied()
    }

    pub fn layout(&self) -> AtlasLayout {
        self.layout
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
