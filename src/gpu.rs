use anyhow::{anyhow, Context, Result};
use pollster::block_on;
use wgpu::util::DeviceExt;

/// Owned GPU handle shared by the atlas and the batched quad renderer.
/// Construction is the only fallible phase; render paths built on top of a
/// live context never see transient GPU errors.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    max_texture_dimension: u32,
}

impl GpuContext {
    /// Creates a context with no surface, for hosts that composite the
    /// results themselves or for offscreen use.
    pub fn headless() -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let adapter = block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: None,
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter found"))?;

        let (device, queue) = block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            },
            None,
        ))
        .context("failed to create GPU device")?;

        let max_texture_dimension = device.limits().max_texture_dimension_2d;
        Ok(Self {
            device,
            queue,
            max_texture_dimension,
        })
    }

    /// Wraps an existing device/queue pair owned by the host.
    pub fn from_parts(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let max_texture_dimension = device.limits().max_texture_dimension_2d;
        Self {
            device,
            queue,
            max_texture_dimension,
        }
    }

    /// The one capability the engine queries: the largest single texture
    /// dimension the device supports.
    pub fn max_texture_dimension(&self) -> u32 {
        self.max_texture_dimension
    }

    /// Uploads a tightly-packed RGBA raster as a new texture, padding rows
    /// to the 256-byte copy alignment wgpu requires.
    pub(crate) fn upload_rgba(
        &self,
        label: &str,
        width: u32,
        height: u32,
        data: &[u8],
        format: wgpu::TextureFormat,
    ) -> Result<wgpu::Texture> {
        let bytes_per_pixel = 4usize;
        let expected = width as usize * height as usize * bytes_per_pixel;
        if data.len() != expected {
            return Err(anyhow!(
                "raster size mismatch for {label}: got {} bytes, expected {expected}",
                data.len()
            ));
        }

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[format],
        });

        const COPY_BYTES_PER_ROW_ALIGNMENT: usize = 256;
        let unpadded_bytes_per_row = width as usize * bytes_per_pixel;
        let padded_bytes_per_row = (unpadded_bytes_per_row + COPY_BYTES_PER_ROW_ALIGNMENT - 1)
            / COPY_BYTES_PER_ROW_ALIGNMENT
            * COPY_BYTES_PER_ROW_ALIGNMENT;

        let mut padded_buffer = vec![0u8; padded_bytes_per_row * height as usize];
        for y in 0..height as usize {
            let dst_start = y * padded_bytes_per_row;
            let src_start = y * unpadded_bytes_per_row;
            padded_buffer[dst_start..dst_start + unpadded_bytes_per_row]
                .copy_from_slice(&data[src_start..src_start + unpadded_bytes_per_row]);
        }

        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Raster Upload Buffer"),
                contents: &padded_buffer,
                usage: wgpu::BufferUsages::COPY_SRC,
            });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Texture Copy Encoder"),
            });
        encoder.copy_buffer_to_texture(
            wgpu::ImageCopyBuffer {
                buffer: &buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row as u32),
                    rows_per_image: Some(height),
                },
            },
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        Ok(texture)
    }
}
