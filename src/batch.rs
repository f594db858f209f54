//! Batched quad renderer: any number of icon draws between `begin` and
//! `flush` cost exactly one GPU draw call. This is the fast path for
//! frames that show dozens of icons at once (toolbars, node headers);
//! the cached compositor is the slow, exportable path.

use std::borrow::Cow;
use std::rc::Rc;

use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::atlas::{IconAtlas, UvRect};
use crate::color::Rgba;
use crate::gpu::GpuContext;
use crate::utils::Rectangle;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ResolutionUniform {
    size: [f32; 4],
}

/// CPU side of the batch: accumulates vertices between `begin` and the
/// next upload. Owned exclusively by one renderer; never shared across
/// frames.
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<QuadVertex>,
    resolution: [f32; 2],
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears accumulated vertices and records the frame resolution.
    pub fn begin(&mut self, width: f32, height: f32) {
        self.vertices.clear();
        self.resolution = [width.max(1.0), height.max(1.0)];
    }

    /// Appends two triangles mapping `uv` onto `rect`. Later quads draw
    /// over earlier ones.
    pub fn push_quad(&mut self, rect: Rectangle, uv: UvRect, tint: Rgba) {
        let tint = [tint.r, tint.g, tint.b, tint.a];
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
        let v = |x: f32, y: f32, u: f32, w: f32| QuadVertex {
            position: [x, y],
            uv: [u, w],
            tint,
        };
        self.vertices.extend_from_slice(&[
            v(x0, y0, uv.u0, uv.v0),
            v(x1, y0, uv.u1, uv.v0),
            v(x0, y1, uv.u0, uv.v1),
            v(x0, y1, uv.u0, uv.v1),
            v(x1, y0, uv.u1, uv.v0),
            v(x1, y1, uv.u1, uv.v1),
        ]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }

    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }
}

/// GPU side: pipeline, atlas binding and per-flush vertex upload.
pub struct QuadBatchRenderer {
    atlas: Rc<IconAtlas>,
    pipeline: wgpu::RenderPipeline,
    atlas_bind_group: wgpu::BindGroup,
    resolution_buffer: wgpu::Buffer,
    resolution_bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    batch: QuadBatch,
}

impl QuadBatchRenderer {
    /// Builds the pipeline against the shared atlas. Shader or pipeline
    /// failure here is fatal; no degraded renderer is returned.
    pub fn new(
        gpu: &GpuContext,
        atlas: Rc<IconAtlas>,
        target_format: wgpu::TextureFormat,
    ) -> Result<Self> {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Quad Batch Shader"),
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(
                    "../shaders/batch.wgsl"
                ))),
            });

        let atlas_bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("atlas_bind_group_layout"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                multisampled: false,
                                view_dimension: wgpu::TextureViewDimension::D2,
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let resolution_bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("resolution_bind_group_layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<
                                ResolutionUniform,
                            >()
                                as _),
                        },
                        count: None,
                    }],
                });

        let sampler = gpu.device.create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        let atlas_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &atlas_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(atlas.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("Atlas Bind Group"),
        });

        let resolution_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Resolution Uniform Buffer"),
                contents: bytemuck::bytes_of(&ResolutionUniform {
                    size: [1.0, 1.0, 0.0, 0.0],
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let resolution_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &resolution_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &resolution_buffer,
                    offset: 0,
                    size: None,
                }),
            }],
            label: Some("Resolution Bind Group"),
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Quad Batch Pipeline Layout"),
                bind_group_layouts: &[&atlas_bind_group_layout, &resolution_bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Quad Batch Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4],
                    }],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Ok(Self {
            atlas,
            pipeline,
            atlas_bind_group,
            resolution_buffer,
            resolution_bind_group,
            vertex_buffer: None,
            batch: QuadBatch::new(),
        })
    }

    /// Resets the batch for a new frame at the given pixel resolution.
    pub fn begin(&mut self, width: f32, height: f32) {
        self.batch.begin(width, height);
    }

    /// Queues one icon quad. Ids absent from the atlas are skipped; the
    /// atlas is a closed set, unlike the registry with its fallback glyph.
    pub fn draw_icon(&mut self, rect: Rectangle, id: &str, tint: Rgba) {
        if let Some(uv) = self.atlas.uv(id) {
            self.batch.push_quad(rect, uv, tint);
        }
    }

    pub fn quad_count(&self) -> usize {
        self.batch.quad_count()
    }

    /// Uploads the accumulated vertices and issues a single draw call into
    /// the given pass. Empty batches issue nothing.
    pub fn flush<'a>(&'a mut self, gpu: &GpuContext, rpass: &mut wgpu::RenderPass<'a>) {
        if self.batch.vertex_count() == 0 {
            return;
        }

        let [w, h] = self.batch.resolution();
        gpu.queue.write_buffer(
            &self.resolution_buffer,
            0,
            bytemuck::bytes_of(&ResolutionUniform {
                size: [w, h, 0.0, 0.0],
            }),
        );

        // Stored on self so the buffer outlives the pass borrowing it.
        let vertex_buffer = self.vertex_buffer.insert(gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Quad Batch Vertex Buffer"),
                contents: bytemuck::cast_slice(self.batch.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.atlas_bind_group, &[]);
        rpass.set_bind_group(1, &self.resolution_bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..self.batch.vertex_count() as u32, 0..1);
    }
}
