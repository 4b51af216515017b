use glam::{Vec3, Vec4};
use landscape_core::{OrbitCamera, RenderFrame, Renderer, Rgb, WINDOW_TITLE};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const MSAA_SAMPLES: u32 = 4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    light: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    pos: [f32; 3],
    normal: [f32; 3],
    color: [f32; 4],
}

/// Depth (and optional multisampled color) attachments sized to the surface.
struct Targets {
    depth_view: wgpu::TextureView,
    msaa: Option<(wgpu::TextureView, wgpu::TextureView)>, // (color, depth)
}

impl Targets {
    fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration, msaa: bool) -> Self {
        let make = |label, format, sample_count| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some(label),
                    size: wgpu::Extent3d {
                        width: config.width,
                        height: config.height,
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        };
        Self {
            depth_view: make("depth", DEPTH_FORMAT, 1),
            msaa: msaa.then(|| {
                (
                    make("msaa_color", config.format, MSAA_SAMPLES),
                    make("msaa_depth", DEPTH_FORMAT, MSAA_SAMPLES),
                )
            }),
        }
    }
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    index_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertex: device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh_vb"),
                size: (std::mem::size_of::<Vertex>() * vertex_capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
            index: device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh_ib"),
                size: (std::mem::size_of::<u32>() * index_capacity) as u64,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
            vertex_capacity,
            index_capacity,
            index_count: 0,
        }
    }
}

pub struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    msaa_pipeline: Option<wgpu::RenderPipeline>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    targets: Targets,
    mesh: MeshBuffers,
    title: String,
}

fn build_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    samples: u32,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 24,
                shader_location: 2,
            },
        ],
    }];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(if samples > 1 { "landscape_msaa" } else { "landscape" }),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: samples,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = *surface_caps
            .formats
            .first()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let msaa_supported = [format, DEPTH_FORMAT].iter().all(|f| {
            adapter
                .get_texture_format_features(*f)
                .flags
                .sample_count_supported(MSAA_SAMPLES)
        });
        log::info!(
            "[gpu] adapter={} format={:?} msaa={}",
            adapter.get_info().name,
            format,
            msaa_supported
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("landscape_shader"),
            source: wgpu::ShaderSource::Wgsl(landscape_core::LANDSCAPE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = build_pipeline(&device, &shader, &pipeline_layout, format, 1);
        let msaa_pipeline = msaa_supported
            .then(|| build_pipeline(&device, &shader, &pipeline_layout, format, MSAA_SAMPLES));
        let targets = Targets::new(&device, &config, msaa_supported);

        // Sized for a settled frame; grows if a frame ever needs more.
        let n = landscape_core::MESH_DENSITY_SETTLED;
        let mesh = MeshBuffers::new(&device, n * n, (n - 1) * (n - 1) * 6);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            msaa_pipeline,
            uniform_buffer,
            bind_group,
            targets,
            mesh,
            title: WINDOW_TITLE.to_string(),
        })
    }

    pub fn window(&self) -> &winit::window::Window {
        self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.targets = Targets::new(&self.device, &self.config, self.msaa_pipeline.is_some());
    }

    fn upload_mesh(&mut self, frame: &RenderFrame) {
        let srgb = self.config.format.is_srgb();
        let indices = frame.mesh.triangle_indices();
        let vertices = build_vertices(frame, &indices, srgb);
        if vertices.len() > self.mesh.vertex_capacity || indices.len() > self.mesh.index_capacity {
            log::debug!("[gpu] growing mesh buffers to {} vertices", vertices.len());
            self.mesh = MeshBuffers::new(&self.device, vertices.len(), indices.len());
        }
        self.queue
            .write_buffer(&self.mesh.vertex, 0, bytemuck::cast_slice(&vertices));
        self.queue
            .write_buffer(&self.mesh.index, 0, bytemuck::cast_slice(&indices));
        self.mesh.index_count = indices.len() as u32;
    }

    fn update_title(&mut self, frame: &RenderFrame) {
        let title = match &frame.title {
            Some(overlay) => format!("{} | {}", WINDOW_TITLE, overlay.text),
            None => WINDOW_TITLE.to_string(),
        };
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }
}

impl Renderer for GpuState<'_> {
    fn submit(&mut self, frame: &RenderFrame) -> anyhow::Result<()> {
        let surface_frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                log::debug!("[gpu] surface reconfigured, frame skipped");
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("[gpu] surface timeout, frame skipped");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = surface_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.upload_mesh(frame);

        let aspect = self.config.width as f32 / self.config.height.max(1) as f32;
        let camera = OrbitCamera::framing(
            frame.elevation,
            frame.azimuth,
            frame.mesh.max_radius(),
            aspect,
        );
        // Key light sits above and in front of the viewer.
        let light_dir = (camera.eye_direction() + camera.up() * 0.6).normalize();
        let shade = if frame.shade { 1.0 } else { 0.0 };
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_proj().to_cols_array_2d(),
                light: light_dir.extend(shade).to_array(),
            }),
        );

        let srgb = self.config.format.is_srgb();
        let clear = surface_color(frame.background, srgb);
        let (pipeline, color_view, resolve_target, depth_view) =
            match (&self.msaa_pipeline, &self.targets.msaa) {
                (Some(p), Some((msaa_color, msaa_depth))) if frame.antialias => {
                    (p, msaa_color, Some(&view), msaa_depth)
                }
                _ => (&self.pipeline, &view, None, &self.targets.depth_view),
            };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("landscape_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.x as f64,
                            g: clear.y as f64,
                            b: clear.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.mesh.vertex.slice(..));
            rpass.set_index_buffer(self.mesh.index.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        surface_frame.present();

        self.update_title(frame);
        if let Some(overlay) = &frame.title {
            log::debug!(
                "[gpu] settled frame '{}' title color {}",
                overlay.text,
                overlay.color.to_hex_string()
            );
        } else {
            log::trace!("[gpu] interactive frame, {} vertices", frame.mesh.vertex_count());
        }
        Ok(())
    }
}

/// Theme colors are sRGB; an sRGB surface expects linear values.
fn to_surface_space(c: Vec3, srgb: bool) -> Vec3 {
    if srgb {
        c.powf(2.2)
    } else {
        c
    }
}

fn surface_color(color: Rgb, srgb: bool) -> Vec3 {
    to_surface_space(color.to_unit(), srgb)
}

/// Narrows positions to f32, derives smooth normals and colors by height.
fn build_vertices(frame: &RenderFrame, indices: &[u32], srgb: bool) -> Vec<Vertex> {
    let mesh = &frame.mesh;
    let positions: Vec<Vec3> = mesh.positions().iter().map(|p| p.as_vec3()).collect();

    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    mesh.height_scalars()
        .into_iter()
        .zip(positions.iter().zip(normals))
        .map(|(t, (&pos, n))| {
            // Cells collapse at the poles; fall back to the radial direction.
            let normal = n.try_normalize().unwrap_or_else(|| pos.normalize_or_zero());
            let rgb = to_surface_space(frame.theme.sample(t), srgb);
            Vertex {
                pos: pos.to_array(),
                normal: normal.to_array(),
                color: Vec4::from((rgb, frame.alpha)).to_array(),
            }
        })
        .collect()
}
