//! WebGPU renderer: one instanced billboard pipeline for shapes, particles
//! and head glows, plus a line-strip pipeline for the cursor tubes.
//!
//! The background pass and the tube overlay use different cameras (the page
//! composited two canvases; here they are two passes over one surface).

use crate::constants::CLEAR_BASE;
use folio_core::{Camera, TubeVertex, POINTS_PER_TUBE, TUBE_COUNT};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

/// One billboard instance: a shape, a particle, or a tube-head glow.
#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub rot: [f32; 3],
    pub glow: f32,
}

const SHADER_SRC: &str = r#"
struct Uniforms { view_proj: mat4x4<f32> };
@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
  @location(2) glow: f32,
};

fn rotation(e: vec3<f32>) -> mat3x3<f32> {
  let cx = cos(e.x); let sx = sin(e.x);
  let cy = cos(e.y); let sy = sin(e.y);
  let cz = cos(e.z); let sz = sin(e.z);
  let rx = mat3x3<f32>(
    vec3<f32>(1.0, 0.0, 0.0),
    vec3<f32>(0.0, cx, sx),
    vec3<f32>(0.0, -sx, cx));
  let ry = mat3x3<f32>(
    vec3<f32>(cy, 0.0, -sy),
    vec3<f32>(0.0, 1.0, 0.0),
    vec3<f32>(sy, 0.0, cy));
  let rz = mat3x3<f32>(
    vec3<f32>(cz, sz, 0.0),
    vec3<f32>(-sz, cz, 0.0),
    vec3<f32>(0.0, 0.0, 1.0));
  return rx * ry * rz;
}

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_scale: f32,
  @location(3) i_color: vec4<f32>,
  @location(4) i_rot: vec3<f32>,
  @location(5) i_glow: f32,
) -> VsOut {
  let local = rotation(i_rot) * vec3<f32>(v_pos * i_scale, 0.0);
  var out: VsOut;
  out.pos = u.view_proj * vec4<f32>(i_pos + local, 1.0);
  out.color = i_color;
  out.local = v_pos; // unscaled local for the disc mask
  out.glow = i_glow;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  // Soft disc within the unit quad
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.38, 0.5, r);

  // Emissive boost for glowing instances
  let rgb = inf.color.rgb * (1.0 + 0.9 * clamp(inf.glow, 0.0, 1.5));
  return vec4<f32>(rgb, shape_alpha * inf.color.a);
}

struct TubeOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
};

@vertex
fn vs_tube(@location(0) pos: vec3<f32>, @location(1) color: vec4<f32>) -> TubeOut {
  var out: TubeOut;
  out.pos = u.view_proj * vec4<f32>(pos, 1.0);
  out.color = color;
  return out;
}

@fragment
fn fs_tube(inf: TubeOut) -> @location(0) vec4<f32> {
  return inf.color;
}
"#;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    shape_pipeline: wgpu::RenderPipeline,
    tube_pipeline: wgpu::RenderPipeline,
    bg_uniform: wgpu::Buffer,
    fx_uniform: wgpu::Buffer,
    bg_bind_group: wgpu::BindGroup,
    fx_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    tube_vb: wgpu::Buffer,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let make_uniform = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<Uniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let bg_uniform = make_uniform("bg uniforms");
        let fx_uniform = make_uniform("fx uniforms");

        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<ShapeInstance>() * crate::constants::INSTANCE_CAPACITY)
                as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let tube_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tube_vb"),
            size: (std::mem::size_of::<TubeVertex>() * POINTS_PER_TUBE * TUBE_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        let make_bind_group = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let bg_bind_group = make_bind_group("bg bg", &bg_uniform);
        let fx_bind_group = make_bind_group("fx bg", &fx_uniform);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let shape_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ShapeInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 32,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 44,
                        shader_location: 5,
                    },
                ],
            },
        ];

        let shape_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shape pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &shape_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
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
        });

        let tube_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];

        let tube_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tube pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_tube"),
                buffers: &tube_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_tube"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            shape_pipeline,
            tube_pipeline,
            bg_uniform,
            fx_uniform,
            bg_bind_group,
            fx_bind_group,
            quad_vb,
            instance_vb,
            tube_vb,
            clear_color: wgpu::Color {
                r: CLEAR_BASE[0],
                g: CLEAR_BASE[1],
                b: CLEAR_BASE[2],
                a: 1.0,
            },
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Fold the scene's ambient light level into the clear color.
    pub fn set_ambient_clear(&mut self, level: f32) {
        let boost = 1.0 + level.clamp(0.0, 1.0) as f64;
        self.clear_color = wgpu::Color {
            r: CLEAR_BASE[0] * boost,
            g: CLEAR_BASE[1] * boost,
            b: CLEAR_BASE[2] * boost,
            a: 1.0,
        };
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Draw one frame: background instances under the scene camera, then the
    /// tube strips and head glows under the overlay camera.
    pub fn render(
        &mut self,
        bg_instances: &[ShapeInstance],
        fx_instances: &[ShapeInstance],
        tube_vertices: &[TubeVertex],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let aspect = self.aspect();
        let bg_cam = Camera::background(aspect);
        let fx_cam = Camera::tube_overlay(aspect);
        self.queue.write_buffer(
            &self.bg_uniform,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: (bg_cam.projection_matrix() * bg_cam.view_matrix()).to_cols_array_2d(),
            }),
        );
        self.queue.write_buffer(
            &self.fx_uniform,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: (fx_cam.projection_matrix() * fx_cam.view_matrix()).to_cols_array_2d(),
            }),
        );

        let bg_n = bg_instances.len() as u32;
        let fx_n = fx_instances.len() as u32;
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(bg_instances));
        self.queue.write_buffer(
            &self.instance_vb,
            (bg_instances.len() * std::mem::size_of::<ShapeInstance>()) as u64,
            bytemuck::cast_slice(fx_instances),
        );
        self.queue
            .write_buffer(&self.tube_vb, 0, bytemuck::cast_slice(tube_vertices));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        rpass.set_pipeline(&self.shape_pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.set_bind_group(0, &self.bg_bind_group, &[]);
        rpass.draw(0..6, 0..bg_n);
        rpass.set_bind_group(0, &self.fx_bind_group, &[]);
        rpass.draw(0..6, bg_n..bg_n + fx_n);

        rpass.set_pipeline(&self.tube_pipeline);
        rpass.set_vertex_buffer(0, self.tube_vb.slice(..));
        let per_tube = POINTS_PER_TUBE as u32;
        for i in 0..tube_vertices.len() as u32 / per_tube {
            rpass.draw(i * per_tube..(i + 1) * per_tube, 0..1);
        }

        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
