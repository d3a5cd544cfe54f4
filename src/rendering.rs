//! Rendering system with wgpu pipelines for the background layers.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use thiserror::Error;
use wgpu::util::DeviceExt;

use crate::params::{hex_to_linear, srgb_to_linear, FogParams, RenderConfig};
use crate::scene::BackgroundScene;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find suitable GPU adapter")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Uniform buffer shared by point and line layers
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LayerUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Linear rgb + opacity
    pub color: [f32; 4],
    /// Linear rgb + fog enabled
    pub fog_color: [f32; 4],
    /// Point size, fog near, fog far, twinkle time
    pub params: [f32; 4],
    /// Viewport width, height (pixels)
    pub viewport: [f32; 4],
    /// Pulsing star size, round sprite, radial fade
    pub flags: [f32; 4],
}

/// Uniform buffer for the screen-space overlay
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct BackdropUniforms {
    /// Width, height, scanline period, grain cell (pixels)
    pub params: [f32; 4],
    /// Linear rgb + peak opacity
    pub scanline: [f32; 4],
    /// Opacity
    pub grain: [f32; 4],
}

impl BackdropUniforms {
    pub fn new(config: &RenderConfig, width: u32, height: u32) -> Self {
        let [r, g, b] = hex_to_linear(config.scanline_color);
        Self {
            params: [
                width as f32,
                height as f32,
                config.scanline_period_px,
                config.grain_cell_px,
            ],
            scanline: [r, g, b, config.scanline_opacity],
            grain: [config.grain_opacity, 0.0, 0.0, 0.0],
        }
    }
}

/// How a layer's sprites and colour are drawn
#[derive(Debug, Clone, Copy)]
pub struct LayerStyle {
    /// Hex sRGB colour
    pub color: u32,
    pub opacity: f32,
    pub size: f32,
    pub fogged: bool,
    pub pulsing: bool,
    pub round: bool,
    pub fade: bool,
}

impl LayerStyle {
    /// Build the uniform block for this layer at the current frame
    pub fn uniforms(
        &self,
        view_proj: Mat4,
        model: Mat4,
        fog: &FogParams,
        time: f32,
        viewport: (u32, u32),
    ) -> LayerUniforms {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };
        let [r, g, b] = hex_to_linear(self.color);
        let [fr, fg, fb] = hex_to_linear(fog.color);

        LayerUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [r, g, b, self.opacity],
            fog_color: [fr, fg, fb, flag(self.fogged)],
            params: [self.size, fog.near, fog.far, time],
            viewport: [viewport.0 as f32, viewport.1 as f32, 0.0, 0.0],
            flags: [flag(self.pulsing), flag(self.round), flag(self.fade), 0.0],
        }
    }
}

/// Styles of every scene layer, derived from scene parameters
#[derive(Debug, Clone, Copy)]
pub struct SceneStyles {
    pub stars: LayerStyle,
    pub grid: LayerStyle,
    pub sphere: LayerStyle,
    pub shape: LayerStyle,
}

impl SceneStyles {
    pub fn from_scene(scene: &BackgroundScene) -> Self {
        let grid = scene.grid.params();
        let sphere = scene.sphere.params();
        let shape = scene.shape.params();
        let stars = scene.stars.params();

        // Lit colour under ambient light plus emissive of the same hue
        let lit = (shape.ambient_intensity + shape.emissive_intensity).min(1.0);
        let [r, g, b] = hex_to_linear(shape.color);
        let to_byte = |c: f32| {
            let srgb = if c <= 0.0031308 {
                c * 12.92
            } else {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            };
            ((srgb * 255.0).round() as u32).min(255)
        };
        let shape_color = (to_byte(r * lit) << 16) | (to_byte(g * lit) << 8) | to_byte(b * lit);

        Self {
            stars: LayerStyle {
                color: 0xffffff,
                opacity: 1.0,
                size: 1.0,
                fogged: false,
                pulsing: true,
                round: false,
                fade: stars.fade,
            },
            grid: LayerStyle {
                color: grid.color,
                opacity: grid.opacity,
                size: grid.point_size,
                fogged: true,
                pulsing: false,
                round: false,
                fade: false,
            },
            sphere: LayerStyle {
                color: sphere.color,
                opacity: sphere.opacity,
                size: sphere.point_size,
                fogged: true,
                pulsing: false,
                round: true,
                fade: false,
            },
            shape: LayerStyle {
                color: shape_color,
                opacity: shape.opacity,
                size: 1.0,
                fogged: true,
                pulsing: false,
                round: false,
                fade: false,
            },
        }
    }
}

/// Per-point style instances: size factor + linear tint
fn uniform_style(count: usize) -> Vec<[f32; 4]> {
    vec![[1.0, 1.0, 1.0, 1.0]; count]
}

fn star_style(scene: &BackgroundScene) -> Vec<[f32; 4]> {
    scene
        .stars
        .sizes()
        .iter()
        .zip(scene.stars.colors())
        .map(|(size, [r, g, b])| {
            [
                *size,
                srgb_to_linear(*r),
                srgb_to_linear(*g),
                srgb_to_linear(*b),
            ]
        })
        .collect()
}

/// GPU resources of one drawable layer
struct Layer {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    position_buffer: wgpu::Buffer,
    style_buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl Layer {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        positions: &[f32],
        style: Option<&[[f32; 4]]>,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} Uniform Buffer", label)),
            size: std::mem::size_of::<LayerUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", label)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Position Buffer", label)),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let style_buffer = style.map(|style| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Style Buffer", label)),
                contents: bytemuck::cast_slice(style),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        Self {
            uniform_buffer,
            bind_group,
            position_buffer,
            style_buffer,
            count: (positions.len() / 3) as u32,
        }
    }

    fn draw_points<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        if let Some(style) = &self.style_buffer {
            pass.set_vertex_buffer(1, style.slice(..));
        }
        pass.draw(0..6, 0..self.count);
    }

    fn draw_lines<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        pass.draw(0..self.count, 0..1);
    }
}

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
const STYLE_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

/// Additive blending (source alpha, one)
const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Rendering system managing wgpu device, pipelines, and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    point_pipeline: wgpu::RenderPipeline,
    additive_point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    stars: Layer,
    grid: Layer,
    sphere: Layer,
    shape: Layer,
    backdrop_buffer: wgpu::Buffer,
    backdrop_bind_group: wgpu::BindGroup,
    styles: SceneStyles,
    fog: FogParams,
    config: RenderConfig,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(
        window: std::sync::Arc<winit::window::Window>,
        scene: &BackgroundScene,
        config: RenderConfig,
        fog: FogParams,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance.create_surface(window)?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        log::info!("GPU adapter: {}", adapter.get_info().name);

        // Request device
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Load shaders
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let backdrop_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Backdrop Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/backdrop.wgsl").into()),
        });

        let uniform_layout_entry = wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let layer_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Layer Bind Group Layout"),
                entries: &[uniform_layout_entry],
            });

        let backdrop_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Backdrop Bind Group Layout"),
                entries: &[uniform_layout_entry],
            });

        let layer_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Layer Pipeline Layout"),
                bind_group_layouts: &[&layer_bind_group_layout],
                push_constant_ranges: &[],
            });

        let point_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POSITION_ATTRIBUTES,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &STYLE_ATTRIBUTES,
            },
        ];

        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRIBUTES,
        }];

        let layer_pipeline = |label: &str,
                              vs: &str,
                              fs: &str,
                              buffers: &[wgpu::VertexBufferLayout],
                              topology: wgpu::PrimitiveTopology,
                              blend: wgpu::BlendState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layer_pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &scene_shader,
                    entry_point: Some(vs),
                    buffers,
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &scene_shader,
                    entry_point: Some(fs),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_config.format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let point_pipeline = layer_pipeline(
            "Point Pipeline",
            "vs_point",
            "fs_point",
            &point_buffers,
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::BlendState::ALPHA_BLENDING,
        );
        let additive_point_pipeline = layer_pipeline(
            "Additive Point Pipeline",
            "vs_point",
            "fs_point",
            &point_buffers,
            wgpu::PrimitiveTopology::TriangleList,
            ADDITIVE_BLENDING,
        );
        let line_pipeline = layer_pipeline(
            "Wireframe Pipeline",
            "vs_line",
            "fs_line",
            &line_buffers,
            wgpu::PrimitiveTopology::LineList,
            wgpu::BlendState::ALPHA_BLENDING,
        );

        // Create backdrop uniforms and bind group
        let backdrop_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Backdrop Uniform Buffer"),
            contents: bytemuck::cast_slice(&[BackdropUniforms::new(
                &config,
                surface_config.width,
                surface_config.height,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let backdrop_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Backdrop Bind Group"),
            layout: &backdrop_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: backdrop_buffer.as_entire_binding(),
            }],
        });

        let backdrop_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Backdrop Pipeline Layout"),
                bind_group_layouts: &[&backdrop_bind_group_layout],
                push_constant_ranges: &[],
            });

        let backdrop_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Backdrop Pipeline"),
            layout: Some(&backdrop_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &backdrop_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &backdrop_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Create layer buffers
        let stars = Layer::new(
            &device,
            &layer_bind_group_layout,
            "Stars",
            scene.stars.positions(),
            Some(&star_style(scene)),
        );
        let grid = Layer::new(
            &device,
            &layer_bind_group_layout,
            "Wave Grid",
            scene.grid.positions(),
            Some(&uniform_style(scene.grid.positions().len() / 3)),
        );
        let sphere = Layer::new(
            &device,
            &layer_bind_group_layout,
            "Particle Sphere",
            scene.sphere.positions(),
            Some(&uniform_style(scene.sphere.positions().len() / 3)),
        );
        let shape = Layer::new(
            &device,
            &layer_bind_group_layout,
            "Wireframe Shape",
            scene.shape.line_positions(),
            None,
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            point_pipeline,
            additive_point_pipeline,
            line_pipeline,
            backdrop_pipeline,
            stars,
            grid,
            sphere,
            shape,
            backdrop_buffer,
            backdrop_bind_group,
            styles: SceneStyles::from_scene(scene),
            fog,
            config,
        })
    }

    /// Current surface size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Reconfigure the surface after a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);

        self.queue.write_buffer(
            &self.backdrop_buffer,
            0,
            bytemuck::cast_slice(&[BackdropUniforms::new(&self.config, width, height)]),
        );
    }

    /// Upload this frame's grid heights and layer transforms
    pub fn update(&self, scene: &BackgroundScene, view_proj: Mat4) {
        let viewport = self.size();
        let styles = &self.styles;

        self.queue.write_buffer(
            &self.grid.position_buffer,
            0,
            bytemuck::cast_slice(scene.grid.positions()),
        );

        let writes = [
            (
                &self.stars,
                styles
                    .stars
                    .uniforms(view_proj, Mat4::IDENTITY, &self.fog, scene.stars.time(), viewport),
            ),
            (
                &self.grid,
                styles
                    .grid
                    .uniforms(view_proj, Mat4::IDENTITY, &self.fog, 0.0, viewport),
            ),
            (
                &self.sphere,
                styles.sphere.uniforms(
                    view_proj,
                    scene.sphere.model_matrix(),
                    &self.fog,
                    0.0,
                    viewport,
                ),
            ),
            (
                &self.shape,
                styles.shape.uniforms(
                    view_proj,
                    scene.shape.model_matrix(),
                    &self.fog,
                    0.0,
                    viewport,
                ),
            ),
        ];

        for (layer, uniforms) in writes {
            self.queue
                .write_buffer(&layer.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        }
    }

    /// Render a frame
    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let [r, g, b] = hex_to_linear(self.config.background);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Farthest layers first; nothing writes depth
            render_pass.set_pipeline(&self.point_pipeline);
            self.stars.draw_points(&mut render_pass);

            render_pass.set_pipeline(&self.additive_point_pipeline);
            self.grid.draw_points(&mut render_pass);

            render_pass.set_pipeline(&self.point_pipeline);
            self.sphere.draw_points(&mut render_pass);

            render_pass.set_pipeline(&self.line_pipeline);
            self.shape.draw_lines(&mut render_pass);

            // Scanline and grain overlay
            render_pass.set_pipeline(&self.backdrop_pipeline);
            render_pass.set_bind_group(0, &self.backdrop_bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneParams;

    #[test]
    fn test_uniform_layout_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<LayerUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<LayerUniforms>(), 2 * 64 + 5 * 16);
        assert_eq!(std::mem::size_of::<BackdropUniforms>(), 48);
    }

    #[test]
    fn test_layer_uniform_flags() {
        let scene = BackgroundScene::new(SceneParams::default(), 0);
        let styles = SceneStyles::from_scene(&scene);
        let fog = FogParams::default();

        let stars = styles
            .stars
            .uniforms(Mat4::IDENTITY, Mat4::IDENTITY, &fog, 2.0, (800, 600));
        assert_eq!(stars.fog_color[3], 0.0);
        assert_eq!(stars.flags, [1.0, 0.0, 1.0, 0.0]);
        assert_eq!(stars.params[3], 2.0);
        assert_eq!(stars.viewport[..2], [800.0, 600.0]);

        let grid = styles
            .grid
            .uniforms(Mat4::IDENTITY, Mat4::IDENTITY, &fog, 0.0, (800, 600));
        assert_eq!(grid.fog_color[3], 1.0);
        assert_eq!(grid.color[3], 0.3);
        assert_eq!(grid.params[..3], [0.12, 5.0, 25.0]);
    }

    #[test]
    fn test_shape_colour_is_fully_lit() {
        let scene = BackgroundScene::new(SceneParams::default(), 0);
        let styles = SceneStyles::from_scene(&scene);

        // Ambient 0.5 + emissive 0.5 leaves the base colour unchanged
        assert_eq!(styles.shape.color, 0x22c55e);
    }

    #[test]
    fn test_star_style_converts_to_linear() {
        let scene = BackgroundScene::new(SceneParams::default(), 0);
        let style = star_style(&scene);

        assert_eq!(style.len(), 5000);
        for [size, r, g, b] in style {
            assert!(size >= 2.0 && size <= 4.0);
            assert!((r - srgb_to_linear(0.9)).abs() < 1e-6);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }
}
