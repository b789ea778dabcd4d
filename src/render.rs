use crate::core::MeshScene;
use glam::Vec2;
use web_sys as web;

mod background;
mod mesh;

use background::{create_background_resources, BackgroundResources, BgUniforms};
use mesh::{create_mesh_resources, LineVertex, MeshResources, MeshUniforms, SpriteInstance};

/// Normalized surface position -> clip space, y flipped so 0 is the top.
#[inline]
fn to_clip(p: Vec2) -> [f32; 2] {
    [p.x * 2.0 - 1.0, 1.0 - p.y * 2.0]
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    background: BackgroundResources,
    mesh: MeshResources,

    width: u32,
    height: u32,
    // Frame staging, reused to avoid per-frame allocation.
    line_staging: Vec<LineVertex>,
    sprite_staging: Vec<SpriteInstance>,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, max_nodes: usize) -> anyhow::Result<Self> {
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
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

        let background = create_background_resources(&device, format);
        let mesh = create_mesh_resources(&device, format, max_nodes);
        let line_staging = Vec::with_capacity(mesh.line_capacity);
        let sprite_staging = Vec::with_capacity(mesh.sprite_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            background,
            mesh,
            width,
            height,
            line_staging,
            sprite_staging,
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

    /// Draw the three layers back-to-front: gradient, connection lines, node
    /// sprites. `dpr` scales sprite sizes to device pixels.
    pub fn render(&mut self, scene: &MeshScene, dpr: f32) -> Result<(), wgpu::SurfaceError> {
        let resolution = [self.width as f32, self.height as f32];
        let bg = BgUniforms {
            resolution,
            time: scene.time,
            _pad0: 0.0,
            pointer: [scene.pointer.current.x, scene.pointer.current.y],
            _pad1: [0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.background.uniform_buffer, 0, bytemuck::bytes_of(&bg));
        let mu = MeshUniforms {
            resolution,
            _pad: [0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.mesh.uniform_buffer, 0, bytemuck::bytes_of(&mu));

        self.line_staging.clear();
        for conn in &scene.connections {
            if self.line_staging.len() + 2 > self.mesh.line_capacity {
                break;
            }
            self.line_staging.push(LineVertex {
                pos: to_clip(conn.a),
                alpha: conn.alpha,
            });
            self.line_staging.push(LineVertex {
                pos: to_clip(conn.b),
                alpha: conn.alpha,
            });
        }
        self.sprite_staging.clear();
        let pointer = scene.pointer.current;
        for node in scene.nodes.iter().take(self.mesh.sprite_capacity) {
            self.sprite_staging.push(SpriteInstance {
                center: to_clip(node.pos),
                size_px: node.size * node.pulse(scene.time) * dpr,
                alpha: node.brightness(pointer),
            });
        }
        if !self.line_staging.is_empty() {
            self.queue.write_buffer(
                &self.mesh.line_buffer,
                0,
                bytemuck::cast_slice(&self.line_staging),
            );
        }
        if !self.sprite_staging.is_empty() {
            self.queue.write_buffer(
                &self.mesh.sprite_buffer,
                0,
                bytemuck::cast_slice(&self.sprite_staging),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.background.pipeline);
            rpass.set_bind_group(0, &self.background.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if !self.line_staging.is_empty() {
                rpass.set_pipeline(&self.mesh.line_pipeline);
                rpass.set_vertex_buffer(0, self.mesh.line_buffer.slice(..));
                rpass.draw(0..self.line_staging.len() as u32, 0..1);
            }

            if !self.sprite_staging.is_empty() {
                rpass.set_pipeline(&self.mesh.sprite_pipeline);
                rpass.set_bind_group(0, &self.mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.mesh.sprite_buffer.slice(..));
                rpass.draw(0..6, 0..self.sprite_staging.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
