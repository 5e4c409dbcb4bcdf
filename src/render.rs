use crate::constants::{CLEAR_COLOR, FOG_DENSITY, INITIAL_SPRITE_CAPACITY, SPRITE_SIZE};
use crate::core::constants::SPRITE_LAYERS;
use crate::core::sprite::procedural_sprite;
use crate::core::{FrameView, SpriteInstance};
use web_sys as web;

mod helpers;
mod points;

use points::{create_points_resources, PointsGlobals, PointsResources};

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    sprite_texture: wgpu::Texture,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // Default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Sprite array starts out procedural; image sprites overwrite layers as they load
        let (sprite_texture, sprite_view) =
            helpers::create_sprite_array(&device, "sprite_array", SPRITE_SIZE, SPRITE_LAYERS);
        for layer in 0..SPRITE_LAYERS {
            let pixels = procedural_sprite(layer, SPRITE_SIZE);
            helpers::write_sprite_layer(&queue, &sprite_texture, layer, SPRITE_SIZE, &pixels);
        }
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let points = create_points_resources(&device, format, &sprite_view, &linear_sampler);
        let instance_buffer = helpers::create_instance_buffer(
            &device,
            std::mem::size_of::<SpriteInstance>(),
            INITIAL_SPRITE_CAPACITY,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            sprite_texture,
            instance_buffer,
            instance_capacity: INITIAL_SPRITE_CAPACITY,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    /// Replace one sprite layer with loaded image pixels (RGBA8, `SPRITE_SIZE`²).
    pub fn upload_sprite(&mut self, layer: u32, pixels: &[u8]) {
        if !helpers::write_sprite_layer(
            &self.queue,
            &self.sprite_texture,
            layer,
            SPRITE_SIZE,
            pixels,
        ) {
            log::warn!(
                "[sprites] rejected upload for layer {} ({} bytes)",
                layer,
                pixels.len()
            );
        }
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

    fn ensure_instance_capacity(&mut self, needed: usize) {
        if needed <= self.instance_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        self.instance_buffer = helpers::create_instance_buffer(
            &self.device,
            std::mem::size_of::<SpriteInstance>(),
            capacity,
        );
        self.instance_capacity = capacity;
        log::debug!("[gpu] sprite buffer grown to {}", capacity);
    }

    pub fn render(&mut self, frame_view: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let sprites = frame_view.sprites;
        self.ensure_instance_capacity(sprites.len());

        let camera = frame_view.camera;
        let globals = PointsGlobals {
            view: camera.view().to_cols_array_2d(),
            proj: camera.projection().to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            fog_density: FOG_DENSITY,
            size_scale: (camera.fov_y * 0.5).tan(),
        };
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&globals));
        if !sprites.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(sprites));
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
                label: Some("points_pass"),
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
            if !sprites.is_empty() {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.points.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                rpass.draw(0..6, 0..sprites.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
