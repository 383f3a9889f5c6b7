mod particle_pass;
mod render_target;
mod shape_pass;

use anyhow::{Context, Result};

use crate::entity::Scene;

use particle_pass::ParticleRenderer;
use render_target::{RenderTarget, DEPTH_TEXTURE_FORMAT};
use shape_pass::ShapeRenderer;

// #0a1152, the page background, in linear space.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0033,
    g: 0.0056,
    b: 0.0843,
    a: 1.0,
};

pub struct Renderer {
    surface: wgpu::Surface,
    surface_format: wgpu::TextureFormat,
    device: wgpu::Device,
    queue: wgpu::Queue,
    depth_target: RenderTarget,
    particle_renderer: ParticleRenderer,
    shape_renderer: ShapeRenderer,
}

impl Renderer {
    pub async fn new(window: &winit::window::Window, scene: &Scene) -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::Backends::PRIMARY);
        let surface = unsafe { instance.create_surface(&window) };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No adapter found")?;

        let surface_format = surface
            .get_preferred_format(&adapter)
            .context("No preferred format found")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await
            .context("No device found")?;

        let size = window.inner_size();

        Self::configure_surface(&surface, &device, surface_format, size);

        let depth_target = RenderTarget::new(
            &device,
            "Depth Texture",
            DEPTH_TEXTURE_FORMAT,
            size.width,
            size.height,
        );

        let particle_renderer = ParticleRenderer::new(&device, surface_format, scene);
        let shape_renderer = ShapeRenderer::new(&device, surface_format, scene);

        Ok(Self {
            surface,
            surface_format,
            device,
            queue,
            depth_target,
            particle_renderer,
            shape_renderer,
        })
    }

    fn configure_surface(
        surface: &wgpu::Surface,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        size: winit::dpi::PhysicalSize<u32>,
    ) {
        surface.configure(
            device,
            &wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format,
                width: size.width,
                height: size.height,
                present_mode: wgpu::PresentMode::Fifo,
            },
        )
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        // Zero-sized surfaces are invalid; a minimized window sends one.
        if size.width == 0 || size.height == 0 {
            return;
        }

        Self::configure_surface(&self.surface, &self.device, self.surface_format, size);
        self.depth_target = RenderTarget::new(
            &self.device,
            "Depth Texture",
            DEPTH_TEXTURE_FORMAT,
            size.width,
            size.height,
        );
    }

    pub fn render(&mut self, scene: &Scene) {
        self.particle_renderer.update(&self.queue, scene);
        self.shape_renderer.update(&self.queue, scene);

        let surface_texture = self
            .surface
            .get_current_texture()
            .expect("Failed to get next surface texture");

        let surface_texture_view = surface_texture.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Command Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: true,
                    },
                }],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_target.texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: false,
                    }),
                    stencil_ops: None,
                }),
            });

            self.particle_renderer.draw(&mut render_pass);
            self.shape_renderer.draw(&mut render_pass);
        }

        self.queue.submit(Some(encoder.finish()));

        surface_texture.present();
    }
}
