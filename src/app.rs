use log::{info, warn};
use rand::Rng;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    window::Window,
};

use crate::{
    entity::{Pointer, Scene},
    renderer::Renderer,
};

pub struct App {
    window: Window,
    scene: Scene,
    pointer: Pointer,
    renderer: Option<Renderer>,
}

impl App {
    pub async fn new(window: Window, rng: &mut impl Rng) -> Self {
        let scene = {
            let inner_size = window.inner_size();
            let aspect_ratio = inner_size.width as f32 / inner_size.height as f32;
            Scene::new(aspect_ratio, rng)
        };
        info!(
            "Scene ready: {} particles, {} shapes",
            scene.particles.positions.len(),
            scene.shapes.len()
        );

        // No graphics capability means no backdrop, not a dead window.
        let renderer = match Renderer::new(&window, &scene).await {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                warn!("Backdrop rendering disabled: {:#}", e);
                None
            }
        };

        Self {
            window,
            scene,
            pointer: Pointer::default(),
            renderer,
        }
    }

    pub fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        self.scene.camera.aspect_ratio = size.width as f32 / size.height as f32;

        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
    }

    pub fn on_pointer_move(&mut self, position: PhysicalPosition<f64>) {
        let size = self.window.inner_size();
        self.pointer = Pointer::from_viewport(position.x, position.y, size.width, size.height);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn render(&mut self) {
        self.scene.advance(self.pointer);

        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.scene);
        }
    }
}
