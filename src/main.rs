use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pollster::FutureExt as _;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use emberfield::{app::App, cli::Cli};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("emberfield")
        .with_inner_size(LogicalSize {
            width: cli.width,
            height: cli.height,
        })
        .build(&event_loop)
        .context("Failed to build window")?;

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_millis() as _
    });
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    info!("Seeded RNG with {}", seed);

    let mut app = App::new(window, &mut rng).block_on();

    event_loop.run(move |e, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match e {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => app.on_resize(size),
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    app.on_resize(*new_inner_size)
                }
                WindowEvent::CursorMoved { position, .. } => app.on_pointer_move(position),
                _ => (),
            },
            Event::MainEventsCleared => {
                app.request_redraw();
            }
            Event::RedrawRequested(..) => {
                app.render();
            }
            _ => (),
        }
    });
}
