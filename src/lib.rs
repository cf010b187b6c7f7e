mod clock;
mod graphics;
mod input;
mod run;

use crate::graphics::{Graphics, Parameters};
use anyhow::Context;
use winit::{
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder},
};

pub const WINDOW_TITLE: &str = "Gravity Simulator";

/// Sets up logging, the window and the GPU, then hands control to the event
/// loop. Only returns on setup failure.
pub fn start() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let (event_loop, window, graphics) = pollster::block_on(setup())?;
    log::info!("Starting event loop");
    run::run(event_loop, window, graphics)
}

async fn setup() -> anyhow::Result<(EventLoop<()>, Window, Graphics)> {
    log::info!("Setting up");
    let instance =
        wgpu::Instance::new(wgpu::util::backend_bits_from_env().unwrap_or(wgpu::Backends::all()));
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .build(&event_loop)
        .context("Couldn't create window")?;

    let surface = unsafe { instance.create_surface(&window) };
    let adapter = get_adapter(&instance, &surface).await?;
    let size: (u32, u32) = window.inner_size().into();

    let device_and_queue = get_device_and_queue(&adapter).await?;
    let parameters = Parameters {
        texture_format: *surface
            .get_supported_formats(&adapter)
            .first()
            .context("Surface is incompatible with the adapter")?,
        present_mode: {
            let supported = surface.get_supported_present_modes(&adapter);
            if supported.contains(&wgpu::PresentMode::FifoRelaxed) {
                wgpu::PresentMode::FifoRelaxed
            } else {
                wgpu::PresentMode::Fifo
            }
        },
    };

    let graphics = Graphics::initialize(parameters, surface, device_and_queue, size);
    Ok((event_loop, window, graphics))
}

async fn get_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface,
) -> anyhow::Result<wgpu::Adapter> {
    log::info!("Available adapters:");
    instance
        .enumerate_adapters(wgpu::Backends::all())
        .for_each(|adapter| log::info!("\t{:?}", adapter.get_info()));
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("Failed to acquire adapter")?;
    log::info!("Using {:?}", adapter.get_info());
    Ok(adapter)
}

async fn get_device_and_queue(
    adapter: &wgpu::Adapter,
) -> anyhow::Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                features: wgpu::Features::empty(),
                limits: wgpu::Limits::default(),
            },
            None, // Trace path
        )
        .await
        .context("Failed to acquire device")
}
