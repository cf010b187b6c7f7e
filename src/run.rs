use crate::{
    clock::FrameClock,
    graphics::Graphics,
    input::{Action, Pointer},
};
use instant::Instant;
use physics::{Simulation, World};
use std::time::Duration;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

pub struct Stats {
    frame_number: u64,
    merges: u64,
    instant_start: Instant,
    time_spent_in_physics: Duration,
    time_spent_in_graphics: Duration,
}

/// Input, then one physics step, then one render, at most once per frame.
pub fn run(event_loop: EventLoop<()>, window: Window, mut graphics: Graphics) -> ! {
    let mut simulation = Simulation::new(world_of(window.inner_size()));
    let mut pointer = Pointer::default();
    let mut clock = FrameClock::new(Instant::now());

    let mut stats = Stats {
        frame_number: 0,
        merges: 0,
        instant_start: Instant::now(),
        time_spent_in_physics: Duration::ZERO,
        time_spent_in_graphics: Duration::ZERO,
    };

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent {
            window_id: _id,
            event: w_event,
        } => match w_event {
            WindowEvent::Resized(size)
            | WindowEvent::ScaleFactorChanged {
                scale_factor: _,
                new_inner_size: &mut size,
            } => {
                graphics.resize(size.into());
                if size.width > 0 && size.height > 0 {
                    simulation.set_world(world_of(size));
                }
            }
            w_event => match pointer.translate(&w_event) {
                Some(Action::Quit) => {
                    log::info!("Quitting with {} bodies", simulation.registry().len());
                    *control_flow = ControlFlow::Exit;
                }
                Some(Action::Command(command)) => simulation.apply(command),
                None => {}
            },
        },
        Event::MainEventsCleared => {
            if let ControlFlow::ExitWithCode(_) = *control_flow {
                return;
            }
            let now = Instant::now();
            if let Some(dt) = clock.tick(now) {
                let summary = simulation.advance(dt.as_secs_f64());
                stats.merges += summary.merges as u64;
                stats.time_spent_in_physics += Instant::now().duration_since(now);
                window.request_redraw();
            }
            control_flow.set_wait_until(clock.next_frame());
        }
        Event::RedrawRequested(_window_id) => {
            let instant_pre_graphics = Instant::now();
            if let Err(error) = graphics.render(simulation.registry()) {
                log::warn!("Skipping frame: {error}");
            }
            stats.time_spent_in_graphics += Instant::now().duration_since(instant_pre_graphics);
            stats.frame_number += 1;
            if stats.frame_number.is_power_of_two() || stats.frame_number % 1024 == 0 {
                log::info!(
                    "Elapsed {}s total, {}ms physics ({} steps, {} merges), {}ms graphics ({} frames), {} bodies",
                    Instant::now().duration_since(stats.instant_start).as_secs(),
                    stats.time_spent_in_physics.as_millis(),
                    simulation.steps(),
                    stats.merges,
                    stats.time_spent_in_graphics.as_millis(),
                    stats.frame_number,
                    simulation.registry().len(),
                );
            }
        }
        _ => {}
    })
}

fn world_of(PhysicalSize { width, height }: PhysicalSize<u32>) -> World {
    World::new(f64::from(width), f64::from(height))
}
