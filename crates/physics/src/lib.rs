use std::ops::RangeInclusive;

pub const GRAVITY_CONSTANT: f64 = 6.674e-11;
pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 150.0;
pub const SPAWN_RADIUS_RANGE: RangeInclusive<u32> = 5..=15;
/// Per-axis bound on the speed of a freshly spawned body.
pub const SPAWN_SPEED: f64 = 30.0;
pub const MASS_EXPONENT: i32 = 13;
/// A resize step changes mass by `floor(mass / RESIZE_MASS_DIVISOR)`.
pub const RESIZE_MASS_DIVISOR: f64 = 13.0;

mod body;
mod command;
mod registry;
mod simulation;
mod step;

pub use body::Body;
pub use command::Command;
pub use registry::Registry;
pub use simulation::Simulation;
pub use step::{step, StepSummary};

/// Size of the toroidal world. Positions wrap into `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
}
impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
