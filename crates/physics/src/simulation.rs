use crate::{step, Command, Registry, StepSummary, World};
use rand::{rngs::StdRng, SeedableRng};

/// Owns the registry and hands it to the input, stepping and drawing code in
/// turn. Everything happens on the caller's thread.
#[derive(Clone, Debug)]
pub struct Simulation {
    registry: Registry,
    world: World,
    rng: StdRng,
    steps: u64,
}
impl Simulation {
    pub fn new(world: World) -> Self {
        Self::with_rng(world, StdRng::from_entropy())
    }
    pub fn with_rng(world: World, rng: StdRng) -> Self {
        Self {
            registry: Registry::new(),
            world,
            rng,
            steps: 0,
        }
    }
    pub fn apply(&mut self, command: Command) {
        command.apply(&mut self.registry, &mut self.rng);
    }
    pub fn advance(&mut self, dt: f64) -> StepSummary {
        self.steps += 1;
        step(&mut self.registry, &self.world, dt)
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
    pub fn set_world(&mut self, world: World) {
        log::debug!("World resized to {}x{}", world.width, world.height);
        self.world = world;
    }
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
