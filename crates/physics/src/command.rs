use crate::{Body, Registry};
use cgmath::Vector2;
use rand::Rng;

/// A discrete user action against the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Spawn(Vector2<f64>),
    Delete(Vector2<f64>),
    Grow(Vector2<f64>),
    Shrink(Vector2<f64>),
    Clear,
}
impl Command {
    /// Applies the command. Commands that hit no body do nothing.
    pub fn apply<R: Rng + ?Sized>(self, registry: &mut Registry, rng: &mut R) {
        match self {
            Command::Spawn(at) => {
                let body = Body::spawn(at, rng);
                log::debug!("Spawned {:?}", body);
                registry.add(body);
            }
            Command::Delete(at) => {
                if let Some(body) = registry.remove_at(at) {
                    log::debug!("Deleted {:?}", body);
                }
            }
            Command::Grow(at) | Command::Shrink(at) => {
                let Some(body) = registry.find_at_mut(at) else {
                    return;
                };
                let changed = match self {
                    Command::Grow(_) => body.grow(),
                    _ => body.shrink(),
                };
                if changed {
                    log::debug!("Resized to radius {} mass {:e}", body.radius, body.mass);
                }
            }
            Command::Clear => {
                log::debug!("Cleared {} bodies", registry.len());
                registry.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn resize_misses_are_ignored() {
        let mut rng = StdRng::seed_from_u64(0);
        let body = Body::new(Vector2::new(50.0, 50.0), Vector2::zero(), 10.0);
        let mut registry: Registry = [body].into_iter().collect();
        Command::Grow(Vector2::new(0.0, 0.0)).apply(&mut registry, &mut rng);
        Command::Delete(Vector2::new(0.0, 0.0)).apply(&mut registry, &mut rng);
        assert_eq!(registry.iter().copied().collect::<Vec<_>>(), vec![body]);
    }

    #[test]
    fn grow_then_shrink_hits_the_body_under_the_pointer() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut registry: Registry = [Body::new(Vector2::new(50.0, 50.0), Vector2::zero(), 10.0)]
            .into_iter()
            .collect();
        let at = Vector2::new(55.0, 50.0);
        Command::Grow(at).apply(&mut registry, &mut rng);
        assert_eq!(registry.find_at(at).map(|b| b.radius), Some(11.0));
        Command::Shrink(at).apply(&mut registry, &mut rng);
        Command::Shrink(at).apply(&mut registry, &mut rng);
        assert_eq!(registry.find_at(at).map(|b| b.radius), Some(9.0));
    }
}
