use crate::{Body, Registry, World};
use cgmath::{prelude::*, Vector2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub merges: usize,
}

/// Advances every body in `registry` by `dt` seconds.
///
/// Bodies are visited in registry order and each one sees the others as they
/// are at that moment, so earlier bodies have already moved when later ones
/// are processed. Overlapping pairs merge instead of attracting; the lighter
/// body is flagged as absorbed at once and the registry is compacted when
/// the step is over.
pub fn step(registry: &mut Registry, world: &World, dt: f64) -> StepSummary {
    let bodies = registry.bodies_mut();
    let n = bodies.len();
    let mut absorbed = vec![false; n];
    let mut summary = StepSummary::default();

    for i in 0..n {
        if absorbed[i] {
            continue;
        }
        let mut force = Vector2::zero();
        for j in 0..n {
            if j == i || absorbed[j] {
                continue;
            }
            if bodies[i].overlaps(&bodies[j]) {
                let (survivor, lost) = survivor_and_absorbed(&bodies[..], i, j);
                let lost_body = bodies[lost];
                bodies[survivor].absorb(&lost_body);
                absorbed[lost] = true;
                summary.merges += 1;
                if lost == i {
                    break;
                }
            } else {
                force += bodies[i].force_from(&bodies[j]);
            }
        }
        if absorbed[i] {
            continue;
        }
        let body = &mut bodies[i];
        body.integrate(force, dt);
        wrap(body, world);
    }

    if summary.merges > 0 {
        let mut flags = absorbed.into_iter();
        bodies.retain(|_| !flags.next().unwrap_or(false));
        log::debug!("{} merges, {} bodies left", summary.merges, bodies.len());
    }
    summary
}

/// The heavier of the pair survives; `a` wins a tie.
fn survivor_and_absorbed(bodies: &[Body], a: usize, b: usize) -> (usize, usize) {
    if bodies[b].mass > bodies[a].mass {
        (b, a)
    } else {
        (a, b)
    }
}

/// One correction per axis; a single step never covers a whole world length.
fn wrap(body: &mut Body, world: &World) {
    body.pos.x = wrap_coordinate(body.pos.x, world.width);
    body.pos.y = wrap_coordinate(body.pos.y, world.height);
}

/// Keeps the result in `[0, length)` even when adding `length` to a tiny
/// negative value rounds up to `length` itself.
fn wrap_coordinate(value: f64, length: f64) -> f64 {
    if value >= length {
        value - length
    } else if value < 0.0 {
        let wrapped = value + length;
        if wrapped >= length {
            0.0
        } else {
            wrapped
        }
    } else {
        value
    }
}
