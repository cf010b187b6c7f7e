use crate::{
    GRAVITY_CONSTANT, MASS_EXPONENT, MAX_RADIUS, MIN_RADIUS, RESIZE_MASS_DIVISOR,
    SPAWN_RADIUS_RANGE, SPAWN_SPEED,
};
use cgmath::{prelude::*, Vector2};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub mass: f64,
}
impl Body {
    /// A body whose mass is derived from its radius.
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64) -> Body {
        Body {
            pos,
            vel,
            radius,
            mass: radius.powi(MASS_EXPONENT),
        }
    }
    /// A body at `pos` with a random whole-number radius and a random drift.
    pub fn spawn<R: Rng + ?Sized>(pos: Vector2<f64>, rng: &mut R) -> Body {
        let radius = Uniform::from(SPAWN_RADIUS_RANGE).sample(rng);
        let speed = Uniform::new_inclusive(-SPAWN_SPEED, SPAWN_SPEED);
        let vel = Vector2::new(speed.sample(rng), speed.sample(rng));
        Body::new(pos, vel, f64::from(radius))
    }
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        (point - self.pos).magnitude2() <= self.radius * self.radius
    }
    pub fn overlaps(&self, other: &Body) -> bool {
        (other.pos - self.pos).magnitude() < self.radius + other.radius
    }
    /// Newtonian pull of `other` on `self`, pointing from `self` towards `other`.
    ///
    /// Coincident bodies yield a non-finite force. The stepper never asks for
    /// one, since any two bodies with positive radii at distance zero overlap
    /// and are merged instead.
    pub fn force_from(&self, other: &Body) -> Vector2<f64> {
        let rel_pos = other.pos - self.pos;
        let distance = rel_pos.magnitude();
        let force = GRAVITY_CONSTANT * self.mass * other.mass / distance.powi(2);
        force * rel_pos / distance
    }
    /// Takes over the mass and volume of `other`. Position and velocity are
    /// kept; the momentum of `other` is lost.
    pub fn absorb(&mut self, other: &Body) {
        self.mass += other.mass;
        self.radius = (self.radius.powi(3) + other.radius.powi(3)).cbrt();
    }
    /// Returns whether anything changed.
    pub fn grow(&mut self) -> bool {
        if self.radius >= MAX_RADIUS {
            return false;
        }
        self.radius = (self.radius + 1.0).min(MAX_RADIUS);
        self.mass += (self.mass / RESIZE_MASS_DIVISOR).floor();
        true
    }
    /// Returns whether anything changed.
    pub fn shrink(&mut self) -> bool {
        if self.radius <= MIN_RADIUS {
            return false;
        }
        self.radius = (self.radius - 1.0).max(MIN_RADIUS);
        self.mass -= (self.mass / RESIZE_MASS_DIVISOR).floor();
        true
    }
    /// Forward Euler: velocity first, then position with the new velocity.
    pub fn integrate(&mut self, force: Vector2<f64>, dt: f64) {
        self.vel += force / self.mass * dt;
        self.pos += self.vel * dt;
    }
}
